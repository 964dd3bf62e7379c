//! Clock layout table - the twelve fixed positions of each face
//!
//! Offsets are in face space: centered on the pivot, y grows downward,
//! 0° points at 12 o'clock and angles increase clockwise.

/// Radius the table offsets were authored against
pub const FACE_RADIUS: f32 = 90.0;

/// Which value the face is currently capturing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hours,
    Minutes,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Hours => write!(f, "hours"),
            Mode::Minutes => write!(f, "minutes"),
        }
    }
}

/// One selectable position on the face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockPoint {
    pub number: u32,
    pub offset_x: f32,
    pub offset_y: f32,
    /// Degrees clockwise from 12 o'clock
    pub angle: f32,
    /// Minute ticks are styled apart from hour numerals
    pub is_minute_tick: bool,
}

const fn hour(number: u32, offset_x: f32, offset_y: f32, angle: f32) -> ClockPoint {
    ClockPoint {
        number,
        offset_x,
        offset_y,
        angle,
        is_minute_tick: false,
    }
}

const fn minute(number: u32, offset_x: f32, offset_y: f32, angle: f32) -> ClockPoint {
    ClockPoint {
        number,
        offset_x,
        offset_y,
        angle,
        is_minute_tick: true,
    }
}

pub const HOUR_POINTS: [ClockPoint; 12] = [
    hour(1, 45.0, -78.0, 30.0),
    hour(2, 78.0, -45.0, 60.0),
    hour(3, 90.0, 0.0, 90.0),
    hour(4, 78.0, 45.0, 120.0),
    hour(5, 45.0, 78.0, 150.0),
    hour(6, 0.0, 90.0, 180.0),
    hour(7, -45.0, 78.0, 210.0),
    hour(8, -78.0, 45.0, 240.0),
    hour(9, -90.0, 0.0, 270.0),
    hour(10, -78.0, -45.0, 300.0),
    hour(11, -45.0, -78.0, 330.0),
    hour(12, 0.0, -90.0, 0.0),
];

pub const MINUTE_POINTS: [ClockPoint; 12] = [
    minute(0, 0.0, -90.0, 0.0),
    minute(5, 45.0, -78.0, 30.0),
    minute(10, 78.0, -45.0, 60.0),
    minute(15, 90.0, 0.0, 90.0),
    minute(20, 78.0, 45.0, 120.0),
    minute(25, 45.0, 78.0, 150.0),
    minute(30, 0.0, 90.0, 180.0),
    minute(35, -45.0, 78.0, 210.0),
    minute(40, -78.0, 45.0, 240.0),
    minute(45, -90.0, 0.0, 270.0),
    minute(50, -78.0, -45.0, 300.0),
    minute(55, -45.0, -78.0, 330.0),
];

/// The ordered points of the face for `mode`
pub fn points_for(mode: Mode) -> &'static [ClockPoint; 12] {
    match mode {
        Mode::Hours => &HOUR_POINTS,
        Mode::Minutes => &MINUTE_POINTS,
    }
}

/// Hand angle for a value on the given face. 12 o'clock is 0° on the hour face.
pub fn angle_for(mode: Mode, number: u32) -> f32 {
    match mode {
        Mode::Hours => ((number * 30) % 360) as f32,
        Mode::Minutes => (number * 6) as f32,
    }
}

/// Look up `number` on the face for `mode`
pub fn find_point(mode: Mode, number: u32) -> Option<&'static ClockPoint> {
    points_for(mode).iter().find(|p| p.number == number)
}

/// Resolve a face-space position to the point whose label disc contains it
///
/// Overlapping discs resolve to the nearest point.
pub fn point_at(mode: Mode, x: f32, y: f32, hit_radius: f32) -> Option<&'static ClockPoint> {
    let dist_sq = |p: &ClockPoint| {
        let dx = x - p.offset_x;
        let dy = y - p.offset_y;
        dx * dx + dy * dy
    };

    points_for(mode)
        .iter()
        .filter(|p| dist_sq(*p) <= hit_radius * hit_radius)
        .min_by(|a, b| dist_sq(*a).total_cmp(&dist_sq(*b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_face_numbers() {
        let numbers: Vec<u32> = points_for(Mode::Hours).iter().map(|p| p.number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_minute_face_numbers() {
        let numbers: Vec<u32> = points_for(Mode::Minutes).iter().map(|p| p.number).collect();
        assert_eq!(numbers, (0..60).step_by(5).collect::<Vec<_>>());
    }

    #[test]
    fn test_table_angles_follow_numbers() {
        for mode in [Mode::Hours, Mode::Minutes] {
            for p in points_for(mode) {
                assert_eq!(p.angle, angle_for(mode, p.number), "{} {}", mode, p.number);
            }
        }
        assert_eq!(find_point(Mode::Hours, 12).unwrap().angle, 0.0);
    }

    #[test]
    fn test_offsets_project_angle_onto_radius() {
        for mode in [Mode::Hours, Mode::Minutes] {
            for p in points_for(mode) {
                let radius = (p.offset_x * p.offset_x + p.offset_y * p.offset_y).sqrt();
                assert!(
                    (radius - FACE_RADIUS).abs() < 1.0,
                    "point {} sits {} from center",
                    p.number,
                    radius
                );

                // Clockwise from up, in y-down coordinates
                let projected = p.offset_x.atan2(-p.offset_y).to_degrees().rem_euclid(360.0);
                let diff = (projected - p.angle).abs();
                assert!(
                    diff < 1.0 || (360.0 - diff) < 1.0,
                    "point {} projects to {}° but claims {}°",
                    p.number,
                    projected,
                    p.angle
                );
            }
        }
    }

    #[test]
    fn test_tick_flags() {
        assert!(HOUR_POINTS.iter().all(|p| !p.is_minute_tick));
        assert!(MINUTE_POINTS.iter().all(|p| p.is_minute_tick));
    }

    #[test]
    fn test_find_point_rejects_other_face() {
        assert!(find_point(Mode::Hours, 0).is_none());
        assert!(find_point(Mode::Minutes, 7).is_none());
        assert!(find_point(Mode::Minutes, 55).is_some());
    }

    #[test]
    fn test_point_at_hits_each_label() {
        for mode in [Mode::Hours, Mode::Minutes] {
            for p in points_for(mode) {
                let hit = point_at(mode, p.offset_x + 3.0, p.offset_y - 2.0, 15.0);
                assert_eq!(hit.map(|h| h.number), Some(p.number));
            }
        }
    }

    #[test]
    fn test_point_at_misses_center_and_outside() {
        assert!(point_at(Mode::Hours, 0.0, 0.0, 15.0).is_none());
        assert!(point_at(Mode::Minutes, 0.0, -130.0, 15.0).is_none());
    }

    #[test]
    fn test_point_at_prefers_nearest() {
        // Between 3 and 4, closer to 4
        let hit = point_at(Mode::Hours, 82.0, 30.0, 40.0);
        assert_eq!(hit.map(|h| h.number), Some(4));
    }
}
