//! View model - what the face looks like for a given selection
//!
//! Pure data; the nannou app draws it without consulting the state again.

use crate::layout::{points_for, Mode};
use crate::selection::SelectionState;

/// A clock number as it should be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct PointView {
    pub number: u32,
    pub label: String,
    pub offset_x: f32,
    pub offset_y: f32,
    pub highlighted: bool,
    pub is_minute_tick: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaceView {
    pub mode: Mode,
    /// Zero-padded hour readout
    pub hours_field: String,
    /// Zero-padded minute readout
    pub minutes_field: String,
    pub points: Vec<PointView>,
    /// Degrees clockwise from 3 o'clock (y-down), i.e. `selected_angle - 90`
    pub hand_rotation_deg: f32,
}

impl FaceView {
    /// Unit vector of the hand in face space
    pub fn hand_direction(&self) -> (f32, f32) {
        let r = self.hand_rotation_deg.to_radians();
        (r.cos(), r.sin())
    }

    pub fn highlighted(&self) -> Option<&PointView> {
        self.points.iter().find(|p| p.highlighted)
    }
}

pub fn render(state: &SelectionState) -> FaceView {
    let points = points_for(state.mode)
        .iter()
        .map(|p| PointView {
            number: p.number,
            label: p.number.to_string(),
            offset_x: p.offset_x,
            offset_y: p.offset_y,
            highlighted: p.number == state.selected_number,
            is_minute_tick: p.is_minute_tick,
        })
        .collect();

    FaceView {
        mode: state.mode,
        hours_field: format!("{:02}", state.hours),
        minutes_field: format!("{:02}", state.minutes),
        points,
        hand_rotation_deg: state.selected_angle - 90.0,
    }
}
