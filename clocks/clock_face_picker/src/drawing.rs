//! Drawing module - clock face, hand and toast rendering
//!
//! Draws a `FaceView` with nannou's Draw API. Face space is y-down, nannou's
//! world is y-up; `FaceLayout` converts between the two.

use std::time::Instant;

use nannou::prelude::*;
use shared::{FaceView, PointView, FACE_RADIUS};

/// Radius of a label disc, in face units
const LABEL_RADIUS: f32 = 15.0;
const PIVOT_RADIUS: f32 = 5.0;
const HAND_LENGTH: f32 = FACE_RADIUS;
/// Outer edge of the face disc, in face units
const DISC_RADIUS: f32 = FACE_RADIUS + LABEL_RADIUS + 8.0;

/// Most toasts on screen at once; older ones are dropped
pub const MAX_TOASTS: usize = 2;
const TOAST_HEIGHT: f32 = 32.0;
const TOAST_MARGIN: f32 = 8.0;

/// A toast notification message
pub struct ToastMessage {
    pub text: String,
    pub created_at: Instant,
    pub duration_secs: f32,
}

impl ToastMessage {
    pub fn new(text: String, duration_secs: f32) -> Self {
        Self {
            text,
            created_at: Instant::now(),
            duration_secs,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs_f32() >= self.duration_secs
    }
}

/// Drop expired toasts, then the oldest beyond `MAX_TOASTS`
pub fn trim_toasts(toasts: &mut Vec<ToastMessage>) {
    toasts.retain(|toast| !toast.is_expired());
    if toasts.len() > MAX_TOASTS {
        let excess = toasts.len() - MAX_TOASTS;
        toasts.drain(..excess);
    }
}

/// Color palette for the picker
pub mod colors {
    use nannou::prelude::*;

    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 245,
        green: 245,
        blue: 245,
        standard: std::marker::PhantomData,
    };
    pub const FACE: Srgb<u8> = Srgb {
        red: 232,
        green: 232,
        blue: 232,
        standard: std::marker::PhantomData,
    };
    pub const FACE_RIM: Srgb<u8> = Srgb {
        red: 204,
        green: 204,
        blue: 204,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_PRIMARY: Srgb<u8> = Srgb {
        red: 40,
        green: 44,
        blue: 52,
        standard: std::marker::PhantomData,
    };
    pub const TICK_TEXT: Srgb<u8> = Srgb {
        red: 0,
        green: 0,
        blue: 0,
        standard: std::marker::PhantomData,
    };
    pub const SELECTED: Srgb<u8> = Srgb {
        red: 0,
        green: 0,
        blue: 255,
        standard: std::marker::PhantomData,
    };
    pub const SELECTED_TEXT: Srgb<u8> = Srgb {
        red: 255,
        green: 255,
        blue: 255,
        standard: std::marker::PhantomData,
    };
    pub const HAND: Srgb<u8> = Srgb {
        red: 0,
        green: 0,
        blue: 0,
        standard: std::marker::PhantomData,
    };
    pub const TOAST_BG: Srgb<u8> = Srgb {
        red: 50,
        green: 50,
        blue: 50,
        standard: std::marker::PhantomData,
    };
}

/// Window space taken by the egui panels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelInsets {
    pub top: f32,
    pub bottom: f32,
}

/// Where the face sits in the window and how big it is
#[derive(Debug, Clone, Copy)]
pub struct FaceLayout {
    pub center: Point2,
    /// World units per face unit
    pub scale: f32,
    /// Area between the panels left for the face
    pub canvas: Rect,
    /// Strip under the face reserved for toasts
    pub toast_strip: Rect,
}

impl FaceLayout {
    pub fn calculate(window_rect: Rect, insets: PanelInsets, face_radius: f32) -> Self {
        let strip_height = MAX_TOASTS as f32 * (TOAST_HEIGHT + TOAST_MARGIN);
        let bottom = window_rect.bottom() + insets.bottom;
        let top = (window_rect.top() - insets.top).max(bottom);
        let strip_top = (bottom + strip_height).min(top);

        let toast_strip = horizontal_band(window_rect, bottom, strip_top);
        let canvas = horizontal_band(window_rect, strip_top, top);

        // Keep the whole disc, rim included, inside the canvas
        let fit = canvas.w().min(canvas.h()) / 2.0 * (FACE_RADIUS / DISC_RADIUS);
        let radius = face_radius.min(fit).max(1.0);
        FaceLayout {
            center: canvas.xy(),
            scale: radius / FACE_RADIUS,
            canvas,
            toast_strip,
        }
    }

    /// Whether a world position lands on the face canvas
    pub fn contains(&self, world: Point2) -> bool {
        self.canvas.contains(world)
    }

    /// Face-space offset to a world position
    pub fn to_world(&self, x: f32, y: f32) -> Point2 {
        self.center + vec2(x, -y) * self.scale
    }

    /// World position to a face-space offset
    pub fn to_face(&self, world: Point2) -> (f32, f32) {
        let local = (world - self.center) / self.scale;
        (local.x, -local.y)
    }
}

/// Full-width slice of `rect` between two heights
fn horizontal_band(rect: Rect, bottom: f32, top: f32) -> Rect {
    Rect::from_x_y_w_h(rect.x(), (bottom + top) / 2.0, rect.w(), top - bottom)
}

/// Draw the whole face: disc, hand, labels, pivot
pub fn draw_face(draw: &Draw, view: &FaceView, layout: &FaceLayout) {
    let center = layout.center;
    let scale = layout.scale;
    let face_radius = DISC_RADIUS * scale;

    draw.ellipse()
        .xy(center)
        .radius(face_radius)
        .color(colors::FACE);
    draw_ring(draw, center, face_radius, 1.0, colors::FACE_RIM);

    let (dx, dy) = view.hand_direction();
    draw.line()
        .start(center)
        .end(layout.to_world(dx * HAND_LENGTH, dy * HAND_LENGTH))
        .color(colors::HAND)
        .weight(2.0 * scale);

    for point in &view.points {
        draw_label(draw, point, layout);
    }

    draw.ellipse()
        .xy(center)
        .radius(PIVOT_RADIUS * scale)
        .color(colors::HAND);
}

fn draw_label(draw: &Draw, point: &PointView, layout: &FaceLayout) {
    let pos = layout.to_world(point.offset_x, point.offset_y);
    let scale = layout.scale;

    if point.highlighted {
        draw.ellipse()
            .xy(pos)
            .radius(LABEL_RADIUS * scale)
            .color(colors::SELECTED);
    }

    let color = if point.highlighted {
        colors::SELECTED_TEXT
    } else if point.is_minute_tick {
        colors::TICK_TEXT
    } else {
        colors::TEXT_PRIMARY
    };

    draw.text(&point.label)
        .xy(pos)
        .color(color)
        .font_size((16.0 * scale).round().max(8.0) as u32)
        .w(LABEL_RADIUS * 2.0 * scale);
}

/// Draw a ring (circle outline) using line segments
fn draw_ring(draw: &Draw, center: Point2, radius: f32, weight: f32, color: Srgb<u8>) {
    let segments = 120;
    let points: Vec<Point2> = (0..=segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * TAU;
            center + vec2(angle.cos(), angle.sin()) * radius
        })
        .collect();

    draw.polyline()
        .weight(weight)
        .color(color)
        .points(points);
}

/// Draw the newest toasts in the strip under the face, newest lowest
pub fn draw_toasts(draw: &Draw, toasts: &[ToastMessage], strip: Rect) {
    let toast_width = (strip.w() - 40.0).clamp(0.0, 280.0);
    let padding = 10.0;

    for (i, toast) in toasts.iter().rev().take(MAX_TOASTS).enumerate() {
        let elapsed = toast.created_at.elapsed().as_secs_f32();
        let progress = (elapsed / toast.duration_secs).clamp(0.0, 1.0);

        // Fade out over the last fifth
        let alpha = if progress > 0.8 {
            ((1.0 - progress) / 0.2 * 255.0) as u8
        } else {
            255u8
        };

        let y_offset = (i as f32) * (TOAST_HEIGHT + TOAST_MARGIN);
        let pos = pt2(
            strip.x(),
            strip.bottom() + TOAST_MARGIN / 2.0 + TOAST_HEIGHT / 2.0 + y_offset,
        );

        draw.rect()
            .xy(pos)
            .w_h(toast_width, TOAST_HEIGHT)
            .color(srgba(
                colors::TOAST_BG.red,
                colors::TOAST_BG.green,
                colors::TOAST_BG.blue,
                alpha,
            ));

        draw.text(&toast.text)
            .xy(pos)
            .color(srgba(255u8, 255u8, 255u8, alpha))
            .font_size(14)
            .w(toast_width - padding * 2.0);
    }
}
