//! UI module - egui numeral fields and action buttons

use nannou_egui::egui;
use shared::{Action, FaceView, Mode};

const FIELD_FONT_SIZE: f32 = 24.0;
const FIELD_ROW_WIDTH: f32 = 110.0;
const BUTTON_HEIGHT: f32 = 36.0;

fn accent() -> egui::Color32 {
    egui::Color32::from_rgb(0, 123, 255)
}

/// Light visuals to sit on the light canvas
pub fn apply_theme(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());
}

/// Draw the "HH : MM" readout
///
/// Returns the face whose field was clicked and the panel height.
pub fn draw_time_display(ctx: &egui::Context, view: &FaceView) -> (Option<Mode>, f32) {
    let mut activated = None;

    let panel = egui::TopBottomPanel::top("time_display")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let lead = (ui.available_width() - FIELD_ROW_WIDTH).max(0.0) / 2.0;
                ui.add_space(lead);

                let fields = [
                    (Mode::Hours, view.hours_field.as_str()),
                    (Mode::Minutes, view.minutes_field.as_str()),
                ];
                for (idx, (mode, text)) in fields.into_iter().enumerate() {
                    if idx > 0 {
                        ui.label(egui::RichText::new(":").size(FIELD_FONT_SIZE));
                    }
                    let is_active = view.mode == mode;
                    let response = ui
                        .selectable_label(
                            is_active,
                            egui::RichText::new(text).size(FIELD_FONT_SIZE).monospace(),
                        )
                        .on_hover_text(format!("Pick {}", mode));
                    if response.clicked() {
                        activated = Some(mode);
                    }
                }
            });
            ui.add_space(8.0);
        });

    (activated, panel.response.rect.height())
}

/// Draw the Cancel/Add row
///
/// Returns the button pressed this frame and the panel height.
pub fn draw_action_buttons(ctx: &egui::Context) -> (Option<Action>, f32) {
    let mut pressed = None;

    let panel = egui::TopBottomPanel::bottom("actions")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(10.0);
            ui.columns(Action::ALL.len(), |columns| {
                for (column, action) in columns.iter_mut().zip(Action::ALL) {
                    let button = egui::Button::new(
                        egui::RichText::new(action.label())
                            .size(16.0)
                            .color(egui::Color32::WHITE),
                    )
                    .fill(accent());
                    let width = column.available_width();
                    if column.add_sized([width, BUTTON_HEIGHT], button).clicked() {
                        pressed = Some(action);
                    }
                }
            });
            ui.add_space(10.0);
        });

    (pressed, panel.response.rect.height())
}
