//! Clock Face Picker
//!
//! Pick an hour and a minute by clicking numbers arranged on a clock face.
//! The two numeral fields switch between the hour and minute faces; Cancel
//! and Add hand the committed time to the host through hooks.

mod drawing;
mod ui;

use std::sync::mpsc::{self, Receiver};

use nannou::prelude::*;
use nannou_egui::{self, Egui};
use serde::{Deserialize, Serialize};
use shared::{ClockPicker, ConfigError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::drawing::{
    colors, draw_face, draw_toasts, trim_toasts, FaceLayout, PanelInsets, ToastMessage,
};
use crate::ui::{apply_theme, draw_action_buttons, draw_time_display};

const APP_NAME: &str = "clock_face_picker";
const MIN_WINDOW_SIDE: u32 = 240;
const MIN_TOAST_SECS: f32 = 0.5;
const MAX_TOAST_SECS: f32 = 30.0;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    nannou::app(model).update(update).run();
}

/// Persisted display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct Config {
    face_radius: f32,
    window_width: u32,
    window_height: u32,
    toast_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            face_radius: shared::FACE_RADIUS,
            window_width: 420,
            window_height: 520,
            toast_secs: 2.5,
        }
    }
}

impl Config {
    /// Replace values the window can't use
    fn sanitized(self) -> Self {
        let defaults = Config::default();
        let face_radius = if self.face_radius.is_finite() && self.face_radius > 0.0 {
            self.face_radius
        } else {
            defaults.face_radius
        };
        let toast_secs = if self.toast_secs.is_finite() {
            self.toast_secs.clamp(MIN_TOAST_SECS, MAX_TOAST_SECS)
        } else {
            defaults.toast_secs
        };
        Self {
            face_radius,
            window_width: self.window_width.max(MIN_WINDOW_SIDE),
            window_height: self.window_height.max(MIN_WINDOW_SIDE),
            toast_secs,
        }
    }
}

/// Application state
struct Model {
    picker: ClockPicker,
    /// Messages posted by the action hooks
    notices: Receiver<String>,
    toasts: Vec<ToastMessage>,
    config: Config,
    /// Panel heights from the last egui frame
    insets: PanelInsets,
    /// Whether the pointer was over an egui panel last frame
    pointer_on_panels: bool,
    egui: Egui,
}

/// Resolve a load attempt into the config to run with
///
/// The flag is set when no file exists yet and the defaults should be written.
fn config_or_default(loaded: Result<Option<Config>, ConfigError>) -> (Config, bool) {
    match loaded {
        Ok(Some(config)) => (config.sanitized(), false),
        Ok(None) => (Config::default(), true),
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            (Config::default(), false)
        }
    }
}

fn load_or_init_config() -> Config {
    let (config, write_defaults) = config_or_default(shared::load_config(APP_NAME));
    if write_defaults {
        if let Err(e) = shared::save_config(APP_NAME, &config) {
            tracing::warn!("Failed to save default config: {}", e);
        }
    }
    config
}

fn model(app: &App) -> Model {
    let config = load_or_init_config();

    let window_id = app
        .new_window()
        .title("Time Picker")
        .size(config.window_width, config.window_height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build picker window");

    let window = app.window(window_id).expect("picker window closed during setup");
    let egui = Egui::from_window(&window);

    let (add_tx, notices) = mpsc::channel();
    let cancel_tx = add_tx.clone();
    let picker = ClockPicker::new()
        .on_cancel(move |time| {
            tracing::info!("Cancelled at {}", time);
            if cancel_tx.send(format!("Cancelled at {}", time)).is_err() {
                tracing::warn!("Notice channel closed");
            }
        })
        .on_add(move |time| {
            tracing::info!("Added {}", time);
            if add_tx.send(format!("Added {}", time)).is_err() {
                tracing::warn!("Notice channel closed");
            }
        });

    Model {
        picker,
        notices,
        toasts: Vec::new(),
        config,
        insets: PanelInsets::default(),
        pointer_on_panels: false,
        egui,
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    let toast_secs = model.config.toast_secs;
    model
        .toasts
        .extend(model.notices.try_iter().map(|text| ToastMessage::new(text, toast_secs)));
    trim_toasts(&mut model.toasts);

    let view = model.picker.view();

    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();
    apply_theme(&ctx);

    let (activated, top) = draw_time_display(&ctx, &view);
    let (pressed, bottom) = draw_action_buttons(&ctx);
    let pointer_on_panels = ctx.is_pointer_over_area();

    // Apply UI results once the egui frame is done
    drop(ctx);

    model.insets = PanelInsets { top, bottom };
    model.pointer_on_panels = pointer_on_panels;

    if let Some(mode) = activated {
        model.picker.activate(mode);
    }
    if let Some(action) = pressed {
        model.picker.trigger(action);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw.background().color(colors::BACKGROUND);

    let layout = FaceLayout::calculate(window_rect, model.insets, model.config.face_radius);
    draw_face(&draw, &model.picker.view(), &layout);
    draw_toasts(&draw, &model.toasts, layout.toast_strip);

    if let Err(e) = draw.to_frame(app, &frame) {
        tracing::error!("Failed to draw face: {:?}", e);
    }
    if let Err(e) = model.egui.draw_to_frame(&frame) {
        tracing::error!("Failed to draw egui: {:?}", e);
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    // Clicks on the readout or buttons belong to egui
    if button != MouseButton::Left || model.pointer_on_panels {
        return;
    }

    let layout = FaceLayout::calculate(app.window_rect(), model.insets, model.config.face_radius);
    let pos = app.mouse.position();
    if !layout.contains(pos) {
        return;
    }

    let (x, y) = layout.to_face(pos);
    if let Some(number) = model.picker.click_face(x, y) {
        tracing::debug!("Clicked {} on the {} face", number, model.picker.state().mode);
    }
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);
}
