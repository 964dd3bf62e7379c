//! Shared clock picker logic
//!
//! Layout table, selection state machine, view model and config persistence.
//! Nothing in here depends on the renderer.

pub mod config;
pub mod layout;
pub mod picker;
pub mod selection;
pub mod view;

pub use config::{config_dir, config_path, load_config, save_config, ConfigError};
pub use layout::{angle_for, find_point, point_at, points_for, ClockPoint, Mode, FACE_RADIUS};
pub use picker::{Action, ActionHooks, ClockPicker, PickerError, HIT_RADIUS};
pub use selection::{PickedTime, SelectionState};
pub use view::{render, FaceView, PointView};
