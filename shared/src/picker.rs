//! Clock picker widget - selection state plus the host's action hooks

use thiserror::Error;

use crate::layout::{find_point, point_at, Mode};
use crate::selection::{PickedTime, SelectionState};
use crate::view::{render, FaceView};

/// Click radius around each label, in face units
pub const HIT_RADIUS: f32 = 15.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
    #[error("{number} is not on the {mode} face")]
    NotOnFace { number: u32, mode: Mode },
}

/// The two buttons under the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Cancel,
    Add,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Cancel, Action::Add];

    pub fn label(self) -> &'static str {
        match self {
            Action::Cancel => "Cancel",
            Action::Add => "Add",
        }
    }
}

type Hook = Box<dyn FnMut(PickedTime)>;

/// Host callbacks for the action buttons
#[derive(Default)]
pub struct ActionHooks {
    on_cancel: Option<Hook>,
    on_add: Option<Hook>,
}

impl ActionHooks {
    fn hook_mut(&mut self, action: Action) -> Option<&mut Hook> {
        match action {
            Action::Cancel => self.on_cancel.as_mut(),
            Action::Add => self.on_add.as_mut(),
        }
    }
}

#[derive(Default)]
pub struct ClockPicker {
    state: SelectionState,
    hooks: ActionHooks,
}

impl ClockPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_cancel(mut self, hook: impl FnMut(PickedTime) + 'static) -> Self {
        self.hooks.on_cancel = Some(Box::new(hook));
        self
    }

    pub fn on_add(mut self, hook: impl FnMut(PickedTime) + 'static) -> Self {
        self.hooks.on_add = Some(Box::new(hook));
        self
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn view(&self) -> FaceView {
        render(&self.state)
    }

    pub fn picked_time(&self) -> PickedTime {
        self.state.picked_time()
    }

    /// A click on one of the numeral fields
    pub fn activate(&mut self, mode: Mode) {
        self.state = self.state.activate(mode);
    }

    /// A click on a clock number of the active face
    pub fn press_point(&mut self, number: u32) -> Result<(), PickerError> {
        let mode = self.state.mode;
        find_point(mode, number).ok_or(PickerError::NotOnFace { number, mode })?;
        self.state = self.state.select(number);
        Ok(())
    }

    /// Commit whichever label sits under a face-space position
    pub fn click_face(&mut self, x: f32, y: f32) -> Option<u32> {
        let point = point_at(self.state.mode, x, y, HIT_RADIUS)?;
        self.state = self.state.select(point.number);
        Some(point.number)
    }

    /// Hand the committed time to the hook bound for `action`
    pub fn trigger(&mut self, action: Action) {
        let time = self.state.picked_time();
        match self.hooks.hook_mut(action) {
            Some(hook) => hook(time),
            None => tracing::debug!("{} pressed with no hook bound", action.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_pick_minutes_end_to_end() {
        let mut picker = ClockPicker::new();
        picker.activate(Mode::Minutes);
        picker.press_point(40).unwrap();

        let view = picker.view();
        assert_eq!(view.minutes_field, "40");
        assert_eq!(view.hours_field, "01");
        assert_eq!(view.highlighted().map(|p| p.number), Some(40));
        assert_eq!(view.hand_rotation_deg, 150.0);
    }

    #[test]
    fn test_pick_hours_end_to_end() {
        let mut picker = ClockPicker::new();
        picker.activate(Mode::Minutes);
        picker.press_point(25).unwrap();
        picker.activate(Mode::Hours);
        picker.press_point(11).unwrap();

        let view = picker.view();
        assert_eq!(view.hours_field, "11");
        assert_eq!(view.minutes_field, "25");
        assert_eq!(view.highlighted().map(|p| p.number), Some(11));
        assert_eq!(view.hand_rotation_deg, 240.0);
    }

    #[test]
    fn test_press_point_off_face() {
        let mut picker = ClockPicker::new();
        let before = *picker.state();
        let err = picker.press_point(12).unwrap_err();
        assert_eq!(
            err,
            PickerError::NotOnFace {
                number: 12,
                mode: Mode::Minutes
            }
        );
        assert_eq!(err.to_string(), "12 is not on the minutes face");
        assert_eq!(*picker.state(), before);
    }

    #[test]
    fn test_click_face_selects_label() {
        let mut picker = ClockPicker::new();
        picker.activate(Mode::Hours);
        // Label 9 sits at (-90, 0)
        assert_eq!(picker.click_face(-86.0, 4.0), Some(9));
        assert_eq!(picker.state().hours, 9);

        assert_eq!(picker.click_face(0.0, 0.0), None);
        assert_eq!(picker.state().hours, 9);
    }

    #[test]
    fn test_trigger_calls_bound_hook() {
        let added = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&added);
        let mut picker = ClockPicker::new().on_add(move |time| sink.borrow_mut().push(time));
        picker.press_point(30).unwrap();

        let before = *picker.state();
        picker.trigger(Action::Add);
        picker.trigger(Action::Cancel);

        assert_eq!(
            *added.borrow(),
            vec![PickedTime {
                hours: 1,
                minutes: 30
            }]
        );
        assert_eq!(*picker.state(), before);
    }

    #[test]
    fn test_cancel_hook_sees_committed_time() {
        let cancelled = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&cancelled);
        let mut picker = ClockPicker::new().on_cancel(move |time| *sink.borrow_mut() = Some(time));
        picker.activate(Mode::Hours);
        picker.press_point(4).unwrap();
        picker.trigger(Action::Cancel);

        let seen = *cancelled.borrow();
        assert_eq!(seen.map(|t| t.to_string()), Some("04:15".to_string()));
    }

    #[test]
    fn test_picked_time_tracks_commits() {
        let mut picker = ClockPicker::new();
        assert_eq!(
            picker.picked_time(),
            PickedTime {
                hours: 1,
                minutes: 15
            }
        );

        picker.activate(Mode::Hours);
        picker.press_point(6).unwrap();
        picker.activate(Mode::Minutes);
        picker.press_point(45).unwrap();
        // Switching faces commits nothing
        picker.activate(Mode::Hours);

        assert_eq!(picker.picked_time().to_string(), "06:45");
        assert_eq!(picker.picked_time(), picker.state().picked_time());
    }

    #[test]
    fn test_action_labels() {
        let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["Cancel", "Add"]);
    }
}
