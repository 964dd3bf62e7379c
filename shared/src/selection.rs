//! Selection state machine
//!
//! The whole interaction state is one `Copy` record. Each transition consumes
//! it and returns the next one.

use crate::layout::{angle_for, Mode};

/// Committed hour/minute pair handed to action hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedTime {
    pub hours: u32,
    pub minutes: u32,
}

impl std::fmt::Display for PickedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionState {
    /// Committed hour (1-12)
    pub hours: u32,
    /// Committed minute, in steps of 5
    pub minutes: u32,
    /// Active face
    pub mode: Mode,
    /// Hand angle in degrees clockwise from 12 o'clock
    pub selected_angle: f32,
    /// Number highlighted on the active face
    pub selected_number: u32,
}

impl Default for SelectionState {
    fn default() -> Self {
        let minutes = 15;
        Self {
            hours: 1,
            minutes,
            mode: Mode::Minutes,
            selected_angle: angle_for(Mode::Minutes, minutes),
            selected_number: minutes,
        }
    }
}

impl SelectionState {
    /// The committed value belonging to `mode`
    pub fn committed(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Hours => self.hours,
            Mode::Minutes => self.minutes,
        }
    }

    pub fn picked_time(&self) -> PickedTime {
        PickedTime {
            hours: self.hours,
            minutes: self.minutes,
        }
    }

    /// Switch the active face
    ///
    /// The hand is re-derived from the newly active committed value so it
    /// never keeps pointing at the other face's selection.
    pub fn activate(self, mode: Mode) -> Self {
        let number = self.committed(mode);
        tracing::debug!("Activate {} face at {}", mode, number);
        Self {
            mode,
            selected_number: number,
            selected_angle: angle_for(mode, number),
            ..self
        }
    }

    /// Commit `number` for the active face
    pub fn select(self, number: u32) -> Self {
        let angle = angle_for(self.mode, number);
        tracing::debug!("Select {} {} at {}°", self.mode, number, angle);
        let (hours, minutes) = match self.mode {
            Mode::Hours => (number, self.minutes),
            Mode::Minutes => (self.hours, number),
        };
        Self {
            hours,
            minutes,
            mode: self.mode,
            selected_angle: angle,
            selected_number: number,
        }
    }
}
