//! Platform-agnostic input handling: the host translates its own key
//! events into [`InputEvent`]s, either directly or through an
//! [`InputProcessor`] with string key bindings.

use crate::model::DodgeSide;

/// Platform-independent input events the core understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    DodgePress(DodgeSide),
    DodgeRelease(DodgeSide),
    PauseToggle,
    /// Window/tab lost focus; held dodges must not survive it.
    FocusLost,
}

/// Continuous input the frame loop reads. Dodge keys are level-triggered
/// (held), the pause toggle is edge-triggered and latched until the
/// updater consumes it.
pub struct InputState {
    pub dodge_left: bool,
    pub dodge_right: bool,
    pause_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            dodge_left: false,
            dodge_right: false,
            pause_requested: false,
        }
    }

    pub fn process_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::DodgePress(DodgeSide::Left) => self.dodge_left = true,
            InputEvent::DodgePress(DodgeSide::Right) => self.dodge_right = true,
            InputEvent::DodgeRelease(DodgeSide::Left) => self.dodge_left = false,
            InputEvent::DodgeRelease(DodgeSide::Right) => self.dodge_right = false,
            InputEvent::PauseToggle => self.pause_requested = true,
            InputEvent::FocusLost => self.clear_held(),
        }
    }

    /// Active dodge, if exactly one side is held. Holding both cancels out.
    pub fn active_dodge(&self) -> Option<DodgeSide> {
        match (self.dodge_left, self.dodge_right) {
            (true, false) => Some(DodgeSide::Left),
            (false, true) => Some(DodgeSide::Right),
            _ => None,
        }
    }

    /// Take the pending pause request, at most once per frame.
    pub fn consume_pause_request(&mut self) -> bool {
        std::mem::take(&mut self.pause_requested)
    }

    pub fn clear_held(&mut self) {
        self.dodge_left = false;
        self.dodge_right = false;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Key mapping configuration, host key names as strings.
#[derive(Clone)]
pub struct KeyBindings {
    pub dodge_left: String,
    pub dodge_right: String,
    pub pause: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            dodge_left: "a".to_string(),
            dodge_right: "d".to_string(),
            pause: "p".to_string(),
        }
    }
}

/// Maps raw key strings from a browser or winit host to input events.
#[derive(Clone, Default)]
pub struct InputProcessor {
    bindings: KeyBindings,
}

impl InputProcessor {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    /// Translate a key-down. Arrow keys work alongside the bound letters.
    pub fn key_down(&self, key: &str) -> Option<InputEvent> {
        self.dodge_side(key)
            .map(InputEvent::DodgePress)
            .or_else(|| key.eq_ignore_ascii_case(&self.bindings.pause).then_some(InputEvent::PauseToggle))
    }

    pub fn key_up(&self, key: &str) -> Option<InputEvent> {
        self.dodge_side(key).map(InputEvent::DodgeRelease)
    }

    fn dodge_side(&self, key: &str) -> Option<DodgeSide> {
        if key.eq_ignore_ascii_case(&self.bindings.dodge_left) || key == "ArrowLeft" {
            Some(DodgeSide::Left)
        } else if key.eq_ignore_ascii_case(&self.bindings.dodge_right) || key == "ArrowRight" {
            Some(DodgeSide::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_track_held_state() {
        let mut input = InputState::new();
        input.process_event(InputEvent::DodgePress(DodgeSide::Left));
        assert_eq!(input.active_dodge(), Some(DodgeSide::Left));
        input.process_event(InputEvent::DodgeRelease(DodgeSide::Left));
        assert_eq!(input.active_dodge(), None);
    }

    #[test]
    fn both_sides_held_cancel_out() {
        let mut input = InputState::new();
        input.process_event(InputEvent::DodgePress(DodgeSide::Left));
        input.process_event(InputEvent::DodgePress(DodgeSide::Right));
        assert_eq!(input.active_dodge(), None);
        input.process_event(InputEvent::DodgeRelease(DodgeSide::Left));
        assert_eq!(input.active_dodge(), Some(DodgeSide::Right));
    }

    #[test]
    fn pause_request_is_consumed_once() {
        let mut input = InputState::new();
        input.process_event(InputEvent::PauseToggle);
        assert!(input.consume_pause_request());
        assert!(!input.consume_pause_request());
    }

    #[test]
    fn focus_loss_clears_held_dodges() {
        let mut input = InputState::new();
        input.process_event(InputEvent::DodgePress(DodgeSide::Right));
        input.process_event(InputEvent::FocusLost);
        assert_eq!(input.active_dodge(), None);
    }

    #[test]
    fn processor_maps_bound_and_arrow_keys() {
        let proc = InputProcessor::default();
        assert_eq!(proc.key_down("a"), Some(InputEvent::DodgePress(DodgeSide::Left)));
        assert_eq!(proc.key_down("ArrowRight"), Some(InputEvent::DodgePress(DodgeSide::Right)));
        assert_eq!(proc.key_down("P"), Some(InputEvent::PauseToggle));
        assert_eq!(proc.key_up("D"), Some(InputEvent::DodgeRelease(DodgeSide::Right)));
        assert_eq!(proc.key_down("x"), None);
    }
}
