//! Pointer input: button state and drag deltas
//!
//! Windowing code feeds absolute cursor positions into a [`PointerTracker`],
//! which hands back the pixel delta since the previous sample. The delta plus
//! the held [`MouseButtons`] is what the orbit rig consumes.

use glam::Vec2;
use winit::event::MouseButton;

/// Set of held mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseButtons(u32);

impl MouseButtons {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1 << 0);
    pub const SECONDARY: Self = Self(1 << 1);
    pub const MIDDLE: Self = Self(1 << 2);

    pub fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Map a winit button. Left is primary, right is secondary.
    pub fn from_winit(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::PRIMARY,
            MouseButton::Right => Self::SECONDARY,
            MouseButton::Middle => Self::MIDDLE,
            _ => Self::NONE,
        }
    }
}

impl std::ops::BitOr for MouseButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Tracks the last sampled pointer position and the held buttons.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    last_position: Option<Vec2>,
    buttons: MouseButtons,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently held buttons
    pub fn buttons(&self) -> MouseButtons {
        self.buttons
    }

    pub fn last_position(&self) -> Option<Vec2> {
        self.last_position
    }

    /// Record a button press at the given position.
    ///
    /// The press position becomes the reference for the next delta, so a drag
    /// starts from where the button went down.
    pub fn press(&mut self, button: MouseButtons, position: Vec2) {
        self.buttons.insert(button);
        self.last_position = Some(position);
    }

    pub fn release(&mut self, button: MouseButtons) {
        self.buttons.remove(button);
    }

    /// Sample a new pointer position and return the delta since the last one.
    ///
    /// The first sample has no reference and yields a zero delta.
    pub fn move_to(&mut self, position: Vec2) -> Vec2 {
        let delta = match self.last_position {
            Some(last) => position - last,
            None => Vec2::ZERO,
        };
        self.last_position = Some(position);
        delta
    }

    /// Forget the last position, e.g. when the cursor leaves the window.
    ///
    /// Held buttons survive; only a release clears them, so a drag that
    /// leaves the window picks up again when the cursor comes back.
    pub fn reset(&mut self) {
        self.last_position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_has_zero_delta() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.move_to(Vec2::new(120.0, 40.0)), Vec2::ZERO);
        assert_eq!(tracker.last_position(), Some(Vec2::new(120.0, 40.0)));
    }

    #[test]
    fn delta_is_relative_to_previous_sample() {
        let mut tracker = PointerTracker::new();
        tracker.move_to(Vec2::new(10.0, 10.0));
        assert_eq!(tracker.move_to(Vec2::new(15.0, 7.0)), Vec2::new(5.0, -3.0));
        assert_eq!(tracker.move_to(Vec2::new(15.0, 7.0)), Vec2::ZERO);
    }

    #[test]
    fn press_resets_reference_position() {
        let mut tracker = PointerTracker::new();
        tracker.move_to(Vec2::new(0.0, 0.0));
        tracker.press(MouseButtons::PRIMARY, Vec2::new(50.0, 50.0));
        assert_eq!(tracker.move_to(Vec2::new(52.0, 50.0)), Vec2::new(2.0, 0.0));
        assert!(tracker.buttons().contains(MouseButtons::PRIMARY));
    }

    #[test]
    fn reset_keeps_held_buttons() {
        let mut tracker = PointerTracker::new();
        tracker.press(MouseButtons::PRIMARY, Vec2::new(10.0, 10.0));
        tracker.reset();
        assert!(tracker.buttons().contains(MouseButtons::PRIMARY));
        assert_eq!(tracker.last_position(), None);
        assert_eq!(tracker.move_to(Vec2::new(400.0, 300.0)), Vec2::ZERO);

        tracker.release(MouseButtons::PRIMARY);
        assert!(tracker.buttons().is_empty());
    }

    #[test]
    fn button_set_operations() {
        let mut buttons = MouseButtons::PRIMARY | MouseButtons::SECONDARY;
        assert!(buttons.contains(MouseButtons::PRIMARY));
        assert!(buttons.contains(MouseButtons::SECONDARY));
        assert!(!buttons.contains(MouseButtons::MIDDLE));

        buttons.remove(MouseButtons::PRIMARY);
        assert!(!buttons.contains(MouseButtons::PRIMARY));
        buttons.remove(MouseButtons::SECONDARY);
        assert!(buttons.is_empty());
    }

    #[test]
    fn winit_buttons_map_to_roles() {
        assert_eq!(MouseButtons::from_winit(MouseButton::Left), MouseButtons::PRIMARY);
        assert_eq!(MouseButtons::from_winit(MouseButton::Right), MouseButtons::SECONDARY);
        assert_eq!(MouseButtons::from_winit(MouseButton::Back), MouseButtons::NONE);
    }
}
