//! Pointer input.
//!
//! [`Input`] turns raw window events into the three gestures the viewer
//! cares about: a click (spawn an explosion under the cursor), a drag (orbit
//! the camera) and a scroll (zoom).
//!
//! A left press that is released within [`CLICK_SLOP`] pixels of where it
//! started is a click. Anything further is a drag, and releasing a drag does
//! not spawn.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Maximum cursor travel, in pixels, for a press/release to count as a click.
pub const CLICK_SLOP: f32 = 4.0;

/// A gesture recognised from window events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    /// Left click at the given normalized device coordinates.
    Click { ndc: Vec2 },
    /// Cursor moved with the left button held, in pixels.
    Drag { delta: Vec2 },
    /// Wheel scrolled; positive is away from the user.
    Zoom(f32),
}

/// Convert a pixel position to normalized device coordinates.
///
/// X runs -1 (left) to 1 (right), Y runs 1 (top) to -1 (bottom). Returns
/// `None` for an empty viewport.
pub fn screen_to_ndc(position: Vec2, window_size: (u32, u32)) -> Option<Vec2> {
    let (w, h) = window_size;
    if w == 0 || h == 0 {
        return None;
    }
    Some(Vec2::new(
        (position.x / w as f32) * 2.0 - 1.0,
        1.0 - (position.y / h as f32) * 2.0, // Y flipped
    ))
}

/// Pointer state tracker.
#[derive(Debug, Default)]
pub struct Input {
    /// Current cursor position in pixels.
    cursor: Vec2,
    /// Window size in physical pixels.
    window_size: (u32, u32),
    /// Where the left button went down, while it is held.
    press_origin: Option<Vec2>,
    /// Whether the current press has turned into a drag.
    dragging: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update window size (needed for NDC conversion).
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    #[inline]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Cursor position in normalized device coordinates.
    #[inline]
    pub fn cursor_ndc(&self) -> Option<Vec2> {
        screen_to_ndc(self.cursor, self.window_size)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Feed a window event. Returns a gesture when one completes.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<PointerAction> {
        match event {
            WindowEvent::Resized(size) => {
                self.set_window_size(size.width, size.height);
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(Vec2::new(position.x as f32, position.y as f32))
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    self.press();
                    None
                }
                ElementState::Released => self.release(),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                Some(PointerAction::Zoom(scroll))
            }
            _ => None,
        }
    }

    /// Left button went down at the current cursor position.
    pub fn press(&mut self) {
        self.press_origin = Some(self.cursor);
        self.dragging = false;
    }

    /// Left button came up. Returns a click unless the press became a drag.
    pub fn release(&mut self) -> Option<PointerAction> {
        let origin = self.press_origin.take()?;
        let was_dragging = std::mem::take(&mut self.dragging);
        if was_dragging || self.cursor.distance(origin) > CLICK_SLOP {
            return None;
        }
        self.cursor_ndc().map(|ndc| PointerAction::Click { ndc })
    }

    /// Cursor moved to `position`. Returns a drag step while the button is held
    /// and the press has left the click radius.
    pub fn move_cursor(&mut self, position: Vec2) -> Option<PointerAction> {
        let delta = position - self.cursor;
        self.cursor = position;

        let origin = self.press_origin?;
        if !self.dragging && position.distance(origin) > CLICK_SLOP {
            self.dragging = true;
        }
        if self.dragging {
            Some(PointerAction::Drag { delta })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_ndc() {
        let size = (800, 600);
        let center = screen_to_ndc(Vec2::new(400.0, 300.0), size).unwrap();
        assert!(center.x.abs() < 0.01);
        assert!(center.y.abs() < 0.01);

        let top_left = screen_to_ndc(Vec2::ZERO, size).unwrap();
        assert_eq!(top_left, Vec2::new(-1.0, 1.0));

        let bottom_right = screen_to_ndc(Vec2::new(800.0, 600.0), size).unwrap();
        assert_eq!(bottom_right, Vec2::new(1.0, -1.0));

        assert!(screen_to_ndc(Vec2::ZERO, (0, 600)).is_none());
    }

    #[test]
    fn test_click() {
        let mut input = Input::new();
        input.set_window_size(800, 600);
        input.move_cursor(Vec2::new(400.0, 300.0));

        input.press();
        assert!(input.move_cursor(Vec2::new(402.0, 301.0)).is_none());

        match input.release() {
            Some(PointerAction::Click { ndc }) => {
                assert!(ndc.x.abs() < 0.01);
                assert!(ndc.y.abs() < 0.01);
            }
            other => panic!("expected click, got {:?}", other),
        }
    }

    #[test]
    fn test_drag_suppresses_click() {
        let mut input = Input::new();
        input.set_window_size(800, 600);
        input.move_cursor(Vec2::new(100.0, 100.0));

        input.press();
        let action = input.move_cursor(Vec2::new(120.0, 90.0));
        assert_eq!(
            action,
            Some(PointerAction::Drag {
                delta: Vec2::new(20.0, -10.0)
            })
        );
        assert!(input.is_dragging());

        assert!(input.release().is_none());
        assert!(!input.is_dragging());
    }

    #[test]
    fn test_move_without_press() {
        let mut input = Input::new();
        assert!(input.move_cursor(Vec2::new(50.0, 50.0)).is_none());
        assert!(input.release().is_none());
    }
}
