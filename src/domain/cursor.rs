//! On-screen cursor model
//!
//! Computes where the cursor should render for a given orientation. The
//! display sink is read-only; nothing here feeds back into the integrator.

use crate::domain::models::OrientationState;

/// Default display scale in pixels per radian.
pub const DEFAULT_DISPLAY_SCALE: f32 = 300.0;

/// Maps orientation to a cursor position inside a viewport.
///
/// The cursor starts at the viewport center; rotation about Y moves it
/// horizontally (negated), rotation about X moves it vertically, mirroring
/// the relative-motion mapping.
#[derive(Debug, Clone, Copy)]
pub struct CursorView {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl CursorView {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scale: DEFAULT_DISPLAY_SCALE,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Cursor position in viewport pixels for the given orientation.
    pub fn position(&self, state: &OrientationState) -> (f32, f32) {
        (
            self.width / 2.0 - state.y * self.scale,
            self.height / 2.0 + state.x * self.scale,
        )
    }
}
