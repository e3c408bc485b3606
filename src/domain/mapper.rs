//! Orientation-to-mouse mapping
//!
//! Maps the accumulated orientation into bounded relative mouse motion for
//! the HID report. Pure functions of the current state; calling them twice
//! without an intervening integrator update yields the same delta.

use crate::domain::models::{MouseDelta, OrientationState};

/// Default sensitivity. An arbitrary constant, not a derived physical
/// quantity.
pub const DEFAULT_SENSITIVITY: f32 = 10.0;

/// Maps orientation to relative mouse deltas.
///
/// Axis convention follows the handheld orientation of the device: rotation
/// about Y drives horizontal motion (negated), rotation about X drives
/// vertical motion.
pub struct MotionMapper {
    sensitivity: f32,
}

impl MotionMapper {
    pub fn new(sensitivity: f32) -> Self {
        Self { sensitivity }
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Map the current orientation to a bounded (dx, dy) pair.
    ///
    /// Deltas saturate at the i8 report-field range [-127, 127] rather than
    /// wrapping: a large swing pegs the cursor at full speed instead of
    /// reversing direction.
    pub fn to_delta(&self, state: &OrientationState) -> MouseDelta {
        let dx = (-state.y * self.sensitivity).round();
        let dy = (state.x * self.sensitivity).round();
        MouseDelta {
            dx: saturate_i8(dx),
            dy: saturate_i8(dy),
        }
    }
}

impl Default for MotionMapper {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVITY)
    }
}

fn saturate_i8(value: f32) -> i8 {
    // `as` casts from float already saturate, but the HID descriptor
    // declares a logical minimum of -127, so clamp explicitly.
    value.clamp(-127.0, 127.0) as i8
}
