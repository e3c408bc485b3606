//! Orientation Integrator
//!
//! Accumulates gyroscope angular velocity into a running orientation estimate
//! using rectangular Euler integration. No filtering, no drift correction.

use crate::domain::models::{GyroSample, OrientationState};
use tracing::debug;

/// Integrates angular-velocity samples into accumulated per-axis angles.
///
/// Rectangular rule with zero-order hold: the previous sample's velocity is
/// applied over the interval up to the current sample's timestamp. Confined
/// to the single sensor-delivery context; not designed for concurrent
/// invocation.
pub struct OrientationIntegrator {
    state: OrientationState,
    // None until the first sample after construction or reset() seeds it.
    // An Option rather than a magic zero timestamp: a genuine 0 ns
    // timestamp is valid input.
    last_sample: Option<GyroSample>,
}

impl OrientationIntegrator {
    pub fn new() -> Self {
        Self {
            state: OrientationState::default(),
            last_sample: None,
        }
    }

    /// Fold one sample into the orientation estimate.
    ///
    /// The first sample after construction or [`reset`](Self::reset) only
    /// seeds the reference and returns the unchanged state; elapsed time is
    /// undefined until a second sample arrives. Samples carrying non-finite
    /// angular velocity are dropped without consuming the reference, and a
    /// timestamp that moves backwards re-seeds the reference without
    /// accumulating.
    pub fn update(&mut self, sample: &GyroSample) -> OrientationState {
        if !sample.wx.is_finite() || !sample.wy.is_finite() || !sample.wz.is_finite() {
            debug!("Dropping sample with non-finite angular velocity");
            return self.state;
        }

        let last = match self.last_sample {
            Some(last) => last,
            None => {
                self.last_sample = Some(*sample);
                return self.state;
            }
        };

        if sample.timestamp_ns < last.timestamp_ns {
            // Non-monotonic clock. Re-seed so the next interval is sane.
            debug!(
                "Timestamp went backwards ({} -> {}), re-seeding reference",
                last.timestamp_ns, sample.timestamp_ns
            );
            self.last_sample = Some(*sample);
            return self.state;
        }

        let dt = (sample.timestamp_ns - last.timestamp_ns) as f64 * 1e-9;
        self.last_sample = Some(*sample);

        self.state.x += (last.wx as f64 * dt) as f32;
        self.state.y += (last.wy as f64 * dt) as f32;
        self.state.z += (last.wz as f64 * dt) as f32;

        self.state
    }

    /// Zero all three axes and clear the sample reference.
    ///
    /// The next sample behaves exactly like the very first one after
    /// attachment: it seeds the reference and produces no delta.
    pub fn reset(&mut self) {
        self.state = OrientationState::default();
        self.last_sample = None;
        debug!("Orientation reset");
    }

    pub fn state(&self) -> OrientationState {
        self.state
    }

    /// Whether a reference sample has been seen since construction or the
    /// last reset.
    pub fn is_seeded(&self) -> bool {
        self.last_sample.is_some()
    }
}

impl Default for OrientationIntegrator {
    fn default() -> Self {
        Self::new()
    }
}
