//! Gyroscope-driven cursor and Bluetooth HID mouse emitter.
//!
//! Integrates angular-velocity samples into an orientation estimate, maps
//! orientation deltas to bounded mouse motion, and relays reports to a
//! paired host through an injected [`PeerLink`] capability. The platform
//! singletons of the reference device (sensor service, Bluetooth HID
//! profile) are abstracted as traits so the whole pipeline runs without
//! hardware.
//!
//! [`PeerLink`]: infrastructure::hid::link::PeerLink

pub mod domain;
pub mod infrastructure;
pub mod pipeline;

pub use domain::integrator::OrientationIntegrator;
pub use domain::mapper::MotionMapper;
pub use domain::models::{GyroSample, LinkStatus, MouseDelta, OrientationState};
pub use infrastructure::hid::HidMouseManager;
pub use pipeline::GyroPipeline;
