/// One gyroscope sample as delivered by the sensor source.
///
/// Angular velocities are in rad/s; the timestamp comes from the platform's
/// monotonic clock in nanoseconds. Samples arrive at a platform-chosen cadence
/// (roughly game rate, ~50 Hz) but nothing downstream assumes a fixed interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GyroSample {
    pub wx: f32,
    pub wy: f32,
    pub wz: f32,
    pub timestamp_ns: u64,
}

impl GyroSample {
    pub fn new(wx: f32, wy: f32, wz: f32, timestamp_ns: u64) -> Self {
        Self {
            wx,
            wy,
            wz,
            timestamp_ns,
        }
    }
}

/// Accumulated orientation in radians per axis.
///
/// Handed by value to display sinks and the motion mapper; only the
/// integrator mutates the underlying state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Relative mouse motion bounded to a signed 8-bit HID report field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseDelta {
    pub dx: i8,
    pub dy: i8,
}

impl MouseDelta {
    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Peer-link state machine states.
///
/// Transitions are driven entirely by platform callbacks; the application
/// records the current state and performs no handshake or retry itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// HID app not yet registered with the host stack.
    Unregistered,
    /// Registered, no peer connected.
    Registered,
    /// A peer is connected and reports can be submitted.
    Connected,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Orientation(OrientationState),
    LinkStatus(LinkStatus),
    LogMessage(StatusMessage),
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub message: String,
    pub severity: MessageSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSeverity {
    Info,
    Success,
    Warning,
    Error,
}
