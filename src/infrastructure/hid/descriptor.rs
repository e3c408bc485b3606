//! HID report descriptor and report encoding
//!
//! The descriptor is the fixed USB HID report descriptor the reference
//! device registers with the host Bluetooth stack: a 3-button mouse with
//! 8-bit relative X/Y fields. It is consumed verbatim by the platform HID
//! Device profile; nothing here implements HID framing or transport.

/// Report descriptor for a 3-button relative mouse.
///
/// Layout per report: 3 button bits + 5 padding bits, then X and Y as
/// signed 8-bit relative values (logical range -127..127).
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x02, // Usage (Mouse)
    0xa1, 0x01, // Collection (Application)
    0x09, 0x01, //   Usage (Pointer)
    0xa1, 0x00, //   Collection (Physical)
    0x05, 0x09, //     Usage Page (Buttons)
    0x19, 0x01, //     Usage Minimum (1)
    0x29, 0x03, //     Usage Maximum (3)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x95, 0x03, //     Report Count (3)
    0x75, 0x01, //     Report Size (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x95, 0x01, //     Report Count (1)
    0x75, 0x05, //     Report Size (5)
    0x81, 0x03, //     Input (Constant) - padding
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x09, 0x31, //     Usage (Y)
    0x15, 0x81, //     Logical Minimum (-127)
    0x25, 0x7f, //     Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    0xc0, //   End Collection
    0xc0, // End Collection
];

/// Report ID used for every mouse report.
pub const REPORT_ID: u8 = 0x00;

/// Mouse subclass advertised in the SDP record.
pub const SUBCLASS_MOUSE: u8 = 0x80;

/// QoS parameters the reference registers alongside the SDP record
/// (service guaranteed).
pub const QOS_TOKEN_RATE: u32 = 800;
pub const QOS_TOKEN_BUCKET_SIZE: u32 = 9;
pub const QOS_PEAK_BANDWIDTH: u32 = 0;
pub const QOS_LATENCY: u32 = 11250;
pub const QOS_DELAY_VARIATION: u32 = 11250;

/// Guaranteed-service QoS parameters registered for both directions of the
/// HID channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QosSettings {
    pub token_rate: u32,
    pub token_bucket_size: u32,
    pub peak_bandwidth: u32,
    pub latency: u32,
    pub delay_variation: u32,
}

impl Default for QosSettings {
    fn default() -> Self {
        Self {
            token_rate: QOS_TOKEN_RATE,
            token_bucket_size: QOS_TOKEN_BUCKET_SIZE,
            peak_bandwidth: QOS_PEAK_BANDWIDTH,
            latency: QOS_LATENCY,
            delay_variation: QOS_DELAY_VARIATION,
        }
    }
}

/// SDP and QoS settings handed to the host stack when registering the HID
/// app. Strings come from [`Settings`](crate::domain::settings::Settings).
#[derive(Debug, Clone)]
pub struct RegistrationConfig {
    pub name: String,
    pub description: String,
    pub provider: String,
    pub subclass: u8,
    pub descriptor: Vec<u8>,
    pub qos: QosSettings,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            name: "GyroMouse".to_string(),
            description: "Gyroscope Mouse".to_string(),
            provider: "GyroCursor".to_string(),
            subclass: SUBCLASS_MOUSE,
            descriptor: REPORT_DESCRIPTOR.to_vec(),
            qos: QosSettings::default(),
        }
    }
}

/// One mouse input report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseReport {
    pub buttons: u8,
    pub dx: i8,
    pub dy: i8,
}

impl MouseReport {
    pub fn motion(dx: i8, dy: i8) -> Self {
        Self {
            buttons: 0,
            dx,
            dy,
        }
    }

    /// Encode as the 4-byte wire payload:
    /// `[report_id, buttons, dx, dy]`.
    pub fn encode(&self) -> [u8; 4] {
        [REPORT_ID, self.buttons, self.dx as u8, self.dy as u8]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_the_fixed_mouse_descriptor() {
        assert_eq!(REPORT_DESCRIPTOR.len(), 50);
        // Generic Desktop / Mouse / Collection (Application) preamble.
        assert_eq!(&REPORT_DESCRIPTOR[..6], &[0x05, 0x01, 0x09, 0x02, 0xa1, 0x01]);
        // Both collections closed.
        assert_eq!(&REPORT_DESCRIPTOR[48..], &[0xc0, 0xc0]);
    }

    #[test]
    fn default_registration_carries_the_reference_qos() {
        let config = RegistrationConfig::default();
        assert_eq!(config.subclass, SUBCLASS_MOUSE);
        assert_eq!(config.descriptor, REPORT_DESCRIPTOR);
        assert_eq!(
            config.qos,
            QosSettings {
                token_rate: 800,
                token_bucket_size: 9,
                peak_bandwidth: 0,
                latency: 11250,
                delay_variation: 11250,
            }
        );
    }

    #[test]
    fn report_encodes_four_bytes() {
        let report = MouseReport::motion(-2, 1);
        assert_eq!(report.encode(), [0x00, 0x00, 0xFE, 0x01]);
    }

    #[test]
    fn zero_report_is_all_zero() {
        assert_eq!(MouseReport::default().encode(), [0x00; 4]);
    }

    #[test]
    fn extreme_deltas_survive_the_narrowing() {
        let report = MouseReport::motion(-127, 127);
        assert_eq!(report.encode(), [0x00, 0x00, 0x81, 0x7F]);
    }
}
