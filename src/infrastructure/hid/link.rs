//! Peer link and connection state machine
//!
//! The host Bluetooth stack owns pairing, transport, and HID framing; this
//! module only records what the platform callbacks deliver and hands encoded
//! reports to the active peer link. No handshake, retry, or reconnection
//! logic lives here.

use crate::domain::models::{AppEvent, LinkStatus, MessageSeverity, MouseDelta, StatusMessage};
use crate::infrastructure::hid::descriptor::{MouseReport, RegistrationConfig};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

#[derive(Debug, Error)]
pub enum LinkError {
    /// Runtime permission for the privileged operation is missing.
    #[error("bluetooth permission not granted")]
    PermissionDenied,
    /// The peer went away between the connection callback and the submit.
    #[error("no peer connected")]
    NotConnected,
    /// Platform-level failure while submitting the report.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Capability for an active connection that accepts encoded HID reports.
///
/// Implemented by the platform Bluetooth glue in production and by mocks in
/// tests; the pipeline never sees anything beyond this trait.
pub trait PeerLink: Send {
    fn submit(&mut self, report: &[u8]) -> Result<(), LinkError>;
}

struct LinkState {
    status: LinkStatus,
    peer: Option<Box<dyn PeerLink>>,
}

/// Records the registration handle and current peer, and forwards motion
/// reports while a peer is connected.
///
/// Transitions are driven entirely by platform callbacks:
/// `Unregistered -> Registered -> Connected`, back to `Registered` on
/// disconnect. Callbacks arrive on the Bluetooth worker context while
/// `send_motion` runs on the sensor context, so the state sits behind a
/// mutex (single writer, single reader).
pub struct HidMouseManager {
    config: RegistrationConfig,
    state: Arc<Mutex<LinkState>>,
    event_sender: mpsc::UnboundedSender<AppEvent>,
}

impl HidMouseManager {
    pub fn new(config: RegistrationConfig, event_sender: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            config,
            state: Arc::new(Mutex::new(LinkState {
                status: LinkStatus::Unregistered,
                peer: None,
            })),
            event_sender,
        }
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    /// Platform callback: the HID app was registered with the host stack.
    pub fn on_app_registered(&self) {
        let mut state = self.state.lock().unwrap();
        state.status = LinkStatus::Registered;
        info!("HID app registered as '{}'", self.config.name);
        self.publish(LinkStatus::Registered);
        self.publish_message(
            format!("HID app registered as '{}'", self.config.name),
            MessageSeverity::Success,
        );
    }

    /// Platform callback: the profile service went away. Clears the peer.
    pub fn on_app_unregistered(&self) {
        let mut state = self.state.lock().unwrap();
        state.status = LinkStatus::Unregistered;
        state.peer = None;
        info!("HID app unregistered");
        self.publish(LinkStatus::Unregistered);
        self.publish_message("HID app unregistered".to_string(), MessageSeverity::Warning);
    }

    /// Platform callback: a peer connected. Stores the peer reference.
    pub fn on_peer_connected(&self, peer: Box<dyn PeerLink>) {
        let mut state = self.state.lock().unwrap();
        state.status = LinkStatus::Connected;
        state.peer = Some(peer);
        info!("Peer connected");
        self.publish(LinkStatus::Connected);
        self.publish_message("Peer connected".to_string(), MessageSeverity::Success);
    }

    /// Platform callback: the peer disconnected. Back to registered.
    pub fn on_peer_disconnected(&self) {
        let mut state = self.state.lock().unwrap();
        if state.status == LinkStatus::Connected {
            state.status = LinkStatus::Registered;
        }
        state.peer = None;
        info!("Peer disconnected");
        self.publish(state.status);
        self.publish_message("Peer disconnected".to_string(), MessageSeverity::Info);
    }

    pub fn status(&self) -> LinkStatus {
        self.state.lock().unwrap().status
    }

    /// Submit a motion report to the connected peer, if any.
    ///
    /// With no peer this is a silent skip. Submission failures are logged
    /// and swallowed; nothing propagates back to the sensor pipeline.
    pub fn send_motion(&self, delta: MouseDelta) {
        let mut state = self.state.lock().unwrap();
        let peer = match state.peer.as_mut() {
            Some(peer) => peer,
            None => {
                trace!("No peer connected, dropping motion report");
                return;
            }
        };

        let report = MouseReport::motion(delta.dx, delta.dy);
        match peer.submit(&report.encode()) {
            Ok(()) => trace!("Sent motion report ({}, {})", delta.dx, delta.dy),
            Err(LinkError::PermissionDenied) => {
                warn!("Cannot send HID report: bluetooth permission not granted");
            }
            Err(e) => debug!("Failed to send HID report: {}", e),
        }
    }

    fn publish(&self, status: LinkStatus) {
        let _ = self.event_sender.send(AppEvent::LinkStatus(status));
    }

    fn publish_message(&self, message: String, severity: MessageSeverity) {
        let _ = self
            .event_sender
            .send(AppEvent::LogMessage(StatusMessage { message, severity }));
    }
}
