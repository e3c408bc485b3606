//! HID Mouse Module
//!
//! Emulates a Bluetooth HID mouse towards a paired host. The platform stack
//! owns the profile, pairing, and transport; this module owns the report
//! descriptor, report encoding, and the thin connection state machine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   HidMouseManager                    │
//! │  (state machine + report forwarding, public API)     │
//! └──────────────┬──────────────────────┬───────────────┘
//!                │                      │
//!                ▼                      ▼
//!        ┌──────────────┐       ┌──────────────┐
//!        │  descriptor  │       │   PeerLink   │
//!        │              │       │   (trait)    │
//!        │ - report map │       │ - submit()   │
//!        │ - SDP/QoS    │       │ - impl by    │
//!        │ - encoding   │       │   platform   │
//!        └──────────────┘       └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`descriptor`] - Fixed report descriptor, SDP/QoS constants, encoding
//! - [`link`] - `PeerLink` capability and the `HidMouseManager` state machine

pub mod descriptor;
pub mod link;

// Re-export the manager for convenience
pub use link::HidMouseManager;
