//! Infrastructure: platform capabilities and ambient services.

pub mod hid;
pub mod logging;
pub mod sensor;
