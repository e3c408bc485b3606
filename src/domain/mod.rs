//! Domain logic: sample integration, motion mapping, and settings.

pub mod cursor;
pub mod integrator;
pub mod mapper;
pub mod models;
pub mod settings;
