// --- File: crates/ridelink_common/src/lib.rs ---

// Declare modules within this crate
pub mod http; // HTTP utilities shared by the provider crates
pub mod logging; // Logging utilities

// Re-export HTTP utilities for easier access
pub use http::{error_body, HTTP_CLIENT};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};
