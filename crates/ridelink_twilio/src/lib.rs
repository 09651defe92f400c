// --- File: crates/ridelink_twilio/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_test;
pub mod routes;
#[cfg(test)]
mod routes_test;
