//! Domain aggregates and value objects for the client-creation core.

pub mod client;
pub mod contact;
pub mod contract;
pub mod types;
pub mod upload;
