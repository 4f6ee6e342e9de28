//! DTO modules that bridge the gateway's wire formats with domain types.

pub mod api;
pub mod lookup;
