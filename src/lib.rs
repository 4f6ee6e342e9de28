//! Headless client-creation core of a recruitment-agency CRM.
//!
//! The crate drives the four-tab "create client" wizard (general info,
//! contacts, per-business-line contracts, documents) as a plain state machine:
//! no UI, no global state. A frontend applies [`wizard::WizardAction`]s to a
//! [`wizard::WizardState`], lets the contract sub-forms in [`forms::contract`]
//! commit atomically into the draft, and finally calls
//! [`services::client::submit_client`] to validate, assemble the multipart
//! payload, and POST it through a [`gateway::ClientGateway`].
//!
//! With the default `http` feature the [`gateway::http::RestGateway`] talks to
//! the CRM backend and the public geocoding/country services; with only the
//! `data` feature the crate compiles without any networking.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod payload;
#[cfg(feature = "data")]
pub mod wizard;

#[cfg(feature = "http")]
mod error_conversions;
#[cfg(feature = "http")]
pub mod gateway;
#[cfg(feature = "http")]
pub mod models;
#[cfg(feature = "http")]
pub mod services;
