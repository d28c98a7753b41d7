//! # PlusHRM API
//!
//! HTTP surface for employee onboarding: signup and email verification.
//! The binary in `main.rs` wires configuration, storage and collaborators;
//! everything here is reusable from tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::{build_state, AppState, HealthState, Repositories};
