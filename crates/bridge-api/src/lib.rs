//! Bridge-api: HTTP API layer for the bridge amount utilities
//!
//! Exposes amount conversion and display formatting to the bridge front-end.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::{AppState, StateError};
