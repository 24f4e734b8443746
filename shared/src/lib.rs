//! Shared types and models for VCA Paspoort
//!
//! Holds the certificate status engine and the domain types shared between
//! the backend, the mobile front end (via WASM) and any other consumer.

pub mod clock;
pub mod error;
pub mod models;
pub mod pass;
pub mod roster;
pub mod status;
pub mod types;
pub mod validation;

pub use clock::*;
pub use error::*;
pub use models::*;
pub use pass::*;
pub use roster::*;
pub use status::*;
pub use types::*;
pub use validation::*;
