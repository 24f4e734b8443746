//! Domain models for VCA Paspoort

mod certificate;
mod employee;

pub use certificate::*;
pub use employee::*;
