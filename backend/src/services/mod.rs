//! Business logic services for VCA Paspoort

pub mod certificate;
pub mod employee;
