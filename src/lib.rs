//! Arena Mind - Fuzzy-Logic Tactical Brain

pub mod core;
pub mod fuzzy;
pub mod sim;
pub mod tactics;
pub mod telemetry;
