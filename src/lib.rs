//! Command-line client for the NeuraLint code review service.
//!
//! The analysis engine lives behind one HTTP endpoint; this crate owns the
//! result contract, the analyze client, the single-flight session workflow,
//! and the categorized report rendering.

pub mod adapters;
pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
