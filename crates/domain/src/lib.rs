//! Core domain for the Systematic Investment Plan (SIP) calculator.
//!
//! This crate holds everything that does not depend on a transport:
//! - Annuity-due future value math
//! - Cent rounding for published figures
//! - `SipRequest` / `SipResult` value objects
//! - The `SipCalculator` entry point

/// Prelude module for convenient imports.
pub mod prelude;

/// SIP projection entry point.
pub mod calculator;
/// Pure math helpers.
pub mod math;
/// Request and result value objects.
pub mod value_objects;

pub use calculator::{SipCalculator, calculate_sip};
pub use value_objects::{SipRequest, SipResult};
