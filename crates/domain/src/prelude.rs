//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use sipcalc_domain::prelude::*;
//!
//! let result = calculate_sip(1000.0, 12.0, 1.0).rounded();
//! assert_eq!(result.invested_amount, 12000.0);
//! ```

// Calculator
pub use crate::calculator::{SipCalculator, calculate_sip};

// Math
pub use crate::math::annuity::{future_value_annuity_due, monthly_rate, number_of_months};
pub use crate::math::rounding::round_to_cents;

// Value objects
pub use crate::value_objects::{SipRequest, SipResult};
