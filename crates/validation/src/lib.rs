//! # validation
//!
//! Fail-fast guards for values that flow into DOM construction or numeric
//! computation.
//!
//! Every guard either hands its input back unchanged or returns a
//! [`ValidationError`] naming why it was rejected. Guards never mutate, trim
//! or coerce their input.
//!
//! Guards accept anything convertible into a [`Scalar`], so statically typed
//! callers pass `f64`/`&str` directly while dynamic callers (attribute values,
//! decoded payloads) can hand over a mismatched type and get a
//! [`ValidationError::TypeMismatch`] or [`ValidationError::InvalidNumber`]
//! instead of a silent coercion.
//!
//! ```
//! use validation::{valid_number_non_zero, valid_string, ValidationError};
//!
//! assert_eq!(valid_string("  padded  "), Ok("  padded  "));
//! assert_eq!(valid_number_non_zero(0.0), Err(ValidationError::DivisionByZeroRisk));
//! ```

mod element_name;
mod error;
mod number;
mod scalar;
mod string;

pub use element_name::{INPUT_ELEMENT_NAMES, valid_input_element_name};
pub use error::{Result, ValidationError};
pub use number::{valid_number, valid_number_non_zero, valid_number_or_infinite};
pub use scalar::Scalar;
pub use string::{is_blank, valid_string};
