//! # geoeq-value
//!
//! The scalar value engine of geoeq.
//!
//! This crate provides:
//! - Dual-tracked scalars (`Value`): integer literals and named unknowns,
//!   each with an exact sample and an optional float witness
//! - Arithmetic that emits one defining equation per new unknown (`Algebra`)
//! - Exact rational literals (`RationalValue`)
//! - Scalar assertions (`is_constant`, `is_zero`)
//!
//! ## Equation Grammar
//!
//! Equations are `+`/`-`-separated products (`*`) of unknown names, integer
//! literals and integer powers (`^`), each implicitly equated to zero:
//!
//! | operation | equation        |
//! |-----------|-----------------|
//! | `a + b`   | `a + b - c`     |
//! | `a - b`   | `a - b - c`     |
//! | `a * b`   | `a*b - c`       |
//! | `a / b`   | `a - b*c`       |
//! | `-a`      | `a + c`         |
//! | `a^n`     | `a^n - c`       |
//! | `sqrt(a)` | `a^1 - c^2`     |
//! | `abs(a)`  | `a^2 - c^2`     |
//! | `n/d`     | `d*c - n`       |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assert;
pub mod engine;
pub mod power;
pub mod rational;
pub mod value;

#[cfg(test)]
mod proptests;

pub use assert::{is_constant, is_zero};
pub use engine::{elevate, Algebra};
pub use power::Exponent;
pub use rational::RationalValue;
pub use value::{Sample, Value};
