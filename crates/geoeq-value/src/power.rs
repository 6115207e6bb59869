//! Exponents accepted by the engine.
//!
//! Only two shapes of exponent are supported: literal integers and exact
//! rationals. Anything symbolic is rejected when the exponent is resolved.

use geoeq_core::{EngineError, Result};

use crate::rational::RationalValue;
use crate::value::Value;

/// An exponent as passed by the client.
#[derive(Clone, Copy, Debug)]
pub enum Exponent<'a> {
    /// A value; must be an integer literal.
    Value(&'a Value),
    /// A rational literal.
    Rational(&'a RationalValue),
    /// A plain integer.
    Integer(i32),
}

impl<'a> From<&'a Value> for Exponent<'a> {
    fn from(v: &'a Value) -> Self {
        Exponent::Value(v)
    }
}

impl<'a> From<&'a RationalValue> for Exponent<'a> {
    fn from(q: &'a RationalValue) -> Self {
        Exponent::Rational(q)
    }
}

impl From<i32> for Exponent<'_> {
    fn from(n: i32) -> Self {
        Exponent::Integer(n)
    }
}

/// A validated exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Power {
    /// `base^n`.
    Integer(i32),
    /// `base^(numer/denom)`, `denom > 0`.
    Ratio { numer: i64, denom: i64 },
}

impl Exponent<'_> {
    /// Validates the exponent.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedPower`] for a symbolic exponent or
    /// an integer outside the `i32` range.
    pub(crate) fn resolve(self) -> Result<Power> {
        match self {
            Exponent::Integer(n) => Ok(Power::Integer(n)),
            Exponent::Rational(q) => Ok(Power::Ratio {
                numer: q.numer(),
                denom: q.denom(),
            }),
            Exponent::Value(v) => {
                let n = v
                    .literal_value()
                    .ok_or_else(|| EngineError::UnsupportedPower(v.to_string()))?;
                i32::try_from(n.clone())
                    .map(Power::Integer)
                    .map_err(|_| EngineError::UnsupportedPower(v.to_string()))
            }
        }
    }
}
