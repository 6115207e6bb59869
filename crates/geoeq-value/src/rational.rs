//! Exact rational literals.
//!
//! A rational literal `n/d` is an unknown `r` governed by the single
//! equation `d*r - n`. Its integer sample is left absent; the float witness
//! is `n/d` when the session tracks witnesses.

use std::fmt;

use geoeq_core::{EngineError, Result, Session};

use crate::value::Value;

/// An unknown pinned to the exact fraction `numer/denom`.
///
/// The denominator is always positive.
#[derive(Clone, Debug, PartialEq)]
pub struct RationalValue {
    value: Value,
    numer: i64,
    denom: i64,
}

impl RationalValue {
    /// Allocates the unknown and emits its governing equation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DivisionByZero`] if the denominator is zero.
    pub fn new(session: &mut Session, numer: i32, denom: i32) -> Result<Self> {
        if denom == 0 {
            return Err(EngineError::DivisionByZero);
        }
        let (numer, denom) = if denom < 0 {
            (-i64::from(numer), -i64::from(denom))
        } else {
            (i64::from(numer), i64::from(denom))
        };

        let witness = session
            .tracks_witness()
            .then(|| numer as f64 / denom as f64);
        let value = Value::unknown(session.next_var(), None).with_float_initial(witness);
        session.emit(format!("{denom}*{value} - {numer}"));

        Ok(Self {
            value,
            numer,
            denom,
        })
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numer(&self) -> i64 {
        self.numer
    }

    /// Returns the (positive) denominator.
    #[must_use]
    pub fn denom(&self) -> i64 {
        self.denom
    }

    /// Returns the underlying unknown.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.value
    }
}

impl AsRef<Value> for RationalValue {
    fn as_ref(&self) -> &Value {
        &self.value
    }
}

impl From<RationalValue> for Value {
    fn from(q: RationalValue) -> Self {
        q.value
    }
}

impl fmt::Display for RationalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
