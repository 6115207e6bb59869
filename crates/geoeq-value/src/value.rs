//! Dual-tracked scalars.
//!
//! A [`Value`] is either an integer literal or an unknown of the equation
//! system. Alongside its identity it carries two samples:
//!
//! - `initial`: the best-known closed form, either an exact integer or
//!   another value (an "unknown constant" pinned down by its own equation);
//! - `float_initial`: an optional floating-point witness, only computed
//!   while the session tracks witnesses.
//!
//! Values are immutable once built. Samples are shared through [`Arc`] so
//! cloning a value never deep-copies its sample chain.

use dashu::integer::IBig;
use std::fmt;
use std::sync::Arc;

use geoeq_core::{EngineError, Result, VarId};

/// The best-known closed-form sample of a value.
#[derive(Clone, Debug, PartialEq)]
pub enum Sample {
    /// An exact integer.
    Integer(IBig),
    /// A symbolic sample, itself a value with its own defining equation.
    Value(Arc<Value>),
}

impl Sample {
    /// Lifts the sample back into a value: integers become literals.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Sample::Integer(n) => Value::literal(n.clone()),
            Sample::Value(v) => Value::clone(v),
        }
    }

    /// Returns the integer if the sample is exact.
    #[must_use]
    pub fn as_integer(&self) -> Option<&IBig> {
        match self {
            Sample::Integer(n) => Some(n),
            Sample::Value(_) => None,
        }
    }

    /// Returns true if the sample is a symbolic value.
    #[must_use]
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Sample::Value(_))
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sample::Integer(n) => write!(f, "{n}"),
            Sample::Value(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Sample {
    fn from(n: i64) -> Self {
        Sample::Integer(IBig::from(n))
    }
}

impl From<IBig> for Sample {
    fn from(n: IBig) -> Self {
        Sample::Integer(n)
    }
}

impl From<Value> for Sample {
    fn from(v: Value) -> Self {
        Sample::Value(Arc::new(v))
    }
}

/// A scalar of the generated algebraic system.
///
/// Kinds of values:
/// - integer literal: no unknown, integer sample;
/// - unknown constant: an unknown without a sample, bound only by equations;
/// - variable: an unknown whose sample is an integer or an unknown constant.
#[derive(Clone, Debug)]
pub struct Value {
    var: Option<VarId>,
    initial: Option<Sample>,
    float_initial: Option<f64>,
}

impl Value {
    /// Creates a value from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedValue`] if `var` is `None` and the
    /// sample is not an integer.
    pub fn new(var: Option<VarId>, initial: Option<Sample>) -> Result<Self> {
        if var.is_none() && !matches!(initial, Some(Sample::Integer(_))) {
            return Err(EngineError::MalformedValue);
        }
        Ok(Self {
            var,
            initial,
            float_initial: None,
        })
    }

    /// Creates an integer literal.
    #[must_use]
    pub fn literal(n: impl Into<IBig>) -> Self {
        Self {
            var: None,
            initial: Some(Sample::Integer(n.into())),
            float_initial: None,
        }
    }

    /// Creates an unknown with the given sample.
    #[must_use]
    pub fn unknown(var: VarId, initial: Option<Sample>) -> Self {
        Self {
            var: Some(var),
            initial,
            float_initial: None,
        }
    }

    /// Attaches a float witness.
    #[must_use]
    pub fn with_float_initial(mut self, witness: Option<f64>) -> Self {
        self.float_initial = witness;
        self
    }

    /// Returns the unknown, or `None` for a literal.
    #[must_use]
    pub fn var(&self) -> Option<VarId> {
        self.var
    }

    /// Returns the closed-form sample.
    #[must_use]
    pub fn initial(&self) -> Option<&Sample> {
        self.initial.as_ref()
    }

    /// Returns the stored float witness.
    #[must_use]
    pub fn float_initial(&self) -> Option<f64> {
        self.float_initial
    }

    /// Returns true if this is an integer literal.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.var.is_none()
    }

    /// Returns the integer of a literal.
    #[must_use]
    pub fn literal_value(&self) -> Option<&IBig> {
        if self.var.is_some() {
            return None;
        }
        self.initial.as_ref().and_then(Sample::as_integer)
    }

    /// Returns true for an unknown whose sample is known.
    #[must_use]
    pub fn is_tracked_variable(&self) -> bool {
        self.var.is_some() && self.initial.is_some()
    }

    /// Returns the integer sample.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingSample`] if the sample is absent or
    /// symbolic.
    pub fn initial_as_int(&self) -> Result<&IBig> {
        self.initial
            .as_ref()
            .and_then(Sample::as_integer)
            .ok_or_else(|| EngineError::MissingSample(self.to_string()))
    }

    /// Returns the numeric witness: the stored float, or the integer sample
    /// when one is known exactly.
    #[must_use]
    pub fn witness(&self) -> Option<f64> {
        self.float_initial
            .or_else(|| self.initial.as_ref()?.as_integer().map(integer_to_f64))
    }

    /// Converts the value into a sample: literals collapse to their integer,
    /// anything else is kept as a symbolic sample.
    #[must_use]
    pub fn into_sample(self) -> Sample {
        match (self.var, self.initial) {
            (None, Some(Sample::Integer(n))) => Sample::Integer(n),
            (var, initial) => Sample::from(Value {
                var,
                initial,
                float_initial: self.float_initial,
            }),
        }
    }

    /// Promotes an unknown constant into a value whose sample is itself.
    #[must_use]
    pub fn elevated(&self) -> Value {
        Value {
            var: self.var,
            initial: Some(Sample::from(self.clone())),
            float_initial: self.float_initial,
        }
    }
}

pub(crate) fn integer_to_f64(n: &IBig) -> f64 {
    n.to_f64().value()
}

// Identity and sample; the float witness is derived data.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.var == other.var && self.initial == other.initial
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.var, &self.initial) {
            (Some(var), _) => write!(f, "{var}"),
            (None, Some(sample)) => write!(f, "{sample}"),
            (None, None) => f.write_str("?"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::literal(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::literal(-5).to_string(), "-5");
        assert_eq!(Value::unknown(VarId::new(27), None).to_string(), "b1");
    }

    #[test]
    fn test_malformed_literal() {
        assert_eq!(Value::new(None, None), Err(EngineError::MalformedValue));
        let symbolic = Sample::from(Value::unknown(VarId::new(0), None));
        assert_eq!(Value::new(None, Some(symbolic)), Err(EngineError::MalformedValue));
        assert!(Value::new(None, Some(Sample::from(3))).is_ok());
    }

    #[test]
    fn test_initial_as_int() {
        let v = Value::unknown(VarId::new(0), Some(Sample::from(7)));
        assert_eq!(v.initial_as_int(), Ok(&IBig::from(7)));

        let c = Value::unknown(VarId::new(1), None);
        assert_eq!(
            c.initial_as_int(),
            Err(EngineError::MissingSample("b".to_string()))
        );
    }

    #[test]
    fn test_into_sample() {
        assert_eq!(Value::literal(4).into_sample(), Sample::from(4));

        let c = Value::unknown(VarId::new(2), None);
        assert_eq!(c.clone().into_sample(), Sample::from(c));
    }

    #[test]
    fn test_elevated() {
        let c = Value::unknown(VarId::new(3), None).with_float_initial(Some(1.5));
        let e = c.elevated();

        assert_eq!(e.var(), c.var());
        assert_eq!(e.initial(), Some(&Sample::from(c.clone())));
        assert_eq!(e.float_initial(), Some(1.5));
        assert!(e.is_tracked_variable());
        assert!(!c.is_tracked_variable());
    }

    #[test]
    fn test_witness_falls_back_to_integer() {
        let v = Value::unknown(VarId::new(0), Some(Sample::from(5)));
        assert_eq!(v.witness(), Some(5.0));
        assert_eq!(Value::unknown(VarId::new(0), None).witness(), None);
    }
}
