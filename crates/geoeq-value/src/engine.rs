//! The value engine.
//!
//! Every operation is described by an equation template, an exact integer
//! transform and a float transform. Applying an operation follows one rule:
//! operations between literals fold to a literal (when the exact transform
//! has an integer answer) and emit nothing; every other application
//! allocates exactly one unknown and emits exactly one equation relating it
//! to its operands.
//!
//! ## Samples
//!
//! The sample of a result is computed by applying the same operation to
//! the operands' samples, recursively. Integer-valued operations on integer
//! samples fold back to integers; anything else yields a fresh unknown
//! constant with its own defining equation, allocated before the result.
//!
//! ## Elevation
//!
//! Before a binary operation combines its operands, each operand without a
//! sample whose partner is an unknown with a known sample is *elevated*:
//! it is re-wrapped so that its sample is itself (see [`elevate`]). This
//! keeps sample propagation going when an opaque unknown constant meets a
//! tracked variable.

use dashu::base::Abs;
use dashu::integer::IBig;
use std::borrow::Cow;
use tracing::debug;

use geoeq_core::{EngineError, Result, Session};

use crate::power::{Exponent, Power};
use crate::rational::RationalValue;
use crate::value::{integer_to_f64, Value};

/// Scalar arithmetic over a construction session.
///
/// Implemented for [`Session`], so operations read as `session.add(&a, &b)`.
pub trait Algebra {
    /// Creates a literal, with its witness if the session tracks witnesses.
    fn literal(&mut self, n: impl Into<IBig>) -> Value;

    /// Allocates an unknown whose sample is the integer `n`.
    ///
    /// No equation is emitted: the unknown is a degree of freedom.
    fn fresh(&mut self, n: impl Into<IBig>) -> Value;

    /// Allocates a rational literal `numer/denom`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DivisionByZero`] if `denom` is zero.
    fn rational(&mut self, numer: i32, denom: i32) -> Result<RationalValue>;

    /// Negation. Equation: `a + b`.
    fn neg(&mut self, a: &Value) -> Value;

    /// Absolute value. Equation: `a^2 - b^2`.
    fn abs(&mut self, a: &Value) -> Value;

    /// Square root, as the rational power `1/2`. Equation: `a^1 - b^2`.
    fn sqrt(&mut self, a: &Value) -> Value;

    /// Integer power. Equation: `a^n - b`, or `1 - a^0*b` for `n = 0`.
    fn powi(&mut self, base: &Value, n: u16) -> Value;

    /// General power with a literal integer or rational exponent.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedPower`] for a symbolic exponent.
    fn pow<'e>(&mut self, base: &Value, exponent: impl Into<Exponent<'e>>) -> Result<Value>;

    /// Addition. Equation: `a + b - c`.
    fn add(&mut self, a: &Value, b: &Value) -> Value;

    /// Subtraction. Equation: `a - b - c`.
    fn sub(&mut self, a: &Value, b: &Value) -> Value;

    /// Multiplication. Equation: `a*b - c`.
    fn mul(&mut self, a: &Value, b: &Value) -> Value;

    /// Division, defined implicitly. Equation: `a - b*c`.
    ///
    /// Two literals fold only when the quotient is an integer.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DivisionByZero`] for a literal zero divisor and
    /// [`EngineError::DegenerateConstruction`] for an unknown divisor whose
    /// integer sample is zero.
    fn div(&mut self, a: &Value, b: &Value) -> Result<Value>;
}

/// A unary operation.
struct UnaryOp<'a> {
    /// Equation from (operand, result).
    equation: &'a dyn Fn(&Value, &Value) -> String,
    /// Exact transform; `None` when the result is not an integer.
    exact: &'a dyn Fn(&IBig) -> Option<IBig>,
    float: &'a dyn Fn(f64) -> f64,
}

/// A binary operation.
struct BinaryOp<'a> {
    /// Equation from (lhs, rhs, result).
    equation: &'a dyn Fn(&Value, &Value, &Value) -> String,
    /// Exact transform; `None` when the result is not an integer.
    exact: &'a dyn Fn(&IBig, &IBig) -> Option<IBig>,
    float: &'a dyn Fn(f64, f64) -> f64,
}

/// Normalizes the operands of a binary operation.
///
/// An operand without a sample is elevated (its sample becomes itself)
/// when the other operand is an unknown with a known sample. At most one
/// operand is ever elevated: elevation requires the partner to have a
/// sample, which the elevated operand lacks.
#[must_use]
pub fn elevate<'a>(lhs: &'a Value, rhs: &'a Value) -> (Cow<'a, Value>, Cow<'a, Value>) {
    let lift = |operand: &'a Value, partner: &Value| {
        if operand.initial().is_none() && partner.is_tracked_variable() {
            debug!(operand = %operand, "elevated unknown constant");
            Cow::Owned(operand.elevated())
        } else {
            Cow::Borrowed(operand)
        }
    };
    (lift(lhs, rhs), lift(rhs, lhs))
}

fn witness(session: &Session, v: &Value) -> Option<f64> {
    if session.tracks_witness() {
        v.witness()
    } else {
        None
    }
}

fn apply_unary(session: &mut Session, operand: &Value, op: &UnaryOp<'_>) -> Value {
    if let Some(folded) = operand.literal_value().and_then(op.exact) {
        debug!(operand = %operand, result = %folded, "folded literal operation");
        return session.literal(folded);
    }

    let initial = match operand.initial() {
        Some(sample) if !operand.is_literal() => {
            Some(apply_unary(session, &sample.to_value(), op).into_sample())
        }
        _ => None,
    };
    let float = witness(session, operand).map(op.float);

    let result = Value::unknown(session.next_var(), initial).with_float_initial(float);
    session.emit((op.equation)(operand, &result));
    result
}

fn apply_binary(session: &mut Session, lhs: &Value, rhs: &Value, op: &BinaryOp<'_>) -> Value {
    if let (Some(a), Some(b)) = (lhs.literal_value(), rhs.literal_value()) {
        if let Some(folded) = (op.exact)(a, b) {
            debug!(lhs = %a, rhs = %b, result = %folded, "folded literal operation");
            return session.literal(folded);
        }
    }

    let (lhs, rhs) = elevate(lhs, rhs);
    let initial = match (lhs.initial(), rhs.initial()) {
        (Some(a), Some(b)) if !(lhs.is_literal() && rhs.is_literal()) => {
            Some(apply_binary(session, &a.to_value(), &b.to_value(), op).into_sample())
        }
        _ => None,
    };
    let float = match (witness(session, &lhs), witness(session, &rhs)) {
        (Some(a), Some(b)) => Some((op.float)(a, b)),
        _ => None,
    };

    let result = Value::unknown(session.next_var(), initial).with_float_initial(float);
    session.emit((op.equation)(lhs.as_ref(), rhs.as_ref(), &result));
    result
}

/// Returns `x` if `1/x` is an integer.
fn unit_reciprocal(x: &IBig) -> Option<IBig> {
    (*x == IBig::ONE || *x == -IBig::ONE).then(|| x.clone())
}

/// Exact `d`-th root of `p`, principal for even `d`.
///
/// Candidates are found through `f64`, so only magnitudes below 2^53 are
/// considered; larger powers are left unfolded.
fn exact_root(p: &IBig, d: i64) -> Option<IBig> {
    let degree = usize::try_from(d).ok()?;
    if degree == 1 {
        return Some(p.clone());
    }
    let negative = *p < IBig::ZERO;
    if negative && degree % 2 == 0 {
        return None;
    }
    let magnitude = integer_to_f64(p).abs();
    if !magnitude.is_finite() || magnitude > F64_EXACT_LIMIT {
        return None;
    }
    let guess = magnitude.powf(1.0 / d as f64).round() as i64;
    (guess.saturating_sub(1)..=guess.saturating_add(1))
        .filter(|r| *r >= 0)
        .map(|r| if negative { -IBig::from(r) } else { IBig::from(r) })
        .find(|r| r.pow(degree) == *p)
}

const F64_EXACT_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Real value of `x^(numer/denom)`, taking the real root for a negative
/// base and odd `denom`.
fn real_power(x: f64, numer: i64, denom: i64) -> f64 {
    if x < 0.0 && denom % 2 != 0 {
        let root = -(-x).powf(1.0 / denom as f64);
        i32::try_from(numer).map_or(f64::NAN, |n| root.powi(n))
    } else {
        x.powf(numer as f64 / denom as f64)
    }
}

fn apply_power(session: &mut Session, base: &Value, power: Power) -> Value {
    match power {
        Power::Integer(n) if n > 0 => {
            let exp = n.unsigned_abs() as usize;
            apply_unary(
                session,
                base,
                &UnaryOp {
                    equation: &|a: &Value, b: &Value| format!("{a}^{n} - {b}"),
                    exact: &|x: &IBig| Some(x.pow(exp)),
                    float: &|x: f64| x.powi(n),
                },
            )
        }
        Power::Integer(n) => {
            let k = n.unsigned_abs() as usize;
            apply_unary(
                session,
                base,
                &UnaryOp {
                    equation: &|a: &Value, b: &Value| match a.literal_value() {
                        Some(x) => format!("1 - {}*{b}", x.pow(k)),
                        None => format!("1 - {a}^{k}*{b}"),
                    },
                    exact: &|x: &IBig| unit_reciprocal(&x.pow(k)),
                    float: &|x: f64| x.powi(n),
                },
            )
        }
        Power::Ratio { numer, denom } => {
            let k = numer.unsigned_abs() as usize;
            let equation = move |a: &Value, b: &Value| match (numer > 0, a.literal_value()) {
                (true, Some(x)) => format!("{} - {b}^{denom}", x.pow(k)),
                (true, None) => format!("{a}^{numer} - {b}^{denom}"),
                (false, Some(x)) => format!("1 - {}*{b}^{denom}", x.pow(k)),
                (false, None) => format!("1 - {a}^{k}*{b}^{denom}"),
            };
            let exact = move |x: &IBig| {
                let root = exact_root(&x.pow(k), denom)?;
                if numer > 0 {
                    Some(root)
                } else {
                    unit_reciprocal(&root)
                }
            };
            apply_unary(
                session,
                base,
                &UnaryOp {
                    equation: &equation,
                    exact: &exact,
                    float: &|x: f64| real_power(x, numer, denom),
                },
            )
        }
    }
}

impl Algebra for Session {
    fn literal(&mut self, n: impl Into<IBig>) -> Value {
        let v = Value::literal(n);
        let float = witness(self, &v);
        v.with_float_initial(float)
    }

    fn fresh(&mut self, n: impl Into<IBig>) -> Value {
        let n = n.into();
        let float = self.tracks_witness().then(|| integer_to_f64(&n));
        Value::unknown(self.next_var(), Some(n.into())).with_float_initial(float)
    }

    fn rational(&mut self, numer: i32, denom: i32) -> Result<RationalValue> {
        RationalValue::new(self, numer, denom)
    }

    fn neg(&mut self, a: &Value) -> Value {
        apply_unary(
            self,
            a,
            &UnaryOp {
                equation: &|a: &Value, b: &Value| format!("{a} + {b}"),
                exact: &|x: &IBig| Some(-x.clone()),
                float: &|x: f64| -x,
            },
        )
    }

    fn abs(&mut self, a: &Value) -> Value {
        apply_unary(
            self,
            a,
            &UnaryOp {
                equation: &|a: &Value, b: &Value| format!("{a}^2 - {b}^2"),
                exact: &|x: &IBig| Some(x.clone().abs()),
                float: &f64::abs,
            },
        )
    }

    fn sqrt(&mut self, a: &Value) -> Value {
        apply_power(self, a, Power::Ratio { numer: 1, denom: 2 })
    }

    fn powi(&mut self, base: &Value, n: u16) -> Value {
        apply_power(self, base, Power::Integer(i32::from(n)))
    }

    fn pow<'e>(&mut self, base: &Value, exponent: impl Into<Exponent<'e>>) -> Result<Value> {
        let power = exponent.into().resolve()?;
        Ok(apply_power(self, base, power))
    }

    fn add(&mut self, a: &Value, b: &Value) -> Value {
        apply_binary(
            self,
            a,
            b,
            &BinaryOp {
                equation: &|a: &Value, b: &Value, c: &Value| format!("{a} + {b} - {c}"),
                exact: &|x: &IBig, y: &IBig| Some(x + y),
                float: &|x: f64, y: f64| x + y,
            },
        )
    }

    fn sub(&mut self, a: &Value, b: &Value) -> Value {
        apply_binary(
            self,
            a,
            b,
            &BinaryOp {
                equation: &|a: &Value, b: &Value, c: &Value| format!("{a} - {b} - {c}"),
                exact: &|x: &IBig, y: &IBig| Some(x - y),
                float: &|x: f64, y: f64| x - y,
            },
        )
    }

    fn mul(&mut self, a: &Value, b: &Value) -> Value {
        apply_binary(
            self,
            a,
            b,
            &BinaryOp {
                equation: &|a: &Value, b: &Value, c: &Value| format!("{a}*{b} - {c}"),
                exact: &|x: &IBig, y: &IBig| Some(x * y),
                float: &|x: f64, y: f64| x * y,
            },
        )
    }

    fn div(&mut self, a: &Value, b: &Value) -> Result<Value> {
        if let Some(n) = b.literal_value() {
            if n.is_zero() {
                return Err(EngineError::DivisionByZero);
            }
        } else if b.initial().and_then(|s| s.as_integer()).is_some_and(IBig::is_zero) {
            return Err(EngineError::DegenerateConstruction(b.to_string()));
        }

        Ok(apply_binary(
            self,
            a,
            b,
            &BinaryOp {
                equation: &|a: &Value, b: &Value, c: &Value| format!("{a} - {b}*{c}"),
                exact: &|x: &IBig, y: &IBig| {
                    if y.is_zero() || !(x % y).is_zero() {
                        None
                    } else {
                        Some(x / y)
                    }
                },
                float: &|x: f64, y: f64| x / y,
            },
        ))
    }
}
