//! Terminal assertions on scalars.
//!
//! Assertions turn a derived value into final equations. Both the value and
//! its symbolic sample are constrained, so the sample track keeps
//! satisfying every asserted relation.

use geoeq_core::{EngineError, Result, Session};

use crate::value::{Sample, Value};

/// Binds an unknown to its current sample: emits `v - sample`.
///
/// Literals are already constant and emit nothing.
///
/// # Errors
///
/// Returns [`EngineError::UnknownWithoutSample`] if the unknown has no
/// sample.
pub fn is_constant(session: &mut Session, value: &Value) -> Result<()> {
    if value.is_literal() {
        return Ok(());
    }
    let sample = value
        .initial()
        .ok_or_else(|| EngineError::UnknownWithoutSample(value.to_string()))?;
    session.emit(format!("{value} - {sample}"));
    Ok(())
}

/// Asserts that a value is zero: emits `v`, plus the sample when the sample
/// is symbolic.
///
/// # Errors
///
/// Returns [`EngineError::InconsistentConstant`] if the integer sample is
/// non-zero, and [`EngineError::WitnessViolation`] if the session tracks
/// witnesses and the witness is not within tolerance of zero. Nothing is
/// emitted on failure.
pub fn is_zero(session: &mut Session, value: &Value) -> Result<()> {
    if let Some(n) = value.initial().and_then(Sample::as_integer) {
        if !n.is_zero() {
            return Err(EngineError::InconsistentConstant {
                value: value.to_string(),
                sample: n.to_string(),
            });
        }
    }
    if value.is_literal() {
        return Ok(());
    }
    check_witness(session, value)?;

    session.emit(value.to_string());
    if let Some(sample @ Sample::Value(_)) = value.initial() {
        session.emit(sample.to_string());
    }
    Ok(())
}

fn check_witness(session: &Session, value: &Value) -> Result<()> {
    if !session.tracks_witness() {
        return Ok(());
    }
    match value.witness() {
        Some(w) if w.is_nan() || w.abs() > session.config().witness_tolerance => {
            Err(EngineError::WitnessViolation {
                value: value.to_string(),
                witness: w,
            })
        }
        _ => Ok(()),
    }
}
