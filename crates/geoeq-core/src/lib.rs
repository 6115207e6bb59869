//! # geoeq-core
//!
//! Session state for the geoeq equation generator.
//!
//! This crate provides:
//! - Dense unknown identifiers with alphabetic display names
//! - Append-only equation and plot stores
//! - Session configuration (float-witness toggle)
//! - The shared [`EngineError`] type
//!
//! ## Design Principles
//!
//! - **Explicit Sessions**: No process-wide state; every operation takes the session it mutates
//! - **One Equation per Unknown**: Allocation and emission are paired by the engine crates
//! - **Zero-Cost Identifiers**: 32-bit indices instead of named strings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod session;
pub mod store;
pub mod var;

#[cfg(test)]
mod proptests;

pub use error::{EngineError, Result};
pub use session::{Session, SessionConfig};
pub use store::{ConstructionOutput, Equation, Plot};
pub use var::VarId;
