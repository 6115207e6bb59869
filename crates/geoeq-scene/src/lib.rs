//! # geoeq-scene
//!
//! Named construction scripts.
//!
//! A [`Scene`] is an ordered list of [`Step`]s, each defining a named point
//! or line from literal coordinates and earlier objects, or asserting an
//! [`Invariant`] over them. Scenes are plain data: they (de)serialize as
//! JSON and are evaluated against a fresh session on demand.
//!
//! ```
//! use geoeq_core::SessionConfig;
//! use geoeq_scene::Scene;
//!
//! let scene = Scene::from_json(r#"{
//!     "steps": [
//!         {"type": "fixed_point", "name": "A", "x": -1, "y": 0},
//!         {"type": "fixed_point", "name": "B", "x": 1, "y": 0},
//!         {"type": "line_ab", "name": "L", "a": "A", "b": "B"},
//!         {"type": "free_point", "name": "X", "x": 0, "y": 2},
//!         {"type": "invariant", "kind": "point_line_distance", "point": "X", "line": "L"}
//!     ]
//! }"#).unwrap();
//!
//! let output = scene.evaluate(SessionConfig::default()).unwrap();
//! assert!(!output.equations.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod scene;
pub mod step;

#[cfg(test)]
mod proptests;

pub use error::SceneError;
pub use scene::Scene;
pub use step::{Invariant, Scalar, Step};
