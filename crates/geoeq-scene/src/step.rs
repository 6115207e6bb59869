//! Scene steps.
//!
//! A step defines one named object from literal coordinates or earlier
//! objects, or asserts an invariant over earlier objects.

use serde::{Deserialize, Serialize};

/// A scalar parameter of a step: an integer or an exact ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// An integer literal.
    Integer(i64),
    /// The rational literal `numer/denom`.
    Ratio {
        /// Numerator.
        numer: i32,
        /// Denominator.
        denom: i32,
    },
}

/// A relation the construction must keep while its free points move.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Invariant {
    /// The distance between two points is constant.
    PointDistance { a: String, b: String },
    /// The distance from a point to a line is constant.
    PointLineDistance { point: String, line: String },
    /// The angle between two lines is constant.
    LineAngle { l1: String, l2: String },
    /// The point lies on the line.
    Incidence { point: String, line: String },
}

impl Invariant {
    /// Names of the objects the invariant refers to.
    #[must_use]
    pub fn dependencies(&self) -> Vec<&str> {
        match self {
            Invariant::PointDistance { a, b } => vec![a.as_str(), b.as_str()],
            Invariant::PointLineDistance { point, line } | Invariant::Incidence { point, line } => {
                vec![point.as_str(), line.as_str()]
            }
            Invariant::LineAngle { l1, l2 } => vec![l1.as_str(), l2.as_str()],
        }
    }
}

/// One step of a scene.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// A point with literal coordinates.
    FixedPoint { name: String, x: i64, y: i64 },
    /// A free point sampled at `(x, y)`.
    FreePoint { name: String, x: i64, y: i64 },
    /// A free point sampled at `(x, y)` and constrained to `line`.
    SlidingPoint { name: String, x: i64, y: i64, line: String },
    /// The midpoint of `a` and `b`.
    Midpoint { name: String, a: String, b: String },
    /// The intersection of two lines.
    IntersectionPoint { name: String, l1: String, l2: String },
    /// The projection of `point` onto `line`.
    Projection { name: String, point: String, line: String },
    /// The reflection of `point` in `line`.
    Reflection { name: String, point: String, line: String },
    /// The point `a + k(b - a)`.
    ScaledVectorPoint { name: String, k: Scalar, a: String, b: String },
    /// The line through `a` and `b`.
    LineAb { name: String, a: String, b: String },
    /// The perpendicular bisector of `a` and `b`.
    PpBisector { name: String, a: String, b: String },
    /// The line through `point` perpendicular to `line`.
    PpToLine { name: String, point: String, line: String },
    /// The line through `point` parallel to `line`.
    PlToLine { name: String, point: String, line: String },
    /// An invariant over earlier objects.
    Invariant(Invariant),
    /// Records the trajectory of `point` in the plot store under `name`.
    Locus { name: String, point: String },
}

impl Step {
    /// The name this step defines, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Step::FixedPoint { name, .. }
            | Step::FreePoint { name, .. }
            | Step::SlidingPoint { name, .. }
            | Step::Midpoint { name, .. }
            | Step::IntersectionPoint { name, .. }
            | Step::Projection { name, .. }
            | Step::Reflection { name, .. }
            | Step::ScaledVectorPoint { name, .. }
            | Step::LineAb { name, .. }
            | Step::PpBisector { name, .. }
            | Step::PpToLine { name, .. }
            | Step::PlToLine { name, .. }
            | Step::Locus { name, .. } => Some(name.as_str()),
            Step::Invariant(_) => None,
        }
    }

    /// Names of the objects this step refers to, in argument order.
    #[must_use]
    pub fn dependencies(&self) -> Vec<&str> {
        match self {
            Step::FixedPoint { .. } | Step::FreePoint { .. } => Vec::new(),
            Step::SlidingPoint { line, .. } => vec![line.as_str()],
            Step::Midpoint { a, b, .. }
            | Step::ScaledVectorPoint { a, b, .. }
            | Step::LineAb { a, b, .. }
            | Step::PpBisector { a, b, .. } => vec![a.as_str(), b.as_str()],
            Step::IntersectionPoint { l1, l2, .. } => vec![l1.as_str(), l2.as_str()],
            Step::Projection { point, line, .. }
            | Step::Reflection { point, line, .. }
            | Step::PpToLine { point, line, .. }
            | Step::PlToLine { point, line, .. } => vec![point.as_str(), line.as_str()],
            Step::Invariant(invariant) => invariant.dependencies(),
            Step::Locus { point, .. } => vec![point.as_str()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_step_from_json() {
        let step: Step = serde_json::from_value(json!({
            "type": "sliding_point",
            "name": "S",
            "x": 5,
            "y": 0,
            "line": "L1",
        }))
        .unwrap();

        assert_eq!(
            step,
            Step::SlidingPoint {
                name: "S".to_string(),
                x: 5,
                y: 0,
                line: "L1".to_string(),
            }
        );
        assert_eq!(step.name(), Some("S"));
        assert_eq!(step.dependencies(), vec!["L1"]);
    }

    #[test]
    fn test_line_ab_tag() {
        let step = Step::LineAb {
            name: "L".to_string(),
            a: "A".to_string(),
            b: "B".to_string(),
        };

        let value = serde_json::to_value(&step).unwrap();

        assert_eq!(value["type"], "line_ab");
    }

    #[test]
    fn test_scalar_forms() {
        let k: Scalar = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(k, Scalar::Integer(3));

        let k: Scalar = serde_json::from_value(json!({"numer": 1, "denom": 3})).unwrap();
        assert_eq!(k, Scalar::Ratio { numer: 1, denom: 3 });
    }

    #[test]
    fn test_invariant_step() {
        let step: Step = serde_json::from_value(json!({
            "type": "invariant",
            "kind": "line_angle",
            "l1": "L1",
            "l2": "L2",
        }))
        .unwrap();

        assert_eq!(step.name(), None);
        assert_eq!(step.dependencies(), vec!["L1", "L2"]);
    }

    #[test]
    fn test_locus_is_named() {
        let step: Step = serde_json::from_value(json!({
            "type": "locus",
            "name": "trace",
            "point": "X",
        }))
        .unwrap();

        assert_eq!(step.name(), Some("trace"));
        assert_eq!(step.dependencies(), vec!["X"]);
    }

    #[test]
    fn test_unknown_step_type() {
        let result: Result<Step, _> = serde_json::from_value(json!({
            "type": "circle",
            "name": "C",
        }));
        assert!(result.is_err());
    }
}
