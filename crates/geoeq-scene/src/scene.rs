//! Scenes: ordered construction scripts over named objects.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use geoeq_core::{ConstructionOutput, Session, SessionConfig};
use geoeq_geometry::{angle_is_constant, distance_is_constant, plot, Line, Point};
use geoeq_value::{Algebra, Value};

use crate::error::{Result, SceneError};
use crate::step::{Invariant, Scalar, Step};

/// An object defined by a step.
#[derive(Clone, Debug)]
enum Object {
    Point(Point),
    Line(Line),
    /// A plotted trajectory; only its name is reserved.
    Locus,
}

/// An ordered list of construction steps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    steps: Vec<Step>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Appends a step in place.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// The steps, in evaluation order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Parses a scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Parse`] for malformed input.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the scene to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Names the object `name` is built from, or `None` if no step defines
    /// `name`.
    #[must_use]
    pub fn dependencies(&self, name: &str) -> Option<Vec<&str>> {
        self.steps
            .iter()
            .find(|step| step.name() == Some(name))
            .map(Step::dependencies)
    }

    /// Runs every step in a fresh session and returns what it produced.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error.
    pub fn evaluate(&self, config: SessionConfig) -> Result<ConstructionOutput> {
        let mut session = Session::with_config(config);
        self.apply(&mut session)?;
        info!(
            steps = self.steps.len(),
            unknowns = session.var_count(),
            equations = session.equations().len(),
            "evaluated scene"
        );
        Ok(session.finish())
    }

    /// Runs every step against an existing session.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error. Earlier steps' equations stay
    /// in the session.
    pub fn apply(&self, session: &mut Session) -> Result<()> {
        let mut eval = Evaluator {
            session,
            objects: HashMap::new(),
        };
        for step in &self.steps {
            eval.step(step)?;
        }
        Ok(())
    }
}

struct Evaluator<'s> {
    session: &'s mut Session,
    objects: HashMap<String, Object>,
}

impl Evaluator<'_> {
    fn object(&self, name: &str) -> Result<&Object> {
        self.objects
            .get(name)
            .ok_or_else(|| SceneError::UnknownObject(name.to_string()))
    }

    fn point(&self, name: &str) -> Result<Point> {
        match self.object(name)? {
            Object::Point(p) => Ok(p.clone()),
            Object::Line(_) | Object::Locus => Err(SceneError::WrongKind {
                name: name.to_string(),
                expected: "point",
            }),
        }
    }

    fn line(&self, name: &str) -> Result<Line> {
        match self.object(name)? {
            Object::Line(l) => Ok(l.clone()),
            Object::Point(_) | Object::Locus => Err(SceneError::WrongKind {
                name: name.to_string(),
                expected: "line",
            }),
        }
    }

    fn define(&mut self, name: &str, object: Object) {
        self.objects.insert(name.to_string(), object);
    }

    fn scalar(&mut self, k: Scalar) -> Result<Value> {
        match k {
            Scalar::Integer(n) => Ok(self.session.literal(n)),
            Scalar::Ratio { numer, denom } => {
                Ok(self.session.rational(numer, denom)?.into())
            }
        }
    }

    fn step(&mut self, step: &Step) -> Result<()> {
        if let Some(name) = step.name() {
            if self.objects.contains_key(name) {
                return Err(SceneError::DuplicateObject(name.to_string()));
            }
        }
        let object = match step {
            Step::FixedPoint { x, y, .. } => Object::Point(Point::fixed(*x, *y)),
            Step::FreePoint { x, y, .. } => Object::Point(Point::free(self.session, *x, *y)),
            Step::SlidingPoint { x, y, line, .. } => {
                let line = self.line(line)?;
                Object::Point(Point::sliding(self.session, *x, *y, &line)?)
            }
            Step::Midpoint { a, b, .. } => {
                let (a, b) = (self.point(a)?, self.point(b)?);
                Object::Point(Point::midpoint(self.session, &a, &b)?)
            }
            Step::IntersectionPoint { l1, l2, .. } => {
                let (l1, l2) = (self.line(l1)?, self.line(l2)?);
                Object::Point(Point::intersection(self.session, &l1, &l2)?)
            }
            Step::Projection { point, line, .. } => {
                let (p, l) = (self.point(point)?, self.line(line)?);
                Object::Point(Point::projection(self.session, &p, &l)?)
            }
            Step::Reflection { point, line, .. } => {
                let (p, l) = (self.point(point)?, self.line(line)?);
                Object::Point(Point::reflection(self.session, &p, &l)?)
            }
            Step::ScaledVectorPoint { k, a, b, .. } => {
                let (a, b) = (self.point(a)?, self.point(b)?);
                let k = self.scalar(*k)?;
                Object::Point(Point::scaled_vector(self.session, &k, &a, &b))
            }
            Step::LineAb { a, b, .. } => {
                let (a, b) = (self.point(a)?, self.point(b)?);
                Object::Line(Line::through(self.session, &a, &b))
            }
            Step::PpBisector { a, b, .. } => {
                let (a, b) = (self.point(a)?, self.point(b)?);
                Object::Line(Line::perpendicular_bisector(self.session, &a, &b)?)
            }
            Step::PpToLine { point, line, .. } => {
                let (p, l) = (self.point(point)?, self.line(line)?);
                Object::Line(Line::perpendicular_to(self.session, &p, &l))
            }
            Step::PlToLine { point, line, .. } => {
                let (p, l) = (self.point(point)?, self.line(line)?);
                Object::Line(Line::parallel_to(&p, &l))
            }
            Step::Invariant(invariant) => return self.invariant(invariant),
            Step::Locus { name, point } => {
                let p = self.point(point)?;
                plot(self.session, name, &p);
                Object::Locus
            }
        };
        if let Some(name) = step.name() {
            debug!(name, unknowns = self.session.var_count(), "defined object");
            self.define(name, object);
        }
        Ok(())
    }

    fn invariant(&mut self, invariant: &Invariant) -> Result<()> {
        match invariant {
            Invariant::PointDistance { a, b } => {
                let (a, b) = (self.point(a)?, self.point(b)?);
                distance_is_constant(self.session, &a, &b)?;
            }
            Invariant::PointLineDistance { point, line } => {
                let (p, l) = (self.point(point)?, self.line(line)?);
                distance_is_constant(self.session, &p, &l)?;
            }
            Invariant::LineAngle { l1, l2 } => {
                let (l1, l2) = (self.line(l1)?, self.line(l2)?);
                angle_is_constant(self.session, &l1, &l2)?;
            }
            Invariant::Incidence { point, line } => {
                let (p, l) = (self.point(point)?, self.line(line)?);
                l.contains(self.session, &p)?;
            }
        }
        debug!(?invariant, "asserted invariant");
        Ok(())
    }
}
