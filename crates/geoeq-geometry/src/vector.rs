//! Planar vectors and the scalar-or-vector product.

use geoeq_core::{Result, Session};
use geoeq_value::{Algebra, Value};

/// A planar vector with scalar components.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    x: Value,
    y: Value,
}

impl Vector {
    /// Creates a vector from its components.
    #[must_use]
    pub fn new(x: Value, y: Value) -> Self {
        Self { x, y }
    }

    /// A vector with literal components.
    #[must_use]
    pub fn fixed(x: i64, y: i64) -> Self {
        Self::new(Value::literal(x), Value::literal(y))
    }

    /// A vector whose components are fresh unknowns with samples `x` and `y`.
    pub fn free(session: &mut Session, x: i64, y: i64) -> Self {
        let x = session.fresh(x);
        let y = session.fresh(y);
        Self::new(x, y)
    }

    /// The x component.
    #[must_use]
    pub fn x(&self) -> &Value {
        &self.x
    }

    /// The y component.
    #[must_use]
    pub fn y(&self) -> &Value {
        &self.y
    }

    /// Component-wise sum.
    pub fn add(&self, session: &mut Session, other: &Vector) -> Vector {
        let x = session.add(&self.x, &other.x);
        let y = session.add(&self.y, &other.y);
        Vector::new(x, y)
    }

    /// Component-wise difference.
    pub fn sub(&self, session: &mut Session, other: &Vector) -> Vector {
        let x = session.sub(&self.x, &other.x);
        let y = session.sub(&self.y, &other.y);
        Vector::new(x, y)
    }

    /// Multiplies both components by `k`.
    pub fn scale(&self, session: &mut Session, k: &Value) -> Vector {
        let x = session.mul(&self.x, k);
        let y = session.mul(&self.y, k);
        Vector::new(x, y)
    }

    /// Divides by `k` as multiplication by the reciprocal `1/k`.
    ///
    /// # Errors
    ///
    /// Propagates division failures for a zero divisor.
    pub fn div(&self, session: &mut Session, k: &Value) -> Result<Vector> {
        let reciprocal = session.div(&Value::literal(1), k)?;
        Ok(self.scale(session, &reciprocal))
    }

    /// Dot product.
    pub fn dot(&self, session: &mut Session, other: &Vector) -> Value {
        let xx = session.mul(&self.x, &other.x);
        let yy = session.mul(&self.y, &other.y);
        session.add(&xx, &yy)
    }

    /// The 2D cross product `x*other.y - y*other.x`.
    pub fn cross(&self, session: &mut Session, other: &Vector) -> Value {
        let xy = session.mul(&self.x, &other.y);
        let yx = session.mul(&self.y, &other.x);
        session.sub(&xy, &yx)
    }

    /// The vector rotated by a quarter turn: `(y, -x)`.
    pub fn rotated90(&self, session: &mut Session) -> Vector {
        let y = session.neg(&self.x);
        Vector::new(self.y.clone(), y)
    }

    /// Squared length, as the dot product with itself.
    pub fn length_sqr(&self, session: &mut Session) -> Value {
        self.dot(session, self)
    }

    /// Length, as the square root of [`Vector::length_sqr`].
    pub fn length(&self, session: &mut Session) -> Value {
        let sqr = self.length_sqr(session);
        session.sqrt(&sqr)
    }
}

/// An operand of [`multiply`].
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
    /// A scalar.
    Scalar(&'a Value),
    /// A vector.
    Vector(&'a Vector),
}

impl<'a> From<&'a Value> for Operand<'a> {
    fn from(v: &'a Value) -> Self {
        Operand::Scalar(v)
    }
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(v: &'a Vector) -> Self {
        Operand::Vector(v)
    }
}

/// The result of [`multiply`].
#[derive(Clone, Debug, PartialEq)]
pub enum Product {
    /// Scalar times scalar, or the dot product of two vectors.
    Scalar(Value),
    /// A vector scaled by a scalar.
    Vector(Vector),
}

impl Product {
    /// Returns the scalar result, if any.
    #[must_use]
    pub fn into_scalar(self) -> Option<Value> {
        match self {
            Product::Scalar(v) => Some(v),
            Product::Vector(_) => None,
        }
    }

    /// Returns the vector result, if any.
    #[must_use]
    pub fn into_vector(self) -> Option<Vector> {
        match self {
            Product::Vector(v) => Some(v),
            Product::Scalar(_) => None,
        }
    }
}

/// Multiplies scalars and vectors in any combination.
///
/// | lhs    | rhs    | result                |
/// |--------|--------|-----------------------|
/// | scalar | scalar | scalar product        |
/// | scalar | vector | vector scaled by lhs  |
/// | vector | scalar | vector scaled by rhs  |
/// | vector | vector | dot product           |
pub fn multiply<'a>(
    session: &mut Session,
    lhs: impl Into<Operand<'a>>,
    rhs: impl Into<Operand<'a>>,
) -> Product {
    match (lhs.into(), rhs.into()) {
        (Operand::Scalar(a), Operand::Scalar(b)) => Product::Scalar(session.mul(a, b)),
        (Operand::Scalar(k), Operand::Vector(v)) | (Operand::Vector(v), Operand::Scalar(k)) => {
            Product::Vector(v.scale(session, k))
        }
        (Operand::Vector(a), Operand::Vector(b)) => Product::Scalar(a.dot(session, b)),
    }
}
