//! Output records accumulated during a construction run.

use std::fmt;

/// A polynomial expression implicitly equated to zero.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Equation(String);

impl Equation {
    /// Wraps an expression text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the expression text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Equation {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Equation {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A named point of interest: its label and the display forms of its
/// coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plot {
    /// Label given by the client.
    pub label: String,
    /// Expression of the x coordinate.
    pub x: String,
    /// Expression of the y coordinate.
    pub y: String,
}

impl fmt::Display for Plot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.label, self.x, self.y)
    }
}

/// Everything a finished construction run produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstructionOutput {
    /// Equations in emission order.
    pub equations: Vec<Equation>,
    /// Plot records in emission order.
    pub plots: Vec<Plot>,
}

impl ConstructionOutput {
    /// Returns the equation texts in order.
    pub fn equation_texts(&self) -> impl Iterator<Item = &str> {
        self.equations.iter().map(Equation::as_str)
    }
}
