//! Construction sessions.
//!
//! A session owns everything a construction run mutates: the unknown
//! allocator, the equation store and the plot store. Sessions are fully
//! independent, so several runs can proceed side by side without a reset
//! protocol.

use tracing::trace;

use crate::store::{ConstructionOutput, Equation, Plot};
use crate::var::VarId;

/// Configuration for a construction session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Compute floating-point witnesses alongside integer samples.
    pub witness: bool,
    /// Absolute tolerance for witness checks in assertions.
    pub witness_tolerance: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            witness: false,
            witness_tolerance: 1e-9,
        }
    }
}

impl SessionConfig {
    /// Enables or disables witness tracking.
    #[must_use]
    pub fn with_witness(mut self, witness: bool) -> Self {
        self.witness = witness;
        self
    }

    /// Sets the witness tolerance.
    #[must_use]
    pub fn with_witness_tolerance(mut self, tolerance: f64) -> Self {
        self.witness_tolerance = tolerance;
        self
    }
}

/// State of one construction run.
///
/// Every operation that introduces an unknown goes through
/// [`Session::next_var`] and records exactly one defining equation with
/// [`Session::emit`].
#[derive(Debug, Default)]
pub struct Session {
    /// Next unused unknown index.
    next_var: u32,
    /// Emitted equations, in order.
    equations: Vec<Equation>,
    /// Recorded plots, in order.
    plots: Vec<Plot>,
    config: SessionConfig,
}

impl Session {
    /// Creates an empty session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with a custom configuration.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns true if floating-point witnesses are being computed.
    #[must_use]
    pub fn tracks_witness(&self) -> bool {
        self.config.witness
    }

    /// Switches witness tracking for subsequent operations.
    pub fn set_witness(&mut self, witness: bool) {
        self.config.witness = witness;
    }

    /// Allocates the next unused unknown.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` unknowns are allocated.
    pub fn next_var(&mut self) -> VarId {
        let var = VarId::new(self.next_var);
        self.next_var = self
            .next_var
            .checked_add(1)
            .expect("unknown identifier space exhausted");
        trace!(var = %var, "allocated unknown");
        var
    }

    /// Returns the number of unknowns allocated so far.
    #[must_use]
    pub fn var_count(&self) -> u32 {
        self.next_var
    }

    /// Appends an equation to the store.
    pub fn emit(&mut self, equation: impl Into<String>) {
        let equation = Equation::new(equation);
        trace!(equation = %equation, "emitted equation");
        self.equations.push(equation);
    }

    /// Records a named point of interest.
    pub fn record_plot(&mut self, label: impl Into<String>, x: impl Into<String>, y: impl Into<String>) {
        self.plots.push(Plot {
            label: label.into(),
            x: x.into(),
            y: y.into(),
        });
    }

    /// Returns the equations emitted so far.
    #[must_use]
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    /// Returns the plots recorded so far.
    #[must_use]
    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    /// Returns true if the given text was emitted as an equation.
    #[must_use]
    pub fn has_equation(&self, text: &str) -> bool {
        self.equations.iter().any(|eq| eq.as_str() == text)
    }

    /// Clears both stores and restarts unknown numbering at `a`.
    ///
    /// The configuration is kept.
    pub fn reset(&mut self) {
        self.next_var = 0;
        self.equations.clear();
        self.plots.clear();
    }

    /// Consumes the session, returning its output.
    #[must_use]
    pub fn finish(self) -> ConstructionOutput {
        ConstructionOutput {
            equations: self.equations,
            plots: self.plots,
        }
    }
}
