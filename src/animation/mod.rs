//! Spring physics and value interpolation.
//!
//! Two ways of driving a value are provided:
//!
//! - [`AnimationState`] follows a declared target. Declaring a new target
//!   restarts the animation from the current value.
//! - [`SpringState`] stepped by a [`SpringIntegrator`] is the raw physics,
//!   used directly by owners that need to cancel, snap and resume an
//!   animation themselves.

mod animatable;
mod spring;
mod state;

pub use animatable::Animatable;
pub use spring::{AnalyticSpring, SemiImplicitEuler, SpringConfig, SpringIntegrator, SpringState};
pub use state::{AdvanceResult, AnimationState};

/// Selects one of the built-in spring integrators
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorKind {
    /// Numerical semi-implicit Euler with sub-stepping
    #[default]
    SemiImplicitEuler,
    /// Closed-form damped oscillator
    Analytic,
}

impl IntegratorKind {
    pub fn build(self) -> Box<dyn SpringIntegrator> {
        match self {
            IntegratorKind::SemiImplicitEuler => Box::new(SemiImplicitEuler::default()),
            IntegratorKind::Analytic => Box::new(AnalyticSpring),
        }
    }
}
