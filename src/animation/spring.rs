/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the spring (default: 1.0)
    pub mass: f32,
    /// Stiffness of the spring
    pub stiffness: f32,
    /// Damping coefficient
    pub damping: f32,
}

impl SpringConfig {
    /// Critically damped, medium stiffness spring (ratio 1.0, stiffness 1500)
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 1500.0,
        // 1.0 * 2 * sqrt(1500)
        damping: 77.459_67,
    };

    /// Medium bouncy, low stiffness spring (ratio 0.5, stiffness 200).
    /// Used to return a released element to its origin.
    pub const MEDIUM_BOUNCY_LOW: Self = Self {
        mass: 1.0,
        stiffness: 200.0,
        // 0.5 * 2 * sqrt(200)
        damping: 14.142_136,
    };

    /// Build a unit-mass spring from a damping ratio.
    ///
    /// A ratio of 1.0 is critically damped, below 1.0 overshoots and above
    /// 1.0 approaches the target without oscillating.
    pub fn from_damping_ratio(damping_ratio: f32, stiffness: f32) -> Self {
        let mass = 1.0;
        let stiffness = stiffness.max(0.0);
        let critical = 2.0 * (mass * stiffness).sqrt();
        Self {
            mass,
            stiffness,
            damping: damping_ratio.max(0.0) * critical,
        }
    }

    /// Damping ratio of this configuration (damping / critical damping)
    pub fn damping_ratio(&self) -> f32 {
        let critical = 2.0 * (self.mass * self.stiffness).sqrt();
        if critical <= f32::EPSILON {
            return 0.0;
        }
        self.damping / critical
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// State for spring physics simulation along one axis
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    /// Current position
    pub position: f32,
    /// Current velocity in units per second
    pub velocity: f32,
}

impl SpringState {
    /// Create a state resting at `position`
    pub fn at(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    /// Check if the spring has settled on `target`
    pub fn is_settled(
        &self,
        target: f32,
        position_threshold: f32,
        velocity_threshold: f32,
    ) -> bool {
        (self.position - target).abs() < position_threshold
            && self.velocity.abs() < velocity_threshold
    }
}

/// Advances a spring by a time step.
///
/// Implementations must be pure: the same inputs always produce the same
/// state, so a caller can replay or compare trajectories.
pub trait SpringIntegrator: Send + Sync {
    /// Step `state` toward `target` by `dt` seconds
    fn step(&self, state: SpringState, target: f32, config: &SpringConfig, dt: f32) -> SpringState;
}

/// Numerical integration with semi-implicit Euler.
///
/// Large frame gaps are split into sub-steps no longer than `max_dt` for
/// numerical stability.
#[derive(Clone, Copy, Debug)]
pub struct SemiImplicitEuler {
    /// Longest single sub-step in seconds
    pub max_dt: f32,
}

impl Default for SemiImplicitEuler {
    fn default() -> Self {
        Self {
            max_dt: 1.0 / 120.0,
        }
    }
}

impl SpringIntegrator for SemiImplicitEuler {
    fn step(&self, state: SpringState, target: f32, config: &SpringConfig, dt: f32) -> SpringState {
        // Skip if time hasn't advanced
        if dt < 1e-6 {
            return state;
        }

        let max_dt = self.max_dt.max(1e-4);
        let mut state = state;
        let mut remaining = dt;
        while remaining > 1e-6 {
            let h = remaining.min(max_dt);
            remaining -= h;

            // Spring force: F = -k * x
            let spring_force = -config.stiffness * (state.position - target);
            // Damping force: F = -c * v
            let damping_force = -config.damping * state.velocity;
            let acceleration = (spring_force + damping_force) / config.mass;

            state.velocity += acceleration * h;
            state.position += state.velocity * h;
        }
        state
    }
}

/// Closed-form damped harmonic oscillator.
///
/// Exact for any `dt`, so the trajectory does not depend on the frame rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalyticSpring;

impl SpringIntegrator for AnalyticSpring {
    fn step(&self, state: SpringState, target: f32, config: &SpringConfig, dt: f32) -> SpringState {
        if dt <= 0.0 {
            return state;
        }

        let t = dt as f64;
        let mass = (config.mass as f64).max(f64::EPSILON);
        let x0 = (state.position - target) as f64;
        let v0 = state.velocity as f64;
        let beta = config.damping as f64 / (2.0 * mass);
        let omega0 = (config.stiffness as f64 / mass).sqrt();

        let (x, v) = if (beta - omega0).abs() <= 1e-4 * omega0.max(1.0) {
            // Critically damped
            let envelope = (-beta * t).exp();
            let b = v0 + beta * x0;
            (envelope * (x0 + b * t), envelope * (v0 - beta * b * t))
        } else if beta < omega0 {
            // Under-damped
            let omega_d = (omega0 * omega0 - beta * beta).sqrt();
            let envelope = (-beta * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = envelope * (x0 * cos + (v0 + beta * x0) / omega_d * sin);
            let v = envelope * (v0 * cos - (beta * v0 + omega0 * omega0 * x0) / omega_d * sin);
            (x, v)
        } else {
            // Over-damped
            let root = (beta * beta - omega0 * omega0).sqrt();
            let r1 = -beta + root;
            let r2 = -beta - root;
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        };

        SpringState {
            position: target + x as f32,
            velocity: v as f32,
        }
    }
}
