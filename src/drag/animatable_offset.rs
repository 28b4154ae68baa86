use std::time::Duration;

use crate::animation::{SpringConfig, SpringIntegrator, SpringState};
use crate::offset::Offset;

/// A spring animation in flight
#[derive(Clone, Copy, Debug)]
struct SpringTask {
    target: Offset,
    spring: SpringConfig,
    x: SpringState,
    y: SpringState,
    elapsed: Duration,
}

/// Mutable offset cell with an optional spring animation in flight.
///
/// The offset can be snapped (which cancels any animation) or animated
/// toward a target. At most one animation drives the value at a time.
pub struct AnimatableOffset {
    value: Offset,
    task: Option<SpringTask>,
    integrator: Box<dyn SpringIntegrator>,
    position_threshold: f32,
    velocity_threshold: f32,
}

impl AnimatableOffset {
    pub fn new(
        initial: Offset,
        integrator: Box<dyn SpringIntegrator>,
        position_threshold: f32,
        velocity_threshold: f32,
    ) -> Self {
        Self {
            value: initial,
            task: None,
            integrator,
            position_threshold,
            velocity_threshold,
        }
    }

    /// Latest value, including mid-animation
    pub fn value(&self) -> Offset {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Velocity of the running animation in pixels per second
    pub fn velocity(&self) -> (f32, f32) {
        self.task
            .map(|task| (task.x.velocity, task.y.velocity))
            .unwrap_or((0.0, 0.0))
    }

    /// Set the value immediately, cancelling any running animation.
    ///
    /// Returns true if an animation was cancelled.
    pub fn snap_to(&mut self, value: Offset) -> bool {
        let cancelled = self.stop();
        self.value = value;
        cancelled
    }

    /// Cancel the running animation, keeping the value where it is.
    ///
    /// Returns true if an animation was running.
    pub fn stop(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                log::debug!(
                    "Cancelled animation to {} at {} after {:?}",
                    task.target,
                    self.value,
                    task.elapsed
                );
                true
            }
            None => false,
        }
    }

    /// Animate toward `target` with `spring`.
    ///
    /// Re-issuing the running animation is a no-op. Retargeting a running
    /// animation keeps its position and velocity so the motion stays
    /// continuous.
    pub fn animate_to(&mut self, target: Offset, spring: SpringConfig) {
        let (x, y) = match self.task {
            Some(task) if task.target == target && task.spring == spring => return,
            Some(task) => (task.x, task.y),
            None => (
                SpringState::at(self.value.x as f32),
                SpringState::at(self.value.y as f32),
            ),
        };

        log::debug!("Animating from {} to {}", self.value, target);
        self.task = Some(SpringTask {
            target,
            spring,
            x,
            y,
            elapsed: Duration::ZERO,
        });
    }

    /// Advance the running animation by `dt` and return whether the value changed
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(mut task) = self.task else {
            return false;
        };

        let secs = dt.as_secs_f32();
        task.elapsed += dt;
        task.x = self
            .integrator
            .step(task.x, task.target.x as f32, &task.spring, secs);
        task.y = self
            .integrator
            .step(task.y, task.target.y as f32, &task.spring, secs);

        let settled = task.x.is_settled(
            task.target.x as f32,
            self.position_threshold,
            self.velocity_threshold,
        ) && task.y.is_settled(
            task.target.y as f32,
            self.position_threshold,
            self.velocity_threshold,
        );

        let new_value = if settled {
            log::debug!("Animation to {} settled after {:?}", task.target, task.elapsed);
            self.task = None;
            task.target
        } else {
            self.task = Some(task);
            Offset::from_f32(task.x.position, task.y.position)
        };

        let changed = new_value != self.value;
        self.value = new_value;
        changed
    }
}
