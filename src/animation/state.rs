use std::time::Duration;

use super::{Animatable, SemiImplicitEuler, SpringConfig, SpringIntegrator, SpringState};

/// Progress thresholds for a normalized (0.0 to 1.0) spring
const SETTLE_POSITION: f32 = 0.001;
const SETTLE_VELOCITY: f32 = 0.01;

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Declarative animation toward a target value.
///
/// The owner declares a target with [`AnimationState::animate_to`] and the
/// state interpolates from wherever the value currently is. Each retarget
/// restarts a normalized spring at rest, so only the declared target carries
/// over between animations.
pub struct AnimationState<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Declared target value
    target: T,
    /// Value when animation started
    start: T,
    spring: SpringConfig,
    integrator: Box<dyn SpringIntegrator>,
    /// Normalized progress, 0.0 = start and 1.0 = target
    progress: SpringState,
    running: bool,
}

impl<T: Animatable> AnimationState<T> {
    pub fn new(initial_value: T, spring: SpringConfig) -> Self {
        Self::with_integrator(initial_value, spring, Box::new(SemiImplicitEuler::default()))
    }

    pub fn with_integrator(
        initial_value: T,
        spring: SpringConfig,
        integrator: Box<dyn SpringIntegrator>,
    ) -> Self {
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            spring,
            integrator,
            progress: SpringState::at(1.0),
            running: false,
        }
    }

    /// Start animating to a new target value
    pub fn animate_to(&mut self, new_target: T) {
        // Don't restart if we're already animating to this target
        if new_target == self.target {
            return;
        }

        self.start = self.current.clone();
        self.target = new_target;
        self.progress = SpringState::at(0.0);
        self.running = true;
    }

    /// Advance the animation by one frame and return whether the value changed
    pub fn advance(&mut self, dt: Duration) -> AdvanceResult<T> {
        if !self.running {
            return AdvanceResult::NoChange;
        }

        self.progress = self
            .integrator
            .step(self.progress, 1.0, &self.spring, dt.as_secs_f32());

        let new_value = if self
            .progress
            .is_settled(1.0, SETTLE_POSITION, SETTLE_VELOCITY)
        {
            self.running = false;
            self.progress = SpringState::at(1.0);
            self.target.clone()
        } else {
            T::lerp(&self.start, &self.target, self.progress.position)
        };

        if new_value != self.current {
            self.current = new_value.clone();
            AdvanceResult::Changed(new_value)
        } else {
            AdvanceResult::NoChange
        }
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_micros(16_667);

    #[test]
    fn test_animation_state_new() {
        let state = AnimationState::new(0.0f32, SpringConfig::DEFAULT);

        assert_eq!(*state.current(), 0.0);
        assert_eq!(*state.target(), 0.0);
        assert!(!state.is_animating()); // Starts completed
    }

    #[test]
    fn test_animation_state_animate_to() {
        let mut state = AnimationState::new(0.0f32, SpringConfig::DEFAULT);

        state.animate_to(100.0);

        assert_eq!(*state.target(), 100.0);
        assert!(state.is_animating());
        assert!(state.advance(FRAME).is_changed());
        assert!(*state.current() > 0.0 && *state.current() < 100.0);
    }

    #[test]
    fn test_animation_state_animate_to_same_target() {
        let mut state = AnimationState::new(0.0f32, SpringConfig::DEFAULT);
        let mut reference = AnimationState::new(0.0f32, SpringConfig::DEFAULT);
        state.animate_to(100.0);
        reference.animate_to(100.0);

        for frame in 0..10 {
            // Animate to same target should not restart
            if frame == 2 {
                state.animate_to(100.0);
            }
            state.advance(FRAME);
            reference.advance(FRAME);
            assert_eq!(state.current(), reference.current());
        }
    }

    #[test]
    fn test_animation_state_settles_on_target() {
        let mut state = AnimationState::new(0.0f32, SpringConfig::DEFAULT);
        state.animate_to(100.0);

        let mut frames = 0;
        while state.is_animating() {
            state.advance(FRAME);
            frames += 1;
            assert!(frames < 600, "animation never settled");
        }
        assert_eq!(*state.current(), 100.0);
        assert_eq!(state.advance(FRAME), AdvanceResult::NoChange);
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut state = AnimationState::new(0.0f32, SpringConfig::DEFAULT);
        state.animate_to(100.0);
        for _ in 0..3 {
            state.advance(FRAME);
        }
        let midway = *state.current();

        state.animate_to(0.0);
        state.advance(Duration::ZERO);
        assert_eq!(*state.current(), midway);
    }
}
