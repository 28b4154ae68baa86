//! Draggable elements that spring back to their resting position.
//!
//! [`DraggableSpringElement`] couples the offset to the gesture: drag moves
//! snap the value, release launches a spring task, and grabbing the element
//! mid-return cancels that task where it stands.
//!
//! [`ToggleOffset`] and [`TargetDrivenDrag`] derive the offset from a
//! declared target instead. The first is fine for discrete toggles. The
//! second shows why declaring targets from a gesture is wrong: the element
//! lags behind the pointer and jumps when grabbed mid-return.

mod animatable_offset;
mod element;
mod variants;

use std::time::Duration;

pub use animatable_offset::AnimatableOffset;
pub use element::DraggableSpringElement;
pub use variants::{TargetDrivenDrag, ToggleOffset};

use crate::animation::{IntegratorKind, SpringConfig};
use crate::frame::ChangeFlags;
use crate::input::{DragEvent, EventResponse};
use crate::offset::Offset;

/// Interaction phase of a draggable element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// At rest on the origin
    Idle,
    /// Following the pointer
    Dragging,
    /// Springing back to the origin after release
    Returning,
}

/// Configuration for a draggable element
#[derive(Clone, Copy, Debug)]
pub struct DragConfig {
    /// Spring used to return to the origin
    pub spring: SpringConfig,
    pub integrator: IntegratorKind,
    /// Distance from the target, in pixels, below which an axis may settle
    pub position_threshold: f32,
    /// Speed, in pixels per second, below which an axis may settle
    pub velocity_threshold: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::MEDIUM_BOUNCY_LOW,
            integrator: IntegratorKind::SemiImplicitEuler,
            position_threshold: 0.5,
            velocity_threshold: 5.0,
        }
    }
}

impl DragConfig {
    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    pub fn integrator(mut self, integrator: IntegratorKind) -> Self {
        self.integrator = integrator;
        self
    }

    pub fn position_threshold(mut self, threshold: f32) -> Self {
        self.position_threshold = threshold;
        self
    }

    pub fn velocity_threshold(mut self, threshold: f32) -> Self {
        self.velocity_threshold = threshold;
        self
    }
}

/// Something the host can drag, tick and read back each frame
pub trait Draggable {
    /// Handle a resolved drag gesture event
    fn handle(&mut self, event: DragEvent) -> EventResponse;

    /// Advance animations by one frame
    fn advance(&mut self, dt: Duration) -> ChangeFlags;

    /// Offset the rendering layer should apply this frame
    fn current_offset(&self) -> Offset;

    fn is_animating(&self) -> bool;
}
