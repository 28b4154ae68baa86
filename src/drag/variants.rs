use std::time::Duration;

use super::Draggable;
use crate::animation::{AnimationState, SpringConfig};
use crate::frame::ChangeFlags;
use crate::input::{DragEvent, EventResponse};
use crate::offset::Offset;

fn advance_flags(anim: &mut AnimationState<Offset>, dt: Duration) -> ChangeFlags {
    let mut flags = ChangeFlags::empty();
    if anim.advance(dt).is_changed() {
        flags |= ChangeFlags::NEEDS_PAINT;
    }
    if anim.is_animating() {
        flags |= ChangeFlags::ANIMATING;
    }
    flags
}

/// Element that toggles between the origin and a diagonal offset on tap.
///
/// The target is derived from a declared `moved` flag. This is a sound use
/// of a declarative animation: the input is discrete, and retargeting
/// mid-flight starts from the current value.
pub struct ToggleOffset {
    moved: bool,
    distance: i32,
    anim: AnimationState<Offset>,
}

impl ToggleOffset {
    pub fn new(distance: i32) -> Self {
        Self {
            moved: false,
            distance,
            anim: AnimationState::new(Offset::ZERO, SpringConfig::DEFAULT),
        }
    }

    pub fn click(&mut self) {
        self.moved = !self.moved;
        let target = if self.moved {
            Offset::new(self.distance, self.distance)
        } else {
            Offset::ZERO
        };
        log::debug!("Toggled to {}", target);
        self.anim.animate_to(target);
    }

    pub fn is_moved(&self) -> bool {
        self.moved
    }

    pub fn current_offset(&self) -> Offset {
        *self.anim.current()
    }
}

impl Draggable for ToggleOffset {
    fn handle(&mut self, event: DragEvent) -> EventResponse {
        match event {
            DragEvent::Tap => {
                self.click();
                EventResponse::Handled
            }
            _ => EventResponse::Ignored,
        }
    }

    fn advance(&mut self, dt: Duration) -> ChangeFlags {
        advance_flags(&mut self.anim, dt)
    }

    fn current_offset(&self) -> Offset {
        *self.anim.current()
    }

    fn is_animating(&self) -> bool {
        self.anim.is_animating()
    }
}

/// Drag implemented by declaring a target offset from the gesture.
///
/// Every move adds its delta to the declared target and the rendered offset
/// springs toward it, so the element trails the pointer. After release the
/// declared target is the origin. Grabbing the element mid-return adds the
/// next deltas to the origin rather than to the visible position, and the
/// element springs away from the pointer.
/// Prefer [`DraggableSpringElement`](super::DraggableSpringElement).
pub struct TargetDrivenDrag {
    declared: Offset,
    anim: AnimationState<Offset>,
}

impl TargetDrivenDrag {
    pub fn new() -> Self {
        Self {
            declared: Offset::ZERO,
            anim: AnimationState::new(Offset::ZERO, SpringConfig::DEFAULT),
        }
    }

    /// Target declared by the gesture so far
    pub fn declared(&self) -> Offset {
        self.declared
    }

    pub fn on_drag_move(&mut self, delta_x: f32) {
        self.declared = self.declared.shifted_x(delta_x);
        self.anim.animate_to(self.declared);
    }

    pub fn on_release(&mut self) {
        self.declared = Offset::ZERO;
        self.anim.animate_to(self.declared);
    }

    pub fn current_offset(&self) -> Offset {
        *self.anim.current()
    }
}

impl Default for TargetDrivenDrag {
    fn default() -> Self {
        Self::new()
    }
}

impl Draggable for TargetDrivenDrag {
    fn handle(&mut self, event: DragEvent) -> EventResponse {
        match event {
            DragEvent::Start => {}
            DragEvent::Move { delta_x } => self.on_drag_move(delta_x),
            DragEvent::End | DragEvent::Cancel => self.on_release(),
            DragEvent::Tap => return EventResponse::Ignored,
        }
        EventResponse::Handled
    }

    fn advance(&mut self, dt: Duration) -> ChangeFlags {
        advance_flags(&mut self.anim, dt)
    }

    fn current_offset(&self) -> Offset {
        *self.anim.current()
    }

    fn is_animating(&self) -> bool {
        self.anim.is_animating()
    }
}
