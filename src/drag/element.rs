use std::time::Duration;

use super::{AnimatableOffset, DragConfig, DragPhase, Draggable};
use crate::animation::SpringIntegrator;
use crate::frame::ChangeFlags;
use crate::input::{DragEvent, EventResponse};
use crate::offset::Offset;

/// Horizontally draggable element that springs back to the origin on release.
///
/// Drag deltas are applied synchronously. Releasing the element launches a
/// spring task toward the origin which [`advance`](Self::advance) resumes
/// once per frame. Grabbing the element again cancels the task on the spot
/// and the interrupted value becomes the new drag baseline.
pub struct DraggableSpringElement {
    offset: AnimatableOffset,
    phase: DragPhase,
    config: DragConfig,
}

impl DraggableSpringElement {
    pub fn new() -> Self {
        Self::with_config(DragConfig::default())
    }

    pub fn with_config(config: DragConfig) -> Self {
        Self::with_integrator(config, config.integrator.build())
    }

    /// Use a custom integrator, ignoring `config.integrator`
    pub fn with_integrator(config: DragConfig, integrator: Box<dyn SpringIntegrator>) -> Self {
        Self {
            offset: AnimatableOffset::new(
                Offset::ZERO,
                integrator,
                config.position_threshold,
                config.velocity_threshold,
            ),
            phase: DragPhase::Idle,
            config,
        }
    }

    pub fn on_drag_start(&mut self) {
        match self.phase {
            DragPhase::Dragging => {}
            DragPhase::Returning => {
                let (velocity_x, _) = self.offset.velocity();
                self.offset.stop();
                log::debug!(
                    "Grabbed mid-return at {} moving {:.1} px/s",
                    self.offset.value(),
                    velocity_x
                );
                self.phase = DragPhase::Dragging;
            }
            DragPhase::Idle => {
                log::debug!("Drag started");
                self.phase = DragPhase::Dragging;
            }
        }
    }

    /// Move horizontally by `delta_x` pixels.
    ///
    /// A move outside a drag begins one, so the element never animates and
    /// follows the pointer at the same time.
    pub fn on_drag_move(&mut self, delta_x: f32) {
        if self.phase != DragPhase::Dragging {
            self.on_drag_start();
        }
        let next = self.offset.value().shifted_x(delta_x);
        self.offset.snap_to(next);
        log::trace!("Dragged to {}", next);
    }

    pub fn on_drag_end(&mut self) {
        self.release();
    }

    pub fn on_drag_cancel(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        if self.offset.value().is_zero() {
            self.phase = DragPhase::Idle;
            return;
        }
        log::debug!("Released at {}", self.offset.value());
        self.offset.animate_to(Offset::ZERO, self.config.spring);
        self.phase = DragPhase::Returning;
    }

    /// Advance the return animation by one frame
    pub fn advance(&mut self, dt: Duration) -> ChangeFlags {
        if self.phase != DragPhase::Returning {
            return ChangeFlags::empty();
        }

        let mut flags = ChangeFlags::empty();
        if self.offset.advance(dt) {
            flags |= ChangeFlags::NEEDS_PAINT;
        }
        if self.offset.is_running() {
            flags |= ChangeFlags::ANIMATING;
        } else {
            log::debug!("Returned to origin");
            self.phase = DragPhase::Idle;
        }
        flags
    }

    pub fn current_offset(&self) -> Offset {
        self.offset.value()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase == DragPhase::Returning
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }
}

impl Default for DraggableSpringElement {
    fn default() -> Self {
        Self::new()
    }
}

impl Draggable for DraggableSpringElement {
    fn handle(&mut self, event: DragEvent) -> EventResponse {
        match event {
            DragEvent::Start => self.on_drag_start(),
            DragEvent::Move { delta_x } => self.on_drag_move(delta_x),
            DragEvent::End => self.on_drag_end(),
            DragEvent::Cancel => self.on_drag_cancel(),
            DragEvent::Tap => return EventResponse::Ignored,
        }
        EventResponse::Handled
    }

    fn advance(&mut self, dt: Duration) -> ChangeFlags {
        DraggableSpringElement::advance(self, dt)
    }

    fn current_offset(&self) -> Offset {
        DraggableSpringElement::current_offset(self)
    }

    fn is_animating(&self) -> bool {
        DraggableSpringElement::is_animating(self)
    }
}

impl Drop for DraggableSpringElement {
    fn drop(&mut self) {
        if self.offset.stop() {
            log::debug!("Element dropped while returning");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::IntegratorKind;

    const FRAME: Duration = Duration::from_micros(16_667);

    fn dragged_to(x: f32) -> DraggableSpringElement {
        let mut element = DraggableSpringElement::new();
        element.on_drag_start();
        element.on_drag_move(x);
        element
    }

    #[test]
    fn test_starts_idle_at_origin() {
        let mut element = DraggableSpringElement::new();
        assert_eq!(element.phase(), DragPhase::Idle);
        assert_eq!(element.current_offset(), Offset::ZERO);
        assert_eq!(element.advance(FRAME), ChangeFlags::empty());
        assert_eq!(element.current_offset(), Offset::ZERO);
    }

    #[test]
    fn test_drag_start_does_not_move() {
        let mut element = DraggableSpringElement::new();
        element.on_drag_start();
        assert_eq!(element.phase(), DragPhase::Dragging);
        assert_eq!(element.current_offset(), Offset::ZERO);
    }

    #[test]
    fn test_drag_moves_are_rounded_per_event() {
        let mut element = dragged_to(10.4);
        assert_eq!(element.current_offset(), Offset::new(10, 0));
        element.on_drag_move(-2.6);
        assert_eq!(element.current_offset(), Offset::new(7, 0));
    }

    #[test]
    fn test_frames_do_not_move_a_dragged_element() {
        let mut element = dragged_to(80.0);
        for _ in 0..10 {
            assert_eq!(element.advance(FRAME), ChangeFlags::empty());
        }
        assert_eq!(element.current_offset(), Offset::new(80, 0));
    }

    #[test]
    fn test_release_enters_returning() {
        let mut element = dragged_to(80.0);
        element.on_drag_end();
        assert_eq!(element.phase(), DragPhase::Returning);
        assert!(element.is_animating());

        let flags = element.advance(FRAME);
        assert!(flags.needs_paint());
        assert!(flags.wants_frame());
        assert!(element.current_offset().x < 80);
    }

    #[test]
    fn test_release_at_origin_goes_idle() {
        let mut element = dragged_to(0.0);
        element.on_drag_end();
        assert_eq!(element.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_release_while_idle_is_ignored() {
        let mut element = DraggableSpringElement::new();
        element.on_drag_end();
        element.on_drag_cancel();
        assert_eq!(element.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_move_without_start_cancels_return() {
        let mut element = dragged_to(60.0);
        element.on_drag_end();
        for _ in 0..5 {
            element.advance(FRAME);
        }
        let interrupted = element.current_offset();

        element.on_drag_move(3.0);
        assert_eq!(element.phase(), DragPhase::Dragging);
        assert_eq!(element.current_offset(), Offset::new(interrupted.x + 3, 0));
    }

    #[test]
    fn test_huge_drag_deltas_saturate() {
        let mut element = dragged_to(3.0e9);
        assert_eq!(element.current_offset(), Offset::new(i32::MAX, 0));
        element.on_drag_move(3.0e9);
        assert_eq!(element.current_offset(), Offset::new(i32::MAX, 0));

        element.on_drag_move(-3.0e9);
        element.on_drag_move(-3.0e9);
        element.on_drag_move(-3.0e9);
        assert_eq!(element.current_offset(), Offset::new(i32::MIN, 0));
    }

    #[test]
    fn test_drop_mid_return_cancels_task() {
        let mut element = dragged_to(90.0);
        element.on_drag_end();
        element.advance(FRAME);
        assert!(element.is_animating());
        drop(element);
    }

    #[test]
    fn test_analytic_integrator_returns_to_origin() {
        let config = DragConfig::default().integrator(IntegratorKind::Analytic);
        let mut element = DraggableSpringElement::with_config(config);
        element.on_drag_start();
        element.on_drag_move(-150.0);
        element.on_drag_end();

        let mut frames = 0;
        while element.is_animating() {
            element.advance(FRAME);
            frames += 1;
            assert!(frames < 600, "never settled");
        }
        assert_eq!(element.current_offset(), Offset::ZERO);
        assert_eq!(element.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_tap_is_ignored() {
        let mut element = DraggableSpringElement::new();
        assert_eq!(element.handle(DragEvent::Tap), EventResponse::Ignored);
        assert_eq!(element.handle(DragEvent::Start), EventResponse::Handled);
    }
}
