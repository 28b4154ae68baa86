//! Pointer input and horizontal drag detection.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Raw pointer events forwarded by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Mouse/pointer moved
    MouseMove { x: f32, y: f32 },
    /// Mouse button pressed
    MouseDown { x: f32, y: f32, button: MouseButton },
    /// Mouse button released
    MouseUp { x: f32, y: f32, button: MouseButton },
    /// Mouse/pointer left the surface
    MouseLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

/// Horizontal drag gesture, already resolved from raw pointer events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The pointer travelled past the touch slop
    Start,
    /// Horizontal movement since the previous event, in pixels
    Move { delta_x: f32 },
    /// The pointer was released after dragging
    End,
    /// The gesture was interrupted (pointer left the surface)
    Cancel,
    /// The pointer was pressed and released without dragging
    Tap,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerState {
    Released,
    Pressed { down_x: f32 },
    Dragging { last_x: f32 },
}

/// Turns raw pointer events into [`DragEvent`]s along the horizontal axis.
///
/// A drag only starts once the pointer has travelled further than
/// `touch_slop` from where it was pressed. The travel beyond the slop is
/// reported as the first move so the element does not jump by the slop
/// distance. Vertical motion is ignored.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    touch_slop: f32,
    state: PointerState,
}

impl PointerTracker {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop: touch_slop.max(0.0),
            state: PointerState::Released,
        }
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    /// Whether a drag gesture is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PointerState::Dragging { .. })
    }

    /// Feed one raw event and collect the drag events it produces
    pub fn process(&mut self, event: &Event) -> Vec<DragEvent> {
        let mut out = Vec::new();
        match (*event, self.state) {
            (
                Event::MouseDown {
                    x,
                    button: MouseButton::Left,
                    ..
                },
                PointerState::Released,
            ) => {
                self.state = PointerState::Pressed { down_x: x };
            }
            (Event::MouseMove { x, .. }, PointerState::Pressed { down_x }) => {
                let travel = x - down_x;
                if travel.abs() > self.touch_slop {
                    let past_slop = travel - self.touch_slop * travel.signum();
                    out.push(DragEvent::Start);
                    if past_slop != 0.0 {
                        out.push(DragEvent::Move {
                            delta_x: past_slop,
                        });
                    }
                    self.state = PointerState::Dragging { last_x: x };
                }
            }
            (Event::MouseMove { x, .. }, PointerState::Dragging { last_x }) => {
                let delta_x = x - last_x;
                if delta_x != 0.0 {
                    out.push(DragEvent::Move { delta_x });
                }
                self.state = PointerState::Dragging { last_x: x };
            }
            (
                Event::MouseUp {
                    button: MouseButton::Left,
                    ..
                },
                PointerState::Pressed { .. },
            ) => {
                out.push(DragEvent::Tap);
                self.state = PointerState::Released;
            }
            (
                Event::MouseUp {
                    button: MouseButton::Left,
                    ..
                },
                PointerState::Dragging { .. },
            ) => {
                out.push(DragEvent::End);
                self.state = PointerState::Released;
            }
            (Event::MouseLeave, PointerState::Dragging { .. }) => {
                out.push(DragEvent::Cancel);
                self.state = PointerState::Released;
            }
            (Event::MouseLeave, PointerState::Pressed { .. }) => {
                self.state = PointerState::Released;
            }
            _ => {}
        }
        out
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(x: f32) -> Event {
        Event::MouseDown {
            x,
            y: 0.0,
            button: MouseButton::Left,
        }
    }

    fn up(x: f32) -> Event {
        Event::MouseUp {
            x,
            y: 0.0,
            button: MouseButton::Left,
        }
    }

    #[test]
    fn test_drag_starts_after_slop() {
        let mut tracker = PointerTracker::new(8.0);
        assert!(tracker.process(&down(100.0)).is_empty());
        assert!(tracker
            .process(&Event::MouseMove { x: 105.0, y: 0.0 })
            .is_empty());

        let events = tracker.process(&Event::MouseMove { x: 112.0, y: 0.0 });
        assert_eq!(
            events,
            vec![DragEvent::Start, DragEvent::Move { delta_x: 4.0 }]
        );
        assert!(tracker.is_dragging());

        let events = tracker.process(&Event::MouseMove { x: 102.0, y: 0.0 });
        assert_eq!(events, vec![DragEvent::Move { delta_x: -10.0 }]);

        assert_eq!(tracker.process(&up(102.0)), vec![DragEvent::End]);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_slop_applies_in_both_directions() {
        let mut tracker = PointerTracker::new(8.0);
        tracker.process(&down(100.0));
        let events = tracker.process(&Event::MouseMove { x: 90.0, y: 0.0 });
        assert_eq!(
            events,
            vec![DragEvent::Start, DragEvent::Move { delta_x: -2.0 }]
        );
    }

    #[test]
    fn test_vertical_motion_is_ignored() {
        let mut tracker = PointerTracker::new(0.0);
        tracker.process(&down(0.0));
        assert!(tracker
            .process(&Event::MouseMove { x: 0.0, y: 50.0 })
            .is_empty());

        tracker.process(&Event::MouseMove { x: 3.0, y: 50.0 });
        let events = tracker.process(&Event::MouseMove { x: 3.0, y: -80.0 });
        assert!(events.is_empty());
    }

    #[test]
    fn test_press_release_without_travel_is_tap() {
        let mut tracker = PointerTracker::new(8.0);
        tracker.process(&down(10.0));
        tracker.process(&Event::MouseMove { x: 12.0, y: 0.0 });
        assert_eq!(tracker.process(&up(12.0)), vec![DragEvent::Tap]);
    }

    #[test]
    fn test_leave_cancels_drag() {
        let mut tracker = PointerTracker::new(0.0);
        tracker.process(&down(0.0));
        tracker.process(&Event::MouseMove { x: 20.0, y: 0.0 });
        assert_eq!(tracker.process(&Event::MouseLeave), vec![DragEvent::Cancel]);
        assert!(tracker.process(&up(20.0)).is_empty());
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let mut tracker = PointerTracker::new(0.0);
        let right = Event::MouseDown {
            x: 0.0,
            y: 0.0,
            button: MouseButton::Right,
        };
        assert!(tracker.process(&right).is_empty());
        assert!(tracker
            .process(&Event::MouseMove { x: 30.0, y: 0.0 })
            .is_empty());
        assert!(!tracker.is_dragging());
    }
}
