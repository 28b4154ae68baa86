use std::time::Duration;

use crate::drag::Draggable;
use crate::frame::{ChangeFlags, FrameClock};
use crate::input::{Event, EventResponse, PointerTracker};
use crate::offset::Offset;
use crate::script::{Script, Step};

#[derive(Clone, Debug)]
pub struct HostConfig {
    /// Time between frames
    pub frame_interval: Duration,
    /// Pointer travel before a press becomes a drag, in pixels
    pub touch_slop: f32,
    /// Upper bound on frames ticked by a single `settle` step
    pub max_settle_frames: usize,
    /// Sleep for `frame_interval` after each frame in [`Host::run`]
    pub realtime: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            frame_interval: FrameClock::DEFAULT_INTERVAL,
            touch_slop: 8.0,
            max_settle_frames: 600,
            realtime: true,
        }
    }
}

/// What the rendering layer saw on one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameRecord {
    pub frame: u64,
    /// Frame time since the host started
    pub time: Duration,
    pub offset: Offset,
    pub flags: ChangeFlags,
}

/// Minimal host driving one draggable element.
///
/// Raw pointer events are resolved into horizontal drag events and
/// forwarded, and every frame ticks the element once and records the offset
/// a renderer would translate it by.
pub struct Host<D: Draggable> {
    config: HostConfig,
    target: D,
    tracker: PointerTracker,
    clock: FrameClock,
}

impl<D: Draggable> Host<D> {
    pub fn new(target: D) -> Self {
        Self::with_config(target, HostConfig::default())
    }

    pub fn with_config(target: D, config: HostConfig) -> Self {
        Self {
            tracker: PointerTracker::new(config.touch_slop),
            clock: FrameClock::new(config.frame_interval),
            config,
            target,
        }
    }

    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.config.frame_interval = interval;
        self.clock = FrameClock::new(interval);
        self
    }

    pub fn touch_slop(mut self, touch_slop: f32) -> Self {
        self.config.touch_slop = touch_slop;
        self.tracker = PointerTracker::new(touch_slop);
        self
    }

    pub fn max_settle_frames(mut self, frames: usize) -> Self {
        self.config.max_settle_frames = frames;
        self
    }

    pub fn realtime(mut self, realtime: bool) -> Self {
        self.config.realtime = realtime;
        self
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    /// Forward a raw pointer event to the element
    pub fn dispatch(&mut self, event: &Event) -> EventResponse {
        let mut response = EventResponse::Ignored;
        for drag_event in self.tracker.process(event) {
            log::trace!("{:?} -> {:?}", event, drag_event);
            if self.target.handle(drag_event) == EventResponse::Handled {
                response = EventResponse::Handled;
            }
        }
        response
    }

    /// Tick one frame
    pub fn frame(&mut self) -> FrameRecord {
        let dt = self.clock.tick();
        let flags = self.target.advance(dt);
        FrameRecord {
            frame: self.clock.frame(),
            time: self.clock.now(),
            offset: self.target.current_offset(),
            flags,
        }
    }

    /// Play a script as fast as possible and return every frame
    pub fn play(&mut self, script: &Script) -> Vec<FrameRecord> {
        let mut frames = Vec::new();
        for step in script.steps() {
            self.step(step, &mut |record| frames.push(record));
        }
        frames
    }

    /// Play a script, logging each frame and pacing frames in real time
    /// unless disabled in the config
    pub fn run(&mut self, script: &Script) {
        let _ = env_logger::try_init();

        log::info!(
            "Running {} steps at {:?} per frame",
            script.len(),
            self.config.frame_interval
        );

        let realtime = self.config.realtime;
        let interval = self.config.frame_interval;
        for step in script.steps() {
            self.step(step, &mut |record| {
                log::info!(
                    "frame {:>4} {:>8.3}s offset {}{}",
                    record.frame,
                    record.time.as_secs_f32(),
                    record.offset,
                    if record.flags.wants_frame() { " *" } else { "" }
                );
                if realtime {
                    std::thread::sleep(interval);
                }
            });
        }

        log::info!(
            "Finished after {} frames at {}",
            self.clock.frame(),
            self.target.current_offset()
        );
    }

    fn step(&mut self, step: &Step, on_frame: &mut dyn FnMut(FrameRecord)) {
        match step {
            Step::Input(event) => {
                self.dispatch(event);
            }
            Step::Wait(frames) => {
                for _ in 0..*frames {
                    on_frame(self.frame());
                }
            }
            Step::Settle => {
                let mut ticked = 0;
                while self.target.is_animating() {
                    if ticked >= self.config.max_settle_frames {
                        log::warn!(
                            "Still animating after {} frames, giving up",
                            self.config.max_settle_frames
                        );
                        break;
                    }
                    on_frame(self.frame());
                    ticked += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::{DragPhase, DraggableSpringElement, ToggleOffset};

    fn host() -> Host<DraggableSpringElement> {
        Host::new(DraggableSpringElement::new())
            .touch_slop(0.0)
            .realtime(false)
    }

    #[test]
    fn test_dispatch_drags_element() {
        let mut host = host();
        host.dispatch(&Event::MouseDown {
            x: 10.0,
            y: 0.0,
            button: crate::input::MouseButton::Left,
        });
        let response = host.dispatch(&Event::MouseMove { x: 50.0, y: 30.0 });
        assert_eq!(response, EventResponse::Handled);
        assert_eq!(host.target().current_offset(), Offset::new(40, 0));
        assert_eq!(host.target().phase(), DragPhase::Dragging);
    }

    #[test]
    fn test_play_records_every_frame() {
        let mut host = host();
        let script = Script::parse("down 0\nmove 90\nwait 3\nup\nsettle").unwrap();
        let frames = host.play(&script);

        assert!(frames.len() > 3);
        assert!(frames[..3].iter().all(|f| f.offset == Offset::new(90, 0)));
        assert_eq!(frames.last().map(|f| f.offset), Some(Offset::ZERO));
        assert_eq!(frames[1].frame, 2);
        assert_eq!(frames[1].time, 2 * FrameClock::DEFAULT_INTERVAL);
    }

    #[test]
    fn test_settle_is_bounded() {
        let mut host = host().max_settle_frames(5);
        let script = Script::parse("down 0\nmove 200\nup\nsettle").unwrap();
        let frames = host.play(&script);
        assert_eq!(frames.len(), 5);
        assert!(host.target().is_animating());
    }

    #[test]
    fn test_tap_toggles() {
        let mut host = Host::new(ToggleOffset::new(100)).realtime(false);
        let frames = host.play(&Script::parse("down 5\nup 5\nsettle").unwrap());
        assert_eq!(frames.last().map(|f| f.offset), Some(Offset::new(100, 100)));
    }

    #[test]
    fn test_run_without_pacing() {
        let mut host = host();
        host.run(&Script::parse("down 0\nmove 30\nup\nsettle").unwrap());
        assert_eq!(host.target().current_offset(), Offset::ZERO);
    }
}
