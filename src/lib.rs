//! Drag-and-release spring animation for a single offset-driven element.
//!
//! The host forwards pointer events and ticks the element once per frame,
//! then translates the element by [`Offset`] when rendering.
//!
//! ```
//! use std::time::Duration;
//! use recoil::prelude::*;
//!
//! let mut element = DraggableSpringElement::new();
//! element.on_drag_start();
//! element.on_drag_move(42.0);
//! assert_eq!(element.current_offset(), Offset::new(42, 0));
//!
//! element.on_drag_end();
//! while element.is_animating() {
//!     element.advance(Duration::from_millis(16));
//! }
//! assert_eq!(element.current_offset(), Offset::ZERO);
//! ```

pub mod animation;
pub mod drag;
pub mod frame;
pub mod host;
pub mod input;
pub mod offset;
pub mod script;

pub use offset::Offset;

pub mod prelude {
    pub use crate::animation::{
        AnalyticSpring, IntegratorKind, SemiImplicitEuler, SpringConfig, SpringIntegrator,
        SpringState,
    };
    pub use crate::drag::{
        DragConfig, DragPhase, Draggable, DraggableSpringElement, TargetDrivenDrag, ToggleOffset,
    };
    pub use crate::frame::ChangeFlags;
    pub use crate::host::{FrameRecord, Host, HostConfig};
    pub use crate::input::{DragEvent, Event, EventResponse, MouseButton, PointerTracker};
    pub use crate::offset::Offset;
    pub use crate::script::{Script, ScriptError, Step};
}
