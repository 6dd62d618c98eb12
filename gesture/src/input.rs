//! Input model: pointer samples, mouse buttons, and the normalized input event.
//!
//! Hosts receive mouse and touch events with different shapes. This module
//! folds both into a single [`InputEvent`] carrying a [`Phase`], the
//! [`Source`] device, and the coordinate of the primary contact. The drag
//! state machine only ever sees this normalized form.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Coordinate of the primary contact point of an input event, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`.
    #[must_use]
    pub fn delta_from(self, origin: PointerSample) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Absolute element position inside its positioned container, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

impl Offset {
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// This offset shifted by a pointer delta.
    #[must_use]
    pub fn translated(self, (dx, dy): (f64, f64)) -> Self {
        Self { left: self.left + dx, top: self.top + dy }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
    /// Back/forward or any other auxiliary button, by DOM code.
    Other(i16),
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_code(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// Where in a gesture an event sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `mousedown` / `touchstart` on the element.
    Start,
    /// `mousemove` / `touchmove` anywhere in the viewport.
    Move,
    /// `mouseup` / `touchend` anywhere in the viewport.
    End,
}

/// Device that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Mouse { button: Button },
    Touch,
}

/// A host input event reduced to what the drag state machine needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    pub phase: Phase,
    pub source: Source,
    /// Primary contact coordinate. `None` when the event has no contact
    /// left, e.g. a `touchend` for the last finger.
    pub sample: Option<PointerSample>,
    /// Whether the host allows the default action to be suppressed.
    pub cancelable: bool,
}

impl InputEvent {
    /// Build an event from a mouse event's button code and client coordinates.
    #[must_use]
    pub fn mouse(phase: Phase, button_code: i16, client: PointerSample, cancelable: bool) -> Self {
        Self {
            phase,
            source: Source::Mouse { button: Button::from_code(button_code) },
            sample: Some(client),
            cancelable,
        }
    }

    /// Build an event from the active touch list of a touch event.
    ///
    /// Only the first touch point is tracked; additional fingers are ignored.
    #[must_use]
    pub fn touch(phase: Phase, touches: &[PointerSample], cancelable: bool) -> Self {
        Self { phase, source: Source::Touch, sample: primary_sample(touches, None), cancelable }
    }

    /// Whether this event may begin a drag: any touch, or the primary mouse button.
    #[must_use]
    pub fn can_start_drag(&self) -> bool {
        match self.source {
            Source::Touch => true,
            Source::Mouse { button } => button == Button::Primary,
        }
    }
}

/// Pick the primary contact of an event: the first touch point when present,
/// otherwise the pointer's direct coordinates.
#[must_use]
pub fn primary_sample(touches: &[PointerSample], direct: Option<PointerSample>) -> Option<PointerSample> {
    touches.first().copied().or(direct)
}
