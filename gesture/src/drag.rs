//! Drag state machine for a single movable element.
//!
//! A [`DragController`] owns at most one [`DragSession`] at a time. Start
//! events come from the element itself; move and end events come from the
//! whole viewport, so a drag keeps tracking after the pointer leaves the
//! element. Every handler returns a [`DragOutcome`] describing what changed,
//! which the host uses to decide whether to suppress the browser default.
//!
//! The controller never fails. Out-of-order input (a move or end without a
//! start, a second start while dragging, a non-primary mouse button) is
//! reported as [`DragOutcome::Ignored`] and leaves all state untouched.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::input::{InputEvent, Offset, Phase, PointerSample};
use crate::stack::StackOrder;

/// The element side of a drag: where it is, and how to move and restyle it.
pub trait Movable {
    /// Current position relative to the offset parent.
    fn offset(&self) -> Offset;
    /// Place the element at an absolute position.
    fn set_offset(&mut self, offset: Offset);
    /// Apply a layer (z-index) value.
    fn set_layer(&mut self, layer: i32);
    /// Toggle the "being dragged" visual state.
    fn set_grabbed(&mut self, grabbed: bool);
}

/// Context captured at drag start and held until drag end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position at drag start.
    pub anchor: PointerSample,
    /// Element position at drag start.
    pub origin: Offset,
}

impl DragSession {
    /// Element position for a pointer at `sample`.
    #[must_use]
    pub fn position_for(&self, sample: PointerSample) -> Offset {
        self.origin.translated(sample.delta_from(self.anchor))
    }
}

/// Result of feeding one event to a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// The event did not apply to the current state.
    Ignored,
    /// A drag began and the element was raised to `layer`.
    Started { layer: i32 },
    /// The element moved to `offset`. When `suppress_default` is set the host
    /// should cancel the event's default action (page scroll on touch).
    Moved { offset: Offset, suppress_default: bool },
    /// The active drag finished.
    Ended,
}

/// Drag state machine for one element.
pub struct DragController<S> {
    stack: S,
    session: Option<DragSession>,
}

impl<S: StackOrder> DragController<S> {
    /// Create a controller that raises its element through `stack`.
    #[must_use]
    pub fn new(stack: S) -> Self {
        Self { stack, session: None }
    }

    /// The active session, if a drag is in progress.
    #[cfg(test)]
    pub(crate) fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Dispatch an event by phase.
    pub fn handle<M: Movable>(&mut self, event: &InputEvent, target: &mut M) -> DragOutcome {
        match event.phase {
            Phase::Start => self.start(event, target),
            Phase::Move => self.drag_to(event, target),
            Phase::End => self.end(target),
        }
    }

    /// Begin a drag if none is active and the event may start one.
    pub fn start<M: Movable>(&mut self, event: &InputEvent, target: &mut M) -> DragOutcome {
        if self.session.is_some() || !event.can_start_drag() {
            return DragOutcome::Ignored;
        }
        let Some(anchor) = event.sample else {
            return DragOutcome::Ignored;
        };

        let origin = target.offset();
        self.session = Some(DragSession { anchor, origin });

        let layer = self.stack.raise();
        target.set_layer(layer);
        target.set_grabbed(true);
        log::debug!("drag start at ({}, {}) from ({}, {}), layer {layer}", anchor.x, anchor.y, origin.left, origin.top);
        DragOutcome::Started { layer }
    }

    /// Track the pointer while a drag is active.
    pub fn drag_to<M: Movable>(&mut self, event: &InputEvent, target: &mut M) -> DragOutcome {
        let Some(session) = self.session.as_ref() else {
            return DragOutcome::Ignored;
        };
        let Some(sample) = event.sample else {
            return DragOutcome::Ignored;
        };

        let offset = session.position_for(sample);
        target.set_offset(offset);
        DragOutcome::Moved { offset, suppress_default: event.cancelable }
    }

    /// Finish the active drag, if any.
    pub fn end<M: Movable>(&mut self, target: &mut M) -> DragOutcome {
        if self.session.take().is_none() {
            return DragOutcome::Ignored;
        }
        target.set_grabbed(false);
        log::debug!("drag end");
        DragOutcome::Ended
    }
}
