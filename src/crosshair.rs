//! Crosshair cursor effect: two full-viewport lines that follow the mouse.

#[cfg(test)]
#[path = "crosshair_test.rs"]
mod crosshair_test;

use gesture::input::PointerSample;

/// CSS transforms for the two crosshair lines at one pointer position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosshairTransforms {
    /// For the horizontal line: shifts it down to the pointer's y.
    pub horizontal: String,
    /// For the vertical line: shifts it right to the pointer's x.
    pub vertical: String,
}

impl CrosshairTransforms {
    #[must_use]
    pub fn at(pointer: PointerSample) -> Self {
        Self {
            horizontal: format!("translate3d(0, {}px, 0)", pointer.y),
            vertical: format!("translate3d({}px, 0, 0)", pointer.x),
        }
    }
}
