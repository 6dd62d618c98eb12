//! Raise-to-top ordering shared by every draggable element on a page.
//!
//! Each drag start asks a [`StackOrder`] for a fresh layer value and applies
//! it to the grabbed element, so the most recently touched element is always
//! drawn above the rest. The provider is injected rather than global: one
//! [`StackCounter`] is cloned into every controller on the page.

#[cfg(test)]
#[path = "stack_test.rs"]
mod stack_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::consts::STACK_ORDER_BASE;

/// Increment-and-get source of ascending layer values.
pub trait StackOrder {
    /// Return a layer value strictly above every value handed out before.
    fn raise(&self) -> i32;
}

impl<F> StackOrder for F
where
    F: Fn() -> i32,
{
    fn raise(&self) -> i32 {
        self()
    }
}

/// Shared counter handle. Clones observe and advance the same value.
#[derive(Debug, Clone)]
pub struct StackCounter {
    top: Rc<Cell<i32>>,
}

impl Default for StackCounter {
    fn default() -> Self {
        Self::new(STACK_ORDER_BASE)
    }
}

impl StackCounter {
    #[must_use]
    pub fn new(base: i32) -> Self {
        Self { top: Rc::new(Cell::new(base)) }
    }

    /// The last value handed out (or the base if none yet).
    #[cfg(test)]
    pub(crate) fn current(&self) -> i32 {
        self.top.get()
    }
}

impl StackOrder for StackCounter {
    fn raise(&self) -> i32 {
        let next = self.top.get().saturating_add(1);
        self.top.set(next);
        next
    }
}
