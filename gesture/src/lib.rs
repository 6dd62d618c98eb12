//! Interaction core for the portfolio page.
//!
//! This crate holds the browser-free half of the page: the drag state machine
//! that turns mouse and touch input into element positions, and the
//! typewriter scheduler that reveals text one character at a time. The host
//! crate compiles to WebAssembly and is responsible only for translating DOM
//! events into [`input::InputEvent`]s, applying the resulting outcomes to
//! elements, and owning the timers that drive [`typewriter::Typewriter`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`drag`] | Drag state machine and the [`drag::Movable`] element seam |
//! | [`typewriter`] | Reveal jobs, step pacing, and the [`typewriter::TextSink`] seam |
//! | [`input`] | Pointer samples, buttons, and mouse/touch normalization |
//! | [`stack`] | Injected "raise to top" ordering shared across elements |
//! | [`consts`] | Shared numeric constants (pacing, stacking base) |

pub mod consts;
pub mod drag;
pub mod input;
pub mod stack;
pub mod typewriter;
