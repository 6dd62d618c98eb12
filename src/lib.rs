//! Portfolio page: draggable art tiles, a typewriter text panel, and a
//! crosshair cursor, compiled to WebAssembly.
//!
//! The interaction logic lives in the browser-free [`gesture`] crate. This
//! crate supplies the page around it: the embedded content manifest, startup
//! placement, and (with the `hydrate` feature) the DOM bindings and the wasm
//! entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Embedded art items and text blocks |
//! | [`layout`] | View selection and initial tile placement |
//! | [`crosshair`] | Crosshair line transforms |
//! | [`error`] | Setup error type |
//! | `dom` | Browser bindings and views (`hydrate` only) |

pub mod content;
pub mod crosshair;
pub mod error;
pub mod layout;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Wasm entry point: install logging, then build the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::warn!("console logger not installed: {err}");
    }
    if let Err(err) = dom::views::boot() {
        log::error!("page setup failed: {err}");
    }
}
