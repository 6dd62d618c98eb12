//! Binds the crosshair lines to window mouse movement.

use gesture::input::PointerSample;
use web_sys::{Document, MouseEvent, Window};

use super::{html_element, listen};
use crate::crosshair::CrosshairTransforms;
use crate::error::AtelierError;

const HORIZONTAL_LINE_ID: &str = "crosshair-x";
const VERTICAL_LINE_ID: &str = "crosshair-y";

pub fn bind(window: &Window, document: &Document) -> Result<(), AtelierError> {
    let horizontal = html_element(document, HORIZONTAL_LINE_ID)?;
    let vertical = html_element(document, VERTICAL_LINE_ID)?;

    listen(window, "mousemove", move |ev: MouseEvent| {
        let pointer = PointerSample::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        let transforms = CrosshairTransforms::at(pointer);
        for (line, transform) in [(&horizontal, &transforms.horizontal), (&vertical, &transforms.vertical)] {
            if let Err(err) = line.style().set_property("transform", transform) {
                log::warn!("failed to move crosshair: {err:?}");
            }
        }
    })
}
