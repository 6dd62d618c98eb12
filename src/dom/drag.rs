//! Make an `HtmlElement` draggable with mouse or touch.

use std::cell::RefCell;
use std::rc::Rc;

use gesture::consts::GRABBED_CLASSES;
use gesture::drag::{DragController, DragOutcome, Movable};
use gesture::input::{InputEvent, Offset, Phase, PointerSample};
use gesture::stack::StackOrder;
use web_sys::{Event, HtmlElement, MouseEvent, TouchEvent};

use super::listen;
use crate::error::AtelierError;

/// [`Movable`] over an absolutely positioned element.
pub struct HtmlMovable(pub HtmlElement);

impl HtmlMovable {
    fn style(&self, property: &str, value: &str) {
        if let Err(err) = self.0.style().set_property(property, value) {
            log::warn!("failed to set {property} on drag target: {err:?}");
        }
    }
}

impl Movable for HtmlMovable {
    fn offset(&self) -> Offset {
        Offset::new(f64::from(self.0.offset_left()), f64::from(self.0.offset_top()))
    }

    fn set_offset(&mut self, offset: Offset) {
        self.style("left", &format!("{}px", offset.left));
        self.style("top", &format!("{}px", offset.top));
    }

    fn set_layer(&mut self, layer: i32) {
        self.style("z-index", &layer.to_string());
    }

    fn set_grabbed(&mut self, grabbed: bool) {
        let classes = self.0.class_list();
        let [cursor, scale] = GRABBED_CLASSES;
        let result = if grabbed { classes.add_2(cursor, scale) } else { classes.remove_2(cursor, scale) };
        if let Err(err) = result {
            log::warn!("failed to toggle grabbed classes: {err:?}");
        }
    }
}

struct Binding<S> {
    controller: DragController<S>,
    target: HtmlMovable,
}

/// Wire drag handling onto `element`, raising it through `stack` on each grab.
///
/// Start listeners go on the element; move and end listeners go on the
/// window so the drag keeps tracking outside the element. Calling this twice
/// for one element installs two independent controllers.
pub fn attach<S: StackOrder + 'static>(element: &HtmlElement, stack: S) -> Result<(), AtelierError> {
    let window = super::window()?;
    let binding = Rc::new(RefCell::new(Binding {
        controller: DragController::new(stack),
        target: HtmlMovable(element.clone()),
    }));

    listen(element, "mousedown", on_mouse(&binding, Phase::Start))?;
    listen(element, "touchstart", on_touch(&binding, Phase::Start))?;
    listen(&window, "mousemove", on_mouse(&binding, Phase::Move))?;
    listen(&window, "mouseup", on_mouse(&binding, Phase::End))?;
    listen(&window, "touchmove", on_touch(&binding, Phase::Move))?;
    listen(&window, "touchend", on_touch(&binding, Phase::End))?;
    Ok(())
}

fn on_mouse<S: StackOrder + 'static>(binding: &Rc<RefCell<Binding<S>>>, phase: Phase) -> impl FnMut(MouseEvent) + 'static {
    let binding = Rc::clone(binding);
    move |ev: MouseEvent| {
        let client = PointerSample::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        let input = InputEvent::mouse(phase, ev.button(), client, ev.cancelable());
        dispatch(&binding, &input, &ev);
    }
}

fn on_touch<S: StackOrder + 'static>(binding: &Rc<RefCell<Binding<S>>>, phase: Phase) -> impl FnMut(TouchEvent) + 'static {
    let binding = Rc::clone(binding);
    move |ev: TouchEvent| {
        let first = ev
            .touches()
            .get(0)
            .map(|t| PointerSample::new(f64::from(t.client_x()), f64::from(t.client_y())));
        let input = InputEvent::touch(phase, first.as_slice(), ev.cancelable());
        dispatch(&binding, &input, &ev);
    }
}

fn dispatch<S: StackOrder>(binding: &Rc<RefCell<Binding<S>>>, input: &InputEvent, event: &Event) {
    let outcome = {
        let mut guard = binding.borrow_mut();
        let Binding { controller, target } = &mut *guard;
        controller.handle(input, target)
    };
    if let DragOutcome::Moved { suppress_default: true, .. } = outcome {
        event.prevent_default();
    }
}
