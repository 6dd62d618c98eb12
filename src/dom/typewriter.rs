//! Typewriter bound to a DOM element and driven by browser timers.

use std::cell::RefCell;
use std::rc::Rc;

use gesture::typewriter::{Glyph, Step, TextSink, Typewriter};
use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use crate::error::AtelierError;

/// [`TextSink`] writing into an element: text nodes for characters, `<br>` for breaks.
pub struct ElementSink {
    document: Document,
    element: HtmlElement,
}

impl TextSink for ElementSink {
    fn clear(&mut self) {
        self.element.set_inner_text("");
    }

    fn push(&mut self, glyph: Glyph) {
        let result = match glyph {
            Glyph::Char(ch) => self.element.append_with_str_1(ch.encode_utf8(&mut [0; 4])),
            Glyph::LineBreak => self
                .document
                .create_element("br")
                .and_then(|br| self.element.append_child(&br).map(|_| ())),
        };
        if let Err(err) = result {
            log::warn!("typewriter failed to append {glyph:?}: {err:?}");
        }
    }
}

struct Inner {
    typewriter: Typewriter,
    sink: ElementSink,
    /// The one outstanding step timer. Replacing or clearing it cancels the step.
    pending: Option<Timeout>,
}

/// Cloneable handle to one element's typewriter.
///
/// Each handle reveals independently; a reveal on one element never cancels
/// another element's reveal.
#[derive(Clone)]
pub struct TypewriterHandle {
    inner: Rc<RefCell<Inner>>,
}

impl TypewriterHandle {
    pub fn new(element: HtmlElement) -> Result<Self, AtelierError> {
        let document = super::document()?;
        let inner = Inner {
            typewriter: Typewriter::seeded(super::entropy_seed()),
            sink: ElementSink { document, element },
            pending: None,
        };
        Ok(Self { inner: Rc::new(RefCell::new(inner)) })
    }

    /// Clear the element and reveal `text`, cancelling any reveal in progress.
    pub fn reveal(&self, text: &str, base_speed_ms: u32) {
        let step = {
            let mut guard = self.inner.borrow_mut();
            guard.pending = None;
            let Inner { typewriter, sink, .. } = &mut *guard;
            typewriter.reveal(text, base_speed_ms, sink)
        };
        schedule(&self.inner, step);
    }
}

fn schedule(inner: &Rc<RefCell<Inner>>, step: Step) {
    let Step::Continue { job, delay_ms } = step else {
        // Complete or stale: nothing left to run for this job.
        return;
    };
    let owner = Rc::clone(inner);
    let timeout = Timeout::new(delay_ms, move || {
        let next = {
            let mut guard = owner.borrow_mut();
            let Inner { typewriter, sink, .. } = &mut *guard;
            typewriter.advance(job, sink)
        };
        if next == Step::Complete {
            owner.borrow_mut().pending = None;
        }
        schedule(&owner, next);
    });
    inner.borrow_mut().pending = Some(timeout);
}
