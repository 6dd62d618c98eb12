//! The two page views and the boot sequence that picks one.
//!
//! The view is chosen once from the window width. Desktop scatters the
//! gallery over the canvas and wires the text buttons; mobile shows only the
//! logo and a delayed warning.

use gesture::consts::DEFAULT_SPEED_MS;
use gesture::input::Offset;
use gesture::stack::StackCounter;
use gloo_timers::callback::Timeout;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::{Document, Event, HtmlElement};

use super::typewriter::TypewriterHandle;
use super::{append, create, create_html, document, drag, entropy_seed, html_element, listen, set_style, viewport_size, window};
use crate::content::{ArtFill, ArtItem, Content, keys};
use crate::error::AtelierError;
use crate::layout::{
    MOBILE_REVEAL_DELAY_MS, MOBILE_SPEED_MS, Size, ViewMode, gallery_layer, mobile_logo_position, scatter_position,
};

/// Build the view for the current window, once the document has been parsed.
pub fn boot() -> Result<(), AtelierError> {
    let document = document()?;
    if document.ready_state() == "loading" {
        listen(&document, "DOMContentLoaded", |_: Event| {
            if let Err(err) = mount() {
                log::error!("page setup failed: {err}");
            }
        })
    } else {
        mount()
    }
}

/// Load content and build the view matching the viewport width.
pub fn mount() -> Result<(), AtelierError> {
    let content = Content::embedded()?;
    let viewport = viewport_size(&window()?)?;
    let mode = ViewMode::for_width(viewport.width);
    log::info!("mounting {mode:?} view at {}x{}", viewport.width, viewport.height);
    match mode {
        ViewMode::Desktop => mount_desktop(&content),
        ViewMode::Mobile => mount_mobile(&content, viewport),
    }
}

fn mount_desktop(content: &Content) -> Result<(), AtelierError> {
    let window = window()?;
    let document = document()?;
    let container = html_element(&document, "canvas-container")?;
    let text = html_element(&document, "typewriter-text")?;

    super::crosshair::bind(&window, &document)?;

    let stack = StackCounter::default();
    let mut rng = SmallRng::seed_from_u64(entropy_seed());
    let bounds = Size::new(f64::from(container.client_width()), f64::from(container.client_height()));
    for (index, art) in content.gallery().iter().enumerate() {
        let tile = desktop_tile(&document, art)?;
        let at = scatter_position(&mut rng, bounds, Size::new(art.width, art.height));
        place(&tile, at)?;
        set_style(&tile, "z-index", &gallery_layer(index).to_string())?;
        open_on_double_click(&tile, &art.url)?;
        drag::attach(&tile, stack.clone())?;
        append(&container, &tile)?;
    }
    log::debug!("placed {} gallery tiles", content.gallery().len());

    let typewriter = TypewriterHandle::new(text)?;
    for (button_id, key) in [("btn-lab", keys::LAB), ("btn-tt", keys::ABOUT), ("btn-dont-click", keys::DONT_CLICK)] {
        let button = html_element(&document, button_id)?;
        let message = content.text(key)?.to_owned();
        let typewriter = typewriter.clone();
        listen(&button, "click", move |_: Event| typewriter.reveal(&message, DEFAULT_SPEED_MS))?;
    }
    typewriter.reveal(content.text(keys::LAB)?, DEFAULT_SPEED_MS);
    Ok(())
}

fn mount_mobile(content: &Content, viewport: Size) -> Result<(), AtelierError> {
    let document = document()?;
    let layer = html_element(&document, "mobile-logo-layer")?;
    let text = html_element(&document, "mobile-typewriter-text")?;
    let logo = content.logo().ok_or_else(|| AtelierError::MissingContent("logo".into()))?;

    let tile = mobile_logo(&document, logo)?;
    place(&tile, mobile_logo_position(viewport, Size::new(logo.width, logo.height)))?;
    drag::attach(&tile, StackCounter::default())?;
    append(&layer, &tile)?;

    let typewriter = TypewriterHandle::new(text)?;
    let message = content.text(keys::MOBILE_WARNING)?.to_owned();
    Timeout::new(MOBILE_REVEAL_DELAY_MS, move || typewriter.reveal(&message, MOBILE_SPEED_MS)).forget();
    Ok(())
}

fn desktop_tile(document: &Document, art: &ArtItem) -> Result<HtmlElement, AtelierError> {
    let tile = create_html(document, "div", "art-item group")?;
    size(&tile, art)?;
    let frame = create(document, "div", "w-full h-full relative overflow-hidden pointer-events-none")?;
    let body = match &art.fill {
        ArtFill::Img(src) => image(document, src, &art.title, "w-full h-full object-cover pointer-events-none select-none")?,
        ArtFill::Color(color) => {
            let block = create_html(document, "div", "absolute inset-0")?;
            set_style(&block, "background-color", color)?;
            set_style(&block, "opacity", "0.9")?;
            block.into()
        }
    };
    append(&frame, &body)?;
    append(&tile, &frame)?;
    Ok(tile)
}

fn mobile_logo(document: &Document, art: &ArtItem) -> Result<HtmlElement, AtelierError> {
    let tile = create_html(document, "div", "art-item pointer-events-auto")?;
    size(&tile, art)?;
    set_style(&tile, "position", "absolute")?;
    let body = match &art.fill {
        ArtFill::Img(src) => image(document, src, &art.title, "w-full h-full object-contain pointer-events-none select-none")?,
        ArtFill::Color(color) => {
            let block = create_html(document, "div", "w-full h-full flex items-center justify-center")?;
            set_style(&block, "background-color", color)?;
            let label = create(document, "span", "text-white font-bold text-xs uppercase tracking-widest")?;
            label.set_text_content(Some(art.title.as_str()));
            append(&block, &label)?;
            block.into()
        }
    };
    append(&tile, &body)?;
    Ok(tile)
}

fn image(document: &Document, src: &str, alt: &str, class: &str) -> Result<web_sys::Element, AtelierError> {
    let img = create(document, "img", class)?;
    for (name, value) in [("src", src), ("alt", alt)] {
        img.set_attribute(name, value).map_err(|err| AtelierError::dom("set image attribute", err))?;
    }
    Ok(img)
}

fn size(el: &HtmlElement, art: &ArtItem) -> Result<(), AtelierError> {
    set_style(el, "width", &format!("{}px", art.width))?;
    set_style(el, "height", &format!("{}px", art.height))
}

fn place(el: &HtmlElement, at: Offset) -> Result<(), AtelierError> {
    set_style(el, "left", &format!("{}px", at.left))?;
    set_style(el, "top", &format!("{}px", at.top))
}

fn open_on_double_click(tile: &HtmlElement, url: &str) -> Result<(), AtelierError> {
    let url = url.to_owned();
    listen(tile, "dblclick", move |_: Event| {
        let opened = web_sys::window().map(|w| w.open_with_url_and_target(&url, "_blank"));
        if let Some(Err(err)) = opened {
            log::warn!("failed to open {url}: {err:?}");
        }
    })
}
