//! Startup placement: which view to build and where tiles first appear.
//!
//! Everything here runs once when the page boots. After that, positions are
//! owned by the drag controllers.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use gesture::input::Offset;
use rand::Rng;

/// Viewports narrower than this get the mobile view.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Minimum distance between a scattered tile and the container's top/left edge.
pub const SCATTER_MARGIN_PX: f64 = 50.0;

/// Space kept free past a tile's far edge, on top of the margin.
pub const SCATTER_RESERVE_PX: f64 = 100.0;

/// Initial z-index of the first gallery tile; later tiles stack one higher each.
pub const GALLERY_LAYER_BASE: i32 = 10;

/// Delay before the mobile view starts typing.
pub const MOBILE_REVEAL_DELAY_MS: u32 = 500;

/// Per-character speed of the mobile view's typewriter.
pub const MOBILE_SPEED_MS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Full canvas with scattered tiles, text panel, and crosshair.
    Desktop,
    /// A single draggable logo and a warning text.
    Mobile,
}

impl ViewMode {
    #[must_use]
    pub fn for_width(viewport_width: f64) -> Self {
        if viewport_width < MOBILE_BREAKPOINT_PX { Self::Mobile } else { Self::Desktop }
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Random top-left corner for a tile of `item` size inside `container`.
///
/// Each axis is uniform in `[margin, container - item - reserve + margin)`.
/// When the tile does not fit, that axis is pinned to the margin.
pub fn scatter_position<R: Rng>(rng: &mut R, container: Size, item: Size) -> Offset {
    Offset::new(
        scatter_axis(rng, container.width, item.width),
        scatter_axis(rng, container.height, item.height),
    )
}

fn scatter_axis<R: Rng>(rng: &mut R, container: f64, item: f64) -> f64 {
    let span = container - item - SCATTER_RESERVE_PX;
    if span <= 0.0 {
        return SCATTER_MARGIN_PX;
    }
    rng.random::<f64>() * span + SCATTER_MARGIN_PX
}

/// Where the mobile logo starts: horizontally centered, a third of the way down.
#[must_use]
pub fn mobile_logo_position(viewport: Size, item: Size) -> Offset {
    Offset::new((viewport.width - item.width) / 2.0, (viewport.height - item.height) / 3.0)
}

/// Initial z-index for the gallery tile at `index`.
#[must_use]
pub fn gallery_layer(index: usize) -> i32 {
    i32::try_from(index).map_or(i32::MAX, |i| i.saturating_add(GALLERY_LAYER_BASE))
}
