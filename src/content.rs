//! Static page content: the art tiles and the text blocks shown by the typewriter.
//!
//! Content ships inside the binary as `assets/content.json`. The first art
//! item is the logo used by the mobile view; the rest are gallery tiles.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::AtelierError;

const EMBEDDED_MANIFEST: &str = include_str!("../assets/content.json");

/// Keys of the text blocks the page reveals.
pub mod keys {
    /// Shown when the desktop view opens and on the "lab" button.
    pub const LAB: &str = "lab_tt";
    /// Author card.
    pub const ABOUT: &str = "tt";
    /// Shown in the mobile view.
    pub const MOBILE_WARNING: &str = "mobile_warning";
    /// The "don't click" button.
    pub const DONT_CLICK: &str = "dont_click";

    /// Every key the page looks up.
    pub const ALL: [&str; 4] = [LAB, ABOUT, MOBILE_WARNING, DONT_CLICK];
}

/// How a tile is filled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtFill {
    /// A solid CSS color.
    Color(String),
    /// An image URL.
    Img(String),
}

/// One draggable tile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArtItem {
    pub title: String,
    pub width: f64,
    pub height: f64,
    #[serde(flatten)]
    pub fill: ArtFill,
    /// Opened in a new tab on double-click.
    pub url: String,
}

/// Everything the page displays.
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    pub arts: Vec<ArtItem>,
    pub texts: BTreeMap<String, String>,
}

impl Content {
    /// Parse the manifest compiled into the binary.
    pub fn embedded() -> Result<Self, AtelierError> {
        Self::from_json(EMBEDDED_MANIFEST)
    }

    /// Parse and check a manifest: at least one art item and every text key present.
    pub fn from_json(raw: &str) -> Result<Self, AtelierError> {
        let content: Self = serde_json::from_str(raw)?;
        if content.arts.is_empty() {
            return Err(AtelierError::MissingContent("art items".into()));
        }
        if let Some(missing) = keys::ALL.iter().find(|key| !content.texts.contains_key(**key)) {
            return Err(AtelierError::MissingContent(format!("text block `{missing}`")));
        }
        Ok(content)
    }

    /// The logo tile. Present in every validated manifest.
    #[must_use]
    pub fn logo(&self) -> Option<&ArtItem> {
        self.arts.first()
    }

    /// Tiles scattered across the desktop canvas.
    #[must_use]
    pub fn gallery(&self) -> &[ArtItem] {
        self.arts.get(1..).unwrap_or_default()
    }

    /// Look up a text block by key.
    pub fn text(&self, key: &str) -> Result<&str, AtelierError> {
        self.texts
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| AtelierError::MissingContent(format!("text block `{key}`")))
    }
}
