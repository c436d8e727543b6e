//! Host platform identity and the live viewport it reports.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// The platform family the rendered tree is destined for.
///
/// Only `Ios` and `Android` have a native viewport with a status bar; `Web`
/// renders against a fixed reference design instead of a live window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Web,
    #[default]
    Other,
}

impl Platform {
    /// Parse a platform name (e.g., "ios", "Android"). Unknown names map to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "ios" => Platform::Ios,
            "android" => Platform::Android,
            "web" => Platform::Web,
            _ => Platform::Other,
        }
    }

    /// Whether content is laid out below a system status bar that eats into
    /// the usable long side in portrait.
    pub fn has_status_bar_inset(&self) -> bool {
        matches!(self, Platform::Android)
    }
}

/// A snapshot of the window metrics at the moment of the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub size: Size,
    /// Height of the system status bar, when the platform reports one.
    #[serde(default)]
    pub status_bar_height: Option<f32>,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            status_bar_height: None,
        }
    }

    pub fn with_status_bar(mut self, height: f32) -> Self {
        self.status_bar_height = Some(height);
        self
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }
}
