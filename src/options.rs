//! Render configuration.

use crate::error::PipelineError;
use mathtext_style::StyleMap;
use serde::{Deserialize, Serialize};

/// Whether the typesetter reuses glyph definitions across a fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontCache {
    #[default]
    None,
    Local,
}

/// Every knob of a render pass. All fields default independently, so a
/// partial JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Replace newlines inside text nodes with a space.
    pub collapse_text_newlines: bool,
    /// Drop text nodes consisting only of newlines.
    pub skip_isolated_newline: bool,
    /// Collapse runs of horizontal whitespace inside text nodes.
    pub collapse_whitespace_runs: bool,
    /// Flatten the raw markup onto one line before typesetting.
    pub force_single_line: bool,
    /// Remove `white-space: pre-wrap` declarations before typesetting.
    pub strip_pre_wrap: bool,
    pub font_cache: FontCache,
    /// Base font size; text runs are drawn at twice this value.
    pub font_size: f32,
    pub color: String,
    pub responsive_font_size: bool,
    /// Laid over the root container's flow style.
    pub container_style: StyleMap,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            collapse_text_newlines: true,
            skip_isolated_newline: true,
            collapse_whitespace_runs: true,
            force_single_line: true,
            strip_pre_wrap: true,
            font_cache: FontCache::None,
            font_size: 14.0,
            color: "black".to_string(),
            responsive_font_size: true,
            container_style: StyleMap::new(),
        }
    }
}

impl RenderOptions {
    /// Loads options from a JSON object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let options: RenderOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(PipelineError::Config(format!(
                "fontSize must be a positive number, got {}",
                self.font_size
            )));
        }
        if self.color.trim().is_empty() {
            return Err(PipelineError::Config("color must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Hosts specify the nominal size of the rendered text, which is twice
    /// the base size.
    pub fn with_host_font_size(mut self, size: f32) -> Self {
        self.font_size = size / 2.0;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_font_cache(mut self, font_cache: FontCache) -> Self {
        self.font_cache = font_cache;
        self
    }

    pub fn with_collapse_text_newlines(mut self, enabled: bool) -> Self {
        self.collapse_text_newlines = enabled;
        self
    }

    pub fn with_skip_isolated_newline(mut self, enabled: bool) -> Self {
        self.skip_isolated_newline = enabled;
        self
    }

    pub fn with_collapse_whitespace_runs(mut self, enabled: bool) -> Self {
        self.collapse_whitespace_runs = enabled;
        self
    }

    pub fn with_force_single_line(mut self, enabled: bool) -> Self {
        self.force_single_line = enabled;
        self
    }

    pub fn with_strip_pre_wrap(mut self, enabled: bool) -> Self {
        self.strip_pre_wrap = enabled;
        self
    }

    pub fn with_responsive_font_size(mut self, enabled: bool) -> Self {
        self.responsive_font_size = enabled;
        self
    }

    pub fn with_container_style(mut self, style: StyleMap) -> Self {
        self.container_style = style;
        self
    }

    /// The root flow container style: a wrapping, center-aligned row with
    /// `container_style` on top.
    pub fn root_style(&self) -> StyleMap {
        StyleMap::new()
            .with("flexDirection", "row")
            .with("flexWrap", "wrap")
            .with("alignItems", "center")
            .with("flexShrink", 1.0)
            .merged(&self.container_style)
    }

    /// The style every text run starts from before inherited styles apply.
    pub fn base_text_style(&self) -> StyleMap {
        StyleMap::new()
            .with("fontSize", self.font_size * 2.0)
            .with("color", self.color.as_str())
    }
}
