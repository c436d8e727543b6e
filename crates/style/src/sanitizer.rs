//! Tag-aware style sanitization.
//!
//! Every styled node passes through here before its style reaches an output
//! primitive. The sanitizer never fails: anything it cannot interpret is
//! dropped.

use crate::font::normalize_font_size;
use crate::policy::StylePolicy;
use crate::responsive::ResponsiveMetrics;
use crate::value::StyleMap;
use log::debug;
use mathtext_traits::MetricsProvider;

#[derive(Debug, Clone, Copy)]
pub struct StyleSanitizer<'a> {
    policy: &'a StylePolicy,
    metrics: &'a dyn MetricsProvider,
    responsive_font_size: bool,
}

impl<'a> StyleSanitizer<'a> {
    pub fn new(
        policy: &'a StylePolicy,
        metrics: &'a dyn MetricsProvider,
        responsive_font_size: bool,
    ) -> Self {
        Self {
            policy,
            metrics,
            responsive_font_size,
        }
    }

    pub fn responsive(&self) -> ResponsiveMetrics<'a> {
        ResponsiveMetrics::new(self.metrics)
    }

    /// Applies responsive scaling when the global toggle is on.
    pub fn scale_font(&self, size: f32) -> f32 {
        if self.responsive_font_size {
            self.responsive().scale_font(size)
        } else {
            size
        }
    }

    /// Normalizes `fontSize` and, for inline or unknown tags, removes every
    /// property outside the text-safe allow-list. Block containers keep all
    /// of their properties.
    pub fn sanitize(&self, tag: &str, style_in: &StyleMap) -> StyleMap {
        let mut style = style_in.clone();

        if style.contains_key("fontSize") {
            match normalize_font_size(style.get("fontSize")) {
                Some(size) => style.insert("fontSize", self.scale_font(size)),
                None => {
                    debug!(
                        "<{}>: dropping unresolvable fontSize {:?}",
                        tag,
                        style.get("fontSize")
                    );
                    style.remove("fontSize");
                }
            }
        }

        if !self.policy.classify(tag).allows_layout() {
            style.retain(|property, _| {
                let keep = self.policy.is_text_safe(property);
                if !keep {
                    debug!("<{}>: dropping non-text property '{}'", tag, property);
                }
                keep
            });
        }

        style
    }

    pub fn percent_allowed(&self, tag: &str, property: &str) -> bool {
        self.policy.percent_allowed(tag, property)
    }

    /// `sanitize`, then drop every percentage value the tag may not carry.
    pub fn map_style(&self, tag: &str, style_in: &StyleMap) -> StyleMap {
        let mut style = self.sanitize(tag, style_in);
        style.retain(|property, value| {
            let keep = !value.is_percentage() || self.percent_allowed(tag, property);
            if !keep {
                debug!("<{}>: dropping percentage {}: {}", tag, property, value);
            }
            keep
        });
        style
    }

    /// Restricts an already-sanitized style to text-safe properties, for
    /// styles inherited from block containers onto text runs.
    pub fn text_safe(&self, style: &StyleMap) -> StyleMap {
        style
            .iter()
            .filter(|(property, value)| {
                self.policy.is_text_safe(property) && !value.is_percentage()
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<StyleMap>()
    }
}
