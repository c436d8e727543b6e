//! Device-relative sizing.
//!
//! A fixed reference design is rendered on devices of differing aspect
//! ratio; these helpers map nominal sizes and percentages to pixels for the
//! current device. Metrics are queried on every call and never cached.

use mathtext_traits::MetricsProvider;
use mathtext_types::{Platform, Size, Viewport};

/// The reference design the nominal sizes were authored against.
pub const REFERENCE_SIZE: Size = Size {
    width: 375.0,
    height: 812.0,
};

/// Fixed portrait inset reported for iOS hosts.
pub const IOS_PORTRAIT_OFFSET: f32 = 78.0;

#[derive(Debug, Clone, Copy)]
pub struct ResponsiveMetrics<'a> {
    metrics: &'a dyn MetricsProvider,
}

impl<'a> ResponsiveMetrics<'a> {
    pub fn new(metrics: &'a dyn MetricsProvider) -> Self {
        Self { metrics }
    }

    fn current_viewport(&self) -> Viewport {
        self.metrics.viewport().unwrap_or(Viewport {
            size: REFERENCE_SIZE,
            status_bar_height: None,
        })
    }

    /// The live viewport, or `None` when percentages must resolve against
    /// the reference design instead.
    fn live_viewport(&self) -> Option<Viewport> {
        match self.metrics.platform() {
            Platform::Web => None,
            _ => self.metrics.viewport(),
        }
    }

    /// Scales a nominal font size to the device, rounding to whole points.
    pub fn scale_font(&self, size: f32) -> f32 {
        let viewport = self.current_viewport();
        let long_side = viewport.size.long_side();
        if long_side <= 0.0 {
            return size.round();
        }

        let platform = self.metrics.platform();
        let offset = if viewport.size.is_landscape() {
            0.0
        } else {
            match platform {
                Platform::Ios => IOS_PORTRAIT_OFFSET,
                Platform::Android => viewport.status_bar_height.unwrap_or(0.0),
                Platform::Web | Platform::Other => 0.0,
            }
        };
        let adjusted = if platform.has_status_bar_inset() {
            long_side - offset
        } else {
            long_side
        };

        (size * adjusted / long_side).round()
    }

    /// `pct` percent of the viewport width.
    pub fn scale_width(&self, pct: f32) -> f32 {
        let width = self
            .live_viewport()
            .map_or(REFERENCE_SIZE.width, |v| v.width());
        width * pct / 100.0
    }

    /// `pct` percent of the viewport height.
    pub fn scale_height(&self, pct: f32) -> f32 {
        let height = self
            .live_viewport()
            .map_or(REFERENCE_SIZE.height, |v| v.height());
        height * pct / 100.0
    }
}
