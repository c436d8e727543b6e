//! MetricsProvider trait for abstracting device metrics acquisition.
//!
//! The renderer never reads window dimensions from process-wide state. Every
//! call site asks a provider, so an orientation change is visible on the next
//! query without any invalidation step.

use mathtext_types::{Platform, Size, Viewport};
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for updating mutable metrics providers.
#[derive(Error, Debug, Clone)]
pub enum MetricsError {
    #[error("Metrics store lock poisoned")]
    Poisoned,

    #[error("Invalid viewport dimensions: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

/// Shared, thread-safe handle to a metrics provider.
pub type SharedMetrics = Arc<dyn MetricsProvider>;

/// A trait for querying the host's current viewport and platform identity.
///
/// # Implementations
///
/// - `FixedMetrics`: Reports metrics held in memory (tests, servers, CLIs)
///
/// # Example
///
/// ```ignore
/// let metrics = FixedMetrics::new(Platform::Ios, Viewport::new(375.0, 812.0));
/// assert_eq!(metrics.viewport().map(|v| v.width()), Some(375.0));
/// ```
pub trait MetricsProvider: Send + Sync + Debug {
    /// The live window metrics.
    ///
    /// Returns `None` on hosts without a native window (e.g. the web target),
    /// in which case callers fall back to the reference design size.
    fn viewport(&self) -> Option<Viewport>;

    /// The platform family of the host.
    fn platform(&self) -> Platform;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory metrics provider.
///
/// The stored viewport can be swapped at runtime (e.g. on rotation), and the
/// change is observed by the very next query.
#[derive(Debug)]
pub struct FixedMetrics {
    platform: Platform,
    viewport: RwLock<Option<Viewport>>,
}

impl FixedMetrics {
    pub fn new(platform: Platform, viewport: Viewport) -> Self {
        Self {
            platform,
            viewport: RwLock::new(Some(viewport)),
        }
    }

    /// A provider for hosts that expose no live window.
    pub fn headless(platform: Platform) -> Self {
        Self {
            platform,
            viewport: RwLock::new(None),
        }
    }

    /// Replace the current viewport.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::InvalidViewport` for non-positive or non-finite
    /// dimensions and `MetricsError::Poisoned` if the internal lock is poisoned.
    pub fn set_viewport(&self, viewport: Viewport) -> Result<(), MetricsError> {
        let Size { width, height } = viewport.size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(MetricsError::InvalidViewport { width, height });
        }
        let mut slot = self.viewport.write().map_err(|_| MetricsError::Poisoned)?;
        *slot = Some(viewport);
        Ok(())
    }

    /// Swap width and height of the current viewport.
    pub fn rotate(&self) -> Result<(), MetricsError> {
        let mut slot = self.viewport.write().map_err(|_| MetricsError::Poisoned)?;
        if let Some(viewport) = slot.as_mut() {
            viewport.size = Size::new(viewport.size.height, viewport.size.width);
        }
        Ok(())
    }

    pub fn shared(self) -> SharedMetrics {
        Arc::new(self)
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::headless(Platform::Web)
    }
}

impl MetricsProvider for FixedMetrics {
    fn viewport(&self) -> Option<Viewport> {
        // A poisoned lock still holds the last written viewport.
        match self.viewport.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn name(&self) -> &'static str {
        "FixedMetrics"
    }
}
