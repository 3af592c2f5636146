//! Horizontal project scroller
//!
//! Converts wheel and touch-drag input into a bounded horizontal offset for
//! the project strip. The rendering layer applies [`HorizontalScroll::transform_x`]
//! as a translation.
//!
//! # Bounds
//!
//! The scrollable range is `[0, max_offset]` where
//! `max_offset = item_count * item_width - viewport_width + edge_margin`,
//! floored at zero. `max_offset` is recomputed from the live viewport on every
//! input event. A viewport shrink between events may leave the offset above
//! the new maximum until the next input event clamps it again.
//!
//! # Example
//!
//! ```rust
//! use folio_core::Viewport;
//! use folio_layout::{HorizontalScroll, ScrollConfig};
//!
//! let mut scroll = HorizontalScroll::new(ScrollConfig::default(), 6, Viewport::new(1000.0, 800.0)).unwrap();
//! scroll.on_wheel(500.0, false);
//! assert_eq!(scroll.offset(), 500.0);
//! ```

use folio_core::viewport::DEFAULT_COMPACT_BREAKPOINT;
use folio_core::{CoreError, DeviceClass, Result, Viewport};
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration
// ============================================================================

/// Sizing and sensitivity of the project strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Card pitch on standard devices (pixels)
    pub standard_item_width: f32,
    /// Card pitch on compact devices (pixels)
    pub compact_item_width: f32,
    /// Extra travel past the last card (pixels)
    pub edge_margin: f32,
    /// Multiplier applied to raw touch-drag distance
    pub drag_amplification: f32,
    /// Viewport widths strictly below this are compact
    pub compact_breakpoint: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            standard_item_width: 400.0,
            compact_item_width: 300.0,
            edge_margin: 100.0,
            drag_amplification: 1.5,
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
        }
    }
}

impl ScrollConfig {
    pub fn validate(&self) -> Result<()> {
        for width in [self.standard_item_width, self.compact_item_width] {
            if !width.is_finite() || width <= 0.0 {
                return Err(CoreError::InvalidItemWidth(width));
            }
        }
        if !self.drag_amplification.is_finite() || self.drag_amplification <= 0.0 {
            return Err(CoreError::InvalidAmplification(self.drag_amplification));
        }
        for (name, value) in [
            ("edge_margin", self.edge_margin),
            ("compact_breakpoint", self.compact_breakpoint),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidScrollSetting { name, value });
            }
        }
        Ok(())
    }

    /// Card pitch for a device class
    pub fn item_width(&self, class: DeviceClass) -> f32 {
        match class {
            DeviceClass::Compact => self.compact_item_width,
            DeviceClass::Standard => self.standard_item_width,
        }
    }
}

// ============================================================================
// Drag Session
// ============================================================================

/// A single touch gesture in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer X at touch start
    pub start_x: f32,
    /// Offset at touch start; moves are measured from here
    pub start_offset: f32,
}

// ============================================================================
// Controller
// ============================================================================

/// Horizontal scroll state for the project strip
#[derive(Debug, Clone)]
pub struct HorizontalScroll {
    config: ScrollConfig,
    item_count: usize,
    viewport: Viewport,
    offset: f32,
    drag: Option<DragSession>,
}

impl HorizontalScroll {
    /// Create a scroller at offset zero. `item_count` is fixed for its lifetime.
    pub fn new(config: ScrollConfig, item_count: usize, viewport: Viewport) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            item_count,
            viewport,
            offset: 0.0,
            drag: None,
        })
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn device_class(&self) -> DeviceClass {
        self.viewport.device_class(self.config.compact_breakpoint)
    }

    /// Card pitch for the current device class
    pub fn item_width(&self) -> f32 {
        self.config.item_width(self.device_class())
    }

    /// Current horizontal displacement in pixels
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Translation to apply to the strip (negative = shifted left)
    pub fn transform_x(&self) -> f32 {
        -self.offset
    }

    /// Largest offset reachable with the live viewport
    pub fn max_offset(&self) -> f32 {
        let content = self.item_count as f32 * self.item_width();
        (content - self.viewport.width + self.config.edge_margin).max(0.0)
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Update the viewport. The offset is not reclamped until the next input.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Apply a wheel delta. Ignored while the modal is open.
    pub fn on_wheel(&mut self, delta_y: f32, modal_open: bool) {
        if modal_open || !delta_y.is_finite() {
            return;
        }
        let candidate = (self.offset + delta_y).max(0.0);
        self.set_offset(candidate.min(self.max_offset()));
    }

    /// Begin a drag gesture. Ignored while the modal is open.
    pub fn on_touch_start(&mut self, x: f32, modal_open: bool) {
        if modal_open || !x.is_finite() {
            return;
        }
        self.drag = Some(DragSession {
            start_x: x,
            start_offset: self.offset,
        });
    }

    /// Follow the active drag. Ignored without a session or while the modal is open.
    pub fn on_touch_move(&mut self, x: f32, modal_open: bool) {
        if modal_open || !x.is_finite() {
            return;
        }
        let Some(session) = self.drag else {
            return;
        };
        let delta_x = session.start_x - x;
        let candidate = (session.start_offset + delta_x * self.config.drag_amplification).max(0.0);
        self.set_offset(candidate.min(self.max_offset()));
    }

    /// End the drag gesture (no-op without one)
    pub fn on_touch_end(&mut self) {
        self.drag = None;
    }

    /// Drop any active gesture, e.g. when an overlay takes over input
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            tracing::trace!("scroll drag cancelled");
        }
    }

    fn set_offset(&mut self, offset: f32) {
        if offset != self.offset {
            tracing::trace!(
                "scroll offset: {:.1} -> {:.1}, max={:.1}, viewport={:.0}",
                self.offset,
                offset,
                self.max_offset(),
                self.viewport.width
            );
        }
        self.offset = offset;
    }
}
