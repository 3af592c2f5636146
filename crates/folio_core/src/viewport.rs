//! Viewport and device classification

use serde::{Deserialize, Serialize};

/// Viewport widths strictly below this are treated as compact devices
pub const DEFAULT_COMPACT_BREAKPOINT: f32 = 768.0;

/// Device class affecting item width and visible item count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Narrow viewport (phones)
    Compact,
    #[default]
    Standard,
}

/// Logical viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and positive
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Classify the viewport against a breakpoint
    pub fn device_class(&self, compact_breakpoint: f32) -> DeviceClass {
        if self.width < compact_breakpoint {
            DeviceClass::Compact
        } else {
            DeviceClass::Standard
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_class_breakpoint() {
        let bp = DEFAULT_COMPACT_BREAKPOINT;
        assert_eq!(Viewport::new(375.0, 812.0).device_class(bp), DeviceClass::Compact);
        assert_eq!(Viewport::new(767.0, 600.0).device_class(bp), DeviceClass::Compact);
        assert_eq!(Viewport::new(768.0, 600.0).device_class(bp), DeviceClass::Standard);
        assert_eq!(Viewport::default().device_class(bp), DeviceClass::Standard);
    }
}
