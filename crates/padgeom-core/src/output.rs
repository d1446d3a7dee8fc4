// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::{Axis, Transform};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitorInfo {
    /// Compositor-provided name when available (e.g. "DP-1").
    pub name: Option<String>,

    /// Logical position in the global desktop space.
    pub x: i32,
    pub y: i32,

    /// Mode size in pixels, before scaling.
    pub width: i32,
    pub height: i32,

    /// Scale factor (e.g. 1.0, 1.5, 2.0). Must be positive.
    pub scale: f64,

    #[serde(default)]
    pub transform: Transform,
}

impl Default for MonitorInfo {
    fn default() -> Self {
        Self {
            name: None,
            x: 0,
            y: 0,
            width: 1920,
            height: 1080,
            scale: 1.0,
            transform: Transform::Normal,
        }
    }
}

impl MonitorInfo {
    /// Unscaled reference length for an axis.
    pub fn reference(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Reference length divided by the scale factor.
    pub fn scaled(&self, axis: Axis) -> f64 {
        f64::from(self.reference(axis)) / self.scale
    }

    pub fn is_rotated(&self) -> bool {
        self.transform.is_rotated()
    }
}

pub fn is_rotated(monitor: &MonitorInfo) -> bool {
    monitor.is_rotated()
}
