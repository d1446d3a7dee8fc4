// Author: Dustin Pilgrim
// License: MIT

//! Size and position units for scratchpad geometry.
//!
//! A dimension is either a bare integer (pixels), `"<n>%"` (percentage of the
//! scaled monitor dimension) or `"<n>px"` (pixels). Negative pixel values count
//! back from the far edge: `"-50px"` on a 1000px reference is 950.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Axis, MonitorInfo, PadgeomError, Result};

/// A dimension as the user wrote it: an integer or a string with a unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SizeSpec {
    Pixels(i32),
    Text(String),
}

impl From<i32> for SizeSpec {
    fn from(v: i32) -> Self {
        Self::Pixels(v)
    }
}

impl From<&str> for SizeSpec {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for SizeSpec {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A parsed dimension, before it's applied to a reference length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Pixels(i32),
    Percent(i32),
    PixelSuffix(i32),
}

impl Dimension {
    /// Detects the unit of a textual dimension. Bare numbers without a unit are
    /// rejected; integers should come in as [`SizeSpec::Pixels`].
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Some(num) = s.strip_suffix('%') {
            return parse_int(num).map(Self::Percent);
        }
        if let Some(num) = s.strip_suffix("px") {
            return parse_int(num).map(Self::PixelSuffix);
        }

        None
    }

    /// Applies the dimension to an already scaled reference length. `None` when
    /// a percentage lands outside the i32 pixel range.
    pub fn resolve(self, scaled_ref: f64) -> Option<i32> {
        match self {
            Self::Pixels(v) | Self::PixelSuffix(v) => {
                Some(convert_negative_dimension(v, scaled_ref))
            }
            Self::Percent(p) => {
                let px = (scaled_ref * f64::from(p) / 100.0).floor();
                (px >= f64::from(i32::MIN) && px <= f64::from(i32::MAX)).then_some(px as i32)
            }
        }
    }
}

impl FromStr for Dimension {
    type Err = PadgeomError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
            .ok_or_else(|| PadgeomError::invalid_format(s, "a size with a % or px unit"))
    }
}

fn parse_int(s: &str) -> Option<i32> {
    s.trim().parse::<i32>().ok()
}

/// Returns `size` unchanged when non-negative, otherwise `size` less than
/// `ref_value` (so `-50` against 1000.0 gives 950).
pub fn convert_negative_dimension(size: i32, ref_value: f64) -> i32 {
    if size < 0 {
        (ref_value + f64::from(size)).floor() as i32
    } else {
        size
    }
}

/// Converts `size` to pixels against `ref_value` (an unscaled monitor width or
/// height) on `monitor`.
pub fn convert_monitor_dimension(
    size: impl Into<SizeSpec>,
    ref_value: i32,
    monitor: &MonitorInfo,
) -> Result<i32> {
    let scaled_ref_value = f64::from(ref_value) / monitor.scale;

    match size.into() {
        SizeSpec::Pixels(v) => Ok(convert_negative_dimension(v, scaled_ref_value)),
        SizeSpec::Text(s) => Dimension::parse(&s)
            .and_then(|dim| dim.resolve(scaled_ref_value))
            .ok_or_else(|| PadgeomError::invalid_format(s, ref_value)),
    }
}

/// Axis order for an "X Y" pair. Rotated monitors measure X against the height.
pub fn coord_axes(monitor: &MonitorInfo) -> [Axis; 2] {
    if monitor.is_rotated() {
        [Axis::Height, Axis::Width]
    } else {
        [Axis::Width, Axis::Height]
    }
}

/// Converts an "X Y" string (e.g. `"10% 20%"`) to pixels relative to `monitor`.
pub fn convert_coords(coords: &str, monitor: &MonitorInfo) -> Result<[i32; 2]> {
    let tokens: Vec<&str> = coords.split_whitespace().collect();

    let &[first, second] = tokens.as_slice() else {
        return Err(PadgeomError::invalid_format(
            coords,
            format!("an \"X Y\" pair, got {} value(s)", tokens.len()),
        ));
    };

    let [ax, ay] = coord_axes(monitor);

    Ok([
        convert_monitor_dimension(first, monitor.reference(ax), monitor)?,
        convert_monitor_dimension(second, monitor.reference(ay), monitor)?,
    ])
}
