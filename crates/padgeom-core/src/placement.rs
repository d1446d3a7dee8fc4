// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::units::{coord_axes, convert_coords};
use crate::{MonitorInfo, PadgeomError, Rect, Result};

/// Where a scratchpad goes, as written in the config: both fields are "X Y"
/// pairs in any unit the converter understands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement {
    pub size: String,

    /// Offset from the monitor origin. Centred when unset.
    #[serde(default)]
    pub position: Option<String>,
}

/// Resolves a placement to a rectangle in global layout coordinates.
pub fn place(placement: &Placement, monitor: &MonitorInfo) -> Result<Rect> {
    let [w, h] = convert_coords(&placement.size, monitor)?;

    let [x, y] = match &placement.position {
        Some(pos) => convert_coords(pos, monitor)?,
        None => {
            let [ax, ay] = coord_axes(monitor);
            [
                centre(monitor.scaled(ax), w),
                centre(monitor.scaled(ay), h),
            ]
        }
    };

    let offset = |origin: i32, v: i32| {
        origin.checked_add(v).ok_or_else(|| {
            let value = placement.position.as_deref().unwrap_or(&placement.size);
            PadgeomError::invalid_format(value, "monitor origin")
        })
    };

    Ok(Rect {
        x: offset(monitor.x, x)?,
        y: offset(monitor.y, y)?,
        w,
        h,
    })
}

fn centre(available: f64, len: i32) -> i32 {
    ((available - f64::from(len)) / 2.0).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PadgeomError, Transform};

    fn monitor() -> MonitorInfo {
        MonitorInfo {
            name: Some("DP-1".into()),
            width: 800,
            height: 600,
            ..MonitorInfo::default()
        }
    }

    fn placement(size: &str, position: Option<&str>) -> Placement {
        Placement {
            size: size.into(),
            position: position.map(Into::into),
        }
    }

    #[test]
    fn centred_without_position() {
        let r = place(&placement("50% 50%", None), &monitor()).unwrap();
        assert_eq!(
            r,
            Rect {
                x: 200,
                y: 150,
                w: 400,
                h: 300
            }
        );
    }

    #[test]
    fn explicit_position_is_offset_by_monitor_origin() {
        let m = MonitorInfo {
            x: 1920,
            y: 0,
            ..monitor()
        };
        let r = place(&placement("400px 300px", Some("10% -310px")), &m).unwrap();
        assert_eq!(
            r,
            Rect {
                x: 1920 + 80,
                y: 290,
                w: 400,
                h: 300
            }
        );
    }

    #[test]
    fn scale_shrinks_the_logical_area() {
        let m = MonitorInfo {
            scale: 2.0,
            ..monitor()
        };
        let r = place(&placement("50% 50%", None), &m).unwrap();
        assert_eq!(
            r,
            Rect {
                x: 100,
                y: 75,
                w: 200,
                h: 150
            }
        );
    }

    #[test]
    fn rotated_monitor_centres_on_swapped_axes() {
        let m = MonitorInfo {
            transform: Transform::Rotate270,
            ..monitor()
        };
        let r = place(&placement("100% 100%", None), &m).unwrap();
        assert_eq!(
            r,
            Rect {
                x: 0,
                y: 0,
                w: 600,
                h: 800
            }
        );
    }

    #[test]
    fn oversized_windows_go_negative() {
        let r = place(&placement("1000px 600px", None), &monitor()).unwrap();
        assert_eq!(r.x, -100);
        assert_eq!(r.y, 0);
    }

    #[test]
    fn position_past_i32_range_is_rejected() {
        let m = MonitorInfo {
            x: 1920,
            ..monitor()
        };
        let err = place(&placement("100px 100px", Some("2147483000px 0px")), &m).unwrap_err();
        assert_eq!(err, PadgeomError::invalid_format("2147483000px 0px", "monitor origin"));
    }

    #[test]
    fn bad_values_propagate() {
        let err = place(&placement("50%", None), &monitor()).unwrap_err();
        assert!(matches!(err, PadgeomError::InvalidFormat { .. }));

        let err = place(&placement("50% 50%", Some("left top")), &monitor()).unwrap_err();
        assert_eq!(err, PadgeomError::invalid_format("left", 800));
    }
}
