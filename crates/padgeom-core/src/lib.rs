// Author: Dustin Pilgrim
// License: MIT

pub mod axis;
pub mod error;
pub mod output;
pub mod placement;
pub mod rect;
pub mod transform;
pub mod units;

pub use axis::Axis;
pub use error::{PadgeomError, Result};
pub use output::{MonitorInfo, is_rotated};
pub use placement::{Placement, place};
pub use rect::Rect;
pub use transform::Transform;
pub use units::{
    Dimension, SizeSpec, coord_axes, convert_coords, convert_monitor_dimension,
    convert_negative_dimension,
};
