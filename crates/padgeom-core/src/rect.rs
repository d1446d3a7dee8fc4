// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

/// Window geometry in logical pixels, global layout space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}
