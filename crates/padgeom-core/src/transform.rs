// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output transform as reported by the compositor (wl_output numbering).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    #[default]
    Normal,
    Rotate90,
    Rotate180,
    Rotate270,
    Flipped,
    Flipped90,
    Flipped180,
    Flipped270,
}

impl Transform {
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            0 => Self::Normal,
            1 => Self::Rotate90,
            2 => Self::Rotate180,
            3 => Self::Rotate270,
            4 => Self::Flipped,
            5 => Self::Flipped90,
            6 => Self::Flipped180,
            7 => Self::Flipped270,
            _ => return None,
        })
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    /// Quarter turns swap the logical width and height.
    pub fn is_rotated(self) -> bool {
        self.code() % 2 == 1
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::Rotate90 => "90",
            Self::Rotate180 => "180",
            Self::Rotate270 => "270",
            Self::Flipped => "flipped",
            Self::Flipped90 => "flipped-90",
            Self::Flipped180 => "flipped-180",
            Self::Flipped270 => "flipped-270",
        };
        f.write_str(s)
    }
}

impl FromStr for Transform {
    type Err = String;

    /// Accepts the numeric code ("0".."7") or a name ("normal", "90", "flipped-270", ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        let named = match s.as_str() {
            "normal" => Some(Self::Normal),
            "90" | "rotate90" | "rotate-90" => Some(Self::Rotate90),
            "180" | "rotate180" | "rotate-180" => Some(Self::Rotate180),
            "270" | "rotate270" | "rotate-270" => Some(Self::Rotate270),
            "flipped" => Some(Self::Flipped),
            "flipped-90" | "flipped90" => Some(Self::Flipped90),
            "flipped-180" | "flipped180" => Some(Self::Flipped180),
            "flipped-270" | "flipped270" => Some(Self::Flipped270),
            _ => None,
        };

        if let Some(t) = named {
            return Ok(t);
        }

        s.parse::<u32>()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| {
                format!("expected 0..7 or normal|90|180|270|flipped[-90|-180|-270], got \"{s}\"")
            })
    }
}
