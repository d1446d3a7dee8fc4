// Author: Dustin Pilgrim
// License: MIT

//! `padgeom.rune` loading.
//!
//! ```text
//! padgeom.monitor.{name,width,height,scale,transform,x,y}
//! padgeom.scratchpads.<name>.{size,position}
//! ```
//!
//! Sizes and positions are strings ("50% 60%"); transform is a string too
//! ("90", "flipped-270" or the numeric code as text).

use std::path::Path;

use padgeom_core::{MonitorInfo, Placement, Transform};
use rune_cfg::RuneConfig;

#[derive(Default)]
pub struct PadgeomConfig {
    pub monitor: MonitorInfo,
    rc: Option<RuneConfig>,
}

impl PadgeomConfig {
    pub fn scratchpad(&self, name: &str) -> Result<Placement, String> {
        let Some(rc) = &self.rc else {
            return Err(format!("unknown scratchpad \"{name}\" (no config file)"));
        };

        let base = format!("padgeom.scratchpads.{name}");
        let size = get_string(rc, &format!("{base}.size"))?
            .ok_or_else(|| format!("unknown scratchpad \"{name}\" ({base}.size not set)"))?;
        let position = get_string(rc, &format!("{base}.position"))?;

        Ok(Placement { size, position })
    }
}

pub fn load(path: &Path) -> Result<PadgeomConfig, String> {
    if !path.exists() {
        return Ok(PadgeomConfig::default());
    }

    let rc = RuneConfig::from_file(path).map_err(|e| format!("failed to read config: {e}"))?;

    let monitor = parse_monitor(&rc)?;

    Ok(PadgeomConfig {
        monitor,
        rc: Some(rc),
    })
}

fn parse_monitor(rc: &RuneConfig) -> Result<MonitorInfo, String> {
    let mut m = MonitorInfo::default();

    if !rc.has("padgeom.monitor") {
        return Ok(m);
    }

    if let Some(name) = get_string(rc, "padgeom.monitor.name")? {
        m.name = Some(name);
    }

    if let Some(v) = get_number(rc, "padgeom.monitor.width")? {
        m.width = to_pixels(v).map_err(|e| format!("config error at padgeom.monitor.width: {e}"))?;
    }

    if let Some(v) = get_number(rc, "padgeom.monitor.height")? {
        m.height =
            to_pixels(v).map_err(|e| format!("config error at padgeom.monitor.height: {e}"))?;
    }

    if let Some(v) = get_number(rc, "padgeom.monitor.scale")? {
        m.scale = v;
    }

    if let Some(v) = get_number(rc, "padgeom.monitor.x")? {
        m.x = to_pixels(v).map_err(|e| format!("config error at padgeom.monitor.x: {e}"))?;
    }

    if let Some(v) = get_number(rc, "padgeom.monitor.y")? {
        m.y = to_pixels(v).map_err(|e| format!("config error at padgeom.monitor.y: {e}"))?;
    }

    if let Some(s) = get_string(rc, "padgeom.monitor.transform")? {
        m.transform = s
            .parse::<Transform>()
            .map_err(|e| format!("config error at padgeom.monitor.transform: {e}"))?;
    }

    validate_monitor(&m).map_err(|e| format!("config error at padgeom.monitor: {e}"))?;

    Ok(m)
}

fn get_string(rc: &RuneConfig, key: &str) -> Result<Option<String>, String> {
    rc.get_optional::<String>(key)
        .map_err(|e| format!("config error at {key}: {e}"))
}

fn get_number(rc: &RuneConfig, key: &str) -> Result<Option<f64>, String> {
    rc.get_optional::<f64>(key)
        .map_err(|e| format!("config error at {key}: {e}"))
}

fn to_pixels(v: f64) -> Result<i32, String> {
    if v.fract() != 0.0 || v < f64::from(i32::MIN) || v > f64::from(i32::MAX) {
        return Err(format!("expected a whole number of pixels, got {v}"));
    }
    Ok(v as i32)
}

/// Checks what the converter takes for granted about a monitor.
pub fn validate_monitor(m: &MonitorInfo) -> Result<(), String> {
    if m.width <= 0 || m.height <= 0 {
        return Err(format!("size must be positive, got {}x{}", m.width, m.height));
    }
    if !(m.scale.is_finite() && m.scale > 0.0) {
        return Err(format!("scale must be positive, got {}", m.scale));
    }
    Ok(())
}
