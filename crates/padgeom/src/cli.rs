// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use padgeom_core::{Axis, MonitorInfo, SizeSpec, Transform};

use crate::config::validate_monitor;

#[derive(Debug, Parser)]
#[command(
    name = "padgeom",
    version,
    about = "Padgeom: scratchpad sizes and positions in monitor pixels."
)]
pub struct Args {
    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/padgeom/padgeom.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Override config path (default: $XDG_CONFIG_HOME/padgeom/padgeom.rune)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Convert a single dimension (e.g. 50, -50px, 25%)
    Dim {
        #[arg(allow_hyphen_values = true)]
        size: String,
        /// Monitor dimension to measure against
        #[arg(long, value_enum, default_value = "width")]
        axis: Axis,
        #[command(flatten)]
        monitor: MonitorArgs,
    },

    /// Convert an "X Y" pair (e.g. "10% 20%")
    Coords {
        #[arg(allow_hyphen_values = true)]
        coords: String,
        #[command(flatten)]
        monitor: MonitorArgs,
    },

    /// Resolve a scratchpad's geometry, from config or ad hoc
    Place {
        /// Scratchpad name in the config file
        #[arg(required_unless_present = "size", conflicts_with = "size")]
        name: Option<String>,
        /// "W H" size, instead of a configured scratchpad
        #[arg(long, allow_hyphen_values = true)]
        size: Option<String>,
        /// "X Y" offset from the monitor origin (centred when omitted)
        #[arg(long, allow_hyphen_values = true, requires = "size")]
        position: Option<String>,
        #[command(flatten)]
        monitor: MonitorArgs,
    },

    /// Show the monitor the other commands would use
    Monitor {
        #[command(flatten)]
        monitor: MonitorArgs,
    },
}

/// Per-field overrides on top of the configured monitor.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct MonitorArgs {
    /// Monitor name (informational)
    #[arg(long)]
    pub monitor_name: Option<String>,
    /// Monitor width in pixels
    #[arg(long)]
    pub width: Option<i32>,
    /// Monitor height in pixels
    #[arg(long)]
    pub height: Option<i32>,
    /// Scale factor
    #[arg(long)]
    pub scale: Option<f64>,
    /// Output transform (0..7, normal, 90, flipped-270, ...)
    #[arg(long)]
    pub transform: Option<Transform>,
    /// Monitor origin in the global layout
    #[arg(long, allow_hyphen_values = true)]
    pub origin_x: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    pub origin_y: Option<i32>,
}

impl MonitorArgs {
    pub fn apply(&self, mut m: MonitorInfo) -> Result<MonitorInfo, String> {
        if let Some(name) = &self.monitor_name {
            m.name = Some(name.clone());
        }
        if let Some(w) = self.width {
            m.width = w;
        }
        if let Some(h) = self.height {
            m.height = h;
        }
        if let Some(s) = self.scale {
            m.scale = s;
        }
        if let Some(t) = self.transform {
            m.transform = t;
        }
        if let Some(x) = self.origin_x {
            m.x = x;
        }
        if let Some(y) = self.origin_y {
            m.y = y;
        }

        validate_monitor(&m).map_err(|e| format!("invalid monitor: {e}"))?;
        Ok(m)
    }
}

/// Bare integers are pixels; anything else goes through unit parsing.
pub fn size_spec(raw: &str) -> SizeSpec {
    match raw.trim().parse::<i32>() {
        Ok(v) => SizeSpec::Pixels(v),
        Err(_) => SizeSpec::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_fields() {
        let args = MonitorArgs {
            height: Some(1440),
            transform: Some(Transform::Rotate90),
            ..MonitorArgs::default()
        };
        let m = args.apply(MonitorInfo::default()).unwrap();
        assert_eq!(m.width, 1920);
        assert_eq!(m.height, 1440);
        assert_eq!(m.scale, 1.0);
        assert!(m.is_rotated());
    }

    #[test]
    fn overrides_are_validated() {
        let args = MonitorArgs {
            scale: Some(-1.0),
            ..MonitorArgs::default()
        };
        assert!(args.apply(MonitorInfo::default()).is_err());
    }

    #[test]
    fn integers_become_pixels() {
        assert_eq!(size_spec("-50"), SizeSpec::Pixels(-50));
        assert_eq!(size_spec("25%"), SizeSpec::Text("25%".into()));
    }

    #[test]
    fn parses_negative_positional_values() {
        let args = Args::try_parse_from(["padgeom", "dim", "-50px", "--axis", "height"]).unwrap();
        match args.cmd {
            Cmd::Dim { size, axis, .. } => {
                assert_eq!(size, "-50px");
                assert_eq!(axis, Axis::Height);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn place_needs_a_name_or_a_size() {
        assert!(Args::try_parse_from(["padgeom", "place"]).is_err());
        assert!(Args::try_parse_from(["padgeom", "place", "term"]).is_ok());
        assert!(Args::try_parse_from(["padgeom", "place", "--size", "50% 50%"]).is_ok());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
