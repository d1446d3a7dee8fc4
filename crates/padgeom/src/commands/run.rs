// Author: Dustin Pilgrim
// License: MIT

use padgeom_core::{MonitorInfo, Placement, convert_coords, convert_monitor_dimension, place};

use eventline::{debug, info, warn};

use crate::cli::{self, Args, Cmd, MonitorArgs};
use crate::config::{self, PadgeomConfig};
use crate::paths;

use super::print;

pub fn run(args: Args) -> Result<(), String> {
    info!("starting padgeom");
    debug!("parsed args: {:?}", args.cmd);

    let config_path = args.config.unwrap_or_else(paths::default_config_path);
    debug!("config: {}", config_path.display());

    let cfg = config::load(&config_path).map_err(|e| {
        warn!("{e}");
        e
    })?;

    match args.cmd {
        Cmd::Dim {
            size,
            axis,
            monitor,
        } => {
            let m = monitor_for(&cfg, &monitor)?;
            let reference = m.reference(axis);
            debug!("dim {size:?} against {axis:?}={reference} (scale {})", m.scale);

            let px = convert_monitor_dimension(cli::size_spec(&size), reference, &m)
                .map_err(|e| format!("{e}"))?;
            println!("{px}");
        }

        Cmd::Coords { coords, monitor } => {
            let m = monitor_for(&cfg, &monitor)?;
            debug!("coords {coords:?} (rotated={})", m.is_rotated());

            let pair = convert_coords(&coords, &m).map_err(|e| format!("{e}"))?;
            print::print_pair(pair);
        }

        Cmd::Place {
            name,
            size,
            position,
            monitor,
        } => {
            let m = monitor_for(&cfg, &monitor)?;

            let placement = match (name, size) {
                (Some(name), _) => {
                    debug!("placing scratchpad {name}");
                    cfg.scratchpad(&name)?
                }
                (None, Some(size)) => Placement { size, position },
                // clap requires one of the two
                (None, None) => return Err("place needs a scratchpad name or --size".into()),
            };
            debug!("placement: {placement:?}");

            let rect = place(&placement, &m).map_err(|e| format!("{e}"))?;
            print::print_rect(rect);
        }

        Cmd::Monitor { monitor } => {
            let m = monitor_for(&cfg, &monitor)?;
            print::print_monitor(&m);
        }
    }

    info!("padgeom done");
    Ok(())
}

fn monitor_for(cfg: &PadgeomConfig, overrides: &MonitorArgs) -> Result<MonitorInfo, String> {
    let m = overrides.apply(cfg.monitor.clone())?;
    debug!("monitor: {m:?}");
    Ok(m)
}
