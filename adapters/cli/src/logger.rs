//! Stderr logging for the command-line adapter.

use anyhow::{anyhow, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Installs a stderr logger with the provided maximum level.
///
/// Records go to stderr so they never mix with the grid printed on stdout.
pub(crate) fn init(filter: LevelFilter) -> Result<()> {
    Builder::new()
        .filter_level(filter)
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .map_err(|error| anyhow!("failed to install logger: {error}"))
}

/// Maps `-v` repetitions to a level; `--quiet` silences everything.
pub(crate) fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_filter(0, false), LevelFilter::Warn);
        assert_eq!(level_filter(1, false), LevelFilter::Info);
        assert_eq!(level_filter(2, false), LevelFilter::Debug);
        assert_eq!(level_filter(7, false), LevelFilter::Trace);
    }

    #[test]
    fn quiet_overrides_verbosity() {
        assert_eq!(level_filter(3, true), LevelFilter::Off);
    }
}
