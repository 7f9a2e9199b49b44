//! stderr logging for the `log` facade

use log::LevelFilter;

/// Level for the command line flags: debug with `--verbose`, warnings otherwise
pub fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the logger; `RUST_LOG` overrides the flag-derived level
pub fn init(verbose: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(level(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
