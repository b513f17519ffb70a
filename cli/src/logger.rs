use env_logger::{Builder, Env};

/// Route `log` records to stderr. `-v` enables debug output, `-vv` trace;
/// `RUST_LOG` still overrides both.
pub fn setup(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    Builder::from_env(Env::default().default_filter_or(default)).init();
}
