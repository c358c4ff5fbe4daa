use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use classblog::cli::{self, Cli};
use classblog::ui::output;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects debug and the
/// default is warn.
fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
