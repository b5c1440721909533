// SPDX-License-Identifier: MPL-2.0
use toast_feed::app::{self, Flags};
use toast_feed::config::paths;
use tracing::Level;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

const HELP: &str = "\
toast_feed - activity feed with toast notifications

USAGE:
  toast_feed [OPTIONS]

OPTIONS:
  --config-dir <DIR>  Read settings.toml from DIR
  --offline           Use local names, never query the remote endpoint
  -v, --verbose       Enable debug logging
  -h, --help          Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let offline = args.contains("--offline");
    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_logging(verbose);

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_override(config_dir);

    app::run(Flags {
        offline,
        config_dir: None,
    })
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("toast_feed=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::INFO.into()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(verbose))
        .init();
}
