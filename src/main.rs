// SPDX-License-Identifier: MPL-2.0
use posterly::app::{self, paths, Flags};
use posterly::domain::poster::{Platform, PosterLanguage};

const HELP: &str = "\
Posterly - compose marketing posters for your app

USAGE:
  posterly [OPTIONS]

OPTIONS:
  --lang <ar|id>          Poster language preselected in the form
  --platform <name>       instagram, facebook or tiktok
  --endpoint <url>        Poster generation endpoint
  --config-dir <dir>      Directory holding settings.toml
                          (default: $POSTERLY_CONFIG_DIR, then the platform config dir)
  -h, --help              Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("error: unexpected arguments: {remaining:?}\n\n{HELP}");
        std::process::exit(2);
    }

    configure_logging();
    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str::<_, PosterLanguage>("--lang")?,
        platform: args.opt_value_from_str::<_, Platform>("--platform")?,
        endpoint: args.opt_value_from_str("--endpoint")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Warnings only unless RUST_LOG says otherwise
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("posterly=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
