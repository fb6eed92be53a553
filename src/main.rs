// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};

const HELP: &str = "\
IcedFolio - bilingual portfolio page

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <TAG>         Display language (pt, pt-BR, en, en-US)
  --config-dir <DIR>   Directory containing settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  ICED_FOLIO_CONFIG_DIR  Config directory (overridden by --config-dir)
  RUST_LOG               Log filter (default: info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    iced_folio::logging::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
