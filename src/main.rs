// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use std::process::ExitCode;

const HELP: &str = "\
Usage: iced_toast [OPTIONS]

Options:
  --config-dir <DIR>   Directory holding settings.toml
  --limit <N>          Maximum number of toasts shown at once (0 = unlimited)
  --position <POS>     top-left, top-center, top-right,
                       bottom-left, bottom-center or bottom-right
  -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        limit: args.opt_value_from_str("--limit")?,
        position: args.opt_value_from_str("--position")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
