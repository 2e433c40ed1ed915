// SPDX-License-Identifier: MPL-2.0
use toast_stack::app::{self, Flags};
use toast_stack::logging;

const HELP: &str = "\
toast_stack demo

USAGE:
  toast_stack [OPTIONS]

OPTIONS:
  -h, --help               Print this help
      --lang <LOCALE>      UI language (e.g. en-US, fr)
      --config-dir <DIR>   Directory holding settings.toml
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    if let Err(err) = logging::init() {
        eprintln!("logging disabled: {err}");
    }

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        config_dir: opt_string(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    app::run(flags)
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(key, %err, "invalid argument value");
        None
    })
}
