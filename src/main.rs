// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
iced_folio - portfolio page viewer

USAGE:
  iced_folio [OPTIONS] [PAGE]

ARGS:
  PAGE                  TOML page document (defaults to the built-in demo page)

OPTIONS:
  --lang <LOCALE>       Interface language, e.g. en-US or fr
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn init_logger() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", "warn,iced_folio=debug"),
    )
    .try_init();
}

fn main() -> iced::Result {
    init_logger();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            log::warn!("ignoring --config-dir: {err}");
            None
        });
    paths::init_cli_overrides(config_dir);

    let page_path = args.finish().into_iter().next().map(PathBuf::from);

    app::run(Flags { lang, page_path })
}
