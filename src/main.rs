// SPDX-License-Identifier: MPL-2.0
use coursedeck::app::{self, paths, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let data_dir: Option<String> = args.opt_value_from_str("--data-dir").unwrap_or(None);
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or(None);
    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or(None);

    // Make the overrides visible to every path lookup, not just the
    // stores constructed from the flags.
    paths::init_cli_overrides(data_dir.clone(), config_dir.clone());

    let flags = Flags {
        lang,
        config_dir: config_dir.map(PathBuf::from),
        data_dir: data_dir.map(PathBuf::from),
    };

    app::run(flags)
}
