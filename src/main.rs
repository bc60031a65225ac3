// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use std::str::FromStr;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: opt(&mut args, "--config-dir"),
        dismiss_ms: opt(&mut args, "--dismiss-ms"),
        max_active: opt(&mut args, "--max-active"),
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        log::warn!("ignoring unexpected arguments: {leftover:?}");
    }

    app::run(flags)
}

/// Reads an optional flag value, logging and ignoring values that fail to parse.
fn opt<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("ignoring {key}: {err}");
            None
        }
    }
}
