// SPDX-License-Identifier: MPL-2.0
use jazz_zine::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_path: args.opt_value_from_str("--config").unwrap_or(None),
        stream_url: args.opt_value_from_str("--stream-url").unwrap_or(None),
    };

    app::run(flags)
}
