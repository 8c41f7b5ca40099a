mod app;
mod billing;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();
    let config = if cli.quiet_mode() {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    if let Err(err) = app::run(&cli, &config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
