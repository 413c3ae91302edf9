mod collectors;
mod config;
mod models;
mod ui;
mod util;

use anyhow::Result;
use clap::Parser;
use ui::table::DisplayMode;

#[derive(Parser, Debug)]
#[command(
    name = "df",
    about = "Colorized disk-free report for mounted volumes",
    version = "0.1",
    disable_help_flag = true
)]
struct Cli {
    /// Show sizes as raw kilobyte integers
    #[arg(short = 'x', long)]
    exact: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print help
    #[arg(short = 'h', short_alias = '?', long = "help", action = clap::ArgAction::Help)]
    help: Option<bool>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::Config::load();
    let mode = DisplayMode { exact: cli.exact };
    let paint = ui::paint::for_stdout(cli.no_color);

    // Enumerate everything before writing a single byte of output
    let volumes = collectors::mounts::read_volumes()?;
    print!("{}", ui::table::render(&volumes, mode, &cfg.display.bands, paint.as_ref()));
    Ok(())
}
