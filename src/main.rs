//! Pagegrid - a paginated spreadsheet widget in the terminal

mod error;
mod logging;
mod tui;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pagegrid", version, about = "Paginated spreadsheet with validated cells and undo/redo")]
struct Args {
    /// Keybindings to use: vim, emacs, or a name from keymaps.toml
    #[arg(long, value_name = "NAME")]
    keymap: Option<String>,

    /// Load keybindings and layout from this TOML file instead of the config dir
    #[arg(long, value_name = "PATH")]
    keymap_file: Option<PathBuf>,

    /// Append log records to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Most verbose level written to --log-file
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: LevelFilter,

    /// Print the resolved keybindings and config warnings, then exit
    #[arg(long)]
    print_keymap: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(args.log_file.as_deref(), args.log_level)
        .context("failed to set up logging")?;

    let config = tui::load_config(args.keymap.as_deref(), args.keymap_file.as_deref());
    for warning in &config.warnings {
        eprintln!("Warning: {}", warning);
    }

    if args.print_keymap {
        println!("keymap: {}", config.keymap.name());
        println!(
            "layout: medium={} large={}",
            config.breakpoints.medium, config.breakpoints.large
        );
        if let Some(path) = args.keymap_file.clone().or_else(tui::user_config_path) {
            println!("config: {}", path.display());
        }
        println!();
        for line in tui::get_help_text(&config.keymap) {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut app = tui::App::new(config.keymap, config.breakpoints);
    tui::run(&mut app).context("terminal error")?;
    Ok(())
}
