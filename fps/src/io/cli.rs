use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Photo to cut the tiles from
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Results are written to <FOLDER>/<input file stem>/
    #[arg(short, long, value_name = "FOLDER", default_value = "output")]
    pub output_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Compute new positions even if a positions.json is already present
    #[arg(short, long)]
    pub regenerate: bool,
}
