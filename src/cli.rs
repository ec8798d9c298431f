use std::path::PathBuf;

use clap::{Parser, Subcommand};
use delve_blocks::BlockType;

#[derive(Parser, Debug)]
#[command(name = "delve", about = "Populate, edit, mesh and persist a voxel mine")]
pub struct Cli {
    /// Mine config file; built-in defaults apply when it does not exist
    #[arg(long, default_value = "delve.toml")]
    pub config: PathBuf,
    /// Override the save directory from the config
    #[arg(long)]
    pub save_dir: Option<PathBuf>,
    /// Mesh worker threads (0 = mesh on the main thread)
    #[arg(long)]
    pub workers: Option<usize>,
    /// Debug logging (RUST_LOG still wins)
    #[arg(short, long)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Grid, chunk, edit and mesh statistics
    Stats,
    /// Print the block at a cell
    Inspect {
        #[arg(allow_hyphen_values = true)]
        x: i32,
        #[arg(allow_hyphen_values = true)]
        y: i32,
        #[arg(allow_hyphen_values = true)]
        z: i32,
    },
    /// Place a block (dirt, stone, iron, gold) and save
    Place {
        #[arg(allow_hyphen_values = true)]
        x: i32,
        #[arg(allow_hyphen_values = true)]
        y: i32,
        #[arg(allow_hyphen_values = true)]
        z: i32,
        block: BlockType,
    },
    /// Dig out a cell and save
    Remove {
        #[arg(allow_hyphen_values = true)]
        x: i32,
        #[arg(allow_hyphen_values = true)]
        y: i32,
        #[arg(allow_hyphen_values = true)]
        z: i32,
    },
    /// Write every chunk to the save directory
    Snapshot,
}
