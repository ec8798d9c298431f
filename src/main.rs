mod cli;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use delve_blocks::BlockType;
use delve_runtime::{Mine, MineConfig, SaveOutcome, load_config_from_path};

use crate::cli::{Cli, Command};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn resolve_config(cli: &Cli) -> Result<MineConfig, Box<dyn Error>> {
    let mut cfg = if cli.config.exists() {
        load_config_from_path(&cli.config)?
    } else {
        log::info!("{} not found, using defaults", cli.config.display());
        MineConfig::default()
    };
    if let Some(dir) = &cli.save_dir {
        cfg.save_dir = dir.clone();
    }
    if let Some(w) = cli.workers {
        cfg.workers = w;
    }
    Ok(cfg)
}

fn report_save(mine: &Mine, outcome: &SaveOutcome) {
    let root = mine.store().root().display();
    if outcome.storage_unavailable {
        println!(
            "save skipped: {} unavailable ({} chunk(s) pending)",
            root,
            outcome.failed.len()
        );
    } else {
        println!(
            "saved {} chunk(s) to {}, {} failed",
            outcome.saved.len(),
            root,
            outcome.failed.len()
        );
    }
}

fn print_stats(mine: &Mine) {
    let s = mine.stats();
    println!("grid      {}x{}x{}", s.dims.0, s.dims.1, s.dims.2);
    println!("chunks    {}", s.chunks);
    println!("solid     {}", s.solid);
    for ty in BlockType::ALL {
        println!("  {:<7} {}", ty.name(), s.histogram[ty.index()]);
    }
    println!(
        "edits     {} (dirty {}, unsaved {})",
        s.edits.edits, s.edits.dirty, s.edits.unsaved
    );
    println!(
        "mesh      {} quads, {} triangles, {} vertices",
        s.mesh.quads, s.mesh.triangles, s.mesh.vertices
    );
    println!("waves     {}", s.waves);
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let cfg = resolve_config(&cli)?;
    let executor = cfg.executor()?;
    let mut mine = Mine::create(&cfg, executor);
    let loaded = mine.load();
    if !loaded.skipped.is_empty() {
        log::warn!("{} stored unit(s) skipped", loaded.skipped.len());
    }

    match cli.command {
        Command::Stats => print_stats(&mine),
        Command::Inspect { x, y, z } => match mine.layout().locate(x, y, z) {
            Some((chunk, local)) => {
                let cell = match mine.block_at(x, y, z) {
                    Some(ty) => ty.name(),
                    None => "empty",
                };
                let quads = mine.chunk_mesh(chunk).map_or(0, |m| m.stats().quads);
                println!(
                    "({x}, {y}, {z}): {cell} [chunk ({}, {}, {}) local {:?}, {quads} quads]",
                    chunk.cx, chunk.cy, chunk.cz, local
                );
            }
            None => println!("({x}, {y}, {z}): outside the mine"),
        },
        Command::Place { x, y, z, block } => {
            if mine.place(x, y, z, block) {
                let wave = mine.rebuild();
                log::debug!("remeshed {} chunk(s)", wave.chunks);
                let outcome = mine.save();
                report_save(&mine, &outcome);
            } else {
                println!("({x}, {y}, {z}) is outside the mine");
            }
        }
        Command::Remove { x, y, z } => {
            if mine.remove(x, y, z) {
                let wave = mine.rebuild();
                log::debug!("remeshed {} chunk(s)", wave.chunks);
                let outcome = mine.save();
                report_save(&mine, &outcome);
            } else {
                println!("({x}, {y}, {z}) is outside the mine");
            }
        }
        Command::Snapshot => {
            let outcome = mine.save_all();
            report_save(&mine, &outcome);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
