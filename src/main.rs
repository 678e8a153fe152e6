//! Beatmap Migrate - Main Entry Point
//!
//! Collects map directories from the command line and converts them
//! concurrently. The conversion itself lives in the `beatmap_migrate` library.

use anyhow::Result;
use beatmap_migrate::{ConvertFlags, INFO_JSON, Status, convert_all, tally};
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use std::thread;
use walkdir::WalkDir;

/// Convert legacy info.json beatmaps to the info.dat layout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map directories or paths to info.json files
    paths: Vec<PathBuf>,

    /// Keep info.json and the legacy difficulty files after converting
    #[arg(long)]
    keep_files: bool,

    /// Convert and hash without writing or deleting anything
    #[arg(long)]
    dry_run: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// TOML file providing default flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search each path for directories containing info.json
    #[arg(short, long)]
    recursive: bool,

    /// Maximum number of directories converted at once
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// Expand the given paths into map directories to convert
fn collect_dirs(paths: &[PathBuf], recursive: bool) -> Vec<PathBuf> {
    if !recursive {
        return paths.to_vec();
    }

    let mut dirs = Vec::new();
    for root in paths {
        for entry in WalkDir::new(root).follow_links(true).into_iter().flatten() {
            if entry.file_type().is_file() && entry.file_name() == INFO_JSON {
                dirs.push(entry.path().parent().unwrap_or(Path::new(".")).to_path_buf());
            }
        }
    }
    dirs.sort();
    dirs.dedup();
    dirs
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if args.paths.is_empty() {
        // Nothing to convert, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let cli_flags = ConvertFlags {
        keep_files: args.keep_files,
        dry_run: args.dry_run,
        quiet: args.quiet,
    };
    let flags = match &args.config {
        Some(path) => ConvertFlags::load(path)?.merge(cli_flags),
        None => cli_flags,
    };

    let default_level = if flags.quiet { "error" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let jobs = args.jobs.unwrap_or_else(|| {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    });

    let dirs = collect_dirs(&args.paths, args.recursive);
    let results = convert_all(dirs, flags, jobs).await;

    for result in &results {
        if result.status() == Status::Converted {
            println!(
                "{}\t{}\t{}",
                result.dir.display(),
                result.old_hash,
                result.new_hash
            );
        }
    }

    let (converted, skipped, failed) = tally(&results);
    if !flags.quiet {
        eprintln!(
            "{} converted, {} skipped, {} failed",
            converted, skipped, failed
        );
    }
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
