/*!
 * Allocator - Main Entry Point
 *
 * Process startup: argument validation, logging init, and the interactive
 * command loop over a single memory manager instance.
 */

use anyhow::Result;
use clap::Parser;
use contig_sim::core::limits::MAX_POOL_BYTES;
use contig_sim::memory::MemoryManager;
use contig_sim::shell;
use log::info;
use std::io;

/// Contiguous memory allocation simulator
#[derive(Parser, Debug)]
#[command(name = "allocator", version, about)]
struct Args {
    /// Total size of the simulated memory pool in bytes (up to 256 MB)
    #[arg(value_parser = clap::value_parser!(u64).range(..=MAX_POOL_BYTES as u64))]
    size: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("allocator starting with a {} byte pool", args.size);
    let mut manager = MemoryManager::with_capacity(args.size as usize);

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&mut manager, stdin.lock(), stdout.lock())?;

    info!("allocator shutting down");
    Ok(())
}
