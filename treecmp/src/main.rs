// src/main.rs
use anyhow::Result;
use clap::Parser;

use treecmp::Args;
use treecmp::logging::init_tracing;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    treecmp::run(args)
}
