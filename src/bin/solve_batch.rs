use std::path::PathBuf;

use foobar_puzzles::logging;
use foobar_puzzles::query::{run_batch, Batch, BatchError};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: solve_batch <queries.json>");
        std::process::exit(2);
    }

    let path = PathBuf::from(&args[1]);
    let batch = match Batch::load(&path) {
        Ok(b) => b,
        Err(BatchError::Io(e)) => {
            eprintln!("Failed to read {}: {e}", path.display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Invalid batch in {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    let report = run_batch(&batch);
    match serde_json::to_string_pretty(&report) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("Failed to encode report: {e}");
            std::process::exit(1);
        }
    }
}
