pub mod area;
pub mod covered;
pub mod init;
pub mod max_point;
pub mod overlaps;
pub mod regions;
pub mod stats;

use serde::Serialize;

use tessera_core::{RectangleAnalyzer, log_error, log_info, log_warn};

use crate::QueryArgs;

/// Loads the rectangle set named on the command line, or exits.
pub fn load(args: &QueryArgs) -> RectangleAnalyzer {
    match tessera_core::input::load_analyzer(&args.file) {
        Ok(analyzer) => {
            if analyzer.is_empty() {
                log_warn!("{} holds no rectangles", args.file.display());
            }
            log_info!(
                "loaded {} rectangles from {}",
                analyzer.len(),
                args.file.display()
            );
            analyzer
        }
        Err(e) => fail(e),
    }
}

/// Prints a value as pretty JSON, or exits.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(e),
    }
}

/// Reports an error on stderr and exits with status 1.
pub fn fail(e: impl std::fmt::Display) -> ! {
    log_error!("{e}");
    eprintln!("Error: {e}");
    std::process::exit(1);
}
