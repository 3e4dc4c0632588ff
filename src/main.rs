//! Sketch UI Description Compiler Binary

use sketchc::{EnhancedCli, SketchError};
use std::process;

fn main() {
    let mut cli = EnhancedCli::new();

    match cli.run() {
        Ok(()) => {}
        Err(SketchError::EmptyDescription) => process::exit(1),
        Err(SketchError::Io(e)) => {
            eprintln!("IO Error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            process::exit(1);
        }
    }
}
