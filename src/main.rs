//! # scene-tagger CLI
//!
//! Command-line front end for the scene tagger.
//!
//! ## Usage
//! ```bash
//! scene-tagger scenes --input matches.json --duration 1812
//! scene-tagger performer --input performer.json --exclude gender
//! ```

mod cli;

use scene_tagger::Result;

fn main() -> Result<()> {
    cli::run()
}
