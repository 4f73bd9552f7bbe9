//! Info command implementation
//!
//! Displays the resolution strategy, the binding's size and the parser settings.

use gloam_core::{config, Result};
use gloam_gl::{Gl, EXTENSIONS};
use gloam_source::NativeSource;

pub fn run() -> Result<()> {
    println!("gloam v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Resolution:");
    println!("  strategy          {}", gloam_source::strategy_name());
    println!("  entry points      {}", Gl::<NativeSource>::ENTRY_POINTS.len());
    println!();

    println!("Tracked extensions:");
    for label in EXTENSIONS.labels() {
        println!("  {label}");
    }
    println!();

    println!("Extension parsing:");
    println!("  token limit       {} bytes", config::token_limit());
    println!("  on overflow       {}", config::overflow_policy());

    Ok(())
}
