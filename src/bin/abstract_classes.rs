//! Pattern 5: Abstract base types
//!
//! Run with: cargo run --bin abstract_classes

use std::io;

fn main() -> oop_intro::Result<()> {
    env_logger::init();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    oop_intro::abstract_classes::run(&mut out)
}
