//! Pattern 3: Wrapper types
//!
//! Run with: cargo run --bin wrappers

use std::io;

fn main() -> oop_intro::Result<()> {
    env_logger::init();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    oop_intro::wrappers::run(&mut out)
}
