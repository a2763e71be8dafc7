//! Pattern 1: Interfaces and dynamic dispatch
//!
//! Run with: cargo run --bin interfaces

use std::io;

fn main() -> oop_intro::Result<()> {
    env_logger::init();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    oop_intro::interfaces::run(&mut out)
}
