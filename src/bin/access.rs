//! Pattern 4: Access modifiers
//!
//! Run with: cargo run --bin access

use std::io;

fn main() -> oop_intro::Result<()> {
    env_logger::init();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    oop_intro::access::run(&mut out)
}
