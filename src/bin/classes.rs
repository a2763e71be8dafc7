//! Pattern 2: Constructor overloading and chaining
//!
//! Run with: cargo run --bin classes

use std::io;

fn main() -> oop_intro::Result<()> {
    env_logger::init();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    oop_intro::classes::run(&mut out)
}
