//! Pattern 6: Overriding
//!
//! Run with: cargo run --bin polymorphism

use std::io;

fn main() -> oop_intro::Result<()> {
    env_logger::init();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    oop_intro::polymorphism::run(&mut out)
}
