use std::io::{self, Write};

/// Shares `start`/`stop` with [`Media`](super::Media) but ships defaults
/// for them. `accelerate` and `brake` are required.
pub trait Engine {
    fn start(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "The engine starts.")
    }

    fn stop(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "The engine stops.")
    }

    fn accelerate(&self, out: &mut dyn Write) -> io::Result<()>;
    fn brake(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Takes the default `start`/`stop`.
pub struct BasicEngine;

impl Engine for BasicEngine {
    fn accelerate(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "The engine speeds up.")
    }

    fn brake(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "The engine slows down.")
    }
}
