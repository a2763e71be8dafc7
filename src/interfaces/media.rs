use std::io::{self, Write};

/// A playable device. Implementors must provide both operations.
pub trait Media {
    fn start(&self, out: &mut dyn Write) -> io::Result<()>;
    fn stop(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct CdPlayer;

impl Media for CdPlayer {
    fn start(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Music startsssss")
    }

    fn stop(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Music stopsssss")
    }
}
