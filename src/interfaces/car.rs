use std::io::{self, Write};

use super::{Engine, Media};

const START: &str = "I start the Car.";
const STOP: &str = "I stop the Car.";

/// Implements both capabilities. Because the names collide, callers
/// pick one with `Media::start(&car, out)` or `Engine::start(&car, out)`;
/// either way Car's own line is printed.
pub struct Car;

impl Media for Car {
    fn start(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{START}")
    }

    fn stop(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{STOP}")
    }
}

impl Engine for Car {
    fn start(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{START}")
    }

    fn stop(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{STOP}")
    }

    fn accelerate(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I accelerate in Car")
    }

    fn brake(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I brake the car.")
    }
}
