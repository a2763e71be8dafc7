//! Pattern 1: Interfaces
//!
//! `Media` and `Engine` both declare `start`/`stop`. `Car` implements
//! both; `NiceCar` sidesteps the clash by owning a `Media` instead.

use std::io::Write;

use crate::Result;

mod car;
mod engine;
mod media;
mod nice_car;

pub use car::Car;
pub use engine::{BasicEngine, Engine};
pub use media::{CdPlayer, Media};
pub use nice_car::NiceCar;

pub fn run(out: &mut dyn Write) -> Result<()> {
    let car = Car;
    car.accelerate(out)?;
    car.brake(out)?;
    Media::start(&car, out)?;
    Media::stop(&car, out)?;

    // Dispatch goes through the vtable to Car's bodies
    let med: &dyn Media = &Car;
    med.stop(out)?;
    med.start(out)?;

    writeln!(out, "HEllo")?;

    let nice = NiceCar::new();
    nice.start_music(out)?;
    nice.stop_music(out)?;
    Ok(())
}
