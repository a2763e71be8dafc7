//! Pattern 6: Overriding
//!
//! A default trait method plays the base-class method; an `impl` that
//! redefines it is the override.

use std::io::Write;

use crate::Result;

pub trait Shape {
    fn area(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "I am in Shapes.")?;
        Ok(())
    }
}

pub struct Shapes;

impl Shape for Shapes {}

pub struct Rectangle;

impl Shape for Rectangle {
    fn area(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "I am in Rectangle.")?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    Shapes.area(out)?;
    Rectangle.area(out)?;

    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Shapes), Box::new(Rectangle)];
    for shape in &shapes {
        shape.area(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_through_trait_object() {
        let shape: Box<dyn Shape> = Box::new(Rectangle);
        let mut out = Vec::new();
        shape.area(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "I am in Rectangle.\n");
    }

    #[test]
    fn test_base_uses_default() {
        let mut out = Vec::new();
        Shapes.area(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "I am in Shapes.\n");
    }
}
