//! Pattern 2: Constructors
//!
//! Rust has no overloading, so each "constructor" is a named function.
//! `Default` and `from_other` both route through `new`.

use std::io::Write;

use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub roll: u32,
    pub name: String,
    pub marks: f32,
}

impl Student {
    pub fn new(roll: u32, name: impl Into<String>, marks: f32) -> Self {
        Self {
            roll,
            name: name.into(),
            marks,
        }
    }

    /// Copy constructor.
    pub fn from_other(other: &Student) -> Self {
        Self::new(other.roll, other.name.clone(), other.marks)
    }
}

impl Default for Student {
    fn default() -> Self {
        Self::new(10, "Sumit", 979.0)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let ob = Student::default();
    let ob1 = Student::new(100, "sumit", 97.0);
    let ob2 = Student::from_other(&ob1);
    log::debug!("constructed {ob:?}, {ob1:?}, {ob2:?}");

    // {:?} keeps the trailing ".0" on whole floats
    writeln!(out, "{:?}", ob.marks)?;
    writeln!(out, "{:?}", ob1.marks)?;
    writeln!(out, "{}", ob2.name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chains_to_new() {
        assert_eq!(Student::default(), Student::new(10, "Sumit", 979.0));
    }

    #[test]
    fn test_copy_is_independent_of_source() {
        let mut original = Student::new(7, "Ada", 88.5);
        let copy = Student::from_other(&original);
        original.name.push_str(" Lovelace");

        assert_eq!(copy.name, "Ada");
        assert_eq!(copy.roll, 7);
    }
}
