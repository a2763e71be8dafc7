//! Pattern 4: Access Modifiers
//!
//! | OOP modifier    | Rust           |
//! |-----------------|----------------|
//! | `private`       | no modifier    |
//! | `public`        | `pub`          |
//! | package-private | `pub(crate)`   |
//! | `protected`     | `pub(crate)`   |
//!
//! Rust has no subclass-only visibility; `arr` is crate-visible and
//! meant for types that build on `AccMod`.

use std::io::Write;

use crate::{DemoError, Result};

#[derive(Debug)]
pub struct AccMod {
    num: i32,
    pub name: String,
    pub(crate) age: u32,
    pub(crate) arr: Vec<i32>,
}

impl AccMod {
    pub(crate) fn new(num: i32, name: impl Into<String>) -> Result<Self> {
        let len = usize::try_from(num).map_err(|_| DemoError::NegativeArraySize(num))?;
        Ok(Self {
            num,
            name: name.into(),
            age: 0,
            arr: vec![0; len],
        })
    }

    pub fn num(&self) -> i32 {
        self.num
    }

    pub(crate) fn display(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} {}", self.num, self.name)?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let acc = AccMod::new(3, "Rust")?;
    log::debug!("AccMod age defaults to {}", acc.age);
    acc.display(out)?;
    writeln!(out, "{}", acc.arr.len())?;
    Ok(())
}
