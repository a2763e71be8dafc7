//! Pattern 5: Abstract Base Types
//!
//! The abstract class becomes a trait with required methods plus a
//! `Profile` struct for the state every implementor carries.

use std::io::Write;

use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub age: u32,
    pub name: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            age,
            name: name.into(),
        }
    }
}

pub trait Parent {
    fn profile(&self) -> &Profile;
    fn career(&self, name: &str, out: &mut dyn Write) -> Result<()>;
    fn partner(&self, name: &str, age: u32, out: &mut dyn Write) -> Result<()>;

    /// Prints the shared fields. Implementors wrap this in their own `display`.
    fn display_profile(&self, out: &mut dyn Write) -> Result<()> {
        let profile = self.profile();
        writeln!(out, "{}", profile.age)?;
        writeln!(out, "{}", profile.name)?;
        Ok(())
    }

    fn display(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct Son {
    profile: Profile,
}

impl Son {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            profile: Profile::new(name, age),
        }
    }
}

impl Parent for Son {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn career(&self, name: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{name} aspires to be coder.")?;
        Ok(())
    }

    fn partner(&self, name: &str, age: u32, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "My partner will be {name} and age {age}")?;
        Ok(())
    }

    fn display(&self, out: &mut dyn Write) -> Result<()> {
        self.career("Harsh", out)?;
        self.partner("Sneha", 19, out)?;
        self.display_profile(out)?;
        writeln!(out, "HEY from Son class")?;
        Ok(())
    }
}

pub struct Daughter {
    profile: Profile,
}

impl Daughter {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            profile: Profile::new(name, age),
        }
    }
}

impl Parent for Daughter {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn career(&self, name: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{name} aspires to be coder.")?;
        Ok(())
    }

    fn partner(&self, name: &str, age: u32, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "My partner will be {name} and age {age}")?;
        Ok(())
    }

    fn display(&self, out: &mut dyn Write) -> Result<()> {
        self.career("Neha", out)?;
        self.partner("Harsh", 19, out)?;
        self.display_profile(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let family: [Box<dyn Parent>; 2] = [
        Box::new(Son::new("Vishal", 34)),
        Box::new(Daughter::new("Neha", 20)),
    ];
    for member in &family {
        member.display(out)?;
    }
    Ok(())
}
