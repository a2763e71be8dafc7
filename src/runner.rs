use colored::Colorize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::{abstract_classes, access, classes, interfaces, polymorphism, wrappers};
use crate::{DemoConfig, DemoError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Interfaces,
    Classes,
    Wrappers,
    Access,
    AbstractClasses,
    Polymorphism,
}

impl Demo {
    pub const ALL: [Demo; 6] = [
        Demo::Interfaces,
        Demo::Classes,
        Demo::Wrappers,
        Demo::Access,
        Demo::AbstractClasses,
        Demo::Polymorphism,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Interfaces => "interfaces",
            Demo::Classes => "classes",
            Demo::Wrappers => "wrappers",
            Demo::Access => "access",
            Demo::AbstractClasses => "abstract_classes",
            Demo::Polymorphism => "polymorphism",
        }
    }

    pub fn run(self, out: &mut dyn Write) -> Result<()> {
        log::info!("Running demo '{}'", self.name());
        match self {
            Demo::Interfaces => interfaces::run(out),
            Demo::Classes => classes::run(out),
            Demo::Wrappers => wrappers::run(out),
            Demo::Access => access::run(out),
            Demo::AbstractClasses => abstract_classes::run(out),
            Demo::Polymorphism => polymorphism::run(out),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        Demo::ALL
            .into_iter()
            .find(|demo| demo.name() == s)
            .ok_or_else(|| DemoError::UnknownDemo(s.to_string()))
    }
}

/// Resolves every configured name before anything runs, so a typo
/// produces no partial output.
pub fn plan(config: &DemoConfig) -> Result<Vec<Demo>> {
    config.demos.iter().map(|name| name.parse()).collect()
}

/// With `color = true` the heading is styled through `colored`, which
/// still applies its own terminal and `NO_COLOR`/`CLICOLOR` checks, so
/// output may come out plain even when `out` is not stdout.
pub fn run_plan(config: &DemoConfig, out: &mut dyn Write) -> Result<()> {
    for demo in plan(config)? {
        let heading = format!("== {demo} ==");
        if config.color {
            writeln!(out, "{}", heading.bold().cyan())?;
        } else {
            writeln!(out, "{heading}")?;
        }
        demo.run(out)?;
    }
    Ok(())
}
