//! # Object-Oriented Patterns in Rust
//!
//! Small, independent demos of classic OOP ideas mapped onto traits,
//! structs and visibility rules:
//!
//! ## Pattern 1: Interfaces
//! - Trait objects and dynamic dispatch
//! - Two traits with colliding method names
//! - Composition instead of multiple inheritance
//!
//! ## Pattern 2: Constructors
//! - One canonical `new` plus chained defaults
//! - Copy construction
//!
//! ## Pattern 3: Wrapper Types
//! - Boxed primitives and radix strings
//!
//! ## Pattern 4: Access Modifiers
//! - `pub`, `pub(crate)` and private fields
//!
//! ## Pattern 5: Abstract Base Types
//! - Shared state plus required operations
//!
//! ## Pattern 6: Overriding
//! - Default trait methods and overrides
//!
//! Every demo writes to a `&mut dyn Write` so output can be captured.
//! Run one with: `cargo run --bin <name>`

pub mod abstract_classes;
pub mod access;
pub mod classes;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod polymorphism;
pub mod runner;
pub mod wrappers;

pub use config::DemoConfig;
pub use error::{DemoError, Result};
pub use runner::Demo;
