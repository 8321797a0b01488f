//! Domain layer: the element tree and its builder
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod definition;
pub mod element;
pub mod error;

pub use builder::{ElementBuilder, ElementRef};
pub use definition::parse_definition;
pub use element::{Element, INDENT_WIDTH};
pub use error::DomainError;
