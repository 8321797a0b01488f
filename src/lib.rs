//! Build trees of named, text-bearing elements and render them as indented markup.
//!
//! ```
//! use tagtree::domain::Element;
//!
//! let mut builder = Element::builder("ul");
//! builder
//!     .add_child_fluent("li", "hello")
//!     .add_child_fluent("li", "world");
//!
//! assert_eq!(
//!     builder.render(),
//!     "<ul>\n  <li>\n    hello\n  </li>\n  <li>\n    world\n  </li>\n</ul>\n"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
