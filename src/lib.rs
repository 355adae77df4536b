//! Convert prose into a quoted literal-concatenation block.
//!
//! ```text
//! texto = (
//!     "Hello world. "
//!     "This is Test. "
//! )
//! ```
//!
//! [`fragmenter`] holds the pure transformation; [`reader`] and [`output`]
//! wrap it with file I/O for the command-line tool.

pub mod config;
pub mod error;
pub mod fragmenter;
pub mod output;
pub mod reader;

pub use error::FormatError;
pub use fragmenter::{FormatOptions, format, format_with};
pub use reader::format_from_path;
