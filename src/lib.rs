// Crate root: declare modules and control visibility
pub mod debug;
pub mod error;
pub mod listing;
pub mod pipeline;
pub mod render;
pub mod translate;

// Re-export commonly used API from the library for binaries/tests
pub use error::HelperError;
pub use listing::{find_marker_line, MarkerLine};
pub use pipeline::{generate, Job};
pub use render::{format_break_address, render_template, write_output};
pub use translate::{parse_address_field, MemoryMap};
