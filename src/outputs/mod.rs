//! Presentation of a finished run.
//!
//! # Submodules
//!
//! - [`terminal`]: the numbered listing and the detail view printed to stdout
//! - [`json`]: writes the [`FrontPage`](crate::models::FrontPage) as a JSON edition
//! - [`markdown`]: renders and writes the Markdown edition
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── morning.json
//!     └── evening.json
//!
//! markdown_output_dir/
//! ├── 2025-05-06_morning.md
//! └── 2025-05-06_evening.md
//! ```

pub mod json;
pub mod markdown;
pub mod terminal;
