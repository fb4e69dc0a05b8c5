//! Input handling for shapevault.
//!
//! Shapes arrive as whitespace-separated text lines, one shape per line:
//!
//! - rectangle: `x y width height`
//! - cone: `cx cy cz radius height`
//!
//! [`validate`] checks a line and yields its numbers, [`factory`] turns
//! numbers into shape values, and [`loader`] reads whole files while
//! skipping (and reporting) the lines that fail. [`summary`] holds the
//! collection helpers used by reports.

pub mod error;
pub mod factory;
pub mod loader;
pub mod summary;
pub mod validate;

pub use error::{IoError, IoResult};
pub use factory::{cone_from_line, cone_from_values, rectangle_from_line, rectangle_from_values};
pub use loader::{load_cones, load_rectangles, LoadReport, RejectedLine};
pub use validate::{
    validate_cone_line, validate_cone_values, validate_rectangle_line, validate_rectangle_values,
};
