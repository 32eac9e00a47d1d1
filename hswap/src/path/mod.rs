//! Path handling for counterpart lookup.
//!
//! # Key Concepts
//!
//! ## Input normalization
//!
//! Paths typed on the command line are made absolute with
//! [`normalize::normalize`]: tilde expansion, joining onto the current
//! directory, and resolving `.` and `..`. Symlinks are left alone.
//!
//! ## Cache keys
//!
//! [`normalize_key`] maps a path to the string used by the swap cache. It is
//! case-insensitive and purely lexical, so `/Proj/Foo.H` and
//! `/proj/./foo.h` share a key.
//!
//! ## File locations
//!
//! [`FileLocation`] splits a path into directory, stem, and dotted extension,
//! which is all the counterpart search ever looks at.
//!
//! ```
//! use hswap::path::{normalize_key, FileLocation};
//! use std::path::Path;
//!
//! let loc = FileLocation::from_path(Path::new("/proj/src/foo.cpp"));
//! assert_eq!(loc.stem(), "foo");
//! assert_eq!(loc.extension(), ".cpp");
//! assert_eq!(normalize_key(Path::new("/PROJ/src/FOO.cpp")), "/proj/src/foo.cpp");
//! ```

pub mod normalize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use normalize::normalize_key;
pub use types::{split_name, FileLocation};
