#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hswap
//!
//! A library for jumping between a C-family header and its source file.
//!
//! Given `foo.h`, hswap finds `foo.c` (or `foo.cpp`, `foo.mm`, ...) and the
//! other way round. The lookup runs in phases that go from cheap to
//! expensive: the same directory, everything below the project's
//! `include`/`src` root, and finally the whole workspace, with ranking when
//! more than one file qualifies. Resolved pairs are cached in both
//! directions for the lifetime of the process.
//!
//! ## Core Types
//!
//! - [`Swapper`]: the full swap operation
//! - [`SwapResolver`] and [`Resolution`]: the stateless phased search
//! - [`SwapCache`]: the bidirectional pair cache
//! - [`Config`] and [`ExtensionClassification`]: what counts as a header
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use hswap::{normalize_key, ExtensionClassification, FileLocation};
//! use std::path::Path;
//!
//! let loc = FileLocation::from_path(Path::new("/proj/include/foo.hpp"));
//! let classes = ExtensionClassification::new(
//!     vec![".h".into(), ".hpp".into()],
//!     vec![".cpp".into()],
//! );
//! assert!(classes.search_extensions_for(loc.extension()).contains(".cpp"));
//! assert_eq!(normalize_key(Path::new("/Proj/Include/FOO.hpp")), "/proj/include/foo.hpp");
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;
pub mod swap;
pub mod workspace;

// Re-export key types at crate root for convenience
pub use cache::SwapCache;
pub use config::{Config, ConfigBuilder, ExtensionClassification};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{normalize_key, FileLocation};
pub use swap::{Resolution, SwapCandidate, SwapOutcome, SwapResolver, Swapper};
