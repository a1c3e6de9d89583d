//! # metadata-pull
//!
//! Harvests a single metadata subfield from every record of a paginated JSON
//! records API (B2SHARE by default) and writes the result to a JSON file.
//!
//! The pipeline is strictly sequential:
//! 1. [`enumerator`] walks the listing endpoint and collects each record's `links.self`
//! 2. [`fetcher`] GETs every link and reads `metadata.<subfield>`
//! 3. [`output`] writes the link → value map as pretty-printed JSON
//!
//! ## Quick Start
//!
//! ```no_run
//! use metadata_pull::{Config, Harvester};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let harvester = Harvester::new(Config::default())?;
//!     let report = harvester.run("title").await?;
//!     println!("{} entries in {}", report.entries_written, report.output_path.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Command-line arguments
pub mod cli;
/// HTTP access
pub mod client;
/// Configuration types
pub mod config;
/// Record link enumeration
pub mod enumerator;
/// Error types
pub mod error;
/// Per-record subfield fetching
pub mod fetcher;
/// Pipeline orchestration
pub mod harvester;
/// Result file writing
pub mod output;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::{Config, EnumerationConfig, EnumerationStrategy, HttpConfig, SourceConfig};
pub use error::{Error, Result};
pub use harvester::Harvester;
pub use types::{HarvestReport, Link, ResultMap};
