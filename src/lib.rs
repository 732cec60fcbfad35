//! # lnear-banner
//!
//! Prepends the Lnear copyright banner to every regular file in a directory
//! tree.
//!
//! Files that already contain the banner are left untouched, so the tool can
//! be re-run safely. PHP files get the banner right after their opening
//! `<?php` tag instead of at the top of the file.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use lnear_banner::processor::Processor;
//!
//! fn main() -> anyhow::Result<()> {
//!     let processor = Processor::new("src")?;
//!     let summary = processor.process();
//!
//!     println!("{} files prepended", summary.prepended);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Directory traversal and per-file banner insertion
//! * [`banner`] - The banner text and marker phrase
//! * [`logging`] - Console output helpers
//!
//! [`processor`]: crate::processor
//! [`banner`]: crate::banner
//! [`logging`]: crate::logging

pub mod banner;
pub mod error;
pub mod logging;
pub mod processor;
pub mod report;
