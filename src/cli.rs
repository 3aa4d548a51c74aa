//! Command-line interface
//!
//! Running with no arguments reproduces the one-shot maintenance pass this
//! tool was written for: stripping the duplicated delivered-items section
//! from `ShopPackages.js` in the working directory. The flags exist so the
//! same splice can be pointed at another file or another pair of markers.

use std::path::PathBuf;

use clap::Parser;

use crate::splice::BlockMarkers;

/// Default target file, relative to the working directory
pub const DEFAULT_TARGET: &str = "ShopPackages.js";

/// Default marker for the first line of the duplicated section
pub const DEFAULT_START: &str = "                {selectedPackage?.deliveredItems && Array.isArray(selectedPackage.deliveredItems) && selectedPackage.deliveredItems.length > 0 && (";

/// Default marker for the closing line of the duplicated section
pub const DEFAULT_END: &str = "                )}";

/// Default qualifier that must share the closing line
pub const DEFAULT_END_QUALIFIER: &str = "})()";

/// Remove a duplicated markup section from a source file
#[derive(Parser, Debug)]
#[command(name = "blocksnip", version, about)]
pub struct Cli {
    /// Source file to rewrite in place
    #[arg(default_value = DEFAULT_TARGET)]
    pub file: PathBuf,

    /// Literal substring marking the first line of the section
    #[arg(long, default_value = DEFAULT_START)]
    pub start: String,

    /// Literal substring marking the closing line of the section
    #[arg(long, default_value = DEFAULT_END)]
    pub end: String,

    /// Second substring required on the closing line
    #[arg(long, default_value = DEFAULT_END_QUALIFIER)]
    pub end_qualifier: String,
}

impl Cli {
    /// Markers assembled from the parsed arguments
    pub fn markers(&self) -> BlockMarkers {
        BlockMarkers {
            start: self.start.clone(),
            end: self.end.clone(),
            end_qualifier: self.end_qualifier.clone(),
        }
    }
}
