pub mod cli;
pub mod fixer;
pub mod splice;

pub use cli::Cli;
pub use fixer::{remove_duplicate_block, FixError, FixOutcome};
pub use splice::{find_block, remove_block, split_lines, BlockMarkers, BlockSpan};
