// Filesystem module
// Probes, listings and lexical path helpers

mod listing;
pub mod paths;
mod probe;

pub use listing::Listing;
pub use probe::{DirEntryInfo, EntryKind, FileProbe, RealFileProbe};
