/// Filesystem adapters - bundle cache, archive extraction, report output
pub mod archive;
pub mod bundle_cache;
pub mod file_writer;

pub use bundle_cache::FileSystemBundleCache;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
