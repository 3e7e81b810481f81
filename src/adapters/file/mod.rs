//! File-based adapters
//!
//! - [`FileKeyValueStore`] - one file per key in a state directory
//! - [`FileManifestSource`] - manifest read from a local export

mod source;
mod store;

pub use source::FileManifestSource;
pub use store::FileKeyValueStore;
