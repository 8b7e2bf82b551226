/// Policies - Recipe compatibility rules
pub mod version_ordering;

pub use version_ordering::{tag_key, MINIMUM_TAG, MINIMUM_TAG_KEY};
