// Shared pure data utilities used across the site tooling

pub mod classes;
pub mod labels;
pub mod ordering;

pub use classes::{merge_classes, ClassToken};
pub use labels::mapped_key;
pub use ordering::sort_by_reference;
