pub mod tag_counts;
pub mod zip;
