pub mod error;
pub mod extractor;
pub mod fields;
pub mod patterns;
