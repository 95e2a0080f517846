pub mod analysis;
pub mod document;
pub mod interview;
pub mod lenient;
