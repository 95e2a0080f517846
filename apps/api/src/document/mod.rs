// Document intake: turns an uploaded CV into plain text.

pub mod extractor;
pub mod handlers;
