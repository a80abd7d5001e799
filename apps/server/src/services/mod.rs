pub mod browser;
pub mod document;
pub mod pipeline;
