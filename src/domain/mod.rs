pub mod filter;
pub mod models;
pub mod panel;
pub mod source;
pub mod toc;
