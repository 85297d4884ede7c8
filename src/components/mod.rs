pub mod footer;
pub mod header;
pub mod modals;
pub mod reader;
pub mod toc_panel;
