pub mod panel;
pub mod reader;
pub mod toc;
pub mod ui;
