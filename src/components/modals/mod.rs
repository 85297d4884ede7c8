pub mod error;
pub mod help;
pub mod helpers;
