pub mod error;
pub mod file_system;
pub mod output_macros;
