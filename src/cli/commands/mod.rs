pub mod analyze;
pub mod config;
pub mod export;
pub mod grid;
pub mod init;
pub mod people;
