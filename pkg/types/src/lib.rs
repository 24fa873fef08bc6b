pub mod config;
pub mod function;
