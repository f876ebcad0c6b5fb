//! Word list loading

pub mod loader;

pub use loader::load_from_file;
