/// Report file input:
pub mod file;
