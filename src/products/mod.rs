/// Notices produced by checks:
pub mod notice;

/// Unexpected results (errors):
pub mod unexpected;
