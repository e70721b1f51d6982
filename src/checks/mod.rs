/// Certificate expiry classification:
pub mod expiry;

/// Report staleness check:
pub mod staleness;
