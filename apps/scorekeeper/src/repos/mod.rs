//! Repository layer: typed access to persisted records.

pub mod saved_state;
