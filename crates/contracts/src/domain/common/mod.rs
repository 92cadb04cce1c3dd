//! Common types and traits for all entities

pub mod entity_key;
pub mod entity_root;

// Re-exports
pub use entity_key::EntityKey;
pub use entity_root::EntityRoot;
