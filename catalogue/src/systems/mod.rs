//! Small stateful systems built from sets and maps: caches, filters,
//! indexes and relationship graphs.

pub mod bloom;
pub mod dedup;
pub mod edges;
pub mod grid;
pub mod lru;
pub mod permissions;
pub mod social;
pub mod tagging;

pub use bloom::BloomFilter;
pub use dedup::Deduplicator;
pub use edges::EdgeWeights;
pub use grid::CoordinateCache;
pub use lru::LruCache;
pub use permissions::PermissionSystem;
pub use social::SocialNetwork;
pub use tagging::TaggingSystem;
