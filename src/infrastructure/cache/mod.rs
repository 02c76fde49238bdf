//! Cache infrastructure - moka-backed summary cache

mod lookup_cache;

pub use lookup_cache::{LookupCache, LookupCacheConfig};
