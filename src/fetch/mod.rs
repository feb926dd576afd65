//! Dataset download and caching
//!
//! Datasets are described in a TOML registry and downloaded on first use into
//! a per-user cache directory. Later calls return the cached file.

mod registry;
mod cache;

pub use self::registry::{DatasetEntry, DatasetRegistry, builtin_registry};
pub use self::cache::{default_cache_dir, file_sha256, Fetcher, CACHE_ENV_VAR};
