//! Cached downloads

use std::env;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use log::{debug, info, warn};
use sha2::{Digest, Sha256};

use super::registry::{builtin_registry, DatasetEntry, DatasetRegistry};
use crate::errors::{GeoError, GeoResult};
use crate::utils::ProgressTracker;

/// Environment variable overriding the cache directory
pub const CACHE_ENV_VAR: &str = "ANTARCTIC_KIT_CACHE";

const CACHE_DIR_NAME: &str = "antarctic-kit";
const CHUNK_SIZE: usize = 64 * 1024;

/// Cache directory from `ANTARCTIC_KIT_CACHE`, else the platform cache dir
pub fn default_cache_dir() -> GeoResult<PathBuf> {
    if let Some(dir) = env::var_os(CACHE_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    dirs::cache_dir()
        .map(|dir| dir.join(CACHE_DIR_NAME))
        .ok_or_else(|| GeoError::GenericError(format!(
            "no platform cache directory; set {}", CACHE_ENV_VAR)))
}

/// Lowercase hex SHA-256 of a file
pub fn file_sha256<P: AsRef<Path>>(path: P) -> GeoResult<String> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Downloads registry datasets into a cache directory
pub struct Fetcher {
    cache_dir: PathBuf,
    registry: DatasetRegistry,
    show_progress: bool,
}

impl Fetcher {
    /// Fetcher over the built-in registry and the default cache directory
    ///
    /// Fails when no cache directory can be determined.
    pub fn new() -> GeoResult<Self> {
        Ok(Self::new_in(default_cache_dir()?, builtin_registry().clone()))
    }

    /// Fetcher over a given cache directory and registry
    pub fn new_in<P: Into<PathBuf>>(cache_dir: P, registry: DatasetRegistry) -> Self {
        Fetcher {
            cache_dir: cache_dir.into(),
            registry,
            show_progress: true,
        }
    }

    pub fn with_registry(mut self, registry: DatasetRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn registry(&self) -> &DatasetRegistry {
        &self.registry
    }

    /// Where a dataset lives in the cache, whether or not it is downloaded
    pub fn cached_path(&self, name: &str) -> GeoResult<PathBuf> {
        let entry = self.registry.get(name)?;
        Ok(self.cache_dir.join(&entry.file))
    }

    /// Whether a dataset is cached and matches its checksum
    pub fn is_cached(&self, name: &str) -> GeoResult<bool> {
        let entry = self.registry.get(name)?;
        let path = self.cache_dir.join(&entry.file);
        if !path.is_file() {
            return Ok(false);
        }

        match &entry.sha256 {
            Some(expected) => Ok(&file_sha256(&path)? == expected),
            None => Ok(true),
        }
    }

    /// Path to a dataset, downloading it first if needed
    ///
    /// A cached file whose checksum no longer matches is downloaded again.
    pub fn fetch(&self, name: &str) -> GeoResult<PathBuf> {
        let entry = self.registry.get(name)?;
        let path = self.cache_dir.join(&entry.file);

        if self.is_cached(name)? {
            debug!("Using cached {} at {}", name, path.display());
            return Ok(path);
        }
        if path.exists() {
            warn!("Cached {} failed its checksum, downloading again", name);
        }

        fs::create_dir_all(&self.cache_dir)?;
        let partial = path.with_file_name(format!("{}.part", entry.file));
        info!("Downloading {} from {}", name, entry.url);

        if let Err(e) = self.download(entry, &partial).and_then(|_| verify(entry, &partial)) {
            let _ = fs::remove_file(&partial);
            return Err(e);
        }

        fs::rename(&partial, &path)?;
        info!("Saved {} to {}", name, path.display());
        Ok(path)
    }

    fn download(&self, entry: &DatasetEntry, dest: &Path) -> GeoResult<()> {
        let (reader, length): (Box<dyn Read>, Option<u64>) = match entry.url.strip_prefix("file://") {
            Some(local) => {
                let file = File::open(local)?;
                let length = file.metadata().ok().map(|m| m.len());
                (Box::new(file), length)
            },
            None => {
                let agent = ureq::AgentBuilder::new()
                    .timeout_connect(Duration::from_secs(30))
                    .timeout_read(Duration::from_secs(300))
                    .build();
                let response = match agent.get(&entry.url).call() {
                    Ok(resp) => resp,
                    Err(ureq::Error::Status(code, _)) => {
                        return Err(GeoError::DownloadError(format!("{} returned HTTP {}", entry.url, code)));
                    },
                    Err(e) => return Err(GeoError::DownloadError(format!("{}: {}", entry.url, e))),
                };
                let length = response.header("Content-Length").and_then(|v| v.parse::<u64>().ok());
                (Box::new(response.into_reader()), length)
            },
        };

        let progress = if self.show_progress {
            ProgressTracker::new(length, &entry.name)
        } else {
            ProgressTracker::hidden()
        };

        match copy_with_progress(reader, dest, &progress) {
            Ok(bytes) => {
                progress.finish();
                debug!("Downloaded {} bytes for {}", bytes, entry.name);
                Ok(())
            },
            Err(e) => {
                progress.abandon("Failed");
                Err(e)
            },
        }
    }
}

fn copy_with_progress(mut reader: Box<dyn Read>, dest: &Path, progress: &ProgressTracker) -> GeoResult<u64> {
    let mut writer = BufWriter::new(File::create(dest)?);
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(GeoError::DownloadError(format!("read failed: {}", e))),
        };
        writer.write_all(&buffer[..n])?;
        total += n as u64;
        progress.increment(n as u64);
    }

    writer.flush()?;
    Ok(total)
}

fn verify(entry: &DatasetEntry, path: &Path) -> GeoResult<()> {
    let Some(expected) = &entry.sha256 else {
        return Ok(());
    };

    let found = file_sha256(path)?;
    if &found != expected {
        return Err(GeoError::ChecksumMismatch { expected: expected.clone(), found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-256 of "hello\n"
    const HELLO_SHA256: &str = "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03";

    fn registry_for(source: &Path, sha256: Option<&str>) -> DatasetRegistry {
        let hash_line = sha256.map(|h| format!("sha256 = \"{}\"\n", h)).unwrap_or_default();
        DatasetRegistry::from_toml_str(&format!(
            "[datasets.hello]\nurl = \"file://{}\"\nfile = \"hello.txt\"\n{}",
            source.display(), hash_line,
        )).unwrap()
    }

    #[test]
    fn test_file_sha256() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.txt");
        fs::write(&path, "hello\n").unwrap();
        assert_eq!(file_sha256(&path).unwrap(), HELLO_SHA256);
    }

    #[test]
    fn test_fetch_downloads_then_uses_cache() {
        let source_dir = tempfile::tempdir().unwrap();
        let source = source_dir.path().join("hello-source.txt");
        fs::write(&source, "hello\n").unwrap();

        let cache = tempfile::tempdir().unwrap();
        let fetcher = Fetcher::new_in(cache.path(), registry_for(&source, Some(HELLO_SHA256))).with_progress(false);

        assert!(!fetcher.is_cached("hello").unwrap());
        let path = fetcher.fetch("hello").unwrap();
        assert_eq!(path, cache.path().join("hello.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
        assert!(fetcher.is_cached("hello").unwrap());

        // Removing the source proves the second call is served from the cache
        fs::remove_file(&source).unwrap();
        assert_eq!(fetcher.fetch("hello").unwrap(), path);
    }

    #[test]
    fn test_fetch_rejects_checksum_mismatch() {
        let source_dir = tempfile::tempdir().unwrap();
        let source = source_dir.path().join("hello-source.txt");
        fs::write(&source, "tampered\n").unwrap();

        let cache = tempfile::tempdir().unwrap();
        let fetcher = Fetcher::new_in(cache.path(), registry_for(&source, Some(HELLO_SHA256))).with_progress(false);

        assert!(matches!(fetcher.fetch("hello"), Err(GeoError::ChecksumMismatch { .. })));
        assert!(!cache.path().join("hello.txt").exists());
        assert!(!cache.path().join("hello.txt.part").exists());
    }

    #[test]
    fn test_fetch_replaces_corrupted_cache_file() {
        let source_dir = tempfile::tempdir().unwrap();
        let source = source_dir.path().join("hello-source.txt");
        fs::write(&source, "hello\n").unwrap();

        let cache = tempfile::tempdir().unwrap();
        let cached = cache.path().join("hello.txt");
        fs::write(&cached, "corrupted\n").unwrap();

        let fetcher = Fetcher::new_in(cache.path(), registry_for(&source, Some(HELLO_SHA256))).with_progress(false);
        assert!(!fetcher.is_cached("hello").unwrap());

        assert_eq!(fetcher.fetch("hello").unwrap(), cached);
        assert_eq!(fs::read_to_string(&cached).unwrap(), "hello\n");
        assert!(fetcher.is_cached("hello").unwrap());
    }

    #[test]
    fn test_partial_download_keeps_full_file_name() {
        let source_dir = tempfile::tempdir().unwrap();
        let source = source_dir.path().join("bad-source.txt");
        fs::write(&source, "tampered\n").unwrap();

        // A finished download sharing the stem must survive a failed one
        let cache = tempfile::tempdir().unwrap();
        fs::write(cache.path().join("hello.part"), "other dataset\n").unwrap();

        let fetcher = Fetcher::new_in(cache.path(), registry_for(&source, Some(HELLO_SHA256))).with_progress(false);
        assert!(fetcher.fetch("hello").is_err());
        assert_eq!(fs::read_to_string(cache.path().join("hello.part")).unwrap(), "other dataset\n");
    }

    #[test]
    fn test_fetch_unknown_dataset() {
        let cache = tempfile::tempdir().unwrap();
        let fetcher = Fetcher::new_in(cache.path(), DatasetRegistry::default()).with_progress(false);
        assert!(matches!(fetcher.fetch("bedmap2"), Err(GeoError::UnknownDataset(_))));
    }
}
