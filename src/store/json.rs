//! JSON file backed results history
//!
//! The file holds a single JSON array of [`GameRecord`]s. Appends hold an
//! advisory lock on a sibling lock file and replace the array through a temp
//! file and rename, so concurrent games never lose each other's records. The
//! OS drops the lock when its holder exits, so a crashed game never blocks
//! later ones.

use super::{GameRecord, ResultStore, StoreError};
use std::fs::{self, File, OpenOptions, TryLockError};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

/// How long an append waits for another process to release the lock
const LOCK_TIMEOUT: Duration = Duration::from_secs(5);
const LOCK_RETRY: Duration = Duration::from_millis(10);

/// Results history stored as a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the history at `path`, creating an empty one if it doesn't exist
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or file cannot be created.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::io("create directory for", &path, e))?;
        }

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(b"[]")
                    .map_err(|e| StoreError::io("initialize", &path, e))?;
                info!(path = %path.display(), "Created empty results file");
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "Using existing results file");
            }
            Err(e) => return Err(StoreError::io("create", &path, e)),
        }

        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn read_all(&self) -> Result<Vec<GameRecord>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io("read", &self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Serialization {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the file contents; the temp file is removed on any failure
    fn write_all(&self, records: &[GameRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records).map_err(|source| {
            StoreError::Serialization {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut tmp =
            NamedTempFile::new_in(self.dir()).map_err(|e| StoreError::io("write", &self.path, e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StoreError::io("write", tmp.path(), e))?;

        tmp.persist(&self.path)
            .map_err(|e| StoreError::io("replace", &self.path, e.error))?;
        Ok(())
    }
}

impl ResultStore for JsonFileStore {
    #[instrument(skip(self, record), fields(path = %self.path.display(), secret = %record.actual_word))]
    fn append(&mut self, record: &GameRecord) -> Result<(), StoreError> {
        let _lock = FileLock::acquire(&self.path, self.lock_path())?;

        let mut records = self.read_all()?;
        records.push(record.clone());
        self.write_all(&records)?;

        info!(total = records.len(), result = %record.result, "Game result saved");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_records(&self) -> Result<Vec<GameRecord>, StoreError> {
        let records = self.read_all()?;
        debug!(count = records.len(), "Loaded game history");
        Ok(records)
    }
}

/// Exclusive advisory lock, released when the handle is closed
struct FileLock {
    _file: File,
}

impl FileLock {
    fn acquire(target: &Path, path: PathBuf) -> Result<Self, StoreError> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|e| StoreError::io("lock", target, e))?;

        let started = Instant::now();
        loop {
            match file.try_lock() {
                Ok(()) => return Ok(Self { _file: file }),
                Err(TryLockError::WouldBlock) => {
                    if started.elapsed() >= LOCK_TIMEOUT {
                        warn!(lock = %path.display(), "Timed out waiting for results lock");
                        return Err(StoreError::Locked {
                            path: target.to_path_buf(),
                            lock: path,
                        });
                    }
                    thread::sleep(LOCK_RETRY);
                }
                Err(TryLockError::Error(e)) => return Err(StoreError::io("lock", target, e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Outcome;
    use tempfile::TempDir;

    fn record(secret: &str, result: Outcome) -> GameRecord {
        GameRecord::today(secret, secret, result, 3)
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn open_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data/attempts.json");
        let store = JsonFileStore::open(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(store.load_records().unwrap().is_empty());
        assert!(store.load_secrets_used().unwrap().is_empty());
    }

    #[test]
    fn open_keeps_existing_history() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attempts.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.append(&record("crane", Outcome::Won)).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.load_records().unwrap().len(), 1);
    }

    #[test]
    fn append_accumulates_in_order() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("attempts.json")).unwrap();
        store.append(&record("crane", Outcome::Won)).unwrap();
        store.append(&record("apple", Outcome::Lost)).unwrap();

        let records = store.load_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].actual_word, "crane");
        assert_eq!(records[1].actual_word, "apple");
        assert_eq!(records[1].result, Outcome::Lost);

        let used = store.load_secrets_used().unwrap();
        assert!(used.contains("crane"));
        assert!(used.contains("apple"));

        // Only the history and its lock file remain
        assert_eq!(
            entries(dir.path()),
            ["attempts.json", "attempts.json.lock"]
        );
    }

    #[test]
    fn file_is_a_json_array_of_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attempts.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.append(&record("crane", Outcome::Won)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["actual_word"], "crane");
        assert_eq!(entries[0]["result"], "won");
    }

    #[test]
    fn corrupt_file_reports_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attempts.json");
        let store = JsonFileStore::open(&path).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            store.load_records(),
            Err(StoreError::Serialization { .. })
        ));
    }

    #[test]
    fn append_fails_while_lock_is_held() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("attempts.json")).unwrap();

        let holder = File::create(store.lock_path()).unwrap();
        holder.lock().unwrap();

        let err = store.append(&record("crane", Outcome::Won)).unwrap_err();
        assert!(matches!(err, StoreError::Locked { .. }));
        assert!(store.load_records().unwrap().is_empty());

        drop(holder);
        store.append(&record("crane", Outcome::Won)).unwrap();
        assert_eq!(store.load_records().unwrap().len(), 1);
    }

    #[test]
    fn leftover_lock_file_does_not_block_appends() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("attempts.json")).unwrap();

        // A game killed mid-append leaves the lock file but no lock on it
        fs::write(store.lock_path(), "").unwrap();

        let started = Instant::now();
        store.append(&record("crane", Outcome::Won)).unwrap();
        store.append(&record("apple", Outcome::Won)).unwrap();
        assert!(started.elapsed() < LOCK_TIMEOUT);
        assert_eq!(store.load_records().unwrap().len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn lock_from_killed_process_is_released() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("attempts.json")).unwrap();

        let status = std::process::Command::new("sh")
            .arg("-c")
            .arg("exec 9>>\"$1\"; flock 9 2>/dev/null; kill -9 $$")
            .arg("sh")
            .arg(store.lock_path())
            .status()
            .unwrap();
        assert!(!status.success());

        store.append(&record("crane", Outcome::Won)).unwrap();
        assert_eq!(store.load_records().unwrap().len(), 1);
    }

    #[test]
    fn failed_replace_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attempts.json");
        let store = JsonFileStore::open(&path).unwrap();

        // A non-empty directory in place of the file makes the rename fail
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();

        let err = store.write_all(&[record("crane", Outcome::Won)]).unwrap_err();
        assert!(matches!(err, StoreError::Io { action: "replace", .. }));
        assert_eq!(entries(dir.path()), ["attempts.json"]);
    }

    #[test]
    fn concurrent_appends_all_land() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("attempts.json")).unwrap();

        let handles: Vec<_> = ["crane", "apple", "speed", "lymph"]
            .into_iter()
            .map(|secret| {
                let mut store = store.clone();
                thread::spawn(move || store.append(&record(secret, Outcome::Won)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(store.load_secrets_used().unwrap().len(), 4);
    }
}
