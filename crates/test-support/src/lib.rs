#![deny(unsafe_code)]
#![deny(missing_docs)]

//! crates/test-support/src/lib.rs
//!
//! Helpers shared by the workspace's test suites: an in-memory writer that
//! can be handed to a console sink and inspected afterwards, spies for the
//! debug channel and the log callback, a scripted message host for the
//! status decoder, and temporary directory helpers.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use logging_sink::DebugChannel;
use status::{CatalogId, MessageHost};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Cloneable in-memory writer. Every clone shares the same buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes written so far.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        lock(&self.bytes).clone()
    }

    /// Bytes written so far, decoded lossily.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&lock(&self.bytes)).into_owned()
    }

    /// Reports whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.bytes).is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.bytes).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer whose every write fails, for exercising recovery paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("writer closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("writer closed"))
    }
}

/// [`DebugChannel`] that records every message.
#[derive(Clone, Debug, Default)]
pub struct MemoryDebugChannel {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemoryDebugChannel {
    /// Creates an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }
}

impl DebugChannel for MemoryDebugChannel {
    fn output(&self, text: &str) {
        lock(&self.messages).push(text.to_owned());
    }
}

/// Records the lines passed to a log callback.
#[derive(Clone, Debug, Default)]
pub struct CallbackSpy {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CallbackSpy {
    /// Creates a spy with no recorded lines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a callback that records into this spy.
    #[must_use]
    pub fn callback(&self) -> impl Fn(&str) + Send + Sync + 'static {
        let lines = Arc::clone(&self.lines);
        move |line: &str| lock(&lines).push(line.to_owned())
    }

    /// Lines recorded so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn count(&self) -> usize {
        lock(&self.lines).len()
    }
}

#[derive(Debug, Default)]
struct HostLog {
    loaded: Vec<String>,
    released: Vec<String>,
    rendered: Vec<(u32, Option<CatalogId>, u32)>,
}

/// Scripted [`MessageHost`] that records catalog loads, releases, and
/// rendering requests.
#[derive(Clone, Debug, Default)]
pub struct FakeMessageHost {
    messages: HashMap<(u32, Option<CatalogId>), String>,
    missing_catalogs: Vec<CatalogId>,
    language: Option<u32>,
    log: Arc<Mutex<HostLog>>,
}

impl FakeMessageHost {
    /// Creates a host that knows no messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `code` as `text` when looked up in `catalog`.
    pub fn with_message(mut self, code: u32, catalog: Option<CatalogId>, text: &str) -> Self {
        self.messages.insert((code, catalog), text.to_owned());
        self
    }

    /// Makes loading `catalog` fail.
    pub fn with_missing_catalog(mut self, catalog: CatalogId) -> Self {
        self.missing_catalogs.push(catalog);
        self
    }

    /// Reports `language` as the system language.
    pub fn with_language(mut self, language: u32) -> Self {
        self.language = Some(language);
        self
    }

    /// Names of the catalogs loaded so far.
    #[must_use]
    pub fn loaded(&self) -> Vec<String> {
        lock(&self.log).loaded.clone()
    }

    /// Names of the catalogs released so far.
    #[must_use]
    pub fn released(&self) -> Vec<String> {
        lock(&self.log).released.clone()
    }

    /// `(code, catalog, language)` of every rendering request.
    #[must_use]
    pub fn rendered(&self) -> Vec<(u32, Option<CatalogId>, u32)> {
        lock(&self.log).rendered.clone()
    }
}

/// Catalog handle issued by [`FakeMessageHost`].
#[derive(Debug)]
pub struct FakeCatalog {
    id: CatalogId,
    log: Arc<Mutex<HostLog>>,
}

impl Drop for FakeCatalog {
    fn drop(&mut self) {
        lock(&self.log).released.push(self.id.name().to_owned());
    }
}

impl MessageHost for FakeMessageHost {
    type Catalog = FakeCatalog;

    fn load_catalog(&self, catalog: CatalogId) -> Option<Self::Catalog> {
        if self.missing_catalogs.contains(&catalog) {
            return None;
        }
        lock(&self.log).loaded.push(catalog.name().to_owned());
        Some(FakeCatalog {
            id: catalog,
            log: Arc::clone(&self.log),
        })
    }

    fn render(&self, code: u32, catalog: Option<&Self::Catalog>, language: u32) -> Option<String> {
        let catalog = catalog.map(|handle| handle.id);
        lock(&self.log).rendered.push((code, catalog, language));
        self.messages.get(&(code, catalog)).cloned()
    }

    fn system_language(&self) -> Option<u32> {
        self.language
    }
}

/// Creates a temporary directory that is removed when dropped.
///
/// # Panics
///
/// Panics when the directory cannot be created.
#[must_use]
pub fn tempdir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temporary directory")
}

/// Returns `dir/name` as a string, suitable for a file prefix.
#[must_use]
pub fn prefix_in(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}

/// Lists the files in `dir` whose names start with `stem`.
#[must_use]
pub fn files_with_stem(dir: &Path, stem: &str) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = std::fs::read_dir(dir)
        .into_iter()
        .flatten()
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(stem))
        })
        .collect();
    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_buffer_clones_share_storage() {
        let buffer = SharedBuffer::new();
        let mut writer = buffer.clone();
        writer.write_all(b"abc").unwrap();
        assert_eq!(buffer.text(), "abc");
    }

    #[test]
    fn callback_spy_records_lines() {
        let spy = CallbackSpy::new();
        let callback = spy.callback();
        callback("one");
        callback("two");
        assert_eq!(spy.lines(), ["one", "two"]);
    }

    #[test]
    fn fake_host_tracks_catalog_lifetime() {
        let host = FakeMessageHost::new().with_message(5, Some(CatalogId::DDRAW), "denied");
        {
            let catalog = host.load_catalog(CatalogId::DDRAW).unwrap();
            assert_eq!(host.render(5, Some(&catalog), 0).as_deref(), Some("denied"));
            assert!(host.released().is_empty());
        }
        assert_eq!(host.released(), ["ddraw.dll"]);
    }

    #[test]
    fn files_with_stem_filters_by_prefix() {
        let dir = tempdir();
        std::fs::write(dir.path().join("app_01_02.log"), "").unwrap();
        std::fs::write(dir.path().join("other.log"), "").unwrap();
        assert_eq!(files_with_stem(dir.path(), "app_").len(), 1);
    }
}
