use std::borrow::Cow;
use std::collections::HashMap;
use std::time::SystemTime;

use crate::error::AssetError;
use crate::file::{AssetFile, Metadata};

/// Default document tried when a directory-like path has no entry.
pub const INDEX_DOCUMENT: &str = "index.html";

/// One embedded asset: a logical path plus immutable bytes and the
/// metadata recorded when the bundle was generated.
#[derive(Debug, Clone)]
pub struct Asset {
    path: &'static str,
    content: &'static [u8],
    modified: SystemTime,
}

impl Asset {
    pub fn new(path: &'static str, content: &'static [u8], modified: SystemTime) -> Self {
        Self {
            path,
            content,
            modified,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Base name: the last path segment.
    pub fn name(&self) -> &'static str {
        self.path.rsplit('/').next().unwrap_or(self.path)
    }

    pub fn content(&self) -> &'static [u8] {
        self.content
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    pub fn metadata(&self) -> Metadata {
        Metadata {
            name: self.name().to_string(),
            size: self.size(),
            modified: self.modified,
            is_dir: false,
        }
    }

    /// Open a fresh handle with its own cursor.
    pub fn open(&self) -> AssetFile {
        AssetFile::new(self.content, self.metadata())
    }
}

/// Path-keyed, read-only store of embedded assets.
///
/// Populated once at startup and never mutated, so concurrent readers
/// need no locking.
#[derive(Debug, Default)]
pub struct AssetStore {
    records: HashMap<&'static str, Asset>,
}

impl AssetStore {
    /// Build a store from generated asset records. Paths must already be
    /// unique; a duplicate keeps the last record.
    pub fn new(records: impl IntoIterator<Item = Asset>) -> Self {
        Self {
            records: records.into_iter().map(|a| (a.path, a)).collect(),
        }
    }

    /// Exact-match lookup after collapsing duplicate path separators.
    pub fn lookup(&self, path: &str) -> Result<&Asset, AssetError> {
        let normalized = normalize_path(path);
        self.records
            .get(normalized.as_ref())
            .ok_or_else(|| AssetError::NotFound(normalized.into_owned()))
    }

    /// Lookup for assets whose absence is a packaging defect.
    ///
    /// # Panics
    /// Panics when the path has no entry. Use [`AssetStore::lookup`] for
    /// paths that may legitimately be missing.
    pub fn must_lookup(&self, path: &str) -> &Asset {
        match self.lookup(path) {
            Ok(asset) => asset,
            Err(_) => panic!("asset missing from bundle: {path}"),
        }
    }

    /// Open a handle, falling back once to `path + "/index.html"` when the
    /// path itself has no entry. The fallback is literal and never
    /// recurses into deeper hierarchy.
    pub fn open(&self, path: &str) -> Result<AssetFile, AssetError> {
        if let Ok(asset) = self.lookup(path) {
            return Ok(asset.open());
        }
        let index = format!("{path}/{INDEX_DOCUMENT}");
        match self.lookup(&index) {
            Ok(asset) => Ok(asset.open()),
            Err(_) => Err(AssetError::NotFound(normalize_path(path).into_owned())),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.records.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Collapse runs of '/' into one. The only normalization lookups apply.
fn normalize_path(path: &str) -> Cow<'_, str> {
    if !path.contains("//") {
        return Cow::Borrowed(path);
    }
    let mut out = String::with_capacity(path.len());
    let mut prev_sep = false;
    for ch in path.chars() {
        if ch == '/' {
            if prev_sep {
                continue;
            }
            prev_sep = true;
        } else {
            prev_sep = false;
        }
        out.push(ch);
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    const HTML: &[u8] = b"<html>hello</html>";
    const SCRIPT: &[u8] = b"console.log('hi')";
    const ICON: &[u8] = &[0u8; 1374];

    fn store() -> AssetStore {
        AssetStore::new([
            Asset::new("/index.html", HTML, SystemTime::UNIX_EPOCH),
            Asset::new("/static/app.js", SCRIPT, SystemTime::UNIX_EPOCH),
            Asset::new("/favicon.png", ICON, SystemTime::UNIX_EPOCH),
        ])
    }

    #[test]
    fn lookup_present_returns_recorded_bytes() {
        let s = store();
        assert_eq!(s.lookup("/index.html").unwrap().content(), HTML);
        assert_eq!(s.lookup("/static/app.js").unwrap().content(), SCRIPT);
    }

    #[test]
    fn lookup_is_idempotent() {
        let s = store();
        let first = s.lookup("/static/app.js").unwrap().content();
        let second = s.lookup("/static/app.js").unwrap().content();
        assert_eq!(first, second);
    }

    #[test]
    fn lookup_absent_is_not_found() {
        let s = store();
        let err = s.lookup("/missing/path").unwrap_err();
        assert_eq!(err, AssetError::NotFound("/missing/path".to_string()));
    }

    #[test]
    fn lookup_collapses_duplicate_separators() {
        let s = store();
        let a = s.lookup("/static//app.js").unwrap();
        let b = s.lookup("/static/app.js").unwrap();
        assert_eq!(a.content(), b.content());
        assert_eq!(a.path(), "/static/app.js");
    }

    #[test]
    fn must_lookup_present() {
        let s = store();
        assert_eq!(s.must_lookup("/favicon.png").size(), 1374);
    }

    #[test]
    #[should_panic(expected = "asset missing from bundle")]
    fn must_lookup_absent_panics() {
        store().must_lookup("/nope.js");
    }

    #[test]
    fn open_exact_path() {
        let mut f = store().open("/index.html").unwrap();
        let mut buf = Vec::new();
        f.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, HTML);
    }

    #[test]
    fn open_root_falls_back_to_index() {
        // "//index.html" normalizes to "/index.html", so the root resolves.
        let mut f = store().open("/").unwrap();
        let mut buf = Vec::new();
        f.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, HTML);
    }

    #[test]
    fn open_fallback_is_not_recursive() {
        // No "/static/index.html" entry, so a directory-like path under
        // /static fails even though deeper entries exist.
        assert!(store().open("/static").is_err());
    }

    #[test]
    fn open_absent_is_not_found() {
        let err = store().open("/missing/path").unwrap_err();
        assert_eq!(err, AssetError::NotFound("/missing/path".to_string()));
    }

    #[test]
    fn stat_via_handle() {
        use crate::file::VirtualFile;
        let f = store().open("/favicon.png").unwrap();
        let meta = f.metadata();
        assert_eq!(meta.size, 1374);
        assert!(!meta.is_dir);
        assert_eq!(meta.name, "favicon.png");
    }

    #[test]
    fn asset_name_is_last_segment() {
        let s = store();
        assert_eq!(s.must_lookup("/static/app.js").name(), "app.js");
        assert_eq!(s.must_lookup("/index.html").name(), "index.html");
    }

    #[test]
    fn size_matches_content_length() {
        let s = store();
        for path in s.paths() {
            let asset = s.must_lookup(path);
            assert_eq!(asset.size(), asset.content().len() as u64);
        }
    }

    #[test]
    fn normalize_borrowed_when_clean() {
        assert!(matches!(normalize_path("/a/b"), Cow::Borrowed(_)));
        assert_eq!(normalize_path("/a///b//c"), "/a/b/c");
        assert_eq!(normalize_path("//"), "/");
    }

    #[test]
    fn empty_store() {
        let s = AssetStore::new([]);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert!(s.lookup("/index.html").is_err());
    }
}
