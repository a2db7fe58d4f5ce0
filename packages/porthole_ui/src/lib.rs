//! Embedded web UI assets for Porthole.
//!
//! The UI build step writes its output into `assets/` and this crate
//! embeds that output at compile time. The paths and filenames below are
//! build artifacts; only the store they populate is API.

use std::sync::LazyLock;
use std::time::{Duration, SystemTime};

use porthole_assets::{Asset, AssetError, AssetFile, AssetStore};

/// Modification time stamped on every asset, fixed when the bundle was
/// generated so builds stay deterministic.
const BUNDLE_MTIME_UNIX_SECS: u64 = 1_756_252_800;

static STORE: LazyLock<AssetStore> = LazyLock::new(|| {
    let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(BUNDLE_MTIME_UNIX_SECS);
    AssetStore::new([
        Asset::new(
            "/index.html",
            include_bytes!("../assets/index.html"),
            modified,
        ),
        Asset::new(
            "/static/app.js",
            include_bytes!("../assets/static/app.js"),
            modified,
        ),
        Asset::new(
            "/static/vendor.js",
            include_bytes!("../assets/static/vendor.js"),
            modified,
        ),
        Asset::new(
            "/favicon.png",
            include_bytes!("../assets/favicon.png"),
            modified,
        ),
    ])
});

/// The embedded UI store. Built on first use, immutable afterward.
pub fn store() -> &'static AssetStore {
    &STORE
}

/// Look up an embedded asset by path.
pub fn lookup(path: &str) -> Result<&'static Asset, AssetError> {
    store().lookup(path)
}

/// Look up an asset the binary cannot run without; panics when the
/// bundle was packaged incorrectly.
pub fn must_lookup(path: &str) -> &'static Asset {
    store().must_lookup(path)
}

/// Open an embedded asset, with the directory index fallback.
pub fn open(path: &str) -> Result<AssetFile, AssetError> {
    store().open(path)
}
