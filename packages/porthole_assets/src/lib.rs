//! In-memory virtual filesystem for embedded web UI assets.
//!
//! A build step compiles the web UI and the resulting files are embedded
//! into the binary as byte slices. This crate holds those slices in a
//! path-keyed store and presents them through a file-like interface, so a
//! static-file HTTP handler can serve them without knowing the content
//! never touched disk.

mod error;
mod file;
mod store;

pub use error::AssetError;
pub use file::{AssetFile, Metadata, VirtualFile};
pub use store::{Asset, AssetStore, INDEX_DOCUMENT};
