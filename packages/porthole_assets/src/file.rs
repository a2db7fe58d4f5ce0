use std::io::{self, Read, Seek, SeekFrom};
use std::time::SystemTime;

/// Stat information for a virtual file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Base name of the asset (last path segment).
    pub name: String,
    /// Content length in bytes.
    pub size: u64,
    /// Modification time recorded at embed time.
    pub modified: SystemTime,
    /// Always false: the store holds no real directories.
    pub is_dir: bool,
}

/// File-like access over embedded content.
///
/// Generic static-file serving code works against this trait plus the std
/// `Read`/`Seek` it extends, so it never distinguishes embedded bytes from
/// an on-disk file.
pub trait VirtualFile: Read + Seek + Send {
    /// Stat the file.
    fn metadata(&self) -> Metadata;

    /// Directory listing. The store simulates directory-ness only to
    /// satisfy the interface; concrete assets list nothing.
    fn read_dir(&self) -> Vec<Metadata> {
        Vec::new()
    }

    /// Release the handle. There is no underlying resource, so this
    /// always succeeds.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A per-open cursor over one asset's bytes.
///
/// Handles are independent: each open gets its own position, and none of
/// them can mutate the shared content.
#[derive(Debug)]
pub struct AssetFile {
    content: &'static [u8],
    metadata: Metadata,
    pos: u64,
}

impl AssetFile {
    pub(crate) fn new(content: &'static [u8], metadata: Metadata) -> Self {
        Self {
            content,
            metadata,
            pos: 0,
        }
    }

    /// The full content, independent of the cursor.
    pub fn content(&self) -> &'static [u8] {
        self.content
    }
}

impl Read for AssetFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let start = (self.pos as usize).min(self.content.len());
        let remaining = &self.content[start..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n as u64;
        Ok(n)
    }
}

impl Seek for AssetFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (base, offset) = match pos {
            SeekFrom::Start(n) => {
                self.pos = n;
                return Ok(n);
            }
            SeekFrom::End(n) => (self.content.len() as i64, n),
            SeekFrom::Current(n) => (self.pos as i64, n),
        };
        let target = base.checked_add(offset).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "seek offset overflow")
        })?;
        if target < 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek before start of file",
            ));
        }
        self.pos = target as u64;
        Ok(self.pos)
    }
}

impl VirtualFile for AssetFile {
    fn metadata(&self) -> Metadata {
        self.metadata.clone()
    }
}
