//! Flat binary image loader.
//!
//! Images are raw big-endian memory dumps, not object files: the file's
//! bytes land verbatim at address 0 and the caller supplies the entry PC.
//! The only validation is the size guard — an image must fit the 32-bit
//! address space.

use crate::error::VmError;
use crate::memory::Memory;
use std::fs;
use std::path::Path;

/// Largest loadable image: one byte short of the full 4 GiB address space.
pub const MAX_IMAGE_BYTES: u64 = u32::MAX as u64;

/// A validated binary image ready to install into memory.
#[derive(Clone, Debug)]
pub struct Image {
    data: Vec<u8>,
}

impl Image {
    /// Read an image from disk. The size is probed before the read so an
    /// oversized file is rejected without buffering it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, VmError> {
        let path = path.as_ref();
        let load_err = |source| VmError::Load {
            path: path.display().to_string(),
            source,
        };

        let len = fs::metadata(path).map_err(load_err)?.len();
        if len > MAX_IMAGE_BYTES {
            return Err(VmError::ImageTooLarge { len });
        }

        let data = fs::read(path).map_err(load_err)?;
        Ok(Self { data })
    }

    /// Wrap in-memory bytes as an image, with the same size guard.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, VmError> {
        if data.len() as u64 > MAX_IMAGE_BYTES {
            return Err(VmError::ImageTooLarge {
                len: data.len() as u64,
            });
        }
        Ok(Self { data })
    }

    /// Image length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw image bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Install the image: memory is resized to the image length and filled
    /// from it, starting at address 0. The bytes are already in target
    /// (big-endian) layout; no transformation is performed.
    pub fn load_into_memory(&self, memory: &mut Memory) {
        memory.load_image(&self.data);
    }
}
