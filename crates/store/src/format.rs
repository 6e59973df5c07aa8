//! Snapshot file format specification

use crate::Snapshot;
use serde::{Deserialize, Serialize};

/// File format version
pub const FORMAT_VERSION: u32 = 1;

/// File extension for the snapshot format
pub const FILE_EXTENSION: &str = "fcj";

/// File header for format identification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileHeader {
    /// Magic string for format identification
    pub magic: String,
    /// Format version
    pub version: u32,
}

impl FileHeader {
    pub const MAGIC: &'static str = "FLOWCANVAS";

    pub fn new() -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: FORMAT_VERSION,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.magic == Self::MAGIC && self.version <= FORMAT_VERSION
    }
}

impl Default for FileHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramFile {
    pub header: FileHeader,
    pub snapshot: Snapshot,
}

impl DiagramFile {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            header: FileHeader::new(),
            snapshot,
        }
    }
}
