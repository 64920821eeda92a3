//! FileSystem port - read-only queries the deploy flow needs
//!
//! Mutations (copy, chmod) go through [`CommandRunner`](super::CommandRunner)
//! so they can be elevated; this port only answers questions about paths.

use std::path::Path;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;
}
