use crumpet::Sqlite;
use std::path::{Path, PathBuf};

/// Where a test's database lives.
pub trait Setup {
    fn driver(&self) -> Sqlite;

    /// Removes anything the setup left on disk.
    fn cleanup(&self) {}
}

/// A private in-memory database per connection.
pub struct SetupMemory;

/// A database file in the temp directory, shared by every connection the
/// test opens.
pub struct SetupFile {
    path: PathBuf,
}

impl Setup for SetupMemory {
    fn driver(&self) -> Sqlite {
        Sqlite::in_memory()
    }
}

impl SetupFile {
    pub fn new() -> SetupFile {
        let name = format!("crumpet-test-{}.db", uuid::Uuid::new_v4());

        SetupFile {
            path: std::env::temp_dir().join(name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for SetupFile {
    fn default() -> SetupFile {
        SetupFile::new()
    }
}

impl Setup for SetupFile {
    fn driver(&self) -> Sqlite {
        Sqlite::open(&self.path)
    }

    fn cleanup(&self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let mut path = self.path.clone().into_os_string();
            path.push(suffix);
            let _ = std::fs::remove_file(path);
        }
    }
}
