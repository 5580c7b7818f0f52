use std::fs::{self, File, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use log::info;

use crate::core::log::{ActionKind, ProcessLog};

/// The producer side of the process log: a project directory plus the log
/// itself. Every operation performs the real filesystem call and appends
/// exactly one record, whether or not the I/O succeeded.
pub struct Workspace {
    root: PathBuf,
    log: ProcessLog,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            log: ProcessLog::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn log(&self) -> &ProcessLog {
        &self.log
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.txt"))
    }

    /// Create the project folder and point the workspace at it. Returns
    /// false when the folder already existed and is being reused.
    pub fn create_project(&mut self, root: impl Into<PathBuf>) -> io::Result<bool> {
        self.root = root.into();
        let result = match fs::create_dir(&self.root) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e),
        };
        info!("project folder set to {}", self.root.display());
        self.log.append(ActionKind::CreateFolder, 0);
        result
    }

    /// Create an empty `<name>.txt` inside the project folder.
    pub fn add_file(&mut self, name: &str) -> io::Result<()> {
        let result = File::create(self.file_path(name)).map(|_| ());
        self.log.append(ActionKind::AddFile, 0);
        result
    }

    /// Append `content` to the file. The record's burst time scales with the
    /// number of bytes written.
    pub fn write_content(&mut self, name: &str, content: &str) -> io::Result<()> {
        let result = OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.file_path(name))
            .and_then(|mut file| file.write_all(content.as_bytes()));
        self.log.append(ActionKind::WriteContent, content.len());
        result
    }

    /// Read the whole file back. The record's burst time scales with the
    /// number of bytes read; a failed read logs a minimal burst.
    pub fn read_content(&mut self, name: &str) -> io::Result<String> {
        let result = fs::read_to_string(self.file_path(name));
        let byte_count = result.as_ref().map(|s| s.len()).unwrap_or(0);
        self.log.append(ActionKind::ReadContent, byte_count);
        result
    }

    pub fn rename_file(&mut self, old: &str, new: &str) -> io::Result<()> {
        let result = fs::rename(self.file_path(old), self.file_path(new));
        self.log.append(ActionKind::RenameFile, 0);
        result
    }

    pub fn delete_file(&mut self, name: &str) -> io::Result<()> {
        let result = fs::remove_file(self.file_path(name));
        self.log.append(ActionKind::DeleteFile, 0);
        result
    }

    /// Existence check. Missing files are a normal answer, not an error.
    pub fn search_file(&mut self, name: &str) -> bool {
        let found = self.file_path(name).is_file();
        self.log.append(ActionKind::SearchFile, 0);
        found
    }

    /// Create `<root>_backup` next to the project folder and copy every
    /// regular file into it. Returns the number of files copied.
    pub fn backup_project(&mut self) -> io::Result<usize> {
        let result = self.copy_project_files();
        if let Ok(copied) = &result {
            info!("backup copied {copied} files");
        }
        self.log.append(ActionKind::BackupProject, 0);
        result
    }

    pub fn backup_path(&self) -> PathBuf {
        let mut name = self
            .root
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push("_backup");
        self.root.with_file_name(name)
    }

    fn copy_project_files(&self) -> io::Result<usize> {
        let backup = self.backup_path();
        match fs::create_dir(&backup) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e),
        }

        let mut copied = 0;
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                fs::copy(entry.path(), backup.join(entry.file_name()))?;
                copied += 1;
            }
        }
        Ok(copied)
    }
}
