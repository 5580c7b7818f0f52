use log::debug;

use super::{Pid, Ticks};

/// One of the eight workspace operations that produce process records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    CreateFolder,
    AddFile,
    WriteContent,
    ReadContent,
    RenameFile,
    DeleteFile,
    SearchFile,
    BackupProject,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::CreateFolder => "Create Folder",
            Self::AddFile => "Add File",
            Self::WriteContent => "Write Content",
            Self::ReadContent => "Read Content",
            Self::RenameFile => "Rename File",
            Self::DeleteFile => "Delete File",
            Self::SearchFile => "Search File",
            Self::BackupProject => "Backup Project",
        }
    }

    /// Fixed priority per action type. Higher value means higher priority.
    pub fn priority(self) -> u32 {
        match self {
            Self::CreateFolder => 5,
            Self::AddFile | Self::BackupProject => 4,
            Self::WriteContent | Self::RenameFile => 3,
            Self::ReadContent | Self::DeleteFile => 2,
            Self::SearchFile => 1,
        }
    }

    /// Simulated CPU cost of the action. Content-sized for reads and writes,
    /// fixed for everything else. Always at least 1.
    pub fn burst_time(self, byte_count: usize) -> Ticks {
        match self {
            Self::CreateFolder => 2,
            Self::BackupProject => 3,
            Self::WriteContent | Self::ReadContent => byte_count as Ticks / 5 + 1,
            Self::AddFile | Self::RenameFile | Self::DeleteFile | Self::SearchFile => 1,
        }
    }
}

/// One logged action, modeled as a synthetic process. Immutable once
/// appended.
#[derive(Debug, Clone)]
pub struct ProcessRecord {
    pub pid: Pid,
    pub action: ActionKind,
    pub burst_time: Ticks,
    /// Equals the record's 0-based creation index; records arrive one tick
    /// apart in creation order.
    pub arrival_time: Ticks,
    pub priority: u32,
}

/// Append-only, creation-ordered record of every workspace action. The sole
/// source of truth for what gets scheduled; records are never mutated,
/// removed, or reordered.
#[derive(Debug, Default)]
pub struct ProcessLog {
    records: Vec<ProcessRecord>,
}

impl ProcessLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the record for one completed (or attempted) workspace action.
    /// `byte_count` sizes the burst for content reads and writes and is
    /// ignored by the fixed-cost actions.
    pub fn append(&mut self, action: ActionKind, byte_count: usize) -> &ProcessRecord {
        let index = self.records.len();
        let record = ProcessRecord {
            pid: index as Pid + 1,
            action,
            burst_time: action.burst_time(byte_count),
            arrival_time: index as Ticks,
            priority: action.priority(),
        };
        debug_assert!(record.burst_time >= 1, "burst time must be positive");
        debug!(
            "log append pid={} action={:?} burst={} priority={}",
            record.pid, record.action, record.burst_time, record.priority
        );
        self.records.push(record);
        &self.records[index]
    }

    /// All records in creation order. Schedulers treat this as read-only.
    pub fn snapshot(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
