use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    Running,
    Passed,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pending => write!(f, "Pending"),
            Status::Running => write!(f, "Running"),
            Status::Passed => write!(f, "Passed"),
            Status::Failed => write!(f, "Failed"),
        }
    }
}

impl Status {
    /// All statuses in list order (see `sort_order`).
    pub const ALL: [Status; 4] = [
        Status::Running,
        Status::Failed,
        Status::Pending,
        Status::Passed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Running => "running",
            Status::Passed => "passed",
            Status::Failed => "failed",
        }
    }

    /// Returns sort order (lower = higher priority in list)
    pub fn sort_order(&self) -> u8 {
        match self {
            Status::Running => 0,
            Status::Failed => 1,
            Status::Pending => 2,
            Status::Passed => 3,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct TestCase {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: Status,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Aggregate counts over the live case list.
#[derive(Debug, Default, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub running: usize,
    pub failed: usize,
    pub pending: usize,
    pub passed: usize,
}

impl Summary {
    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Running => self.running,
            Status::Failed => self.failed,
            Status::Pending => self.pending,
            Status::Passed => self.passed,
        }
    }
}

/// Read-only projection of the bench: sorted cases plus aggregate counts.
/// Recomputed on demand, never stored.
pub struct BenchView {
    pub cases: Vec<TestCase>,
    pub summary: Summary,
}

/// Sort cases for display: status rank first, most recently updated first
/// within a rank. The sort is stable, so exact-timestamp ties keep their
/// relative order.
pub fn sorted_cases(cases: &[TestCase]) -> Vec<TestCase> {
    let mut sorted = cases.to_vec();
    sorted.sort_by(|a, b| {
        a.status
            .sort_order()
            .cmp(&b.status.sort_order())
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
    sorted
}

/// Single pass over the case list accumulating one counter per status.
pub fn summarize(cases: &[TestCase]) -> Summary {
    cases.iter().fold(Summary::default(), |mut acc, case| {
        acc.total += 1;
        match case.status {
            Status::Running => acc.running += 1,
            Status::Failed => acc.failed += 1,
            Status::Pending => acc.pending += 1,
            Status::Passed => acc.passed += 1,
        }
        acc
    })
}

/// The in-memory test bench. One instance is shared across all handlers;
/// everything lives and dies with the process.
pub struct Bench {
    cases: Mutex<Vec<TestCase>>,
    next_id: AtomicU64,
}

impl Default for Bench {
    fn default() -> Self {
        Self::new()
    }
}

impl Bench {
    pub fn new() -> Self {
        Self {
            cases: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn mint_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        let generator = block_id::BlockId::new(block_id::Alphabet::alphanumeric(), 7741, 5);
        generator
            .encode_string(n)
            .unwrap_or_else(|| n.to_string())
    }

    /// Add a new case with status `Pending`. Returns `None` without touching
    /// the list when the trimmed name is empty.
    pub fn add(&self, name: &str, description: &str) -> Option<TestCase> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let case = TestCase {
            id: self.mint_id(),
            name: name.to_string(),
            description: description.trim().to_string(),
            status: Status::Pending,
            updated_at: OffsetDateTime::now_utc(),
        };

        let mut cases = self.cases.lock();
        cases.insert(0, case.clone());
        Some(case)
    }

    /// Replace the status and timestamp of the matching case. Any status may
    /// move to any other status. Returns `false` for unknown ids.
    pub fn set_status(&self, id: &str, status: Status) -> bool {
        let mut cases = self.cases.lock();
        match cases.iter_mut().find(|c| c.id == id) {
            Some(case) => {
                case.status = status;
                case.updated_at = OffsetDateTime::now_utc();
                true
            }
            None => false,
        }
    }

    /// Remove the matching case. Returns `false` for unknown ids.
    pub fn remove(&self, id: &str) -> bool {
        let mut cases = self.cases.lock();
        let before = cases.len();
        cases.retain(|c| c.id != id);
        cases.len() != before
    }

    pub fn get(&self, id: &str) -> Option<TestCase> {
        self.cases.lock().iter().find(|c| c.id == id).cloned()
    }

    /// The live list in insertion order (newest first).
    pub fn snapshot(&self) -> Vec<TestCase> {
        self.cases.lock().clone()
    }

    pub fn view(&self) -> BenchView {
        let cases = self.cases.lock();
        BenchView {
            summary: summarize(&cases),
            cases: sorted_cases(&cases),
        }
    }
}
