use std::path::{Path, PathBuf};

use crate::error::describe_status;

/// Result of copying one item.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ItemOutcome {
    /// The copy program exited successfully.
    Copied,
    /// The copy program reported a failure.
    Failed {
        /// Exit code, or `None` when the process was killed by a signal.
        status: Option<i32>,
    },
}

/// Outcome and captured output for one copy target.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemReport {
    relative_path: PathBuf,
    outcome: ItemOutcome,
    output: String,
}

impl ItemReport {
    pub(crate) fn new(relative_path: PathBuf, outcome: ItemOutcome, output: String) -> Self {
        Self {
            relative_path,
            outcome,
            output,
        }
    }

    /// Root-relative path of the item.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Whether the item was copied.
    #[must_use]
    pub const fn outcome(&self) -> &ItemOutcome {
        &self.outcome
    }

    /// Combined stdout and stderr of the copy invocation.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Reports whether the item was copied.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.outcome == ItemOutcome::Copied
    }

    /// One-line description of a failure, `None` for copied items.
    #[must_use]
    pub fn failure_summary(&self) -> Option<String> {
        match self.outcome {
            ItemOutcome::Copied => None,
            ItemOutcome::Failed { status } => Some(format!(
                "failed to copy '{}': {}",
                self.relative_path.display(),
                describe_status(status, &self.output)
            )),
        }
    }
}

/// Ordered per-item results of a transfer batch.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TransferReport {
    items: Vec<ItemReport>,
}

impl TransferReport {
    pub(crate) fn push(&mut self, item: ItemReport) {
        self.items.push(item);
    }

    /// All item reports in copy order.
    #[must_use]
    pub fn items(&self) -> &[ItemReport] {
        &self.items
    }

    /// Number of items attempted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Reports whether nothing was attempted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items copied successfully.
    #[must_use]
    pub fn copied(&self) -> usize {
        self.items.iter().filter(|item| item.is_copied()).count()
    }

    /// Items that failed, in copy order.
    pub fn failures(&self) -> impl Iterator<Item = &ItemReport> {
        self.items.iter().filter(|item| !item.is_copied())
    }

    /// Reports whether every attempted item was copied.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.items.iter().all(ItemReport::is_copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_copied_and_failed_items() {
        let mut report = TransferReport::default();
        assert!(report.is_success());

        report.push(ItemReport::new("a".into(), ItemOutcome::Copied, String::new()));
        report.push(ItemReport::new(
            "b".into(),
            ItemOutcome::Failed { status: Some(1) },
            "scp: b: Permission denied\n".into(),
        ));

        assert_eq!(report.len(), 2);
        assert_eq!(report.copied(), 1);
        assert!(!report.is_success());

        let failed: Vec<_> = report.failures().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(
            failed[0].failure_summary().as_deref(),
            Some("failed to copy 'b': exit status 1: scp: b: Permission denied")
        );
        assert!(report.items()[0].failure_summary().is_none());
    }
}
