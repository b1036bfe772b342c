use super::SessionSnapshot;

/// Append-only, chronological store of session snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapshotHistory {
    snapshots: Vec<SessionSnapshot>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `snapshot` as the most recent entry.
    pub fn record(&mut self, snapshot: SessionSnapshot) {
        self.snapshots.push(snapshot);
        tracing::debug!(len = self.snapshots.len(), "recorded snapshot");
    }

    /// The most recently recorded snapshot, or `None` if nothing was recorded.
    pub fn last(&self) -> Option<&SessionSnapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
