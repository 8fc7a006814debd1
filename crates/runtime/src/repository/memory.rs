//! In-memory ProgressionRepository implementation for tests and local runs.

use std::sync::RwLock;

use super::{ProgressionRepository, ProgressionSnapshot, RepositoryError, Result};

/// In-memory implementation of ProgressionRepository.
///
/// Nothing survives the process. Used when persistence is disabled.
#[derive(Default)]
pub struct InMemoryProgressionRepository {
    snapshot: RwLock<Option<ProgressionSnapshot>>,
}

impl InMemoryProgressionRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an existing snapshot, as if it had been saved before.
    pub fn with_snapshot(snapshot: ProgressionSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot)),
        }
    }
}

impl ProgressionRepository for InMemoryProgressionRepository {
    fn load(&self) -> Result<Option<ProgressionSnapshot>> {
        let snapshot = self
            .snapshot
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(snapshot.clone())
    }

    fn save(&self, snapshot: &ProgressionSnapshot) -> Result<()> {
        let mut stored = self
            .snapshot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut stored = self
            .snapshot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let repo = InMemoryProgressionRepository::new();
        assert!(repo.load().unwrap().is_none());

        let mut snapshot = ProgressionSnapshot::default();
        snapshot.gold = 75;
        repo.save(&snapshot).unwrap();
        assert_eq!(repo.load().unwrap(), Some(snapshot));

        repo.clear().unwrap();
        assert!(repo.load().unwrap().is_none());
    }
}
