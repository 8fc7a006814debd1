//! Repository contract for saving and loading progression.

use super::{ProgressionSnapshot, Result};

/// Repository for the single progression snapshot of a player.
///
/// Loaded once when a session starts and written after every change that
/// should survive a restart (battle results, purchases, resets).
pub trait ProgressionRepository: Send + Sync {
    /// Load the saved snapshot. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<ProgressionSnapshot>>;

    /// Replace the saved snapshot.
    fn save(&self, snapshot: &ProgressionSnapshot) -> Result<()>;

    /// Forget the saved snapshot.
    fn clear(&self) -> Result<()>;
}
