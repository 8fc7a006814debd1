//! Repository layer for saved progression.
//!
//! Repositories handle data that CHANGES between battles: gold, unlocks, hero
//! levels, and the owned inventory. Static content (heroes, bosses, items) is
//! handled by oracles, not repositories.

mod error;
mod file;
mod memory;
mod snapshot;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileProgressionRepository;
pub use memory::InMemoryProgressionRepository;
pub use snapshot::{CharacterProgress, ProgressionSnapshot};
pub use traits::ProgressionRepository;
