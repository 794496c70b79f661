//! Document store ports and the in-memory implementation

pub mod memory;
pub mod port;

pub use memory::MemoryStore;
pub use port::{ReservationStore, SettingsStore};
