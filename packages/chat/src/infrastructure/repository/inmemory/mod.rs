//! InMemory Repository 実装

mod profile;
mod room;

pub use profile::InMemoryProfileRepository;
pub use room::InMemoryRoomRepository;
