pub mod error;
pub mod models;
pub mod registry;
pub mod station;
pub mod storage;
pub mod validation;

pub use error::{Error, ErrorCode, Result};
pub use models::*;
pub use registry::Registry;
pub use station::{cast_vote, delete_party_with, register_voter, start_session, tally_lines, voter_roster, StationError};
pub use storage::{KeyValueStore, MemoryStore, DEFAULT_PARTIES};
pub use validation::ValidationError;
