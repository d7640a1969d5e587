//! Operations behind the registration, voting and admin screens.

use tracing::{info, warn};
use crate::error::{Error, ErrorCode, Result};
use crate::models::{BallotPass, RegistrationForm, TallyLine, Voter, VoteReceipt};
use crate::registry::Registry;
use crate::storage::KeyValueStore;
use crate::validation::{validate_registration, validate_selection, ValidationError};

pub const NO_VOTERS_MESSAGE: &str = "No registered voters.";
pub const NO_VOTES_MESSAGE: &str = "No votes cast yet.";
pub const REGISTERED_MESSAGE: &str = "Registration successful! You can now vote.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StationError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] Error),
}

impl StationError {
    pub fn user_message(&self) -> String {
        match self {
            StationError::Invalid(e) => e.to_string(),
            StationError::Storage(e) => e.user_message().to_string(),
        }
    }
}

/// Prepares storage when the page loads.
pub fn start_session<S: KeyValueStore>(registry: &Registry<S>, reset: bool) -> Result<()> {
    if reset {
        registry.reset_session()
    } else {
        registry.seed_parties()
    }
}

pub fn register_voter<S: KeyValueStore>(
    registry: &Registry<S>,
    form: RegistrationForm,
    current_year: i32,
) -> std::result::Result<BallotPass, StationError> {
    let voters = registry.load_voters()?;
    if let Err(e) = validate_registration(&form.id_number, current_year, &voters) {
        warn!("Registration rejected: {}", e);
        return Err(e.into());
    }
    let voter = form.into_voter();
    registry.save_voter(voter.clone())?;
    info!("Registered voter, {} on the roll", voters.len() + 1);
    Ok(BallotPass::issue(voter))
}

/// Votes are not tied to the pass holder; one pass may vote repeatedly.
pub fn cast_vote<S: KeyValueStore>(
    registry: &Registry<S>,
    _pass: &BallotPass,
    selection: &str,
) -> std::result::Result<VoteReceipt, StationError> {
    let party = validate_selection(selection)?;
    let total = registry.record_vote(party)?;
    info!("Vote recorded for {:?}", party);
    Ok(VoteReceipt { party: party.to_string(), total })
}

/// Deletes the party named by `ask`. A cancelled prompt (`None`) matches no
/// party and fails with `NotFound` like any unknown name.
pub fn delete_party_with<S, F>(registry: &Registry<S>, ask: F) -> Result<String>
where
    S: KeyValueStore,
    F: FnOnce() -> Option<String>,
{
    let Some(name) = ask() else {
        warn!("Party deletion prompt cancelled");
        return Err(Error::new(ErrorCode::NotFound, "Party not found."));
    };
    registry.delete_party(&name)?;
    Ok(name)
}

pub fn voter_roster<S: KeyValueStore>(registry: &Registry<S>) -> Result<Vec<String>> {
    Ok(registry.load_voters()?.iter().map(Voter::to_string).collect())
}

pub fn tally_lines<S: KeyValueStore>(registry: &Registry<S>) -> Result<Vec<TallyLine>> {
    Ok(registry
        .load_votes()?
        .into_iter()
        .map(|(party, votes)| TallyLine { party, votes })
        .collect())
}
