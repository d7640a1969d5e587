use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};
use crate::error::{Error, ErrorCode, Result};
use crate::models::{Voter, VoteTally};
use crate::storage::{default_parties, KeyValueStore, PARTIES_KEY, VOTERS_KEY, VOTES_KEY};

/// Typed access to the three stored records.
///
/// Every mutation re-reads the whole record, changes it and writes the whole
/// record back.
#[derive(Debug)]
pub struct Registry<S> {
    store: S,
}

impl<S: KeyValueStore> Registry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Wipes every record and seeds the default party list.
    pub fn reset_session(&self) -> Result<()> {
        self.store.clear()?;
        self.seed_parties()?;
        info!("Storage reset, {} default parties seeded", default_parties().len());
        Ok(())
    }

    /// Seeds the default parties only when no party record exists.
    pub fn seed_parties(&self) -> Result<()> {
        if self.store.get(PARTIES_KEY)?.is_none() {
            self.write(PARTIES_KEY, &default_parties())?;
        }
        Ok(())
    }

    pub fn load_parties(&self) -> Result<Vec<String>> {
        Ok(self.read(PARTIES_KEY)?.unwrap_or_else(default_parties))
    }

    /// Returns `false` when the name is blank or already listed. Surrounding
    /// whitespace is not stored.
    pub fn add_party(&self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Ignoring blank party name");
            return Ok(false);
        }
        let mut parties = self.load_parties()?;
        if parties.iter().any(|p| p == name) {
            debug!("Party {:?} already listed", name);
            return Ok(false);
        }
        parties.push(name.to_string());
        self.write(PARTIES_KEY, &parties)?;
        info!("Added party {:?}", name);
        Ok(true)
    }

    pub fn delete_party(&self, name: &str) -> Result<()> {
        let mut parties = self.load_parties()?;
        match parties.iter().position(|p| p == name) {
            Some(index) => {
                parties.remove(index);
                self.write(PARTIES_KEY, &parties)?;
                info!("Deleted party {:?}", name);
                Ok(())
            }
            None => {
                warn!("Delete requested for unknown party {:?}", name);
                Err(Error::with_details(ErrorCode::NotFound, "Party not found.", name))
            }
        }
    }

    pub fn load_voters(&self) -> Result<Vec<Voter>> {
        Ok(self.read(VOTERS_KEY)?.unwrap_or_default())
    }

    pub fn save_voter(&self, voter: Voter) -> Result<()> {
        let mut voters = self.load_voters()?;
        voters.push(voter);
        self.write(VOTERS_KEY, &voters)
    }

    pub fn load_votes(&self) -> Result<VoteTally> {
        Ok(self.read(VOTES_KEY)?.unwrap_or_default())
    }

    /// Returns the party's new total.
    pub fn record_vote(&self, party: &str) -> Result<u64> {
        let mut votes = self.load_votes()?;
        let count = votes.entry(party.to_string()).or_insert(0);
        *count += 1;
        let total = *count;
        self.write(VOTES_KEY, &votes)?;
        Ok(total)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.store
            .get(key)?
            .map(|raw| serde_json::from_str(&raw).map_err(|e| Error::corrupt(key, &e)))
            .transpose()
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|e| {
            Error::with_details(ErrorCode::InvalidInput, format!("Could not encode record '{key}'"), e.to_string())
        })?;
        self.store.set(key, &raw)
    }
}
