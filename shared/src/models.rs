use indexmap::IndexMap;
use serde::{Serialize, Deserialize};
use std::fmt;

/// Party label to number of ballots cast for it, in first-vote order.
pub type VoteTally = IndexMap<String, u64>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    pub name: String,
    pub surname: String,
    pub gender: String,
    pub id_number: String,
}

impl fmt::Display for Voter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (ID: {})", self.name, self.surname, self.id_number)
    }
}

/// Raw contents of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub surname: String,
    pub gender: String,
    pub id_number: String,
}

impl RegistrationForm {
    pub fn into_voter(self) -> Voter {
        Voter {
            name: self.name,
            surname: self.surname,
            gender: self.gender,
            id_number: self.id_number,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Handed out by a successful registration. The voting screen is only
/// shown to a holder, and casting a vote requires one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallotPass {
    voter: Voter,
}

impl BallotPass {
    pub(crate) fn issue(voter: Voter) -> Self {
        Self { voter }
    }

    pub fn voter(&self) -> &Voter {
        &self.voter
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    pub party: String,
    pub total: u64,
}

impl VoteReceipt {
    pub fn message(&self) -> String {
        format!("Thank you for voting for {}!", self.party)
    }
}

/// One row of the admin vote count view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyLine {
    pub party: String,
    pub votes: u64,
}

impl fmt::Display for TallyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} votes", self.party, self.votes)
    }
}
