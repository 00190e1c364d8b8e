use soroban_sdk::Env;

use crate::{errors::ContestError, types::*};

impl Contest {
    pub fn is_open(&self) -> bool {
        self.state == ContestState::Open
    }

    pub fn is_voting(&self) -> bool {
        self.state == ContestState::Voting
    }

    pub fn is_closed(&self) -> bool {
        self.state == ContestState::Closed
    }

    /// Entry period is over but the contest still accepts entries.
    pub fn is_entry_due(&self, now: u64) -> bool {
        self.is_open() && now >= self.entry_deadline
    }

    /// Voting period is over but winners were not selected yet.
    pub fn is_vote_due(&self, now: u64) -> bool {
        self.is_voting() && now >= self.vote_deadline
    }

    pub fn is_due(&self, now: u64) -> bool {
        self.is_entry_due(now) || self.is_vote_due(now)
    }

    /// Join preconditions, first failure wins. Membership is checked by the
    /// caller since it lives outside the contest record.
    pub fn check_can_join(
        &self,
        env: &Env,
        already_joined: bool,
        paid_amount: i128,
    ) -> Result<(), ContestError> {
        if env.ledger().timestamp() >= self.entry_deadline {
            return Err(ContestError::EntryPeriodEnded);
        }

        if !self.is_open() {
            return Err(ContestError::ContestNotOpen);
        }

        if already_joined {
            return Err(ContestError::AlreadyJoined);
        }

        // Exact amount only, overpayment is rejected too
        if paid_amount != self.entry_fee {
            return Err(ContestError::IncorrectFee);
        }

        Ok(())
    }

    pub fn check_can_vote(
        &self,
        env: &Env,
        entry_id: u32,
        already_voted: bool,
    ) -> Result<(), ContestError> {
        if entry_id >= self.entry_count() {
            return Err(ContestError::InvalidEntryId);
        }

        if env.ledger().timestamp() >= self.vote_deadline {
            return Err(ContestError::VotingClosed);
        }

        if !self.is_voting() {
            return Err(ContestError::NotInVotingPhase);
        }

        if already_voted {
            return Err(ContestError::AlreadyVoted);
        }

        Ok(())
    }

    /// Winner selection needs a finished voting phase with at least one entry.
    pub fn check_can_finalize(&self, env: &Env) -> Result<(), ContestError> {
        if !self.is_voting() {
            return Err(ContestError::ContestNotYetEnded);
        }

        if self.entries.is_empty() {
            return Err(ContestError::NoEntries);
        }

        if env.ledger().timestamp() < self.vote_deadline {
            return Err(ContestError::ContestNotYetEnded);
        }

        Ok(())
    }
}

impl ContestState {
    /// States reachable through the administrative override.
    pub fn is_override_target(&self) -> bool {
        matches!(self, ContestState::Voting | ContestState::Closed)
    }
}
