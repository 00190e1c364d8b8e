use soroban_sdk::{Address, String};

use crate::errors::ContestError;
use crate::types::{Contest, Entry};

impl Contest {
    pub fn entry_count(&self) -> u32 {
        self.entries.len()
    }

    pub fn get_entry(&self, entry_id: u32) -> Result<Entry, ContestError> {
        self.entries.get(entry_id).ok_or(ContestError::InvalidEntryId)
    }

    /// Append a submission and return its id. Ids follow submission order.
    pub fn add_entry(&mut self, name: String, owner: Address) -> u32 {
        let entry_id = self.entries.len();
        self.entries.push_back(Entry {
            id: entry_id,
            name,
            owner,
            votes: 0,
        });
        entry_id
    }

    /// Add exactly one vote to an entry.
    pub fn record_vote(&mut self, entry_id: u32) -> Result<(), ContestError> {
        let mut entry = self.get_entry(entry_id)?;
        entry.votes += 1;
        self.entries.set(entry_id, entry);
        Ok(())
    }

    pub fn total_votes(&self) -> u32 {
        self.entries.iter().map(|entry| entry.votes).sum()
    }

    /// Entry fees collected for this contest. Derived from the entry count
    /// since every entrant paid exactly `entry_fee`.
    pub fn prize_pool(&self) -> Result<i128, ContestError> {
        self.entry_fee
            .checked_mul(self.entry_count() as i128)
            .ok_or(ContestError::PrizePoolOverflow)
    }
}
