use soroban_sdk::{log, Address, Env, String, Vec};

use crate::access::AccessManager;
use crate::distribution;
use crate::errors::ContestError;
use crate::event::{
    ContestCreated, ContestJoined, StateOverridden, VoteCast, CONTEST, CREATED, JOINED, OVERRIDE,
    VOTED,
};
use crate::types::{Contest, ContestState, DataKey, PERSISTENT_BUMP_LEDGERS};

/// Owns every contest record and the per-contest join/vote sets.
pub struct ContestRegistry;

impl ContestRegistry {
    /// Open a new contest. Deadlines are relative to the current ledger time.
    pub fn create_contest(
        env: &Env,
        name: String,
        entry_fee: i128,
        entry_duration: u64,
        vote_duration: u64,
    ) -> Result<u32, ContestError> {
        AccessManager::require_admin(env)?;

        if entry_fee < 0 {
            return Err(ContestError::InvalidEntryFee);
        }

        let entry_deadline = env
            .ledger()
            .timestamp()
            .checked_add(entry_duration)
            .ok_or(ContestError::InvalidDuration)?;
        let vote_deadline = entry_deadline
            .checked_add(vote_duration)
            .ok_or(ContestError::InvalidDuration)?;

        let contest_id = Self::contest_count(env);

        let contest = Contest {
            id: contest_id,
            name: name.clone(),
            entry_fee,
            entry_deadline,
            vote_deadline,
            state: ContestState::Open,
            winners: Vec::new(env),
            entries: Vec::new(env),
        };

        Self::save_contest(env, &contest);
        Self::sync_active(env, &contest);
        env.storage()
            .instance()
            .set(&DataKey::ContestCount, &(contest_id + 1));

        env.events().publish(
            (CONTEST, CREATED),
            ContestCreated {
                contest_id,
                name,
                entry_fee,
                entry_deadline,
                vote_deadline,
            },
        );

        Ok(contest_id)
    }

    /// Register a paid submission. Returns the new entry id.
    pub fn join_contest(
        env: &Env,
        participant: Address,
        contest_id: u32,
        entry_name: String,
        paid_amount: i128,
    ) -> Result<u32, ContestError> {
        participant.require_auth();

        let config = AccessManager::get_config(env)?;
        let mut contest = Self::get_contest(env, contest_id)?;

        let already_joined = Self::has_joined(env, contest_id, &participant);
        contest.check_can_join(env, already_joined, paid_amount)?;

        // Fee stays in the contract as part of the prize pool
        distribution::transfer_to_contract(env, &config.token, &participant, &paid_amount)?;

        let entry_id = contest.add_entry(entry_name.clone(), participant.clone());
        Self::save_contest(env, &contest);
        Self::set_flag(env, &DataKey::Joined(contest_id, participant.clone()));

        env.events().publish(
            (CONTEST, JOINED),
            ContestJoined {
                contest_id,
                participant,
                entry_name,
            },
        );

        Ok(entry_id)
    }

    /// Cast the voter's single vote for an entry.
    pub fn vote_for_entry(
        env: &Env,
        voter: Address,
        contest_id: u32,
        entry_id: u32,
    ) -> Result<(), ContestError> {
        voter.require_auth();

        let mut contest = Self::get_contest(env, contest_id)?;

        let already_voted = Self::has_voted(env, contest_id, &voter);
        contest.check_can_vote(env, entry_id, already_voted)?;

        contest.record_vote(entry_id)?;
        Self::save_contest(env, &contest);
        Self::set_flag(env, &DataKey::Voted(contest_id, voter.clone()));

        env.events().publish(
            (CONTEST, VOTED),
            VoteCast {
                contest_id,
                voter,
                entry_id,
            },
        );

        Ok(())
    }

    /// Administrative escape hatch: force a contest into `Voting` or `Closed`
    /// without time checks, winner selection or payout.
    pub fn change_state_manually(
        env: &Env,
        contest_id: u32,
        state: ContestState,
    ) -> Result<(), ContestError> {
        AccessManager::require_admin(env)?;

        if !state.is_override_target() {
            return Err(ContestError::InvalidStateOverride);
        }

        let mut contest = Self::get_contest(env, contest_id)?;
        contest.state = state;
        Self::save_contest(env, &contest);
        Self::sync_active(env, &contest);

        log!(env, "contest {} state overridden to {}", contest_id, state as u32);

        env.events().publish(
            (CONTEST, OVERRIDE),
            StateOverridden {
                contest_id,
                new_state: state,
            },
        );

        Ok(())
    }

    pub fn get_contest(env: &Env, contest_id: u32) -> Result<Contest, ContestError> {
        env.storage()
            .persistent()
            .get(&DataKey::Contest(contest_id))
            .ok_or(ContestError::InvalidContestId)
    }

    pub fn save_contest(env: &Env, contest: &Contest) {
        let key = DataKey::Contest(contest.id);
        env.storage().persistent().set(&key, contest);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
    }

    /// Number of contests ever created; also the next contest id.
    pub fn contest_count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::ContestCount)
            .unwrap_or(0)
    }

    /// Ids of contests that are not closed, ascending. Closed contests never
    /// become due again, so the scheduler only looks here.
    pub fn active_contests(env: &Env) -> Vec<u32> {
        env.storage()
            .instance()
            .get(&DataKey::Active)
            .unwrap_or(Vec::new(env))
    }

    /// Keep the contest in the active index exactly while it is not closed.
    pub fn sync_active(env: &Env, contest: &Contest) {
        let mut active = Self::active_contests(env);

        match (active.binary_search(contest.id), contest.is_closed()) {
            (Ok(index), true) => {
                active.remove(index);
            }
            (Err(index), false) => active.insert(index, contest.id),
            _ => return,
        }

        env.storage().instance().set(&DataKey::Active, &active);
    }

    pub fn has_joined(env: &Env, contest_id: u32, participant: &Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Joined(contest_id, participant.clone()))
    }

    pub fn has_voted(env: &Env, contest_id: u32, participant: &Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Voted(contest_id, participant.clone()))
    }

    fn set_flag(env: &Env, key: &DataKey) {
        env.storage().persistent().set(key, &true);
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
    }
}
