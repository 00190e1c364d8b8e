use crate::access::AccessManager;
use crate::errors::ContestError;
use crate::payout::PayoutEngine;
use crate::registry::ContestRegistry;
use crate::scheduler::LifecycleScheduler;
use crate::traits::ContestTrait;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

#[contract]
pub struct ContestContract;

#[contractimpl]
impl ContestTrait for ContestContract {
    fn initialize(env: Env, admin: Address, token: Address) -> Result<(), ContestError> {
        AccessManager::initialize(&env, admin, token)
    }

    fn get_config(env: Env) -> Result<Config, ContestError> {
        AccessManager::get_config(&env)
    }

    fn transfer_admin(env: Env, new_admin: Address) -> Result<(), ContestError> {
        AccessManager::transfer_admin(&env, new_admin)
    }

    fn create_contest(
        env: Env,
        name: String,
        entry_fee: i128,
        entry_duration: u64,
        vote_duration: u64,
    ) -> Result<u32, ContestError> {
        ContestRegistry::create_contest(&env, name, entry_fee, entry_duration, vote_duration)
    }

    fn join_contest(
        env: Env,
        participant: Address,
        contest_id: u32,
        entry_name: String,
        paid_amount: i128,
    ) -> Result<u32, ContestError> {
        ContestRegistry::join_contest(&env, participant, contest_id, entry_name, paid_amount)
    }

    fn vote_for_entry(
        env: Env,
        voter: Address,
        contest_id: u32,
        entry_id: u32,
    ) -> Result<(), ContestError> {
        ContestRegistry::vote_for_entry(&env, voter, contest_id, entry_id)
    }

    fn change_state_manually(
        env: Env,
        contest_id: u32,
        state: ContestState,
    ) -> Result<(), ContestError> {
        ContestRegistry::change_state_manually(&env, contest_id, state)
    }

    fn check_due(env: Env) -> (bool, Vec<u32>) {
        LifecycleScheduler::check_due(&env)
    }

    fn apply_due(env: Env, contest_ids: Vec<u32>) -> Result<(), ContestError> {
        LifecycleScheduler::apply_due(&env, contest_ids)
    }

    fn determine_winners(env: Env, contest_id: u32) -> Result<Vec<Address>, ContestError> {
        PayoutEngine::determine_winners(&env, contest_id)
    }

    fn get_contest(env: Env, contest_id: u32) -> Result<Contest, ContestError> {
        ContestRegistry::get_contest(&env, contest_id)
    }

    fn get_contest_count(env: Env) -> u32 {
        ContestRegistry::contest_count(&env)
    }

    fn get_entry_count(env: Env, contest_id: u32) -> Result<u32, ContestError> {
        Ok(ContestRegistry::get_contest(&env, contest_id)?.entry_count())
    }

    fn get_entry(env: Env, contest_id: u32, entry_id: u32) -> Result<Entry, ContestError> {
        ContestRegistry::get_contest(&env, contest_id)?.get_entry(entry_id)
    }

    fn get_winners(env: Env, contest_id: u32) -> Result<Vec<Address>, ContestError> {
        Ok(ContestRegistry::get_contest(&env, contest_id)?.winners)
    }

    fn get_prize_pool(env: Env, contest_id: u32) -> Result<i128, ContestError> {
        ContestRegistry::get_contest(&env, contest_id)?.prize_pool()
    }

    fn has_joined(env: Env, contest_id: u32, participant: Address) -> bool {
        ContestRegistry::has_joined(&env, contest_id, &participant)
    }

    fn has_voted(env: Env, contest_id: u32, participant: Address) -> bool {
        ContestRegistry::has_voted(&env, contest_id, &participant)
    }
}
