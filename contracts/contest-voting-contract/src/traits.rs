use crate::{errors::ContestError, types::*};
use soroban_sdk::{Address, Env, String, Vec};

/// Interface for the Contest contract.
pub trait ContestTrait {
    /// Set the operator allowed to manage contests and the token entry fees
    /// and prizes are paid in.
    fn initialize(env: Env, admin: Address, token: Address) -> Result<(), ContestError>;

    fn get_config(env: Env) -> Result<Config, ContestError>;

    /// Hand operator rights to `new_admin`. Admin only.
    fn transfer_admin(env: Env, new_admin: Address) -> Result<(), ContestError>;

    /// Open a new contest. Admin only.
    ///
    /// # Arguments
    /// * `name` - Display name, not required to be unique
    /// * `entry_fee` - Exact amount every participant pays to join
    /// * `entry_duration` - Seconds from now until entries close
    /// * `vote_duration` - Seconds from the entry deadline until voting closes
    ///
    /// # Returns
    /// The id of the created contest
    ///
    /// # Errors
    /// * `InvalidEntryFee` - If the fee is negative
    /// * `InvalidDuration` - If a deadline does not fit in a timestamp
    fn create_contest(
        env: Env,
        name: String,
        entry_fee: i128,
        entry_duration: u64,
        vote_duration: u64,
    ) -> Result<u32, ContestError>;

    /// Pay the entry fee and register a named submission.
    ///
    /// # Errors
    /// * `InvalidContestId` - If the contest doesn't exist
    /// * `EntryPeriodEnded` - If the entry deadline has passed
    /// * `ContestNotOpen` - If the contest is not accepting entries
    /// * `AlreadyJoined` - If the participant already has an entry
    /// * `IncorrectFee` - If `paid_amount` differs from the entry fee
    /// * `TransferFailed` - If the fee could not be collected
    fn join_contest(
        env: Env,
        participant: Address,
        contest_id: u32,
        entry_name: String,
        paid_amount: i128,
    ) -> Result<u32, ContestError>;

    /// Cast the voter's one vote in a contest.
    ///
    /// # Errors
    /// * `InvalidContestId` - If the contest doesn't exist
    /// * `InvalidEntryId` - If the entry doesn't exist
    /// * `VotingClosed` - If the vote deadline has passed
    /// * `NotInVotingPhase` - If the contest is not in its voting phase
    /// * `AlreadyVoted` - If the voter already voted in this contest
    fn vote_for_entry(
        env: Env,
        voter: Address,
        contest_id: u32,
        entry_id: u32,
    ) -> Result<(), ContestError>;

    /// Force a contest into `Voting` or `Closed`, skipping time checks, winner
    /// selection and payout. Admin only; not part of the automated lifecycle.
    fn change_state_manually(
        env: Env,
        contest_id: u32,
        state: ContestState,
    ) -> Result<(), ContestError>;

    /// Contests due for a transition, in ascending id order.
    fn check_due(env: Env) -> (bool, Vec<u32>);

    /// Perform the transitions of the given contests, skipping those no longer
    /// due. Panics on an unknown contest id.
    fn apply_due(env: Env, contest_ids: Vec<u32>) -> Result<(), ContestError>;

    /// Rank entries, close the contest and pay the top three.
    ///
    /// # Errors
    /// * `ContestNotYetEnded` - If voting is not over
    /// * `NoEntries` - If nobody joined
    /// * `TransferFailed` - If a prize could not be paid
    fn determine_winners(env: Env, contest_id: u32) -> Result<Vec<Address>, ContestError>;

    fn get_contest(env: Env, contest_id: u32) -> Result<Contest, ContestError>;

    fn get_contest_count(env: Env) -> u32;

    fn get_entry_count(env: Env, contest_id: u32) -> Result<u32, ContestError>;

    fn get_entry(env: Env, contest_id: u32, entry_id: u32) -> Result<Entry, ContestError>;

    fn get_winners(env: Env, contest_id: u32) -> Result<Vec<Address>, ContestError>;

    fn get_prize_pool(env: Env, contest_id: u32) -> Result<i128, ContestError>;

    fn has_joined(env: Env, contest_id: u32, participant: Address) -> bool;

    fn has_voted(env: Env, contest_id: u32, participant: Address) -> bool;
}
