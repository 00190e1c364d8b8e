use soroban_sdk::{log, panic_with_error, Env, Vec};

use crate::errors::ContestError;
use crate::event::{ContestStateUpdated, CONTEST, STATE};
use crate::payout::PayoutEngine;
use crate::registry::ContestRegistry;
use crate::types::ContestState;

/// Poll/act pair driven by an external automation service: `check_due`
/// reports which contests need a transition, `apply_due` performs them.
pub struct LifecycleScheduler;

impl LifecycleScheduler {
    /// Ids of contests whose current phase deadline has passed, ascending.
    pub fn check_due(env: &Env) -> (bool, Vec<u32>) {
        let now = env.ledger().timestamp();
        let mut due = Vec::new(env);

        for contest_id in ContestRegistry::active_contests(env).iter() {
            if let Ok(contest) = ContestRegistry::get_contest(env, contest_id) {
                if contest.is_due(now) {
                    due.push_back(contest_id);
                }
            }
        }

        (!due.is_empty(), due)
    }

    /// Apply the pending transition of every listed contest. The list may be
    /// stale: contests that are no longer due are skipped.
    pub fn apply_due(env: &Env, contest_ids: Vec<u32>) -> Result<(), ContestError> {
        for contest_id in contest_ids.iter() {
            let mut contest = match ContestRegistry::get_contest(env, contest_id) {
                Ok(contest) => contest,
                Err(err) => panic_with_error!(env, err),
            };
            let now = env.ledger().timestamp();

            let new_state = if contest.is_entry_due(now) {
                contest.state = ContestState::Voting;
                ContestRegistry::save_contest(env, &contest);
                ContestState::Voting
            } else if contest.is_vote_due(now) {
                PayoutEngine::determine_winners(env, contest_id)?;
                ContestState::Closed
            } else {
                log!(env, "contest {} not due, skipping", contest_id);
                continue;
            };

            log!(env, "contest {} moved to {}", contest_id, new_state as u32);

            env.events().publish(
                (CONTEST, STATE),
                ContestStateUpdated {
                    contest_id,
                    new_state,
                },
            );
        }

        Ok(())
    }
}
