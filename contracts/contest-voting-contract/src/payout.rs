use soroban_sdk::{log, Address, Env, Vec};

use crate::access::AccessManager;
use crate::distribution;
use crate::errors::ContestError;
use crate::event::{PrizeDistributed, WinnersSelected, CONTEST, PRIZE, WINNERS};
use crate::registry::ContestRegistry;
use crate::types::{Contest, ContestState, Entry, MAX_WINNERS, RANK_SHARES};

pub struct PayoutEngine;

impl PayoutEngine {
    /// Close a finished contest, rank its entries and pay the top three.
    pub fn determine_winners(env: &Env, contest_id: u32) -> Result<Vec<Address>, ContestError> {
        let mut contest = ContestRegistry::get_contest(env, contest_id)?;
        contest.check_can_finalize(env)?;

        let winners = Self::select_winners(env, &contest.entries);

        contest.winners = winners.clone();
        contest.state = ContestState::Closed;
        ContestRegistry::save_contest(env, &contest);
        ContestRegistry::sync_active(env, &contest);

        // A failed transfer aborts the call and discards the writes above
        Self::distribute_prizes(env, &contest)?;

        log!(env, "contest {} closed with {} winners", contest_id, winners.len());

        env.events().publish(
            (CONTEST, WINNERS),
            WinnersSelected {
                contest_id,
                winners: winners.clone(),
            },
        );

        Ok(winners)
    }

    /// Up to three entry owners in rank order.
    ///
    /// Single pass in submission order. An entry takes the first rank that is
    /// still empty or whose vote count it strictly exceeds, pushing the lower
    /// ranks down. Ties therefore go to the earlier entry, and entries without
    /// votes fill ranks nobody else claimed.
    pub fn select_winners(env: &Env, entries: &Vec<Entry>) -> Vec<Address> {
        let mut ranks: [Option<Entry>; MAX_WINNERS as usize] = [None, None, None];

        for entry in entries.iter() {
            let slot = ranks.iter().position(|ranked| match ranked {
                Some(ranked) => entry.votes > ranked.votes,
                None => true,
            });

            if let Some(slot) = slot {
                for lower in (slot + 1..ranks.len()).rev() {
                    ranks[lower] = ranks[lower - 1].take();
                }
                ranks[slot] = Some(entry);
            }
        }

        let mut winners = Vec::new(env);
        for ranked in ranks.into_iter().flatten() {
            winners.push_back(ranked.owner);
        }
        winners
    }

    /// Percent of the pool paid to each rank. Shares of ranks nobody
    /// claimed go to the first rank. This applies to two winners as well
    /// (70/30), so the fees of every entrant are always paid out, matching
    /// the single winner case where the whole pool goes to rank 1.
    pub fn rank_shares(winner_count: u32) -> [i128; MAX_WINNERS as usize] {
        let mut shares = RANK_SHARES;
        for rank in (winner_count as usize).max(1)..shares.len() {
            shares[0] += shares[rank];
            shares[rank] = 0;
        }
        shares
    }

    /// Floor division; the remainder stays in the contract.
    pub fn prize_amount(pool: i128, share: i128) -> Result<i128, ContestError> {
        pool.checked_mul(share)
            .map(|scaled| scaled / 100)
            .ok_or(ContestError::PrizePoolOverflow)
    }

    fn distribute_prizes(env: &Env, contest: &Contest) -> Result<(), ContestError> {
        let config = AccessManager::get_config(env)?;
        let pool = contest.prize_pool()?;
        let shares = Self::rank_shares(contest.winners.len());

        for (rank, winner) in contest.winners.iter().enumerate() {
            let amount = Self::prize_amount(pool, shares[rank])?;
            if amount == 0 {
                continue;
            }

            distribution::transfer_from_contract(env, &config.token, &winner, &amount)?;

            env.events().publish(
                (CONTEST, PRIZE),
                PrizeDistributed {
                    contest_id: contest.id,
                    winner,
                    amount,
                    rank: rank as u32 + 1,
                },
            );
        }

        Ok(())
    }
}
