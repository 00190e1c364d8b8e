use soroban_sdk::{contracttype, Address, String, Vec};

/// Persistent storage TTL in ledgers (~30 days at 5 s/ledger).
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;

/// Number of ranked winners per contest.
pub const MAX_WINNERS: u32 = 3;

/// Share of the prize pool for each rank, in percent.
pub const RANK_SHARES: [i128; MAX_WINNERS as usize] = [50, 30, 20];

/// Storage keys.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // instance()
    Config,       // Admin and settlement token
    ContestCount, // Next contest id
    Active,       // Ids of contests not yet closed, ascending

    // persistent()
    Contest(u32),          // Contest by id
    Joined(u32, Address),  // Participant has joined a contest
    Voted(u32, Address),   // Participant has voted in a contest
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Config {
    pub admin: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[repr(u32)]
pub enum ContestState {
    Open = 0,
    Voting = 1,
    Closed = 2,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Entry {
    pub id: u32,
    pub name: String,
    pub owner: Address,
    pub votes: u32,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Contest {
    pub id: u32,
    pub name: String,
    pub entry_fee: i128,
    pub entry_deadline: u64,
    pub vote_deadline: u64,
    pub state: ContestState,
    pub winners: Vec<Address>, // Rank order, filled once at close
    pub entries: Vec<Entry>,   // Submission order
}
