use soroban_sdk::{contracttype, symbol_short, Address, String, Symbol, Vec};

use crate::types::ContestState;

// Symbol representing contest events.
pub const CONTEST: Symbol = symbol_short!("CONTEST");

pub const INIT: Symbol = symbol_short!("INIT");

pub const ADMIN: Symbol = symbol_short!("ADMIN");

pub const CREATED: Symbol = symbol_short!("CREATED");

pub const JOINED: Symbol = symbol_short!("JOINED");

pub const VOTED: Symbol = symbol_short!("VOTED");

// Scheduler-applied transition.
pub const STATE: Symbol = symbol_short!("STATE");

// Administrative override, never emitted by the scheduler.
pub const OVERRIDE: Symbol = symbol_short!("OVERRIDE");

pub const WINNERS: Symbol = symbol_short!("WINNERS");

pub const PRIZE: Symbol = symbol_short!("PRIZE");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContestCreated {
    pub contest_id: u32,
    pub name: String,
    pub entry_fee: i128,
    pub entry_deadline: u64,
    pub vote_deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContestJoined {
    pub contest_id: u32,
    pub participant: Address,
    pub entry_name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    pub contest_id: u32,
    pub voter: Address,
    pub entry_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContestStateUpdated {
    pub contest_id: u32,
    pub new_state: ContestState,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StateOverridden {
    pub contest_id: u32,
    pub new_state: ContestState,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinnersSelected {
    pub contest_id: u32,
    pub winners: Vec<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrizeDistributed {
    pub contest_id: u32,
    pub winner: Address,
    pub amount: i128,
    pub rank: u32,
}
