use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContestError {
    // Setup
    NotInitialized = 101,
    AlreadyInitialized = 102,

    // Validation
    InvalidContestId = 201,
    InvalidEntryId = 202,
    IncorrectFee = 203,
    AlreadyJoined = 204,
    AlreadyVoted = 205,
    InvalidEntryFee = 206,
    InvalidDuration = 207,
    InvalidStateOverride = 208,

    // Lifecycle
    EntryPeriodEnded = 301,
    ContestNotOpen = 302,
    VotingClosed = 303,
    NotInVotingPhase = 304,
    ContestNotYetEnded = 305,
    NoEntries = 306,

    // Funds
    TransferFailed = 401,
    PrizePoolOverflow = 402,
}
