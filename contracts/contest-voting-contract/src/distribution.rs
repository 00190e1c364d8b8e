use soroban_sdk::{token, Address, Env};

use crate::errors::ContestError;

// Transfer tokens from contract
pub fn transfer_from_contract(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: &i128,
) -> Result<(), ContestError> {
    transfer(env, token, &env.current_contract_address(), to, amount)
}

// Transfer tokens to contract
pub fn transfer_to_contract(
    env: &Env,
    token: &Address,
    from: &Address,
    amount: &i128,
) -> Result<(), ContestError> {
    transfer(env, token, from, &env.current_contract_address(), amount)
}

fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: &i128,
) -> Result<(), ContestError> {
    // Nothing moves for free contests
    if *amount == 0 {
        return Ok(());
    }

    match token::Client::new(env, token).try_transfer(from, to, amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContestError::TransferFailed),
    }
}
