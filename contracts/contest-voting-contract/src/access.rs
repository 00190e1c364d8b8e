use soroban_sdk::{Address, Env};

use crate::errors::ContestError;
use crate::event::{ADMIN, CONTEST, INIT};
use crate::types::{Config, DataKey};

pub struct AccessManager;

impl AccessManager {
    /// Store the operator and settlement token. Only callable once.
    pub fn initialize(env: &Env, admin: Address, token: Address) -> Result<(), ContestError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(ContestError::AlreadyInitialized);
        }

        admin.require_auth();

        let config = Config {
            admin: admin.clone(),
            token: token.clone(),
        };
        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::ContestCount, &0u32);

        env.events().publish((CONTEST, INIT), (admin, token));
        Ok(())
    }

    pub fn get_config(env: &Env) -> Result<Config, ContestError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(ContestError::NotInitialized)
    }

    /// Require the configured admin's authorization for the current call.
    pub fn require_admin(env: &Env) -> Result<Config, ContestError> {
        let config = Self::get_config(env)?;
        config.admin.require_auth();
        Ok(config)
    }

    /// Hand operator rights to a new address.
    pub fn transfer_admin(env: &Env, new_admin: Address) -> Result<(), ContestError> {
        let mut config = Self::require_admin(env)?;
        let old_admin = config.admin;

        config.admin = new_admin.clone();
        env.storage().instance().set(&DataKey::Config, &config);

        env.events().publish((CONTEST, ADMIN), (old_admin, new_admin));
        Ok(())
    }
}
