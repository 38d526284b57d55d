use crate::error::Error;
use crate::events::{ConfigUpdatedEvent, PolicyUpdatedEvent};
use crate::storage::Storage;
use crate::types::{Config, EnablePolicy};
use crate::validation::Validator;
use soroban_sdk::{Address, Env, Symbol};

pub struct Admin;

impl Admin {
    /// Initialize contract with admin
    pub fn initialize(env: &Env, admin: &Address) -> Result<(), Error> {
        if Storage::has_admin(env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        Storage::set_admin(env, admin);
        Ok(())
    }

    /// Load the admin and require its signature
    pub fn require_admin(env: &Env) -> Result<Address, Error> {
        let admin = Storage::get_admin(env)?;
        admin.require_auth();
        Ok(admin)
    }

    pub fn set_config(
        env: &Env,
        plan_fee: i128,
        fee_token: &Address,
        fee_receiver: &Address,
    ) -> Result<(), Error> {
        Self::require_admin(env)?;

        Validator::validate_config(env, plan_fee, fee_receiver)?;

        let config = Config {
            plan_fee,
            fee_token: fee_token.clone(),
            fee_receiver: fee_receiver.clone(),
        };
        Storage::set_config(env, &config);

        env.events().publish(
            (Symbol::new(env, "config_updated"),),
            ConfigUpdatedEvent {
                plan_fee,
                fee_token: config.fee_token,
                fee_receiver: config.fee_receiver,
            },
        );

        Ok(())
    }

    pub fn set_enable_policy(env: &Env, policy: EnablePolicy) -> Result<(), Error> {
        Self::require_admin(env)?;

        Storage::set_enable_policy(env, policy);

        env.events().publish(
            (Symbol::new(env, "policy_updated"),),
            PolicyUpdatedEvent { policy },
        );

        Ok(())
    }
}
