use crate::error::Error;
use crate::types::{MAX_LOCK_DAYS, MAX_SYMBOL_SIZE, MAX_TITLE_SIZE};
use soroban_sdk::{token, Address, Env, String};

pub struct Validator;

impl Validator {
    pub fn validate_plan_params(
        title: &String,
        asset_symbol: &String,
        unlock_interval_days: u32,
        unlock_times: u32,
    ) -> Result<(), Error> {
        if title.len() > MAX_TITLE_SIZE {
            return Err(Error::InvalidTitle);
        }

        if asset_symbol.len() == 0 || asset_symbol.len() > MAX_SYMBOL_SIZE {
            return Err(Error::InvalidSymbol);
        }

        if unlock_interval_days == 0 || unlock_interval_days > MAX_LOCK_DAYS {
            return Err(Error::InvalidInterval);
        }

        if unlock_times == 0 {
            return Err(Error::InvalidUnlockTimes);
        }

        Ok(())
    }

    /// The asset contract must answer the token interface and report `asset_symbol`.
    pub fn validate_asset(
        env: &Env,
        asset_contract: &Address,
        asset_symbol: &String,
    ) -> Result<(), Error> {
        let symbol = Self::asset_symbol(env, asset_contract)?;
        if &symbol != asset_symbol {
            return Err(Error::InvalidSymbol);
        }
        Ok(())
    }

    pub fn asset_symbol(env: &Env, asset_contract: &Address) -> Result<String, Error> {
        match token::Client::new(env, asset_contract).try_symbol() {
            Ok(Ok(symbol)) => Ok(symbol),
            _ => Err(Error::AssetNotFound),
        }
    }

    pub fn validate_amount(amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(())
    }

    pub fn validate_config(env: &Env, plan_fee: i128, fee_receiver: &Address) -> Result<(), Error> {
        if plan_fee < 0 {
            return Err(Error::InvalidPlanFee);
        }

        if fee_receiver == &env.current_contract_address() {
            return Err(Error::InvalidPlanFee);
        }

        Ok(())
    }
}
