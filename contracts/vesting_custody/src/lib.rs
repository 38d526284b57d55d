#![no_std]

mod admin;
mod deposit;
mod error;
mod events;
mod issues;
mod memo;
mod plans;
mod schedule;
mod storage;
mod types;
mod unlock;
mod validation;

pub use error::Error;
pub use types::{
    Config, DepositOutcome, EnablePolicy, Issue, IssueStatus, LastReference, Plan, PlanStatus,
    UnlockOutcome,
};

use admin::Admin;
use deposit::DepositReconciler;
use issues::IssueRegistry;
use plans::PlanRegistry;
use storage::Storage;
use unlock::UnlockEngine;

use soroban_sdk::{contract, contractimpl, Address, Env, String};

#[contract]
pub struct VestingCustody;

#[contractimpl]
impl VestingCustody {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        Admin::initialize(&env, &admin)
    }

    /// Set the per-plan creation fee. A fee of 0 lets new plans start `Enabled`.
    pub fn set_config(
        env: Env,
        plan_fee: i128,
        fee_token: Address,
        fee_receiver: Address,
    ) -> Result<(), Error> {
        Admin::set_config(&env, plan_fee, &fee_token, &fee_receiver)
    }

    pub fn set_enable_policy(env: Env, policy: EnablePolicy) -> Result<(), Error> {
        Admin::set_enable_policy(&env, policy)
    }

    // ============================================
    // PLANS
    // ============================================

    pub fn add_plan(
        env: Env,
        owner: Address,
        title: String,
        asset_contract: Address,
        asset_symbol: String,
        unlock_interval_days: u32,
        unlock_times: u32,
    ) -> Result<u64, Error> {
        PlanRegistry::add_plan(
            &env,
            &owner,
            &title,
            &asset_contract,
            &asset_symbol,
            unlock_interval_days,
            unlock_times,
        )
    }

    pub fn set_plan_owner(
        env: Env,
        caller: Address,
        owner: Address,
        plan_id: u64,
        new_owner: Address,
    ) -> Result<(), Error> {
        PlanRegistry::set_plan_owner(&env, &caller, &owner, plan_id, &new_owner)
    }

    pub fn delete_plan(env: Env, owner: Address, plan_id: u64) -> Result<(), Error> {
        PlanRegistry::delete_plan(&env, &owner, plan_id)
    }

    pub fn enable_plan(
        env: Env,
        owner: Address,
        plan_id: u64,
        enabled: bool,
    ) -> Result<PlanStatus, Error> {
        PlanRegistry::enable_plan(&env, &owner, plan_id, enabled)
    }

    // ============================================
    // ISSUES
    // ============================================

    pub fn add_issue(
        env: Env,
        issuer: Address,
        receiver: Address,
        plan_id: u64,
        amount: i128,
        first_unlock_days: u32,
    ) -> Result<u64, Error> {
        IssueRegistry::add_issue(&env, &issuer, &receiver, plan_id, amount, first_unlock_days)
    }

    // ============================================
    // DEPOSITS
    // ============================================

    /// Transfer tokens into custody. `memo` is `plan:[id]` for a plan fee,
    /// `issue:[id]` to fund an issue; anything else is kept unreconciled.
    pub fn deposit(
        env: Env,
        from: Address,
        asset_contract: Address,
        amount: i128,
        memo: String,
    ) -> Result<DepositOutcome, Error> {
        DepositReconciler::deposit(&env, &from, &asset_contract, amount, &memo)
    }

    // ============================================
    // UNLOCK & TERMINATION
    // ============================================

    pub fn unlock(
        env: Env,
        receiver: Address,
        plan_id: u64,
        issue_id: u64,
    ) -> Result<UnlockOutcome, Error> {
        UnlockEngine::unlock(&env, &receiver, plan_id, issue_id)
    }

    pub fn end_issue(
        env: Env,
        issuer: Address,
        plan_id: u64,
        issue_id: u64,
    ) -> Result<UnlockOutcome, Error> {
        UnlockEngine::end_issue(&env, &issuer, plan_id, issue_id)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn unlockable(env: Env, issue_id: u64) -> Result<i128, Error> {
        UnlockEngine::unlockable(&env, issue_id)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        Storage::get_admin(&env)
    }

    pub fn get_config(env: Env) -> Option<Config> {
        Storage::get_config(&env)
    }

    pub fn get_enable_policy(env: Env) -> EnablePolicy {
        Storage::get_enable_policy(&env)
    }

    pub fn get_plan(env: Env, plan_id: u64) -> Result<Plan, Error> {
        Storage::get_plan(&env, plan_id)
    }

    pub fn get_issue(env: Env, issue_id: u64) -> Result<Issue, Error> {
        Storage::get_issue(&env, issue_id)
    }

    pub fn get_last_reference(env: Env, owner: Address) -> Option<LastReference> {
        Storage::get_last_reference(&env, &owner)
    }
}
