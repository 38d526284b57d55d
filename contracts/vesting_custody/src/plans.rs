use crate::admin::Admin;
use crate::error::Error;
use crate::events::{PlanAddedEvent, PlanDeletedEvent, PlanOwnerSetEvent, PlanStatusEvent};
use crate::storage::Storage;
use crate::types::{EnablePolicy, Plan, PlanStatus};
use crate::validation::Validator;
use soroban_sdk::{Address, Env, String, Symbol};

pub struct PlanRegistry;

impl PlanRegistry {
    /// Create a plan; it starts in `UnpaidFee` whenever a plan fee is configured.
    pub fn add_plan(
        env: &Env,
        owner: &Address,
        title: &String,
        asset_contract: &Address,
        asset_symbol: &String,
        unlock_interval_days: u32,
        unlock_times: u32,
    ) -> Result<u64, Error> {
        owner.require_auth();

        Validator::validate_plan_params(title, asset_symbol, unlock_interval_days, unlock_times)?;
        Validator::validate_asset(env, asset_contract, asset_symbol)?;

        let plan_id = Storage::next_plan_id(env)?;
        let now = env.ledger().timestamp();
        let status = if Storage::plan_fee(env) != 0 {
            PlanStatus::UnpaidFee
        } else {
            PlanStatus::Enabled
        };

        let plan = Plan {
            id: plan_id,
            owner: owner.clone(),
            title: title.clone(),
            asset_contract: asset_contract.clone(),
            asset_symbol: asset_symbol.clone(),
            unlock_interval_days,
            unlock_times,
            status,
            total_issued: 0,
            total_unlocked: 0,
            total_refunded: 0,
            open_issues: 0,
            created_at: now,
            updated_at: now,
        };
        Storage::set_plan(env, &plan);
        Storage::record_last_plan(env, owner, plan_id);

        env.events().publish(
            (Symbol::new(env, "plan_added"), plan_id),
            PlanAddedEvent {
                plan_id,
                owner: plan.owner,
                title: plan.title,
                asset_contract: plan.asset_contract,
                unlock_interval_days,
                unlock_times,
                status,
            },
        );

        Ok(plan_id)
    }

    /// Hand a plan to `new_owner`; `caller` must be the current owner or the admin.
    pub fn set_plan_owner(
        env: &Env,
        caller: &Address,
        owner: &Address,
        plan_id: u64,
        new_owner: &Address,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut plan = Storage::get_plan(env, plan_id)?;
        if owner != &plan.owner {
            return Err(Error::OwnerMismatch);
        }

        if caller != &plan.owner {
            let admin = Storage::get_admin(env).map_err(|_| Error::Unauthorized)?;
            if caller != &admin {
                return Err(Error::Unauthorized);
            }
        }

        let previous_owner = plan.owner.clone();
        plan.owner = new_owner.clone();
        plan.updated_at = env.ledger().timestamp();
        Storage::set_plan(env, &plan);

        env.events().publish(
            (Symbol::new(env, "plan_owner_set"), plan_id),
            PlanOwnerSetEvent {
                plan_id,
                previous_owner,
                new_owner: new_owner.clone(),
            },
        );

        Ok(())
    }

    /// Admin-only removal; refused while any issue under the plan is still open.
    pub fn delete_plan(env: &Env, owner: &Address, plan_id: u64) -> Result<(), Error> {
        Admin::require_admin(env)?;

        let plan = Storage::get_plan(env, plan_id)?;
        if owner != &plan.owner {
            return Err(Error::OwnerMismatch);
        }

        if plan.open_issues > 0 {
            return Err(Error::PlanHasOpenIssues);
        }

        Storage::remove_plan(env, plan_id);

        env.events().publish(
            (Symbol::new(env, "plan_deleted"), plan_id),
            PlanDeletedEvent {
                plan_id,
                owner: plan.owner,
            },
        );

        Ok(())
    }

    /// Switch a paid plan on or off. The written status follows the configured `EnablePolicy`.
    pub fn enable_plan(
        env: &Env,
        owner: &Address,
        plan_id: u64,
        enabled: bool,
    ) -> Result<PlanStatus, Error> {
        owner.require_auth();

        let mut plan = Storage::get_plan(env, plan_id)?;
        if owner != &plan.owner {
            return Err(Error::OwnerMismatch);
        }

        if plan.status == PlanStatus::UnpaidFee {
            return Err(Error::PlanAwaitingFee);
        }

        let requested = if enabled {
            PlanStatus::Enabled
        } else {
            PlanStatus::Disabled
        };
        if plan.status == requested {
            return Err(Error::PlanStatusUnchanged);
        }

        let status = match Storage::get_enable_policy(env) {
            EnablePolicy::Toggle => requested,
            EnablePolicy::ResetToUnpaidFee => PlanStatus::UnpaidFee,
        };

        let previous = plan.status;
        plan.status = status;
        plan.updated_at = env.ledger().timestamp();
        Storage::set_plan(env, &plan);

        env.events().publish(
            (Symbol::new(env, "plan_status"), plan_id),
            PlanStatusEvent {
                plan_id,
                previous,
                status,
            },
        );

        Ok(status)
    }
}
