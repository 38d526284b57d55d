use crate::error::Error;
use crate::events::{IssueDepositedEvent, PlanFeePaidEvent};
use crate::memo::{parse_memo, DepositMemo};
use crate::storage::Storage;
use crate::types::{DepositOutcome, IssueStatus, PlanStatus};
use crate::validation::Validator;
use soroban_sdk::{log, token, Address, Env, String, Symbol};

pub struct DepositReconciler;

impl DepositReconciler {
    /// Accept `amount` of `asset_contract` from `from` and match it against the
    /// obligation named by `memo`.
    ///
    /// # Errors
    /// - `InvalidAmount`: amount must be positive
    /// - `InvalidMemo`: `plan`/`issue` memo with a malformed id part
    /// - `NoLastReference`: id omitted and the sender created no plan/issue
    /// - `PlanNotFound` / `IssueNotFound`: resolved id does not exist
    /// - `PlanNotAwaitingFee` / `IssueNotUndeposited` / `PlanNotEnabled`: wrong status
    /// - `AssetMismatch` / `AmountMismatch`: transfer does not match the obligation
    pub fn deposit(
        env: &Env,
        from: &Address,
        asset_contract: &Address,
        amount: i128,
        memo: &String,
    ) -> Result<DepositOutcome, Error> {
        if from == &env.current_contract_address() {
            return Ok(DepositOutcome::Ignored);
        }

        from.require_auth();

        Validator::validate_amount(amount)?;

        match parse_memo(memo)? {
            DepositMemo::Plan(plan_id) => {
                Self::pay_plan_fee(env, from, asset_contract, amount, plan_id)
            }
            DepositMemo::Issue(issue_id) => {
                Self::fund_issue(env, from, asset_contract, amount, issue_id)
            }
            DepositMemo::Unrecognized => {
                Self::pull(env, from, asset_contract, amount);
                log!(env, "deposit kept without reconciliation: {} {}", from.clone(), amount);
                Ok(DepositOutcome::Ignored)
            }
        }
    }

    fn pay_plan_fee(
        env: &Env,
        from: &Address,
        asset_contract: &Address,
        amount: i128,
        plan_id: Option<u64>,
    ) -> Result<DepositOutcome, Error> {
        let config = match Storage::get_config(env) {
            Some(config) if config.plan_fee > 0 => config,
            _ => return Err(Error::AmountMismatch),
        };

        if asset_contract != &config.fee_token {
            return Err(Error::AssetMismatch);
        }

        if amount != config.plan_fee {
            return Err(Error::AmountMismatch);
        }

        let plan_id = match plan_id {
            Some(id) => id,
            None => Self::last_plan_id(env, from)?,
        };

        let mut plan = Storage::get_plan(env, plan_id)?;
        if plan.status != PlanStatus::UnpaidFee {
            return Err(Error::PlanNotAwaitingFee);
        }

        Self::pull(env, from, asset_contract, amount);
        token::Client::new(env, asset_contract).transfer(
            &env.current_contract_address(),
            &config.fee_receiver,
            &amount,
        );

        plan.status = PlanStatus::Enabled;
        plan.updated_at = env.ledger().timestamp();
        Storage::set_plan(env, &plan);

        env.events().publish(
            (Symbol::new(env, "plan_fee_paid"), plan_id),
            PlanFeePaidEvent {
                plan_id,
                payer: from.clone(),
                fee: amount,
                fee_receiver: config.fee_receiver,
            },
        );

        Ok(DepositOutcome::PlanFee(plan_id))
    }

    fn fund_issue(
        env: &Env,
        from: &Address,
        asset_contract: &Address,
        amount: i128,
        issue_id: Option<u64>,
    ) -> Result<DepositOutcome, Error> {
        let issue_id = match issue_id {
            Some(id) => id,
            None => Self::last_issue_id(env, from)?,
        };

        let mut issue = Storage::get_issue(env, issue_id)?;
        if issue.status != IssueStatus::Undeposited {
            return Err(Error::IssueNotUndeposited);
        }

        let mut plan = Storage::get_plan(env, issue.plan_id)?;
        if plan.status != PlanStatus::Enabled {
            return Err(Error::PlanNotEnabled);
        }

        if asset_contract != &plan.asset_contract {
            return Err(Error::AssetMismatch);
        }

        if Validator::asset_symbol(env, asset_contract)? != plan.asset_symbol {
            return Err(Error::AssetMismatch);
        }

        if amount != issue.issued {
            return Err(Error::AmountMismatch);
        }

        Self::pull(env, from, asset_contract, amount);

        let now = env.ledger().timestamp();
        plan.total_issued = plan
            .total_issued
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        plan.updated_at = now;

        issue.status = IssueStatus::Normal;
        issue.updated_at = now;

        Storage::set_plan(env, &plan);
        Storage::set_issue(env, &issue);

        env.events().publish(
            (Symbol::new(env, "issue_deposited"), issue_id, issue.plan_id),
            IssueDepositedEvent {
                issue_id,
                plan_id: issue.plan_id,
                depositor: from.clone(),
                amount,
            },
        );

        Ok(DepositOutcome::IssueDeposit(issue_id))
    }

    fn last_plan_id(env: &Env, from: &Address) -> Result<u64, Error> {
        Storage::get_last_reference(env, from)
            .map(|r| r.last_plan_id)
            .filter(|id| *id != 0)
            .ok_or(Error::NoLastReference)
    }

    fn last_issue_id(env: &Env, from: &Address) -> Result<u64, Error> {
        Storage::get_last_reference(env, from)
            .map(|r| r.last_issue_id)
            .filter(|id| *id != 0)
            .ok_or(Error::NoLastReference)
    }

    /// Move the transferred tokens into custody.
    fn pull(env: &Env, from: &Address, asset_contract: &Address, amount: i128) {
        token::Client::new(env, asset_contract).transfer(
            from,
            &env.current_contract_address(),
            &amount,
        );
    }
}
