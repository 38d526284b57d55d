use crate::error::Error;
use crate::events::IssueAddedEvent;
use crate::storage::Storage;
use crate::types::{Issue, IssueStatus, PlanStatus};
use crate::validation::Validator;
use soroban_sdk::{Address, Env, Symbol};

pub struct IssueRegistry;

impl IssueRegistry {
    /// Declare a grant of `amount` under an enabled plan. The vesting clock starts now;
    /// tokens arrive later through an `issue:` deposit.
    pub fn add_issue(
        env: &Env,
        issuer: &Address,
        receiver: &Address,
        plan_id: u64,
        amount: i128,
        first_unlock_days: u32,
    ) -> Result<u64, Error> {
        issuer.require_auth();

        Validator::validate_amount(amount)?;

        let mut plan = Storage::get_plan(env, plan_id)?;
        if plan.status != PlanStatus::Enabled {
            return Err(Error::PlanNotEnabled);
        }

        let issue_id = Storage::next_issue_id(env)?;
        let now = env.ledger().timestamp();

        let issue = Issue {
            issue_id,
            plan_id,
            issuer: issuer.clone(),
            receiver: receiver.clone(),
            first_unlock_days,
            issued: amount,
            unlocked: 0,
            locked: amount,
            refunded: 0,
            status: IssueStatus::Undeposited,
            issued_at: now,
            updated_at: now,
        };

        plan.open_issues = plan.open_issues.checked_add(1).ok_or(Error::Overflow)?;
        plan.updated_at = now;

        Storage::set_plan(env, &plan);
        Storage::set_issue(env, &issue);
        Storage::record_last_issue(env, issuer, issue_id);

        env.events().publish(
            (Symbol::new(env, "issue_added"), issue_id, plan_id),
            IssueAddedEvent {
                issue_id,
                plan_id,
                issuer: issue.issuer,
                receiver: issue.receiver,
                issued: amount,
                first_unlock_days,
            },
        );

        Ok(issue_id)
    }
}
