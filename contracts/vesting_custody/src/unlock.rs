use crate::error::Error;
use crate::events::{IssueEndedEvent, RefundedEvent, UnlockedEvent};
use crate::schedule;
use crate::storage::Storage;
use crate::types::{Issue, IssueStatus, Plan, PlanStatus, UnlockOutcome};
use soroban_sdk::{log, token, Address, Env, Symbol};

pub struct UnlockEngine;

impl UnlockEngine {
    /// Pay the receiver everything unlocked since the last withdrawal.
    pub fn unlock(
        env: &Env,
        receiver: &Address,
        plan_id: u64,
        issue_id: u64,
    ) -> Result<UnlockOutcome, Error> {
        receiver.require_auth();
        Self::settle(env, receiver, plan_id, issue_id, false)
    }

    /// Pay out what is unlocked so far, refund the rest to the issuer and close the issue.
    pub fn end_issue(
        env: &Env,
        issuer: &Address,
        plan_id: u64,
        issue_id: u64,
    ) -> Result<UnlockOutcome, Error> {
        issuer.require_auth();
        Self::settle(env, issuer, plan_id, issue_id, true)
    }

    /// Amount an `unlock` call would pay right now.
    pub fn unlockable(env: &Env, issue_id: u64) -> Result<i128, Error> {
        let issue = Storage::get_issue(env, issue_id)?;
        if issue.status != IssueStatus::Normal {
            return Ok(0);
        }
        let plan = Storage::get_plan(env, issue.plan_id)?;
        let total = Self::total_unlockable(env, &plan, &issue)?;
        Ok(total - issue.unlocked)
    }

    /// Cumulative unlockable amount at the current ledger time, bounded by
    /// `issue.unlocked <= total <= issue.issued`.
    fn total_unlockable(env: &Env, plan: &Plan, issue: &Issue) -> Result<i128, Error> {
        let now = env.ledger().timestamp();
        let days = schedule::elapsed_days(issue.issued_at, now).ok_or(Error::InvariantViolation)?;
        let periods = schedule::unlocked_periods(
            days,
            issue.first_unlock_days,
            plan.unlock_interval_days,
            plan.unlock_times,
        )
        .ok_or(Error::InvariantViolation)?;
        let total = schedule::total_unlockable(issue.issued, periods, plan.unlock_times)
            .ok_or(Error::Overflow)?;

        if total < issue.unlocked || total > issue.issued {
            return Err(Error::InvariantViolation);
        }
        Ok(total)
    }

    fn settle(
        env: &Env,
        actor: &Address,
        plan_id: u64,
        issue_id: u64,
        is_end_action: bool,
    ) -> Result<UnlockOutcome, Error> {
        let mut issue = Storage::get_issue(env, issue_id)?;
        if issue.plan_id != plan_id {
            return Err(Error::PlanMismatch);
        }

        let mut plan = Storage::get_plan(env, plan_id)?;
        if plan.status != PlanStatus::Enabled {
            return Err(Error::PlanNotEnabled);
        }

        if is_end_action {
            if actor != &issue.issuer {
                return Err(Error::IssuerMismatch);
            }
            if issue.status == IssueStatus::Ended {
                return Err(Error::IssueEnded);
            }
        } else {
            if actor != &issue.receiver {
                return Err(Error::ReceiverMismatch);
            }
            if issue.status != IssueStatus::Normal {
                return Err(Error::IssueNotNormal);
            }
        }

        let now = env.ledger().timestamp();
        let mut newly_unlocked: i128 = 0;
        let mut refunded: i128 = 0;

        // Undeposited issues hold nothing in custody: `unlocked` carries over unchanged.
        if issue.status == IssueStatus::Normal {
            let total = Self::total_unlockable(env, &plan, &issue)?;
            newly_unlocked = total - issue.unlocked;

            if newly_unlocked == 0 && !is_end_action {
                return Err(Error::AlreadyUnlocked);
            }

            if is_end_action {
                refunded = issue.issued - total;
            }

            plan.total_unlocked = plan
                .total_unlocked
                .checked_add(newly_unlocked)
                .ok_or(Error::Overflow)?;
            plan.total_refunded = plan
                .total_refunded
                .checked_add(refunded)
                .ok_or(Error::Overflow)?;
            let settled = plan
                .total_unlocked
                .checked_add(plan.total_refunded)
                .ok_or(Error::Overflow)?;
            if settled > plan.total_issued {
                return Err(Error::InvariantViolation);
            }

            let asset = token::Client::new(env, &plan.asset_contract);
            let custody = env.current_contract_address();
            if newly_unlocked > 0 {
                asset.transfer(&custody, &issue.receiver, &newly_unlocked);
            }
            if refunded > 0 {
                asset.transfer(&custody, &issue.issuer, &refunded);
            }

            issue.unlocked = total;
            issue.locked = issue.issued - total;
        } else {
            log!(env, "issue ended before deposit: {}", issue_id);
        }

        if is_end_action {
            issue.status = IssueStatus::Ended;
            issue.refunded = refunded;
            plan.open_issues = plan
                .open_issues
                .checked_sub(1)
                .ok_or(Error::InvariantViolation)?;
        }

        issue.updated_at = now;
        plan.updated_at = now;
        Storage::set_plan(env, &plan);
        Storage::set_issue(env, &issue);

        if newly_unlocked > 0 {
            env.events().publish(
                (Symbol::new(env, "unlock"), issue_id, plan_id),
                UnlockedEvent {
                    issue_id,
                    plan_id,
                    receiver: issue.receiver.clone(),
                    amount: newly_unlocked,
                    total_unlocked: issue.unlocked,
                },
            );
        }

        if refunded > 0 {
            env.events().publish(
                (Symbol::new(env, "refund"), issue_id),
                RefundedEvent {
                    issue_id,
                    plan_id,
                    issuer: issue.issuer.clone(),
                    amount: refunded,
                },
            );
        }

        if is_end_action {
            env.events().publish(
                (Symbol::new(env, "issue_ended"), issue_id, plan_id),
                IssueEndedEvent {
                    issue_id,
                    plan_id,
                    status: issue.status,
                    unlocked: issue.unlocked,
                    refunded,
                },
            );
        }

        Ok(UnlockOutcome {
            issue_id,
            plan_id,
            unlocked: newly_unlocked,
            refunded,
            status: issue.status,
        })
    }
}
