use crate::types::{EnablePolicy, IssueStatus, PlanStatus};
use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug)]
pub struct ConfigUpdatedEvent {
    pub plan_fee: i128,
    pub fee_token: Address,
    pub fee_receiver: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PolicyUpdatedEvent {
    pub policy: EnablePolicy,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PlanAddedEvent {
    pub plan_id: u64,
    pub owner: Address,
    pub title: String,
    pub asset_contract: Address,
    pub unlock_interval_days: u32,
    pub unlock_times: u32,
    pub status: PlanStatus,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PlanOwnerSetEvent {
    pub plan_id: u64,
    pub previous_owner: Address,
    pub new_owner: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PlanDeletedEvent {
    pub plan_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PlanStatusEvent {
    pub plan_id: u64,
    pub previous: PlanStatus,
    pub status: PlanStatus,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PlanFeePaidEvent {
    pub plan_id: u64,
    pub payer: Address,
    pub fee: i128,
    pub fee_receiver: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct IssueAddedEvent {
    pub issue_id: u64,
    pub plan_id: u64,
    pub issuer: Address,
    pub receiver: Address,
    pub issued: i128,
    pub first_unlock_days: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct IssueDepositedEvent {
    pub issue_id: u64,
    pub plan_id: u64,
    pub depositor: Address,
    pub amount: i128,
}

/// Published with topics `("unlock", issue_id, plan_id)`.
#[contracttype]
#[derive(Clone, Debug)]
pub struct UnlockedEvent {
    pub issue_id: u64,
    pub plan_id: u64,
    pub receiver: Address,
    pub amount: i128,
    pub total_unlocked: i128,
}

/// Published with topics `("refund", issue_id)`.
#[contracttype]
#[derive(Clone, Debug)]
pub struct RefundedEvent {
    pub issue_id: u64,
    pub plan_id: u64,
    pub issuer: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct IssueEndedEvent {
    pub issue_id: u64,
    pub plan_id: u64,
    pub status: IssueStatus,
    pub unlocked: i128,
    pub refunded: i128,
}
