use soroban_sdk::{contracttype, Address, String};

// Constants
pub const MAX_TITLE_SIZE: u32 = 64;
pub const MAX_SYMBOL_SIZE: u32 = 12;
pub const MAX_MEMO_SIZE: u32 = 64;
pub const MAX_LOCK_DAYS: u32 = 365 * 10;
pub const SECONDS_PER_DAY: u64 = 86_400;

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PlanStatus {
    /// Created while a plan fee is configured, waiting for the fee deposit
    UnpaidFee = 0,
    /// Issues may be added, deposited and unlocked
    Enabled = 1,
    /// Switched off by the owner
    Disabled = 2,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IssueStatus {
    /// Declared, tokens not deposited yet
    Undeposited = 0,
    /// Deposited, unlocking on schedule
    Normal = 1,
    /// Terminated by the issuer, terminal
    Ended = 2,
}

/// What `enable_plan` writes once its checks pass.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EnablePolicy {
    /// `Enabled` or `Disabled` according to the requested flag
    Toggle = 0,
    /// Always back to `UnpaidFee`, whatever the flag
    ResetToUnpaidFee = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Amount of `fee_token` due per created plan, 0 disables the fee
    pub plan_fee: i128,
    pub fee_token: Address,
    pub fee_receiver: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Plan {
    pub id: u64,
    pub owner: Address,
    pub title: String,
    pub asset_contract: Address,
    pub asset_symbol: String,
    pub unlock_interval_days: u32,
    pub unlock_times: u32,
    pub status: PlanStatus,
    /// Sum of deposited issue amounts
    pub total_issued: i128,
    /// Sum of amounts paid out to receivers
    pub total_unlocked: i128,
    /// Sum of amounts refunded to issuers
    pub total_refunded: i128,
    /// Issues under this plan that have not ended
    pub open_issues: u32,
    pub created_at: u64,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Issue {
    pub issue_id: u64,
    pub plan_id: u64,
    pub issuer: Address,
    pub receiver: Address,
    /// Grace period before the first unlock interval starts counting
    pub first_unlock_days: u32,
    pub issued: i128,
    pub unlocked: i128,
    /// Always `issued - unlocked`
    pub locked: i128,
    /// Paid back to the issuer when the issue was ended
    pub refunded: i128,
    pub status: IssueStatus,
    pub issued_at: u64,
    pub updated_at: u64,
}

/// Most recent plan and issue created by an account, 0 when none.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LastReference {
    pub owner: Address,
    pub last_plan_id: u64,
    pub last_issue_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DepositOutcome {
    /// Fee paid, plan enabled
    PlanFee(u64),
    /// Issue funded, now unlocking
    IssueDeposit(u64),
    /// Memo not addressed to the reconciler, tokens kept
    Ignored,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnlockOutcome {
    pub issue_id: u64,
    pub plan_id: u64,
    /// Paid to the receiver by this call
    pub unlocked: i128,
    /// Paid back to the issuer by this call
    pub refunded: i128,
    pub status: IssueStatus,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    EnablePolicy,
    NextPlanId,
    NextIssueId,
    Plan(u64),              // plan_id -> Plan
    Issue(u64),             // issue_id -> Issue
    LastReference(Address), // creator -> LastReference
}
