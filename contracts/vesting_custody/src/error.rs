use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-9)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-19)
    // ============================================
    /// Caller is neither the plan owner nor the admin
    Unauthorized = 10,
    /// Supplied owner is not the plan owner
    OwnerMismatch = 11,
    /// Actor is not the issuer of the issue
    IssuerMismatch = 12,
    /// Actor is not the receiver of the issue
    ReceiverMismatch = 13,

    // ============================================
    // VALIDATION ERRORS (20-29)
    // ============================================
    /// Title longer than MAX_TITLE_SIZE
    InvalidTitle = 20,
    /// Unlock interval must be in (0, MAX_LOCK_DAYS]
    InvalidInterval = 21,
    /// Unlock times must be positive
    InvalidUnlockTimes = 22,
    /// Asset symbol empty, too long, or not the asset contract's symbol
    InvalidSymbol = 23,
    /// Amount must be positive
    InvalidAmount = 24,
    /// Deposit memo has a known kind but a malformed id part
    InvalidMemo = 25,
    /// Plan fee negative or fee receiver invalid
    InvalidPlanFee = 26,

    // ============================================
    // NOT FOUND ERRORS (30-39)
    // ============================================
    /// Plan not found
    PlanNotFound = 30,
    /// Issue not found
    IssueNotFound = 31,
    /// Memo omitted the id and the sender has no matching last reference
    NoLastReference = 32,
    /// Asset contract does not answer the token interface
    AssetNotFound = 33,

    // ============================================
    // STATE ERRORS (40-49)
    // ============================================
    /// Plan is not enabled
    PlanNotEnabled = 40,
    /// Plan is not waiting for a fee payment
    PlanNotAwaitingFee = 41,
    /// Plan fee has not been paid yet
    PlanAwaitingFee = 42,
    /// Requested plan status equals the current one
    PlanStatusUnchanged = 43,
    /// Plan still has issues that are not ended
    PlanHasOpenIssues = 44,
    /// Issue has already been deposited
    IssueNotUndeposited = 45,
    /// Issue is not in NORMAL status
    IssueNotNormal = 46,
    /// Issue has already ended
    IssueEnded = 47,
    /// Issue belongs to another plan
    PlanMismatch = 48,

    // ============================================
    // AMOUNT MISMATCH ERRORS (50-59)
    // ============================================
    /// Transferred amount differs from the expected amount
    AmountMismatch = 50,
    /// Transferred asset differs from the expected asset
    AssetMismatch = 51,

    // ============================================
    // UNLOCK ERRORS (60-69)
    // ============================================
    /// Nothing new to unlock in the current period
    AlreadyUnlocked = 60,

    // ============================================
    // INTERNAL ERRORS (70-79)
    // ============================================
    /// Arithmetic overflow
    Overflow = 70,
    /// Accounting invariant broken
    InvariantViolation = 71,
}
