use crate::error::Error;
use crate::types::{Config, DataKey, EnablePolicy, Issue, LastReference, Plan};
use soroban_sdk::{Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const RECORD_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub const RECORD_TTL_EXTEND: u32 = 120 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_EXTEND: u32 = 30 * DAY_IN_LEDGERS;

pub struct Storage;

impl Storage {
    // Admin
    pub fn has_admin(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Admin)
    }

    pub fn get_admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
        Self::bump_instance(env);
    }

    // Global config
    pub fn get_config(env: &Env) -> Option<Config> {
        env.storage().instance().get(&DataKey::Config)
    }

    pub fn set_config(env: &Env, config: &Config) {
        env.storage().instance().set(&DataKey::Config, config);
        Self::bump_instance(env);
    }

    /// Fee due per plan; an unconfigured contract charges nothing.
    pub fn plan_fee(env: &Env) -> i128 {
        Self::get_config(env).map(|c| c.plan_fee).unwrap_or(0)
    }

    pub fn get_enable_policy(env: &Env) -> EnablePolicy {
        env.storage()
            .instance()
            .get(&DataKey::EnablePolicy)
            .unwrap_or(EnablePolicy::Toggle)
    }

    pub fn set_enable_policy(env: &Env, policy: EnablePolicy) {
        env.storage().instance().set(&DataKey::EnablePolicy, &policy);
        Self::bump_instance(env);
    }

    // Id counters, 0 is never handed out
    pub fn next_plan_id(env: &Env) -> Result<u64, Error> {
        Self::take_next_id(env, DataKey::NextPlanId)
    }

    pub fn next_issue_id(env: &Env) -> Result<u64, Error> {
        Self::take_next_id(env, DataKey::NextIssueId)
    }

    fn take_next_id(env: &Env, key: DataKey) -> Result<u64, Error> {
        let id: u64 = env.storage().instance().get(&key).unwrap_or(1);
        let next = id.checked_add(1).ok_or(Error::Overflow)?;
        env.storage().instance().set(&key, &next);
        Ok(id)
    }

    // Plans
    pub fn get_plan(env: &Env, plan_id: u64) -> Result<Plan, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Plan(plan_id))
            .ok_or(Error::PlanNotFound)
    }

    pub fn set_plan(env: &Env, plan: &Plan) {
        let key = DataKey::Plan(plan.id);
        env.storage().persistent().set(&key, plan);
        Self::bump_record(env, &key);
    }

    pub fn remove_plan(env: &Env, plan_id: u64) {
        env.storage().persistent().remove(&DataKey::Plan(plan_id));
        Self::bump_instance(env);
    }

    // Issues
    pub fn get_issue(env: &Env, issue_id: u64) -> Result<Issue, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Issue(issue_id))
            .ok_or(Error::IssueNotFound)
    }

    pub fn set_issue(env: &Env, issue: &Issue) {
        let key = DataKey::Issue(issue.issue_id);
        env.storage().persistent().set(&key, issue);
        Self::bump_record(env, &key);
    }

    // Last-reference index
    pub fn get_last_reference(env: &Env, owner: &Address) -> Option<LastReference> {
        env.storage()
            .persistent()
            .get(&DataKey::LastReference(owner.clone()))
    }

    pub fn record_last_plan(env: &Env, owner: &Address, plan_id: u64) {
        let mut reference = Self::get_last_reference(env, owner).unwrap_or(LastReference {
            owner: owner.clone(),
            last_plan_id: 0,
            last_issue_id: 0,
        });
        reference.last_plan_id = plan_id;
        Self::set_last_reference(env, &reference);
    }

    pub fn record_last_issue(env: &Env, owner: &Address, issue_id: u64) {
        let mut reference = Self::get_last_reference(env, owner).unwrap_or(LastReference {
            owner: owner.clone(),
            last_plan_id: 0,
            last_issue_id: 0,
        });
        reference.last_issue_id = issue_id;
        Self::set_last_reference(env, &reference);
    }

    fn set_last_reference(env: &Env, reference: &LastReference) {
        let key = DataKey::LastReference(reference.owner.clone());
        env.storage().persistent().set(&key, reference);
        Self::bump_record(env, &key);
    }

    // TTL
    fn bump_record(env: &Env, key: &DataKey) {
        env.storage()
            .persistent()
            .extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
        Self::bump_instance(env);
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
    }
}
