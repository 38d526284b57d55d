#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};
use vesting_custody::{
    DepositOutcome, Error, IssueStatus, PlanStatus, VestingCustody, VestingCustodyClient,
};

// Constants
const DAY: u64 = 86_400;
const SCALE: i128 = 10_000_000;
const PLAN_FEE: i128 = 50 * SCALE;

struct TestContext {
    env: Env,
    admin: Address,
    fee_receiver: Address,
    owner: Address,
    issuer: Address,
    alice: Address,
    bob: Address,
    asset: Address,
    symbol: String,
    custody_id: Address,
}

fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let fee_receiver = Address::generate(&env);
    let owner = Address::generate(&env);
    let issuer = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let asset_admin = Address::generate(&env);

    // Deploy the vesting asset (use Stellar Asset Contract)
    let asset = env
        .register_stellar_asset_contract_v2(asset_admin)
        .address();
    let symbol = token::Client::new(&env, &asset).symbol();

    let asset_admin_client = token::StellarAssetClient::new(&env, &asset);
    asset_admin_client.mint(&owner, &(1_000 * SCALE));
    asset_admin_client.mint(&issuer, &(1_000_000 * SCALE));

    // Deploy custody and charge a fee per plan
    let custody_id = env.register(VestingCustody, ());
    let custody = VestingCustodyClient::new(&env, &custody_id);
    custody.initialize(&admin);
    custody.set_config(&PLAN_FEE, &asset, &fee_receiver);

    TestContext {
        env,
        admin,
        fee_receiver,
        owner,
        issuer,
        alice,
        bob,
        asset,
        symbol,
        custody_id,
    }
}

fn advance_days(env: &Env, days: u64) {
    env.ledger().with_mut(|li| li.timestamp += days * DAY);
}

#[test]
fn test_full_vesting_lifecycle() {
    let ctx = setup_test();
    let env = &ctx.env;
    let custody = VestingCustodyClient::new(env, &ctx.custody_id);
    let asset = token::Client::new(env, &ctx.asset);
    let memo = |text: &str| String::from_str(env, text);

    // 1. Owner creates a quarterly plan with 4 unlocks and pays the fee
    let plan_id = custody.add_plan(
        &ctx.owner,
        &memo("Seed round"),
        &ctx.asset,
        &ctx.symbol,
        &90,
        &4,
    );
    assert_eq!(custody.get_plan(&plan_id).status, PlanStatus::UnpaidFee);

    let paid = custody.deposit(&ctx.owner, &ctx.asset, &PLAN_FEE, &memo("plan:"));
    assert_eq!(paid, DepositOutcome::PlanFee(plan_id));
    assert_eq!(asset.balance(&ctx.fee_receiver), PLAN_FEE);

    // 2. Issuer grants Alice and Bob, each funded right away
    let alice_grant = 400_000 * SCALE;
    let bob_grant = 100_000 * SCALE;

    let alice_issue = custody.add_issue(&ctx.issuer, &ctx.alice, &plan_id, &alice_grant, &0);
    custody.deposit(&ctx.issuer, &ctx.asset, &alice_grant, &memo("issue:"));

    let bob_issue = custody.add_issue(&ctx.issuer, &ctx.bob, &plan_id, &bob_grant, &30);
    custody.deposit(&ctx.issuer, &ctx.asset, &bob_grant, &memo("issue:"));

    assert_eq!(asset.balance(&ctx.custody_id), alice_grant + bob_grant);
    assert_eq!(custody.get_plan(&plan_id).total_issued, alice_grant + bob_grant);

    // 3. First quarter: Alice unlocks, Bob is still inside his grace period
    advance_days(env, 90);
    let outcome = custody.unlock(&ctx.alice, &plan_id, &alice_issue);
    assert_eq!(outcome.unlocked, alice_grant / 4);
    assert_eq!(
        custody.try_unlock(&ctx.bob, &plan_id, &bob_issue),
        Err(Ok(Error::AlreadyUnlocked))
    );

    // 4. Plan changes hands; the new owner pauses and resumes it
    let new_owner = Address::generate(env);
    custody.set_plan_owner(&ctx.owner, &ctx.owner, &plan_id, &new_owner);
    custody.enable_plan(&new_owner, &plan_id, &false);
    assert_eq!(
        custody.try_unlock(&ctx.alice, &plan_id, &alice_issue),
        Err(Ok(Error::PlanNotEnabled))
    );
    custody.enable_plan(&new_owner, &plan_id, &true);

    // 5. Day 130: Bob reaches his first unlock, issuer ends Bob's grant
    advance_days(env, 40);
    assert_eq!(custody.unlockable(&bob_issue), bob_grant / 4);
    let ended = custody.end_issue(&ctx.issuer, &plan_id, &bob_issue);
    assert_eq!(ended.status, IssueStatus::Ended);
    assert_eq!(ended.unlocked, bob_grant / 4);
    assert_eq!(ended.refunded, bob_grant - bob_grant / 4);
    assert_eq!(asset.balance(&ctx.bob), bob_grant / 4);

    // 6. Alice runs to the end of the schedule
    advance_days(env, 365);
    custody.unlock(&ctx.alice, &plan_id, &alice_issue);
    assert_eq!(asset.balance(&ctx.alice), alice_grant);
    assert_eq!(custody.unlockable(&alice_issue), 0);

    // 7. Alice's issue is closed, then the admin removes the empty plan
    assert_eq!(
        custody.try_delete_plan(&new_owner, &plan_id),
        Err(Ok(Error::PlanHasOpenIssues))
    );
    custody.end_issue(&ctx.issuer, &plan_id, &alice_issue);

    let plan = custody.get_plan(&plan_id);
    assert_eq!(plan.open_issues, 0);
    assert_eq!(
        plan.total_unlocked + plan.total_refunded,
        plan.total_issued
    );
    assert_eq!(asset.balance(&ctx.custody_id), 0);

    custody.delete_plan(&new_owner, &plan_id);
    assert_eq!(
        custody.try_get_plan(&plan_id),
        Err(Ok(Error::PlanNotFound))
    );
    assert_eq!(custody.get_admin(), ctx.admin);
}

#[test]
fn test_fee_paid_by_explicit_plan_id() {
    let ctx = setup_test();
    let env = &ctx.env;
    let custody = VestingCustodyClient::new(env, &ctx.custody_id);
    let memo = |text: &str| String::from_str(env, text);

    let first = custody.add_plan(&ctx.owner, &memo("A"), &ctx.asset, &ctx.symbol, &30, &12);
    let second = custody.add_plan(&ctx.owner, &memo("B"), &ctx.asset, &ctx.symbol, &30, &12);

    // Pay for the older plan by id; the newer one stays unpaid
    custody.deposit(&ctx.owner, &ctx.asset, &PLAN_FEE, &memo("plan:1"));
    assert_eq!(custody.get_plan(&first).status, PlanStatus::Enabled);
    assert_eq!(custody.get_plan(&second).status, PlanStatus::UnpaidFee);

    custody.deposit(&ctx.owner, &ctx.asset, &PLAN_FEE, &memo("plan:"));
    assert_eq!(custody.get_plan(&second).status, PlanStatus::Enabled);
    assert_eq!(
        token::Client::new(env, &ctx.asset).balance(&ctx.fee_receiver),
        2 * PLAN_FEE
    );
}
