//! Constant-product pair pool walkthrough.
//!
//! Demonstrates creating a pool over in-memory ledgers, providing
//! liquidity, swapping in both directions, querying prices and
//! withdrawing, with engine logs printed through `tracing-subscriber`.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=pair_amm=debug cargo run --example constant_pair
//! ```

use pair_amm::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Constant-product pair pool (x · y = k) ===\n");

    // ── 1. Identities ───────────────────────────────────────────────────
    let usdc = AssetId::from_bytes([1u8; 32]);
    let weth = AssetId::from_bytes([2u8; 32]);
    let pool_account = AccountId::from_bytes([0xAA; 32]);
    let alice = AccountId::from_bytes([0x01; 32]);
    let bob = AccountId::from_bytes([0x02; 32]);

    // ── 2. Seed ledgers and approve the pool ────────────────────────────
    let mut ledger_a = InMemoryAssetLedger::new(usdc);
    let mut ledger_b = InMemoryAssetLedger::new(weth);
    for who in [alice, bob] {
        ledger_a.mint_to(&who, Amount::new(10_000_000))?;
        ledger_b.mint_to(&who, Amount::new(10_000))?;
        ledger_a.approve(&who, &pool_account, Amount::new(10_000_000));
        ledger_b.approve(&who, &pool_account, Amount::new(10_000));
    }

    // ── 3. Create the pool ──────────────────────────────────────────────
    let config = PoolConfig::new(AssetPair::new(usdc, weth)?, pool_account)?;
    let mut pool = Pool::new(config, ledger_a, ledger_b, InMemoryClaimLedger::new())?;
    println!("Pool account: {pool_account}");

    let now = Timestamp::from_secs(1_700_000_000);
    let deadline = Deadline::at(Timestamp::from_secs(now.as_secs() + 300));

    // ── 4. First deposit: 2 000 000 USDC and 1 000 WETH ─────────────────
    let request = AddLiquidity::new(
        usdc,
        Amount::new(2_000_000),
        weth,
        Amount::new(1_000),
        alice,
        deadline,
    );
    let receipt = pool.add_liquidity(&CallContext::new(alice, now), &request)?;
    println!("\nAlice deposited, minted {} claims", receipt.minted());
    println!("WETH price in USDC: {}", pool.get_price(&weth, &usdc)?);

    // ── 5. Swap USDC for WETH and back ──────────────────────────────────
    let quoted = pool.quote_amount_out(&usdc, Amount::new(100_000))?;
    let swap = SwapExactIn::new(
        SwapPath::new(&[usdc, weth])?,
        Amount::new(100_000),
        quoted,
        bob,
        deadline,
    );
    let result = pool.swap_exact_tokens_for_tokens(&CallContext::new(bob, now), &swap)?;
    println!(
        "\nBob sold {} USDC for {} WETH (effective price {})",
        result.amount_in(),
        result.amount_out(),
        result.effective_price()?
    );

    let back = SwapExactIn::new(
        SwapPath::new(&[weth, usdc])?,
        result.amount_out(),
        Amount::ZERO,
        bob,
        deadline,
    );
    let result = pool.swap_exact_tokens_for_tokens(&CallContext::new(bob, now), &back)?;
    println!("Bob sold it back for {} USDC", result.amount_out());

    let (reserve_a, reserve_b) = pool.reserves();
    println!("\nReserves: {reserve_a} USDC / {reserve_b} WETH");
    println!("WETH price in USDC: {}", pool.get_price(&weth, &usdc)?);

    // ── 6. A swap too small to pay out is rejected without effect ───────
    let dust = SwapExactIn::new(
        SwapPath::new(&[usdc, weth])?,
        Amount::new(1_000),
        Amount::new(1),
        bob,
        deadline,
    );
    match pool.swap_exact_tokens_for_tokens(&CallContext::new(bob, now), &dust) {
        Ok(r) => println!("\nUnexpected fill: {}", r.amount_out()),
        Err(err) => println!("\nRejected ({:?}): {err}", err.kind()),
    }

    // ── 7. Withdraw everything ──────────────────────────────────────────
    let claims = pool.claim_balance_of(&alice);
    let withdrawal = RemoveLiquidity::new(usdc, weth, claims, alice, deadline);
    let out = pool.remove_liquidity(&CallContext::new(alice, now), &withdrawal)?;
    println!(
        "\nAlice burned {} claims for {} USDC and {} WETH",
        out.burned(),
        out.amount_a(),
        out.amount_b()
    );

    pool.verify_backing()?;
    println!("Pool empty: {}", pool.state().is_empty());
    println!("Events emitted: {}", pool.events().len());

    Ok(())
}
