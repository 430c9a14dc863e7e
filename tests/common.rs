#![allow(unused)]
use std::str::FromStr;

use bitcoin::OutPoint;
use coin_control::{Candidate, CoinClass, CoinControl, Error, FeeEstimator, FeeRate};

pub fn init_logger() {
    let _ = env_logger::try_init();
}

pub fn outpoint(txid: &str, vout: u32) -> OutPoint {
    OutPoint::from_str(&format!("{}:{}", txid, vout)).unwrap()
}

pub fn outpoint_a() -> OutPoint {
    outpoint(
        "ebd9813ecebc57ff8f30797de7c205e3c7498ca950ea4341ee51a685ff2fa30a",
        0,
    )
}

pub fn outpoint_b() -> OutPoint {
    outpoint(
        "65d92ddff6b6dc72c89624a6491997714b90f6004f928d875bc0fd53f264fa85",
        1,
    )
}

pub fn outpoint_c() -> OutPoint {
    outpoint(
        "0f60fdd185542f2c6ea19030b0796051e7772b6026dd5ddccd7a2f93b73e6fc2",
        2,
    )
}

/// Coins of a fake wallet: A and B are base asset coins, C carries `ASSET1`
pub fn get_test_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(outpoint_a(), 100_000, 6, CoinClass::Standard),
        Candidate::new(outpoint_b(), 30_000, 2, CoinClass::FullyMixed),
        Candidate {
            asset: Some("ASSET1".to_string()),
            ..Candidate::new(outpoint_c(), 546, 2, CoinClass::Standard)
        },
    ]
}

/// What a transaction builder would hand to coin selection
#[derive(Debug)]
pub struct Plan {
    pub fee_rate: FeeRate,
    pub must_use: Vec<OutPoint>,
    pub may_use: Vec<OutPoint>,
}

/// Minimal transaction builder consuming a [`CoinControl`]
pub fn plan_tx<E: FeeEstimator>(
    coin_control: &CoinControl,
    candidates: Vec<Candidate>,
    amount: u64,
    estimator: &E,
) -> Result<Plan, Error> {
    let fee_rate = coin_control.resolve_fee_rate(estimator)?;
    let split = coin_control.split_candidates(candidates)?;
    split.ensure_covers(amount)?;

    Ok(Plan {
        fee_rate,
        must_use: split.must_use.iter().map(|c| c.outpoint).collect(),
        may_use: split.may_use.iter().map(|c| c.outpoint).collect(),
    })
}
