mod common;

use std::collections::HashSet;

use assert_matches::assert_matches;
use bitcoin::OutPoint;
use coin_control::{CoinControl, CoinType, Error, FeeRate};

use common::*;

fn as_set(outpoints: Vec<OutPoint>) -> HashSet<OutPoint> {
    outpoints.into_iter().collect()
}

#[test]
fn test_select_then_unselect() {
    init_logger();
    let mut coin_control = CoinControl::new();
    for outpoint in [outpoint_a(), outpoint_b(), outpoint_c()] {
        coin_control.select(outpoint);
        assert!(coin_control.is_selected(&outpoint));
        coin_control.unselect(&outpoint);
        assert!(!coin_control.is_selected(&outpoint));
    }
}

#[test]
fn test_pin_base_and_asset_outputs() {
    init_logger();
    let mut coin_control = CoinControl::new();
    coin_control.select(outpoint_a());
    coin_control.select(outpoint_b());
    coin_control.set_selected_asset("ASSET1");
    coin_control.select_asset(outpoint_c());

    assert!(coin_control.has_selected());
    assert_eq!(
        as_set(coin_control.list_selected()),
        as_set(vec![outpoint_a(), outpoint_b()])
    );
    assert_eq!(coin_control.selected_asset(), "ASSET1");
    assert!(coin_control.has_asset_selected());

    coin_control.unselect_asset(&outpoint_c());
    assert!(!coin_control.has_asset_selected());
    assert_eq!(coin_control.selected_asset(), "");
    assert_eq!(
        as_set(coin_control.list_selected()),
        as_set(vec![outpoint_a(), outpoint_b()])
    );
}

#[test]
fn test_unselect_all_clears_both_families() {
    let mut coin_control = CoinControl::new();
    coin_control.select(outpoint_a());
    coin_control.set_selected_asset("ASSET1");
    coin_control.select_asset(outpoint_c());
    coin_control.set_mixing_only(true);

    coin_control.unselect_all();
    assert!(coin_control.list_selected().is_empty());
    assert!(coin_control.list_selected_assets().is_empty());
    assert_eq!(coin_control.selected_asset(), "");
    assert!(coin_control.is_mixing_only());
}

#[test]
fn test_reset_coin_type() {
    let mut coin_control = CoinControl::new();
    coin_control.coin_type = CoinType::OnlyJoinCollateral;
    coin_control.reset(false);
    assert_eq!(coin_control.coin_type, CoinType::OnlyJoinCollateral);

    coin_control.reset(true);
    assert_eq!(coin_control.coin_type, CoinType::AllCoins);

    coin_control.set_mixing_only(true);
    coin_control.reset(true);
    assert!(!coin_control.is_mixing_only());
}

#[test]
fn test_consumer_rejects_override_without_fee_rate() {
    init_logger();
    let mut coin_control = CoinControl::new();
    coin_control.override_fee_rate = true;

    let result = plan_tx(
        &coin_control,
        get_test_candidates(),
        10_000,
        &FeeRate::from_sat_per_vb(5.0),
    );
    assert_matches!(result, Err(Error::FeeRateRequired));

    coin_control.fee_rate = Some(FeeRate::from_sat_per_vb(20.0));
    let plan = plan_tx(
        &coin_control,
        get_test_candidates(),
        10_000,
        &FeeRate::from_sat_per_vb(5.0),
    )
    .unwrap();
    assert_eq!(plan.fee_rate, FeeRate::from_sat_per_vb(20.0));
}

#[test]
fn test_consumer_only_pinned_insufficient() {
    init_logger();
    let mut coin_control = CoinControl::new();
    coin_control.allow_other_inputs = false;
    coin_control.select(outpoint_b());

    let result = plan_tx(
        &coin_control,
        get_test_candidates(),
        50_000,
        &FeeRate::from_sat_per_vb(5.0),
    );
    assert_matches!(
        result,
        Err(Error::InsufficientFunds {
            needed: 50_000,
            available: 30_000
        })
    );

    coin_control.allow_other_inputs = true;
    let plan = plan_tx(
        &coin_control,
        get_test_candidates(),
        50_000,
        &FeeRate::from_sat_per_vb(5.0),
    )
    .unwrap();
    assert_eq!(plan.must_use, vec![outpoint_b()]);
    assert_eq!(plan.may_use, vec![outpoint_a()]);
    assert_eq!(plan.fee_rate, FeeRate::from_sat_per_vb(5.0));
}

#[test]
fn test_consumer_mixing_only() {
    let mut coin_control = CoinControl::new();
    coin_control.set_mixing_only(true);

    let plan = plan_tx(
        &coin_control,
        get_test_candidates(),
        1_000,
        &FeeRate::from_sat_per_vb(2.0),
    )
    .unwrap();
    assert!(plan.must_use.is_empty());
    assert_eq!(plan.may_use, vec![outpoint_b()]);
}

#[test]
fn test_load_from_json() {
    let json = r#"{
        "allow_other_inputs": false,
        "override_fee_rate": true,
        "fee_rate": 3.5,
        "fee_estimate_mode": "conservative",
        "coin_type": 1
    }"#;
    let coin_control: CoinControl = serde_json::from_str(json).unwrap();
    assert!(!coin_control.allow_other_inputs);
    assert!(coin_control.require_all_inputs);
    assert!(coin_control.is_mixing_only());
    assert_eq!(coin_control.fee_rate, Some(FeeRate::from_sat_per_vb(3.5)));
    assert!(coin_control.check_fee_policy().is_ok());
}

#[test]
fn test_consumer_keeps_asset_outputs_out_of_base_selection() {
    init_logger();
    let mut coin_control = CoinControl::new();
    coin_control.select(outpoint_a());
    coin_control.select(outpoint_c());

    let result = plan_tx(
        &coin_control,
        get_test_candidates(),
        10_000,
        &FeeRate::from_sat_per_vb(5.0),
    );
    assert_matches!(result, Err(Error::UnknownUtxo(op)) if op == outpoint_c());
}

#[test]
fn test_consumer_ignores_duplicate_candidates() {
    let mut candidates = get_test_candidates();
    candidates.extend(get_test_candidates());

    let result = plan_tx(
        &CoinControl::new(),
        candidates,
        150_000,
        &FeeRate::from_sat_per_vb(5.0),
    );
    assert_matches!(
        result,
        Err(Error::InsufficientFunds {
            needed: 150_000,
            available: 130_000
        })
    );
}
