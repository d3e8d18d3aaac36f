//! Integration tests for the reference sizing and pyramid scenarios.
//!
//! These tests drive the public API end to end: domain services directly,
//! then the same requests through the batch evaluator.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sizing_engine::{
    Config, Direction, EngineOutcomeDto, EngineResponseDto, ErrorCode, EvaluateBatchUseCase,
    LeverageSafety, OrderSide, OrderType, PlanningError, PyramidPlanner, PyramidRequest,
    SizingCalculator, SizingError, TradeRiskParameters, TrancheKind,
};

fn scenario_b() -> PyramidRequest {
    PyramidRequest {
        balance: dec!(100000),
        risk_percent: dec!(1),
        stop_price: dec!(29000),
        leverage: dec!(10),
        top_price: None,
        bottom_price: dec!(29500),
        live_price: dec!(30000),
        levels: 2,
        immediate_fill_pct: dec!(20),
        risk_shape: dec!(1),
    }
}

#[test]
fn test_scenario_a_sizing() {
    let params = TradeRiskParameters {
        risk_percent: dec!(1),
        leverage: dec!(10),
        entry_price: dec!(30000),
        stop_loss_price: dec!(29000),
    };

    let result = SizingCalculator::new().size(dec!(100000), &params).unwrap();

    assert_eq!(result.direction, Direction::Long);
    assert_eq!(result.risk_amount.amount(), dec!(1000.00));
    assert_eq!(result.position_size.amount(), dec!(1.000000));
    assert_eq!(result.notional_value.amount(), dec!(30000.00));
    assert_eq!(result.margin_required.amount(), dec!(3000.00));
    assert_eq!(result.max_safe_leverage, dec!(30.00));
    assert!(result.leverage_safe);
    assert_eq!(result.leverage_safety(), LeverageSafety::Safe);
    assert!(!result.exceeds_balance(dec!(100000)));
}

#[test]
fn test_scenario_a_serialized_fields() {
    let params = TradeRiskParameters {
        risk_percent: dec!(1),
        leverage: dec!(10),
        entry_price: dec!(30000),
        stop_loss_price: dec!(29000),
    };
    let result = SizingCalculator::new().size(dec!(100000), &params).unwrap();
    let json = serde_json::to_value(result).unwrap();

    assert_eq!(json["direction"], "long");
    assert_eq!(json["risk_amount"], "1000.00");
    assert_eq!(json["position_size"], "1.000000");
    assert_eq!(json["margin_required"], "3000.00");
    assert_eq!(json["leverage_safe"], true);
}

#[test]
fn test_entry_equal_to_stop_is_invalid_price() {
    let params = TradeRiskParameters {
        risk_percent: dec!(1),
        leverage: dec!(10),
        entry_price: dec!(30000),
        stop_loss_price: dec!(30000),
    };

    let err = SizingCalculator::new().size(dec!(100000), &params).unwrap_err();
    assert!(matches!(err, SizingError::InvalidPrice { .. }));
}

#[test]
fn test_scenario_b_pyramid() {
    let plan = PyramidPlanner::new().plan(&scenario_b()).unwrap();

    assert_eq!(plan.side, Direction::Long);
    assert_eq!(plan.tranches.len(), 3);
    assert_eq!(plan.tranches[0].kind, TrancheKind::Market);
    assert_eq!(plan.limit_tranches().count(), 2);

    let total: Decimal = plan.tranches.iter().map(|t| t.risk.amount()).sum();
    assert!((total - dec!(1000.00)).abs() < dec!(0.01));

    let nearest_top = plan.tranches[1];
    let nearest_bottom = plan.tranches[2];
    assert_eq!(nearest_bottom.price, dec!(29500));
    assert!(nearest_bottom.risk > nearest_top.risk);

    // (800 / 3) / 750 and (1600 / 3) / 500, rounded to 6 dp
    assert_eq!(nearest_top.quantity.amount(), dec!(0.355556));
    assert_eq!(nearest_bottom.quantity.amount(), dec!(1.066667));
}

#[test]
fn test_scenario_c_degenerate_stop() {
    let request = PyramidRequest {
        bottom_price: dec!(29000),
        ..scenario_b()
    };

    let err = PyramidPlanner::new().plan(&request).unwrap_err();
    let PlanningError::DegenerateStop { kind, level, price } = err else {
        panic!("expected DegenerateStop, got {err}");
    };
    assert_eq!(kind, TrancheKind::Limit);
    assert_eq!(level, 2);
    assert_eq!(price, dec!(29000));
}

#[test]
fn test_empty_plan_has_zero_totals() {
    let request = PyramidRequest {
        levels: 0,
        immediate_fill_pct: Decimal::ZERO,
        ..scenario_b()
    };

    let plan = PyramidPlanner::new().plan(&request).unwrap();
    assert!(plan.is_empty());
    assert!(plan.totals.risk.is_zero());
    assert!(plan.totals.notional.is_zero());
    assert!(plan.totals.margin.is_zero());
}

#[test]
fn test_batch_evaluates_all_scenarios() {
    let document = r#"[
        {"kind": "sizing", "balance": 100000, "risk_percent": 1, "leverage": 10,
         "entry_price": 30000, "stop_loss_price": 29000, "symbol": "BTCUSDT"},
        {"kind": "pyramid", "balance": 100000, "risk_percent": 1, "stop_price": 29000,
         "leverage": 10, "bottom_price": 29500, "live_price": 30000, "levels": 2,
         "immediate_fill_pct": 20, "risk_shape": 1, "symbol": "BTCUSDT"},
        {"kind": "pyramid", "balance": 100000, "risk_percent": 1, "stop_price": 29000,
         "leverage": 10, "bottom_price": 29000, "live_price": 30000, "levels": 2,
         "immediate_fill_pct": 20, "risk_shape": 1}
    ]"#;

    let outcomes = EvaluateBatchUseCase::new(&Config::default())
        .execute(document)
        .unwrap();
    assert_eq!(outcomes.len(), 3);

    let EngineOutcomeDto::Ok(sizing) = &outcomes[0] else {
        panic!("scenario A should succeed");
    };
    let EngineResponseDto::Sizing(sizing) = sizing.as_ref() else {
        panic!("expected a sizing response");
    };
    assert_eq!(sizing.result.position_size.amount(), dec!(1));
    assert_eq!(sizing.order_intents[0].side, OrderSide::Buy);
    assert_eq!(sizing.order_intents[0].order_type, OrderType::Limit);

    let EngineOutcomeDto::Ok(pyramid) = &outcomes[1] else {
        panic!("scenario B should succeed");
    };
    let EngineResponseDto::Pyramid(pyramid) = pyramid.as_ref() else {
        panic!("expected a pyramid response");
    };
    assert_eq!(pyramid.order_intents.len(), 3);
    assert_eq!(pyramid.order_intents[0].entry_price, None);
    assert_eq!(pyramid.order_intents[2].entry_price, Some(dec!(29500)));

    let EngineOutcomeDto::Error(error) = &outcomes[2] else {
        panic!("scenario C should fail");
    };
    assert_eq!(error.code, ErrorCode::DegenerateStop);
    assert_eq!(error.details["level"], "2");
}

#[test]
fn test_batch_output_shape() {
    let outcomes = EvaluateBatchUseCase::default()
        .execute(r#"{"kind": "sizing", "balance": 100000, "entry_price": 100, "stop_loss_price": 110}"#)
        .unwrap();
    let json = serde_json::to_value(&outcomes[0]).unwrap();

    assert_eq!(json["ok"]["kind"], "sizing");
    assert_eq!(json["ok"]["direction"], "short");
    assert_eq!(json["ok"]["margin_exceeds_balance"], false);
    assert!(json["ok"].get("order_intents").is_none());
}
