//! Continuous token mint/burn scenarios and price growth runs

use bancor_formula::{
    format_units, parse_ether, ContinuousToken, FormulaError, PriceGrowthSimulator,
    SimulationConfig, U256,
};
use rust_decimal_macros::dec;

fn dec_u256(s: &str) -> U256 {
    U256::from_dec_str(s).unwrap()
}

#[test]
fn test_mint_then_burn_reward() {
    let one = parse_ether("1").unwrap();
    let mut token = ContinuousToken::new(500_000, one, one).unwrap();

    let quoted = token.mint_reward(one).unwrap();
    let receipt = token.mint(one).unwrap();
    assert_eq!(receipt.minted_amount, quoted);
    assert_eq!(receipt.minted_amount, dec_u256("414213562373095048"));
    assert_eq!(token.reserve_balance(), parse_ether("2").unwrap());
    assert_eq!(token.total_supply(), one + receipt.minted_amount);

    let receipt = token.burn(receipt.minted_amount).unwrap();
    assert_eq!(receipt.refund_amount, dec_u256("999999999999999998"));
    assert_eq!(token.total_supply(), one);
    assert_eq!(token.reserve_balance(), dec_u256("1000000000000000002"));
}

#[test]
fn test_rejected_operations_keep_state() {
    let one = parse_ether("1").unwrap();
    let mut token = ContinuousToken::new(500_000, one, one).unwrap();
    let snapshot = *token.state();

    assert!(matches!(
        token.burn(parse_ether("1.5").unwrap()),
        Err(FormulaError::InsufficientSupply { .. })
    ));
    assert!(matches!(
        token.mint(U256::zero()),
        Err(FormulaError::InvalidAmount { .. })
    ));
    assert_eq!(*token.state(), snapshot);
}

#[test]
fn test_default_price_growth() {
    let expected = [
        ("9946584245134932516", "1005370261141777808"),
        ("9847441025334348016", "1015492245576608790"),
        ("9758195777940519543", "1024779603480195143"),
        ("9677117078760656601", "1033365610709413350"),
        ("9602886608953116996", "1041353543701811483"),
        ("9534478014822491502", "1048825114962119441"),
        ("9471077034814287208", "1055846126395284264"),
        ("9412027122422503552", "1062470376458728450"),
        ("9356791399178627259", "1068742432462247250"),
        ("9304925395514158142", "1074699642924695843"),
    ];

    let steps = PriceGrowthSimulator::new(SimulationConfig::default())
        .run()
        .unwrap();
    assert_eq!(steps.len(), expected.len());

    for (step, (minted, price)) in steps.iter().zip(expected) {
        assert_eq!(step.minted, dec_u256(minted), "step {}", step.step);
        assert_eq!(step.effective_price, dec_u256(price), "step {}", step.step);
    }

    let last = steps.last().unwrap();
    assert_eq!(last.reserve_after, parse_ether("190").unwrap());
    assert_eq!(format_units(last.deposit, 18), "10.0");
}

#[test]
fn test_purchase_step_serializes() {
    let steps = PriceGrowthSimulator::new(SimulationConfig {
        steps: 1,
        ..SimulationConfig::default()
    })
    .run()
    .unwrap();

    let json = serde_json::to_value(&steps[0]).unwrap();
    assert_eq!(json["step"], 1);
    assert!(json.get("effective_price").is_some());
}

#[test]
fn test_parse_matches_decimal_rendering() {
    let amount = dec!(12.345);
    assert_eq!(
        parse_ether(&amount.to_string()).unwrap(),
        dec_u256("12345000000000000000")
    );
}
