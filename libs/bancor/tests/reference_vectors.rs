//! Reference vectors for the purchase and sale formulas
//!
//! Every expected value is the exact integer the reference contract returns
//! for the same inputs.

use bancor_formula::{BancorFormula, FormulaError, PowerMath, MAX_RESERVE_RATIO, U256};

fn ether(n: u64) -> U256 {
    U256::from(n) * U256::exp10(18)
}

fn dec(s: &str) -> U256 {
    U256::from_dec_str(s).unwrap()
}

#[test]
fn test_half_ratio_purchase_then_sale() {
    let supply = ether(2);
    let reserve = ether(1) / U256::from(2u64);
    let deposit = ether(1);

    let minted =
        BancorFormula::calculate_purchase_return(supply, reserve, 500_000, deposit).unwrap();
    assert_eq!(minted, dec("1464101615137754587"));

    let refund =
        BancorFormula::calculate_sale_return(supply + minted, reserve + deposit, 500_000, minted)
            .unwrap();
    assert_eq!(refund, dec("999999999999999999"));
    assert!(refund <= deposit);
}

#[test]
fn test_sale_vectors() {
    let cases = [
        (ether(2), ether(2), 999_999, ether(1), "1000000693147633480"),
        (ether(2), ether(2), 1, U256::exp10(11), "97541153376645620"),
        (ether(10), ether(1), 500_000, ether(5), "749999999999999999"),
    ];

    for (supply, reserve, ratio, amount, expected) in cases {
        let refund = BancorFormula::calculate_sale_return(supply, reserve, ratio, amount).unwrap();
        assert_eq!(refund, dec(expected), "sale with ratio {}", ratio);
    }
}

#[test]
fn test_minimum_ratio_purchase() {
    let minted = BancorFormula::calculate_purchase_return(ether(10), ether(1), 1, ether(1)).unwrap();
    assert_eq!(minted, dec("6931474207865"));
}

#[test]
fn test_linear_ratio_is_proportional() {
    let minted = BancorFormula::calculate_purchase_return(
        ether(3),
        ether(6),
        MAX_RESERVE_RATIO,
        ether(2),
    )
    .unwrap();
    assert_eq!(minted, ether(1));

    let refund =
        BancorFormula::calculate_sale_return(ether(3), ether(6), MAX_RESERVE_RATIO, ether(1))
            .unwrap();
    assert_eq!(refund, ether(2));
}

#[test]
fn test_power_reference_values() {
    // sqrt(3) at maximum precision
    let (result, precision) = PowerMath::power(U256::from(3u64), U256::one(), 1, 2).unwrap();
    assert_eq!(precision, 127);
    assert_eq!(result, dec("294693174213430241384087455685767077296"));
}

#[test]
fn test_error_surface() {
    assert!(matches!(
        BancorFormula::calculate_purchase_return(ether(1), ether(1), 1_000_001, ether(1)),
        Err(FormulaError::InvalidRatio(_))
    ));
    assert!(matches!(
        BancorFormula::calculate_sale_return(ether(1), ether(1), 500_000, ether(1) + U256::one()),
        Err(FormulaError::InsufficientSupply { .. })
    ));
    assert!(matches!(
        PowerMath::power(U256::one(), U256::from(2u64), 1, 1),
        Err(FormulaError::InvalidRatio(_))
    ));
}
