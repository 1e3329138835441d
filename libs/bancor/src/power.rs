//! Fixed-point power, logarithm and exponent primitives
//!
//! Computes `(base_n / base_d)^(exp_n / exp_d)` entirely on 256-bit unsigned
//! integers as `exp(ln(base) * exp_n / exp_d)`. Floating point never enters the
//! calculation, so every caller reaches the same bit-exact result.
//!
//! ## Input envelope
//!
//! - `base_n < 2^129` and `base_n >= base_d > 0` (the base is at least one)
//! - `ln(base_n / base_d) * exp_n / exp_d <= ~56.4`, the largest exponent
//!   [`MAX_EXP_ARRAY`] covers at 32 bits of precision
//!
//! Inputs outside the envelope are rejected with [`FormulaError`]; the
//! intermediate products are checked so that nothing wraps silently.

use crate::constants::{
    FIXED_1, FIXED_2, GENERAL_EXP_COEFFICIENTS, GENERAL_EXP_DIVISOR, LN2_DENOMINATOR,
    LN2_NUMERATOR, MAX_EXP_ARRAY, MAX_NUM, MAX_PRECISION, MIN_PRECISION, OPT_EXP_COEFFICIENTS,
    OPT_EXP_DIVISOR, OPT_EXP_FRACTION_MASK, OPT_EXP_HI_TERMS, OPT_EXP_MAX_VAL, OPT_LOG_MAX_VAL,
    OPT_LOG_SERIES, OPT_LOG_THRESHOLDS,
};
use crate::errors::FormulaError;
use ethers_core::types::U256;

/// Fixed-point result paired with the number of fractional bits it carries
pub type PowerResult = (U256, u8);

/// Integer-only power/log/exp math
pub struct PowerMath;

impl PowerMath {
    /// Calculate `(base_n / base_d)^(exp_n / exp_d)`.
    ///
    /// # Returns
    /// `(result, precision)` where `result / 2^precision` approximates the
    /// power. Callers de-scale with `>> precision`.
    pub fn power(
        base_n: U256,
        base_d: U256,
        exp_n: u32,
        exp_d: u32,
    ) -> Result<PowerResult, FormulaError> {
        if base_d.is_zero() {
            return Err(FormulaError::InvalidRatio(
                "power base denominator is zero".to_string(),
            ));
        }
        if exp_d == 0 {
            return Err(FormulaError::InvalidRatio(
                "power exponent denominator is zero".to_string(),
            ));
        }
        if base_n >= MAX_NUM {
            return Err(FormulaError::overflow("power base"));
        }
        if base_n < base_d {
            return Err(FormulaError::InvalidRatio(format!(
                "power base {}/{} is below one",
                base_n, base_d
            )));
        }

        let base = mul(base_n, FIXED_1)? / base_d;
        let base_log = if base < OPT_LOG_MAX_VAL {
            Self::optimal_log(base)?
        } else {
            Self::general_log(base)?
        };

        let base_log_times_exp = mul(base_log, U256::from(exp_n))? / U256::from(exp_d);
        if base_log_times_exp < OPT_EXP_MAX_VAL {
            return Ok((Self::optimal_exp(base_log_times_exp)?, MAX_PRECISION));
        }

        let precision = Self::find_position_in_max_exp_array(base_log_times_exp)?;
        let scaled = base_log_times_exp >> usize::from(MAX_PRECISION - precision);
        Ok((Self::general_exp(scaled, precision)?, precision))
    }

    /// Natural logarithm of `x / 2^127` for any `x >= FIXED_1`.
    ///
    /// The integer part of `log2` comes from [`Self::floor_log2`], the
    /// fractional part from 127 rounds of squaring. The result is converted
    /// to base `e` with `LN2_NUMERATOR / LN2_DENOMINATOR`.
    pub fn general_log(x: U256) -> Result<U256, FormulaError> {
        if x < FIXED_1 {
            return Err(FormulaError::InvalidRatio(
                "logarithm argument is below one".to_string(),
            ));
        }

        let mut x = x;
        let mut res = U256::zero();

        // integer part: x >= 2 has log2(x) >= 1
        if x >= FIXED_2 {
            let count = Self::floor_log2(x / FIXED_1);
            x = x >> usize::from(count);
            res = U256::from(count) * FIXED_1;
        }

        // fractional part: 1 < x < 2
        if x > FIXED_1 {
            for i in (1..=MAX_PRECISION).rev() {
                x = mul(x, x)? / FIXED_1; // 1 < x < 4
                if x >= FIXED_2 {
                    x = x >> 1usize;
                    res = res + (U256::one() << usize::from(i - 1));
                }
            }
        }

        Ok(mul(res, LN2_NUMERATOR)? / LN2_DENOMINATOR)
    }

    /// Largest `k` such that `2^k <= n`; zero for `n <= 1`.
    pub fn floor_log2(n: U256) -> u8 {
        let mut n = n;
        let mut res = 0u8;

        if n < U256::from(256u64) {
            while n > U256::one() {
                n = n >> 1usize;
                res += 1;
            }
        } else {
            let mut s = 128usize;
            while s > 0 {
                if n >= (U256::one() << s) {
                    n = n >> s;
                    res |= s as u8;
                }
                s >>= 1;
            }
        }

        res
    }

    /// Highest precision in `[MIN_PRECISION, MAX_PRECISION]` whose
    /// [`MAX_EXP_ARRAY`] bound still covers `x`.
    pub fn find_position_in_max_exp_array(x: U256) -> Result<u8, FormulaError> {
        let mut lo = MIN_PRECISION;
        let mut hi = MAX_PRECISION;

        while lo + 1 < hi {
            let mid = (lo + hi) / 2;
            if max_exp(mid) >= x {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        if max_exp(hi) >= x {
            return Ok(hi);
        }
        if max_exp(lo) >= x {
            return Ok(lo);
        }

        Err(FormulaError::overflow("exponent beyond approximation range"))
    }

    /// `e^(x / 2^precision) * 2^precision` via a 33-term Taylor series.
    ///
    /// `x` must not exceed `MAX_EXP_ARRAY[precision] >> (127 - precision)`;
    /// larger inputs fail with [`FormulaError::Overflow`].
    pub fn general_exp(x: U256, precision: u8) -> Result<U256, FormulaError> {
        let shift = usize::from(precision);
        let mut xi = x;
        let mut res = U256::zero();

        // x^k * (33! / k!) for k = 2..=33
        for coefficient in GENERAL_EXP_COEFFICIENTS {
            xi = mul(xi, x)? >> shift;
            res = add(res, mul(xi, U256::from(coefficient))?)?;
        }

        // divide by 33!, then add x^1 / 1! + x^0 / 0!
        add(add(res / U256::from(GENERAL_EXP_DIVISOR), x)?, U256::one() << shift)
    }

    /// `ln(x / 2^127) * 2^127` for `FIXED_1 <= x < OPT_LOG_MAX_VAL`.
    ///
    /// Reduces `x` by `e^(2^-k)` factors, then sums an alternating series in
    /// `y = x - 1` over the residue.
    pub fn optimal_log(x: U256) -> Result<U256, FormulaError> {
        if x < FIXED_1 {
            return Err(FormulaError::InvalidRatio(
                "logarithm argument is below one".to_string(),
            ));
        }
        if x >= OPT_LOG_MAX_VAL {
            return Err(FormulaError::overflow("optimal_log argument"));
        }

        let mut x = x;
        let mut res = U256::zero();

        for (k, threshold) in OPT_LOG_THRESHOLDS.iter().enumerate() {
            let threshold = U256::from(*threshold);
            if x >= threshold {
                res = res + (FIXED_1 >> (k + 1)); // add 1 / 2^(k+1)
                x = mul(x, FIXED_1)? / threshold;
            }
        }

        let y = x - FIXED_1;
        let w = mul(y, y)? / FIXED_1;
        let mut z = y;
        for (i, (numerator, denominator)) in OPT_LOG_SERIES.iter().enumerate() {
            res = res + mul(z, *numerator - y)? / *denominator;
            if i + 1 < OPT_LOG_SERIES.len() {
                z = mul(z, w)? / FIXED_1;
            }
        }

        Ok(res)
    }

    /// `e^(x / 2^127) * 2^127` for `x < OPT_EXP_MAX_VAL`.
    ///
    /// A 20-term series handles `x mod 2^-3`; each higher set bit of `x`
    /// multiplies in a precomputed `e^(2^k)` ratio.
    pub fn optimal_exp(x: U256) -> Result<U256, FormulaError> {
        if x >= OPT_EXP_MAX_VAL {
            return Err(FormulaError::overflow("optimal_exp argument"));
        }

        let y = x % OPT_EXP_FRACTION_MASK;
        let mut z = y;
        let mut res = U256::zero();

        // y^k * (20! / k!) for k = 2..=20
        for coefficient in OPT_EXP_COEFFICIENTS {
            z = mul(z, y)? / FIXED_1;
            res = add(res, mul(z, U256::from(coefficient))?)?;
        }

        // divide by 20!, then add y^1 / 1! + y^0 / 0!
        res = res / U256::from(OPT_EXP_DIVISOR) + y + FIXED_1;

        for (bit, numerator, denominator) in OPT_EXP_HI_TERMS {
            if !(x & bit).is_zero() {
                res = mul(res, numerator)? / denominator;
            }
        }

        Ok(res)
    }
}

fn max_exp(precision: u8) -> U256 {
    MAX_EXP_ARRAY[usize::from(precision - MIN_PRECISION)]
}

#[inline]
fn mul(a: U256, b: U256) -> Result<U256, FormulaError> {
    a.checked_mul(b)
        .ok_or_else(|| FormulaError::overflow("fixed-point multiplication"))
}

#[inline]
fn add(a: U256, b: U256) -> Result<U256, FormulaError> {
    a.checked_add(b)
        .ok_or_else(|| FormulaError::overflow("fixed-point addition"))
}
