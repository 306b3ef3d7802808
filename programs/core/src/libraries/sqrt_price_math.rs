/// Conversions between a Q64.96 sqrt price `√P` and the Q64.96 price `P`
///
/// Both directions round down. Widening happens in `U512`, so a 256 bit
/// input never wraps while being squared or scaled; narrowing back to `U256`
/// is checked and fails with `Overflow`.
use anchor_lang::prelude::*;

use super::big_num::{U256, U512};
use super::bit_math;
use super::fixed_point_x96;
use crate::error::ErrorCode;

/// Gets the price `P` from a sqrt price `√P`
///
/// # Formula
///
/// * `P = floor(√P^2 / 2^96)`
///
/// The floor is bit-exact, so a larger `√P` never yields a smaller `P`.
///
/// # Arguments
///
/// * `sqrt_price_x96` - The sqrt price as a Q64.96
///
pub fn price_x96_from_sqrt_price_x96(sqrt_price_x96: U256) -> Result<U256> {
    let sqrt_price_x96 = U512::from(sqrt_price_x96);
    let squared = sqrt_price_x96
        .checked_mul(sqrt_price_x96)
        .ok_or(ErrorCode::Overflow)?;

    match U256::try_from(squared >> fixed_point_x96::RESOLUTION) {
        Ok(price_x96) => Ok(price_x96),
        Err(code) => {
            msg!("price of sqrt price {} does not fit in 256 bits", sqrt_price_x96);
            Err(code.into())
        }
    }
}

/// Gets the sqrt price `√P` from a price `P`
///
/// # Formula
///
/// * `√P = floor(sqrt(P * 2^96))`
///
/// The result `r` satisfies `r^2 <= P * 2^96 < (r + 1)^2`.
///
/// # Arguments
///
/// * `price_x96` - The price as a Q64.96
///
pub fn sqrt_price_x96_from_price_x96(price_x96: U256) -> Result<U256> {
    let scaled = U512::from(price_x96)
        .checked_mul(U512::from(fixed_point_x96::Q96))
        .ok_or(ErrorCode::Overflow)?;

    Ok(U256::try_from(integer_sqrt(scaled))?)
}

/// Encodes the rational price `numerator / denominator` as a Q64.96,
/// rounding down
///
/// # Arguments
///
/// * `numerator` - Amount of token_1 per `denominator` of token_0
/// * `denominator` - Must be greater than 0
///
pub fn price_x96_from_ratio(numerator: U256, denominator: U256) -> Result<U256> {
    require!(!denominator.is_zero(), ErrorCode::DivisionByZero);

    let scaled = U512::from(numerator) << fixed_point_x96::RESOLUTION;
    match U256::try_from(scaled / U512::from(denominator)) {
        Ok(price_x96) => Ok(price_x96),
        Err(code) => {
            msg!("price {} / {} does not fit in Q64.96", numerator, denominator);
            Err(code.into())
        }
    }
}

/// Floor of the square root, by Newton's method
///
/// Starts from `2^(msb / 2 + 1)`, which is never below the root, so the
/// iterates decrease monotonically until they stop improving.
///
/// # Arguments
///
/// * `n` - The radicand
///
pub fn integer_sqrt(n: U512) -> U512 {
    if n.is_zero() {
        return n;
    }

    let mut x = U512::one() << (bit_math::most_significant_bit(n) as usize / 2 + 1);
    loop {
        let y = (x + n / x) >> 1usize;
        if y >= x {
            return x;
        }
        x = y;
    }
}
