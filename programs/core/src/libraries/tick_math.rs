///! Helper function to calculate √P from a tick
///! Used to turn the arithmetic mean tick of a TWAP into a Q64.96 sqrt price
///!
///! # Resources
///!
///! * https://medium.com/coinmonks/math-in-solidity-part-5-exponent-and-logarithm-9aef8515136e
///!
use anchor_lang::prelude::*;

use super::big_num::U256;
use crate::error::ErrorCode;

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = -MIN_TICK;

pub const MIN_SQRT_RATIO: U256 = U256([4295128739, 0, 0, 0]);
pub const MAX_SQRT_RATIO: U256 = U256([0x5d951d5263988d26, 0xefd1fc6a50648849, 0xfffd8963, 0]);

/// Calculates 1.0001^(tick/2) as a Q64.96 number representing
/// the square root of the ratio of the two assets (token_1/token_0)
///
/// Calculates result as a Q128.128, then rounds up to Q64.96.
/// Each magic factor is `2^128 / (1.0001^(2^(i - 1)))` for i in `[0, 20)`.
///
/// Throws if |tick| > MAX_TICK
///
/// # Arguments
/// * `tick` - Price tick
///
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256> {
    let abs_tick = tick.unsigned_abs();
    require!(abs_tick <= MAX_TICK as u32, ErrorCode::TickOutOfRange);

    // i = 0
    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(0xfffcb933bd6fad37aa2d162d1a594001u128)
    } else {
        // 2^128
        U256::one() << 128usize
    };
    // i = 1
    if abs_tick & 0x2 != 0 { ratio = mul_shift_128(ratio, 0xfff97272373d413259a46990580e213a) };
    // i = 2
    if abs_tick & 0x4 != 0 { ratio = mul_shift_128(ratio, 0xfff2e50f5f656932ef12357cf3c7fdcc) };
    // i = 3
    if abs_tick & 0x8 != 0 { ratio = mul_shift_128(ratio, 0xffe5caca7e10e4e61c3624eaa0941cd0) };
    // i = 4
    if abs_tick & 0x10 != 0 { ratio = mul_shift_128(ratio, 0xffcb9843d60f6159c9db58835c926644) };
    // i = 5
    if abs_tick & 0x20 != 0 { ratio = mul_shift_128(ratio, 0xff973b41fa98c081472e6896dfb254c0) };
    // i = 6
    if abs_tick & 0x40 != 0 { ratio = mul_shift_128(ratio, 0xff2ea16466c96a3843ec78b326b52861) };
    // i = 7
    if abs_tick & 0x80 != 0 { ratio = mul_shift_128(ratio, 0xfe5dee046a99a2a811c461f1969c3053) };
    // i = 8
    if abs_tick & 0x100 != 0 { ratio = mul_shift_128(ratio, 0xfcbe86c7900a88aedcffc83b479aa3a4) };
    // i = 9
    if abs_tick & 0x200 != 0 { ratio = mul_shift_128(ratio, 0xf987a7253ac413176f2b074cf7815e54) };
    // i = 10
    if abs_tick & 0x400 != 0 { ratio = mul_shift_128(ratio, 0xf3392b0822b70005940c7a398e4b70f3) };
    // i = 11
    if abs_tick & 0x800 != 0 { ratio = mul_shift_128(ratio, 0xe7159475a2c29b7443b29c7fa6e889d9) };
    // i = 12
    if abs_tick & 0x1000 != 0 { ratio = mul_shift_128(ratio, 0xd097f3bdfd2022b8845ad8f792aa5825) };
    // i = 13
    if abs_tick & 0x2000 != 0 { ratio = mul_shift_128(ratio, 0xa9f746462d870fdf8a65dc1f90e061e5) };
    // i = 14
    if abs_tick & 0x4000 != 0 { ratio = mul_shift_128(ratio, 0x70d869a156d2a1b890bb3df62baf32f7) };
    // i = 15
    if abs_tick & 0x8000 != 0 { ratio = mul_shift_128(ratio, 0x31be135f97d08fd981231505542fcfa6) };
    // i = 16
    if abs_tick & 0x10000 != 0 { ratio = mul_shift_128(ratio, 0x9aa508b5b7a84e1c677de54f3e99bc9) };
    // i = 17
    if abs_tick & 0x20000 != 0 { ratio = mul_shift_128(ratio, 0x5d6af8dedb81196699c329225ee604) };
    // i = 18
    if abs_tick & 0x40000 != 0 { ratio = mul_shift_128(ratio, 0x2216e584f5fa1ea926041bedfe98) };
    // i = 19
    if abs_tick & 0x80000 != 0 { ratio = mul_shift_128(ratio, 0x48a170391f7dc42444e8fa2) };

    // Divide to obtain 1.0001^(2^(i - 1)) * 2^128 in numerator
    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Rounding up and convert to Q64.96
    let round_up = (ratio.low_u64() & 0xffffffff != 0) as u64;
    Ok((ratio >> 32usize) + U256::from(round_up))
}

/// `ratio * factor >> 128`; ratio is at most 2^128, so the product fits in 256 bits
fn mul_shift_128(ratio: U256, factor: u128) -> U256 {
    (ratio * U256::from(factor)) >> 128usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libraries::fixed_point_x96;

    #[test]
    fn sqrt_ratio_at_tick_zero_is_one() {
        assert_eq!(get_sqrt_ratio_at_tick(0).unwrap(), fixed_point_x96::Q96);
    }

    #[test]
    fn sqrt_ratio_at_min_and_max_tick() {
        assert_eq!(get_sqrt_ratio_at_tick(MIN_TICK).unwrap(), MIN_SQRT_RATIO);
        assert_eq!(get_sqrt_ratio_at_tick(MAX_TICK).unwrap(), MAX_SQRT_RATIO);
        assert_eq!(
            MAX_SQRT_RATIO,
            U256::from_dec_str("1461446703485210103287273052203988822378723970342").unwrap()
        );
    }

    #[test]
    fn sqrt_ratio_at_adjacent_ticks() {
        assert_eq!(
            get_sqrt_ratio_at_tick(1).unwrap(),
            U256::from_dec_str("79232123823359799118286999568").unwrap()
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(-1).unwrap(),
            U256::from_dec_str("79224201403219477170569942574").unwrap()
        );
    }

    #[test]
    fn sqrt_price_error_under_1_bps() {
        for tick in (MIN_TICK..=MAX_TICK).step_by(9973) {
            let sqrt_price_x96 = get_sqrt_ratio_at_tick(tick).unwrap();
            // keep the top 64 significant bits to fit in an f64
            let shift = sqrt_price_x96.bits().saturating_sub(64);
            let mantissa = (sqrt_price_x96 >> shift).low_u64() as f64;
            let sqrt_price = mantissa * f64::powi(2.0, shift as i32 - 96);
            let float_price = f64::powf(1.0001, (tick as f64) / 2.0);

            // Error should be under 0.01%
            let deviation = (sqrt_price - float_price) / float_price;
            assert!(deviation.abs() < 0.0001, "tick {}", tick);
        }
    }

    #[test]
    fn sqrt_price_increases_with_tick() {
        let mut prev_price_x96 = U256::zero();
        for tick in (MIN_TICK..=MAX_TICK).step_by(997) {
            let sqrt_price_x96 = get_sqrt_ratio_at_tick(tick).unwrap();
            assert!(sqrt_price_x96 > prev_price_x96);
            prev_price_x96 = sqrt_price_x96;
        }
    }

    #[test]
    #[should_panic]
    fn less_than_min_tick() {
        get_sqrt_ratio_at_tick(MIN_TICK - 1).unwrap();
    }

    #[test]
    #[should_panic]
    fn greater_than_max_tick() {
        get_sqrt_ratio_at_tick(MAX_TICK + 1).unwrap();
    }

    #[test]
    fn out_of_range_tick_error() {
        let err = get_sqrt_ratio_at_tick(i32::MIN).unwrap_err();
        assert_eq!(err, anchor_lang::error::Error::from(ErrorCode::TickOutOfRange));
    }
}
