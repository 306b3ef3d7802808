/// A library for handling Q64.96 fixed point numbers
/// Used in sqrt_price_math.rs and tick_math.rs

use super::big_num::U256;

pub const Q96: U256 = U256([0, 0x100000000, 0, 0]); // 2^96
pub const RESOLUTION: usize = 96;
