/// Helper function to get the most significant non-zero bit of a wide number

use super::big_num::U512;

/// Returns index of the most significant non-zero bit of the number
///
/// The function satisfies the property:
///     x >= 2**most_significant_bit(x) and x < 2**(most_significant_bit(x)+1)
///
/// Binary search over 2^256, 2^128, ..., 2^1 for U512
///
/// # Arguments
///
/// * `x` - the value for which to compute the most significant bit, must be greater than 0
///
pub fn most_significant_bit(mut x: U512) -> u16 {
    assert!(!x.is_zero());

    let mut msb: u16 = 0; // in [0, 512)

    for shift in [256u16, 128, 64, 32, 16, 8, 4, 2, 1] {
        if x >= U512::one() << (shift as usize) {
            msb |= shift;
            x = x >> (shift as usize);
        }
    }

    msb
}
