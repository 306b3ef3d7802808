///! 256 and 512 bit numbers
///!
///! Q64.96 values are carried as `U256`. Squaring one needs up to 512 bits,
///! so intermediates are widened to `U512` and narrowed back with a check.

use crate::error::ErrorCode;
use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

construct_uint! {
    pub struct U512(8);
}

impl From<U256> for U512 {
    fn from(value: U256) -> U512 {
        let U256(ref limbs) = value;
        let mut wide = [0u64; 8];
        wide[..4].copy_from_slice(limbs);
        U512(wide)
    }
}

impl TryFrom<U512> for U256 {
    type Error = ErrorCode;

    /// Fails with `Overflow` if any of the upper four limbs is set
    fn try_from(value: U512) -> Result<U256, ErrorCode> {
        let U512(ref limbs) = value;
        if limbs[4..].iter().any(|limb| *limb != 0) {
            return Err(ErrorCode::Overflow);
        }
        let mut narrow = [0u64; 4];
        narrow.copy_from_slice(&limbs[..4]);
        Ok(U256(narrow))
    }
}
