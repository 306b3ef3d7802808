pub mod big_num;
pub mod bit_math;
pub mod epoch_math;
pub mod fixed_point_x96;
pub mod sqrt_price_math;
pub mod tick_math;
