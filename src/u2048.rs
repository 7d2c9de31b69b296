//! 2048-bit unsigned integer, half is [`Uint1024`](crate::Uint1024).

use crate::macros::{impl_half_divide, impl_uint};

impl_uint!(Uint2048, 32, 2048);
impl_half_divide!(Uint2048, crate::Uint1024, 16, 32);
