//! Fixed-width unsigned integers at 96, 128, 192, 256, 512, 1024, and
//! 2048 bits, stored as little-endian `u64` limb arrays with no heap
//! allocation.
//!
//! Every width supports the usual arithmetic (`add`/`sub`/`mul`/
//! `quo_rem`/`exp`), bitwise operations, comparison, a little-endian
//! byte codec, base-2..36 parsing and formatting, and LEB128 varint
//! encoding, all exposed uniformly through the [`digits::Digits`]
//! trait for generic code.

mod div;
mod error;
mod fmt;
mod limb;
mod macros;
mod modpow;
mod parse;
mod pow10;
mod u1024;
mod u128;
mod u192;
mod u2048;
mod u256;
mod u512;
mod u96;
mod varint;

pub mod digits;


pub use digits::{Digits, HalfDivide};
pub use error::Error;
pub use u1024::Uint1024;
pub use u128::Uint128;
pub use u192::Uint192;
pub use u2048::Uint2048;
pub use u256::Uint256;
pub use u512::Uint512;
pub use u96::Uint96;

pub use fmt::format_radix;
pub use parse::parse_uint;
pub use pow10::mul_pow10;
pub use varint::{append_uvarint, max_varint_len, uvarint, varint_len};
