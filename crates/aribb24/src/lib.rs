//! ARIB STD-B24で規定される8単位符号の文字列をUnicodeにデコードするためのクレート。
//!
//! ```
//! use aribb24::AribStr;
//!
//! let s = AribStr::from_bytes(b"\x1B\x24\x42\x7A\x50\x0E\x41\x42");
//! assert_eq!(s.decode().unwrap(), "[HV]ＡＢ");
//! ```

#![deny(missing_docs)]

pub mod eight;
mod utils;

pub use eight::str::{AribStr, AribString};
pub use eight::{decode, decode_range, DecodeError};
