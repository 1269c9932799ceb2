//! Binary byte-size units (byte through exabyte) and the integer arithmetic
//! between them.
//!
//! ```
//! use sizes::{byte_count_of, convert_to, ByteUnit};
//!
//! assert_eq!(byte_count_of(ByteUnit::Kilobyte, 2), 2048);
//! assert_eq!(convert_to(ByteUnit::Byte, 1_048_576, ByteUnit::Megabyte), 1);
//! ```

pub mod bytes;
pub mod cli;
pub mod config;
pub mod output;

pub use bytes::{
    builder::SizeBuilder,
    convert::{
        byte_count_of, bytes, bytes_as, checked_byte_count_of, checked_convert_to, convert_into,
        convert_to, exabytes, exabytes_as, gigabytes, gigabytes_as, kilobytes, kilobytes_as,
        megabytes, megabytes_as, petabytes, petabytes_as, terabytes, terabytes_as,
    },
    unit::ByteUnit,
    BYTE, EXABYTE, GIGABYTE, KILOBYTE, MEGABYTE, PETABYTE, TERABYTE,
};
