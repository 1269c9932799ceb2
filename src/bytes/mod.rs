pub mod builder;
pub mod convert;
pub mod unit;

pub const B: &str = "B";

pub const KIB: &str = "KiB";
pub const MIB: &str = "MiB";
pub const GIB: &str = "GiB";
pub const TIB: &str = "TiB";
pub const PIB: &str = "PiB";
pub const EIB: &str = "EiB";

pub const BYTE: u64 = 1;
pub const KILOBYTE: u64 = BYTE << 10;
pub const MEGABYTE: u64 = KILOBYTE << 10;
pub const GIGABYTE: u64 = MEGABYTE << 10;
pub const TERABYTE: u64 = GIGABYTE << 10;
pub const PETABYTE: u64 = TERABYTE << 10;
pub const EXABYTE: u64 = PETABYTE << 10;
