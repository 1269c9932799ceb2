//! Pure byte-count arithmetic over [`ByteUnit`]s.
//!
//! Counts are computed in `u64`. The plain functions wrap on overflow, the same
//! as any fixed-width unsigned multiplication with `wrapping_mul`; the
//! `checked_` variants report it as `None` instead. Conversions between units
//! divide and truncate toward zero.

use crate::bytes::unit::ByteUnit;

/// Number of bytes in `amount` of `unit`. Wraps on overflow.
///
/// ```
/// use sizes::{byte_count_of, ByteUnit};
///
/// assert_eq!(byte_count_of(ByteUnit::Kilobyte, 2), 2048);
/// ```
pub const fn byte_count_of(unit: ByteUnit, amount: u64) -> u64 {
    amount.wrapping_mul(unit.magnitude())
}

/// `amount` of `unit` re-expressed in `target`, rounded down.
///
/// ```
/// use sizes::{convert_to, ByteUnit};
///
/// assert_eq!(convert_to(ByteUnit::Exabyte, 1, ByteUnit::Petabyte), 1024);
/// assert_eq!(convert_to(ByteUnit::Kilobyte, 1, ByteUnit::Megabyte), 0);
/// ```
pub const fn convert_to(unit: ByteUnit, amount: u64, target: ByteUnit) -> u64 {
    byte_count_of(unit, amount) / target.magnitude()
}

pub const fn checked_byte_count_of(unit: ByteUnit, amount: u64) -> Option<u64> {
    amount.checked_mul(unit.magnitude())
}

pub const fn checked_convert_to(unit: ByteUnit, amount: u64, target: ByteUnit) -> Option<u64> {
    match checked_byte_count_of(unit, amount) {
        Some(count) => Some(count / target.magnitude()),
        None => None,
    }
}

/// Like [`convert_to`], narrowed into `T`. Fails instead of truncating when
/// the result does not fit.
///
/// ```
/// use sizes::{convert_into, ByteUnit};
///
/// let mib: u16 = convert_into(ByteUnit::Gigabyte, 3, ByteUnit::Megabyte).unwrap();
/// assert_eq!(mib, 3072);
/// assert!(convert_into::<u8>(ByteUnit::Kilobyte, 1, ByteUnit::Byte).is_err());
/// ```
pub fn convert_into<T>(unit: ByteUnit, amount: u64, target: ByteUnit) -> Result<T, T::Error>
where
    T: TryFrom<u64>,
{
    T::try_from(convert_to(unit, amount, target))
}

macro_rules! unit_shorthands {
    ($($unit: ident => $count: ident, $count_as: ident;)*) => {
        $(
            #[doc = concat!("Byte count of `amount` ", stringify!($count), ".")]
            pub const fn $count(amount: u64) -> u64 {
                byte_count_of(ByteUnit::$unit, amount)
            }

            #[doc = concat!("`amount` ", stringify!($count), " expressed in `target`, rounded down.")]
            pub const fn $count_as(amount: u64, target: ByteUnit) -> u64 {
                convert_to(ByteUnit::$unit, amount, target)
            }
        )*
    };
}

unit_shorthands! {
    Byte => bytes, bytes_as;
    Kilobyte => kilobytes, kilobytes_as;
    Megabyte => megabytes, megabytes_as;
    Gigabyte => gigabytes, gigabytes_as;
    Terabyte => terabytes, terabytes_as;
    Petabyte => petabytes, petabytes_as;
    Exabyte => exabytes, exabytes_as;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::bytes::EXABYTE;
    use ByteUnit::*;

    #[rstest]
    #[case(Byte, 1, 1)]
    #[case(Byte, 2, 2)]
    #[case(Kilobyte, 2, 2048)]
    #[case(Megabyte, 2, 2_097_152)]
    #[case(Gigabyte, 2, 2_147_483_648)]
    #[case(Terabyte, 2, 2_199_023_255_552)]
    #[case(Petabyte, 2, 2_251_799_813_685_248)]
    #[case(Exabyte, 2, 2_305_843_009_213_693_952)]
    fn byte_counts(#[case] unit: ByteUnit, #[case] amount: u64, #[case] want: u64) {
        assert_eq!(byte_count_of(unit, amount), want);
        assert_eq!(byte_count_of(unit, amount), amount * unit.magnitude());
    }

    #[test]
    fn zero_is_zero_in_every_unit() {
        for unit in ByteUnit::ALL {
            assert_eq!(byte_count_of(unit, 0), 0);
            for target in ByteUnit::ALL {
                assert_eq!(convert_to(unit, 0, target), 0);
            }
        }
    }

    #[test]
    fn same_unit_round_trips() {
        for unit in ByteUnit::ALL {
            for amount in [1, 7, 15] {
                assert_eq!(convert_to(unit, amount, unit), amount);
            }
        }
    }

    #[test]
    fn largest_amount_without_overflow_round_trips() {
        for unit in ByteUnit::ALL {
            let max = u64::MAX / unit.magnitude();
            assert!(checked_byte_count_of(unit, max).is_some());
            assert_eq!(convert_to(unit, max, unit), max);

            if let Some(over) = max.checked_add(1) {
                assert_eq!(checked_byte_count_of(unit, over), None);
            }
        }
        assert_eq!(u64::MAX / EXABYTE, 15);
    }

    #[rstest]
    #[case(Byte, 1024, Kilobyte, 1)]
    #[case(Byte, 1_048_576, Megabyte, 1)]
    #[case(Byte, 1_152_921_504_606_846_976, Exabyte, 1)]
    #[case(Kilobyte, 1, Megabyte, 0)]
    #[case(Kilobyte, 1, Byte, 1024)]
    #[case(Kilobyte, 1_125_899_906_842_624, Exabyte, 1)]
    #[case(Megabyte, 1_048, Gigabyte, 1)]
    #[case(Megabyte, 1_023, Gigabyte, 0)]
    #[case(Gigabyte, 1, Terabyte, 0)]
    #[case(Gigabyte, 1, Megabyte, 1024)]
    #[case(Terabyte, 1, Kilobyte, 1_073_741_824)]
    #[case(Petabyte, 1_024, Exabyte, 1)]
    #[case(Exabyte, 1, Petabyte, 1024)]
    #[case(Exabyte, 1, Byte, 1_152_921_504_606_846_976)]
    fn truncating_conversions(
        #[case] unit: ByteUnit,
        #[case] amount: u64,
        #[case] target: ByteUnit,
        #[case] want: u64,
    ) {
        assert_eq!(convert_to(unit, amount, target), want);
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(byte_count_of(Exabyte, 16), 0);
        assert_eq!(byte_count_of(Exabyte, 17), EXABYTE);
        assert_eq!(convert_to(Exabyte, 17, Exabyte), 1);
    }

    #[test]
    fn checked_variants_detect_overflow() {
        assert_eq!(checked_byte_count_of(Exabyte, 15), Some(15 * EXABYTE));
        assert_eq!(checked_byte_count_of(Exabyte, 16), None);
        assert_eq!(checked_convert_to(Exabyte, 16, Petabyte), None);
        assert_eq!(checked_convert_to(Exabyte, 2, Petabyte), Some(2048));
    }

    #[test]
    fn narrowing_fails_instead_of_truncating() {
        assert_eq!(convert_into::<u32>(Gigabyte, 3, Byte), Ok(3_221_225_472));
        assert!(convert_into::<u32>(Gigabyte, 4, Byte).is_err());
        assert_eq!(convert_into::<i64>(Exabyte, 7, Byte), Ok(7 * EXABYTE as i64));
        assert!(convert_into::<i64>(Exabyte, 8, Byte).is_err());
        assert_eq!(convert_into::<usize>(Megabyte, 5, Kilobyte), Ok(5120));
    }

    #[test]
    fn shorthands_match_the_generic_functions() {
        assert_eq!(bytes(3), 3);
        assert_eq!(kilobytes(1), 1024);
        assert_eq!(megabytes(1), 1_048_576);
        assert_eq!(gigabytes(1), 1_073_741_824);
        assert_eq!(terabytes(1), 1_099_511_627_776);
        assert_eq!(petabytes(1), 1_125_899_906_842_624);
        assert_eq!(exabytes(1), 1_152_921_504_606_846_976);

        assert_eq!(bytes_as(1024, Kilobyte), 1);
        assert_eq!(kilobytes_as(1_024, Megabyte), 1);
        assert_eq!(megabytes_as(1, Gigabyte), 0);
        assert_eq!(gigabytes_as(1, Kilobyte), 1_048_576);
        assert_eq!(terabytes_as(1_048_576, Exabyte), 1);
        assert_eq!(petabytes_as(1, Terabyte), 1024);
        assert_eq!(exabytes_as(1, Gigabyte), 1_073_741_824);
    }
}
