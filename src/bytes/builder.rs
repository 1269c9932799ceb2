use crate::bytes::{convert, unit::ByteUnit};

/// Fluent construction of a size: pick a unit, set a multiplier, calculate.
///
/// Defaults to one byte.
///
/// ```
/// use sizes::SizeBuilder;
///
/// let size = SizeBuilder::new().megabytes().multiply(3);
/// assert_eq!(size.calculate(), 3_145_728);
/// assert_eq!(size.calculate_as(sizes::ByteUnit::Kilobyte), 3072);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SizeBuilder {
    unit: ByteUnit,
    multiplier: u64,
}

impl Default for SizeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeBuilder {
    pub const fn new() -> Self {
        Self {
            unit: ByteUnit::Byte,
            multiplier: 1,
        }
    }

    pub const fn unit(mut self, unit: ByteUnit) -> Self {
        self.unit = unit;
        self
    }

    pub const fn bytes(self) -> Self {
        self.unit(ByteUnit::Byte)
    }

    pub const fn kilobytes(self) -> Self {
        self.unit(ByteUnit::Kilobyte)
    }

    pub const fn megabytes(self) -> Self {
        self.unit(ByteUnit::Megabyte)
    }

    pub const fn gigabytes(self) -> Self {
        self.unit(ByteUnit::Gigabyte)
    }

    pub const fn terabytes(self) -> Self {
        self.unit(ByteUnit::Terabyte)
    }

    pub const fn petabytes(self) -> Self {
        self.unit(ByteUnit::Petabyte)
    }

    pub const fn exabytes(self) -> Self {
        self.unit(ByteUnit::Exabyte)
    }

    /// Replaces the multiplier; calls do not accumulate.
    pub const fn multiply(mut self, multiplier: u64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub const fn calculate(&self) -> u64 {
        convert::byte_count_of(self.unit, self.multiplier)
    }

    /// The calculated size in `target`, rounded down.
    pub const fn calculate_as(&self, target: ByteUnit) -> u64 {
        convert::convert_to(self.unit, self.multiplier, target)
    }

    pub const fn checked_calculate(&self) -> Option<u64> {
        convert::checked_byte_count_of(self.unit, self.multiplier)
    }

    pub fn try_calculate_into<T>(&self) -> Result<T, T::Error>
    where
        T: TryFrom<u64>,
    {
        T::try_from(self.calculate())
    }
}

//
// Shorthands that skip the `SizeBuilder::new()` call.
//

pub const fn bytes() -> SizeBuilder {
    SizeBuilder::new().bytes()
}

pub const fn kilobytes() -> SizeBuilder {
    SizeBuilder::new().kilobytes()
}

pub const fn megabytes() -> SizeBuilder {
    SizeBuilder::new().megabytes()
}

pub const fn gigabytes() -> SizeBuilder {
    SizeBuilder::new().gigabytes()
}

pub const fn terabytes() -> SizeBuilder {
    SizeBuilder::new().terabytes()
}

pub const fn petabytes() -> SizeBuilder {
    SizeBuilder::new().petabytes()
}

pub const fn exabytes() -> SizeBuilder {
    SizeBuilder::new().exabytes()
}
