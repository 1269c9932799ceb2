use std::{collections::HashMap, fmt, str::FromStr};

use anyhow::anyhow;
use once_cell::sync::Lazy;

use crate::bytes::{builder::SizeBuilder, *};

/// A binary (1024-based) size unit. The discriminant is the number of bytes
/// one unit represents.
#[repr(u64)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ByteUnit {
    #[default]
    Byte = BYTE,
    Kilobyte = KILOBYTE,
    Megabyte = MEGABYTE,
    Gigabyte = GIGABYTE,
    Terabyte = TERABYTE,
    Petabyte = PETABYTE,
    Exabyte = EXABYTE,
}

impl ByteUnit {
    pub const ALL: [ByteUnit; 7] = [
        Self::Byte,
        Self::Kilobyte,
        Self::Megabyte,
        Self::Gigabyte,
        Self::Terabyte,
        Self::Petabyte,
        Self::Exabyte,
    ];

    pub const LABELS: [&'static str; 7] = [B, KIB, MIB, GIB, TIB, PIB, EIB];

    /// Number of bytes in one unit.
    pub const fn magnitude(self) -> u64 {
        self as u64
    }

    const fn index(self) -> usize {
        self.magnitude().trailing_zeros() as usize / 10
    }

    pub const fn label(self) -> &'static str {
        Self::LABELS[self.index()]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Byte => "bytes",
            Self::Kilobyte => "kilobytes",
            Self::Megabyte => "megabytes",
            Self::Gigabyte => "gigabytes",
            Self::Terabyte => "terabytes",
            Self::Petabyte => "petabytes",
            Self::Exabyte => "exabytes",
        }
    }

    /// Starts a [`SizeBuilder`] with this unit selected.
    pub const fn builder(self) -> SizeBuilder {
        SizeBuilder::new().unit(self)
    }
}

impl From<ByteUnit> for u64 {
    fn from(unit: ByteUnit) -> Self {
        unit.magnitude()
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

static NAMES: Lazy<HashMap<String, ByteUnit>> = Lazy::new(|| {
    let mut map = HashMap::new();

    for unit in ByteUnit::ALL {
        let plural = unit.name();
        let singular = &plural[..plural.len() - 1];
        let label = unit.label().to_ascii_lowercase();

        map.insert(plural.to_string(), unit);
        map.insert(singular.to_string(), unit);
        map.insert(label, unit);

        if unit != ByteUnit::Byte {
            // "kb" and "k" read as kibibytes here; there are no decimal units
            let initial = &plural[..1];
            map.insert(format!("{initial}b"), unit);
            map.insert(initial.to_string(), unit);
        }
    }

    map
});

impl FromStr for ByteUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .get(&s.trim().to_ascii_lowercase())
            .copied()
            .ok_or_else(|| anyhow!("unknown byte unit: '{}'", s))
    }
}
