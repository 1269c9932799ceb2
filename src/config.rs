use std::ffi::OsString;

use anyhow::{anyhow, Context};
use clap::Parser;

use crate::{
    bytes::{convert, unit::ByteUnit},
    cli::Args,
};

pub struct Config {
    pub amount: u64,
    pub unit: ByteUnit,
    pub target: Target,
    pub overflow: Overflow,
    pub labels: bool,
}

impl Config {
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(itr).context("error parsing arguments into Config")?;
        args.try_into()
    }

    /// Converts the configured amount into `target`, honoring the overflow mode.
    pub fn convert(&self, target: ByteUnit) -> anyhow::Result<u64> {
        match self.overflow {
            Overflow::Wrap => Ok(convert::convert_to(self.unit, self.amount, target)),
            Overflow::Checked => convert::checked_convert_to(self.unit, self.amount, target)
                .ok_or_else(|| {
                    anyhow!(
                        "{} {} does not fit in a 64-bit byte count",
                        self.amount,
                        self.unit.name()
                    )
                }),
        }
    }

    pub fn targets(&self) -> Vec<ByteUnit> {
        match self.target {
            Target::Bytes => vec![ByteUnit::Byte],
            Target::Unit(unit) => vec![unit],
            Target::All => ByteUnit::ALL.to_vec(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Target {
    Bytes,
    Unit(ByteUnit),
    All,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Overflow {
    Wrap,
    Checked,
}
