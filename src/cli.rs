use clap::Parser;

use crate::{
    bytes::unit::ByteUnit,
    config::{Config, Overflow, Target},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    pub amount: u64,
    #[arg(default_value = "bytes")]
    pub unit: ByteUnit,

    #[arg(name = "as", long = "as", short = 'a', alias = "to", conflicts_with = "all")]
    pub target: Option<ByteUnit>,
    #[arg(name = "all", long = "all", conflicts_with = "as")]
    pub all: bool,

    #[arg(name = "checked", long = "checked", short = 'c')]
    pub checked: bool,
    #[arg(
        name = "no-label",
        long = "no-label",
        aliases = vec!["no-labels", "nolabel", "raw"]
    )]
    pub no_label: bool,
}

impl TryInto<Config> for Args {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Config, Self::Error> {
        let target = if self.all {
            Target::All
        } else if let Some(unit) = self.target {
            Target::Unit(unit)
        } else {
            Target::Bytes
        };

        let overflow = if self.checked {
            Overflow::Checked
        } else {
            Overflow::Wrap
        };

        let config = Config {
            amount: self.amount,
            unit: self.unit,
            target,
            overflow,
            labels: !self.no_label,
        };

        // surface overflow at parse time rather than halfway through the output
        if overflow == Overflow::Checked {
            config.convert(ByteUnit::Byte)?;
        }

        Ok(config)
    }
}
