use console::{pad_str, Alignment};

use crate::{bytes::unit::ByteUnit, config::Config};

pub fn make_rows(config: &Config) -> anyhow::Result<String> {
    let values = config
        .targets()
        .into_iter()
        .map(|unit| Ok((unit, config.convert(unit)?.to_string())))
        .collect::<anyhow::Result<Vec<(ByteUnit, String)>>>()?;

    let max_value_len = values.iter().map(|(_, v)| v.len()).max().unwrap_or(0);

    let mut rows = String::new();
    for (unit, value) in &values {
        if config.labels {
            let value = pad_str(value, max_value_len, Alignment::Right, None);
            rows.push_str(&format!("{value} {unit}\n"));
        } else {
            rows.push_str(&format!("{value}\n"));
        }
    }

    Ok(rows)
}

pub fn print_rows(config: &Config) -> anyhow::Result<()> {
    print!("{}", make_rows(config)?);
    Ok(())
}
