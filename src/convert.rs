//! Interactive conversion flow: prompt, validate, look up, print.

use crate::currency_provider::CurrencyRateProvider;
use anyhow::Result;
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{BufRead, Write};
use tracing::debug;

/// Runs one conversion: reads the base currency, target currency and amount
/// from `input`, fetches the rate through `provider` and writes the result to
/// `output`. Lookup failures are reported on `output` as a single
/// `Error: ...` line; only I/O failures propagate.
pub async fn run<P, R, W>(provider: &P, input: &mut R, output: &mut W) -> Result<()>
where
    P: CurrencyRateProvider + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Currency Converter")?;

    let base_currency = prompt_currency(input, output, "Enter the base currency (e.g., USD): ")?;
    let target_currency =
        prompt_currency(input, output, "Enter the target currency (e.g., EUR): ")?;

    write!(output, "Enter the amount to convert: ")?;
    output.flush()?;
    let line = read_line(input)?;
    let amount: Decimal = match line.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            writeln!(output, "Invalid amount. Please enter a numeric value.")?;
            return Ok(());
        }
    };

    match provider.get_rate(&base_currency, &target_currency).await {
        Ok(rate) => {
            debug!("Rate for {base_currency} -> {target_currency}: {rate}");
            let converted =
                (amount * rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            writeln!(
                output,
                "{amount} {base_currency} = {converted:.2} {target_currency}"
            )?;
        }
        Err(e) => writeln!(output, "Error: {e}")?,
    }

    Ok(())
}

/// Currency codes are opaque keys into the remote rate table; the only local
/// normalization is uppercasing.
fn prompt_currency<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    Ok(read_line(input)?.trim().to_uppercase())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
