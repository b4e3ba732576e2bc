//! castable_money - money serializer inspection tool
//!
//! Encodes and decodes money values with the configured serializer and
//! converts between numeric and alphabetic ISO currency codes.
//!
//! Usage:
//!   castable_money encode <minor-amount> <CUR>
//!   castable_money decode <raw> [CUR]
//!   castable_money numeric <code>

use anyhow::bail;
use castable_money::domain::{Currency, Money, Value};
use castable_money::{CastError, Config, NumericCurrencyTable};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "castable_money=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    if let Err(err) = run() {
        match err.downcast_ref::<CastError>() {
            Some(cast_err) if cast_err.is_client_error() => {
                tracing::warn!(error = %cast_err, "Rejected input");
            }
            _ => tracing::error!(error = %err, "Command failed"),
        }
        return Err(err);
    }

    Ok(())
}

fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let serializer = config.serializer;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str);

    tracing::debug!(serializer = %serializer, "Loaded configuration");

    match command {
        Some("encode") => {
            let (Some(amount), Some(code)) = (args.get(1), args.get(2)) else {
                bail!("usage: encode <minor-amount> <CUR>");
            };
            let money = Money::parse_minor_units(amount, Currency::new(code)?)?;

            match serializer.serialize(&money)? {
                Value::Record(record) => println!("{}", serde_json::to_string(&record)?),
                Value::Text(text) => println!("{text}"),
                other => println!("{other:?}"),
            }
        }
        Some("decode") => {
            let Some(raw) = args.get(1) else {
                bail!("usage: decode <raw> [CUR]");
            };
            let fallback = args.get(2).map(|code| Currency::new(code)).transpose()?;
            let money = serializer.deserialize(&Value::from(raw.as_str()), fallback)?;
            println!("{money}");
        }
        Some("numeric") => {
            let Some(code) = args.get(1) else {
                bail!("usage: numeric <code>");
            };
            let table = NumericCurrencyTable::global()?;
            match code.trim().parse::<u16>() {
                Ok(numeric) => println!("{}", table.currency_for(numeric)?),
                Err(_) => println!("{:03}", table.numeric_for(Currency::new(code)?)?),
            }
        }
        _ => bail!("usage: castable_money <encode|decode|numeric> ..."),
    }

    Ok(())
}
