//! # `basket total <CODE>...`
//!
//! Prices an ad-hoc basket. Text output rounds to cents; JSON output carries
//! the exact decimal figures.

use std::io::Write;

use acme_core::{PriceBreakdown, PricingRules};
use clap::ValueEnum;
use serde::Serialize;

use super::rule;
use crate::error::CliResult;

/// Output format for `basket total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable receipt
    #[default]
    Text,
    /// Machine-readable breakdown
    Json,
}

/// JSON shape of a priced basket.
#[derive(Debug, Serialize)]
struct TotalReport<'a> {
    items: Vec<&'a str>,
    #[serde(flatten)]
    breakdown: PriceBreakdown,
}

pub fn run_total(
    rules: &PricingRules,
    codes: &[String],
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    let mut basket = rules.basket();
    for code in codes {
        basket.add(code)?;
    }
    let breakdown = basket.breakdown()?;

    match format {
        OutputFormat::Json => {
            let report = TotalReport {
                items: basket.items().iter().map(|p| p.code()).collect(),
                breakdown,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for product in basket.items() {
                writeln!(
                    out,
                    "{:<8}{:<30}{:>10}",
                    product.code(),
                    product.name(),
                    product.price().to_string()
                )?;
            }
            writeln!(out, "{}", rule('-'))?;
            writeln!(out, "{:<38}{:>10}", "Subtotal", breakdown.subtotal.to_string())?;
            if !breakdown.discount.is_zero() {
                writeln!(out, "{:<38}{:>10}", "Offers", format!("-{}", breakdown.discount))?;
            }
            writeln!(out, "{:<38}{:>10}", "Delivery", breakdown.delivery.to_string())?;
            writeln!(out, "{:<38}{:>10}", "TOTAL", breakdown.total.to_string())?;
        }
    }

    Ok(())
}
