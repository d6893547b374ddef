//! # `basket catalog`
//!
//! Lists products and active offers.

use std::io::Write;

use acme_core::PricingRules;

use super::rule;
use crate::error::CliResult;

pub fn run_catalog(rules: &PricingRules, out: &mut dyn Write) -> CliResult<()> {
    writeln!(out, "{:<8}{:<30}{:>10}", "CODE", "PRODUCT", "PRICE")?;
    writeln!(out, "{}", rule('-'))?;
    for product in rules.catalog().products() {
        writeln!(
            out,
            "{:<8}{:<30}{:>10}",
            product.code(),
            product.name(),
            product.price().to_string()
        )?;
    }

    if !rules.offers().is_empty() {
        writeln!(out)?;
        writeln!(out, "Offers:")?;
        for offer in rules.offers() {
            writeln!(out, "  - {}", offer.name())?;
        }
    }

    Ok(())
}
