//! # `basket demo`
//!
//! Replays the four reference baskets against the loaded pricing rules.
//!
//! ```text
//! ============================================================
//! Basket 2: R01, R01
//! ============================================================
//! Added: Red Widget (R01) - $32.95
//! Added: Red Widget (R01) - $32.95
//!
//! ------------------------------------------------------------
//! TOTAL: $54.38
//! ============================================================
//! ```

use std::io::Write;

use acme_core::PricingRules;
use tracing::debug;

use super::rule;
use crate::error::CliResult;

/// The baskets shown by the demo.
pub const REFERENCE_BASKETS: &[&[&str]] = &[
    &["B01", "G01"],
    &["R01", "R01"],
    &["R01", "G01"],
    &["B01", "B01", "R01", "R01", "R01"],
];

const BANNER: &str = "\
╔════════════════════════════════════════════════════════════╗
║           ACME WIDGET CO - BASKET CALCULATOR               ║
╚════════════════════════════════════════════════════════════╝";

pub fn run_demo(rules: &PricingRules, out: &mut dyn Write) -> CliResult<()> {
    writeln!(out)?;
    writeln!(out, "{BANNER}")?;

    for (number, codes) in REFERENCE_BASKETS.iter().enumerate() {
        debug!(basket = number + 1, ?codes, "Running reference basket");
        let mut basket = rules.basket();

        writeln!(out)?;
        writeln!(out, "{}", rule('='))?;
        writeln!(out, "Basket {}: {}", number + 1, codes.join(", "))?;
        writeln!(out, "{}", rule('='))?;

        for code in codes.iter() {
            let product = basket.add(code)?;
            writeln!(
                out,
                "Added: {} ({}) - {}",
                product.name(),
                product.code(),
                product.price()
            )?;
        }

        writeln!(out)?;
        writeln!(out, "{}", rule('-'))?;
        writeln!(out, "TOTAL: {}", basket.total()?)?;
        writeln!(out, "{}", rule('='))?;
    }

    writeln!(out)?;
    Ok(())
}
