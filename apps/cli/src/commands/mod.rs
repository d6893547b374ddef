//! # Commands
//!
//! One module per subcommand. Each handler takes the shared pricing rules
//! and a writer, so tests can capture output without a subprocess.
//!
//! | Command   | Handler                 |
//! |-----------|-------------------------|
//! | `demo`    | [`demo::run_demo`]      |
//! | `total`   | [`total::run_total`]    |
//! | `catalog` | [`catalog::run_catalog`] |

pub mod catalog;
pub mod demo;
pub mod total;

/// Width of the separator rules in text output.
pub(crate) const RULE_WIDTH: usize = 60;

pub(crate) fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}
