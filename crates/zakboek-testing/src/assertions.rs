//! Custom assertions for zakboek-specific validation.
//!
//! Provides high-level assertions that make tests more readable:
//! - Batch report totals
//! - Synchronizer verdict checks on JSON output

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert a batch report's headline figures.
pub fn assert_batch_totals(report: &Value, bag_count: u64, total_amount: &str) -> Result<()> {
    let totals = report
        .get("totals")
        .context("Expected 'totals' object in report JSON")?;

    let count = totals["bag_count"]
        .as_u64()
        .context("Expected numeric 'totals.bag_count'")?;
    if count != bag_count {
        anyhow::bail!("Expected {} bags, got {}", bag_count, count);
    }

    let amount = totals["total_amount"]
        .as_str()
        .context("Expected string 'totals.total_amount'")?;
    if amount != total_amount {
        anyhow::bail!("Expected total {}, got {}", total_amount, amount);
    }

    Ok(())
}

/// Assert the outcomes array carries exactly these (id, status) pairs, in order.
pub fn assert_outcomes(report: &Value, expected: &[(u64, &str)]) -> Result<()> {
    let outcomes = report["outcomes"]
        .as_array()
        .context("Expected 'outcomes' array in report JSON")?;

    if outcomes.len() != expected.len() {
        anyhow::bail!(
            "Expected {} outcomes, got {}",
            expected.len(),
            outcomes.len()
        );
    }

    for (i, (outcome, (id, status))) in outcomes.iter().zip(expected).enumerate() {
        let got_id = outcome["id"]
            .as_u64()
            .with_context(|| format!("Outcome {} missing numeric id", i))?;
        let got_status = outcome["status"]
            .as_str()
            .with_context(|| format!("Outcome {} missing status", i))?;

        if got_id != *id || got_status != *status {
            anyhow::bail!(
                "Outcome {}: expected bag {} {}, got bag {} {}",
                i,
                id,
                status,
                got_id,
                got_status
            );
        }
    }

    Ok(())
}

/// Assert how many outcomes in a report carry the given status.
pub fn assert_status_count(report: &Value, status: &str, expected: usize) -> Result<()> {
    let outcomes = report["outcomes"]
        .as_array()
        .context("Expected 'outcomes' array in report JSON")?;

    let got = outcomes
        .iter()
        .filter(|o| o["status"].as_str() == Some(status))
        .count();

    if got != expected {
        anyhow::bail!("Expected {} '{}' outcomes, got {}", expected, status, got);
    }

    Ok(())
}
