//! # Sale Pricing
//!
//! The sale total and profit formulas, kept pure so they are trivially
//! testable.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Sale Pricing Formulas                              │
//! │                                                                         │
//! │  price  = Σ(line.amount × line.final_price) + additional − discount    │
//! │  profit = price − Σ(line.amount × line.cost_price)                     │
//! │                                                                         │
//! │  Example:                                                               │
//! │    line  {amount: 2, final: 50.00, cost: 30.00}                        │
//! │    discount 0, additional 0                                             │
//! │    price  = 2 × 50.00            = 100.00                              │
//! │    profit = 100.00 − 2 × 30.00   =  40.00                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::SaleLine;

/// Computed totals for a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleTotals {
    /// Total charged to the customer.
    pub price: Money,
    /// Margin after line costs.
    pub profit: Money,
}

/// Computes sale totals from resolved line snapshots.
///
/// Discount and additional apply to the sale as a whole, not per line.
/// Nothing here caps the discount; a discount larger than the gross total
/// yields a negative price, which the system stores as-is.
pub fn compute_sale_totals(lines: &[SaleLine], discount: Money, additional: Money) -> SaleTotals {
    let gross: Money = lines.iter().map(SaleLine::revenue).sum();
    let cost: Money = lines.iter().map(SaleLine::cost).sum();

    let price = gross + additional - discount;
    let profit = price - cost;

    SaleTotals { price, profit }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(amount: i64, final_cents: i64, cost_cents: i64) -> SaleLine {
        SaleLine {
            id: format!("p-{amount}"),
            name: "pod".into(),
            amount,
            final_price: Money::from_cents(final_cents),
            cost_price: Money::from_cents(cost_cents),
        }
    }

    #[test]
    fn test_worked_example() {
        // One line {amount: 2, final: 50, cost: 30}, no discount/additional
        // → price 100, profit 40.
        let totals = compute_sale_totals(
            &[line(2, 5000, 3000)],
            Money::zero(),
            Money::zero(),
        );

        assert_eq!(totals.price.cents(), 10000);
        assert_eq!(totals.profit.cents(), 4000);
    }

    #[test]
    fn test_discount_and_additional() {
        // 2×50 + 3×20 = 160; +10 additional −25 discount = 145
        // cost = 2×30 + 3×12 = 96; profit = 145 − 96 = 49
        let totals = compute_sale_totals(
            &[line(2, 5000, 3000), line(3, 2000, 1200)],
            Money::from_cents(2500),
            Money::from_cents(1000),
        );

        assert_eq!(totals.price.cents(), 14500);
        assert_eq!(totals.profit.cents(), 4900);
    }

    #[test]
    fn test_empty_lines() {
        let totals = compute_sale_totals(&[], Money::zero(), Money::from_cents(500));
        assert_eq!(totals.price.cents(), 500);
        assert_eq!(totals.profit.cents(), 500);
    }

    #[test]
    fn test_discount_can_push_price_negative() {
        // The formulas do not clamp; an oversized discount is stored as-is.
        let totals = compute_sale_totals(
            &[line(1, 1000, 800)],
            Money::from_cents(2000),
            Money::zero(),
        );

        assert_eq!(totals.price.cents(), -1000);
        assert_eq!(totals.profit.cents(), -1800);
    }
}
