//! Summary Report
//!
//! Income and expense totals, savings, and expense per category checked
//! against the category budget limits.

use std::collections::BTreeMap;

use crate::display::{format_label, format_section};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetLimits, Money, Transaction};

/// Width of the labels in the totals block
const LABEL_WIDTH: usize = 14;

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: String,
    pub spent: Money,
    /// The category's budget limit, if it has one
    pub limit: Option<Money>,
    /// Spending is strictly above the limit
    pub exceeded: bool,
}

/// Summary Report
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense; negative when overspent
    pub savings: Money,
    /// Expense rows sorted alphabetically by category
    pub categories: Vec<CategoryRow>,
}

impl SummaryReport {
    /// Generate a summary for a ledger snapshot
    ///
    /// Fails if any total leaves the representable range.
    pub fn generate(transactions: &[Transaction], budget: &BudgetLimits) -> LedgerResult<Self> {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        let mut by_category: BTreeMap<&str, Money> = BTreeMap::new();

        for txn in transactions {
            if txn.is_income() {
                total_income = accumulate(total_income, txn.amount)?;
            } else {
                total_expense = accumulate(total_expense, txn.amount)?;
                let spent = by_category.entry(txn.category.as_str()).or_default();
                *spent = accumulate(*spent, txn.amount)?;
            }
        }

        let savings = total_income
            .checked_sub(total_expense)
            .ok_or_else(overflow)?;

        let categories = by_category
            .into_iter()
            .map(|(category, spent)| CategoryRow {
                category: category.to_string(),
                spent,
                limit: budget.limit_for(category),
                exceeded: budget.is_exceeded(category, spent),
            })
            .collect();

        Ok(Self {
            total_income,
            total_expense,
            savings,
            categories,
        })
    }

    /// Rows that went over their budget limit
    pub fn exceeded(&self) -> impl Iterator<Item = &CategoryRow> {
        self.categories.iter().filter(|row| row.exceeded)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = format_section("Summary");
        output.push('\n');

        for (label, amount) in [
            ("Total Income", self.total_income),
            ("Total Expense", self.total_expense),
            ("Savings", self.savings),
        ] {
            output.push_str(&format_label(label, LABEL_WIDTH));
            output.push_str(&amount.format_with_symbol(symbol));
            output.push('\n');
        }

        output.push_str("\nSpending by Category:\n");
        for row in &self.categories {
            output.push_str(&format!(
                "  {}: {}",
                row.category,
                row.spent.format_with_symbol(symbol)
            ));
            if let (true, Some(limit)) = (row.exceeded, row.limit) {
                output.push_str(&format!(
                    " ⚠️  Exceeded budget limit of {}",
                    limit.format_with_symbol(symbol)
                ));
            }
            output.push('\n');
        }

        output
    }
}

fn accumulate(total: Money, amount: Money) -> LedgerResult<Money> {
    total.checked_add(amount).ok_or_else(overflow)
}

fn overflow() -> LedgerError {
    LedgerError::Validation("Totals are too large to summarize".into())
}
