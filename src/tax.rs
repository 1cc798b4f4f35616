//! Personal income-tax estimation over a progressive bracket table.
//!
//! The bracket table and deduction constants are configuration data, not
//! engine logic: the estimator accepts them as input so the same core
//! works across bracket definitions. The default bundle carries an
//! illustrative Thai-style table; the estimate is not tax advice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::format_whole;

/// A contiguous income range taxed at a single marginal rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Taxable income where the bracket begins.
    pub lower_bound: Decimal,
    /// Taxable income where the bracket ends; `None` for the unbounded top
    /// bracket.
    pub upper_bound: Option<Decimal>,
    /// Marginal rate for income inside the bracket, e.g. `0.05` for 5%.
    pub rate: Decimal,
}

/// Deduction constants applied before the bracket table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deductions {
    /// Flat personal allowance.
    pub personal_allowance: Decimal,
    /// Social-security contribution rate on annual income.
    pub social_security_rate: Decimal,
    /// Annual cap on the social-security contribution.
    pub social_security_cap: Decimal,
    /// Flat provident-fund allowance.
    pub provident_fund: Decimal,
}

/// The configuration bundle the estimator runs against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxParameters {
    /// Progressive brackets in ascending order of `lower_bound`.
    pub brackets: Vec<TaxBracket>,
    /// Deduction constants.
    pub deductions: Deductions,
}

impl Default for TaxParameters {
    /// An illustrative bundle following the Thai personal income tax
    /// shape: eight progressive brackets from 0% to 35%, a personal
    /// allowance, a capped social-security contribution, and a
    /// provident-fund allowance.
    fn default() -> Self {
        let bracket = |lower: i64, upper: Option<i64>, rate_percent: i64| TaxBracket {
            lower_bound: Decimal::from(lower),
            upper_bound: upper.map(Decimal::from),
            rate: Decimal::new(rate_percent, 2),
        };

        Self {
            brackets: vec![
                bracket(0, Some(150_000), 0),
                bracket(150_000, Some(300_000), 5),
                bracket(300_000, Some(500_000), 10),
                bracket(500_000, Some(750_000), 15),
                bracket(750_000, Some(1_000_000), 20),
                bracket(1_000_000, Some(2_000_000), 25),
                bracket(2_000_000, Some(5_000_000), 30),
                bracket(5_000_000, None, 35),
            ],
            deductions: Deductions {
                personal_allowance: Decimal::from(60_000),
                social_security_rate: Decimal::new(5, 2),
                social_security_cap: Decimal::from(9_000),
                provident_fund: Decimal::from(10_000),
            },
        }
    }
}

/// Tax charged on one bracket slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketTax {
    /// Human-readable bracket range, e.g. `"150,000 - 300,000"` or
    /// `"5,000,000+"`.
    pub range: String,
    /// The bracket's marginal rate as a percentage, e.g. `5` for 5%.
    pub rate: Decimal,
    /// Tax charged on the slice of taxable income inside the bracket.
    pub amount: Decimal,
}

/// Per-month averages of the annual figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAverage {
    /// Gross income per month.
    pub gross_income: Decimal,
    /// Net income per month.
    pub net_income: Decimal,
    /// Tax per month.
    pub tax: Decimal,
    /// Social-security contribution per month.
    pub social_security: Decimal,
}

/// The full tax estimate for one annual income figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxSummary {
    /// The annual income the estimate was made for.
    pub annual_income: Decimal,
    /// Income left after all deductions, floored at zero.
    pub taxable_income: Decimal,
    /// Total tax across all bracket slices.
    pub tax_amount: Decimal,
    /// The social-security contribution, rate times income capped at the
    /// annual maximum.
    pub social_security: Decimal,
    /// `annual_income - tax_amount - social_security`.
    pub net_income: Decimal,
    /// Every annual figure divided by 12.
    pub monthly_average: MonthlyAverage,
    /// The bracket slices that overlap the taxable income, ascending.
    pub brackets: Vec<BracketTax>,
}

/// Estimate personal income tax for `annual_income` under `parameters`.
///
/// Brackets are walked in ascending order and the walk stops once the
/// taxable income is fully covered, so the breakdown only contains slices
/// that were actually reached.
pub fn estimate_tax(annual_income: Decimal, parameters: &TaxParameters) -> TaxSummary {
    let deductions = &parameters.deductions;

    let social_security =
        (annual_income * deductions.social_security_rate).min(deductions.social_security_cap);
    let total_deductions =
        deductions.personal_allowance + social_security + deductions.provident_fund;
    let taxable_income = (annual_income - total_deductions).max(Decimal::ZERO);

    let mut tax_amount = Decimal::ZERO;
    let mut brackets = Vec::new();

    for bracket in &parameters.brackets {
        if taxable_income <= bracket.lower_bound {
            break;
        }

        let upper = bracket
            .upper_bound
            .unwrap_or(taxable_income)
            .min(taxable_income);
        let amount = (upper - bracket.lower_bound) * bracket.rate;
        tax_amount += amount;

        brackets.push(BracketTax {
            range: bracket_range_label(bracket),
            rate: bracket.rate * Decimal::ONE_HUNDRED,
            amount,
        });
    }

    let net_income = annual_income - tax_amount - social_security;
    let twelve = Decimal::from(12);

    TaxSummary {
        annual_income,
        taxable_income,
        tax_amount,
        social_security,
        net_income,
        monthly_average: MonthlyAverage {
            gross_income: annual_income / twelve,
            net_income: net_income / twelve,
            tax: tax_amount / twelve,
            social_security: social_security / twelve,
        },
        brackets,
    }
}

fn bracket_range_label(bracket: &TaxBracket) -> String {
    match bracket.upper_bound {
        Some(upper) => format!(
            "{} - {}",
            format_whole(bracket.lower_bound),
            format_whole(upper)
        ),
        None => format!("{}+", format_whole(bracket.lower_bound)),
    }
}
