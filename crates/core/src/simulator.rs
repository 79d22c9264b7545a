use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::round2;

/// Hard cap on the schedule builder: 30 years of monthly payments. The loop
/// terminates here even when rounding keeps a residual balance alive.
pub const MAX_SCHEDULE_MONTHS: u32 = 360;

/// Fixed-payment loan as entered in the simulator: amount owed, annual rate
/// as a percentage, and the flat monthly payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    pub rate: f64,
    pub monthly_payment: f64,
}

/// One row of the month-by-month payoff chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthEntry {
    pub month: u32,
    pub payment: f64,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub remaining_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmortizationResult {
    /// Interest paid beyond the principal ("invisible debt").
    pub total_interest: f64,
    pub months_to_pay_off: u32,
    /// True cost of the loan: monthly payment times the whole-month count.
    pub total_payment: f64,
    /// True cost over principal; 0 when principal is 0.
    pub invisible_cost_ratio: f64,
    /// Interest-only payment, the stability point. Below it the balance grows.
    pub min_payment: f64,
    pub schedule: Vec<MonthEntry>,
}

/// Validation outcome, not a fault: the caller surfaces the corrective hint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("monthly payment is too low to cover interest")]
    PaymentTooLow { min_payment_needed: f64 },
}

/// Computes payoff time, total cost and the payoff schedule for a
/// fixed-payment loan.
///
/// The headline month count comes from the closed form
/// `n = -ln(1 - rP/M) / ln(1 + r)`, rounded up to whole billing months; the
/// schedule is simulated independently and its length may land one month off
/// that ceiling. Both are reported as-is.
pub fn amortize(terms: &LoanTerms) -> Result<AmortizationResult, SimulationError> {
    // No interest: every payment is principal. The general formula divides by
    // ln(1 + r), which is 0 here, so this is its own path.
    if terms.rate <= 0.0 {
        return Ok(AmortizationResult {
            total_interest: 0.0,
            months_to_pay_off: (terms.principal / terms.monthly_payment).ceil() as u32,
            total_payment: terms.principal,
            invisible_cost_ratio: 1.0,
            min_payment: 0.0,
            schedule: Vec::new(),
        });
    }

    let monthly_rate = terms.rate / 100.0 / 12.0;
    let min_payment = terms.principal * monthly_rate;

    if terms.monthly_payment <= min_payment {
        return Err(SimulationError::PaymentTooLow {
            min_payment_needed: round2(min_payment + 1.0),
        });
    }

    // 1 - rP/M. The guard above already implies this is positive; it is
    // re-checked against float edge cases before taking the logarithm.
    let inner = 1.0 - min_payment / terms.monthly_payment;
    if inner <= 0.0 {
        return Err(SimulationError::PaymentTooLow {
            min_payment_needed: round2(min_payment + 1.0),
        });
    }

    let exact_months = -inner.ln() / (1.0 + monthly_rate).ln();
    let months_to_pay_off = exact_months.ceil() as u32;

    // Billing convention: cost is the integer month count times the payment,
    // overstating the exact figure by at most one payment.
    let total_payment = terms.monthly_payment * f64::from(months_to_pay_off);
    let total_interest = total_payment - terms.principal;
    let invisible_cost_ratio = if terms.principal > 0.0 {
        round2(total_payment / terms.principal)
    } else {
        0.0
    };

    Ok(AmortizationResult {
        total_interest: round2(total_interest),
        months_to_pay_off,
        total_payment: round2(total_payment),
        invisible_cost_ratio,
        min_payment: round2(min_payment),
        schedule: build_schedule(terms.principal, monthly_rate, terms.monthly_payment),
    })
}

fn build_schedule(principal: f64, monthly_rate: f64, monthly_payment: f64) -> Vec<MonthEntry> {
    let mut schedule = Vec::new();
    let mut balance = principal;
    let mut month = 0;

    while balance > 0.0 && month < MAX_SCHEDULE_MONTHS {
        let interest = balance * monthly_rate;
        let mut principal_paid = monthly_payment - interest;

        if balance + interest < monthly_payment {
            // Final month: the payment clears whatever is left.
            principal_paid = balance;
            balance = 0.0;
        } else {
            balance -= principal_paid;
        }

        month += 1;
        schedule.push(MonthEntry {
            month,
            payment: monthly_payment,
            principal_paid,
            interest_paid: interest,
            remaining_balance: balance.max(0.0),
        });

        if balance <= 0.0 {
            break;
        }
    }

    schedule
}
