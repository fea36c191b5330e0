//! Financing mode resolution and installment arithmetic
//!
//! The installment method is selected once, by priority: no capital, then a
//! quoted monthly installment, then straight-line repayment, then an
//! amortized annuity.

use crate::quote::CalcRequest;

/// How the financed capital is repaid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FinancingMode {
    /// Nothing to finance; no installment
    Unfinanced,
    /// Installer-quoted monthly installment, overriding all financing math
    MonthlyOverride { rata_mensile_eur: f64 },
    /// Straight-line repayment, no interest
    StraightLine { capital_eur: f64, term_years: u32 },
    /// Equal monthly installments amortizing the capital at a nominal
    /// annual rate
    Annuity {
        capital_eur: f64,
        term_years: u32,
        taeg_annuo_percent: f64,
    },
}

impl FinancingMode {
    /// Resolve the financing mode for a request.
    ///
    /// The capital to be financed is the explicit financed amount when
    /// present, otherwise the installation cost, clamped to >= 0.
    pub fn resolve(request: &CalcRequest) -> Self {
        let capital_eur = request
            .costo_finanziato_eur
            .unwrap_or(request.costo_impianto_eur)
            .max(0.0);

        if capital_eur == 0.0 {
            return FinancingMode::Unfinanced;
        }

        if let Some(rata_mensile_eur) = request.rata_mensile_override_eur {
            if rata_mensile_eur > 0.0 {
                return FinancingMode::MonthlyOverride { rata_mensile_eur };
            }
        }

        if request.usa_rata_semplice {
            return FinancingMode::StraightLine {
                capital_eur,
                term_years: request.anni_finanziamento,
            };
        }

        FinancingMode::Annuity {
            capital_eur,
            term_years: request.anni_finanziamento,
            taeg_annuo_percent: request.taeg_annuo_percent,
        }
    }

    /// Annual installment for this mode in EUR
    pub fn annual_installment_eur(&self) -> f64 {
        match *self {
            FinancingMode::Unfinanced => 0.0,
            FinancingMode::MonthlyOverride { rata_mensile_eur } => rata_mensile_eur * 12.0,
            FinancingMode::StraightLine {
                capital_eur,
                term_years,
            } => straight_line_annual_installment(capital_eur, term_years),
            FinancingMode::Annuity {
                capital_eur,
                term_years,
                taeg_annuo_percent,
            } => annuity_annual_installment(capital_eur, term_years, taeg_annuo_percent),
        }
    }
}

/// Straight-line annual installment: capital spread evenly over the term
pub fn straight_line_annual_installment(capital_eur: f64, term_years: u32) -> f64 {
    capital_eur / term_years as f64
}

/// Annual installment of an annuity amortizing `capital_eur` in equal
/// monthly payments over `term_years` at a nominal annual rate.
///
/// A rate <= 0 (and hence a monthly rate of exactly zero) falls back to
/// straight-line repayment, so the denominator can never vanish.
pub fn annuity_annual_installment(
    capital_eur: f64,
    term_years: u32,
    taeg_annuo_percent: f64,
) -> f64 {
    if taeg_annuo_percent <= 0.0 {
        return straight_line_annual_installment(capital_eur, term_years);
    }

    let monthly_rate = (taeg_annuo_percent / 100.0) / 12.0;
    let months = (term_years * 12) as i32;

    if monthly_rate == 0.0 {
        return straight_line_annual_installment(capital_eur, term_years);
    }

    let monthly_installment =
        capital_eur * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-months));
    monthly_installment * 12.0
}
