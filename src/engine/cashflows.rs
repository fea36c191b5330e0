//! Output records for quote calculations

use serde::{Deserialize, Serialize};

/// Net cost for one year of the projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashflowYear {
    /// Year number, 1-based
    pub anno: u32,

    /// Net cost for the year in EUR (negative = net gain)
    pub costo_netto_eur: f64,
}

/// Derived output record for one quote calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcResponse {
    /// Current annual electricity spend in EUR
    pub spesa_annua_attuale_eur: f64,

    /// Annual installment on the installation in EUR
    pub rata_annua_impianto_eur: f64,

    /// Annual tax deduction in EUR
    pub detrazione_annua_eur: f64,

    /// Energy consumed on-site in kWh
    pub kwh_autoconsumati: f64,

    /// Energy exported to the grid in kWh
    pub kwh_immessi: f64,

    /// Annual bill savings from self-consumption in EUR
    pub risparmio_bolletta_eur: f64,

    /// Annual feed-in revenue in EUR
    pub ricavo_gse_eur: f64,

    /// Steady-state net annual cost in EUR
    pub costo_netto_annuo_eur: f64,

    /// Net annual cost minus current spend; positive means the
    /// installation costs more per year than the status quo
    pub delta_vs_spesa_attuale_eur: f64,

    /// Human-readable verdict
    pub messaggio: String,

    /// Year-by-year net cost over the projection horizon
    pub cashflow_anni: Vec<CashflowYear>,
}

impl CalcResponse {
    /// Total net cost over the whole projection horizon in EUR
    pub fn total_net_cost_eur(&self) -> f64 {
        self.cashflow_anni.iter().map(|y| y.costo_netto_eur).sum()
    }

    /// Cumulative advantage versus staying on grid-only supply over the
    /// whole horizon in EUR (positive = the installation comes out ahead)
    pub fn total_advantage_eur(&self) -> f64 {
        self.spesa_annua_attuale_eur * self.cashflow_anni.len() as f64 - self.total_net_cost_eur()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_years(spesa: f64, costi: &[f64]) -> CalcResponse {
        CalcResponse {
            spesa_annua_attuale_eur: spesa,
            rata_annua_impianto_eur: 0.0,
            detrazione_annua_eur: 0.0,
            kwh_autoconsumati: 0.0,
            kwh_immessi: 0.0,
            risparmio_bolletta_eur: 0.0,
            ricavo_gse_eur: 0.0,
            costo_netto_annuo_eur: 0.0,
            delta_vs_spesa_attuale_eur: 0.0,
            messaggio: String::new(),
            cashflow_anni: costi
                .iter()
                .enumerate()
                .map(|(i, &costo_netto_eur)| CashflowYear {
                    anno: i as u32 + 1,
                    costo_netto_eur,
                })
                .collect(),
        }
    }

    #[test]
    fn test_total_net_cost() {
        let response = response_with_years(900.0, &[100.0, -50.0, -50.0]);
        assert_eq!(response.total_net_cost_eur(), 0.0);
    }

    #[test]
    fn test_total_advantage() {
        let response = response_with_years(900.0, &[100.0, -50.0, -50.0]);
        // 3 years at 900 on the grid vs 0 total with the installation
        assert_eq!(response.total_advantage_eur(), 2700.0);
    }
}
