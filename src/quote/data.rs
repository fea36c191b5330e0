//! Quote request record matching the wire format of the calculation API
//!
//! Field names are the JSON contract. Defaults are applied at
//! deserialization time; range validation is a separate explicit pass
//! (see `validate`).

use serde::{Deserialize, Serialize};

fn default_prezzo_energia() -> f64 {
    0.30
}

fn default_anni_finanziamento() -> u32 {
    10
}

fn default_usa_rata_semplice() -> bool {
    true
}

fn default_autoconsumo_percent() -> f64 {
    40.0
}

fn default_prezzo_gse() -> f64 {
    0.10
}

fn default_aliquota_detrazione() -> f64 {
    50.0
}

fn default_anni_detrazione() -> u32 {
    10
}

fn default_fattore_prudenza() -> f64 {
    1.0
}

/// Input record for one quote calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcRequest {
    /// Annual household consumption in kWh
    pub consumo_annuo_kwh: f64,

    /// Unit energy price in EUR/kWh (default: 0.30)
    #[serde(default = "default_prezzo_energia")]
    pub prezzo_energia_eur_kwh: f64,

    /// Fixed annual fee on the current supply contract in EUR
    #[serde(default)]
    pub quota_fissa_annua_eur: f64,

    /// Gross installation cost in EUR
    pub costo_impianto_eur: f64,

    /// Capital actually financed, if different from the installation cost.
    /// The tax deduction stays on the installation cost.
    #[serde(default)]
    pub costo_finanziato_eur: Option<f64>,

    /// Financing term in years (default: 10)
    #[serde(default = "default_anni_finanziamento")]
    pub anni_finanziamento: u32,

    /// Straight-line repayment instead of an amortized annuity (default: true)
    #[serde(default = "default_usa_rata_semplice")]
    pub usa_rata_semplice: bool,

    /// Nominal annual interest rate as a percentage (default: 0)
    #[serde(default)]
    pub taeg_annuo_percent: f64,

    /// Estimated annual production in kWh
    pub produzione_annua_kwh: f64,

    /// Share of production consumed on-site, as a percentage (default: 40)
    #[serde(default = "default_autoconsumo_percent")]
    pub autoconsumo_percent: f64,

    /// Feed-in tariff in EUR/kWh for exported energy (default: 0.10)
    #[serde(default = "default_prezzo_gse")]
    pub prezzo_gse_eur_kwh: f64,

    /// Tax deduction rate as a percentage of the installation cost (default: 50)
    #[serde(default = "default_aliquota_detrazione")]
    pub aliquota_detrazione_percent: f64,

    /// Deduction period in years (default: 10)
    #[serde(default = "default_anni_detrazione")]
    pub anni_detrazione: u32,

    /// Conservative multiplier applied to savings and revenue estimates
    /// (default: 1.0)
    #[serde(default = "default_fattore_prudenza")]
    pub fattore_prudenza: f64,

    /// If set and positive, forces the monthly installment
    /// (annual installment = override * 12)
    #[serde(default)]
    pub rata_mensile_override_eur: Option<f64>,
}
