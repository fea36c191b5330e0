//! Core quote calculation
//!
//! Pure arithmetic over an already-validated request: no I/O, no clock, no
//! randomness. Division by zero in the financing math is ruled out by the
//! financing-mode fallbacks, not by error handling.

use crate::quote::CalcRequest;

use super::cashflows::{CalcResponse, CashflowYear};
use super::financing::FinancingMode;
use super::PROJECTION_YEARS;

/// Current annual electricity spend: consumption at the unit price plus the
/// fixed annual fee
pub fn current_annual_spend(consumo_kwh: f64, prezzo_eur_kwh: f64, quota_fissa_eur: f64) -> f64 {
    consumo_kwh * prezzo_eur_kwh + quota_fissa_eur
}

/// Annual tax deduction, always on the installation cost.
///
/// Even when a separate financed amount is supplied the deduction stays on
/// the declared cost of the asset.
pub fn annual_deduction(
    costo_impianto_eur: f64,
    aliquota_percent: f64,
    anni_detrazione: u32,
) -> f64 {
    costo_impianto_eur * (aliquota_percent / 100.0) / anni_detrazione as f64
}

/// Split annual production into self-consumed and exported kWh.
///
/// Self-consumed is clamped into [0, production]; exported is the remainder,
/// clamped to >= 0. The two always sum to the production.
pub fn self_consumption_split(produzione_kwh: f64, autoconsumo_percent: f64) -> (f64, f64) {
    let autoconsumati = (produzione_kwh * (autoconsumo_percent / 100.0))
        .max(0.0)
        .min(produzione_kwh);
    let immessi = (produzione_kwh - autoconsumati).max(0.0);
    (autoconsumati, immessi)
}

/// Run the full quote calculation for a validated request
pub fn calculate(request: &CalcRequest) -> CalcResponse {
    let spesa_attuale = current_annual_spend(
        request.consumo_annuo_kwh,
        request.prezzo_energia_eur_kwh,
        request.quota_fissa_annua_eur,
    );

    let rata_annua = FinancingMode::resolve(request).annual_installment_eur();

    let detrazione_annua = annual_deduction(
        request.costo_impianto_eur,
        request.aliquota_detrazione_percent,
        request.anni_detrazione,
    );

    let (kwh_autoconsumati, kwh_immessi) =
        self_consumption_split(request.produzione_annua_kwh, request.autoconsumo_percent);

    let risparmio =
        kwh_autoconsumati * request.prezzo_energia_eur_kwh * request.fattore_prudenza;
    let ricavo_gse = kwh_immessi * request.prezzo_gse_eur_kwh * request.fattore_prudenza;

    let costo_netto = rata_annua - detrazione_annua - risparmio - ricavo_gse;
    let delta = costo_netto - spesa_attuale;

    let messaggio = if delta <= 0.0 {
        "Paghi uguale o meno già da subito (stimato).".to_string()
    } else {
        format!("Paghi circa {:.0}€ in più all'anno (stimato).", delta)
    };

    // Installment and deduction phase out after their terms; savings and
    // revenue are held constant over the horizon.
    let cashflow_anni = (1..=PROJECTION_YEARS)
        .map(|anno| {
            let rata = if anno <= request.anni_finanziamento {
                rata_annua
            } else {
                0.0
            };
            let detrazione = if anno <= request.anni_detrazione {
                detrazione_annua
            } else {
                0.0
            };
            CashflowYear {
                anno,
                costo_netto_eur: rata - detrazione - risparmio - ricavo_gse,
            }
        })
        .collect();

    CalcResponse {
        spesa_annua_attuale_eur: spesa_attuale,
        rata_annua_impianto_eur: rata_annua,
        detrazione_annua_eur: detrazione_annua,
        kwh_autoconsumati,
        kwh_immessi,
        risparmio_bolletta_eur: risparmio,
        ricavo_gse_eur: ricavo_gse,
        costo_netto_annuo_eur: costo_netto,
        delta_vs_spesa_attuale_eur: delta,
        messaggio,
        cashflow_anni,
    }
}
