//! Installer offer catalog
//!
//! The catalog is the installer's price list: named offers with installed
//! capacity, gross price, optional storage, and quoted financing conditions
//! per term. An offer plus a household profile converts into a quote request.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::quote::CalcRequest;

/// Annual yield assumption per installed kW (kWh/kW/year)
pub const KWH_PER_KW_PER_YEAR: f64 = 1650.0;

/// One entry of the installer's price list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    /// Stable offer identifier
    pub id: String,

    /// Display name
    pub label: String,

    /// Gross installed price in EUR
    pub prezzo_eur: f64,

    /// Installed DC capacity in kW
    pub potenza_kw: f64,

    /// Storage capacity in kWh, when the offer includes a battery
    #[serde(default)]
    pub accumulo_kwh: Option<f64>,

    /// Quoted monthly installment by financing term in months
    #[serde(default)]
    pub rate_mensili_eur: BTreeMap<u32, f64>,

    /// Quoted TAEG by financing term in months
    #[serde(default)]
    pub taeg_annuo_percent_by_term: BTreeMap<u32, f64>,
}

impl Offer {
    /// Estimated annual production for this offer's capacity
    pub fn estimated_production_kwh(&self) -> f64 {
        self.potenza_kw * KWH_PER_KW_PER_YEAR
    }

    /// Financing terms this offer quotes, in months, ascending
    pub fn financing_terms(&self) -> Vec<u32> {
        self.rate_mensili_eur.keys().copied().collect()
    }

    /// Build the quote request for this offer and household.
    ///
    /// With a financing term the quoted monthly installment becomes the
    /// override and the quoted TAEG is carried along; without one the
    /// purchase is cash, so nothing is financed while the deduction stays on
    /// the full price.
    pub fn to_request(&self, household: &HouseholdProfile, term_months: Option<u32>) -> CalcRequest {
        let (costo_finanziato, anni, rata_override, taeg, rata_semplice) = match term_months {
            Some(months) => (
                None,
                (months / 12).max(1),
                self.rate_mensili_eur.get(&months).copied(),
                self.taeg_annuo_percent_by_term
                    .get(&months)
                    .copied()
                    .unwrap_or(0.0),
                false,
            ),
            None => (Some(0.0), 1, None, 0.0, true),
        };

        CalcRequest {
            consumo_annuo_kwh: household.consumo_annuo_kwh,
            prezzo_energia_eur_kwh: household.prezzo_energia_eur_kwh,
            quota_fissa_annua_eur: household.quota_fissa_annua_eur,
            costo_impianto_eur: self.prezzo_eur,
            costo_finanziato_eur: costo_finanziato,
            anni_finanziamento: anni,
            usa_rata_semplice: rata_semplice,
            taeg_annuo_percent: taeg,
            produzione_annua_kwh: self.estimated_production_kwh(),
            autoconsumo_percent: household.autoconsumo_percent,
            prezzo_gse_eur_kwh: household.prezzo_gse_eur_kwh,
            aliquota_detrazione_percent: household.aliquota_detrazione_percent,
            anni_detrazione: household.anni_detrazione,
            fattore_prudenza: household.fattore_prudenza,
            rata_mensile_override_eur: rata_override,
        }
    }
}

/// Household-side inputs shared across offer evaluations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub consumo_annuo_kwh: f64,
    pub prezzo_energia_eur_kwh: f64,
    pub quota_fissa_annua_eur: f64,
    pub autoconsumo_percent: f64,
    pub prezzo_gse_eur_kwh: f64,
    pub aliquota_detrazione_percent: f64,
    pub anni_detrazione: u32,
    pub fattore_prudenza: f64,
}

/// The full installer price list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<Offer>,
}

/// Load a catalog from a JSON file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> anyhow::Result<Catalog> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&raw)
        .with_context(|| format!("malformed catalog JSON in {}", path.display()))?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"{
        "items": [
            {
                "id": "pv3",
                "label": "Impianto 3 kW",
                "prezzo_eur": 8000,
                "potenza_kw": 3.0,
                "rate_mensili_eur": { "60": 150.0, "120": 84.0 },
                "taeg_annuo_percent_by_term": { "60": 4.9, "120": 5.9 }
            },
            {
                "id": "pv6-storage",
                "label": "Impianto 6 kW con accumulo",
                "prezzo_eur": 16500,
                "potenza_kw": 6.0,
                "accumulo_kwh": 10.0
            }
        ]
    }"#;

    fn household() -> HouseholdProfile {
        HouseholdProfile {
            consumo_annuo_kwh: 3000.0,
            prezzo_energia_eur_kwh: 0.30,
            quota_fissa_annua_eur: 0.0,
            autoconsumo_percent: 40.0,
            prezzo_gse_eur_kwh: 0.10,
            aliquota_detrazione_percent: 50.0,
            anni_detrazione: 10,
            fattore_prudenza: 1.0,
        }
    }

    #[test]
    fn test_parse_catalog() {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON).unwrap();
        assert_eq!(catalog.items.len(), 2);

        let pv3 = &catalog.items[0];
        assert_eq!(pv3.financing_terms(), vec![60, 120]);
        assert_eq!(pv3.rate_mensili_eur[&120], 84.0);
        assert_eq!(pv3.accumulo_kwh, None);

        let pv6 = &catalog.items[1];
        assert_eq!(pv6.accumulo_kwh, Some(10.0));
        assert!(pv6.financing_terms().is_empty());
    }

    #[test]
    fn test_estimated_production() {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON).unwrap();
        assert_eq!(catalog.items[0].estimated_production_kwh(), 3.0 * 1650.0);
    }

    #[test]
    fn test_financed_conversion_carries_quoted_installment() {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON).unwrap();
        let request = catalog.items[0].to_request(&household(), Some(120));

        assert_eq!(request.costo_impianto_eur, 8000.0);
        assert_eq!(request.costo_finanziato_eur, None);
        assert_eq!(request.anni_finanziamento, 10);
        assert_eq!(request.rata_mensile_override_eur, Some(84.0));
        assert_eq!(request.taeg_annuo_percent, 5.9);
        assert!(!request.usa_rata_semplice);
        assert_eq!(request.validate(), Ok(()));

        // The quoted installment drives the annual figure
        let response = crate::engine::calculate(&request);
        assert_eq!(response.rata_annua_impianto_eur, 84.0 * 12.0);
    }

    #[test]
    fn test_cash_conversion_has_no_installment() {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON).unwrap();
        let request = catalog.items[1].to_request(&household(), None);

        assert_eq!(request.costo_finanziato_eur, Some(0.0));
        assert_eq!(request.validate(), Ok(()));

        let response = crate::engine::calculate(&request);
        assert_eq!(response.rata_annua_impianto_eur, 0.0);
        // Deduction still on the full price: 16500 * 0.5 / 10
        assert_eq!(response.detrazione_annua_eur, 825.0);
    }
}
