//! Compare every catalog offer for one household
//!
//! Evaluates each offer of the installer catalog (cash purchase plus every
//! quoted financing term) through the calculation engine and prints the
//! variants ranked by total net cost over the 25-year horizon.

use std::cmp::Ordering;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rayon::prelude::*;

use pv_calculator::catalog::{load_catalog, HouseholdProfile, Offer};
use pv_calculator::{calculate, CalcResponse};

#[derive(Parser, Debug)]
#[command(name = "compare_offers", about = "Rank installer offers for one household")]
struct Args {
    /// Path to the offer catalog JSON
    #[arg(long, default_value = "catalog.json")]
    catalog: PathBuf,

    /// Annual household consumption in kWh
    #[arg(long, default_value_t = 3000.0)]
    consumo_annuo_kwh: f64,

    /// Unit energy price in EUR/kWh
    #[arg(long, default_value_t = 0.30)]
    prezzo_energia_eur_kwh: f64,

    /// Fixed annual fee on the current contract in EUR
    #[arg(long, default_value_t = 0.0)]
    quota_fissa_annua_eur: f64,

    /// Share of production consumed on-site, percent
    #[arg(long, default_value_t = 40.0)]
    autoconsumo_percent: f64,

    /// Feed-in tariff in EUR/kWh
    #[arg(long, default_value_t = 0.10)]
    prezzo_gse_eur_kwh: f64,

    /// Tax deduction rate, percent of the installation cost
    #[arg(long, default_value_t = 50.0)]
    aliquota_detrazione_percent: f64,

    /// Deduction period in years
    #[arg(long, default_value_t = 10)]
    anni_detrazione: u32,

    /// Conservative multiplier on savings and revenue
    #[arg(long, default_value_t = 1.0)]
    fattore_prudenza: f64,
}

impl Args {
    fn household(&self) -> HouseholdProfile {
        HouseholdProfile {
            consumo_annuo_kwh: self.consumo_annuo_kwh,
            prezzo_energia_eur_kwh: self.prezzo_energia_eur_kwh,
            quota_fissa_annua_eur: self.quota_fissa_annua_eur,
            autoconsumo_percent: self.autoconsumo_percent,
            prezzo_gse_eur_kwh: self.prezzo_gse_eur_kwh,
            aliquota_detrazione_percent: self.aliquota_detrazione_percent,
            anni_detrazione: self.anni_detrazione,
            fattore_prudenza: self.fattore_prudenza,
        }
    }
}

/// One evaluated offer/term combination
struct Variant {
    label: String,
    term_months: Option<u32>,
    response: CalcResponse,
}

fn variants_for(offer: &Offer) -> Vec<(Offer, Option<u32>)> {
    let mut variants = vec![(offer.clone(), None)];
    for term in offer.financing_terms() {
        variants.push((offer.clone(), Some(term)));
    }
    variants
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let household = args.household();

    let catalog = load_catalog(&args.catalog)?;
    println!(
        "Loaded {} offers from {}",
        catalog.items.len(),
        args.catalog.display()
    );

    let candidates: Vec<(Offer, Option<u32>)> =
        catalog.items.iter().flat_map(variants_for).collect();

    let mut variants: Vec<Variant> = candidates
        .par_iter()
        .filter_map(|(offer, term_months)| {
            let request = offer.to_request(&household, *term_months);
            if let Err(e) = request.validate() {
                log::warn!("skipping offer {} (term {:?}): {}", offer.id, term_months, e);
                return None;
            }
            Some(Variant {
                label: offer.label.clone(),
                term_months: *term_months,
                response: calculate(&request),
            })
        })
        .collect();

    variants.sort_by(|a, b| {
        a.response
            .total_net_cost_eur()
            .partial_cmp(&b.response.total_net_cost_eur())
            .unwrap_or(Ordering::Equal)
    });

    println!();
    println!(
        "{:>3} {:<32} {:>10} {:>14} {:>12} {:>12}",
        "#", "Offer", "Term", "25y net cost", "Year-1 cost", "Delta y1"
    );
    println!("{}", "-".repeat(88));

    for (rank, variant) in variants.iter().enumerate() {
        let term = match variant.term_months {
            Some(months) => format!("{} mesi", months),
            None => "cash".to_string(),
        };
        let year_1 = variant
            .response
            .cashflow_anni
            .first()
            .map(|y| y.costo_netto_eur)
            .unwrap_or(0.0);
        println!(
            "{:>3} {:<32} {:>10} {:>14.2} {:>12.2} {:>12.2}",
            rank + 1,
            variant.label,
            term,
            variant.response.total_net_cost_eur(),
            year_1,
            variant.response.delta_vs_spesa_attuale_eur,
        );
    }

    if let Some(best) = variants.first() {
        println!("\nBest variant: {}", best.label);
        println!("  {}", best.response.messaggio);
        println!(
            "  Total advantage vs grid over the horizon: {:.2} EUR",
            best.response.total_advantage_eur()
        );
    }

    Ok(())
}
