//! PV Calculator CLI
//!
//! Runs a sample quote and prints the 25-year projection

use pv_calculator::{calculate, CalcRequest};
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    println!("PV Sales Calculator v0.1.0");
    println!("==========================\n");

    // Sample household: 3 kW installation on a simple 10-year loan
    let request = CalcRequest {
        consumo_annuo_kwh: 3000.0,
        prezzo_energia_eur_kwh: 0.30,
        quota_fissa_annua_eur: 0.0,
        costo_impianto_eur: 8000.0,
        costo_finanziato_eur: None,
        anni_finanziamento: 10,
        usa_rata_semplice: true,
        taeg_annuo_percent: 0.0,
        produzione_annua_kwh: 4000.0,
        autoconsumo_percent: 40.0,
        prezzo_gse_eur_kwh: 0.10,
        aliquota_detrazione_percent: 50.0,
        anni_detrazione: 10,
        fattore_prudenza: 1.0,
        rata_mensile_override_eur: None,
    };

    request.validate().expect("sample request is out of domain");

    println!("Household:");
    println!("  Consumption: {:.0} kWh/year", request.consumo_annuo_kwh);
    println!("  Energy price: {:.2} EUR/kWh", request.prezzo_energia_eur_kwh);
    println!("  Installation: {:.0} EUR over {} years", request.costo_impianto_eur, request.anni_finanziamento);
    println!("  Production: {:.0} kWh/year, {:.0}% self-consumed", request.produzione_annua_kwh, request.autoconsumo_percent);
    println!();

    let response = calculate(&request);

    println!("Quote:");
    println!("  Current annual spend:   {:>10.2} EUR", response.spesa_annua_attuale_eur);
    println!("  Annual installment:     {:>10.2} EUR", response.rata_annua_impianto_eur);
    println!("  Annual tax deduction:   {:>10.2} EUR", response.detrazione_annua_eur);
    println!("  Self-consumed energy:   {:>10.2} kWh", response.kwh_autoconsumati);
    println!("  Exported energy:        {:>10.2} kWh", response.kwh_immessi);
    println!("  Bill savings:           {:>10.2} EUR", response.risparmio_bolletta_eur);
    println!("  Feed-in revenue:        {:>10.2} EUR", response.ricavo_gse_eur);
    println!("  Net annual cost:        {:>10.2} EUR", response.costo_netto_annuo_eur);
    println!("  Delta vs current spend: {:>10.2} EUR", response.delta_vs_spesa_attuale_eur);
    println!("  {}", response.messaggio);
    println!();

    // Print cashflow projection
    println!("Projection ({} years):", response.cashflow_anni.len());
    println!("{:>5} {:>14}", "Year", "Net cost (EUR)");
    println!("{}", "-".repeat(20));
    for year in &response.cashflow_anni {
        println!("{:>5} {:>14.2}", year.anno, year.costo_netto_eur);
    }

    // Write full results to CSV
    let csv_path = "quote_cashflow.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");

    writeln!(file, "Year,NetCost").unwrap();
    for year in &response.cashflow_anni {
        writeln!(file, "{},{:.2}", year.anno, year.costo_netto_eur).unwrap();
    }

    println!("\nFull results written to: {}", csv_path);

    println!("\nSummary:");
    println!("  Total net cost over horizon: {:.2} EUR", response.total_net_cost_eur());
    println!("  Total advantage vs grid:     {:.2} EUR", response.total_advantage_eur());
}
