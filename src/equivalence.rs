use serde::{Deserialize, Serialize};

use crate::factors::{CAR_KG_PER_KM, KG_TO_TONNES, PHONE_CHARGE_KG, TREE_ABSORPTION_KG_PER_YEAR};
use crate::types::EmissionEstimate;

/// The estimate translated into relatable quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionEquivalents {
    pub car_km: f64,
    pub tree_years: f64,
    pub phone_charges: f64,
}

/// Pure linear conversions; the divisors are fixed nonzero constants.
pub fn equivalents(estimate: &EmissionEstimate) -> EmissionEquivalents {
    let kg = estimate.kg_co2e;
    EmissionEquivalents {
        car_km: kg / CAR_KG_PER_KM,
        tree_years: kg / TREE_ABSORPTION_KG_PER_YEAR,
        phone_charges: kg / PHONE_CHARGE_KG,
    }
}

/// Render a mass in grams below 1 kg, kilograms otherwise.
pub fn format_kg(kg: f64) -> String {
    if kg < 1.0 {
        format!("{:.0} g CO2e", kg * 1000.0)
    } else {
        format!("{kg:.2} kg CO2e")
    }
}

pub fn format_tonnes(kg: f64) -> String {
    format!("{:.3} t CO2e", kg * KG_TO_TONNES)
}
