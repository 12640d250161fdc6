use serde::{Deserialize, Serialize};

use crate::types::{Category, DeliverySpeed};

/// Average car emissions, kg CO2e per km (~192 g/km).
pub const CAR_KG_PER_KM: f64 = 0.192;
/// Approximate CO2 absorbed by one mature tree per year, kg.
pub const TREE_ABSORPTION_KG_PER_YEAR: f64 = 21.77;
/// Very rough kg CO2e per smartphone charge.
pub const PHONE_CHARGE_KG: f64 = 0.000015;
pub const KG_TO_TONNES: f64 = 1.0 / 1000.0;

/// Base emission factor, kg CO2e per USD spent.
///
/// Simplified, category-aware figures for demo use only; real emissions
/// depend on product, supply chain, usage and end-of-life. `Other` is the
/// documented default for anything unmatched.
pub fn base_factor(category: Category) -> f64 {
    match category {
        Category::Electronics => 0.30,
        Category::FastFashion => 0.18,
        Category::SustainableClothing => 0.10,
        Category::Groceries => 0.22,
        Category::PlantBasedGroceries => 0.15,
        Category::AnimalBasedGroceries => 0.35,
        Category::Flight => 0.55,
        Category::Furniture => 0.28,
        Category::Cosmetics => 0.12,
        Category::PackagedGoods => 0.14,
        Category::BooksMedia => 0.09,
        Category::SportingGoods => 0.20,
        Category::Services => 0.04,
        Category::Other => 0.16,
    }
}

/// Shipping distance band, classified from the raw km figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceBand {
    Local,
    National,
    International,
}

/// Tunable multipliers and thresholds of the estimation formula.
///
/// Defaults mirror the published demo figures; deployments that want a
/// harsher or kinder model swap in their own instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionModel {
    /// Below this many km the shipment counts as local.
    pub theta_local_km: f64,
    /// Below this many km the shipment counts as national; above,
    /// international.
    pub theta_national_km: f64,
    pub mult_local: f64,
    pub mult_national: f64,
    pub mult_international: f64,
    pub mult_express: f64,
    pub mult_same_day: f64,
    /// Transport term coefficient, applied to sqrt(weight_kg).
    pub weight_coefficient: f64,
    /// Multiplier applied when the buyer donates to offsets.
    pub offset_discount: f64,
}

impl Default for EmissionModel {
    fn default() -> Self {
        EmissionModel {
            theta_local_km: 50.0,
            theta_national_km: 1500.0,
            mult_local: 1.00,
            mult_national: 1.10,
            mult_international: 1.40,
            mult_express: 1.07,
            mult_same_day: 1.15,
            weight_coefficient: 1.5,
            offset_discount: 0.90,
        }
    }
}

impl EmissionModel {
    pub fn distance_band(&self, distance_km: f64) -> DistanceBand {
        if distance_km < self.theta_local_km {
            DistanceBand::Local
        } else if distance_km < self.theta_national_km {
            DistanceBand::National
        } else {
            DistanceBand::International
        }
    }

    pub fn distance_multiplier(&self, distance_km: f64) -> f64 {
        match self.distance_band(distance_km) {
            DistanceBand::Local => self.mult_local,
            DistanceBand::National => self.mult_national,
            DistanceBand::International => self.mult_international,
        }
    }

    pub fn speed_multiplier(&self, speed: DeliverySpeed) -> f64 {
        match speed {
            DeliverySpeed::Standard => 1.0,
            DeliverySpeed::Express => self.mult_express,
            DeliverySpeed::SameDay => self.mult_same_day,
        }
    }
}
