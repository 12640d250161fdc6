use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product categories with known emission factors.
///
/// `Other` doubles as the soft default: any label the form layer sends that
/// we do not recognize degrades to it instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    FastFashion,
    SustainableClothing,
    Groceries,
    PlantBasedGroceries,
    AnimalBasedGroceries,
    Flight,
    Furniture,
    Cosmetics,
    PackagedGoods,
    BooksMedia,
    SportingGoods,
    Services,
    Other,
}

impl Category {
    /// Every supported category, in the order the form layer should list them.
    pub const ALL: [Category; 14] = [
        Category::Electronics,
        Category::FastFashion,
        Category::SustainableClothing,
        Category::Groceries,
        Category::PlantBasedGroceries,
        Category::AnimalBasedGroceries,
        Category::Flight,
        Category::Furniture,
        Category::Cosmetics,
        Category::PackagedGoods,
        Category::BooksMedia,
        Category::SportingGoods,
        Category::Services,
        Category::Other,
    ];

    /// Display label shown in the category selector.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics (phone, laptop)",
            Category::FastFashion => "Clothing (fast fashion)",
            Category::SustainableClothing => "Clothing (sustainable)",
            Category::Groceries => "Groceries / Food (average)",
            Category::PlantBasedGroceries => "Groceries / Plant-based",
            Category::AnimalBasedGroceries => "Groceries / Animal-based",
            Category::Flight => "Flight / Travel booking (ticket)",
            Category::Furniture => "Furniture / Home goods",
            Category::Cosmetics => "Cosmetics / Personal care",
            Category::PackagedGoods => "Packaged goods",
            Category::BooksMedia => "Books / Media",
            Category::SportingGoods => "Sporting goods / Outdoor",
            Category::Services => "Services / Subscriptions",
            Category::Other => "Misc / Other",
        }
    }

    /// Map a free-text label back to a category. Unknown labels resolve to
    /// `Other`; this never fails.
    pub fn from_label(label: &str) -> Category {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .unwrap_or(Category::Other)
    }
}

/// Delivery speed chosen at checkout; faster tiers carry a higher
/// freight penalty in the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliverySpeed {
    Standard,
    Express,
    SameDay,
}

impl DeliverySpeed {
    pub fn label(&self) -> &'static str {
        match self {
            DeliverySpeed::Standard => "Standard (5-8 days)",
            DeliverySpeed::Express => "Express (two-day)",
            DeliverySpeed::SameDay => "Same-day / Overnight",
        }
    }
}

/// One purchase as entered in the form.
///
/// All float fields must be finite and non-negative and `quantity >= 1`;
/// `InputGuard` enforces this at the boundary before the estimator runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseInput {
    pub name: String,
    pub category: Category,
    pub price_usd: f64,
    pub quantity: u32,
    pub weight_kg: f64,
    pub distance_km: f64,
    pub speed: DeliverySpeed,
    /// Satirical offset donation; shaves 10% off the estimate.
    pub donate_offset: bool,
}

/// Derived emission estimate; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionEstimate {
    pub kg_co2e: f64,
    pub category: Category,
}

/// One immutable line in the session ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Insertion index within the session, starting at 0.
    pub seq: u64,
    pub recorded_at: DateTime<Utc>,
    pub input: PurchaseInput,
    pub estimate: EmissionEstimate,
}
