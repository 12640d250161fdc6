use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::factors::{DistanceBand, EmissionModel};
use crate::types::{Category, DeliverySpeed, EmissionEstimate, PurchaseInput};

// ---- Severity banding -----------------------------------------------------

/// How loudly the purchase deserves to be judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityBand {
    Mild,
    Noticeable,
    Strong,
    Epic,
}

/// Threshold classifier over kg CO2e; bands are half-open, Epic unbounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityThresholds {
    pub theta_mild_noticeable: f64,
    pub theta_noticeable_strong: f64,
    pub theta_strong_epic: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        SeverityThresholds {
            theta_mild_noticeable: 0.5,
            theta_noticeable_strong: 5.0,
            theta_strong_epic: 50.0,
        }
    }
}

impl SeverityThresholds {
    pub fn classify(&self, kg_co2e: f64) -> SeverityBand {
        if kg_co2e < self.theta_mild_noticeable {
            SeverityBand::Mild
        } else if kg_co2e < self.theta_noticeable_strong {
            SeverityBand::Noticeable
        } else if kg_co2e < self.theta_strong_epic {
            SeverityBand::Strong
        } else {
            SeverityBand::Epic
        }
    }
}

// ---- Template pools -------------------------------------------------------

/// Openers; `{item}` is replaced with the purchase name.
pub const OPENERS: [&str; 6] = [
    "Oh look, you bought {item}. The planet is thrilled.",
    "Congrats on acquiring {item}! Earth will remember this. Briefly.",
    "Nice choice: {item}. Your carbon footprint applauds you silently.",
    "You ordered {item}. If guilt were measurable, it would be in tonnes.",
    "One small purchase for you, one medium sigh from the atmosphere.",
    "{item} is on its way. The clouds sent a thank-you card, unsigned.",
];

pub const SARCASTIC_SUFFIXES: [&str; 5] = [
    "(Your carbon ledger has been updated.)",
    "(No refunds accepted from the atmosphere.)",
    "(Sustainability: now available as an optional extra.)",
    "(Ask again in 5 to 10 business years.)",
    "(This message brought to you by fossil fuels.)",
];

/// Band-specific intensity lines woven into the sarcasm.
pub fn intensity_lines(band: SeverityBand) -> &'static [&'static str] {
    match band {
        SeverityBand::Mild => &[
            "Barely a ripple.",
            "You could buy this daily and still be forgettable.",
        ],
        SeverityBand::Noticeable => &[
            "A proper puff of CO2.",
            "You just made a small but measurable dent.",
        ],
        SeverityBand::Strong => &[
            "That is the kind of purchase museums will catalog.",
            "Atmosphere: concerned.",
        ],
        SeverityBand::Epic => &[
            "Monumental. The clouds sent flowers.",
            "You unlocked a carbon achievement: 'The Tower'.",
        ],
    }
}

/// Tip template with an optional category filter; `None` applies everywhere.
#[derive(Debug, Clone, Copy)]
pub struct TipTemplate {
    pub categories: Option<&'static [Category]>,
    pub text: &'static str,
}

impl TipTemplate {
    pub fn applies_to(&self, category: Category) -> bool {
        match self.categories {
            None => true,
            Some(cats) => cats.contains(&category),
        }
    }
}

/// Templated tips; `{category}` is replaced with the category label.
pub const TIPS: [TipTemplate; 11] = [
    TipTemplate {
        categories: None,
        text: "Try second-hand or refurbished for {category}. Vintage has personality and smaller emissions.",
    },
    TipTemplate {
        categories: None,
        text: "Repair before replace. Local repair cafes do miracles for {category}.",
    },
    TipTemplate {
        categories: Some(&[Category::Flight]),
        text: "If it is a flight: consider trains, or bundle trips and fly less often.",
    },
    TipTemplate {
        categories: Some(&[Category::Electronics]),
        text: "For electronics: keep it 3 to 5 years longer, and recycle responsibly when done.",
    },
    TipTemplate {
        categories: Some(&[Category::FastFashion, Category::SustainableClothing]),
        text: "Choose natural fibers or certified sustainable brands for long-term wear.",
    },
    TipTemplate {
        categories: Some(&[Category::Groceries, Category::AnimalBasedGroceries]),
        text: "Swap one animal-based meal a week for plant-based. Small change, real impact.",
    },
    TipTemplate {
        categories: Some(&[Category::Furniture]),
        text: "For furniture, buy solid and locally made. Heavy items have traveled the world already.",
    },
    TipTemplate {
        categories: Some(&[Category::PackagedGoods]),
        text: "Avoid single-use packaging: bring your own container or buy in bulk.",
    },
    TipTemplate {
        categories: None,
        text: "Turn off fast shipping. Slower delivery reduces freight emissions.",
    },
    TipTemplate {
        categories: None,
        text: "If you are feeling guilty, buy fewer, higher-quality items; they outlive the trend cycles.",
    },
    TipTemplate {
        categories: None,
        text: "Check the brand's transparency reports. Transparency often means better practices.",
    },
];

pub const PUNCHLINES: [&str; 5] = [
    "(Future you owes present you an explanation.)",
    "(Your carbon spreadsheet has been updated.)",
    "(Mood: fashionable. Atmosphere: not so much.)",
    "(This tip brought to you with minimal irony.)",
    "(Do one small thing, then another tomorrow.)",
];

pub const EXTRA_FAST_SHIPPING: &str =
    "Skip the rush shipping next time; it is pricey for the planet.";
pub const EXTRA_HEAVY_ITEM: &str =
    "For heavy items, prefer consolidated shipping or local pickup.";
pub const EXTRA_LONG_HAUL: &str =
    "Check if a local equivalent exists to avoid long-haul transport.";

/// Weight above which the consolidated-shipping extra kicks in.
const HEAVY_ITEM_KG: f64 = 10.0;

// ---- Generation -----------------------------------------------------------

/// Sarcastic feedback plus a context-aware sustainability tip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentary {
    pub sarcasm: String,
    pub tip: String,
}

/// Generate commentary with a thread-local RNG and default model/thresholds.
pub fn comment(estimate: &EmissionEstimate, input: &PurchaseInput) -> Commentary {
    comment_with(
        estimate,
        input,
        &EmissionModel::default(),
        &SeverityThresholds::default(),
        &mut rand::thread_rng(),
    )
}

/// Generate commentary from an injected RNG, so callers and tests can seed
/// the selection. Every piece is drawn uniformly from its pool; there is no
/// determinism guarantee beyond the RNG handed in. The model is consulted
/// only for its distance banding, so tip extras agree with the estimator.
pub fn comment_with<R: Rng + ?Sized>(
    estimate: &EmissionEstimate,
    input: &PurchaseInput,
    model: &EmissionModel,
    thresholds: &SeverityThresholds,
    rng: &mut R,
) -> Commentary {
    let band = thresholds.classify(estimate.kg_co2e);
    Commentary {
        sarcasm: choose_sarcasm(input, band, rng),
        tip: choose_tip(input, model, rng),
    }
}

fn item_name(input: &PurchaseInput) -> &str {
    if input.name.is_empty() {
        input.category.label()
    } else {
        &input.name
    }
}

fn choose_sarcasm<R: Rng + ?Sized>(input: &PurchaseInput, band: SeverityBand, rng: &mut R) -> String {
    let opener = OPENERS[rng.gen_range(0..OPENERS.len())].replace("{item}", item_name(input));
    let lines = intensity_lines(band);
    let line = lines[rng.gen_range(0..lines.len())];
    let suffix = SARCASTIC_SUFFIXES[rng.gen_range(0..SARCASTIC_SUFFIXES.len())];
    format!("{opener} {line} {suffix}")
}

fn choose_tip<R: Rng + ?Sized>(input: &PurchaseInput, model: &EmissionModel, rng: &mut R) -> String {
    let mut candidates: Vec<&'static str> = TIPS
        .iter()
        .filter(|t| t.applies_to(input.category))
        .map(|t| t.text)
        .collect();
    if candidates.is_empty() {
        candidates = TIPS.iter().map(|t| t.text).collect();
    }

    let mut tip = candidates[rng.gen_range(0..candidates.len())]
        .replace("{category}", input.category.label());

    let mut extras: Vec<&'static str> = Vec::new();
    if matches!(input.speed, DeliverySpeed::Express | DeliverySpeed::SameDay) {
        extras.push(EXTRA_FAST_SHIPPING);
    }
    if input.weight_kg > HEAVY_ITEM_KG {
        extras.push(EXTRA_HEAVY_ITEM);
    }
    if model.distance_band(input.distance_km) == DistanceBand::International {
        extras.push(EXTRA_LONG_HAUL);
    }
    // At most two extras, or the tip stops reading like one.
    for extra in extras.iter().take(2) {
        tip.push(' ');
        tip.push_str(extra);
    }

    let punch = PUNCHLINES[rng.gen_range(0..PUNCHLINES.len())];
    format!("{tip} {punch}")
}
