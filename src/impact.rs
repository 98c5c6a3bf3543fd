//! Recycling impact estimation.
//!
//! A deliberately simple linear model: carbon saved is the item count times
//! a fixed per-material multiplier, water saved is five times the carbon
//! figure. Both results are rounded to one decimal place. The item count is
//! unsigned, so negative inputs are unrepresentable.

use serde::Serialize;

use crate::catalog::Category;

/// kg CO₂ saved per recycled item, by material.
fn carbon_multiplier(material: Category) -> f64 {
    match material {
        Category::Cardboard => 0.8,
        Category::Paper => 0.4,
        Category::Wood => 1.2,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactEstimate {
    /// Kilograms of CO₂ saved.
    pub carbon_saved: f64,
    /// Liters of water saved.
    pub water_saved: f64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Estimate the impact of recycling `items` pieces of `material`.
pub fn estimate(items: u32, material: Category) -> ImpactEstimate {
    let carbon = f64::from(items) * carbon_multiplier(material);
    ImpactEstimate {
        carbon_saved: round1(carbon),
        water_saved: round1(carbon * 5.0),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
