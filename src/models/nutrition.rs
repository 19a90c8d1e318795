use serde::{Deserialize, Serialize};

/// Weight assumed for a dish whose total weight is unknown, in grams.
pub const DEFAULT_TOTAL_WEIGHT: f64 = 1000.0;

// ---------------------------------------------------------------------------
// NutritionValues: calories and macros (KBJU)
// ---------------------------------------------------------------------------

/// Calories (kcal) and protein/fat/carbohydrate grams for some amount of food.
///
/// A recipe carries three of these: the whole dish, per 100 g and per serving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionValues {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub proteins: f64,
    #[serde(default)]
    pub fats: f64,
    #[serde(default)]
    pub carbs: f64,
}

/// Round half up to a whole number.
pub fn round_calories(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round half up to one decimal place.
pub fn round_macro(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

impl NutritionValues {
    pub fn new(calories: f64, proteins: f64, fats: f64, carbs: f64) -> Self {
        Self {
            calories,
            proteins,
            fats,
            carbs,
        }
    }

    /// Apply `f` to every field, rounding calories to an integer and macros to
    /// one decimal.
    fn scaled(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: round_calories(f(self.calories)),
            proteins: round_macro(f(self.proteins)),
            fats: round_macro(f(self.fats)),
            carbs: round_macro(f(self.carbs)),
        }
    }

    /// Values per 100 g, given whole-dish values and the dish weight in grams.
    pub fn derive_per_100g(total: &NutritionValues, total_weight: f64) -> Self {
        total.scaled(|v| v / total_weight * 100.0)
    }

    /// Values per serving, given whole-dish values.
    pub fn derive_per_serving(total: &NutritionValues, servings: u32) -> Self {
        let servings = f64::from(servings);
        total.scaled(|v| v / servings)
    }

    /// Whole-dish values, given per-100 g values and the dish weight in grams.
    pub fn derive_total(per_100g: &NutritionValues, total_weight: f64) -> Self {
        per_100g.scaled(|v| v / 100.0 * total_weight)
    }

    /// Copy with negative and non-finite fields replaced by zero.
    pub fn clamped(&self) -> Self {
        let fix = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            calories: fix(self.calories),
            proteins: fix(self.proteins),
            fats: fix(self.fats),
            carbs: fix(self.carbs),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
