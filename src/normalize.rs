//! Fill in derivable nutrition blocks on a raw model response.
//!
//! Rules run in a fixed order and each one fires only when its target field is
//! missing, so a value the model supplied is never overwritten:
//!
//! 1. `nutritionPer100g` from `nutrition` and `totalWeight`
//! 2. `nutritionPerServing` from `nutrition` and `servings`
//! 3. `nutrition` from `nutritionPer100g` and `totalWeight`
//! 4. `tags` defaults to an empty list
//!
//! A rule only reads fields that were supplied or derived by an earlier rule.
//! An unknown `totalWeight` is taken to be 1000 g.

use crate::models::{NutritionValues, RawRecipe, DEFAULT_TOTAL_WEIGHT};

pub fn normalize(mut raw: RawRecipe) -> RawRecipe {
    let total_weight = raw.total_weight.unwrap_or(DEFAULT_TOTAL_WEIGHT);

    if raw.nutrition_per_100g.is_none() {
        if let Some(total) = &raw.nutrition {
            raw.nutrition_per_100g = Some(NutritionValues::derive_per_100g(total, total_weight));
        }
    }

    if raw.nutrition_per_serving.is_none() {
        if let (Some(total), Some(servings)) = (&raw.nutrition, raw.servings) {
            raw.nutrition_per_serving = Some(NutritionValues::derive_per_serving(total, servings));
        }
    }

    if raw.nutrition.is_none() {
        if let Some(per_100g) = &raw.nutrition_per_100g {
            raw.nutrition = Some(NutritionValues::derive_total(per_100g, total_weight));
        }
    }

    if raw.tags.is_none() {
        raw.tags = Some(Vec::new());
    }

    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawRecipe {
        RawRecipe::from_value(&value)
    }

    #[test]
    fn derives_per_100g_and_per_serving_from_total() {
        let out = normalize(raw(json!({
            "servings": 2,
            "totalWeight": 500,
            "nutrition": {"calories": 812, "proteins": 41.4, "fats": 30, "carbs": 95.5}
        })));
        assert_eq!(
            out.nutrition_per_100g,
            Some(NutritionValues::new(162.0, 8.3, 6.0, 19.1))
        );
        assert_eq!(
            out.nutrition_per_serving,
            Some(NutritionValues::new(406.0, 20.7, 15.0, 47.8))
        );
    }

    #[test]
    fn missing_weight_assumes_one_kilogram() {
        let out = normalize(raw(json!({
            "nutrition": {"calories": 1500, "proteins": 60, "fats": 50, "carbs": 200}
        })));
        assert_eq!(
            out.nutrition_per_100g,
            Some(NutritionValues::new(150.0, 6.0, 5.0, 20.0))
        );
        // servings absent: per-serving is not derived
        assert_eq!(out.nutrition_per_serving, None);
    }

    #[test]
    fn derives_total_from_per_100g() {
        let out = normalize(raw(json!({
            "totalWeight": 250,
            "nutritionPer100g": {"calories": 120, "proteins": 4, "fats": 3.2, "carbs": 18}
        })));
        assert_eq!(out.nutrition, Some(NutritionValues::new(300.0, 10.0, 8.0, 45.0)));
    }

    #[test]
    fn per_serving_is_not_derived_from_a_derived_total() {
        let out = normalize(raw(json!({
            "servings": 2,
            "nutritionPer100g": {"calories": 100, "proteins": 1, "fats": 1, "carbs": 1}
        })));
        assert!(out.nutrition.is_some());
        assert_eq!(out.nutrition_per_serving, None);
    }

    #[test]
    fn supplied_values_are_not_overwritten() {
        let out = normalize(raw(json!({
            "servings": 4,
            "totalWeight": 1000,
            "nutrition": {"calories": 2000, "proteins": 80, "fats": 60, "carbs": 250},
            "nutritionPer100g": {"calories": 1, "proteins": 1, "fats": 1, "carbs": 1},
            "nutritionPerServing": {"calories": 2, "proteins": 2, "fats": 2, "carbs": 2},
            "tags": ["ужин"]
        })));
        assert_eq!(out.nutrition_per_100g, Some(NutritionValues::new(1.0, 1.0, 1.0, 1.0)));
        assert_eq!(out.nutrition_per_serving, Some(NutritionValues::new(2.0, 2.0, 2.0, 2.0)));
        assert_eq!(out.tags, Some(vec!["ужин".to_string()]));
    }

    #[test]
    fn tags_default_to_empty() {
        let out = normalize(raw(json!({"dishName": "Суп"})));
        assert_eq!(out.tags, Some(Vec::new()));
        assert_eq!(out.nutrition, None);
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let once = normalize(raw(json!({
            "servings": 3,
            "totalWeight": 640,
            "nutrition": {"calories": 955, "proteins": 52.4, "fats": 41, "carbs": 88.8}
        })));
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }
}
