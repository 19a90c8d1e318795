use serde_json::Value;

use super::nutrition::NutritionValues;
use super::recipe::Instruction;

// ---------------------------------------------------------------------------
// RawRecipe: loosely-typed model output with every field optional
// ---------------------------------------------------------------------------

/// A recipe object as the model returned it, before validation.
///
/// Built from an arbitrary JSON value and never fails: anything that is
/// missing or has an unusable type becomes `None`. [`normalize`](crate::normalize::normalize)
/// fills in derivable fields and [`RecipeAnalysis::from_raw`](super::RecipeAnalysis::from_raw)
/// promotes the result to the strict shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecipe {
    pub dish_name: Option<String>,
    pub servings: Option<u32>,
    pub total_weight: Option<f64>,
    pub difficulty: Option<String>,
    pub cooking_time: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub nutrition_per_100g: Option<NutritionValues>,
    pub nutrition_per_serving: Option<NutritionValues>,
    pub nutrition: Option<NutritionValues>,
    pub instructions: Option<Vec<Instruction>>,
    pub tags: Option<Vec<String>>,
}

impl RawRecipe {
    /// Read the recipe fields out of a JSON value.
    ///
    /// Non-object values yield a recipe with every field absent.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        Self {
            dish_name: obj.get("dishName").and_then(text),
            servings: obj
                .get("servings")
                .and_then(number)
                .map(f64::round)
                .filter(|n| *n >= 1.0)
                .map(|n| n.min(f64::from(u32::MAX)) as u32),
            total_weight: obj
                .get("totalWeight")
                .and_then(number)
                .filter(|w| *w > 0.0),
            difficulty: obj.get("difficulty").and_then(text),
            cooking_time: obj.get("cookingTime").and_then(text),
            ingredients: obj.get("ingredients").and_then(ingredients),
            nutrition_per_100g: obj.get("nutritionPer100g").and_then(nutrition),
            nutrition_per_serving: obj.get("nutritionPerServing").and_then(nutrition),
            nutrition: obj.get("nutrition").and_then(nutrition),
            instructions: obj.get("instructions").and_then(instructions),
            tags: obj.get("tags").and_then(tags),
        }
    }
}

/// Non-empty text from a string or number.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A finite number, also accepting strings that start with one ("4 порции", "12,5").
pub(crate) fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => leading_number(s)?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || *c == ',' || (*i == 0 && *c == '-')))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].replace(',', ".").parse().ok()
}

fn nutrition(value: &Value) -> Option<NutritionValues> {
    let obj = value.as_object()?;
    let field = |name: &str| obj.get(name).and_then(number).unwrap_or(0.0);
    Some(NutritionValues {
        calories: field("calories"),
        proteins: field("proteins"),
        fats: field("fats"),
        carbs: field("carbs"),
    })
}

fn ingredients(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                // {"name": "Яйца", "amount": "3 шт"}
                Value::Object(obj) => {
                    let parts: Vec<String> = ["name", "amount", "quantity"]
                        .iter()
                        .filter_map(|k| obj.get(*k).and_then(text))
                        .collect();
                    (!parts.is_empty()).then(|| parts.join(" "))
                }
                _ => None,
            })
            .filter(|s| !s.trim().is_empty())
            .collect(),
    )
}

fn instructions(value: &Value) -> Option<Vec<Instruction>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                let position = u32::try_from(i + 1).unwrap_or(u32::MAX);
                match item {
                    Value::String(s) => Some(Instruction {
                        step: position,
                        title: String::new(),
                        description: s.clone(),
                    }),
                    Value::Object(obj) => Some(Instruction {
                        step: obj
                            .get("step")
                            .and_then(number)
                            .filter(|n| *n >= 1.0)
                            .map(|n| n as u32)
                            .unwrap_or(position),
                        title: obj.get("title").and_then(text).unwrap_or_default(),
                        description: obj.get("description").and_then(text).unwrap_or_default(),
                    }),
                    _ => None,
                }
            })
            .collect(),
    )
}

fn tags(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|t| t.as_str())
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .collect(),
    )
}
