//! Recipe generation tests against a canned model.

mod common;

use vitwi_sdk::{FakeProvider, NutritionValues, SaveOutcome, Session, VitwiError};

fn generation_reply() -> String {
    serde_json::json!({
        "recipes": [
            {
                "dishName": "Салат с киноа",
                "servings": 2,
                "totalWeight": 500,
                "ingredients": ["Киноа 100 г", "Огурец 1 шт", "Оливковое масло 1 ст. л."],
                "nutrition": {"calories": 700, "proteins": 20, "fats": 25, "carbs": 100},
                "instructions": [{"step": 1, "title": "Сварить", "description": "Сварите киноа."}],
                "tags": ["салат", "веган"]
            },
            {
                "servings": "3 порции",
                "ingredients": ["Нут 200 г", "Огурец 1 шт"],
                "tags": ["веган"]
            }
        ]
    })
    .to_string()
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_normalizes_each_recipe() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(&generation_reply()));

    let recipes = t.sdk.generate("веганский ужин без глютена").unwrap();
    assert_eq!(recipes.len(), 2);

    let salad = &recipes[0];
    assert_eq!(salad.dish_name, "Салат с киноа");
    assert_eq!(
        salad.nutrition_per_100g,
        NutritionValues::new(140.0, 4.0, 5.0, 20.0)
    );
    assert_eq!(
        salad.nutrition_per_serving,
        NutritionValues::new(350.0, 10.0, 12.5, 50.0)
    );
}

#[test]
fn generate_fills_placeholders_for_sparse_elements() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(&generation_reply()));

    let recipes = t.sdk.generate("веганский ужин").unwrap();
    let sparse = &recipes[1];
    assert_eq!(sparse.dish_name, "Неизвестное блюдо");
    assert_eq!(sparse.servings, 3);
    assert!(sparse.instructions.is_empty());
    assert!(sparse.nutrition.is_zero());
}

#[test]
fn generate_sends_query_verbatim() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(&generation_reply()));

    t.sdk.generate("что-нибудь с тыквой").unwrap();
    let prompts = t.fake.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("что-нибудь с тыквой"));
}

#[test]
fn empty_recipes_array_is_not_an_error() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(r#"{"recipes": []}"#));

    assert!(t.sdk.generate("ужин").unwrap().is_empty());
}

#[test]
fn reply_without_recipes_array_is_malformed() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(r#"{"dishName": "Суп"}"#));

    let err = t.sdk.generate("ужин").unwrap_err();
    assert!(matches!(err, VitwiError::MalformedResponse(_)));
}

#[test]
fn blank_query_is_rejected() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(&generation_reply()));

    assert!(matches!(
        t.sdk.generate("  "),
        Err(VitwiError::EmptyInput(_))
    ));
    assert!(t.fake.prompts().is_empty());
}

// ---------------------------------------------------------------------------
// session flow
// ---------------------------------------------------------------------------

#[test]
fn generated_recipes_can_be_saved_once() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(&generation_reply()));
    let mut session = Session::new();

    t.sdk.generate_into(&mut session, "ужин").unwrap();
    assert_eq!(session.generated().len(), 2);

    let first = t.sdk.save_generated(&session, 0).unwrap();
    assert!(matches!(first, SaveOutcome::Saved(_)));
    let second = t.sdk.save_generated(&session, 0).unwrap();
    assert_eq!(second, SaveOutcome::AlreadySaved);

    assert_eq!(t.sdk.recipes().count(), 1);
    assert_eq!(
        t.host.alerts(),
        vec!["Рецепт сохранен!", "Этот рецепт уже сохранен"]
    );
}

#[test]
fn save_generated_rejects_bad_index() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(&generation_reply()));
    let mut session = Session::new();
    t.sdk.generate_into(&mut session, "ужин").unwrap();

    assert!(matches!(
        t.sdk.save_generated(&session, 5),
        Err(VitwiError::InvalidArgument(_))
    ));
    assert_eq!(t.sdk.recipes().count(), 0);
}

#[test]
fn generated_ingredients_go_to_cart_without_duplicates() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(&generation_reply()));
    let mut session = Session::new();
    t.sdk.generate_into(&mut session, "ужин").unwrap();

    assert_eq!(t.sdk.add_generated_ingredients_to_cart(&session, 0).unwrap(), 3);
    // "Огурец 1 шт" is already there
    assert_eq!(t.sdk.add_generated_ingredients_to_cart(&session, 1).unwrap(), 1);
    assert_eq!(t.sdk.cart().count(), 4);
    assert_eq!(
        t.host.last_alert().as_deref(),
        Some("Добавлено 1 продуктов в корзину!")
    );
}

#[test]
fn failed_generation_keeps_previous_batch() {
    let (t, _tmp) = common::setup_sdk(
        FakeProvider::new()
            .with_reply("ужин", &generation_reply())
            .with_api_error("завтрак", 429, "Rate limit exceeded"),
    );
    let mut session = Session::new();

    t.sdk.generate_into(&mut session, "ужин").unwrap();
    let err = t.sdk.generate_into(&mut session, "завтрак").unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(session.generated().len(), 2);
}
