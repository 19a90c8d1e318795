//! Recipe analysis tests against a canned model.

mod common;

use vitwi_sdk::{
    ApiSettings, DifficultyLevel, FakeProvider, NutritionValues, Session, VitwiError,
};

use common::RecordingHost;

const OMELETTE_TEXT: &str = "Омлет: 3 яйца, 50 мл молока, соль. Взбить и обжарить.";

// ---------------------------------------------------------------------------
// successful analysis
// ---------------------------------------------------------------------------

#[test]
fn analyze_derives_missing_nutrition_blocks() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(&common::omelette_reply()));

    let recipe = t.sdk.analyze(OMELETTE_TEXT).unwrap();
    assert_eq!(recipe.dish_name, "Омлет");
    assert_eq!(recipe.servings, 2);
    assert_eq!(recipe.total_weight, 400.0);
    assert_eq!(recipe.nutrition, NutritionValues::new(600.0, 40.0, 44.0, 8.0));
    assert_eq!(
        recipe.nutrition_per_100g,
        NutritionValues::new(150.0, 10.0, 11.0, 2.0)
    );
    assert_eq!(
        recipe.nutrition_per_serving,
        NutritionValues::new(300.0, 20.0, 22.0, 4.0)
    );
    assert_eq!(recipe.instructions.len(), 2);
    assert_eq!(recipe.instructions[1].title, "Обжарить");
    assert_eq!(recipe.tags, vec!["завтрак", "быстро"]);
    assert_eq!(recipe.difficulty_level(), DifficultyLevel::Easy);
}

#[test]
fn analyze_sends_text_verbatim_in_one_prompt() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(&common::omelette_reply()));

    t.sdk.analyze(OMELETTE_TEXT).unwrap();
    let prompts = t.fake.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(OMELETTE_TEXT));
}

#[test]
fn analyze_keeps_supplied_per_100g_values() {
    let reply = r#"{"dishName": "Каша", "totalWeight": 500,
        "nutritionPer100g": {"calories": 100, "proteins": 3, "fats": 2, "carbs": 18},
        "instructions": [{"step": 1, "title": "Варить", "description": "Варите 20 минут."}]}"#;
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(reply));

    let recipe = t.sdk.analyze("Овсяная каша на воде").unwrap();
    assert_eq!(
        recipe.nutrition_per_100g,
        NutritionValues::new(100.0, 3.0, 2.0, 18.0)
    );
    assert_eq!(recipe.nutrition, NutritionValues::new(500.0, 15.0, 10.0, 90.0));
    // no servings and no totals supplied: per-serving stays zero
    assert!(recipe.nutrition_per_serving.is_zero());
    assert!(recipe.tags.is_empty());
}

// ---------------------------------------------------------------------------
// failures
// ---------------------------------------------------------------------------

#[test]
fn blank_text_is_rejected_without_request() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(&common::omelette_reply()));

    let err = t.sdk.analyze("   \n ").unwrap_err();
    assert!(matches!(err, VitwiError::EmptyInput(_)));
    assert!(!err.is_retryable());
    assert!(t.fake.prompts().is_empty());
}

#[test]
fn placeholder_key_is_config_missing() {
    let (t, _tmp) = common::setup_sdk_with(
        FakeProvider::always(&common::omelette_reply()),
        ApiSettings::with_key("YOUR_OPENROUTER_API_KEY"),
        RecordingHost::default(),
    );

    let err = t.sdk.analyze(OMELETTE_TEXT).unwrap_err();
    assert!(matches!(err, VitwiError::ConfigMissing(_)));
    assert!(t.fake.prompts().is_empty());
    assert!(!t.sdk.is_configured());
}

#[test]
fn empty_check_runs_before_config_check() {
    let (t, _tmp) = common::setup_sdk_with(
        FakeProvider::new(),
        ApiSettings::default(),
        RecordingHost::default(),
    );

    assert!(matches!(
        t.sdk.analyze(""),
        Err(VitwiError::EmptyInput(_))
    ));
}

#[test]
fn reply_without_braces_is_no_json_found() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always("Извините, я не могу помочь."));

    let err = t.sdk.analyze(OMELETTE_TEXT).unwrap_err();
    assert!(matches!(err, VitwiError::NoJsonFound));
    assert!(err.is_retryable());
}

#[test]
fn invalid_json_is_parse_error() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always("{dishName: Омлет, servings: 2}"));

    let err = t.sdk.analyze(OMELETTE_TEXT).unwrap_err();
    assert!(matches!(err, VitwiError::JsonParse(_)));
    assert_eq!(
        err.user_message(),
        "Ошибка парсинга ответа от нейросети. Попробуйте еще раз."
    );
}

#[test]
fn missing_instructions_is_incomplete() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(
        r#"{"dishName": "Омлет", "ingredients": ["Яйца"]}"#,
    ));

    let err = t.sdk.analyze(OMELETTE_TEXT).unwrap_err();
    assert!(matches!(err, VitwiError::IncompleteData(_)));
}

#[test]
fn missing_dish_name_is_incomplete() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(
        r#"{"instructions": [{"step": 1, "title": "a", "description": "b"}]}"#,
    ));

    assert!(matches!(
        t.sdk.analyze(OMELETTE_TEXT),
        Err(VitwiError::IncompleteData(_))
    ));
}

#[test]
fn service_error_is_api_error() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::new().with_api_error(
        "Омлет",
        401,
        "No auth credentials found",
    ));

    let err = t.sdk.analyze(OMELETTE_TEXT).unwrap_err();
    match &err {
        VitwiError::Api { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "No auth credentials found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(
        err.user_message(),
        "Ошибка API: 401 - No auth credentials found"
    );
}

// ---------------------------------------------------------------------------
// session flow
// ---------------------------------------------------------------------------

#[test]
fn analyze_into_sets_current_recipe() {
    let (t, _tmp) = common::setup_sdk(FakeProvider::always(&common::omelette_reply()));
    let mut session = Session::new();

    t.sdk.analyze_into(&mut session, OMELETTE_TEXT).unwrap();
    assert_eq!(session.recipe_text(), OMELETTE_TEXT);
    assert_eq!(session.current().unwrap().dish_name, "Омлет");
    assert_eq!(t.host.vibrations(), 1);
}

#[test]
fn failed_analysis_keeps_previous_recipe() {
    let (t, _tmp) = common::setup_sdk(
        FakeProvider::new()
            .with_reply("Омлет", &common::omelette_reply())
            .with_default_reply("нет JSON"),
    );
    let mut session = Session::new();

    t.sdk.analyze_into(&mut session, OMELETTE_TEXT).unwrap();
    let err = t.sdk.analyze_into(&mut session, "Суп из топора").unwrap_err();
    assert!(matches!(err, VitwiError::NoJsonFound));
    assert_eq!(session.current().unwrap().dish_name, "Омлет");
    assert_eq!(session.recipe_text(), OMELETTE_TEXT);
}

#[test]
fn forwarded_text_feeds_analysis_once() {
    let (t, _tmp) = common::setup_sdk_with(
        FakeProvider::always(&common::omelette_reply()),
        ApiSettings::with_key("test-key"),
        RecordingHost::forwarding(OMELETTE_TEXT),
    );
    let mut session = Session::new();

    let text = session.take_forwarded_text(t.sdk.host()).unwrap();
    t.sdk.analyze_into(&mut session, &text).unwrap();
    assert!(session.take_forwarded_text(t.sdk.host()).is_none());
    assert_eq!(t.fake.prompts().len(), 1);
}
