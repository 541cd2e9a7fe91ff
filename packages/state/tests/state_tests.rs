//! Editor state lifecycle tests
//!
//! This tests:
//! - Creation from a schema or a document
//! - Transform, selection and custom actions
//! - Persistence of older states
//! - Field initialization and failures

use scribe_model::builders::{doc, p};
use scribe_model::Schema;
use scribe_state::fields::{ActionCounter, LastAction};
use scribe_state::{
    Action, ConfigurationError, EditorState, FieldError, FieldResult, Plugin, PluginSpec,
    Selection, SelectionError, StateConfig, StateError, StateField,
};

fn counting_config() -> StateConfig {
    StateConfig::new()
        .schema(Schema::basic())
        .plugins(vec![Plugin::with_field("count", ActionCounter)])
}

/// Fails on any action of kind "boom"
struct Fragile;

impl StateField for Fragile {
    type Value = u32;

    fn init(&self, _config: &StateConfig) -> FieldResult<u32> {
        Ok(7)
    }

    fn apply_action(&self, action: &Action, value: &u32, _state: &EditorState) -> FieldResult<u32> {
        if action.kind() == "boom" {
            return Err(FieldError::message("cannot handle boom"));
        }
        Ok(*value)
    }
}

/// Records the count seen in the in-progress state
struct SeesCount;

impl StateField for SeesCount {
    type Value = Option<u64>;

    fn init(&self, _config: &StateConfig) -> FieldResult<Option<u64>> {
        Ok(None)
    }

    fn apply_action(
        &self,
        _action: &Action,
        _value: &Option<u64>,
        state: &EditorState,
    ) -> FieldResult<Option<u64>> {
        Ok(state.field::<u64>("count").copied())
    }
}

#[test]
fn test_create_from_schema() {
    let state = EditorState::create(&StateConfig::new().schema(Schema::basic())).unwrap();

    assert_eq!(state.doc(), &doc(vec![p("")]));
    assert_eq!(state.selection(), Selection::new(1, 1));
    assert!(state.selection().empty());
    assert!(state.plugins().is_empty());
    assert_eq!(state.field_keys().count(), 0);
}

#[test]
fn test_create_without_schema_or_doc() {
    let err = EditorState::create(&StateConfig::new()).unwrap_err();
    assert!(matches!(
        err,
        StateError::Configuration(ConfigurationError::MissingDocument)
    ));
}

#[test]
fn test_create_from_doc_without_schema() {
    let state = EditorState::create(&StateConfig::new().doc(doc(vec![p("ok")]))).unwrap();
    assert_eq!(state.doc().content_size(), 4);
    assert!(state.schema().is_none());
}

#[test]
fn test_create_rejects_invalid_selection() {
    let config = StateConfig::new()
        .doc(doc(vec![p("ok")]))
        .selection(Selection::new(1, 9));
    let err = EditorState::create(&config).unwrap_err();
    assert!(matches!(
        err,
        StateError::InvalidSelection(SelectionError::OutOfRange { .. })
    ));
}

#[test]
fn test_insert_text_keeps_old_state() {
    let state = EditorState::create(&StateConfig::new().schema(Schema::basic())).unwrap();
    let action = state.tr().insert_text("hi").unwrap().action();
    let next = state.apply_action(&action).unwrap();

    assert_eq!(next.doc(), &doc(vec![p("hi")]));
    assert_eq!(next.selection(), Selection::new(3, 3));

    assert_eq!(state.doc(), &doc(vec![p("")]));
    assert_eq!(state.selection(), Selection::new(1, 1));
}

#[test]
fn test_selection_action() {
    let state = EditorState::create(&StateConfig::new().doc(doc(vec![p("abc")]))).unwrap();
    let next = state.apply_action(&Selection::new(1, 4).action()).unwrap();

    assert_eq!(next.selection().from(), 1);
    assert_eq!(next.selection().to(), 4);
    assert_eq!(next.doc(), state.doc());
}

#[test]
fn test_selection_action_out_of_range_fails() {
    let state = EditorState::create(&StateConfig::new().doc(doc(vec![p("abc")]))).unwrap();
    let err = state.apply_action(&Selection::new(0, 40).action()).unwrap_err();
    assert!(matches!(err, StateError::InvalidSelection(_)));
}

#[test]
fn test_custom_action_keeps_document() {
    let state = EditorState::create(&counting_config()).unwrap();
    let next = state
        .apply_action(&Action::custom_with("note", serde_json::json!({"id": 1})))
        .unwrap();

    assert_eq!(next.doc(), state.doc());
    assert_eq!(next.selection(), state.selection());
    assert_eq!(next.field::<u64>("count"), Some(&1));
}

#[test]
fn test_counter_sees_every_action() {
    let s0 = EditorState::create(&counting_config()).unwrap();
    let s1 = s0
        .apply_action(&s0.tr().insert_text("a").unwrap().action())
        .unwrap();
    let s2 = s1.apply_action(&Selection::new(1, 1).action()).unwrap();

    assert_eq!(s2.field::<u64>("count"), Some(&2));
    assert_eq!(s1.field::<u64>("count"), Some(&1));
    assert_eq!(s0.field::<u64>("count"), Some(&0));
}

#[test]
fn test_every_declared_field_is_present() {
    let config = StateConfig::new().schema(Schema::basic()).plugins(vec![
        Plugin::with_field("count", ActionCounter),
        Plugin::new(PluginSpec::new().name("no-state")),
        Plugin::with_field("lastAction", LastAction),
    ]);
    let state = EditorState::create(&config).unwrap();
    let next = state.apply_action(&Action::custom("ping")).unwrap();

    for s in [&state, &next] {
        let keys: Vec<&str> = s.field_keys().collect();
        assert_eq!(keys, vec!["count", "lastAction"]);
    }
    assert_eq!(
        next.field::<Option<String>>("lastAction"),
        Some(&Some("ping".to_string()))
    );
}

#[test]
fn test_later_fields_see_earlier_values() {
    let config = StateConfig::new().schema(Schema::basic()).plugins(vec![
        Plugin::with_field("count", ActionCounter),
        Plugin::with_field("seen", SeesCount),
    ]);
    let state = EditorState::create(&config).unwrap();
    let next = state.apply_action(&Action::custom("ping")).unwrap();

    assert_eq!(next.field::<Option<u64>>("seen"), Some(&Some(1)));
}

#[test]
fn test_failing_field_leaves_state_intact() {
    let config = StateConfig::new().schema(Schema::basic()).plugins(vec![
        Plugin::with_field("count", ActionCounter),
        Plugin::with_field("fragile", Fragile),
    ]);
    let state = EditorState::create(&config).unwrap();

    let err = state.apply_action(&Action::custom("boom")).unwrap_err();
    match err {
        StateError::Field { key, .. } => assert_eq!(key, "fragile"),
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(state.field::<u64>("count"), Some(&0));
    assert_eq!(state.field::<u32>("fragile"), Some(&7));
}

#[test]
fn test_duplicate_field_key_is_rejected() {
    let config = StateConfig::new().schema(Schema::basic()).plugins(vec![
        Plugin::with_field("count", ActionCounter),
        Plugin::with_field("count", LastAction),
    ]);
    let err = EditorState::create(&config).unwrap_err();
    assert!(matches!(
        err,
        StateError::Configuration(ConfigurationError::DuplicateFieldKey(ref key)) if key == "count"
    ));
}

#[test]
fn test_reserved_field_key_is_rejected() {
    let config = StateConfig::new()
        .schema(Schema::basic())
        .plugins(vec![Plugin::with_field("selection", ActionCounter)]);
    let err = EditorState::create(&config).unwrap_err();
    assert!(matches!(
        err,
        StateError::Configuration(ConfigurationError::ReservedFieldKey(_))
    ));
}

#[test]
fn test_same_plugin_twice_is_rejected() {
    let counter = Plugin::with_field("count", ActionCounter);
    let config = StateConfig::new()
        .schema(Schema::basic())
        .plugins(vec![counter.clone(), counter]);
    let err = EditorState::create(&config).unwrap_err();
    assert!(matches!(
        err,
        StateError::Configuration(ConfigurationError::DuplicatePlugin(_))
    ));
}

#[test]
fn test_stale_transform_action_fails() {
    let wide = EditorState::create(
        &StateConfig::new()
            .doc(doc(vec![p("abcdef")]))
            .selection(Selection::new(2, 6)),
    )
    .unwrap();
    let action = wide.tr().delete_selection().unwrap().action();

    let narrow = EditorState::create(
        &StateConfig::new()
            .schema(Schema::basic())
            .doc(doc(vec![p("a")]))
            .plugins(vec![Plugin::with_field("count", ActionCounter)]),
    )
    .unwrap();

    let err = narrow.apply_action(&action).unwrap_err();
    assert!(matches!(err, StateError::Transform(_)));

    assert_eq!(narrow.doc(), &doc(vec![p("a")]));
    assert_eq!(narrow.selection(), Selection::new(1, 1));
    assert_eq!(narrow.field::<u64>("count"), Some(&0));
}

#[test]
fn test_explicit_doc_must_be_a_document() {
    let config = StateConfig::new().schema(Schema::basic()).doc(p("x"));
    let err = EditorState::create(&config).unwrap_err();
    assert!(matches!(err, StateError::Model(_)));
}

#[test]
fn test_failed_transform_produces_no_state() {
    let state = EditorState::create(&StateConfig::new().doc(doc(vec![p("ab")]))).unwrap();
    let result = state.tr().replace_with_text(1, 40, "x");
    assert!(result.is_err());
    assert_eq!(state.doc(), &doc(vec![p("ab")]));
}
