//! Swapping plugin sets on an existing state

use scribe_model::builders::{doc, p};
use scribe_model::Schema;
use scribe_state::fields::{ActionCounter, LastAction};
use scribe_state::{
    Action, ConfigurationError, EditorState, Plugin, ReconfigureConfig, Selection, StateConfig,
    StateError,
};

fn counted_state(counter: &Plugin) -> EditorState {
    let state = EditorState::create(
        &StateConfig::new()
            .schema(Schema::basic())
            .plugins(vec![counter.clone()]),
    )
    .unwrap();
    let state = state
        .apply_action(&state.tr().insert_text("hey").unwrap().action())
        .unwrap();
    state.apply_action(&Action::custom("ping")).unwrap()
}

#[test]
fn test_dropping_all_plugins() {
    let counter = Plugin::with_field("count", ActionCounter);
    let state = counted_state(&counter);

    let bare = state.reconfigure(&ReconfigureConfig::new()).unwrap();
    assert!(bare.plugins().is_empty());
    assert_eq!(bare.field_keys().count(), 0);
    assert!(!bare.has_field("count"));
    assert_eq!(bare.doc(), &doc(vec![p("hey")]));
    assert_eq!(bare.selection(), Selection::new(4, 4));

    // the source state is untouched
    assert_eq!(state.field::<u64>("count"), Some(&2));
}

#[test]
fn test_readding_plugin_starts_over() {
    let counter = Plugin::with_field("count", ActionCounter);
    let state = counted_state(&counter);

    let bare = state.reconfigure(&ReconfigureConfig::new()).unwrap();
    let again = bare
        .reconfigure(&ReconfigureConfig::new().plugins(vec![counter.clone()]))
        .unwrap();

    assert_eq!(again.field::<u64>("count"), Some(&0));
    assert_eq!(again.plugin_field::<u64>(&counter), Some(&0));
    assert_eq!(again.doc(), state.doc());
}

#[test]
fn test_adding_a_plugin() {
    let counter = Plugin::with_field("count", ActionCounter);
    let last = Plugin::with_field("lastAction", LastAction);
    let state = counted_state(&counter);

    let wider = state
        .reconfigure(&ReconfigureConfig::new().plugins(vec![counter, last]))
        .unwrap();
    let keys: Vec<&str> = wider.field_keys().collect();
    assert_eq!(keys, vec!["count", "lastAction"]);

    let next = wider.apply_action(&Action::custom("ping")).unwrap();
    assert_eq!(next.field::<u64>("count"), Some(&1));
    assert_eq!(
        next.field::<Option<String>>("lastAction"),
        Some(&Some("ping".to_string()))
    );
}

#[test]
fn test_invalid_plugin_set_is_rejected() {
    let state = counted_state(&Plugin::with_field("count", ActionCounter));
    let err = state
        .reconfigure(&ReconfigureConfig::new().plugins(vec![
            Plugin::with_field("dup", ActionCounter),
            Plugin::with_field("dup", ActionCounter),
        ]))
        .unwrap_err();
    assert!(matches!(
        err,
        StateError::Configuration(ConfigurationError::DuplicateFieldKey(_))
    ));
}
