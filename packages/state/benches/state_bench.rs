use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scribe_model::Schema;
use scribe_state::fields::{ActionCounter, LastAction};
use scribe_state::{Action, EditorState, Plugin, SerializeOptions, StateConfig};

fn config() -> StateConfig {
    StateConfig::new().schema(Schema::basic()).plugins(vec![
        Plugin::with_field("count", ActionCounter),
        Plugin::with_field("lastAction", LastAction),
    ])
}

fn typed_state(chars: usize) -> EditorState {
    let mut state = EditorState::create(&config()).unwrap();
    for _ in 0..chars {
        let action = state.tr().insert_text("x").unwrap().action();
        state = state.apply_action(&action).unwrap();
    }
    state
}

fn apply_insert(c: &mut Criterion) {
    let state = typed_state(100);

    c.bench_function("apply_insert", |b| {
        b.iter(|| {
            let action = state.tr().insert_text(black_box("hello")).unwrap().action();
            state.apply_action(&action)
        })
    });
}

fn apply_custom(c: &mut Criterion) {
    let state = typed_state(100);
    let action = Action::custom("ping");

    c.bench_function("apply_custom", |b| {
        b.iter(|| state.apply_action(black_box(&action)))
    });
}

fn json_round_trip(c: &mut Criterion) {
    let state = typed_state(1000);
    let config = config();
    let options = SerializeOptions::default();

    c.bench_function("json_round_trip", |b| {
        b.iter(|| {
            let json = state.to_json(black_box(&options)).unwrap();
            EditorState::from_json(&config, &json)
        })
    });
}

criterion_group!(benches, apply_insert, apply_custom, json_round_trip);
criterion_main!(benches);
