//! Behavioral properties of the selection engine, driven through events.

use selectkit::app::filter;
use selectkit::{
    handle_event, Action, Event, FieldMap, Identifier, InitialSelection, OptionRecord,
    SelectMode, SelectState, SelectionValue, Theme, ToggleValue,
};
use serde_json::json;

fn catalog() -> Vec<OptionRecord> {
    vec![OptionRecord::new(1, "Alpha"), OptionRecord::new(2, "Beta")]
}

fn control(mode: SelectMode) -> SelectState {
    let mut state = SelectState::new(mode, Theme::default());
    send(&mut state, Event::OptionsChanged(catalog()));
    state
}

fn send(state: &mut SelectState, event: Event) -> Vec<SelectionValue> {
    let (_, actions) = handle_event(state, &event).unwrap();
    actions
        .into_iter()
        .map(|action| match action {
            Action::Commit(value) => value,
        })
        .collect()
}

fn visible_labels(state: &SelectState) -> Vec<String> {
    state.visible_options().map(|o| o.label.clone()).collect()
}

#[test]
fn visible_set_is_a_case_insensitive_subset() {
    let options = vec![
        OptionRecord::new(1, "Alpha"),
        OptionRecord::new(2, "ALPINE"),
        OptionRecord::new(3, "Beta"),
        OptionRecord::new(4, "Gamma"),
    ];

    for query in ["", "al", "AL", "a", "mm", "zzz"] {
        let indices = filter::visible(&options, query);
        assert!(indices.windows(2).all(|w| w[0] < w[1]), "catalog order kept");
        for index in &indices {
            let label = options[*index].label.to_lowercase();
            assert!(label.contains(&query.to_lowercase()));
        }
    }

    assert_eq!(filter::visible(&options, ""), vec![0, 1, 2, 3]);
    assert_eq!(filter::visible(&options, "aL"), vec![0, 1]);
}

#[test]
fn unselect_all_clears_ids_outside_visible_set() {
    let mut state = control(SelectMode::Multiple);
    send(
        &mut state,
        Event::Toggle(ToggleValue::Many(vec![Identifier::Int(1), Identifier::Int(2)])),
    );
    send(&mut state, Event::QueryChanged("alpha".into()));
    assert!(state.is_all_selected());

    send(&mut state, Event::ToggleAll);
    assert!(state.selection.is_empty());
}

#[test]
fn select_all_takes_exactly_the_visible_ids() {
    let mut state = control(SelectMode::Multiple);
    send(&mut state, Event::Toggle(ToggleValue::Many(vec![Identifier::Int(2)])));
    send(&mut state, Event::QueryChanged("alp".into()));
    assert!(!state.is_all_selected());

    send(&mut state, Event::ToggleAll);
    assert_eq!(state.selection.ids(), vec![Identifier::Int(1)]);
}

#[test]
fn single_select_commits_catalog_typed_id() {
    let mut state = control(SelectMode::Single);
    let commits = send(&mut state, Event::Toggle(ToggleValue::One(Identifier::from("2"))));

    assert_eq!(commits.len(), 1);
    let SelectionValue::Single(Some(id)) = &commits[0] else {
        panic!("expected a single value, got {:?}", commits[0]);
    };
    assert!(id.is_int());
    assert_eq!(serde_json::to_value(&commits[0]).unwrap(), json!(2));
}

#[test]
fn numeric_looking_string_ids_stay_distinct() {
    let mut single = SelectState::new(SelectMode::Single, Theme::default());
    send(
        &mut single,
        Event::OptionsChanged(vec![OptionRecord::new("03", "Zero three"), OptionRecord::new("3", "Three")]),
    );
    let commits = send(&mut single, Event::Toggle(ToggleValue::One(Identifier::from("3"))));
    assert_eq!(commits, vec![SelectionValue::Single(Some(Identifier::from("3")))]);
    assert_eq!(single.selected_labels(), ["Three"]);

    let mut multi = SelectState::new(SelectMode::Multiple, Theme::default());
    send(
        &mut multi,
        Event::OptionsChanged(vec![OptionRecord::new("01", "Zero one"), OptionRecord::new("1", "One")]),
    );
    send(&mut multi, Event::Toggle(ToggleValue::Many(vec![Identifier::from("1")])));
    let selected: Vec<bool> = multi.compute_viewmodel().visible_options.iter().map(|row| row.is_selected).collect();
    assert_eq!(selected, [false, true]);
    assert!(!multi.is_all_selected());
}

#[test]
fn retyped_options_change_the_committed_type() {
    let mut state = SelectState::new(SelectMode::Single, Theme::default());
    send(&mut state, Event::OptionsChanged(vec![OptionRecord::new(3, "Three")]));
    send(&mut state, Event::OptionsChanged(vec![OptionRecord::new("3", "Three")]));

    let commits = send(&mut state, Event::Toggle(ToggleValue::One(Identifier::from("3"))));
    assert_eq!(serde_json::to_value(&commits[0]).unwrap(), json!("3"));
}

#[test]
fn integers_beyond_i64_match_only_their_own_text() {
    let raw = vec![
        json!({"id": 9_223_372_036_854_775_808_u64, "label": "Past max"}),
        json!({"id": i64::MAX, "label": "Max"}),
    ];
    let catalog = selectkit::normalize(&raw, &FieldMap::default());
    assert_eq!(catalog[0].id, Identifier::from("9223372036854775808"));

    let mut state = SelectState::new(SelectMode::Single, Theme::default());
    send(&mut state, Event::OptionsChanged(catalog));

    let commits = send(
        &mut state,
        Event::Toggle(ToggleValue::One(Identifier::from("9223372036854775808"))),
    );
    assert_eq!(
        commits,
        vec![SelectionValue::Single(Some(Identifier::from("9223372036854775808")))]
    );

    let commits = send(
        &mut state,
        Event::Toggle(ToggleValue::One(Identifier::from("9223372036854775807"))),
    );
    assert_eq!(commits, vec![SelectionValue::Single(Some(Identifier::Int(i64::MAX)))]);
}

#[test]
fn unmatched_single_value_commits_empty_sentinel() {
    let mut state = control(SelectMode::Single);
    send(&mut state, Event::Toggle(ToggleValue::One(Identifier::Int(1))));
    let commits = send(&mut state, Event::Toggle(ToggleValue::One(Identifier::from("nine"))));

    assert_eq!(commits, vec![SelectionValue::Single(None)]);
    assert!(state.selection.is_empty());
}

#[test]
fn clear_commits_even_when_required() {
    let mut state = control(SelectMode::Single);
    state.presentation.required = true;
    send(&mut state, Event::Toggle(ToggleValue::One(Identifier::Int(1))));

    let commits = send(&mut state, Event::Clear);
    assert_eq!(commits, vec![SelectionValue::Single(None)]);
    assert_eq!(serde_json::to_value(&commits[0]).unwrap(), json!(null));
}

#[test]
fn multiple_close_commits_once_and_resets_query() {
    let mut state = control(SelectMode::Multiple);
    send(&mut state, Event::Open);
    send(&mut state, Event::QueryChanged("be".into()));
    assert!(send(&mut state, Event::ToggleAll).is_empty());

    let commits = send(&mut state, Event::Close);
    assert_eq!(commits, vec![SelectionValue::Multiple(vec![Identifier::Int(2)])]);
    assert_eq!(state.query(), "");
    assert_eq!(visible_labels(&state), ["Alpha", "Beta"]);
}

#[test]
fn scenario_select_all_then_close() {
    let mut state = control(SelectMode::Multiple);
    send(
        &mut state,
        Event::InitialSelectionChanged(InitialSelection::Many(vec![Identifier::Int(1)])),
    );
    send(&mut state, Event::Open);

    send(&mut state, Event::QueryChanged("a".into()));
    assert_eq!(visible_labels(&state), ["Alpha", "Beta"]);

    send(&mut state, Event::ToggleAll);
    assert_eq!(state.selection.ids(), vec![Identifier::Int(1), Identifier::Int(2)]);

    let commits = send(&mut state, Event::Close);
    assert_eq!(
        commits,
        vec![SelectionValue::Multiple(vec![Identifier::Int(1), Identifier::Int(2)])]
    );
    assert_eq!(state.query(), "");
}

#[test]
fn scenario_unselect_all_under_narrow_query() {
    let mut state = control(SelectMode::Multiple);
    send(
        &mut state,
        Event::Toggle(ToggleValue::Many(vec![Identifier::Int(1), Identifier::Int(2)])),
    );

    send(&mut state, Event::QueryChanged("alpha".into()));
    assert_eq!(visible_labels(&state), ["Alpha"]);

    send(&mut state, Event::ToggleAll);
    assert!(state.selection.ids().is_empty());
}

#[test]
fn raw_records_flow_through_field_map() {
    let raw = vec![
        json!({"user_id": "7", "name": "Grace"}),
        json!({"user_id": 8}),
    ];
    let catalog = selectkit::normalize(&raw, &FieldMap::new("user_id", "name"));

    let mut state = SelectState::new(SelectMode::Single, Theme::default());
    send(&mut state, Event::OptionsChanged(catalog));
    assert_eq!(visible_labels(&state), ["Grace", "undefined"]);

    let commits = send(&mut state, Event::Toggle(ToggleValue::One(Identifier::Int(7))));
    assert_eq!(commits, vec![SelectionValue::Single(Some(Identifier::from("7")))]);
}

#[test]
fn seed_policy_controls_accumulation() {
    use selectkit::SeedPolicy;

    let seeds = |policy| {
        let mut state = control(SelectMode::Multiple).with_seed_policy(policy);
        for id in [1, 2] {
            send(
                &mut state,
                Event::InitialSelectionChanged(InitialSelection::Many(vec![Identifier::Int(id)])),
            );
        }
        state.selection.ids()
    };

    assert_eq!(seeds(SeedPolicy::Merge), vec![Identifier::Int(1), Identifier::Int(2)]);
    assert_eq!(seeds(SeedPolicy::Replace), vec![Identifier::Int(2)]);
}
