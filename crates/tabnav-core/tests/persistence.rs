mod common;

use common::{MockHost, MockUnit, RecordingLogger, RecordingSwitcher, builder, tab, tags};
use tabnav_core::{NavControllerBuilder, NavigationStrategy, SavedState, ScreenUnit};
use tabnav_persistence::{decode_state, encode_state};

fn roots(names: &[&str]) -> Vec<MockUnit> {
    names.iter().map(|name| MockUnit::new(name)).collect()
}

#[test]
fn saved_navigation_comes_back_on_the_same_host() {
    let mut nav = builder(&["A", "B"]).build().unwrap();
    nav.initialize(Some(tab(0)), None).unwrap();
    nav.switch_tab(tab(1), None).unwrap();
    let top = MockUnit::new("Z");
    nav.push_fragment(MockUnit::new("X"), None);
    nav.push_fragment(MockUnit::new("Y"), None);
    nav.push_fragment(top.clone(), None);

    let saved = nav.save_state();
    assert_eq!(saved.tag_count, 5);
    assert_eq!(saved.selected_tab_index, Some(1));
    assert_eq!(saved.current_fragment.as_deref(), Some("Z5"));
    assert_eq!(saved.tab_history, None);

    let host = nav.into_host();
    let mut restored = NavControllerBuilder::new(host)
        .root_units(roots(&["A", "B"]))
        .build()
        .unwrap();
    restored.initialize(Some(tab(0)), Some(&saved)).unwrap();

    assert_eq!(restored.current_stack_index(), Some(tab(1)));
    assert_eq!(tags(&restored, 0), ["A1"]);
    assert_eq!(tags(&restored, 1), ["B2", "X3", "Y4", "Z5"]);
    assert_eq!(restored.current_stack().map(|stack| stack.len()), Some(4));
    assert!(
        restored
            .current_fragment()
            .is_some_and(|unit| unit.same_unit(&top))
    );
    assert_eq!(restored.tag_count(), 5);
}

#[test]
fn saved_state_survives_encoding() {
    let mut nav = builder(&["A", "B"]).build().unwrap();
    nav.initialize(Some(tab(1)), None).unwrap();
    nav.push_fragment(MockUnit::new("X"), None);

    let saved = nav.save_state();
    let decoded = decode_state(&encode_state(&saved).unwrap()).unwrap();
    assert_eq!(decoded, saved);
}

#[test]
fn tags_stay_unique_after_restore() {
    let mut nav = builder(&["A"]).build().unwrap();
    nav.initialize(Some(tab(0)), None).unwrap();
    nav.push_fragment(MockUnit::new("X"), None);
    let saved = nav.save_state();

    let mut restored = NavControllerBuilder::new(nav.into_host())
        .root_units(roots(&["A"]))
        .build()
        .unwrap();
    restored.initialize(None, Some(&saved)).unwrap();
    restored.push_fragment(MockUnit::new("X"), None);

    assert_eq!(tags(&restored, 0), ["A1", "X2", "X3"]);
}

#[test]
fn mismatched_state_falls_back_to_a_cold_start() {
    let logger = RecordingLogger::default();
    let saved = SavedState::new(9, Some(2)).with_stacks(vec![
        vec!["A1".into()],
        vec!["B2".into()],
        vec!["C3".into()],
    ]);

    let mut nav = builder(&["A", "B"]).logger(logger.clone()).build().unwrap();
    nav.initialize(Some(tab(0)), Some(&saved)).unwrap();

    assert_eq!(nav.current_stack_index(), Some(tab(0)));
    assert_eq!(tags(&nav, 0), ["A1"]);
    assert!(tags(&nav, 1).is_empty());
    assert_eq!(nav.tag_count(), 1);

    let messages = logger.messages.borrow();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with(
        "could not restore navigation state: saved navigation state was rejected: \
         Invalid navigation state: 3 stacks saved for 2 tabs"
    ));
}

#[test]
fn rejected_state_without_start_leaves_nothing_selected() {
    let saved = SavedState::new(1, Some(5)).with_stacks(vec![vec!["A1".into()]]);
    let mut nav = builder(&["A"]).build().unwrap();
    nav.initialize(None, Some(&saved)).unwrap();

    assert_eq!(nav.current_stack_index(), None);
    assert!(nav.current_fragment().is_none());
    assert!(nav.host().log.is_empty());
}

#[test]
fn placeholder_entries_are_dropped() {
    let saved = SavedState::new(4, Some(0))
        .with_stacks(vec![
            vec!["A1".into(), "null".into(), "NULL".into()],
            vec!["".into()],
        ])
        .with_current_fragment("null");

    let mut nav = builder(&["A", "B"]).build().unwrap();
    nav.initialize(None, Some(&saved)).unwrap();

    assert_eq!(tags(&nav, 0), ["A1"]);
    assert!(tags(&nav, 1).is_empty());
    assert!(nav.is_root_fragment());
    assert_eq!(nav.tag_count(), 4);
}

#[test]
fn empty_stack_gets_a_fresh_root_on_switch() {
    let saved = SavedState::new(4, Some(0)).with_stacks(vec![vec!["A1".into()], Vec::new()]);
    let mut nav = builder(&["A", "B"]).build().unwrap();
    nav.initialize(None, Some(&saved)).unwrap();

    nav.switch_tab(tab(1), None).unwrap();
    assert_eq!(tags(&nav, 1), ["B5"]);
    assert_eq!(nav.host().visible(), ["B"]);
}

#[test]
fn tab_history_is_saved_and_restored() {
    let mut nav = builder(&["A", "B", "C"])
        .navigation_strategy(NavigationStrategy::UniqueTabHistory)
        .switch_controller(RecordingSwitcher::default())
        .build()
        .unwrap();
    nav.initialize(Some(tab(0)), None).unwrap();
    nav.switch_tab(tab(1), None).unwrap();
    nav.switch_tab(tab(2), None).unwrap();

    let saved = nav.save_state();
    assert_eq!(saved.tab_history, Some(vec![0, 1, 2]));

    let switcher = RecordingSwitcher::default();
    let mut restored = NavControllerBuilder::new(nav.into_host())
        .root_units(roots(&["A", "B", "C"]))
        .navigation_strategy(NavigationStrategy::UniqueTabHistory)
        .switch_controller(switcher.clone())
        .build()
        .unwrap();
    restored.initialize(None, Some(&saved)).unwrap();

    assert!(restored.pop_fragment(None).unwrap());
    assert!(restored.pop_fragment(None).unwrap());
    assert!(!restored.pop_fragment(None).unwrap());
    assert_eq!(*switcher.switches.borrow(), [1, 0]);
    assert_eq!(restored.host().visible(), ["A"]);
}

#[test]
fn missing_history_starts_from_the_selected_tab() {
    let saved = SavedState::new(2, Some(1)).with_stacks(vec![vec!["A1".into()], vec!["B2".into()]]);
    let switcher = RecordingSwitcher::default();
    let mut nav = NavControllerBuilder::new(MockHost::new())
        .root_units(roots(&["A", "B"]))
        .navigation_strategy(NavigationStrategy::UnlimitedTabHistory)
        .switch_controller(switcher.clone())
        .build()
        .unwrap();
    nav.initialize(None, Some(&saved)).unwrap();

    assert_eq!(nav.history().save(), Some(vec![1]));
    assert!(!nav.pop_fragment(None).unwrap());
    assert!(switcher.switches.borrow().is_empty());
}
