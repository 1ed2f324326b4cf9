//! Behavioural properties of the win-condition state machine, checked over
//! every click sequence up to a fixed length.

use bug_hunt::core::{BugCatalog, BugDescriptor, GameError, GameRules, GameState};
use bug_hunt::types::FeedbackKind;

const STANDARD_IDS: [&str; 4] = ["LADY_BUG", "BEE", "MITE", "SLUG"];

/// All sequences of `len` clicks over `ids`.
fn sequences<'a>(ids: &[&'a str], len: usize) -> Vec<Vec<&'a str>> {
    let mut out: Vec<Vec<&str>> = vec![Vec::new()];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                ids.iter().map(move |&id| {
                    let mut next = prefix.clone();
                    next.push(id);
                    next
                })
            })
            .collect();
    }
    out
}

fn play(rules: &GameRules, clicks: &[&str]) -> GameState {
    clicks.iter().fold(GameState::new(), |state, id| {
        rules.handle_bug_click(&state, id).unwrap().0
    })
}

fn is_friendly(rules: &GameRules, id: &str) -> bool {
    let slot = rules.catalog().lookup(id).unwrap();
    rules.catalog().get(slot).unwrap().descriptor.is_friendly
}

/// Every reachable state across all sequences up to `max_len` clicks.
fn reachable_states(rules: &GameRules, max_len: usize) -> Vec<GameState> {
    let ids: Vec<&str> = rules.catalog().iter().map(|(_, e)| e.id.as_str()).collect();
    let mut states = Vec::new();
    for len in 0..=max_len {
        for seq in sequences(&ids, len) {
            let state = play(rules, &seq);
            states.push(state.clone());
            states.push(state.toggle_feedback());
        }
    }
    states
}

#[test]
fn invariant_holds_in_every_reachable_state() {
    let rules = GameRules::standard();
    for state in reachable_states(&rules, 5) {
        if state.has_won() {
            assert!(state.correct_bugs().is_empty());
        } else {
            assert!(state.correct_bugs().len() < rules.target());
        }
    }
}

#[test]
fn repeated_hostile_clicks_are_idempotent() {
    let rules = GameRules::standard();
    for state in reachable_states(&rules, 4) {
        for id in ["MITE", "SLUG"] {
            let (once, f1) = rules.handle_bug_click(&state, id).unwrap();
            if once.has_won() {
                continue;
            }
            let (twice, f2) = rules.handle_bug_click(&once, id).unwrap();
            assert_eq!(once, twice, "second {} click changed state", id);
            assert_eq!(f1, FeedbackKind::Correct);
            assert_eq!(f2, FeedbackKind::Correct);
        }
    }
}

#[test]
fn distinct_hostile_bugs_in_any_order_win() {
    let rules = GameRules::standard();
    for order in [["MITE", "SLUG"], ["SLUG", "MITE"]] {
        let state = play(&rules, &order);
        assert!(state.has_won());
        assert!(state.correct_bugs().is_empty());
    }

    // Repeats in between do not matter as long as no friendly bug is clicked.
    let state = play(&rules, &["SLUG", "SLUG", "SLUG", "MITE"]);
    assert!(state.has_won());
}

#[test]
fn friendly_click_always_resets() {
    let rules = GameRules::standard();
    for state in reachable_states(&rules, 4) {
        for id in ["LADY_BUG", "BEE"] {
            let (next, feedback) = rules.handle_bug_click(&state, id).unwrap();
            assert!(!next.has_won());
            assert!(next.correct_bugs().is_empty());
            assert_eq!(feedback, FeedbackKind::Oops);
        }
    }
}

#[test]
fn hostile_click_after_win_starts_fresh_round() {
    for target in [1, 2] {
        let rules = GameRules::new(BugCatalog::standard(), target).unwrap();
        let won = play(&rules, &["MITE", "SLUG"][..target]);
        assert!(won.has_won(), "target {target}");

        for id in ["MITE", "SLUG"] {
            let (next, feedback) = rules.handle_bug_click(&won, id).unwrap();
            assert!(!next.has_won(), "target {target}, {id}");
            assert_eq!(next.correct_bugs(), [rules.catalog().lookup(id).unwrap()]);
            assert_eq!(feedback, FeedbackKind::Correct);
        }
    }
}

#[test]
fn unknown_identifier_fails_from_every_state() {
    let rules = GameRules::standard();
    for state in reachable_states(&rules, 3) {
        let err = rules.handle_bug_click(&state, "NONEXISTENT").unwrap_err();
        assert_eq!(
            err,
            GameError::UnknownBugIdentifier {
                bug_id: "NONEXISTENT".into()
            }
        );
    }
}

#[test]
fn every_click_shows_feedback_for_the_clicked_bug() {
    let rules = GameRules::standard();
    for seq in sequences(&STANDARD_IDS, 3) {
        let mut state = GameState::new();
        for id in seq {
            let (next, feedback) = rules.handle_bug_click(&state.toggle_feedback(), id).unwrap();
            assert!(next.show_feedback());
            assert_eq!(next.current_bug(), rules.catalog().lookup(id));
            assert_eq!(rules.feedback_for(&next), Some(feedback));
            if is_friendly(&rules, id) {
                assert_eq!(feedback, FeedbackKind::Oops);
            }
            state = next;
        }
    }
}

#[test]
fn concrete_scenario() {
    let rules = GameRules::standard();
    let mite = rules.catalog().lookup("MITE").unwrap();

    let s1 = play(&rules, &["MITE"]);
    assert!(!s1.has_won());
    assert_eq!(s1.correct_bugs(), [mite]);

    let s2 = play(&rules, &["MITE", "SLUG"]);
    assert!(s2.has_won());
    assert!(s2.correct_bugs().is_empty());

    let s3 = play(&rules, &["MITE", "SLUG", "LADY_BUG"]);
    assert!(!s3.has_won());
    assert!(s3.correct_bugs().is_empty());
}

#[test]
fn custom_catalog_with_higher_target() {
    let catalog = BugCatalog::new([
        ("ANT", BugDescriptor::hostile("ant.png")),
        ("TICK", BugDescriptor::hostile("tick.png")),
        ("FLEA", BugDescriptor::hostile("flea.png")),
        ("MOTH", BugDescriptor::friendly("moth.png")),
    ])
    .unwrap();
    let rules = GameRules::new(catalog, 3).unwrap();

    for state in reachable_states(&rules, 4) {
        if state.has_won() {
            assert!(state.correct_bugs().is_empty());
        } else {
            assert!(state.correct_bugs().len() < 3);
        }
    }

    // Set semantics: order of discovery does not matter.
    assert_eq!(
        play(&rules, &["ANT", "TICK"]).correct_bugs(),
        play(&rules, &["TICK", "ANT"]).correct_bugs()
    );
    assert!(play(&rules, &["FLEA", "ANT", "TICK"]).has_won());
    assert!(!play(&rules, &["FLEA", "ANT", "MOTH", "TICK"]).has_won());
}
