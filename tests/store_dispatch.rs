//! Root-reducer delegation: each action touches exactly one slice.

use mentormatch::model::{Mentor, Preferences, Relationship, Student};
use mentormatch::state::filters::{FilterAction, MentorFilters};
use mentormatch::state::mentors::MentorAction;
use mentormatch::state::modal::ModalAction;
use mentormatch::state::relationships::RelationshipAction;
use mentormatch::state::search::SearchAction;
use mentormatch::state::session::SessionAction;
use mentormatch::state::students::StudentAction;
use mentormatch::state::{AppState, Store};

fn mentor(id: u64, name: &str) -> Mentor {
    Mentor {
        id,
        name: name.to_string(),
        city: None,
        locale: None,
        preferences: Preferences::default(),
        mentees: None,
    }
}

fn populated_store() -> Store {
    let mut store = Store::new();
    store.dispatch(MentorAction::Set(vec![mentor(1, "Stannis")]));
    store.dispatch(StudentAction::Set(vec![Student {
        id: 2,
        name: "Alex".to_string(),
        active: true,
        matched: false,
    }]));
    store.dispatch(RelationshipAction::Set(vec![Relationship {
        mentor_id: 1,
        student_id: 2,
        active: true,
    }]));
    store.dispatch(SessionAction::SetToken("1234ABCD".to_string()));
    store
}

#[test]
fn fresh_store_matches_the_documented_defaults() {
    let store = Store::new();
    let state = store.state();

    assert!(state.mentors.is_empty());
    assert_eq!(state.modal, None);
    assert!(state.students.is_empty());
    assert!(state.relationships.is_empty());
    assert_eq!(state.filters, MentorFilters::default());
    assert_eq!(state.search.locale, "");
    assert_eq!(state.search.search_term, "");
    assert!(!state.search.showing_all_mentors);
    assert!(!state.session.is_loading);
    assert!(!state.session.has_errored);
    assert!(!state.session.is_editable);
    assert_eq!(state.session.token, "");
}

#[test]
fn mentor_action_leaves_every_other_slice_untouched() {
    let mut store = populated_store();
    let before = store.state().clone();

    store.dispatch(MentorAction::UpdateChanged(mentor(1, "Robert")));

    let after = store.state();
    assert_eq!(after.mentors[0].name, "Robert");
    assert_eq!(after.students, before.students);
    assert_eq!(after.relationships, before.relationships);
    assert_eq!(after.modal, before.modal);
    assert_eq!(after.filters, before.filters);
    assert_eq!(after.search, before.search);
    assert_eq!(after.session, before.session);
}

#[test]
fn modal_actions_replace_the_modal_wholesale() {
    let mut store = populated_store();

    store.dispatch(ModalAction::Set(mentor(1, "Stannis")));
    assert_eq!(store.state().modal, Some(mentor(1, "Stannis")));

    let detailed = mentor(1, "Stannis").with_mentees(vec![Student {
        id: 2,
        name: "Alex".to_string(),
        active: true,
        matched: false,
    }]);
    store.dispatch(ModalAction::AddMentees(detailed.clone()));
    assert_eq!(store.state().modal, Some(detailed));
}

#[test]
fn filter_change_only_touches_filters() {
    let mut store = populated_store();
    let before = store.state().clone();

    let filters = MentorFilters {
        lgbtq: true,
        veteran: true,
        ..MentorFilters::default()
    };
    store.dispatch(FilterAction::Change(filters.clone()));

    let after = store.state();
    assert_eq!(after.filters, filters);
    assert_eq!(
        AppState {
            filters: before.filters.clone(),
            ..after.clone()
        },
        before
    );
}

#[test]
fn search_and_session_actions_compose() {
    let mut store = Store::new();

    store.dispatch(SearchAction::SetLocale("Remote".to_string()));
    store.dispatch(SearchAction::SetSearch("skwijb".to_string()));
    store.dispatch(SearchAction::ToggleShowingMentors(true));
    store.dispatch(SessionAction::SetLoading(true));

    let state = store.state();
    assert_eq!(state.search.locale, "Remote");
    assert_eq!(state.search.search_term, "skwijb");
    assert!(state.search.showing_all_mentors);
    assert!(state.session.is_loading);
}

#[test]
fn make_student_inactive_matches_the_documented_scenario() {
    let mut store = Store::new();
    store.dispatch(StudentAction::Set(vec![
        Student {
            id: 1,
            name: "Casey".to_string(),
            active: true,
            matched: false,
        },
        Student {
            id: 2,
            name: "Alex".to_string(),
            active: true,
            matched: false,
        },
    ]));

    store.dispatch(StudentAction::MakeInactive { student_id: 2 });

    let students = &store.state().students;
    assert!(students[0].active);
    assert!(!students[0].matched);
    assert!(!students[1].active);
    assert!(students[1].matched);
}
