//! Root state tree and root action dispatch.

use crate::state::core::{Action, Reducer};
use crate::state::filters::{FilterAction, FiltersReducer, MentorFilters};
use crate::state::mentors::{MentorAction, MentorsReducer, MentorsState};
use crate::state::modal::{ModalAction, ModalReducer, ModalState};
use crate::state::relationships::{RelationshipAction, RelationshipsReducer, RelationshipsState};
use crate::state::search::{SearchAction, SearchReducer, SearchState};
use crate::state::session::{SessionAction, SessionReducer, SessionState};
use crate::state::students::{StudentAction, StudentsReducer, StudentsState};

/// The whole application state tree. Slices are independent; each
/// action touches exactly one of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub mentors: MentorsState,
    pub modal: ModalState,
    pub students: StudentsState,
    pub relationships: RelationshipsState,
    pub filters: MentorFilters,
    pub search: SearchState,
    pub session: SessionState,
}

/// Root action: one variant per slice action family.
#[derive(Debug, Clone)]
pub enum AppAction {
    Mentors(MentorAction),
    Modal(ModalAction),
    Students(StudentAction),
    Relationships(RelationshipAction),
    Filters(FilterAction),
    Search(SearchAction),
    Session(SessionAction),
}

impl Action for AppAction {
    fn kind(&self) -> &'static str {
        match self {
            AppAction::Mentors(action) => action.kind(),
            AppAction::Modal(action) => action.kind(),
            AppAction::Students(action) => action.kind(),
            AppAction::Relationships(action) => action.kind(),
            AppAction::Filters(action) => action.kind(),
            AppAction::Search(action) => action.kind(),
            AppAction::Session(action) => action.kind(),
        }
    }
}

impl From<MentorAction> for AppAction {
    fn from(action: MentorAction) -> Self {
        AppAction::Mentors(action)
    }
}

impl From<ModalAction> for AppAction {
    fn from(action: ModalAction) -> Self {
        AppAction::Modal(action)
    }
}

impl From<StudentAction> for AppAction {
    fn from(action: StudentAction) -> Self {
        AppAction::Students(action)
    }
}

impl From<RelationshipAction> for AppAction {
    fn from(action: RelationshipAction) -> Self {
        AppAction::Relationships(action)
    }
}

impl From<FilterAction> for AppAction {
    fn from(action: FilterAction) -> Self {
        AppAction::Filters(action)
    }
}

impl From<SearchAction> for AppAction {
    fn from(action: SearchAction) -> Self {
        AppAction::Search(action)
    }
}

impl From<SessionAction> for AppAction {
    fn from(action: SessionAction) -> Self {
        AppAction::Session(action)
    }
}

/// Root reducer: delegates the action to its slice, leaving every other
/// slice untouched.
pub fn reduce(state: AppState, action: AppAction) -> AppState {
    match action {
        AppAction::Mentors(action) => AppState {
            mentors: MentorsReducer::reduce(state.mentors, action),
            ..state
        },
        AppAction::Modal(action) => AppState {
            modal: ModalReducer::reduce(state.modal, action),
            ..state
        },
        AppAction::Students(action) => AppState {
            students: StudentsReducer::reduce(state.students, action),
            ..state
        },
        AppAction::Relationships(action) => AppState {
            relationships: RelationshipsReducer::reduce(state.relationships, action),
            ..state
        },
        AppAction::Filters(action) => AppState {
            filters: FiltersReducer::reduce(state.filters, action),
            ..state
        },
        AppAction::Search(action) => AppState {
            search: SearchReducer::reduce(state.search, action),
            ..state
        },
        AppAction::Session(action) => AppState {
            session: SessionReducer::reduce(state.session, action),
            ..state
        },
    }
}
