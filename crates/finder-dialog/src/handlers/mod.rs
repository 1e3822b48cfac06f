//! Turn handlers, grouped by conversation area.
//!
//! Each handler reads the turn's request data and attributes through a
//! [`Turn`], mutates the attributes, and returns the reply to send.

pub(crate) mod common;
pub(crate) mod profile;
pub(crate) mod refine;
pub(crate) mod results;
pub(crate) mod search;

use tracing::{debug, warn};

use finder_core::config::DisplayConfig;
use finder_core::types::{BoundedList, DialogState, SchoolRecord};
use finder_search::{SchoolSearch, SearchError, SearchOutcome, SearchQuery};

use crate::catalog::{MessageCatalog, Params};
use crate::display::{self, SchoolFigures, Template};
use crate::envelope::{DialogProgress, Intent, ResolvedValue, Slot};
use crate::error::DialogError;
use crate::fsm::Route;
use crate::response::ResponseBuilder;
use crate::session::{SessionAttributes, SessionStore};

pub(crate) const SEARCH_BY_NAME_INTENT: &str = "SearchByNameIntent";
pub(crate) const ADD_FAVORITE_INTENT: &str = "AddToFavoritesIntent";
pub(crate) const DELETE_FAVORITE_INTENT: &str = "DeleteFromFavoritesIntent";

/// Everything a handler may read or change during one turn.
pub(crate) struct Turn<'a> {
    pub catalog: &'a MessageCatalog,
    pub search: &'a dyn SchoolSearch,
    pub images: &'a DisplayConfig,
    pub locale: String,
    pub has_display: bool,
    pub intent: Option<Intent>,
    pub progress: Option<DialogProgress>,
    pub token: Option<String>,
    pub end_reason: Option<String>,
    pub session: SessionStore,
}

impl<'a> Turn<'a> {
    pub fn attrs(&self) -> &SessionAttributes {
        self.session.attributes()
    }

    pub fn attrs_mut(&mut self) -> &mut SessionAttributes {
        self.session.attributes_mut()
    }

    pub fn text(&self, key: &str) -> Result<String, DialogError> {
        self.catalog.text(&self.locale, key)
    }

    pub fn render(&self, key: &str, params: Params<'_>) -> Result<String, DialogError> {
        self.catalog.render(&self.locale, key, params)
    }

    /// A slot of the current intent that carries a spoken value.
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.intent
            .as_ref()
            .and_then(|intent| intent.slot(name))
            .filter(|slot| slot.has_value())
    }

    pub fn slot_value(&self, name: &str) -> Option<String> {
        self.slot(name)
            .and_then(|slot| slot.value.as_deref())
            .map(|value| value.trim().to_string())
    }

    pub fn resolved(&self, name: &str) -> Option<ResolvedValue> {
        self.slot(name).and_then(Slot::resolved).cloned()
    }

    pub fn intent_name(&self) -> Option<String> {
        self.intent.as_ref().map(|intent| intent.name.clone())
    }

    pub fn compose(&mut self, prompt: &str) -> String {
        self.attrs_mut().compose_prompt(prompt)
    }

    /// Persist the snapshot. Storage trouble never fails the turn.
    pub fn save(&mut self) {
        if let Err(e) = self.session.persist() {
            warn!(error = %e, "Failed to persist attributes");
        }
    }

    /// Ask `message`, with the splash screen and a usage hint on displays.
    pub fn simple_display(&self, message: String) -> Result<ResponseBuilder, DialogError> {
        let mut builder = ResponseBuilder::new().ask(message);
        if self.has_display {
            let label = self.text("LABEL_NAME")?;
            builder = builder.template(display::main_template(self.images, &label));
            if let Some(hint) = self.catalog.random_hint(&self.locale) {
                builder = builder.hint(hint);
            }
        }
        Ok(builder)
    }

    pub fn school_card(&self, school: &SchoolRecord) -> Result<Template, DialogError> {
        let figures = SchoolFigures::new(school, &self.text("NOT_AVAILABLE")?);
        let card = self.render(
            "MORE_INFORMATION_CARD",
            &[
                ("TUITION_IN_STATE", &figures.tuition_in_state),
                ("TUITION_OUT_OF_STATE", &figures.tuition_out_of_state),
                ("GRADUATION_RATE", &figures.graduation_rate),
                ("SALARY", &figures.salary),
            ],
        )?;
        Ok(display::school_template(self.images, school, &card))
    }

    pub fn list_card(
        &self,
        title_key: &str,
        schools: &BoundedList<SchoolRecord>,
    ) -> Result<Template, DialogError> {
        let title = self.text(title_key)?;
        Ok(display::list_template(self.images, &title, schools))
    }

    pub async fn run_search(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError> {
        debug!(?query, "Running school search");
        let outcome = self.search.search(query).await;
        if let Err(e) = &outcome {
            warn!(error = %e, "School search failed");
        }
        outcome
    }

    /// Keep the first page of an outcome as the loaded results.
    pub fn store_results(&mut self, outcome: SearchOutcome) {
        let persistent = &mut self.attrs_mut().persistent;
        persistent.search_total = outcome.total;
        persistent.search_results = BoundedList::truncated_from(outcome.results);
        persistent.search_page = 0;
    }
}

/// Speak a school's details and make it the current school.
pub(crate) fn more_info(
    turn: &mut Turn<'_>,
    school: SchoolRecord,
) -> Result<ResponseBuilder, DialogError> {
    let in_favorites = turn.attrs().in_favorites();
    let prompt_key = if in_favorites {
        "MORE_INFORMATION_FAV_PROMPT"
    } else {
        "MORE_INFORMATION_SAVE_PROMPT"
    };

    let not_available = turn.text("NOT_AVAILABLE")?;
    let whole_dollars = |amount: Option<f64>| {
        amount
            .map(|a| (a.round() as u64).to_string())
            .unwrap_or_else(|| not_available.clone())
    };
    let state = school
        .state
        .as_deref()
        .map(|abbr| finder_core::geo::state_name(abbr).unwrap_or(abbr).to_string())
        .unwrap_or_default();
    let intro = turn.render(
        "MORE_INFORMATION_OVERVIEW",
        &[
            ("SCHOOL_NAME", &school.spoken_name()),
            ("CITY", &school.city.clone().unwrap_or_default()),
            ("STATE", &state),
            ("TUITION_IN_STATE", &whole_dollars(school.tuition_in_state)),
            ("TUITION_OUT_OF_STATE", &whole_dollars(school.tuition_out_of_state)),
        ],
    )?;
    let prompt = turn.text(prompt_key)?;
    let card = if turn.has_display {
        Some(turn.school_card(&school)?)
    } else {
        None
    };

    let attrs = turn.attrs_mut();
    attrs.intro_message = intro;
    attrs.persistent.current_school_id = Some(school.id);
    if in_favorites {
        attrs.persistent.current_favorite_id = Some(school.id);
    } else if attrs.state != Some(DialogState::MoreInformation) {
        attrs.previous_state = attrs.state;
        attrs.state = Some(DialogState::MoreInformation);
    }
    attrs.persistent.current_school = Some(school);

    let message = turn.compose(&prompt);
    let mut builder = ResponseBuilder::new().ask(message);
    if let Some(card) = card {
        builder = builder.template(card);
    }
    Ok(builder)
}

pub(crate) async fn dispatch(
    route: Route,
    turn: &mut Turn<'_>,
) -> Result<ResponseBuilder, DialogError> {
    match route {
        Route::Launch => common::launch(turn),
        Route::Help => common::help(turn),
        Route::Goodbye => common::goodbye(turn),
        Route::SessionEnded => common::session_ended(turn),
        Route::CanFulfill => common::can_fulfill(turn),
        Route::MainMenu => common::main_menu(turn),
        Route::Decline => common::decline(turn),
        Route::RegionList => common::region_list(turn),
        Route::ResetProfile => common::reset_profile(turn),
        Route::Unhandled => common::unhandled(turn),

        Route::ProfileStart => profile::start(turn),
        Route::ProfileItemYes => profile::item_yes(turn),
        Route::ProfileReview => profile::review(turn),
        Route::ProfileChange => profile::change(turn),
        Route::ScoreType => profile::score_type(turn),
        Route::DegreeAnswer => profile::degree(turn),
        Route::MajorAnswer => profile::major(turn),
        Route::ProfileNumber => profile::number(turn),
        Route::ProfileSkip => profile::skip(turn),

        Route::SearchStartOver => search::start_over(turn),
        Route::SearchByName => search::by_name(turn).await,
        Route::SearchByLocation => search::by_location(turn).await,
        Route::SearchByMajor => search::by_major(turn).await,

        Route::SelectNumber => results::select_number(turn),
        Route::SelectTouch => results::select_touch(turn),
        Route::PageNext => results::next_page(turn),
        Route::PagePrevious => results::previous_page(turn),
        Route::PageRestart => results::restart(turn),
        Route::ListResults => results::list(turn, false),
        Route::ListFavorites => results::list(turn, true),
        Route::AddFavorite => results::add_favorite(turn),
        Route::DeleteFavorite => results::delete_favorite(turn),

        Route::RefineFill => refine::fill(turn),
        Route::RefineComplete => refine::complete(turn).await,
    }
}
