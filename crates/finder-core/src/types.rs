use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FinderError;

/// Maximum number of search results or favorites kept in the session.
pub const RECORD_LIMIT: usize = 12;

/// Number of list items spoken per turn.
pub const PER_PAGE: usize = 3;

/// Slot value the refine dialog uses to mean "no preference".
pub const NO_PREFERENCE: &str = "0";

// =============================================================================
// Dialog state
// =============================================================================

/// Skill-level dialog state stored in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogState {
    Start,
    Profile,
    Scores,
    Cost,
    Degree,
    Major,
    Home,
    SearchByName,
    SearchByLocation,
    SearchByMajor,
    RefineSearch,
    RefineNo,
    ListSchools,
    Favorites,
    MoreInformation,
}

impl DialogState {
    pub const ALL: [DialogState; 15] = [
        DialogState::Start,
        DialogState::Profile,
        DialogState::Scores,
        DialogState::Cost,
        DialogState::Degree,
        DialogState::Major,
        DialogState::Home,
        DialogState::SearchByName,
        DialogState::SearchByLocation,
        DialogState::SearchByMajor,
        DialogState::RefineSearch,
        DialogState::RefineNo,
        DialogState::ListSchools,
        DialogState::Favorites,
        DialogState::MoreInformation,
    ];

    /// States that collect a single profile field.
    pub fn is_profile_step(self) -> bool {
        matches!(
            self,
            DialogState::Scores
                | DialogState::Cost
                | DialogState::Degree
                | DialogState::Major
                | DialogState::Home
        )
    }

    /// States waiting on a one-shot search value.
    pub fn is_search_by(self) -> bool {
        matches!(
            self,
            DialogState::SearchByName | DialogState::SearchByLocation | DialogState::SearchByMajor
        )
    }

    /// States that page through a school list.
    pub fn is_list(self) -> bool {
        matches!(self, DialogState::ListSchools | DialogState::Favorites)
    }

    fn as_str(self) -> &'static str {
        match self {
            DialogState::Start => "START",
            DialogState::Profile => "PROFILE",
            DialogState::Scores => "SCORES",
            DialogState::Cost => "COST",
            DialogState::Degree => "DEGREE",
            DialogState::Major => "MAJOR",
            DialogState::Home => "HOME",
            DialogState::SearchByName => "SEARCH_BY_NAME",
            DialogState::SearchByLocation => "SEARCH_BY_LOCATION",
            DialogState::SearchByMajor => "SEARCH_BY_MAJOR",
            DialogState::RefineSearch => "REFINE_SEARCH",
            DialogState::RefineNo => "REFINE_NO",
            DialogState::ListSchools => "LIST_SCHOOLS",
            DialogState::Favorites => "FAVORITES",
            DialogState::MoreInformation => "MORE_INFORMATION",
        }
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialogState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DialogState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown dialog state: {s}"))
    }
}

/// Which one-shot search produced the currently loaded results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOrigin {
    Name,
    Location,
    Major,
    Refine,
}

// =============================================================================
// Profile
// =============================================================================

/// A profile answer: either a concrete value or an explicit "no preference".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference<T> {
    NoPreference,
    Value(T),
}

impl<T> Preference<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Preference::Value(v) => Some(v),
            Preference::NoPreference => None,
        }
    }
}

/// Which standardized test the user is answering for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    Sat,
    Act,
    /// Both tests: SAT is asked first, then ACT.
    Both,
}

impl ScoreType {
    /// Accepted score range for the test currently being asked.
    pub fn range(self) -> (u16, u16) {
        match self {
            ScoreType::Sat | ScoreType::Both => (400, 1600),
            ScoreType::Act => (1, 36),
        }
    }

    pub fn accepts(self, value: u16) -> bool {
        let (low, high) = self.range();
        (low..=high).contains(&value)
    }

    /// Name spoken for the test currently being asked.
    pub fn label(self) -> &'static str {
        match self {
            ScoreType::Sat | ScoreType::Both => "SAT",
            ScoreType::Act => "ACT",
        }
    }
}

impl FromStr for ScoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SAT" => Ok(ScoreType::Sat),
            "ACT" => Ok(ScoreType::Act),
            "BOTH" => Ok(ScoreType::Both),
            other => Err(format!("unknown score type: {other}")),
        }
    }
}

/// Highest degree the user is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    Associate,
    Bachelor,
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degree::Associate => write!(f, "associate's"),
            Degree::Bachelor => write!(f, "bachelor's"),
        }
    }
}

impl FromStr for Degree {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .collect();
        match normalized.as_str() {
            "bachelors" | "bachelor" | "four year" | "four" | "4 year" => Ok(Degree::Bachelor),
            "associates" | "associate" | "two year" | "two" | "2 year" => Ok(Degree::Associate),
            other => Err(format!("unknown degree: {other}")),
        }
    }
}

/// A field of study, identified by its program-percentage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Major {
    pub id: String,
    pub category: String,
}

/// A five digit US zip code. Leading zeros are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZipCode(String);

impl ZipCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ZipCode {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(ZipCode(s.to_string()))
        } else {
            Err(FinderError::Validation(format!(
                "zip code must be exactly 5 digits: {s}"
            )))
        }
    }
}

impl TryFrom<String> for ZipCode {
    type Error = FinderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ZipCode> for String {
    fn from(zip: ZipCode) -> Self {
        zip.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Profile fields, in the order they are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Scores,
    Cost,
    Degree,
    Major,
    Home,
}

impl ProfileField {
    pub const ORDER: [ProfileField; 5] = [
        ProfileField::Scores,
        ProfileField::Cost,
        ProfileField::Degree,
        ProfileField::Major,
        ProfileField::Home,
    ];

    /// Dialog state that collects this field.
    pub fn state(self) -> DialogState {
        match self {
            ProfileField::Scores => DialogState::Scores,
            ProfileField::Cost => DialogState::Cost,
            ProfileField::Degree => DialogState::Degree,
            ProfileField::Major => DialogState::Major,
            ProfileField::Home => DialogState::Home,
        }
    }
}

impl FromStr for ProfileField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" | "scores" | "test score" | "test scores" => Ok(ProfileField::Scores),
            "cost" | "tuition" => Ok(ProfileField::Cost),
            "degree" => Ok(ProfileField::Degree),
            "major" => Ok(ProfileField::Major),
            "home" | "zip code" | "zip" => Ok(ProfileField::Home),
            other => Err(format!("unknown profile field: {other}")),
        }
    }
}

/// The user's saved search preferences.
///
/// `None` means the field has not been asked yet; `Some(NoPreference)` means
/// the user declined to answer and must not be asked again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub sat: Option<Preference<u16>>,
    pub act: Option<Preference<u16>>,
    pub cost: Option<Preference<u32>>,
    pub degree: Option<Preference<Degree>>,
    pub major: Option<Preference<Major>>,
    pub home: Option<Preference<ZipCode>>,
    pub complete: bool,
}

impl Profile {
    pub fn is_set(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Scores => self.sat.is_some() || self.act.is_some(),
            ProfileField::Cost => self.cost.is_some(),
            ProfileField::Degree => self.degree.is_some(),
            ProfileField::Major => self.major.is_some(),
            ProfileField::Home => self.home.is_some(),
        }
    }

    /// First field still waiting for an answer, in collection order.
    pub fn next_missing(&self) -> Option<ProfileField> {
        ProfileField::ORDER
            .into_iter()
            .find(|field| !self.is_set(*field))
    }

    /// True when nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        ProfileField::ORDER.into_iter().all(|f| !self.is_set(f))
    }

    /// The score used for searching: SAT wins over ACT when both are known.
    pub fn authoritative_score(&self) -> Option<(ScoreType, u16)> {
        if let Some(Preference::Value(sat)) = self.sat {
            return Some((ScoreType::Sat, sat));
        }
        if let Some(Preference::Value(act)) = self.act {
            return Some((ScoreType::Act, act));
        }
        None
    }

    pub fn cost_ceiling(&self) -> Option<u32> {
        match self.cost {
            Some(Preference::Value(cost)) if cost > 0 => Some(cost),
            _ => None,
        }
    }

    pub fn degree_value(&self) -> Option<Degree> {
        self.degree.as_ref().and_then(|d| d.value().copied())
    }

    pub fn major_value(&self) -> Option<&Major> {
        self.major.as_ref().and_then(|m| m.value())
    }

    pub fn home_value(&self) -> Option<&ZipCode> {
        self.home.as_ref().and_then(|h| h.value())
    }

    /// Forget a single field so it is asked again.
    pub fn unset(&mut self, field: ProfileField) {
        match field {
            ProfileField::Scores => {
                self.sat = None;
                self.act = None;
            }
            ProfileField::Cost => self.cost = None,
            ProfileField::Degree => self.degree = None,
            ProfileField::Major => self.major = None,
            ProfileField::Home => self.home = None,
        }
        self.complete = false;
    }
}

// =============================================================================
// Schools
// =============================================================================

/// One school as returned by the College Scorecard API.
///
/// Field names match the dotted keys requested from the API so the same
/// representation is used on the wire and in the persisted snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolRecord {
    pub id: u64,
    #[serde(rename = "school.name", default)]
    pub name: String,
    #[serde(rename = "school.city", default)]
    pub city: Option<String>,
    #[serde(rename = "school.state", default)]
    pub state: Option<String>,
    #[serde(rename = "latest.cost.tuition.in_state", default)]
    pub tuition_in_state: Option<f64>,
    #[serde(rename = "latest.cost.tuition.out_of_state", default)]
    pub tuition_out_of_state: Option<f64>,
    #[serde(rename = "latest.admissions.admission_rate.overall", default)]
    pub admission_rate: Option<f64>,
    #[serde(rename = "latest.student.size", default)]
    pub size: Option<u64>,
    #[serde(rename = "latest.completion.completion_rate_4yr_150nt", default)]
    pub completion_rate: Option<f64>,
    #[serde(rename = "latest.earnings.10_yrs_after_entry.median", default)]
    pub median_earnings: Option<f64>,
}

impl SchoolRecord {
    /// Name suitable for speech output.
    pub fn spoken_name(&self) -> String {
        self.name.replace('&', "and")
    }
}

/// A list capped at [`RECORD_LIMIT`] entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BoundedList<T> {
    items: VecDeque<T>,
}

// Stored or round-tripped lists are capped on the way in as well.
impl<'de, T> Deserialize<'de> for BoundedList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::truncated_from)
    }
}

impl<T> Default for BoundedList<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> BoundedList<T> {
    /// Keep at most the first [`RECORD_LIMIT`] items.
    pub fn truncated_from(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().take(RECORD_LIMIT).collect(),
        }
    }

    /// Insert newest first. At capacity the oldest entry is evicted and returned.
    pub fn push_front_evicting(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() >= RECORD_LIMIT {
            self.items.pop_back()
        } else {
            None
        };
        self.items.push_front(item);
        evicted
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        self.items.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl BoundedList<SchoolRecord> {
    pub fn find_by_id(&self, id: u64) -> Option<&SchoolRecord> {
        self.items.iter().find(|school| school.id == id)
    }

    pub fn contains_id(&self, id: u64) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Case-insensitive match on the school name.
    pub fn find_by_name(&self, name: &str) -> Option<&SchoolRecord> {
        let wanted = name.trim().to_lowercase();
        self.items
            .iter()
            .find(|school| school.name.to_lowercase() == wanted)
    }
}

// =============================================================================
// Persisted attributes
// =============================================================================

/// Everything about a user that survives between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistentAttributes {
    pub profile: Profile,
    pub first_run: bool,
    pub favorites: BoundedList<SchoolRecord>,
    pub search_results: BoundedList<SchoolRecord>,
    pub search_total: u64,
    pub search_page: usize,
    pub favorites_page: usize,
    pub current_school: Option<SchoolRecord>,
    pub current_school_id: Option<u64>,
    pub current_favorite_id: Option<u64>,
}

impl Default for PersistentAttributes {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            first_run: true,
            favorites: BoundedList::default(),
            search_results: BoundedList::default(),
            search_total: 0,
            search_page: 0,
            favorites_page: 0,
            current_school: None,
            current_school_id: None,
            current_favorite_id: None,
        }
    }
}
