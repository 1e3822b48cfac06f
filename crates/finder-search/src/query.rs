//! Search criteria and their translation into College Scorecard query parameters.
//!
//! Building the parameter list is a pure function of the [`SearchQuery`], so
//! every filter rule can be checked without a network round trip.

use finder_core::types::{Degree, ZipCode};

/// Fields requested for every school.
pub const FIELDS: &str = "id,school.name,school.city,school.state,\
latest.cost.tuition.in_state,latest.cost.tuition.out_of_state,\
latest.admissions.admission_rate.overall,latest.student.size,\
latest.completion.completion_rate_4yr_150nt,latest.earnings.10_yrs_after_entry.median";

/// Default ordering: largest schools first.
pub const SORT_BY_SIZE: &str = "latest.student.size";

const TUITION_FIELD: &str = "latest.cost.tuition.in_state__range";
const TUITION_RECORDED: &str = "0.0..100000.0";

/// Where to look. The three modes are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationFilter {
    /// Within `distance_miles` of a zip code.
    Zip { zip: ZipCode, distance_miles: u32 },
    /// Postal abbreviation, e.g. `WA`.
    State(String),
    /// Numeric Scorecard region id.
    Region(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchoolSize {
    Small,
    Medium,
    Large,
}

impl SchoolSize {
    /// Carnegie size settings that make up the bucket.
    fn carnegie_settings(self) -> &'static str {
        match self {
            SchoolSize::Small => "1,2,6,7,8,9,10,11",
            SchoolSize::Medium => "3,12,13,14",
            SchoolSize::Large => "4,5,15,16,17",
        }
    }
}

/// Minimum admitted score. Only schools whose typical score is at or below
/// the user's score are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreFloor {
    Sat(u16),
    Act(u16),
}

/// Schools where at least `min_share` of degrees are awarded in the program.
#[derive(Debug, Clone, PartialEq)]
pub struct MajorFilter {
    pub id: String,
    pub min_share: f32,
}

impl MajorFilter {
    fn field(&self) -> String {
        format!("latest.academics.program_percentage.{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SortOrder {
    /// Largest student body first.
    Size,
    /// Highest share of degrees in the filtered major first.
    MajorShare,
}

/// Accumulated search criteria. Absent filters are omitted from the query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub location: Option<LocationFilter>,
    pub ownership: Option<Ownership>,
    pub size: Option<SchoolSize>,
    pub degree: Option<Degree>,
    pub max_cost: Option<u32>,
    pub score: Option<ScoreFloor>,
    pub major: Option<MajorFilter>,
    /// Restrict to schools that report in-state tuition when no ceiling is set.
    pub require_tuition: bool,
    pub sort: SortOrder,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            name: None,
            location: None,
            ownership: None,
            size: None,
            degree: None,
            max_cost: None,
            score: None,
            major: None,
            require_tuition: false,
            sort: SortOrder::Size,
        }
    }
}

impl SearchQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn by_location(location: LocationFilter) -> Self {
        Self {
            location: Some(location),
            require_tuition: true,
            ..Default::default()
        }
    }

    /// One-shot major search: any school offering the program, ranked by share.
    pub fn by_major(id: impl Into<String>) -> Self {
        Self {
            major: Some(MajorFilter {
                id: id.into(),
                min_share: 0.01,
            }),
            require_tuition: true,
            sort: SortOrder::MajorShare,
            ..Default::default()
        }
    }

    /// Query parameters excluding the API key and page size.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = Vec::new();
        let mut push = |key: &str, value: String| params.push((key.to_string(), value));

        if let Some(name) = &self.name {
            push("school.name", name.clone());
        }

        match &self.location {
            Some(LocationFilter::Zip {
                zip,
                distance_miles,
            }) => {
                push("_zip", zip.to_string());
                push("_distance", format!("{distance_miles}mi"));
            }
            Some(LocationFilter::State(abbr)) => push("school.state", abbr.to_ascii_uppercase()),
            Some(LocationFilter::Region(id)) => push("school.region_id", id.clone()),
            None => {}
        }

        match self.ownership {
            Some(Ownership::Public) => push("school.ownership", "1".to_string()),
            Some(Ownership::Private) => push("school.ownership__range", "2..4".to_string()),
            None => {}
        }

        if let Some(size) = self.size {
            push(
                "school.carnegie_size_setting",
                size.carnegie_settings().to_string(),
            );
        }

        match self.degree {
            Some(Degree::Bachelor) => push("school.degrees_awarded.highest", "3".to_string()),
            Some(Degree::Associate) => push("school.degrees_awarded.highest", "2".to_string()),
            None => {}
        }

        match self.max_cost {
            Some(cost) if cost > 0 => push(TUITION_FIELD, format!("0..{cost}")),
            _ if self.require_tuition => push(TUITION_FIELD, TUITION_RECORDED.to_string()),
            _ => {}
        }

        match self.score {
            Some(ScoreFloor::Sat(sat)) => push(
                "latest.admissions.sat_scores.average.overall__range",
                format!("400..{sat}"),
            ),
            Some(ScoreFloor::Act(act)) => push(
                "latest.admissions.act_scores.25th_percentile.cumulative__range",
                format!("1..{act}"),
            ),
            None => {}
        }

        if let Some(major) = &self.major {
            push(
                &format!("{}__range", major.field()),
                format!("{}..1.0", major.min_share),
            );
        }

        push("fields", FIELDS.to_string());
        push("_sort", format!("{}:desc", self.sort_field()));
        params
    }

    fn sort_field(&self) -> String {
        match (&self.sort, &self.major) {
            (SortOrder::MajorShare, Some(major)) => major.field(),
            _ => SORT_BY_SIZE.to_string(),
        }
    }
}
