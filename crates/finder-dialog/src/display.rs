//! Screen templates for display-capable devices, and the number formatting
//! shared between speech and cards.

use serde::{Deserialize, Serialize};

use finder_core::config::DisplayConfig;
use finder_core::types::{BoundedList, SchoolRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateKind {
    BodyTemplate1,
    BodyTemplate6,
    ListTemplate1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextKind {
    PlainText,
    RichText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextField {
    #[serde(rename = "type")]
    pub kind: TextKind,
    pub text: String,
}

impl TextField {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::PlainText,
            text: text.into(),
        }
    }

    pub fn rich(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::RichText,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub primary_text: Option<TextField>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub secondary_text: Option<TextField>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tertiary_text: Option<TextField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub sources: Vec<ImageSource>,
}

impl Image {
    fn from_url(url: &str) -> Self {
        Self {
            sources: vec![ImageSource {
                url: url.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub token: String,
    pub text_content: TextContent,
}

/// A `Display.RenderTemplate` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(rename = "type")]
    pub kind: TemplateKind,
    pub token: String,
    pub back_button: String,
    pub background_image: Image,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text_content: Option<TextContent>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub list_items: Vec<ListItem>,
}

impl Template {
    fn new(kind: TemplateKind, token: &str, image: &str) -> Self {
        Self {
            kind,
            token: token.to_string(),
            back_button: "HIDDEN".to_string(),
            background_image: Image::from_url(image),
            title: None,
            text_content: None,
            list_items: Vec::new(),
        }
    }
}

// =============================================================================
// Builders
// =============================================================================

/// Full-screen splash with the skill name.
pub fn main_template(images: &DisplayConfig, label: &str) -> Template {
    let mut template = Template::new(TemplateKind::BodyTemplate6, "MAIN", &images.main_image);
    template.text_content = Some(TextContent {
        primary_text: Some(TextField::rich(format!(
            "<font size='7'>{label}</font>"
        ))),
        ..Default::default()
    });
    template
}

/// Detail card for one school. `card_text` is the rendered figure block.
pub fn school_template(images: &DisplayConfig, school: &SchoolRecord, card_text: &str) -> Template {
    let mut template = Template::new(TemplateKind::BodyTemplate1, "SCHOOL", &images.grad_image);
    let mut primary = format!(
        "<b><font size=\"6\">{}</font></b>",
        escape_rich(&school.name)
    );
    if let Some(place) = place_line(school) {
        primary.push_str(&format!("<br/><b>{}</b>", escape_rich(&place)));
    }
    if let Some(size) = school.size {
        primary.push_str(&format!(
            "<br/>{} undergraduate students",
            format_thousands(size)
        ));
    }
    template.text_content = Some(TextContent {
        primary_text: Some(TextField::rich(primary)),
        secondary_text: Some(TextField::rich(card_text)),
        tertiary_text: None,
    });
    template
}

/// Numbered list of schools. Item tokens are list indexes.
pub fn list_template(
    images: &DisplayConfig,
    title: &str,
    schools: &BoundedList<SchoolRecord>,
) -> Template {
    let mut template = Template::new(TemplateKind::ListTemplate1, "LIST", &images.list_image);
    template.title = Some(title.to_string());
    template.list_items = schools
        .iter()
        .enumerate()
        .map(|(index, school)| ListItem {
            token: index.to_string(),
            text_content: TextContent {
                primary_text: Some(TextField::rich(format!(
                    "<b><font size='5'>{}</font></b>",
                    escape_rich(&school.name)
                ))),
                secondary_text: place_line(school).map(TextField::plain),
                tertiary_text: Some(TextField::plain(
                    school
                        .tuition_in_state
                        .map(format_currency)
                        .unwrap_or_else(|| "-".to_string()),
                )),
            },
        })
        .collect();
    template
}

/// Profile summary card.
pub fn profile_template(images: &DisplayConfig, title: &str, body: &str) -> Template {
    let mut template = Template::new(TemplateKind::BodyTemplate1, "PROFILE", &images.main_image);
    template.title = Some(title.to_string());
    template.text_content = Some(TextContent {
        primary_text: Some(TextField::rich(body)),
        ..Default::default()
    });
    template
}

fn place_line(school: &SchoolRecord) -> Option<String> {
    match (school.city.as_deref(), school.state.as_deref()) {
        (Some(city), Some(state)) => Some(format!("{city}, {state}")),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}

fn escape_rich(text: &str) -> String {
    text.replace('&', "&amp;")
}

// =============================================================================
// Formatting
// =============================================================================

/// Group digits in threes: `32244` becomes `32,244`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole dollars with separators, e.g. `$11,745`.
pub fn format_currency(amount: f64) -> String {
    format!("${}", format_thousands(amount.max(0.0).round() as u64))
}

/// A 0..1 rate as a percentage with two decimals, e.g. `83.99%`.
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Card figures for one school, with `not_available` standing in for gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolFigures {
    pub tuition_in_state: String,
    pub tuition_out_of_state: String,
    pub graduation_rate: String,
    pub salary: String,
}

impl SchoolFigures {
    pub fn new(school: &SchoolRecord, not_available: &str) -> Self {
        let or_na = |value: Option<String>| value.unwrap_or_else(|| not_available.to_string());
        Self {
            tuition_in_state: or_na(school.tuition_in_state.map(format_currency)),
            tuition_out_of_state: or_na(school.tuition_out_of_state.map(format_currency)),
            graduation_rate: or_na(school.completion_rate.map(format_percent)),
            salary: or_na(school.median_earnings.map(format_currency)),
        }
    }
}
