use serde::{Deserialize, Serialize};

/// JSON object handed to a [`crate::domain::ports::Submitter`].
pub type FormPayload = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: u32,
    pub name: String,
    pub logo: String,
    pub location: String,
    pub rating: f32,
    pub reviews: u32,
    pub services: Vec<String>,
    pub tier: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installer {
    pub id: u32,
    pub name: String,
    pub logo: String,
    pub region: String,
    pub cities: Vec<String>,
    pub rating: f32,
    pub reviews: u32,
    pub experience: String,
    pub services: Vec<String>,
    pub certifications: Vec<String>,
    pub tier: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub completed_projects: u32,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingPartner {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub features: Vec<String>,
    pub rating: f32,
    pub contact: String,
    pub email: String,
    pub featured: bool,
}

/// Anything that can sit in a filterable card grid.
pub trait Listing {
    fn id(&self) -> u32;
    fn name(&self) -> &str;
    /// Service tags (or feature bullets) searched alongside name and description.
    fn tags(&self) -> &[String];
    fn description(&self) -> &str;
    fn rating(&self) -> f32;
    /// Field value behind a facet key, `None` when the listing has no such facet.
    fn facet(&self, key: &str) -> Option<&str>;
}

impl Listing for Provider {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.services
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn facet(&self, key: &str) -> Option<&str> {
        match key {
            "location" | "state" => Some(&self.state),
            "tier" => Some(&self.tier),
            _ => None,
        }
    }
}

impl Listing for Installer {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.services
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn facet(&self, key: &str) -> Option<&str> {
        match key {
            "region" | "state" => Some(&self.state),
            "tier" => Some(&self.tier),
            _ => None,
        }
    }
}

impl Listing for FinancingPartner {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.features
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn facet(&self, key: &str) -> Option<&str> {
        match key {
            "type" => Some(&self.kind),
            "featured" => Some(if self.featured { "featured" } else { "standard" }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub price: u32,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub popular: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    Tel,
    Zip,
    Select,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Email,
    Phone,
    Zip,
    Website,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub pattern: Option<Pattern>,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            pattern: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

/// Metadata of one file picked in an upload control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: &str, mime: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            mime: mime.to_string(),
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Where a notice is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Message block inserted at the top of the form.
    Inline,
    /// Fixed, auto-dismissing toast.
    Toast,
    /// Blocking browser alert.
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub placement: Placement,
    pub text: String,
}

impl Notice {
    pub fn success(placement: Placement, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            placement,
            text: text.into(),
        }
    }

    pub fn error(placement: Placement, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            placement,
            text: text.into(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "fa-check-circle",
            NoticeKind::Error => "fa-exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Opaque acknowledgement from the submission backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown or missing values fall back to light.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle: the theme you would switch to.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }
}
