use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fields collected by the registration wizard, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationField {
    FirstName,
    LastName,
    BirthDate,
    Phone,
    Email,
    Password,
}

impl RegistrationField {
    /// Every field, in wizard order
    pub const ALL: [RegistrationField; 6] = [
        RegistrationField::FirstName,
        RegistrationField::LastName,
        RegistrationField::BirthDate,
        RegistrationField::Phone,
        RegistrationField::Email,
        RegistrationField::Password,
    ];

    /// Fields that count towards profile completion (password is never shown)
    pub const PROFILE: [RegistrationField; 5] = [
        RegistrationField::FirstName,
        RegistrationField::LastName,
        RegistrationField::BirthDate,
        RegistrationField::Phone,
        RegistrationField::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationField::FirstName => "first_name",
            RegistrationField::LastName => "last_name",
            RegistrationField::BirthDate => "birth_date",
            RegistrationField::Phone => "phone",
            RegistrationField::Email => "email",
            RegistrationField::Password => "password",
        }
    }
}

impl fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Draft (or normalized) account data produced by the registration wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub first_name: String,
    pub last_name: String,
    /// Rendered as DD/MM/YYYY while typing
    pub birth_date: String,
    /// Rendered as (DD) NNNNN-NNNN while typing
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl RegistrationRecord {
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::FirstName => &self.first_name,
            RegistrationField::LastName => &self.last_name,
            RegistrationField::BirthDate => &self.birth_date,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Email => &self.email,
            RegistrationField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: RegistrationField, value: String) {
        match field {
            RegistrationField::FirstName => self.first_name = value,
            RegistrationField::LastName => self.last_name = value,
            RegistrationField::BirthDate => self.birth_date = value,
            RegistrationField::Phone => self.phone = value,
            RegistrationField::Email => self.email = value,
            RegistrationField::Password => self.password = value,
        }
    }

    /// True when the field holds nothing but whitespace
    pub fn is_blank(&self, field: RegistrationField) -> bool {
        self.get(field).trim().is_empty()
    }
}

/// How the user chose to create the account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationOrigin {
    #[default]
    Manual,
    LinkedIn,
    Instagram,
}

impl RegistrationOrigin {
    /// Whether this origin imports data from an identity provider
    pub fn is_provider(&self) -> bool {
        !matches!(self, RegistrationOrigin::Manual)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RegistrationOrigin::Manual => "Manual",
            RegistrationOrigin::LinkedIn => "LinkedIn",
            RegistrationOrigin::Instagram => "Instagram",
        }
    }
}

impl fmt::Display for RegistrationOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Partial profile returned by an identity provider.
///
/// Only fields that are `Some` overwrite the wizard draft; an empty string is
/// still a value and does overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProviderProfile {
    /// Providers never return a password
    pub fn get(&self, field: RegistrationField) -> Option<&str> {
        match field {
            RegistrationField::FirstName => self.first_name.as_deref(),
            RegistrationField::LastName => self.last_name.as_deref(),
            RegistrationField::BirthDate => self.birth_date.as_deref(),
            RegistrationField::Phone => self.phone.as_deref(),
            RegistrationField::Email => self.email.as_deref(),
            RegistrationField::Password => None,
        }
    }
}

/// Which half of the registration flow is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardMode {
    #[default]
    Choice,
    Form,
}

/// Indicator categories a user can follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Agro,
    Macroeconomia,
    Microeconomia,
    Internacionais,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 4] = [
        CategoryKey::Agro,
        CategoryKey::Macroeconomia,
        CategoryKey::Microeconomia,
        CategoryKey::Internacionais,
    ];

    pub fn definition(&self) -> CategoryDefinition {
        let (label, icon) = match self {
            CategoryKey::Agro => ("Agro", "tractor"),
            CategoryKey::Macroeconomia => ("Macroeconomia", "chart-line"),
            CategoryKey::Microeconomia => ("Microeconomia", "chart-bar"),
            CategoryKey::Internacionais => ("Internacionais", "earth"),
        };
        CategoryDefinition { key: *self, label, icon }
    }

    pub fn label(&self) -> &'static str {
        self.definition().label
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub key: CategoryKey,
    pub label: &'static str,
    pub icon: &'static str,
}

/// All categories in display order
pub fn categories() -> Vec<CategoryDefinition> {
    CategoryKey::ALL.iter().map(|key| key.definition()).collect()
}

/// Whether an indicator is a rate or an absolute amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Percentage,
    Absolute,
}

/// Per-series value formatting: `prefix + value(decimals) + suffix`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFormat {
    pub prefix: String,
    pub suffix: String,
    pub decimals: usize,
}

impl Default for SeriesFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            decimals: 1,
        }
    }
}

impl SeriesFormat {
    /// Fixed-point rendering where exact ties round away from zero
    /// (`12.125` at two decimals reads `12.13`)
    pub fn format_value(&self, value: f64) -> String {
        let digits = match Decimal::from_f64_retain(value) {
            Some(exact) => {
                let rounded = exact.round_dp_with_strategy(self.decimals as u32, RoundingStrategy::MidpointAwayFromZero);
                format!("{:.*}", self.decimals, rounded)
            }
            // NaN, infinities and magnitudes beyond Decimal's range
            None => format!("{:.*}", self.decimals, value),
        };
        format!("{}{}{}", self.prefix, digits, self.suffix)
    }
}

/// A labelled sample of an indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDetailPoint {
    pub label: String,
    pub value: f64,
}

/// An economic indicator shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartItem {
    pub id: String,
    pub name: String,
    /// Date of the latest published value (DD/MM/YYYY on the wire)
    #[serde(with = "br_date")]
    pub last_updated: NaiveDate,
    /// Short series used by the card sparkline
    pub series: Vec<f64>,
    pub category: CategoryKey,
    pub value_type: ValueType,
    pub source: String,
    /// Hex color of the source tag
    pub source_color: String,
    #[serde(default)]
    pub detail_series: Option<Vec<ChartDetailPoint>>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub decimals: Option<usize>,
}

impl ChartItem {
    pub fn series_format(&self) -> SeriesFormat {
        let defaults = SeriesFormat::default();
        SeriesFormat {
            prefix: self.prefix.clone().unwrap_or(defaults.prefix),
            suffix: self.suffix.clone().unwrap_or(defaults.suffix),
            decimals: self.decimals.unwrap_or(defaults.decimals),
        }
    }

    /// Detail series, or the short series labelled P1..Pn when none is published
    pub fn detail_points(&self) -> Vec<ChartDetailPoint> {
        match &self.detail_series {
            Some(points) => points.clone(),
            None => self
                .series
                .iter()
                .enumerate()
                .map(|(index, value)| ChartDetailPoint {
                    label: format!("P{}", index + 1),
                    value: *value,
                })
                .collect(),
        }
    }

    pub fn last_updated_label(&self) -> String {
        self.last_updated.format(br_date::FORMAT).to_string()
    }
}

/// Bottom navigation tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabKey {
    #[default]
    Home,
    Settings,
    Graph,
    Logout,
}

impl TabKey {
    pub const ALL: [TabKey; 4] = [TabKey::Home, TabKey::Settings, TabKey::Graph, TabKey::Logout];

    pub fn label(&self) -> &'static str {
        match self {
            TabKey::Home => "Home",
            TabKey::Settings => "Meu espaco",
            TabKey::Graph => "Graficos",
            TabKey::Logout => "Sair",
        }
    }
}

/// Serde adapter for dates written as DD/MM/YYYY
pub mod br_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chart(detail: Option<Vec<ChartDetailPoint>>) -> ChartItem {
        ChartItem {
            id: "selic-history".to_string(),
            name: "Taxa Selic".to_string(),
            last_updated: NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
            series: vec![13.75, 13.25, 12.75],
            category: CategoryKey::Macroeconomia,
            value_type: ValueType::Percentage,
            source: "Banco Central do Brasil".to_string(),
            source_color: "#0EA5E9".to_string(),
            detail_series: detail,
            prefix: None,
            suffix: Some("%".to_string()),
            decimals: Some(2),
        }
    }

    #[test]
    fn test_series_format_defaults() {
        let format = SeriesFormat::default();
        assert_eq!(format.decimals, 1);
        assert_eq!(format.format_value(3.14159), "3.1");
    }

    #[test]
    fn test_series_format_prefix_and_suffix() {
        let format = SeriesFormat {
            prefix: "US$ ".to_string(),
            suffix: " bi".to_string(),
            decimals: 1,
        };
        assert_eq!(format.format_value(15.2), "US$ 15.2 bi");
    }

    #[test]
    fn test_detail_points_synthesizes_labels() {
        let chart = sample_chart(None);
        let points = chart.detail_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].label, "P1");
        assert_eq!(points[2].label, "P3");
        assert_eq!(points[1].value, 13.25);
    }

    #[test]
    fn test_detail_points_prefers_detail_series() {
        let chart = sample_chart(Some(vec![ChartDetailPoint { label: "Nov/24".to_string(), value: 12.75 }]));
        let points = chart.detail_points();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "Nov/24");
    }

    #[test]
    fn test_chart_series_format_uses_item_options() {
        let format = sample_chart(None).series_format();
        assert_eq!(format.format_value(10.5), "10.50%");
    }

    #[test]
    fn test_format_value_rounds_ties_up() {
        let two = SeriesFormat { decimals: 2, ..SeriesFormat::default() };
        let none = SeriesFormat { decimals: 0, ..SeriesFormat::default() };

        assert_eq!(two.format_value(12.125), "12.13");
        assert_eq!(SeriesFormat::default().format_value(0.25), "0.3");
        assert_eq!(none.format_value(2.5), "3");
        assert_eq!(SeriesFormat::default().format_value(-0.25), "-0.3");
    }

    #[test]
    fn test_format_value_keeps_binary_neighbours() {
        let two = SeriesFormat { decimals: 2, ..SeriesFormat::default() };
        // 1.005 is stored slightly below the midpoint
        assert_eq!(two.format_value(1.005), "1.00");
        assert_eq!(two.format_value(10.5), "10.50");
        assert_eq!(SeriesFormat::default().format_value(3.0), "3.0");
    }

    #[test]
    fn test_chart_item_date_wire_format() {
        let chart = sample_chart(None);
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["last_updated"], "15/10/2025");
        assert_eq!(json["category"], "macroeconomia");

        let parsed: ChartItem = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.last_updated_label(), "15/10/2025");
    }

    #[test]
    fn test_record_field_access() {
        let mut record = RegistrationRecord::default();
        assert!(record.is_blank(RegistrationField::Email));

        record.set(RegistrationField::Email, "  ".to_string());
        assert!(record.is_blank(RegistrationField::Email));

        record.set(RegistrationField::Email, "ana@example.com".to_string());
        assert_eq!(record.get(RegistrationField::Email), "ana@example.com");
        assert!(!record.is_blank(RegistrationField::Email));
    }

    #[test]
    fn test_origin_serialization() {
        assert_eq!(serde_json::to_string(&RegistrationOrigin::LinkedIn).unwrap(), "\"linkedin\"");
        assert_eq!(serde_json::to_string(&RegistrationOrigin::Manual).unwrap(), "\"manual\"");
        assert!(RegistrationOrigin::Instagram.is_provider());
        assert!(!RegistrationOrigin::Manual.is_provider());
    }

    #[test]
    fn test_provider_profile_never_returns_password() {
        let profile = ProviderProfile {
            first_name: Some("Renata".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.get(RegistrationField::FirstName), Some("Renata"));
        assert_eq!(profile.get(RegistrationField::Password), None);
        assert_eq!(profile.get(RegistrationField::Phone), None);
    }
}
