use serde::{Deserialize, Serialize};

/// Federal filing status for an individual return.
///
/// Serialized in camelCase; the short codes used by older saved returns
/// ("single", "mfj", "mfs", "hoh", "qw") are accepted as aliases on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    #[default]
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "marriedFilingJointly", alias = "mfj")]
    MarriedFilingJointly,
    #[serde(rename = "marriedFilingSeparately", alias = "mfs")]
    MarriedFilingSeparately,
    #[serde(rename = "headOfHousehold", alias = "hoh")]
    HeadOfHousehold,
    #[serde(rename = "qualifyingSurvivingSpouse", alias = "qw", alias = "qss")]
    QualifyingSurvivingSpouse,
}

impl FilingStatus {
    /// All statuses, in the order they appear on the form.
    pub const ALL: [FilingStatus; 5] = [
        Self::Single,
        Self::MarriedFilingJointly,
        Self::MarriedFilingSeparately,
        Self::HeadOfHousehold,
        Self::QualifyingSurvivingSpouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::MarriedFilingJointly => "MFJ",
            Self::MarriedFilingSeparately => "MFS",
            Self::HeadOfHousehold => "HOH",
            Self::QualifyingSurvivingSpouse => "QSS",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "S" => Some(Self::Single),
            "MFJ" => Some(Self::MarriedFilingJointly),
            "MFS" => Some(Self::MarriedFilingSeparately),
            "HOH" => Some(Self::HeadOfHousehold),
            "QSS" => Some(Self::QualifyingSurvivingSpouse),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedFilingJointly => "Married Filing Jointly",
            Self::MarriedFilingSeparately => "Married Filing Separately",
            Self::HeadOfHousehold => "Head of Household",
            Self::QualifyingSurvivingSpouse => "Qualifying Surviving Spouse",
        }
    }
}

impl std::fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
