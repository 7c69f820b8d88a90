use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target languages offered by the translator, in selector order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[default]
    Hindi,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Bengali,
    Marathi,
    Gujarati,
    Punjabi,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 9] = [
        TargetLanguage::Hindi,
        TargetLanguage::Tamil,
        TargetLanguage::Telugu,
        TargetLanguage::Kannada,
        TargetLanguage::Malayalam,
        TargetLanguage::Bengali,
        TargetLanguage::Marathi,
        TargetLanguage::Gujarati,
        TargetLanguage::Punjabi,
    ];

    /// English name sent to the model
    pub fn canonical_name(&self) -> &'static str {
        match self {
            TargetLanguage::Hindi => "Hindi",
            TargetLanguage::Tamil => "Tamil",
            TargetLanguage::Telugu => "Telugu",
            TargetLanguage::Kannada => "Kannada",
            TargetLanguage::Malayalam => "Malayalam",
            TargetLanguage::Bengali => "Bengali",
            TargetLanguage::Marathi => "Marathi",
            TargetLanguage::Gujarati => "Gujarati",
            TargetLanguage::Punjabi => "Punjabi",
        }
    }

    /// Label shown in the selector, with the language's native script
    pub fn display_label(&self) -> &'static str {
        match self {
            TargetLanguage::Hindi => "Hindi (हिंदी)",
            TargetLanguage::Tamil => "Tamil (தமிழ்)",
            TargetLanguage::Telugu => "Telugu (తెలుగు)",
            TargetLanguage::Kannada => "Kannada (ಕನ್ನಡ)",
            TargetLanguage::Malayalam => "Malayalam (മലയാളം)",
            TargetLanguage::Bengali => "Bengali (বাংলা)",
            TargetLanguage::Marathi => "Marathi (मराठी)",
            TargetLanguage::Gujarati => "Gujarati (ગુજરાતી)",
            TargetLanguage::Punjabi => "Punjabi (ਪੰਜਾਬੀ)",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported target language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for TargetLanguage {
    type Err = UnknownLanguage;

    /// Accepts a canonical name (any case) or an exact display label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TargetLanguage::ALL
            .into_iter()
            .find(|lang| {
                lang.canonical_name().eq_ignore_ascii_case(wanted) || lang.display_label() == wanted
            })
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Entry of the language listing returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageOption {
    pub name: String,
    pub label: String,
}

impl From<TargetLanguage> for LanguageOption {
    fn from(lang: TargetLanguage) -> Self {
        Self {
            name: lang.canonical_name().to_string(),
            label: lang.display_label().to_string(),
        }
    }
}

pub fn language_options() -> Vec<LanguageOption> {
    TargetLanguage::ALL.into_iter().map(LanguageOption::from).collect()
}
