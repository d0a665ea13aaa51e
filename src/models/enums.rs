use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Parsing is case-insensitive and trims surrounding whitespace; the
/// serialized form is always the canonical lowercase string.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = DatabaseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(FlagReason {
    Allergen => "allergen",
    Trigger => "trigger",
    Intolerance => "intolerance",
    Dislike => "dislike",
});

str_enum!(FlagSeverity {
    Low => "low",
    Medium => "medium",
    High => "high",
});

str_enum!(SeverityLevel {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(DayMark {
    Food => "food",
    Symptom => "symptom",
    Both => "both",
});

str_enum!(RecommendationPriority {
    High => "high",
    Medium => "medium",
});

impl SeverityLevel {
    /// Position of the level on the 0-10 severity scale.
    pub fn numeric(&self) -> f64 {
        match self {
            Self::Mild => 3.0,
            Self::Moderate => 5.0,
            Self::Severe => 8.0,
        }
    }
}
