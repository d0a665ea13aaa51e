/// Generates a closed vocabulary enum with its display label and additive
/// weight. Lookups by label ignore case and surrounding whitespace; labels
/// outside the vocabulary resolve to `None`.
macro_rules! weighted_vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($label:literal, $weight:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            pub fn weight(&self) -> u32 {
                match self {
                    $(Self::$variant => $weight),+
                }
            }

            pub fn from_label(label: &str) -> Option<Self> {
                let label = label.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(label))
            }
        }
    };
}

weighted_vocabulary!(
    /// Reaction symptoms that carry weight in the risk score.
    ReactionSymptom {
        BreathingIssues => ("Breathing issues", 6),
        Swelling => ("Swelling", 5),
        Hives => ("Hives", 4),
        SkinRash => ("Skin rash", 3),
        Nausea => ("Nausea", 2),
        Vomiting => ("Vomiting", 2),
        Diarrhea => ("Diarrhea", 2),
    }
);

weighted_vocabulary!(
    /// Worst reaction previously experienced with this food.
    PreviousReaction {
        NoReaction => ("None", 0),
        Mild => ("Mild", 2),
        Moderate => ("Moderate", 4),
        Severe => ("Severe", 6),
    }
);

weighted_vocabulary!(
    /// Food categories with elevated allergy prevalence.
    HighRiskFood {
        Nuts => ("Nuts", 5),
        Peanuts => ("Peanuts", 5),
        Shellfish => ("Shellfish", 5),
        Seafood => ("Seafood", 4),
        Dairy => ("Dairy", 3),
        Eggs => ("Eggs", 3),
        Gluten => ("Gluten", 2),
    }
);

weighted_vocabulary!(
    /// Comorbidities that raise the likelihood or severity of reactions.
    MedicalCondition {
        Asthma => ("Asthma", 3),
        Eczema => ("Eczema", 2),
    }
);

impl MedicalCondition {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Asthma => "Asthma increases allergy severity",
            Self::Eczema => "Eczema associated with allergies",
        }
    }
}

pub const FAMILY_HISTORY_BONUS: u32 = 3;

/// Severity self-ratings at or above this are called out as a reason.
pub const HIGH_SEVERITY_THRESHOLD: i32 = 7;

pub const MAX_SEVERITY_SCORE: i32 = 10;

pub const HIGH_RISK_THRESHOLD: u32 = 15;

pub const MEDIUM_RISK_THRESHOLD: u32 = 8;

/// Score at which confidence saturates at 1.0.
pub const CONFIDENCE_SATURATION_SCORE: f64 = 20.0;
