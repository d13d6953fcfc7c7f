pub mod climate;
pub mod scoring;
pub mod session;
pub mod zones;

use std::fmt;

/// One of the four hardiness categories.
///
/// Every quiz option carries one of these, and both the scorer and the climate
/// classifier produce one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerTag {
    Cold,
    Mild,
    Warm,
    Hot,
}

impl AnswerTag {
    pub const ALL: [AnswerTag; 4] = [
        AnswerTag::Cold,
        AnswerTag::Mild,
        AnswerTag::Warm,
        AnswerTag::Hot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerTag::Cold => "cold",
            AnswerTag::Mild => "mild",
            AnswerTag::Warm => "warm",
            AnswerTag::Hot => "hot",
        }
    }
}

impl fmt::Display for AnswerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub options: &'static [AnswerOption],
}

impl Question {
    pub fn option_by_label(&self, label: &str) -> Option<&AnswerOption> {
        let label = label.trim();
        self.options.iter().find(|o| o.label == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: &'static str,
    pub tag: AnswerTag,
}

const fn option(label: &'static str, tag: AnswerTag) -> AnswerOption {
    AnswerOption { label, tag }
}

// Labels double as keyboard button texts, so they must be unique within a question.
pub const QUESTIONS: &[Question] = &[
    Question {
        text: "Your Ideal Morning Vibe:",
        options: &[
            option("Crisp air, hot coffee, hoodie weather.", AnswerTag::Cold),
            option("Misty, rainy window, lo-fi jazz and incense.", AnswerTag::Mild),
            option(
                "Sunrise sweat session, cold plunge, desert stillness.",
                AnswerTag::Warm,
            ),
            option("Ocean breeze, fresh fruit, barefoot walk.", AnswerTag::Hot),
            option(
                "Long sleep, brunch on a patio, sun warming your skin.",
                AnswerTag::Mild,
            ),
        ],
    },
    Question {
        text: "Ideal Year-Round Temperature Range?",
        options: &[
            option("30–60°F", AnswerTag::Cold),
            option("45–75°F", AnswerTag::Mild),
            option("60–90°F", AnswerTag::Warm),
            option("70–100°F", AnswerTag::Hot),
        ],
    },
    Question {
        text: "Humidity Preference?",
        options: &[
            option("Dry as a bone", AnswerTag::Cold),
            option("Light humidity is fine", AnswerTag::Mild),
            option("Moist and misty", AnswerTag::Warm),
            option("Thick tropical soup", AnswerTag::Hot),
        ],
    },
    Question {
        text: "How Do You Handle Cold Snaps?",
        options: &[
            option("I love them", AnswerTag::Cold),
            option("I cope fine", AnswerTag::Mild),
            option("I get cranky", AnswerTag::Warm),
            option("Nope", AnswerTag::Hot),
        ],
    },
    Question {
        text: "How Do You Handle Heatwaves?",
        options: &[
            option("I’m melting", AnswerTag::Cold),
            option("I’ll survive", AnswerTag::Mild),
            option("I adapt", AnswerTag::Warm),
            option("Love them", AnswerTag::Hot),
        ],
    },
];
