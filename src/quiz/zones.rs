use crate::quiz::AnswerTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneRecord {
    pub tag: AnswerTag,
    pub label: &'static str,
    pub description: &'static str,
    pub states: &'static [&'static str],
    /// Relative to the configured maps directory.
    pub map: &'static str,
}

pub const CARD_FILE_NAME: &str = "hardiness-zone.txt";

static ZONES: [ZoneRecord; 4] = [
    ZoneRecord {
        tag: AnswerTag::Cold,
        label: "Zones 2–4",
        description:
            "You thrive in the chill! Think northern forests, cozy cabins, and firepit culture.",
        states: &["Alaska", "Montana", "Minnesota", "Upper Michigan"],
        map: "maps/zone_cold.png",
    },
    ZoneRecord {
        tag: AnswerTag::Mild,
        label: "Zones 5–7",
        description: "Balanced and adaptable—perfect for seasonal changes and hybrid vibes.",
        states: &["Vermont", "New York", "Colorado", "Oregon"],
        map: "maps/zone_mild.png",
    },
    ZoneRecord {
        tag: AnswerTag::Warm,
        label: "Zones 8–9",
        description:
            "Warm days and dry spells suit you. You're a sun-seeker with a taste for adventure.",
        states: &["Texas", "California", "Nevada", "Arizona"],
        map: "maps/zone_warm.png",
    },
    ZoneRecord {
        tag: AnswerTag::Hot,
        label: "Zone 10+",
        description: "You crave heat and humidity. Tropical, spicy, and always glowing.",
        states: &["Florida", "Louisiana", "Southern California", "Hawaii"],
        map: "maps/zone_hot.png",
    },
];

pub fn lookup(tag: AnswerTag) -> &'static ZoneRecord {
    match tag {
        AnswerTag::Cold => &ZONES[0],
        AnswerTag::Mild => &ZONES[1],
        AnswerTag::Warm => &ZONES[2],
        AnswerTag::Hot => &ZONES[3],
    }
}

impl ZoneRecord {
    pub fn heading(&self) -> String {
        format!("Your Human Hardiness Zone: {} 🌍", self.label)
    }

    /// Plain text result card, also used for the downloadable file.
    pub fn card(&self) -> String {
        self.render_card(|text| text.to_string())
    }

    /// The result card with the heading and the states caption passed through
    /// `emphasis`, e.g. to wrap them in markup.
    pub fn render_card(&self, emphasis: impl Fn(&str) -> String) -> String {
        format!(
            "{}\n\n{}\n\n{} {}",
            emphasis(&self.heading()),
            self.description,
            emphasis("Recommended States:"),
            self.states.join(", ")
        )
    }

    pub fn share_text(&self) -> String {
        // every record lists at least one state
        let first_state = self.states.first().copied().unwrap_or_default();
        format!(
            "I’m a {} human 🌱 - perfect for life in {}!",
            self.label, first_state
        )
    }
}
