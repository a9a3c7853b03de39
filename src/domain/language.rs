use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub identifier: &'static str,
    pub display_label: &'static str,
}

pub const KURDISH_BADINI: &str = "Kurdish (Badini)";

pub static LANGUAGES: [LanguageOption; 3] = [
    LanguageOption {
        identifier: "Arabic",
        display_label: "عەرەبی",
    },
    LanguageOption {
        identifier: KURDISH_BADINI,
        display_label: "کوردی (بادینی)",
    },
    LanguageOption {
        identifier: "English",
        display_label: "ئینگلیزی",
    },
];

impl LanguageOption {
    pub fn find(identifier: &str) -> Option<&'static LanguageOption> {
        LANGUAGES.iter().find(|lang| lang.identifier == identifier)
    }

    pub fn is_supported(identifier: &str) -> bool {
        Self::find(identifier).is_some()
    }

    pub fn default_source() -> &'static LanguageOption {
        &LANGUAGES[0]
    }

    pub fn default_target() -> &'static LanguageOption {
        &LANGUAGES[1]
    }
}
