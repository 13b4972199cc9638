//! Static language table
//!
//! Maps English display names to ISO 639-1 codes. The detector reports
//! languages by display name, so lookups here are exact and case-sensitive.

/// A language with a two-letter code and English display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Every language the service knows a code for
pub static LANGUAGES: &[Language] = &[
    Language { code: "af", name: "Afrikaans" },
    Language { code: "sq", name: "Albanian" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "hy", name: "Armenian" },
    Language { code: "bn", name: "Bengali" },
    Language { code: "bs", name: "Bosnian" },
    Language { code: "ca", name: "Catalan" },
    Language { code: "hr", name: "Croatian" },
    Language { code: "cs", name: "Czech" },
    Language { code: "da", name: "Danish" },
    Language { code: "nl", name: "Dutch" },
    Language { code: "en", name: "English" },
    Language { code: "eo", name: "Esperanto" },
    Language { code: "et", name: "Estonian" },
    Language { code: "tl", name: "Filipino" },
    Language { code: "fi", name: "Finnish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "el", name: "Greek" },
    Language { code: "gu", name: "Gujarati" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "hu", name: "Hungarian" },
    Language { code: "is", name: "Icelandic" },
    Language { code: "id", name: "Indonesian" },
    Language { code: "it", name: "Italian" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "jw", name: "Javanese" },
    Language { code: "km", name: "Khmer" },
    Language { code: "ko", name: "Korean" },
    Language { code: "la", name: "Latin" },
    Language { code: "lv", name: "Latvian" },
    Language { code: "lt", name: "Lithuanian" },
    Language { code: "mk", name: "Macedonian" },
    Language { code: "ml", name: "Malayalam" },
    Language { code: "mr", name: "Marathi" },
    Language { code: "my", name: "Myanmar (Burmese)" },
    Language { code: "ne", name: "Nepali" },
    Language { code: "no", name: "Norwegian" },
    Language { code: "pl", name: "Polish" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "pa", name: "Punjabi" },
    Language { code: "ro", name: "Romanian" },
    Language { code: "ru", name: "Russian" },
    Language { code: "sr", name: "Serbian" },
    Language { code: "si", name: "Sinhala" },
    Language { code: "sk", name: "Slovak" },
    Language { code: "sl", name: "Slovenian" },
    Language { code: "es", name: "Spanish" },
    Language { code: "su", name: "Sundanese" },
    Language { code: "sw", name: "Swahili" },
    Language { code: "sv", name: "Swedish" },
    Language { code: "ta", name: "Tamil" },
    Language { code: "te", name: "Telugu" },
    Language { code: "th", name: "Thai" },
    Language { code: "tr", name: "Turkish" },
    Language { code: "uk", name: "Ukrainian" },
    Language { code: "ur", name: "Urdu" },
    Language { code: "vi", name: "Vietnamese" },
    Language { code: "cy", name: "Welsh" },
    Language { code: "xh", name: "Xhosa" },
    Language { code: "yi", name: "Yiddish" },
    Language { code: "zu", name: "Zulu" },
];

/// All known languages, in table order
pub fn all() -> &'static [Language] {
    LANGUAGES
}

/// Get the two-letter code for a display name
pub fn code_for_name(name: &str) -> Option<&'static str> {
    LANGUAGES.iter().find(|lang| lang.name == name).map(|lang| lang.code)
}

/// Get the display name for a two-letter code
pub fn name_for_code(code: &str) -> Option<&'static str> {
    LANGUAGES.iter().find(|lang| lang.code == code).map(|lang| lang.name)
}
