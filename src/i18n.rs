//! The handful of localized strings the state engine itself needs.
//!
//! Full UI translation tables belong to the rendering shell; the engine only
//! carries what its own behavior depends on — the per-language phrasing
//! injected into the advice prompt and the assistant's intro line.

use crate::settings::Language;

/// Language/register instruction spliced into the advice prompt.
pub fn advice_style(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "باللهجة المصرية أو العربية المبسطة وبأسلوب عصري",
        Language::En => "in friendly, modern English",
        Language::Fr => "en français amical et moderne",
        Language::De => "in freundlichem, modernem Deutsch",
    }
}

/// The assistant's greeting, shown before any query and re-shown whenever
/// the language changes.
pub fn advice_intro(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "أهلاً! أنا جيمي، خبير البيئة بتاعك. اسألني عن أي حاجة في إعادة التدوير!",
        Language::En => "Hi! I'm Jimmy, your eco mentor. Ask me anything about recycling!",
        Language::Fr => "Salut ! Je suis Jimmy, ton mentor écolo. Pose-moi tes questions sur le recyclage !",
        Language::De => "Hallo! Ich bin Jimmy, dein Öko-Mentor. Frag mich alles übers Recycling!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_is_covered() {
        for lang in Language::ALL {
            assert!(!advice_style(lang).is_empty());
            assert!(!advice_intro(lang).is_empty());
        }
    }
}
