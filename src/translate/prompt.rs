use crate::languages::TargetLanguage;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Build the user instruction for translating `text` into `target`.
///
/// `text` is embedded as given; callers pass it already trimmed.
pub fn build_translation_prompt(text: &str, target: TargetLanguage) -> String {
    format!(
        "Translate the following English text into {lang}.\n\
         Return only the translation text with no additional commentary, no labels, and no quotes.\n\
         Preserve meaning, tone, and natural phrasing. Keep formatting and line breaks where reasonable.\n\n\
         Text:\n{text}",
        lang = target.canonical_name(),
        text = text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_matches_template() {
        let prompt = build_translation_prompt("Hello, how are you?", TargetLanguage::Hindi);
        assert_eq!(
            prompt,
            "Translate the following English text into Hindi.\n\
             Return only the translation text with no additional commentary, no labels, and no quotes.\n\
             Preserve meaning, tone, and natural phrasing. Keep formatting and line breaks where reasonable.\n\
             \n\
             Text:\nHello, how are you?"
        );
    }

    #[test]
    fn keeps_inner_line_breaks() {
        let prompt = build_translation_prompt("line one\n\nline two", TargetLanguage::Tamil);
        assert!(prompt.ends_with("Text:\nline one\n\nline two"));
    }

    #[test]
    fn uses_canonical_name_not_label() {
        for lang in TargetLanguage::ALL {
            let prompt = build_translation_prompt("x", lang);
            let expected = format!("into {}.", lang.canonical_name());
            assert!(prompt.contains(&expected));
            assert!(!prompt.contains(lang.display_label()));
        }
    }
}
