use crate::domain::language::KURDISH_BADINI;

pub const TEXT_DELIMITER: &str = "---";

pub struct PromptEngine;

impl PromptEngine {
    /// Build the single-turn instruction sent for one translation.
    ///
    /// The output is fully determined by its inputs, so the same text and
    /// language pair always produce byte-identical prompts.
    pub fn build_translation_prompt(text: &str, source_lang: &str, target_lang: &str) -> String {
        format!(
            r#"You are a highly specialized translation engine. Your sole function is to translate the following text.
- Translate from: {source_lang}
- Translate to: {target_lang}

Important instructions:
1. When translating to or from '{dialect}', ensure the translation uses the Badini dialect of Kurdish.
2. Your output must contain ONLY the translated text.
3. Do not add any extra words, explanations, or quotation marks around the translation.

Original text:
{delim}
{text}
{delim}
"#,
            source_lang = source_lang,
            target_lang = target_lang,
            dialect = KURDISH_BADINI,
            delim = TEXT_DELIMITER,
            text = text,
        )
    }
}
