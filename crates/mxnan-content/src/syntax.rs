//! Syntax highlighting for fenced code blocks.

use mxnan_core::html::plain_code_block;
use syntect::{
    highlighting::{Theme, ThemeSet},
    html::highlighted_html_for_string,
    parsing::{SyntaxReference, SyntaxSet},
};

/// Fence labels common in MDX posts that syntect's default set names differently.
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("ts", "js"),
    ("tsx", "js"),
    ("jsx", "js"),
    ("mjs", "js"),
    ("typescript", "js"),
    ("shell", "sh"),
    ("zsh", "sh"),
    ("console", "sh"),
    ("yml", "yaml"),
    ("rs", "rust"),
];

/// Syntax highlighter backed by syntect's bundled definitions.
#[derive(Debug)]
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme: String,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new("base16-ocean.dark")
    }
}

impl SyntaxHighlighter {
    /// Create a highlighter; unknown theme names fall back to any bundled theme.
    pub fn new(theme: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme: theme.to_string(),
        }
    }

    /// Name of the theme in use.
    pub fn theme_name(&self) -> &str {
        &self.theme
    }

    /// Highlight `code` as `lang`, always returning a `<pre>` block.
    pub fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let rendered = match (self.syntax_for(lang), self.theme()) {
            (Some(syntax), Some(theme)) => {
                highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok()
            }
            _ => None,
        };

        rendered.unwrap_or_else(|| plain_code_block(code, lang))
    }

    fn syntax_for(&self, lang: Option<&str>) -> Option<&SyntaxReference> {
        let token = lang.map(normalize_language);
        token
            .as_deref()
            .and_then(|t| self.syntax_set.find_syntax_by_token(t))
            .or_else(|| self.syntax_set.find_syntax_by_extension("txt"))
    }

    fn theme(&self) -> Option<&Theme> {
        self.theme_set
            .themes
            .get(&self.theme)
            .or_else(|| self.theme_set.themes.values().next())
    }
}

/// Lowercase a fence label and map known aliases onto syntect tokens.
pub fn normalize_language(lang: &str) -> String {
    let lower = lang.trim().to_lowercase();
    LANGUAGE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, token)| (*token).to_string())
        .unwrap_or(lower)
}
