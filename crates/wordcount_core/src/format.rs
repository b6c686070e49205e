use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::Count;

/// Shown while no count is available.
pub const UNAVAILABLE: &str = "...";

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z]+)\}").expect("placeholder regex"));

/// A `${name}` token recognized in status templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    WordsBody,
    WordsHeaders,
    WordsCaptions,
    Words,
    Headers,
    Floats,
    MathInline,
    MathDisplayed,
    Math,
}

impl Placeholder {
    pub const ALL: [Placeholder; 9] = [
        Placeholder::WordsBody,
        Placeholder::WordsHeaders,
        Placeholder::WordsCaptions,
        Placeholder::Words,
        Placeholder::Headers,
        Placeholder::Floats,
        Placeholder::MathInline,
        Placeholder::MathDisplayed,
        Placeholder::Math,
    ];

    /// Name between `${` and `}`.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::WordsBody => "wordsBody",
            Placeholder::WordsHeaders => "wordsHeaders",
            Placeholder::WordsCaptions => "wordsCaptions",
            Placeholder::Words => "words",
            Placeholder::Headers => "headers",
            Placeholder::Floats => "floats",
            Placeholder::MathInline => "mathInline",
            Placeholder::MathDisplayed => "mathDisplayed",
            Placeholder::Math => "math",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn value(self, count: &Count) -> u64 {
        match self {
            Placeholder::WordsBody => count.words.body,
            Placeholder::WordsHeaders => count.words.headers,
            Placeholder::WordsCaptions => count.words.captions,
            Placeholder::Words => count.total_words(),
            Placeholder::Headers => count.instances.headers,
            Placeholder::Floats => count.instances.floats,
            Placeholder::MathInline => count.instances.math.inline,
            Placeholder::MathDisplayed => count.instances.math.displayed,
            Placeholder::Math => count.total_math(),
        }
    }
}

/// Render `count` through `template`.
///
/// Tokens are matched whole in a single pass, so substituted numbers are never
/// scanned again. Unknown `${...}` tokens are kept verbatim. Without a count the
/// template is ignored and [`UNAVAILABLE`] is returned.
pub fn format(count: Option<&Count>, template: &str) -> String {
    let Some(count) = count else {
        return UNAVAILABLE.to_string();
    };

    TOKEN
        .replace_all(template, |caps: &Captures<'_>| {
            match Placeholder::from_name(&caps[1]) {
                Some(placeholder) => placeholder.value(count).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
