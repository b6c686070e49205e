use std::fmt;

/// Word counts split by where texcount found them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordCounts {
    pub body: u64,
    pub headers: u64,
    pub captions: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MathCounts {
    pub inline: u64,
    pub displayed: u64,
}

/// Number of structural elements (not words) in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstanceCounts {
    pub headers: u64,
    pub floats: u64,
    pub math: MathCounts,
}

/// One parsed texcount result.
///
/// Totals are derived on demand so they always agree with their parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Count {
    pub words: WordCounts,
    pub instances: InstanceCounts,
}

impl Count {
    pub fn total_words(&self) -> u64 {
        self.words
            .body
            .saturating_add(self.words.headers)
            .saturating_add(self.words.captions)
    }

    pub fn total_math(&self) -> u64 {
        self.instances
            .math
            .inline
            .saturating_add(self.instances.math.displayed)
    }
}

/// Renders the `-brief` data line this count would have been parsed from.
impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}+{}+{} ({}/{}/{}/{})",
            self.words.body,
            self.words.headers,
            self.words.captions,
            self.instances.headers,
            self.instances.floats,
            self.instances.math.inline,
            self.instances.math.displayed,
        )
    }
}
