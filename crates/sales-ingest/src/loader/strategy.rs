//! Parse configurations tried by the loader, in order.

use std::borrow::Cow;
use std::fmt;

use encoding_rs::{UTF_8, WINDOWS_1252};

/// Text encoding applied to the raw bytes before tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8, rejecting malformed byte sequences. A leading BOM is removed.
    Utf8,
    /// Latin-1 as browsers and spreadsheet tools read it (Windows-1252).
    /// Every byte sequence decodes.
    Latin1,
}

impl TextEncoding {
    /// Human-readable encoding name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "Latin-1",
        }
    }

    /// Decode `bytes`, returning `None` when they are malformed for this encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        match self {
            Self::Utf8 => {
                let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
                (!had_errors).then_some(text)
            }
            Self::Latin1 => {
                let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
                Some(text)
            }
        }
    }
}

/// A single parse configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStrategy {
    /// Comma delimiter, UTF-8.
    Default,
    /// Semicolon delimiter, UTF-8.
    Semicolon,
    /// Comma delimiter, Latin-1.
    Latin1,
    /// Semicolon delimiter, Latin-1.
    SemicolonLatin1,
    /// Comma delimiter; rows whose field count differs from the header are discarded.
    Lenient,
}

impl ReadStrategy {
    /// Strict strategies in the order they are attempted.
    pub const LADDER: [ReadStrategy; 4] = [
        ReadStrategy::Default,
        ReadStrategy::Semicolon,
        ReadStrategy::Latin1,
        ReadStrategy::SemicolonLatin1,
    ];

    /// Field delimiter byte.
    pub fn separator(self) -> u8 {
        match self {
            Self::Semicolon | Self::SemicolonLatin1 => b';',
            Self::Default | Self::Latin1 | Self::Lenient => b',',
        }
    }

    /// Encoding the raw bytes are decoded with.
    ///
    /// The lenient pass has no fixed encoding; it tries UTF-8 then Latin-1.
    pub fn encoding(self) -> TextEncoding {
        match self {
            Self::Latin1 | Self::SemicolonLatin1 => TextEncoding::Latin1,
            Self::Default | Self::Semicolon | Self::Lenient => TextEncoding::Utf8,
        }
    }

    /// Delimiters used elsewhere on the ladder.
    ///
    /// Finding one of these inside a lone header cell means the file was split on
    /// the wrong character.
    pub fn foreign_separators(self) -> impl Iterator<Item = char> {
        let own = self.separator();
        Self::LADDER
            .into_iter()
            .map(ReadStrategy::separator)
            .filter(move |sep| *sep != own)
            .map(char::from)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Semicolon => "semicolon",
            Self::Latin1 => "latin-1",
            Self::SemicolonLatin1 => "semicolon+latin-1",
            Self::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ReadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
