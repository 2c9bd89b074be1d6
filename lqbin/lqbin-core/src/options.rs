//! Decode and render options.

/// Text encoding applied to length-prefixed string bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8; invalid sequences are replaced with U+FFFD.
    #[default]
    Utf8,
    /// ISO-8859-1: every byte maps to the code point of the same value.
    Latin1,
}

impl TextEncoding {
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::Latin1 => bytes.iter().copied().map(char::from).collect(),
        }
    }
}

/// How string values are quoted in sheet output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Wrap in double quotes and emit the contents untouched, even when they
    /// contain `"` or `,`. Matches existing lqbin CSV dumps byte for byte.
    #[default]
    Verbatim,
    /// Wrap in double quotes and double any embedded `"`. Commas and line
    /// breaks inside the value are left as is.
    Escaped,
}

/// Options for the row decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub text_encoding: TextEncoding,
}

/// Options for rendering decoded values as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub quote_style: QuoteStyle,
}

/// Decode and render options used together by [`decode_sheet`](crate::decode_sheet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SheetOptions {
    pub decode: DecodeOptions,
    pub render: RenderOptions,
}

impl SheetOptions {
    pub fn with_text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        self.decode.text_encoding = text_encoding;
        self
    }

    pub fn with_quote_style(mut self, quote_style: QuoteStyle) -> Self {
        self.render.quote_style = quote_style;
        self
    }
}
