use clap::ValueEnum;
use lqbin::core::{QuoteStyle, TextEncoding};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum QuoteStyleArg {
    /// Quote strings without escaping (compatible with existing dumps)
    Verbatim,
    /// Quote strings and double embedded quotes
    Escaped,
}

impl From<QuoteStyleArg> for QuoteStyle {
    fn from(value: QuoteStyleArg) -> Self {
        match value {
            QuoteStyleArg::Verbatim => QuoteStyle::Verbatim,
            QuoteStyleArg::Escaped => QuoteStyle::Escaped,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum TextEncodingArg {
    Utf8,
    Latin1,
}

impl From<TextEncodingArg> for TextEncoding {
    fn from(value: TextEncodingArg) -> Self {
        match value {
            TextEncodingArg::Utf8 => TextEncoding::Utf8,
            TextEncodingArg::Latin1 => TextEncoding::Latin1,
        }
    }
}
