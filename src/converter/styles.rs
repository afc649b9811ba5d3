use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Camel,
    Kebab,
    Dot,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Camel, Style::Kebab, Style::Dot];

    /// Join tokens produced by the tokenizer into this style
    pub fn join(self, tokens: &[String]) -> String {
        match self {
            Style::Camel => join_camel(tokens),
            Style::Kebab => join_lowercase(tokens, "-"),
            Style::Dot => join_lowercase(tokens, "."),
        }
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Style::Camel),
            "kebab" | "kebab-case" => Ok(Style::Kebab),
            "dot" | "dot.case" => Ok(Style::Dot),
            _ => Err(format!("Unknown style: {}", s)),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Camel => write!(f, "camel"),
            Style::Kebab => write!(f, "kebab"),
            Style::Dot => write!(f, "dot"),
        }
    }
}

fn join_camel(tokens: &[String]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(String::len).sum());

    for (i, token) in tokens.iter().enumerate() {
        if i == 0 {
            result.push_str(&token.to_ascii_lowercase());
        } else {
            result.push_str(&capitalize(token));
        }
    }

    result
}

// Internal capitals are folded: "SCREEN" becomes "Screen"
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let mut word = String::with_capacity(token.len());
            word.push(first.to_ascii_uppercase());
            word.push_str(&chars.as_str().to_ascii_lowercase());
            word
        }
        None => String::new(),
    }
}

fn join_lowercase(tokens: &[String], separator: &str) -> String {
    tokens
        .iter()
        .map(|token| token.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}
