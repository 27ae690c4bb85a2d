//! Free-text expense entry parser.
//!
//! Turns shorthand typed into the add/edit box into `(name, amount)` pairs.
//! Two grammars are understood:
//!
//! - **Dash list**: `"காய்கறி - 200, 50"`. Everything before the first `-` is
//!   the shared name, everything after it is a comma separated list of
//!   amounts. Each amount may carry a decimal point.
//! - **Trailing number**: `"Milk800"` or `"vegetables 200"`. A name followed
//!   by a run of digits at the very end. Integers only.
//!
//! Any `-` in the input selects the dash list grammar, even when the text
//! would also read as a trailing number.
//!
//! Parsing never fails. Input that holds no usable entry gives an empty
//! result; amount tokens without a number are skipped and reported through
//! [`ParseReport::skipped_tokens`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::ParsedEntry;

/// Whitespace on either side of a comma in a name collapses to ", "
static COMMA_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*").expect("comma spacing pattern is valid"));

/// A name (possibly empty) followed by a digit run that ends the text.
/// The name never spans a line break, `\r` and U+2028/U+2029 included.
static TRAILING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^\r\n\u{2028}\u{2029}]*?)\s*([0-9]+)\s*$")
        .expect("trailing number pattern is valid")
});

const DASH: char = '-';
const AMOUNT_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    DashList,
    TrailingNumber,
}

impl ParseStrategy {
    /// Pick the grammar for already-trimmed, non-blank text
    pub fn select(trimmed: &str) -> Self {
        if trimmed.contains(DASH) {
            ParseStrategy::DashList
        } else {
            ParseStrategy::TrailingNumber
        }
    }

    pub fn apply(self, trimmed: &str) -> GrammarMatch {
        match self {
            ParseStrategy::DashList => parse_dash_list(trimmed),
            ParseStrategy::TrailingNumber => parse_trailing_number(trimmed),
        }
    }
}

/// Outcome of running a single grammar
#[derive(Debug, Clone, PartialEq)]
pub enum GrammarMatch {
    Matched {
        entries: Vec<ParsedEntry>,
        skipped_tokens: Vec<String>,
    },
    NoMatch,
}

/// Everything the parser learned about one input
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseReport {
    /// None for blank input, which never reaches a grammar
    pub strategy: Option<ParseStrategy>,
    pub entries: Vec<ParsedEntry>,
    pub skipped_tokens: Vec<String>,
}

impl ParseReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse expense text into entries, in the order the amounts appear
pub fn parse_expense_text(text: Option<&str>) -> Vec<ParsedEntry> {
    analyze_expense_text(text).entries
}

/// Parse expense text and keep track of the grammar used and any skipped tokens
pub fn analyze_expense_text(text: Option<&str>) -> ParseReport {
    let trimmed = match text.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return ParseReport::default(),
    };

    let strategy = ParseStrategy::select(trimmed);
    match strategy.apply(trimmed) {
        GrammarMatch::Matched {
            entries,
            skipped_tokens,
        } => ParseReport {
            strategy: Some(strategy),
            entries,
            skipped_tokens,
        },
        GrammarMatch::NoMatch => ParseReport {
            strategy: Some(strategy),
            ..ParseReport::default()
        },
    }
}

/// `name - amount[, amount...]`, split on the first dash only
pub fn parse_dash_list(trimmed: &str) -> GrammarMatch {
    let Some((left, right)) = trimmed.split_once(DASH) else {
        return GrammarMatch::NoMatch;
    };

    let name = normalize_name(left);
    if name.is_empty() {
        return GrammarMatch::NoMatch;
    }

    let mut entries = Vec::new();
    let mut skipped_tokens = Vec::new();
    for token in right
        .split(AMOUNT_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        match parse_amount_token(token) {
            Some(amount) => entries.push(ParsedEntry {
                name: name.clone(),
                amount,
            }),
            None => skipped_tokens.push(token.to_string()),
        }
    }

    GrammarMatch::Matched {
        entries,
        skipped_tokens,
    }
}

/// `name<digits>` with optional whitespace in between
pub fn parse_trailing_number(trimmed: &str) -> GrammarMatch {
    let Some(captures) = TRAILING_NUMBER.captures(trimmed) else {
        return GrammarMatch::NoMatch;
    };

    let name = normalize_name(captures.get(1).map_or("", |m| m.as_str()));
    let amount = captures
        .get(2)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|a| a.is_finite());

    match amount {
        Some(amount) if !name.is_empty() => GrammarMatch::Matched {
            entries: vec![ParsedEntry { name, amount }],
            skipped_tokens: Vec::new(),
        },
        _ => GrammarMatch::NoMatch,
    }
}

fn normalize_name(raw: &str) -> String {
    COMMA_SPACING.replace_all(raw, ", ").trim().to_string()
}

/// Keep only ASCII digits and '.', then read what is left as a number
fn parse_amount_token(token: &str) -> Option<f64> {
    let residue: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    residue.parse::<f64>().ok().filter(|a| a.is_finite())
}
