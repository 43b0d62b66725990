use std::fmt::{Display, Formatter};

use crate::ProviderError;

const FUND_CATEGORY_SEGMENT: usize = 3;
const FUND_ID_SEGMENT: usize = 4;
const FUND_NAME_SEGMENT: usize = 5;

/// Validated analizy.pl fund address.
///
/// A fund page URL carries all the metadata the analyzer needs:
/// `https://www.analizy.pl/<category>/<fund-id>/<fund-name-slug>`.
/// Parsing up front replaces positional string-splitting scattered through
/// the call sites with a single typed accessor surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundUrl {
    raw: String,
    category: String,
    id: String,
    name_slug: String,
}

impl FundUrl {
    pub fn parse(input: &str) -> Result<Self, ProviderError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ProviderError::InvalidFundUrl {
                url: input.to_owned(),
                reason: "url is empty",
            });
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        if segments.len() <= FUND_NAME_SEGMENT {
            return Err(ProviderError::InvalidFundUrl {
                url: input.to_owned(),
                reason: "expected /<category>/<fund-id>/<fund-name> path",
            });
        }

        let category = segments[FUND_CATEGORY_SEGMENT];
        let id = segments[FUND_ID_SEGMENT];
        let name_slug = segments[FUND_NAME_SEGMENT];
        if category.is_empty() || id.is_empty() || name_slug.is_empty() {
            return Err(ProviderError::InvalidFundUrl {
                url: input.to_owned(),
                reason: "category, fund id and fund name must be non-empty",
            });
        }

        Ok(Self {
            raw: trimmed.to_owned(),
            category: category.to_owned(),
            id: id.to_owned(),
            name_slug: name_slug.to_owned(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// First letter of each dash-separated category word, e.g.
    /// `fundusze-inwestycyjne-otwarte` → `fio`. The quotation API addresses
    /// funds by this shortcut.
    pub fn category_shortcut(&self) -> String {
        self.category
            .split('-')
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// Human-readable fund name derived from the URL slug (dashes to spaces,
    /// each word capitalized).
    pub fn name(&self) -> String {
        self.name_slug
            .split('-')
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Display for FundUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
