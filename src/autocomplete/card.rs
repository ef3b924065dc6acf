//! Country detail card.
//!
//! The terminal rendition of a selected country: name, capital, population,
//! languages and flag.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::catalog::CountryRecord;

/// Placeholder shown for fields a record does not carry.
const UNKNOWN: &str = "Unknown";

/// Display-ready details for a single country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCard {
    /// Common name
    pub name: String,

    /// Capitals joined with ", ", or "Unknown"
    pub capital: String,

    /// Raw population count
    pub population: u64,

    /// Language names joined with ", ", or "Unknown"
    pub languages: String,

    /// SVG flag URL, empty when unavailable
    pub flag_url: String,
}

impl CountryCard {
    /// Population with comma thousands separators.
    pub fn population_display(&self) -> String {
        group_thousands(self.population)
    }
}

impl From<&CountryRecord> for CountryCard {
    fn from(record: &CountryRecord) -> Self {
        let capital = if record.capital.is_empty() {
            UNKNOWN.to_string()
        } else {
            record.capital.join(", ")
        };

        let languages = if record.languages.is_empty() {
            UNKNOWN.to_string()
        } else {
            record
                .languages
                .values()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        let flag_url = record
            .flags
            .as_ref()
            .and_then(|flags| flags.svg.clone())
            .unwrap_or_default();

        Self {
            name: record.name.common.clone(),
            capital,
            population: record.population,
            languages,
            flag_url,
        }
    }
}

impl Display for CountryCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  Capital:    {}", self.capital)?;
        writeln!(f, "  Population: {}", self.population_display())?;
        writeln!(f, "  Languages:  {}", self.languages)?;
        if !self.flag_url.is_empty() {
            writeln!(f, "  Flag:       {}", self.flag_url)?;
        }
        Ok(())
    }
}

/// Formats `n` with a comma between every group of three digits.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Flags;
    use test_case::test_case;

    #[test_case(0, "0" ; "zero")]
    #[test_case(999, "999" ; "three digits")]
    #[test_case(1_000, "1,000" ; "four digits")]
    #[test_case(83_240_525, "83,240,525" ; "germany")]
    #[test_case(1_402_112_000, "1,402,112,000" ; "china")]
    fn test_group_thousands(n: u64, expected: &str) {
        assert_eq!(group_thousands(n), expected);
    }

    #[test]
    fn test_card_from_full_record() {
        let mut record = CountryRecord::named("Switzerland");
        record.capital = vec!["Bern".to_string()];
        record.population = 8_654_622;
        record.languages.insert("fra".to_string(), "French".to_string());
        record.languages.insert("gsw".to_string(), "Swiss German".to_string());
        record.languages.insert("ita".to_string(), "Italian".to_string());
        record.languages.insert("roh".to_string(), "Romansh".to_string());
        record.flags = Some(Flags {
            svg: Some("https://flagcdn.com/ch.svg".to_string()),
            ..Flags::default()
        });

        let card = CountryCard::from(&record);
        assert_eq!(card.name, "Switzerland");
        assert_eq!(card.capital, "Bern");
        assert_eq!(card.population_display(), "8,654,622");
        assert_eq!(card.languages, "French, Swiss German, Italian, Romansh");
        assert_eq!(card.flag_url, "https://flagcdn.com/ch.svg");

        let rendered = card.to_string();
        assert!(rendered.starts_with("Switzerland\n"));
        assert!(rendered.contains("Capital:    Bern"));
        assert!(rendered.contains("Flag:       https://flagcdn.com/ch.svg"));
    }

    #[test]
    fn test_card_from_sparse_record() {
        let card = CountryCard::from(&CountryRecord::named("Antarctica"));
        assert_eq!(card.capital, "Unknown");
        assert_eq!(card.languages, "Unknown");
        assert!(card.flag_url.is_empty());
        assert!(!card.to_string().contains("Flag:"));
    }

    #[test]
    fn test_multiple_capitals_are_joined() {
        let mut record = CountryRecord::named("South Africa");
        record.capital = vec![
            "Pretoria".to_string(),
            "Bloemfontein".to_string(),
            "Cape Town".to_string(),
        ];
        assert_eq!(
            CountryCard::from(&record).capital,
            "Pretoria, Bloemfontein, Cape Town"
        );
    }
}
