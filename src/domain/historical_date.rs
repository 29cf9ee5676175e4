// src/domain/historical_date.rs
//
// Historical date parsing
//
// Maps free-text museum dates ("57 BCE - 668 CE", "late 18th century",
// "c. 1810-20", "1920s") to one representative year used as a sort key.
//
// RULES:
// - Patterns are ordered from most to least specific; first match wins
// - BCE/BC years are negative
// - Never fails: anything without a usable number maps to 0
// - The source text itself is never rewritten

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Which textual form produced an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateForm {
    BceToCeRange,
    BceRange,
    TrailingEraRange,
    CeRange,
    QualifiedCentury,
    Century,
    CircaRange,
    Circa,
    Range,
    QualifiedDecade,
    Decade,
    EraYear,
    PlainYear,
}

/// A representative year together with the form it was read from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateEstimate {
    pub year: f64,
    pub form: DateForm,
}

struct DateRule {
    form: DateForm,
    pattern: Regex,
    resolve: fn(&Captures) -> Option<f64>,
}

/// Ordered rule set for historical date strings
pub struct HistoricalDateRules {
    rules: Vec<DateRule>,
}

static RULES: LazyLock<HistoricalDateRules> = LazyLock::new(HistoricalDateRules::default);

/// Parse a free-text date into a sortable year. Returns 0 when nothing
/// usable is found.
pub fn parse_historical_date(text: &str) -> f64 {
    RULES.estimate(text).map(|e| e.year).unwrap_or(0.0)
}

const DASH: &str = r"\s*[-–—]\s*";
const ERA: &str = r"(bce|bc|ce|ad)\b";

fn rule(form: DateForm, pattern: &str, resolve: fn(&Captures) -> Option<f64>) -> DateRule {
    DateRule {
        form,
        pattern: Regex::new(pattern).expect("static date pattern must compile"),
        resolve,
    }
}

impl Default for HistoricalDateRules {
    fn default() -> Self {
        let circa = r"\b(?:circa|ca\.?|c\.?)\s*";
        let qualifier = r"(early|mid|late)[\s-]+";

        Self {
            rules: vec![
                // 57 BCE - 668 CE
                rule(
                    DateForm::BceToCeRange,
                    &format!(r"([0-9]+)\s*(?:bce|bc){DASH}([0-9]+)\s*(?:ce|ad)\b"),
                    |c| Some((-number(c, 1)? + number(c, 2)?) / 2.0),
                ),
                // 500 BCE - 300 BCE
                rule(
                    DateForm::BceRange,
                    &format!(r"([0-9]+)\s*(?:bce|bc){DASH}([0-9]+)\s*(?:bce|bc)\b"),
                    |c| Some((-number(c, 1)? - number(c, 2)?) / 2.0),
                ),
                // 447-432 BCE, 1200-1300 CE
                rule(
                    DateForm::TrailingEraRange,
                    &format!(r"([0-9]+){DASH}([0-9]+)\s*{ERA}"),
                    |c| signed((number(c, 1)? + number(c, 2)?) / 2.0, c.get(3)),
                ),
                // 1200 CE - 1300 CE
                rule(
                    DateForm::CeRange,
                    &format!(r"([0-9]+)\s*(?:ce|ad){DASH}([0-9]+)\s*(?:ce|ad)\b"),
                    |c| Some((number(c, 1)? + number(c, 2)?) / 2.0),
                ),
                // late 18th century
                rule(
                    DateForm::QualifiedCentury,
                    &format!(r"{qualifier}([0-9]+)\s*(?:st|nd|rd|th)\s+century(?:\s*{ERA})?"),
                    |c| {
                        let start = century_start(number(c, 2)?);
                        let offset = match c.get(1)?.as_str() {
                            "early" => 15.0,
                            "late" => 85.0,
                            _ => 50.0,
                        };
                        signed(start + offset, c.get(3))
                    },
                ),
                // 19th century, 5th century BC
                rule(
                    DateForm::Century,
                    &format!(r"([0-9]+)\s*(?:st|nd|rd|th)\s+century(?:\s*{ERA})?"),
                    |c| {
                        let century = number(c, 1)?;
                        let midpoint = (century_start(century) + century * 100.0) / 2.0;
                        signed(midpoint, c.get(2))
                    },
                ),
                // c. 1810-20
                rule(
                    DateForm::CircaRange,
                    &format!(r"{circa}([0-9]+){DASH}([0-9]+)(?:\s*{ERA})?"),
                    |c| {
                        let start = number(c, 1)?;
                        let end = expand_abbreviated_end(start, number(c, 2)?);
                        signed((start + end) / 2.0, c.get(3))
                    },
                ),
                // c. 1850, circa 300 BC
                rule(
                    DateForm::Circa,
                    &format!(r"{circa}([0-9]+)(?:\s*{ERA})?"),
                    |c| signed(number(c, 1)?, c.get(2)),
                ),
                // 1900-1910, 1810-20
                rule(DateForm::Range, &format!(r"([0-9]+){DASH}([0-9]+)"), |c| {
                    let start = number(c, 1)?;
                    let end = expand_abbreviated_end(start, number(c, 2)?);
                    Some((start + end) / 2.0)
                }),
                // early 1800s
                rule(
                    DateForm::QualifiedDecade,
                    &format!(r"{qualifier}([0-9]+)0s\b(?:\s*{ERA})?"),
                    |c| {
                        let decade = number(c, 2)? * 10.0;
                        let offset = match c.get(1)?.as_str() {
                            "early" => 2.0,
                            "late" => 8.0,
                            _ => 5.0,
                        };
                        signed(decade + offset, c.get(3))
                    },
                ),
                // 1920s
                rule(
                    DateForm::Decade,
                    &format!(r"([0-9]+)0s\b(?:\s*{ERA})?"),
                    |c| signed(number(c, 1)? * 10.0 + 5.0, c.get(2)),
                ),
                // 300 BC, 1066 AD
                rule(DateForm::EraYear, &format!(r"([0-9]+)\s*{ERA}"), |c| {
                    signed(number(c, 1)?, c.get(2))
                }),
                // 1920
                rule(DateForm::PlainYear, r"([0-9]+)", |c| number(c, 1)),
            ],
        }
    }
}

impl HistoricalDateRules {
    /// First matching rule wins. `None` when no rule yields a finite year.
    pub fn estimate(&self, text: &str) -> Option<DateEstimate> {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        for rule in &self.rules {
            if let Some(captures) = rule.pattern.captures(&normalized) {
                return (rule.resolve)(&captures)
                    .filter(|year| year.is_finite())
                    .map(|year| DateEstimate {
                        year,
                        form: rule.form,
                    });
            }
        }

        None
    }
}

fn number(captures: &Captures, group: usize) -> Option<f64> {
    captures.get(group)?.as_str().parse::<f64>().ok()
}

fn signed(year: f64, era: Option<regex::Match>) -> Option<f64> {
    match era.map(|m| m.as_str()) {
        Some("bce") | Some("bc") => Some(-year),
        _ => Some(year),
    }
}

/// First year of the Nth century (19th -> 1801)
fn century_start(century: f64) -> f64 {
    (century - 1.0) * 100.0 + 1.0
}

/// Rebuild a shortened range end from the start year:
/// 1810-5 -> 1815, 1810-20 -> 1820.
fn expand_abbreviated_end(start: f64, end: f64) -> f64 {
    if end < 10.0 {
        (start / 10.0).floor() * 10.0 + end
    } else if end < 100.0 {
        (start / 100.0).floor() * 100.0 + end
    } else {
        end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_of(text: &str) -> Option<DateForm> {
        HistoricalDateRules::default().estimate(text).map(|e| e.form)
    }

    #[test]
    fn test_bce_to_ce_range() {
        assert_eq!(parse_historical_date("57 BCE - 668 CE"), 305.5);
        assert_eq!(parse_historical_date("100 BC – 100 AD"), 0.0);
        assert_eq!(form_of("57 BCE - 668 CE"), Some(DateForm::BceToCeRange));
    }

    #[test]
    fn test_bce_range() {
        assert_eq!(parse_historical_date("500 BCE - 300 BCE"), -400.0);
        assert_eq!(form_of("500 BC—300 BC"), Some(DateForm::BceRange));
    }

    #[test]
    fn test_trailing_era_range() {
        assert_eq!(parse_historical_date("447-432 BCE"), -439.5);
        assert_eq!(parse_historical_date("1200-1300 CE"), 1250.0);
        assert_eq!(form_of("447-432 BCE"), Some(DateForm::TrailingEraRange));
    }

    #[test]
    fn test_ce_range() {
        assert_eq!(parse_historical_date("1200 CE - 1300 CE"), 1250.0);
        assert_eq!(form_of("1200 AD - 1300 AD"), Some(DateForm::CeRange));
    }

    #[test]
    fn test_qualified_century() {
        assert_eq!(parse_historical_date("early 19th century"), 1816.0);
        assert_eq!(parse_historical_date("mid 19th century"), 1851.0);
        assert_eq!(parse_historical_date("late 18th century"), 1786.0);
        assert_eq!(parse_historical_date("Late 5th century BC"), -486.0);
        assert_eq!(parse_historical_date("mid-19th century"), 1851.0);
    }

    #[test]
    fn test_century() {
        assert_eq!(parse_historical_date("19th century"), 1850.5);
        assert_eq!(parse_historical_date("1st century"), 50.5);
        assert_eq!(parse_historical_date("5th century BCE"), -450.5);
        assert_eq!(form_of("21st century"), Some(DateForm::Century));
    }

    #[test]
    fn test_circa_range_expands_abbreviated_end() {
        assert_eq!(parse_historical_date("c. 1810-20"), 1815.0);
        assert_eq!(parse_historical_date("c. 1810-5"), 1812.5);
        assert_eq!(parse_historical_date("ca. 1850-1860"), 1855.0);
        assert_eq!(form_of("c. 1810-20"), Some(DateForm::CircaRange));
    }

    #[test]
    fn test_circa_single_year() {
        assert_eq!(parse_historical_date("c. 1850"), 1850.0);
        assert_eq!(parse_historical_date("circa 300 BC"), -300.0);
        assert_eq!(parse_historical_date("c.1600"), 1600.0);
        assert_eq!(form_of("circa 1700"), Some(DateForm::Circa));
    }

    #[test]
    fn test_plain_range() {
        assert_eq!(parse_historical_date("1900-1910"), 1905.0);
        assert_eq!(parse_historical_date("1810-20"), 1815.0);
        assert_eq!(parse_historical_date("1810-5"), 1812.5);
        assert_eq!(form_of("1900–1910"), Some(DateForm::Range));
    }

    #[test]
    fn test_qualified_decade() {
        assert_eq!(parse_historical_date("early 1920s"), 1922.0);
        assert_eq!(parse_historical_date("mid 1920s"), 1925.0);
        assert_eq!(parse_historical_date("late 1920s"), 1928.0);
        assert_eq!(form_of("late 1800s"), Some(DateForm::QualifiedDecade));
    }

    #[test]
    fn test_decade() {
        assert_eq!(parse_historical_date("1920s"), 1925.0);
        assert_eq!(parse_historical_date("1800s"), 1805.0);
        assert_eq!(parse_historical_date("700s"), 705.0);
    }

    #[test]
    fn test_single_year_with_era() {
        assert_eq!(parse_historical_date("300 BC"), -300.0);
        assert_eq!(parse_historical_date("1066 AD"), 1066.0);
        assert_eq!(parse_historical_date("44 BCE"), -44.0);
        assert_eq!(form_of("44 bce"), Some(DateForm::EraYear));
    }

    #[test]
    fn test_only_ascii_digits_count() {
        assert_eq!(parse_historical_date("\u{663} 1920"), 1920.0);
        assert_eq!(parse_historical_date("\u{663}\u{664}"), 0.0);
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(parse_historical_date("1920"), 1920.0);
        assert_eq!(parse_historical_date("made 1875, London"), 1875.0);
        assert_eq!(form_of("1920"), Some(DateForm::PlainYear));
    }

    #[test]
    fn test_unparseable_is_zero() {
        assert_eq!(parse_historical_date(""), 0.0);
        assert_eq!(parse_historical_date("   "), 0.0);
        assert_eq!(parse_historical_date("undated"), 0.0);
    }

    #[test]
    fn test_era_marker_requires_word_boundary() {
        // "adorned" must not be read as an AD marker
        assert_eq!(form_of("1900 adorned"), Some(DateForm::PlainYear));
    }

    #[test]
    fn test_parsing_is_deterministic() {
        let first = parse_historical_date("late 18th century");
        for _ in 0..100 {
            assert_eq!(parse_historical_date("late 18th century"), first);
        }
    }
}
