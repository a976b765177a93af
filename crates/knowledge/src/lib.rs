//! Static weather knowledge base for Pakistani cities.
//!
//! The table is compiled into the binary and never mutated. It is exposed
//! two ways:
//!
//! - [`lookup`] resolves a free-form city query to one record
//! - [`render_all`] flattens every record into the text block injected into
//!   the model's instructions
//!
//! Both are pure functions of the table and their input.

mod table;

use serde::Serialize;
use std::fmt::Write as _;

use table::CITIES;

/// First line of the rendered knowledge blob.
pub const KNOWLEDGE_HEADER: &str = "PAKISTAN WEATHER KNOWLEDGE BASE:";

/// Seasonal descriptions for one city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Seasons {
    pub summer: &'static str,
    pub monsoon: &'static str,
    pub winter: &'static str,
    pub spring: &'static str,
}

/// Weather facts for one city or region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityWeatherRecord {
    /// Unique lowercase lookup key.
    pub key: &'static str,
    /// Display name.
    pub city: &'static str,
    pub climate: &'static str,
    pub seasons: Seasons,
    pub notable_features: &'static [&'static str],
    pub safety_tips: &'static [&'static str],
}

impl CityWeatherRecord {
    /// Render this record as a `CITY:` block terminated by a blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "CITY: {}", self.city);
        let _ = writeln!(out, "Climate: {}", self.climate);
        let _ = writeln!(out, "Seasons:");
        let _ = writeln!(out, "  Summer: {}", self.seasons.summer);
        let _ = writeln!(out, "  Monsoon: {}", self.seasons.monsoon);
        let _ = writeln!(out, "  Winter: {}", self.seasons.winter);
        let _ = writeln!(out, "  Spring: {}", self.seasons.spring);
        let _ = writeln!(out, "Notable Features: {}", self.notable_features.join(", "));
        let _ = writeln!(out, "Safety Tips: {}", self.safety_tips.join(" | "));
        out.push('\n');
    }
}

/// Every record, in declaration order.
pub fn all() -> &'static [CityWeatherRecord] {
    CITIES
}

/// Lookup keys, in declaration order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    CITIES.iter().map(|record| record.key)
}

/// Resolve a city query to a record.
///
/// The query is trimmed and lowercased. An exact key match wins; otherwise
/// the first record (in declaration order) whose key contains the query,
/// or is contained by it, is returned.
pub fn lookup(city_query: &str) -> Option<&'static CityWeatherRecord> {
    let normalized = city_query.trim().to_lowercase();

    if let Some(exact) = CITIES.iter().find(|record| record.key == normalized) {
        return Some(exact);
    }

    CITIES
        .iter()
        .find(|record| normalized.contains(record.key) || record.key.contains(normalized.as_str()))
}

/// Flatten the whole table into the knowledge blob.
pub fn render_all() -> String {
    let mut out = String::with_capacity(8 * 1024);
    out.push_str(KNOWLEDGE_HEADER);
    out.push_str("\n\n");
    for record in CITIES {
        record.render_into(&mut out);
    }
    out
}
