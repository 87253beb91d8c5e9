//! # Convention Registry
//!
//! Every generated constant also has a row in a static table describing it:
//! what kind of name it is, whether it is stable, and whether it has been
//! deprecated in favor of another key. The table always holds the
//! experimental rows, whether or not the `semconv_experimental` feature is
//! enabled.
//!
//! Lookups are linear scans over the table.
//!
//! ```rust
//! use opentelemetry_semconv::registry::{self, Deprecated, Instrument, Kind, Stability};
//!
//! let duration = registry::metric("http.server.request.duration").unwrap();
//! assert_eq!(duration.stability, Stability::Stable);
//! assert_eq!(
//!     duration.kind,
//!     Kind::Metric {
//!         instrument: Instrument::Histogram,
//!         unit: "s"
//!     }
//! );
//!
//! assert_eq!(registry::replacement("http.method"), Some("http.request.method"));
//! assert_eq!(
//!     registry::attribute("http.method").unwrap().deprecated,
//!     Some(Deprecated::Renamed("http.request.method"))
//! );
//! ```
use std::fmt;

use crate::{attribute, event, metric};

/// The literal a constant expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    /// A key, a name or a string enum value.
    Str(&'static str),
    /// An integer enum value.
    Int(i64),
}

impl Literal {
    /// Returns the string literal, or `None` for integers.
    pub const fn as_str(&self) -> Option<&'static str> {
        match self {
            Literal::Str(s) => Some(*s),
            Literal::Int(_) => None,
        }
    }

    /// Returns the integer literal, or `None` for strings.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Literal::Str(_) => None,
            Literal::Int(i) => Some(*i),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => f.write_str(s),
            Literal::Int(i) => write!(f, "{i}"),
        }
    }
}

/// What a registry entry names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Kind {
    /// An attribute key.
    Attribute,
    /// The prefix of a templated attribute key, completed with a caller supplied suffix.
    Template,
    /// One documented value of an enum attribute.
    EnumValue {
        /// Key of the attribute the value belongs to.
        attribute: &'static str,
    },
    /// A metric instrument name.
    Metric {
        /// Instrument the metric is recorded with.
        instrument: Instrument,
        /// UCUM unit of the measurements.
        unit: &'static str,
    },
    /// An event name.
    Event,
}

impl Kind {
    /// Attribute keys, templated or not.
    pub fn is_attribute(&self) -> bool {
        matches!(self, Kind::Attribute | Kind::Template)
    }

    /// Enum values of any attribute.
    pub fn is_enum_value(&self) -> bool {
        matches!(self, Kind::EnumValue { .. })
    }

    /// Metric names.
    pub fn is_metric(&self) -> bool {
        matches!(self, Kind::Metric { .. })
    }

    /// Event names.
    pub fn is_event(&self) -> bool {
        matches!(self, Kind::Event)
    }
}

/// Metric instrument types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    /// Monotonic sum.
    Counter,
    /// Non-monotonic sum.
    UpDownCounter,
    /// Distribution of measurements.
    Histogram,
    /// Last observed value.
    Gauge,
}

/// Advisory stability of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    /// Stable upstream. Always compiled.
    Stable,
    /// Any level below stable. The constant is only compiled with the
    /// `semconv_experimental` feature.
    Experimental,
}

/// Why an entry is deprecated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deprecated {
    /// Replaced by the given key or value.
    Renamed(&'static str),
    /// Removed with no replacement.
    Obsoleted,
    /// Deprecated for another reason, see the constant's deprecation note.
    Uncategorized,
}

/// One generated constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Entry {
    /// The Rust identifier of the constant, e.g. `HTTP_REQUEST_METHOD`.
    pub name: &'static str,
    /// What the constant expands to.
    pub value: Literal,
    /// What the constant names.
    pub kind: Kind,
    /// Advisory stability.
    pub stability: Stability,
    /// Set when the entry is deprecated.
    pub deprecated: Option<Deprecated>,
}

impl Entry {
    const fn new(name: &'static str, value: Literal, kind: Kind, stability: Stability) -> Self {
        Entry {
            name,
            value,
            kind,
            stability,
            deprecated: None,
        }
    }

    pub(crate) const fn attribute(
        name: &'static str,
        key: &'static str,
        stability: Stability,
    ) -> Self {
        Entry::new(name, Literal::Str(key), Kind::Attribute, stability)
    }

    pub(crate) const fn template(
        name: &'static str,
        prefix: &'static str,
        stability: Stability,
    ) -> Self {
        Entry::new(name, Literal::Str(prefix), Kind::Template, stability)
    }

    pub(crate) const fn value(
        name: &'static str,
        attribute: &'static str,
        value: &'static str,
        stability: Stability,
    ) -> Self {
        Entry::new(
            name,
            Literal::Str(value),
            Kind::EnumValue { attribute },
            stability,
        )
    }

    pub(crate) const fn int_value(
        name: &'static str,
        attribute: &'static str,
        value: i64,
        stability: Stability,
    ) -> Self {
        Entry::new(
            name,
            Literal::Int(value),
            Kind::EnumValue { attribute },
            stability,
        )
    }

    pub(crate) const fn metric(
        name: &'static str,
        metric: &'static str,
        instrument: Instrument,
        unit: &'static str,
        stability: Stability,
    ) -> Self {
        Entry::new(
            name,
            Literal::Str(metric),
            Kind::Metric { instrument, unit },
            stability,
        )
    }

    pub(crate) const fn event(
        name: &'static str,
        event: &'static str,
        stability: Stability,
    ) -> Self {
        Entry::new(name, Literal::Str(event), Kind::Event, stability)
    }

    pub(crate) const fn deprecated(mut self, reason: Deprecated) -> Self {
        self.deprecated = Some(reason);
        self
    }

    /// Whether the entry is stable upstream.
    pub fn is_stable(&self) -> bool {
        self.stability == Stability::Stable
    }

    /// Whether the entry is deprecated.
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }
}

/// Iterates every entry: attributes and their values, then metrics, then events.
pub fn entries() -> impl Iterator<Item = &'static Entry> {
    attribute::DOMAINS
        .iter()
        .chain(metric::DOMAINS)
        .flat_map(|domain| domain.iter())
        .chain(event::ENTRIES)
}

/// Finds the first entry accepted by `kind` whose string literal is `value`.
pub fn find(kind: fn(&Kind) -> bool, value: &str) -> Option<&'static Entry> {
    entries().find(|entry| kind(&entry.kind) && entry.value.as_str() == Some(value))
}

/// Looks up an attribute key. Templated keys match on their prefix.
pub fn attribute(key: &str) -> Option<&'static Entry> {
    find(Kind::is_attribute, key)
}

/// Looks up a metric name.
pub fn metric(name: &str) -> Option<&'static Entry> {
    find(Kind::is_metric, name)
}

/// Looks up an event name.
pub fn event(name: &str) -> Option<&'static Entry> {
    find(Kind::is_event, name)
}

/// Iterates the documented values of an enum attribute, in model order.
///
/// Yields nothing for keys that are unknown or not enum typed.
pub fn values_of(attribute: &str) -> impl Iterator<Item = &'static Entry> + '_ {
    entries().filter(move |entry| {
        matches!(entry.kind, Kind::EnumValue { attribute: parent } if parent == attribute)
    })
}

/// Returns the key an attribute or metric was renamed to.
pub fn replacement(key: &str) -> Option<&'static str> {
    entries()
        .filter(|entry| entry.kind.is_attribute() || entry.kind.is_metric())
        .filter(|entry| entry.value.as_str() == Some(key))
        .find_map(|entry| match entry.deprecated {
            Some(Deprecated::Renamed(to)) => Some(to),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn entries_cover_every_kind() {
        let mut attributes = 0;
        let mut templates = 0;
        let mut values = 0;
        let mut metrics = 0;
        let mut events = 0;
        for entry in entries() {
            match entry.kind {
                Kind::Attribute => attributes += 1,
                Kind::Template => templates += 1,
                Kind::EnumValue { .. } => values += 1,
                Kind::Metric { .. } => metrics += 1,
                Kind::Event => events += 1,
            }
        }
        assert!(attributes > 0);
        assert!(templates > 0);
        assert!(values > 0);
        assert!(metrics > 0);
        assert!(events > 0);
    }

    #[test]
    fn names_are_unique_per_kind() {
        let mut seen = HashSet::new();
        for entry in entries() {
            let namespace = if entry.kind.is_metric() {
                "metric"
            } else if entry.kind.is_event() {
                "event"
            } else {
                "attribute"
            };
            assert!(
                seen.insert((namespace, entry.name)),
                "duplicate {namespace} identifier {}",
                entry.name
            );
        }
    }

    #[rstest]
    #[case::attributes(Kind::is_attribute)]
    #[case::metrics(Kind::is_metric)]
    #[case::events(Kind::is_event)]
    fn literals_are_unique_per_kind(#[case] kind: fn(&Kind) -> bool) {
        let mut seen = HashSet::new();
        for entry in entries().filter(|entry| kind(&entry.kind)) {
            assert!(seen.insert(entry.value), "duplicate literal {}", entry.value);
        }
    }

    #[test]
    fn enum_values_are_unique_per_attribute() {
        let mut seen = HashSet::new();
        for entry in entries() {
            if let Kind::EnumValue { attribute } = entry.kind {
                assert!(
                    seen.insert((attribute, entry.value)),
                    "{attribute} lists {} twice",
                    entry.value
                );
            }
        }
    }

    #[test]
    fn enum_values_have_a_parent_attribute() {
        for entry in entries() {
            if let Kind::EnumValue { attribute: parent } = entry.kind {
                let found = attribute(parent);
                assert!(found.is_some(), "{} has no parent {parent}", entry.name);
            }
        }
    }

    #[test]
    fn renames_resolve() {
        for entry in entries() {
            let Some(Deprecated::Renamed(to)) = entry.deprecated else {
                continue;
            };
            let resolved = match entry.kind {
                Kind::Attribute | Kind::Template => attribute(to).is_some(),
                Kind::Metric { .. } => metric(to).is_some(),
                Kind::EnumValue { attribute } => values_of(attribute)
                    .any(|sibling| sibling.value.as_str() == Some(to)),
                Kind::Event => event(to).is_some(),
            };
            assert!(resolved, "{} is renamed to missing {to}", entry.name);
        }
    }

    #[test]
    fn every_typed_enum_agrees_with_its_values() {
        assert!(!crate::attribute::TYPED_ENUMS.is_empty());
        for literals in crate::attribute::TYPED_ENUMS {
            let (key, typed) = literals();
            let listed: Vec<_> = values_of(key)
                .filter_map(|entry| entry.value.as_str())
                .collect();
            assert_eq!(listed, typed, "{key}");
        }
    }

    #[cfg(feature = "semconv_experimental")]
    #[test]
    fn every_live_string_enum_has_a_typed_enum() {
        let string_enums = entries()
            .filter(|entry| entry.kind == Kind::Attribute && !entry.is_deprecated())
            .filter_map(|entry| entry.value.as_str())
            .filter(|key| values_of(key).any(|value| value.value.as_str().is_some()))
            .count();
        assert_eq!(string_enums, crate::attribute::TYPED_ENUMS.len());
    }

    #[test]
    fn experimental_entries_are_listed_without_the_feature() {
        let state = attribute("http.connection.state").unwrap();
        assert_eq!(state.stability, Stability::Experimental);
        assert_eq!(state.name, "HTTP_CONNECTION_STATE");
        assert_eq!(values_of("http.connection.state").count(), 2);
    }

    #[rstest]
    #[case("http.request.header", Kind::Template)]
    #[case("http.request.method", Kind::Attribute)]
    #[case("db.system.name", Kind::Attribute)]
    fn attribute_kinds(#[case] key: &str, #[case] kind: Kind) {
        let entry = attribute(key).unwrap();
        assert_eq!(entry.kind, kind);
        assert!(entry.is_stable());
        assert!(!entry.is_deprecated());
    }

    #[test]
    fn attribute_lookup_ignores_other_kinds() {
        assert!(attribute("http.server.request.duration").is_none());
        assert!(metric("http.request.method").is_none());
        assert!(event("http.request.method").is_none());
        assert!(attribute("").is_none());
    }

    #[test]
    fn integer_values() {
        let codes: Vec<_> = values_of("rpc.grpc.status_code")
            .filter_map(|entry| entry.value.as_int())
            .collect();
        assert_eq!(codes, (0..=16).collect::<Vec<_>>());
        assert_eq!(Literal::Int(14).to_string(), "14");
        assert_eq!(Literal::Int(14).as_str(), None);
    }

    #[test]
    fn values_of_keeps_model_order() {
        let values: Vec<_> = values_of("network.transport")
            .filter_map(|entry| entry.value.as_str())
            .collect();
        assert_eq!(values, ["tcp", "udp", "pipe", "unix", "quic"]);
        assert_eq!(values_of("http.request.header").count(), 0);
        assert_eq!(values_of("no.such.attribute").count(), 0);
    }

    #[rstest]
    #[case("http.method", Some("http.request.method"))]
    #[case("http.server.request.duration", None)]
    #[case("http.request.method", None)]
    #[case("no.such.key", None)]
    fn replacements(#[case] key: &str, #[case] expected: Option<&str>) {
        assert_eq!(replacement(key), expected);
    }

    #[test]
    fn metric_metadata() {
        let entry = metric("http.server.request.duration").unwrap();
        assert_eq!(entry.name, "HTTP_SERVER_REQUEST_DURATION");
        assert_eq!(
            entry.kind,
            Kind::Metric {
                instrument: Instrument::Histogram,
                unit: "s"
            }
        );
        assert_eq!(entry.stability, Stability::Stable);
    }

    #[test]
    fn event_metadata() {
        let entry = event("exception").unwrap();
        assert_eq!(entry.name, "EXCEPTION");
        assert!(entry.is_stable());
    }
}
