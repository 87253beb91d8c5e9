use super::model::{Deprecation, Model};
use super::render::{const_name, type_name};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use tracing::warn;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("attribute `{0}` is defined more than once")]
    DuplicateAttribute(String),
    #[error("metric `{0}` is defined more than once")]
    DuplicateMetric(String),
    #[error("event `{0}` is defined more than once")]
    DuplicateEvent(String),
    #[error("`{attribute}` lists member `{member}` more than once")]
    DuplicateMember { attribute: String, member: String },
    #[error("`{attribute}` lists value `{value}` more than once")]
    DuplicateValue { attribute: String, value: String },
    #[error("`{attribute}` mixes string and integer member values")]
    MixedMemberTypes { attribute: String },
    #[error("member `{member}` of `{attribute}` must have a string or integer value")]
    UnsupportedMemberValue { attribute: String, member: String },
    #[error("attribute `{0}` has no type")]
    MissingType(String),
    #[error("group `{group}` has no `{field}`")]
    MissingField { group: String, field: &'static str },
    #[error("metric `{metric}` uses unknown instrument `{instrument}`")]
    UnknownInstrument { metric: String, instrument: String },
    #[error("`{0}` is not a valid key")]
    InvalidKey(String),
    #[error("`{key}` does not map to a Rust identifier (got `{identifier}`)")]
    InvalidIdentifier { key: String, identifier: String },
    #[error("`{first}` and `{second}` both generate `{identifier}`")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },
}

/// Every problem found in one model.
#[derive(Debug)]
pub struct ModelErrors(pub Vec<ModelError>);

impl fmt::Display for ModelErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model has {} error(s)", self.0.len())?;
        for error in &self.0 {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ModelErrors {}

/// Checks the invariants the generated code relies on.
///
/// Renames pointing at keys the model does not define are logged and
/// otherwise accepted.
pub fn validate(model: &Model) -> Result<(), ModelErrors> {
    let mut errors = Vec::new();

    let mut keys = HashSet::new();
    let mut identifiers = Identifiers::default();
    let mut type_names = Identifiers::default();
    for attribute in &model.attributes {
        if !keys.insert(attribute.key.as_str()) {
            errors.push(ModelError::DuplicateAttribute(attribute.key.clone()));
            continue;
        }
        if !is_key(&attribute.key) {
            errors.push(ModelError::InvalidKey(attribute.key.clone()));
            continue;
        }

        let name = const_name(&attribute.key);
        identifiers.claim(&name, &attribute.key, &mut errors);

        let mut ids = HashSet::new();
        let mut values = HashSet::new();
        let mut variants = Identifiers::default();
        for member in &attribute.members {
            if !ids.insert(member.id.as_str()) {
                errors.push(ModelError::DuplicateMember {
                    attribute: attribute.key.clone(),
                    member: member.id.clone(),
                });
            }
            if !values.insert(member.value.to_string()) {
                errors.push(ModelError::DuplicateValue {
                    attribute: attribute.key.clone(),
                    value: member.value.to_string(),
                });
            }

            let suffix = const_name(&member.id);
            let owner = format!("{}.{}", attribute.key, member.id);
            if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
                errors.push(ModelError::InvalidIdentifier {
                    key: owner,
                    identifier: suffix,
                });
                continue;
            }
            identifiers.claim(&format!("{name}_VALUE_{suffix}"), &owner, &mut errors);
            if attribute.ty.has_typed_enum() {
                variants.claim(&type_name(&member.id), &owner, &mut errors);
            }
        }

        if attribute.ty.has_typed_enum() && attribute.deprecated.is_none() {
            type_names.claim(&type_name(&attribute.key), &attribute.key, &mut errors);
        }
    }

    let mut metrics = HashSet::new();
    let mut metric_identifiers = Identifiers::default();
    for metric in &model.metrics {
        if !metrics.insert(metric.name.as_str()) {
            errors.push(ModelError::DuplicateMetric(metric.name.clone()));
        } else if !is_key(&metric.name) {
            errors.push(ModelError::InvalidKey(metric.name.clone()));
        } else {
            metric_identifiers.claim(&const_name(&metric.name), &metric.name, &mut errors);
        }
    }

    let mut events = HashSet::new();
    let mut event_identifiers = Identifiers::default();
    for event in &model.events {
        if !events.insert(event.name.as_str()) {
            errors.push(ModelError::DuplicateEvent(event.name.clone()));
        } else if !is_key(&event.name) {
            errors.push(ModelError::InvalidKey(event.name.clone()));
        } else {
            event_identifiers.claim(&const_name(&event.name), &event.name, &mut errors);
        }
    }

    for attribute in &model.attributes {
        if let Some(Deprecation::Renamed(to)) = &attribute.deprecated {
            if !keys.contains(to.as_str()) {
                warn!(attribute = %attribute.key, renamed_to = %to, "rename target is not defined");
            }
        }
    }
    for metric in &model.metrics {
        if let Some(Deprecation::Renamed(to)) = &metric.deprecated {
            if !metrics.contains(to.as_str()) {
                warn!(metric = %metric.name, renamed_to = %to, "rename target is not defined");
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ModelErrors(errors))
    }
}

/// Generated identifiers and the key that first produced each.
#[derive(Default)]
struct Identifiers(BTreeMap<String, String>);

impl Identifiers {
    fn claim(&mut self, identifier: &str, owner: &str, errors: &mut Vec<ModelError>) {
        if let Some(first) = self.0.get(identifier) {
            errors.push(ModelError::IdentifierCollision {
                identifier: identifier.to_owned(),
                first: first.clone(),
                second: owner.to_owned(),
            });
        } else {
            self.0.insert(identifier.to_owned(), owner.to_owned());
        }
    }
}

fn is_key(key: &str) -> bool {
    !key.is_empty()
        && key.split('.').all(|segment| {
            matches!(segment.bytes().next(), Some(b'a'..=b'z'))
                && segment
                    .bytes()
                    .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semconv::model::{
        Attribute, Event, Instrument, Member, MemberValue, Metric, ValueType,
    };

    fn attribute(key: &str) -> Attribute {
        Attribute {
            key: key.to_owned(),
            ty: ValueType::Plain("string".to_owned()),
            stable: true,
            brief: String::new(),
            note: None,
            examples: Vec::new(),
            members: Vec::new(),
            deprecated: None,
        }
    }

    fn enumeration(key: &str, members: &[(&str, &str)]) -> Attribute {
        Attribute {
            ty: ValueType::Enum { int: false },
            members: members
                .iter()
                .map(|(id, value)| Member {
                    id: (*id).to_owned(),
                    value: MemberValue::Str((*value).to_owned()),
                    stable: true,
                    brief: String::new(),
                    deprecated: None,
                })
                .collect(),
            ..attribute(key)
        }
    }

    fn metric(name: &str) -> Metric {
        Metric {
            name: name.to_owned(),
            instrument: Instrument::Counter,
            unit: "1".to_owned(),
            stable: true,
            brief: String::new(),
            note: None,
            deprecated: None,
        }
    }

    fn event(name: &str) -> Event {
        Event {
            name: name.to_owned(),
            stable: true,
            brief: String::new(),
            note: None,
            deprecated: None,
        }
    }

    fn errors(model: Model) -> Vec<ModelError> {
        validate(&model).map(|()| Vec::new()).unwrap_or_else(|e| e.0)
    }

    #[test]
    fn accepts_a_consistent_model() {
        let model = Model {
            attributes: vec![
                attribute("http.route"),
                enumeration("http.request.method", &[("get", "GET"), ("other", "_OTHER")]),
            ],
            metrics: vec![metric("http.server.request.duration")],
            events: vec![event("exception")],
        };
        assert!(validate(&model).is_ok());
    }

    #[test]
    fn reports_duplicates() {
        let model = Model {
            attributes: vec![
                attribute("http.route"),
                attribute("http.route"),
                enumeration("os.type", &[("linux", "linux"), ("linux", "gnu"), ("gnu", "linux")]),
            ],
            metrics: vec![metric("a.b"), metric("a.b")],
            events: vec![event("exception"), event("exception")],
        };
        assert_eq!(
            errors(model),
            [
                ModelError::DuplicateAttribute("http.route".into()),
                ModelError::DuplicateMember {
                    attribute: "os.type".into(),
                    member: "linux".into(),
                },
                ModelError::IdentifierCollision {
                    identifier: "OS_TYPE_VALUE_LINUX".into(),
                    first: "os.type.linux".into(),
                    second: "os.type.linux".into(),
                },
                ModelError::IdentifierCollision {
                    identifier: "Linux".into(),
                    first: "os.type.linux".into(),
                    second: "os.type.linux".into(),
                },
                ModelError::DuplicateValue {
                    attribute: "os.type".into(),
                    value: "linux".into(),
                },
                ModelError::DuplicateMetric("a.b".into()),
                ModelError::DuplicateEvent("exception".into()),
            ]
        );
    }

    #[test]
    fn reports_identifier_collisions() {
        let model = Model {
            attributes: vec![
                attribute("feature_flag.provider.name"),
                attribute("feature_flag.provider_name"),
                attribute("k8s.pod-name"),
                attribute("k8s.pod_name"),
            ],
            ..Model::default()
        };
        let found = errors(model);
        assert_eq!(found.len(), 2);
        assert_eq!(
            found[0].to_string(),
            "`feature_flag.provider.name` and `feature_flag.provider_name` both generate `FEATURE_FLAG_PROVIDER_NAME`"
        );
    }

    #[test]
    fn reports_invalid_keys() {
        let model = Model {
            attributes: vec![attribute("Http.Route"), attribute("http..route")],
            metrics: vec![metric("")],
            ..Model::default()
        };
        assert_eq!(
            errors(model),
            [
                ModelError::InvalidKey("Http.Route".into()),
                ModelError::InvalidKey("http..route".into()),
                ModelError::InvalidKey("".into()),
            ]
        );
    }

    #[test]
    fn dangling_renames_are_not_errors() {
        let mut renamed = attribute("http.method");
        renamed.deprecated = Some(Deprecation::Renamed("http.request.method".into()));
        let model = Model {
            attributes: vec![renamed],
            ..Model::default()
        };
        assert!(validate(&model).is_ok());
    }

    #[test]
    fn errors_are_listed() {
        let errors = ModelErrors(vec![
            ModelError::DuplicateMetric("a.b".into()),
            ModelError::MissingType("c.d".into()),
        ]);
        assert_eq!(
            errors.to_string(),
            "model has 2 error(s)\n  - metric `a.b` is defined more than once\n  - attribute `c.d` has no type"
        );
    }
}
