//! Reads the semantic conventions YAML model into the shapes the renderer needs.
use super::render::const_name;
use super::validate::ModelError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct Model {
    pub attributes: Vec<Attribute>,
    pub metrics: Vec<Metric>,
    pub events: Vec<Event>,
}

#[derive(Debug)]
pub struct Attribute {
    pub key: String,
    pub ty: ValueType,
    pub stable: bool,
    pub brief: String,
    pub note: Option<String>,
    /// Examples already rendered as they appear in docs.
    pub examples: Vec<String>,
    pub members: Vec<Member>,
    pub deprecated: Option<Deprecation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    /// `string`, `int`, `double[]`, `any` and the other non-enum types.
    Plain(String),
    /// `template[...]`, spelled out in full.
    Template(String),
    Enum { int: bool },
}

impl ValueType {
    /// How the type is described in docs.
    pub fn label(&self) -> &str {
        match self {
            ValueType::Plain(name) | ValueType::Template(name) => name,
            ValueType::Enum { int: false } => "string",
            ValueType::Enum { int: true } => "int",
        }
    }

    /// String enums get a `semconv_enum!` type alongside their constants.
    pub fn has_typed_enum(&self) -> bool {
        matches!(self, ValueType::Enum { int: false })
    }

    fn quotes_examples(&self) -> bool {
        matches!(self.label(), "string" | "template[string]")
    }

    fn is_array(&self) -> bool {
        self.label().ends_with("[]") || self.label().ends_with("[]]")
    }
}

#[derive(Debug)]
pub struct Member {
    pub id: String,
    pub value: MemberValue,
    pub stable: bool,
    pub brief: String,
    pub deprecated: Option<Deprecation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberValue {
    Str(String),
    Int(i64),
}

impl fmt::Display for MemberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberValue::Str(s) => f.write_str(s),
            MemberValue::Int(i) => write!(f, "{i}"),
        }
    }
}

#[derive(Debug)]
pub struct Metric {
    pub name: String,
    pub instrument: Instrument,
    pub unit: String,
    pub stable: bool,
    pub brief: String,
    pub note: Option<String>,
    pub deprecated: Option<Deprecation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instrument {
    Counter,
    UpDownCounter,
    Histogram,
    Gauge,
}

impl Instrument {
    fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "counter" => Instrument::Counter,
            "updowncounter" => Instrument::UpDownCounter,
            "histogram" => Instrument::Histogram,
            "gauge" => Instrument::Gauge,
            _ => return None,
        })
    }

    /// Name used by the model and in docs.
    pub fn model_name(self) -> &'static str {
        match self {
            Instrument::Counter => "counter",
            Instrument::UpDownCounter => "updowncounter",
            Instrument::Histogram => "histogram",
            Instrument::Gauge => "gauge",
        }
    }

    /// Variant of `registry::Instrument` in the generated crate.
    pub fn variant(self) -> &'static str {
        match self {
            Instrument::Counter => "Counter",
            Instrument::UpDownCounter => "UpDownCounter",
            Instrument::Histogram => "Histogram",
            Instrument::Gauge => "Gauge",
        }
    }
}

#[derive(Debug)]
pub struct Event {
    pub name: String,
    pub stable: bool,
    pub brief: String,
    pub note: Option<String>,
    pub deprecated: Option<Deprecation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deprecation {
    Renamed(String),
    Obsoleted(Option<String>),
    Uncategorized(Option<String>),
}

impl Deprecation {
    /// Text of the generated `#[deprecated(note = ...)]`.
    pub fn note(&self) -> String {
        match self {
            Deprecation::Renamed(to) => format!("Replaced by `{to}`."),
            Deprecation::Obsoleted(note) => note
                .clone()
                .unwrap_or_else(|| "Removed, no replacement at this time.".to_owned()),
            Deprecation::Uncategorized(note) => note
                .clone()
                .unwrap_or_else(|| "Deprecated, no replacement at this time.".to_owned()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawFile {
    #[serde(default)]
    groups: Vec<RawGroup>,
}

#[derive(Debug, Deserialize)]
struct RawGroup {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    brief: Option<String>,
    note: Option<String>,
    stability: Option<String>,
    deprecated: Option<RawDeprecated>,
    #[serde(default)]
    attributes: Vec<RawAttribute>,
    metric_name: Option<String>,
    instrument: Option<String>,
    unit: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAttribute {
    id: Option<String>,
    #[serde(rename = "type")]
    ty: Option<RawType>,
    brief: Option<String>,
    note: Option<String>,
    stability: Option<String>,
    deprecated: Option<RawDeprecated>,
    examples: Option<serde_yaml::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawType {
    Named(String),
    Enum { members: Vec<RawMember> },
}

#[derive(Debug, Deserialize)]
struct RawMember {
    id: String,
    value: serde_yaml::Value,
    brief: Option<String>,
    stability: Option<String>,
    deprecated: Option<RawDeprecated>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDeprecated {
    Text(String),
    Structured {
        reason: String,
        renamed_to: Option<String>,
        note: Option<String>,
    },
}

/// Loads every `*.yaml`/`*.yml` file below `dir`, in path order.
pub fn load(dir: &Path) -> Result<Model> {
    let mut files = Vec::new();
    collect_yaml(dir, &mut files)
        .with_context(|| format!("failed to list model files in {}", dir.display()))?;
    files.sort();
    if files.is_empty() {
        anyhow::bail!("no model files found in {}", dir.display());
    }

    let mut model = Model::default();
    for path in &files {
        debug!(file = %path.display(), "loading");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let raw: RawFile = serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        model
            .add(raw)
            .with_context(|| format!("invalid model file {}", path.display()))?;
    }
    model.drop_shadowed_deprecations();
    Ok(model)
}

fn collect_yaml(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_yaml(&path, files)?;
        } else if matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        ) {
            files.push(path);
        }
    }
    Ok(())
}

impl Model {
    fn add(&mut self, file: RawFile) -> Result<(), ModelError> {
        for group in file.groups {
            match group.kind.as_str() {
                "attribute_group" => {
                    for attribute in group.attributes {
                        // `ref` entries only point at definitions made elsewhere.
                        if let Some(key) = attribute.id.clone() {
                            self.attributes.push(convert_attribute(key, attribute)?);
                        }
                    }
                }
                "metric" => self.metrics.push(convert_metric(group)?),
                "event" => self.events.push(convert_event(group)),
                other => debug!(group = %group.id, kind = other, "skipping group"),
            }
        }
        Ok(())
    }

    /// Removes deprecated entries that would generate the same constant as a
    /// live one, and deprecated members that reuse a live member's value.
    fn drop_shadowed_deprecations(&mut self) {
        let live: HashSet<String> = self
            .attributes
            .iter()
            .filter(|a| a.deprecated.is_none())
            .map(|a| const_name(&a.key))
            .collect();
        self.attributes.retain(|a| {
            let shadowed = a.deprecated.is_some() && live.contains(&const_name(&a.key));
            if shadowed {
                warn!(attribute = %a.key, "dropping deprecated attribute shadowed by a live one");
            }
            !shadowed
        });

        for attribute in &mut self.attributes {
            let live: HashSet<MemberValue> = attribute
                .members
                .iter()
                .filter(|m| m.deprecated.is_none())
                .map(|m| m.value.clone())
                .collect();
            let key = &attribute.key;
            attribute.members.retain(|m| {
                let shadowed = m.deprecated.is_some() && live.contains(&m.value);
                if shadowed {
                    warn!(attribute = %key, member = %m.id, "dropping deprecated member that reuses a live value");
                }
                !shadowed
            });
        }
    }
}

fn is_stable(stability: Option<&str>) -> bool {
    stability == Some("stable")
}

fn text(value: Option<String>) -> String {
    value.map(|v| escape_brackets(v.trim())).unwrap_or_default()
}

fn note(value: Option<String>) -> Option<String> {
    value
        .map(|v| escape_brackets(v.trim()))
        .filter(|v| !v.is_empty())
}

/// Escapes `[...]` that is not a markdown link so rustdoc does not read it
/// as an intra-doc link.
fn escape_brackets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let (before, from_open) = rest.split_at(open);
        out.push_str(before);
        let escaped = before.ends_with('\\');
        match from_open.find(']') {
            Some(close) if !escaped && !from_open[close + 1..].starts_with('(') => {
                out.push_str("\\[");
                out.push_str(&from_open[1..close]);
                out.push_str("\\]");
                rest = &from_open[close + 1..];
            }
            _ => {
                out.push('[');
                rest = &from_open[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn convert_deprecation(raw: Option<RawDeprecated>) -> Option<Deprecation> {
    let clean = |note: Option<String>| {
        note.map(|n| n.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|n| !n.is_empty())
    };
    raw.map(|raw| match raw {
        RawDeprecated::Text(note) => Deprecation::Uncategorized(clean(Some(note))),
        RawDeprecated::Structured {
            reason,
            renamed_to,
            note,
        } => match (reason.as_str(), renamed_to) {
            ("renamed", Some(to)) => Deprecation::Renamed(to),
            ("obsoleted", _) => Deprecation::Obsoleted(clean(note)),
            _ => Deprecation::Uncategorized(clean(note)),
        },
    })
}

fn convert_attribute(key: String, raw: RawAttribute) -> Result<Attribute, ModelError> {
    let stable = is_stable(raw.stability.as_deref());
    let mut members = Vec::new();
    let ty = match raw.ty {
        None => return Err(ModelError::MissingType(key)),
        Some(RawType::Named(name)) if name.starts_with("template[") => ValueType::Template(name),
        Some(RawType::Named(name)) => ValueType::Plain(name),
        Some(RawType::Enum { members: raw_members }) => {
            for member in raw_members {
                let value = match (&member.value, member.value.as_i64()) {
                    (serde_yaml::Value::String(s), _) => MemberValue::Str(s.clone()),
                    (_, Some(i)) => MemberValue::Int(i),
                    _ => {
                        return Err(ModelError::UnsupportedMemberValue {
                            attribute: key,
                            member: member.id,
                        })
                    }
                };
                members.push(Member {
                    id: member.id,
                    value,
                    stable: member.stability.as_deref().map_or(stable, |s| s == "stable"),
                    brief: text(member.brief),
                    deprecated: convert_deprecation(member.deprecated),
                });
            }
            let ints = members
                .iter()
                .filter(|m| matches!(m.value, MemberValue::Int(_)))
                .count();
            if ints != 0 && ints != members.len() {
                return Err(ModelError::MixedMemberTypes { attribute: key });
            }
            ValueType::Enum {
                int: ints != 0 && ints == members.len(),
            }
        }
    };

    let examples = render_examples(&ty, raw.examples);
    Ok(Attribute {
        key,
        ty,
        stable,
        brief: text(raw.brief),
        note: note(raw.note),
        examples,
        members,
        deprecated: convert_deprecation(raw.deprecated),
    })
}

fn convert_metric(group: RawGroup) -> Result<Metric, ModelError> {
    let missing = |field| ModelError::MissingField {
        group: group.id.clone(),
        field,
    };
    let name = group.metric_name.clone().ok_or_else(|| missing("metric_name"))?;
    let instrument_name = group.instrument.clone().ok_or_else(|| missing("instrument"))?;
    let unit = group.unit.clone().ok_or_else(|| missing("unit"))?;
    let instrument =
        Instrument::parse(&instrument_name).ok_or_else(|| ModelError::UnknownInstrument {
            metric: name.clone(),
            instrument: instrument_name,
        })?;
    Ok(Metric {
        name,
        instrument,
        unit,
        stable: is_stable(group.stability.as_deref()),
        brief: text(group.brief),
        note: note(group.note),
        deprecated: convert_deprecation(group.deprecated),
    })
}

fn convert_event(group: RawGroup) -> Event {
    let name = group.name.unwrap_or_else(|| {
        group
            .id
            .strip_prefix("event.")
            .unwrap_or(&group.id)
            .to_owned()
    });
    Event {
        name,
        stable: is_stable(group.stability.as_deref()),
        brief: text(group.brief),
        note: note(group.note),
        deprecated: convert_deprecation(group.deprecated),
    }
}

/// Each example as shown in docs: strings of string typed attributes are
/// quoted, arrays are written as `[...]`.
fn render_examples(ty: &ValueType, examples: Option<serde_yaml::Value>) -> Vec<String> {
    use serde_yaml::Value;

    let Some(examples) = examples else {
        return Vec::new();
    };
    let items = match examples {
        // A flat list of scalars for an array type is a single example.
        Value::Sequence(items)
            if ty.is_array() && !items.iter().any(|i| matches!(i, Value::Sequence(_))) =>
        {
            vec![Value::Sequence(items)]
        }
        Value::Sequence(items) => items,
        scalar => vec![scalar],
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(s) if ty.quotes_examples() => quote(s),
            Value::String(s) => s.clone(),
            other => flow(other),
        })
        .collect()
}

fn flow(value: &serde_yaml::Value) -> String {
    use serde_yaml::Value;

    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Sequence(items) => {
            let items: Vec<_> = items.iter().map(flow).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let entries: Vec<_> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", flow(k), flow(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => flow(&tagged.value),
    }
}

pub(crate) fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(yaml: &str) -> Result<Model, ModelError> {
        let mut model = Model::default();
        model.add(serde_yaml::from_str(yaml).unwrap())?;
        model.drop_shadowed_deprecations();
        Ok(model)
    }

    #[test]
    fn reads_attribute_groups() {
        let model = parse(
            r#"
groups:
  - id: registry.http
    type: attribute_group
    brief: HTTP attributes.
    attributes:
      - id: http.request.method
        stability: stable
        brief: HTTP request method.
        examples: ["GET", "POST"]
        type:
          members:
            - id: get
              value: "GET"
              brief: GET method.
              stability: stable
            - id: query
              value: "QUERY"
              brief: QUERY method.
              stability: development
            - id: connect
              value: "CONNECT"
              brief: CONNECT method.
      - id: http.request.header
        stability: stable
        type: template[string[]]
        brief: >
          HTTP request headers, `<key>` being the normalized
          header name.
        examples: [["application/json"], ["1.2.3.4", "1.2.3.5"]]
      - ref: server.address
  - id: span.http.client
    type: span
    brief: ignored
"#,
        )
        .unwrap();

        assert_eq!(model.attributes.len(), 2);
        let method = &model.attributes[0];
        assert_eq!(method.ty, ValueType::Enum { int: false });
        assert!(method.stable);
        assert_eq!(method.examples, [r#""GET""#, r#""POST""#]);
        assert_eq!(method.members[0].value, MemberValue::Str("GET".into()));
        assert!(method.members[0].stable);
        assert!(!method.members[1].stable);
        // no stability of its own, so it follows the attribute
        assert!(method.members[2].stable);

        let header = &model.attributes[1];
        assert_eq!(header.ty, ValueType::Template("template[string[]]".into()));
        assert_eq!(
            header.brief,
            "HTTP request headers, `<key>` being the normalized header name."
        );
        assert_eq!(
            header.examples,
            [r#"["application/json"]"#, r#"["1.2.3.4", "1.2.3.5"]"#]
        );
    }

    #[test]
    fn reads_metrics_and_events() {
        let model = parse(
            r#"
groups:
  - id: metric.http.server.request.duration
    type: metric
    metric_name: http.server.request.duration
    instrument: histogram
    unit: "s"
    stability: stable
    brief: Duration of HTTP server requests.
  - id: metric.http.server.duration
    type: metric
    metric_name: http.server.duration
    instrument: histogram
    unit: "ms"
    brief: Old duration.
    deprecated:
      reason: renamed
      renamed_to: http.server.request.duration
  - id: event.session.start
    type: event
    name: session.start
    stability: development
    brief: Session started.
"#,
        )
        .unwrap();

        assert_eq!(model.metrics.len(), 2);
        assert_eq!(model.metrics[0].instrument, Instrument::Histogram);
        assert!(model.metrics[0].stable);
        assert_eq!(
            model.metrics[1].deprecated,
            Some(Deprecation::Renamed("http.server.request.duration".into()))
        );
        assert_eq!(model.events[0].name, "session.start");
        assert!(!model.events[0].stable);
    }

    #[rstest]
    #[case(
        "attributes: [{id: a.b, brief: x}]",
        ModelError::MissingType("a.b".into())
    )]
    #[case(
        "attributes: [{id: a.b, type: {members: [{id: x, value: 1}, {id: y, value: y}]}}]",
        ModelError::MixedMemberTypes { attribute: "a.b".into() }
    )]
    #[case(
        "attributes: [{id: a.b, type: {members: [{id: x, value: 1.5}]}}]",
        ModelError::UnsupportedMemberValue { attribute: "a.b".into(), member: "x".into() }
    )]
    fn rejects_bad_attributes(#[case] attributes: &str, #[case] expected: ModelError) {
        let yaml = format!("groups:\n  - id: registry.a\n    type: attribute_group\n    {attributes}\n");
        assert_eq!(parse(&yaml).unwrap_err(), expected);
    }

    #[test]
    fn rejects_bad_metrics() {
        let err = parse(
            "groups:\n  - {id: metric.a, type: metric, metric_name: a, instrument: meter, unit: '1'}\n",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownInstrument {
                metric: "a".into(),
                instrument: "meter".into()
            }
        );

        let err = parse("groups:\n  - {id: metric.a, type: metric, instrument: gauge, unit: '1'}\n")
            .unwrap_err();
        assert_eq!(err.to_string(), "group `metric.a` has no `metric_name`");
    }

    #[test]
    fn integer_enums() {
        let model = parse(
            r#"
groups:
  - id: registry.rpc
    type: attribute_group
    attributes:
      - id: rpc.grpc.status_code
        type:
          members:
            - {id: ok, value: 0}
            - {id: cancelled, value: 1}
"#,
        )
        .unwrap();
        let status = &model.attributes[0];
        assert_eq!(status.ty, ValueType::Enum { int: true });
        assert_eq!(status.ty.label(), "int");
        assert_eq!(status.members[1].value, MemberValue::Int(1));
    }

    #[test]
    fn drops_shadowed_deprecations() {
        let model = parse(
            r#"
groups:
  - id: registry.feature_flag
    type: attribute_group
    attributes:
      - id: feature_flag.provider.name
        type: string
      - id: feature_flag.provider_name
        type: string
        deprecated: {reason: renamed, renamed_to: feature_flag.provider.name}
      - id: gen_ai.token.type
        type:
          members:
            - {id: input, value: input}
            - {id: output, value: output}
            - {id: completion, value: output, deprecated: {reason: renamed, renamed_to: output}}
"#,
        )
        .unwrap();
        let keys: Vec<_> = model.attributes.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, ["feature_flag.provider.name", "gen_ai.token.type"]);
        let members: Vec<_> = model.attributes[1]
            .members
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(members, ["input", "output"]);
    }

    #[rstest]
    #[case("The logical CPU number [0..n-1]", r"The logical CPU number \[0..n-1\]")]
    #[case("See [CQL](https://cassandra.apache.org/).", "See [CQL](https://cassandra.apache.org/).")]
    #[case(r"Already \[escaped\]", r"Already \[escaped\]")]
    #[case("Unclosed [bracket", "Unclosed [bracket")]
    fn escapes_brackets(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_brackets(input), expected);
    }

    #[rstest]
    #[case(Some(RawDeprecated::Text("Use x.".into())), Some(Deprecation::Uncategorized(Some("Use x.".into()))))]
    #[case(
        Some(RawDeprecated::Structured { reason: "obsoleted".into(), renamed_to: None, note: Some("Gone\n for good.".into()) }),
        Some(Deprecation::Obsoleted(Some("Gone for good.".into())))
    )]
    #[case(
        Some(RawDeprecated::Structured { reason: "renamed".into(), renamed_to: None, note: None }),
        Some(Deprecation::Uncategorized(None))
    )]
    #[case(None, None)]
    fn deprecations(#[case] raw: Option<RawDeprecated>, #[case] expected: Option<Deprecation>) {
        assert_eq!(convert_deprecation(raw), expected);
    }

    #[test]
    fn deprecation_notes() {
        assert_eq!(
            Deprecation::Renamed("url.full".into()).note(),
            "Replaced by `url.full`."
        );
        assert_eq!(
            Deprecation::Obsoleted(None).note(),
            "Removed, no replacement at this time."
        );
        assert_eq!(
            Deprecation::Uncategorized(Some("Split in two.".into())).note(),
            "Split in two."
        );
    }

    #[test]
    fn load_walks_directories_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b/nested")).unwrap();
        fs::write(
            dir.path().join("b/nested/registry.yml"),
            "groups:\n  - {id: registry.b, type: attribute_group, attributes: [{id: b.x, type: int}]}\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("a.yaml"),
            "groups:\n  - {id: registry.a, type: attribute_group, attributes: [{id: a.x, type: string}]}\n",
        )
        .unwrap();
        fs::write(dir.path().join("README.md"), "not yaml").unwrap();

        let model = load(dir.path()).unwrap();
        let keys: Vec<_> = model.attributes.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, ["a.x", "b.x"]);
    }

    #[test]
    fn load_reports_the_failing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.yaml"), "groups: [").unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("broken.yaml"), "{err:#}");

        let empty = tempfile::tempdir().unwrap();
        assert!(load(empty.path()).is_err());
    }
}
