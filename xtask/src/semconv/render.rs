//! Turns a validated model into the generated modules of the semconv crate.
//!
//! The output is laid out the way rustfmt would lay it out, so regenerated
//! files pass `cargo fmt --check` untouched.
use super::config::Config;
use super::model::{quote, Attribute, Deprecation, Event, Metric, Model, ValueType};
use std::collections::BTreeMap;
use std::path::PathBuf;

const HEADER: &str = "// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.
";

const MAX_WIDTH: usize = 100;

const EXPERIMENTAL: &str = "#[cfg(feature = \"semconv_experimental\")]";

const ATTRIBUTE_MOD_DOC: &str = "//! # Semantic Attributes
//!
//! Every attribute key defined by the semantic conventions, grouped into one
//! module per domain and re-exported here.
//!
//! ## Usage
//!
//! ```rust
//! use opentelemetry_semconv::attribute;
//!
//! assert_eq!(attribute::HTTP_REQUEST_METHOD, \"http.request.method\");
//! assert_eq!(attribute::HTTP_REQUEST_METHOD_VALUE_GET, \"GET\");
//! assert_eq!(
//!     attribute::http_request_header(\"accept\"),
//!     \"http.request.header.accept\"
//! );
//! ```";

const METRIC_MOD_DOC: &str = "//! # Metric Semantic Conventions
//!
//! Instrument names defined by the semantic conventions, grouped into one
//! module per domain and re-exported here.
//!
//! ## Usage
//!
//! ```rust
//! use opentelemetry_semconv::metric;
//!
//! assert_eq!(
//!     metric::HTTP_SERVER_REQUEST_DURATION,
//!     \"http.server.request.duration\"
//! );
//! ```";

/// A file to write, relative to the crate's `src` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// `http.request.method` to `HTTP_REQUEST_METHOD`.
pub fn const_name(key: &str) -> String {
    key.replace(['.', '-'], "_").to_ascii_uppercase()
}

/// `http.request.method` to `HttpRequestMethod`, `1.0` to `V10`.
pub fn type_name(key: &str) -> String {
    let mut out: String = key
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars
                .next()
                .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
                .unwrap_or_default()
        })
        .collect();
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, 'V');
    }
    out
}

/// Renders every generated file, sorted by path.
pub fn render(config: &Config, model: &Model) -> Vec<GeneratedFile> {
    let mut attributes: BTreeMap<&str, Vec<&Attribute>> = BTreeMap::new();
    for attribute in &model.attributes {
        attributes
            .entry(config.domain_of(&attribute.key))
            .or_default()
            .push(attribute);
    }
    let mut metrics: BTreeMap<&str, Vec<&Metric>> = BTreeMap::new();
    for metric in &model.metrics {
        metrics
            .entry(config.domain_of(&metric.name))
            .or_default()
            .push(metric);
    }

    let mut files = Vec::new();
    for (domain, items) in &attributes {
        let keys: Vec<_> = items.iter().map(|a| a.key.as_str()).collect();
        files.push(GeneratedFile {
            path: PathBuf::from("attribute").join(format!("{domain}.rs")),
            contents: attribute_domain(&config.namespaces(domain, &keys), items),
        });
    }
    for (domain, items) in &metrics {
        let keys: Vec<_> = items.iter().map(|m| m.name.as_str()).collect();
        files.push(GeneratedFile {
            path: PathBuf::from("metric").join(format!("{domain}.rs")),
            contents: metric_domain(&config.namespaces(domain, &keys), items),
        });
    }
    let mut typed_enums = Vec::new();
    for (domain, items) in &attributes {
        let mut items = items.clone();
        items.sort_by(|a, b| a.key.cmp(&b.key));
        for attribute in items {
            if attribute.ty.has_typed_enum() && attribute.deprecated.is_none() {
                typed_enums.push(Exported {
                    path: format!("{domain}::{}", type_name(&attribute.key)),
                    stable: attribute.stable,
                });
            }
        }
    }
    let attribute_modules: Vec<_> = attributes
        .iter()
        .map(|(domain, items)| Exported {
            path: domain.to_string(),
            stable: items.iter().any(|a| a.stable),
        })
        .collect();
    let metric_modules: Vec<_> = metrics
        .iter()
        .map(|(domain, items)| Exported {
            path: domain.to_string(),
            stable: items.iter().any(|m| m.stable),
        })
        .collect();
    files.push(GeneratedFile {
        path: PathBuf::from("attribute/mod.rs"),
        contents: kind_module(ATTRIBUTE_MOD_DOC, &attribute_modules, &typed_enums),
    });
    files.push(GeneratedFile {
        path: PathBuf::from("metric/mod.rs"),
        contents: kind_module(METRIC_MOD_DOC, &metric_modules, &[]),
    });
    files.push(GeneratedFile {
        path: PathBuf::from("event.rs"),
        contents: events(&model.events),
    });
    files.push(GeneratedFile {
        path: PathBuf::from("version.rs"),
        contents: version(config),
    });
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

/// Collects lines and joins them with a trailing newline.
#[derive(Default)]
struct Lines(Vec<String>);

impl Lines {
    fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.0.extend(lines);
    }

    fn docs(&mut self, text: &str, indent: &str) {
        for line in text.trim().split('\n') {
            let line = line.trim_end();
            if line.is_empty() {
                self.push(format!("{indent}///"));
            } else {
                self.push(format!("{indent}/// {line}"));
            }
        }
    }

    fn finish(self) -> String {
        self.0.join("\n") + "\n"
    }
}

fn width(line: &str) -> usize {
    line.chars().count()
}

fn constant(name: &str, ty: &str, value: &str) -> Vec<String> {
    let line = format!("pub const {name}: {ty} = {value};");
    if width(&line) <= MAX_WIDTH {
        vec![line]
    } else {
        vec![format!("pub const {name}: {ty} ="), format!("    {value};")]
    }
}

fn deprecated_attribute(deprecation: &Deprecation, indent: &str) -> String {
    format!("{indent}#[deprecated(note = {})]", quote(&deprecation.note()))
}

fn deprecated_chain(deprecation: Option<&Deprecation>) -> Option<String> {
    deprecation.map(|d| match d {
        Deprecation::Renamed(to) => format!(".deprecated(Renamed({}))", quote(to)),
        Deprecation::Obsoleted(_) => ".deprecated(Obsoleted)".to_owned(),
        Deprecation::Uncategorized(_) => ".deprecated(Uncategorized)".to_owned(),
    })
}

/// One element of an `ENTRIES` slice.
fn entry(call: &str, args: &[String], chain: Option<String>) -> Vec<String> {
    let head = format!("    {call}({})", args.join(", "));
    let spread = || {
        let mut lines = vec![format!("    {call}(")];
        lines.extend(args.iter().map(|arg| format!("        {arg},")));
        lines
    };
    match chain {
        None if width(&head) < MAX_WIDTH => vec![head + ","],
        None => {
            let mut lines = spread();
            lines.push("    ),".to_owned());
            lines
        }
        Some(chain) if width(&head) + width(&chain) < MAX_WIDTH => {
            vec![format!("{head}{chain},")]
        }
        Some(chain) if width(&head) <= MAX_WIDTH => vec![head, format!("        {chain},")],
        Some(chain) => {
            let mut lines = spread();
            lines.push("    )".to_owned());
            lines.push(format!("    {chain},"));
            lines
        }
    }
}

fn stability(stable: bool) -> String {
    let name = if stable { "Stable" } else { "Experimental" };
    name.to_owned()
}

fn registry_import(deprecated: bool, extra: &[&str]) -> String {
    let mut names = Vec::new();
    if deprecated {
        names.push("Deprecated::*");
    }
    names.push("Entry");
    names.extend_from_slice(extra);
    names.push("Stability::*");
    format!("use crate::registry::{{{}}};", names.join(", "))
}

fn module_doc(kind: &str, namespaces: &[&str]) -> String {
    let listed: Vec<_> = namespaces.iter().map(|n| format!("`{n}`")).collect();
    let plural = if namespaces.len() > 1 { "s" } else { "" };
    format!("//! {kind} of the {} namespace{plural}.", listed.join(", "))
}

fn attribute_domain(namespaces: &[&str], attributes: &[&Attribute]) -> String {
    let mut attributes = attributes.to_vec();
    attributes.sort_by(|a, b| a.key.cmp(&b.key));
    let deprecated = attributes
        .iter()
        .any(|a| a.deprecated.is_some() || a.members.iter().any(|m| m.deprecated.is_some()));

    let mut out = Lines::default();
    out.push(HEADER);
    out.push(module_doc("Attributes", namespaces));
    out.push("");
    out.push(registry_import(deprecated, &[]));
    out.push("");

    let mut entries = Vec::new();
    for attribute in attributes {
        let name = const_name(&attribute.key);
        out.docs(&attribute.brief, "");
        if let Some(note) = &attribute.note {
            out.push("///");
            out.docs(note, "");
        }
        out.push("///");
        let mut type_line = format!("/// Type: `{}`.", attribute.ty.label());
        if !attribute.examples.is_empty() {
            let examples: Vec<_> = attribute.examples.iter().map(|e| format!("`{e}`")).collect();
            type_line.push_str(&format!(" Examples: {}.", examples.join(", ")));
        }
        out.push(type_line);
        if !attribute.stable {
            out.push(EXPERIMENTAL);
        }
        if let Some(deprecation) = &attribute.deprecated {
            out.push(deprecated_attribute(deprecation, ""));
        }
        out.extend(constant(&name, "&str", &quote(&attribute.key)));
        out.push("");

        let is_template = matches!(attribute.ty, ValueType::Template(_));
        let call = if is_template {
            "Entry::template"
        } else {
            "Entry::attribute"
        };
        entries.extend(entry(
            call,
            &[quote(&name), quote(&attribute.key), stability(attribute.stable)],
            deprecated_chain(attribute.deprecated.as_ref()),
        ));

        if is_template {
            out.push(format!("/// Builds a [`{name}`] key for `key`."));
            if !attribute.stable {
                out.push(EXPERIMENTAL);
            }
            if let Some(deprecation) = &attribute.deprecated {
                out.push(deprecated_attribute(deprecation, ""));
                out.push("#[allow(deprecated)]");
            }
            out.push(format!(
                "pub fn {}(key: &str) -> String {{",
                name.to_ascii_lowercase()
            ));
            out.push(format!("    crate::templated({name}, key)"));
            out.push("}");
            out.push("");
        }

        let int = matches!(attribute.ty, ValueType::Enum { int: true });
        for member in &attribute.members {
            let value_name = format!("{name}_VALUE_{}", const_name(&member.id));
            out.docs(&member.brief, "");
            if !(attribute.stable && member.stable) {
                out.push(EXPERIMENTAL);
            }
            if let Some(deprecation) = &member.deprecated {
                out.push(deprecated_attribute(deprecation, ""));
            }
            let chain = deprecated_chain(member.deprecated.as_ref());
            let value = member.value.to_string();
            if int {
                out.extend(constant(&value_name, "i64", &value));
                entries.extend(entry(
                    "Entry::int_value",
                    &[
                        quote(&value_name),
                        quote(&attribute.key),
                        value,
                        stability(member.stable),
                    ],
                    chain,
                ));
            } else {
                out.extend(constant(&value_name, "&str", &quote(&value)));
                entries.extend(entry(
                    "Entry::value",
                    &[
                        quote(&value_name),
                        quote(&attribute.key),
                        quote(&value),
                        stability(member.stable),
                    ],
                    chain,
                ));
            }
            out.push("");
        }

        if attribute.ty.has_typed_enum() && attribute.deprecated.is_none() {
            if !attribute.stable {
                out.push(EXPERIMENTAL);
            }
            out.push("semconv_enum! {");
            out.push(format!("    /// Values of [`{name}`]."));
            out.push(format!("    {} for {name} {{", type_name(&attribute.key)));
            for member in &attribute.members {
                out.docs(&member.brief, "        ");
                if let Some(deprecation) = &member.deprecated {
                    out.push("        ///");
                    out.docs(&format!("Deprecated: {}", deprecation.note()), "        ");
                }
                out.push(format!(
                    "        {} = {},",
                    type_name(&member.id),
                    quote(&member.value.to_string())
                ));
            }
            out.push("    }");
            out.push("}");
            out.push("");
        }
    }

    out.push("pub(crate) static ENTRIES: &[Entry] = &[");
    out.extend(entries);
    out.push("];");
    out.finish()
}

fn metric_domain(namespaces: &[&str], metrics: &[&Metric]) -> String {
    let mut metrics = metrics.to_vec();
    metrics.sort_by(|a, b| a.name.cmp(&b.name));
    let deprecated = metrics.iter().any(|m| m.deprecated.is_some());

    let mut out = Lines::default();
    out.push(HEADER);
    out.push(module_doc("Metrics", namespaces));
    out.push("");
    out.push(registry_import(deprecated, &["Instrument::*"]));
    out.push("");

    let mut entries = Vec::new();
    for metric in metrics {
        let name = const_name(&metric.name);
        out.docs(&metric.brief, "");
        if let Some(note) = &metric.note {
            out.push("///");
            out.docs(note, "");
        }
        out.push("///");
        out.push(format!(
            "/// Instrument: `{}`. Unit: `{}`.",
            metric.instrument.model_name(),
            metric.unit
        ));
        if !metric.stable {
            out.push(EXPERIMENTAL);
        }
        if let Some(deprecation) = &metric.deprecated {
            out.push(deprecated_attribute(deprecation, ""));
        }
        out.extend(constant(&name, "&str", &quote(&metric.name)));
        out.push("");
        entries.extend(entry(
            "Entry::metric",
            &[
                quote(&name),
                quote(&metric.name),
                metric.instrument.variant().to_owned(),
                quote(&metric.unit),
                stability(metric.stable),
            ],
            deprecated_chain(metric.deprecated.as_ref()),
        ));
    }

    out.push("pub(crate) static ENTRIES: &[Entry] = &[");
    out.extend(entries);
    out.push("];");
    out.finish()
}

fn events(events: &[Event]) -> String {
    let mut events: Vec<_> = events.iter().collect();
    events.sort_by(|a, b| a.name.cmp(&b.name));
    let deprecated = events.iter().any(|e| e.deprecated.is_some());

    let mut out = Lines::default();
    out.push(HEADER);
    out.push("//! # Event Semantic Conventions");
    out.push("//!");
    out.push("//! Names of the events defined by the semantic conventions.");
    out.push("");
    out.push(registry_import(deprecated, &[]));
    out.push("");

    let mut entries = Vec::new();
    for event in events {
        let name = const_name(&event.name);
        out.docs(&event.brief, "");
        if let Some(note) = &event.note {
            out.push("///");
            out.docs(note, "");
        }
        if !event.stable {
            out.push(EXPERIMENTAL);
        }
        if let Some(deprecation) = &event.deprecated {
            out.push(deprecated_attribute(deprecation, ""));
        }
        out.extend(constant(&name, "&str", &quote(&event.name)));
        out.push("");
        entries.extend(entry(
            "Entry::event",
            &[quote(&name), quote(&event.name), stability(event.stable)],
            deprecated_chain(event.deprecated.as_ref()),
        ));
    }

    out.push("pub(crate) static ENTRIES: &[Entry] = &[");
    out.extend(entries);
    out.push("];");
    out.finish()
}

/// A domain module or typed enum named from a kind module.
struct Exported {
    path: String,
    /// Whether it is public without `semconv_experimental`.
    stable: bool,
}

fn kind_module(doc: &str, domains: &[Exported], typed_enums: &[Exported]) -> String {
    let mut out = Lines::default();
    out.push(HEADER);
    out.push(doc);
    out.push("");
    out.extend(domains.iter().map(|d| format!("pub mod {};", d.path)));
    out.push("");
    // a glob over a module with nothing public re-exports nothing
    for domain in domains {
        if !domain.stable {
            out.push(EXPERIMENTAL);
        }
        out.push(format!("pub use self::{}::*;", domain.path));
    }
    out.push("");
    out.push("pub(crate) static DOMAINS: &[&[crate::registry::Entry]] = &[");
    out.extend(domains.iter().map(|d| format!("    {}::ENTRIES,", d.path)));
    out.push("];");
    if !typed_enums.is_empty() {
        out.push("");
        out.push("#[cfg(test)]");
        out.push("pub(crate) static TYPED_ENUMS: &[crate::value::EnumLiterals] = &[");
        for typed in typed_enums {
            if !typed.stable {
                out.push(format!("    {EXPERIMENTAL}"));
            }
            out.push(format!("    crate::value::literals::<{}>,", typed.path));
        }
        out.push("];");
    }
    out.finish()
}

fn version(config: &Config) -> String {
    let mut out = Lines::default();
    out.push(HEADER);
    out.push("/// The semantic conventions release these constants were generated from.");
    out.push(format!(
        "pub const SEMCONV_VERSION: &str = {};",
        quote(&config.version)
    ));
    out.push("");
    out.push("/// The schema URL matching [`SEMCONV_VERSION`].");
    out.extend(constant("SCHEMA_URL", "&str", &quote(&config.schema_url())));
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semconv::model::{Instrument, Member, MemberValue};
    use rstest::rstest;

    #[rstest]
    #[case("http.request.method", "HTTP_REQUEST_METHOD")]
    #[case("k8s.pod.uid", "K8S_POD_UID")]
    #[case("cicd.pipeline.task.run.url-full", "CICD_PIPELINE_TASK_RUN_URL_FULL")]
    fn const_names(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(const_name(key), expected);
    }

    #[rstest]
    #[case("http.request.method", "HttpRequestMethod")]
    #[case("gcp.vertex_ai", "GcpVertexAi")]
    #[case("1.1", "V11")]
    #[case("_OTHER", "OTHER")]
    fn type_names(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(type_name(key), expected);
    }

    #[test]
    fn long_constants_wrap() {
        assert_eq!(constant("A", "&str", "\"a\""), ["pub const A: &str = \"a\";"]);
        let long = "x".repeat(90);
        assert_eq!(
            constant("LONG", "&str", &quote(&long)),
            ["pub const LONG: &str =".to_owned(), format!("    \"{long}\";")]
        );
    }

    #[test]
    fn entries_wrap_like_rustfmt() {
        let args = [quote("URL_FULL"), quote("url.full"), "Stable".to_owned()];
        assert_eq!(
            entry("Entry::attribute", &args, None),
            [r#"    Entry::attribute("URL_FULL", "url.full", Stable),"#]
        );

        let args = [
            quote("HTTP_CLIENT_IP"),
            quote("http.client_ip"),
            "Experimental".to_owned(),
        ];
        assert_eq!(
            entry(
                "Entry::attribute",
                &args,
                Some(r#".deprecated(Renamed("client.address"))"#.to_owned())
            ),
            [
                r#"    Entry::attribute("HTTP_CLIENT_IP", "http.client_ip", Experimental)"#,
                r#"        .deprecated(Renamed("client.address")),"#,
            ]
        );

        let args = [
            quote("HTTP_CONNECTION_STATE_VALUE_ACTIVE"),
            quote("http.connection.state"),
            quote("active"),
            "Experimental".to_owned(),
        ];
        assert_eq!(
            entry("Entry::value", &args, None),
            [
                "    Entry::value(",
                r#"        "HTTP_CONNECTION_STATE_VALUE_ACTIVE","#,
                r#"        "http.connection.state","#,
                r#"        "active","#,
                "        Experimental,",
                "    ),",
            ]
        );
    }

    #[test]
    fn renders_typed_enums() {
        let attribute = Attribute {
            key: "network.transport".into(),
            ty: ValueType::Enum { int: false },
            stable: true,
            brief: "Transport protocol.".into(),
            note: None,
            examples: vec![r#""tcp""#.into()],
            members: vec![
                Member {
                    id: "tcp".into(),
                    value: MemberValue::Str("tcp".into()),
                    stable: true,
                    brief: "TCP".into(),
                    deprecated: None,
                },
                Member {
                    id: "sctp".into(),
                    value: MemberValue::Str("sctp".into()),
                    stable: false,
                    brief: "SCTP".into(),
                    deprecated: Some(Deprecation::Obsoleted(None)),
                },
            ],
            deprecated: None,
        };
        let rendered = attribute_domain(&["network"], &[&attribute]);
        let expected = format!(
            r#"{HEADER}
//! Attributes of the `network` namespace.

use crate::registry::{{Deprecated::*, Entry, Stability::*}};

/// Transport protocol.
///
/// Type: `string`. Examples: `"tcp"`.
pub const NETWORK_TRANSPORT: &str = "network.transport";

/// TCP
pub const NETWORK_TRANSPORT_VALUE_TCP: &str = "tcp";

/// SCTP
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed, no replacement at this time.")]
pub const NETWORK_TRANSPORT_VALUE_SCTP: &str = "sctp";

semconv_enum! {{
    /// Values of [`NETWORK_TRANSPORT`].
    NetworkTransport for NETWORK_TRANSPORT {{
        /// TCP
        Tcp = "tcp",
        /// SCTP
        ///
        /// Deprecated: Removed, no replacement at this time.
        Sctp = "sctp",
    }}
}}

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("NETWORK_TRANSPORT", "network.transport", Stable),
    Entry::value("NETWORK_TRANSPORT_VALUE_TCP", "network.transport", "tcp", Stable),
    Entry::value("NETWORK_TRANSPORT_VALUE_SCTP", "network.transport", "sctp", Experimental)
        .deprecated(Obsoleted),
];
"#
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn renders_templates_and_integer_values() {
        let template = Attribute {
            key: "rpc.grpc.request.metadata".into(),
            ty: ValueType::Template("template[string[]]".into()),
            stable: false,
            brief: "gRPC request metadata.".into(),
            note: Some("First line.\n\nSecond paragraph.".into()),
            examples: vec![r#"["1.2.3.4"]"#.into()],
            members: Vec::new(),
            deprecated: None,
        };
        let status = Attribute {
            key: "rpc.grpc.status_code".into(),
            ty: ValueType::Enum { int: true },
            stable: false,
            brief: "Status code.".into(),
            note: None,
            examples: Vec::new(),
            members: vec![Member {
                id: "ok".into(),
                value: MemberValue::Int(0),
                stable: false,
                brief: "OK".into(),
                deprecated: None,
            }],
            deprecated: None,
        };
        let rendered = attribute_domain(&["rpc"], &[&status, &template]);
        let expected = format!(
            r#"{HEADER}
//! Attributes of the `rpc` namespace.

use crate::registry::{{Entry, Stability::*}};

/// gRPC request metadata.
///
/// First line.
///
/// Second paragraph.
///
/// Type: `template[string[]]`. Examples: `["1.2.3.4"]`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_REQUEST_METADATA: &str = "rpc.grpc.request.metadata";

/// Builds a [`RPC_GRPC_REQUEST_METADATA`] key for `key`.
#[cfg(feature = "semconv_experimental")]
pub fn rpc_grpc_request_metadata(key: &str) -> String {{
    crate::templated(RPC_GRPC_REQUEST_METADATA, key)
}}

/// Status code.
///
/// Type: `int`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE: &str = "rpc.grpc.status_code";

/// OK
#[cfg(feature = "semconv_experimental")]
pub const RPC_GRPC_STATUS_CODE_VALUE_OK: i64 = 0;

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::template("RPC_GRPC_REQUEST_METADATA", "rpc.grpc.request.metadata", Experimental),
    Entry::attribute("RPC_GRPC_STATUS_CODE", "rpc.grpc.status_code", Experimental),
    Entry::int_value("RPC_GRPC_STATUS_CODE_VALUE_OK", "rpc.grpc.status_code", 0, Experimental),
];
"#
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn experimental_only_domains_are_re_exported_behind_the_feature() {
        let config: Config = toml::from_str("version = \"1.36.0\"\n[domains]\n").unwrap();
        let enumeration = |key: &str, stable: bool| Attribute {
            key: key.into(),
            ty: ValueType::Enum { int: false },
            stable,
            brief: "Values.".into(),
            note: None,
            examples: Vec::new(),
            members: vec![Member {
                id: "one".into(),
                value: MemberValue::Str("one".into()),
                stable,
                brief: "One.".into(),
                deprecated: None,
            }],
            deprecated: None,
        };
        let model = Model {
            attributes: vec![
                enumeration("http.request.method", true),
                enumeration("gen_ai.operation.name", false),
            ],
            metrics: Vec::new(),
            events: Vec::new(),
        };
        let files = render(&config, &model);
        let module = files
            .iter()
            .find(|f| f.path == PathBuf::from("attribute/mod.rs"))
            .unwrap();
        let expected = r#"pub mod gen_ai;
pub mod http;

#[cfg(feature = "semconv_experimental")]
pub use self::gen_ai::*;
pub use self::http::*;

pub(crate) static DOMAINS: &[&[crate::registry::Entry]] = &[
    gen_ai::ENTRIES,
    http::ENTRIES,
];

#[cfg(test)]
pub(crate) static TYPED_ENUMS: &[crate::value::EnumLiterals] = &[
    #[cfg(feature = "semconv_experimental")]
    crate::value::literals::<gen_ai::GenAiOperationName>,
    crate::value::literals::<http::HttpRequestMethod>,
];
"#;
        assert!(module.contents.ends_with(expected), "{}", module.contents);
    }

    #[test]
    fn renders_metrics_and_modules() {
        let config: Config = toml::from_str(
            r#"
version = "1.36.0"
[domains]
http = ["http", "url"]
"#,
        )
        .unwrap();
        let model = Model {
            attributes: Vec::new(),
            metrics: vec![Metric {
                name: "http.server.request.duration".into(),
                instrument: Instrument::Histogram,
                unit: "s".into(),
                stable: true,
                brief: "Duration of HTTP server requests.".into(),
                note: None,
                deprecated: None,
            }],
            events: Vec::new(),
        };
        let files = render(&config, &model);
        let paths: Vec<_> = files.iter().map(|f| f.path.to_str().unwrap()).collect();
        assert_eq!(
            paths,
            [
                "attribute/mod.rs",
                "event.rs",
                "metric/http.rs",
                "metric/mod.rs",
                "version.rs"
            ]
        );

        let metric = &files[2].contents;
        assert!(metric.contains("use crate::registry::{Entry, Instrument::*, Stability::*};"));
        assert!(metric.contains(
            "/// Instrument: `histogram`. Unit: `s`.\npub const HTTP_SERVER_REQUEST_DURATION: &str = \"http.server.request.duration\";"
        ));

        let module = &files[3].contents;
        assert!(module.ends_with(
            "pub mod http;\n\npub use self::http::*;\n\npub(crate) static DOMAINS: &[&[crate::registry::Entry]] = &[\n    http::ENTRIES,\n];\n"
        ));

        assert_eq!(
            files[4].contents,
            format!(
                "{HEADER}\n/// The semantic conventions release these constants were generated from.\n\
                 pub const SEMCONV_VERSION: &str = \"1.36.0\";\n\n\
                 /// The schema URL matching [`SEMCONV_VERSION`].\n\
                 pub const SCHEMA_URL: &str = \"https://opentelemetry.io/schemas/1.36.0\";\n"
            )
        );
    }
}
