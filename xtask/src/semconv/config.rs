use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("`{0}` is not a semantic conventions release, expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),
    #[error("namespace `{namespace}` is listed under both `{first}` and `{second}`")]
    NamespaceListedTwice {
        namespace: String,
        first: String,
        second: String,
    },
    #[error("`{0}` is not a valid module name")]
    InvalidDomain(String),
}

/// Contents of `semconv.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Release of the semantic conventions the model checkout matches.
    pub version: String,
    /// Module name to the root namespaces it holds.
    #[serde(default)]
    pub domains: BTreeMap<String, Vec<String>>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let parts: Vec<_> = self.version.split('.').collect();
        if parts.len() != 3
            || parts
                .iter()
                .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(ConfigError::InvalidVersion(self.version.clone()));
        }

        let mut owner: BTreeMap<&str, &str> = BTreeMap::new();
        for (domain, namespaces) in &self.domains {
            if !is_module_name(domain) {
                return Err(ConfigError::InvalidDomain(domain.clone()));
            }
            for namespace in namespaces {
                if let Some(first) = owner.insert(namespace, domain) {
                    return Err(ConfigError::NamespaceListedTwice {
                        namespace: namespace.clone(),
                        first: first.to_owned(),
                        second: domain.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// The module a dotted key is emitted into, picked by its root namespace.
    pub fn domain_of<'a>(&'a self, key: &'a str) -> &'a str {
        let namespace = root_namespace(key);
        self.domains
            .iter()
            .find(|(_, namespaces)| namespaces.iter().any(|n| n == namespace))
            .map(|(domain, _)| domain.as_str())
            .unwrap_or(namespace)
    }

    /// Namespaces of `domain` that occur in `keys`, in configured order.
    pub fn namespaces<'a>(&'a self, domain: &'a str, keys: &[&str]) -> Vec<&'a str> {
        let used = |namespace: &str| keys.iter().any(|key| root_namespace(key) == namespace);
        match self.domains.get(domain) {
            Some(listed) => listed
                .iter()
                .map(String::as_str)
                .filter(|n| used(n))
                .collect(),
            None => vec![domain],
        }
    }

    pub fn schema_url(&self) -> String {
        format!("https://opentelemetry.io/schemas/{}", self.version)
    }
}

pub(crate) fn root_namespace(key: &str) -> &str {
    key.split('.').next().unwrap_or(key)
}

fn is_module_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    matches!(bytes.next(), Some(b'a'..=b'z'))
        && bytes.all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_'))
        && name != "mod"
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(contents: &str) -> Result<Config, ConfigError> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("semconv.toml");
        fs::write(&path, contents).unwrap();
        Config::load(&path)
    }

    #[test]
    fn groups_namespaces_into_domains() {
        let config = parse(
            r#"
version = "1.36.0"

[domains]
network = ["network", "server", "client"]
http = ["http", "url"]
"#,
        )
        .unwrap();

        assert_eq!(config.domain_of("server.address"), "network");
        assert_eq!(config.domain_of("url.full"), "http");
        assert_eq!(config.domain_of("db.system.name"), "db");
        assert_eq!(config.domain_of("service"), "service");
        assert_eq!(
            config.namespaces("network", &["client.port", "network.transport"]),
            ["network", "client"]
        );
        assert_eq!(config.namespaces("db", &["db.system.name"]), ["db"]);
        assert_eq!(config.schema_url(), "https://opentelemetry.io/schemas/1.36.0");
    }

    #[rstest]
    #[case("1.36")]
    #[case("v1.36.0")]
    #[case("1..0")]
    fn rejects_bad_versions(#[case] version: &str) {
        let err = parse(&format!("version = \"{version}\"")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVersion(v) if v == version));
    }

    #[test]
    fn rejects_namespace_in_two_domains() {
        let err = parse(
            r#"
version = "1.36.0"

[domains]
network = ["server"]
http = ["server"]
"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "namespace `server` is listed under both `http` and `network`"
        );
    }

    #[rstest]
    #[case("Http")]
    #[case("mod")]
    #[case("gen-ai")]
    fn rejects_bad_domain_names(#[case] domain: &str) {
        let err = parse(&format!("version = \"1.0.0\"\n[domains]\n\"{domain}\" = [\"x\"]")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDomain(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = parse("version = \"1.0.0\"\noutput = \"src\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file() {
        let err = Config::load(Path::new("/nonexistent/semconv.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
