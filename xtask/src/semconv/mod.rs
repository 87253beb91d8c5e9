//! `cargo xtask semconv <model-dir> [--check]`
//!
//! Regenerates the constant modules of `opentelemetry-semconv` from a checkout
//! of the semantic conventions model.
use crate::project_root;
use anyhow::{bail, Context, Result};
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use xshell::Shell;

mod config;
mod model;
mod render;
mod validate;

pub use config::{Config, ConfigError};
pub use render::GeneratedFile;
pub use validate::{ModelError, ModelErrors};

/// Workspace member the generated files belong to.
const CRATE_DIR: &str = "opentelemetry-semconv";

/// Directories under `src` that only hold generated files.
const GENERATED_DIRS: &[&str] = &["attribute", "metric"];

#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    pub model_dir: PathBuf,
    pub check: bool,
}

impl Options {
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        env_model_dir: Option<OsString>,
    ) -> Result<Self> {
        let mut model_dir = None;
        let mut check = false;
        for arg in args {
            match arg.as_str() {
                "--check" => check = true,
                flag if flag.starts_with('-') => bail!("unknown flag `{flag}`"),
                _ if model_dir.is_some() => bail!("unexpected argument `{arg}`"),
                _ => model_dir = Some(PathBuf::from(arg)),
            }
        }
        let model_dir = model_dir
            .or_else(|| env_model_dir.map(PathBuf::from))
            .context("missing model directory, pass it as an argument or set SEMCONV_MODEL_DIR")?;
        Ok(Options { model_dir, check })
    }
}

pub fn semconv(sh: &Shell) -> Result<()> {
    let options = Options::parse(
        std::env::args().skip(2),
        std::env::var_os("SEMCONV_MODEL_DIR"),
    )?;
    let crate_dir = Path::new(&project_root(sh)?).join(CRATE_DIR);
    let files = generate(&options.model_dir, &crate_dir)?;
    let src = crate_dir.join("src");
    if options.check {
        check(&src, &files)
    } else {
        write(&src, &files)
    }
}

/// Loads `semconv.toml` from `crate_dir` and the model from `model_dir`, and
/// renders the files without touching the disk.
pub fn generate(model_dir: &Path, crate_dir: &Path) -> Result<Vec<GeneratedFile>> {
    let config = Config::load(&crate_dir.join("semconv.toml"))?;
    let model = model::load(model_dir)?;
    validate::validate(&model)?;
    info!(
        version = %config.version,
        attributes = model.attributes.len(),
        values = model.attributes.iter().map(|a| a.members.len()).sum::<usize>(),
        metrics = model.metrics.len(),
        events = model.events.len(),
        "loaded model"
    );
    Ok(render::render(&config, &model))
}

/// Writes `files` below `src` and removes generated files that are no longer produced.
pub fn write(src: &Path, files: &[GeneratedFile]) -> Result<()> {
    for stale in stale_files(src, files)? {
        debug!(file = %stale.display(), "removing");
        fs::remove_file(&stale).with_context(|| format!("failed to remove {}", stale.display()))?;
    }
    for file in files {
        let path = src.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        debug!(file = %path.display(), "writing");
        fs::write(&path, &file.contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    info!(files = files.len(), dir = %src.display(), "generated");
    Ok(())
}

/// Fails on the first file under `src` that differs from `files`.
pub fn check(src: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = src.join(&file.path);
        let current = match fs::read_to_string(&path) {
            Ok(current) => Some(current),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        if current.as_deref() != Some(file.contents.as_str()) {
            bail!(
                "{} is out of date, run `cargo xtask semconv <model-dir>`",
                path.display()
            );
        }
    }
    if let Some(stale) = stale_files(src, files)?.into_iter().next() {
        bail!("{} is no longer generated, remove it", stale.display());
    }
    info!(files = files.len(), "generated files are up to date");
    Ok(())
}

/// Files in the generated directories that `files` does not contain.
fn stale_files(src: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    let expected: BTreeSet<PathBuf> = files.iter().map(|f| src.join(&f.path)).collect();
    let mut stale = Vec::new();
    for dir in GENERATED_DIRS {
        let dir = src.join(dir);
        if !dir.is_dir() {
            continue;
        }
        let entries =
            fs::read_dir(&dir).with_context(|| format!("failed to list {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "rs") && !expected.contains(&path) {
                stale.push(path);
            }
        }
    }
    stale.sort();
    Ok(stale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CONFIG: &str = r#"
version = "1.36.0"

[domains]
http = ["http", "url"]
network = ["network", "server"]
"#;

    const HTTP: &str = r#"
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
            - {id: get, value: "GET", brief: GET method., stability: stable}
            - {id: other, value: "_OTHER", brief: Any other method., stability: stable}
      - id: http.request.header
        stability: stable
        type: template[string[]]
        brief: HTTP request headers.
      - id: http.method
        type: string
        brief: Deprecated, use `http.request.method` instead.
        deprecated: {reason: renamed, renamed_to: http.request.method}
  - id: metric.http.server.request.duration
    type: metric
    metric_name: http.server.request.duration
    instrument: histogram
    unit: "s"
    stability: stable
    brief: Duration of HTTP server requests.
"#;

    const NETWORK: &str = r#"
groups:
  - id: registry.network
    type: attribute_group
    attributes:
      - id: server.address
        stability: stable
        type: string
        brief: Server domain name.
        examples: ["example.com"]
  - id: event.exception
    type: event
    name: exception
    stability: stable
    brief: Records an exception.
"#;

    struct Fixture {
        _dir: tempfile::TempDir,
        model: PathBuf,
        krate: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let model = dir.path().join("model");
            let krate = dir.path().join("crate");
            fs::create_dir_all(model.join("http")).unwrap();
            fs::create_dir_all(model.join("network")).unwrap();
            fs::create_dir_all(krate.join("src")).unwrap();
            fs::write(model.join("http/registry.yaml"), HTTP).unwrap();
            fs::write(model.join("network/registry.yaml"), NETWORK).unwrap();
            fs::write(krate.join("semconv.toml"), CONFIG).unwrap();
            Fixture {
                _dir: dir,
                model,
                krate,
            }
        }

        fn src(&self) -> PathBuf {
            self.krate.join("src")
        }

        fn generate(&self) -> Vec<GeneratedFile> {
            generate(&self.model, &self.krate).unwrap()
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let fixture = Fixture::new();
        assert_eq!(fixture.generate(), fixture.generate());
    }

    #[test]
    fn generates_expected_files() {
        let fixture = Fixture::new();
        let files = fixture.generate();
        let paths: Vec<_> = files.iter().map(|f| f.path.to_str().unwrap()).collect();
        assert_eq!(
            paths,
            [
                "attribute/http.rs",
                "attribute/mod.rs",
                "attribute/network.rs",
                "event.rs",
                "metric/http.rs",
                "metric/mod.rs",
                "version.rs",
            ]
        );

        let http = &files[0].contents;
        assert!(http.starts_with("// DO NOT EDIT"));
        assert!(http.contains("//! Attributes of the `http` namespace.\n"));
        assert!(http.contains("pub const HTTP_REQUEST_METHOD_VALUE_OTHER: &str = \"_OTHER\";\n"));
        assert!(http.contains("pub fn http_request_header(key: &str) -> String {\n"));
        assert!(http.contains(
            "#[cfg(feature = \"semconv_experimental\")]\n#[deprecated(note = \"Replaced by `http.request.method`.\")]\npub const HTTP_METHOD: &str = \"http.method\";\n"
        ));
        assert!(http.contains("    HttpRequestMethod for HTTP_REQUEST_METHOD {\n"));

        let modules = &files[1].contents;
        assert!(modules.contains("pub mod http;\npub mod network;\n"));

        let events = &files[3].contents;
        assert!(events.contains("pub const EXCEPTION: &str = \"exception\";\n"));
    }

    #[test]
    fn check_passes_after_write_and_fails_after_model_change() {
        let fixture = Fixture::new();
        let files = fixture.generate();
        assert!(check(&fixture.src(), &files).is_err());

        write(&fixture.src(), &files).unwrap();
        check(&fixture.src(), &files).unwrap();

        fs::write(
            fixture.model.join("network/registry.yaml"),
            NETWORK.replace("Server domain name.", "Server host name."),
        )
        .unwrap();
        let changed = fixture.generate();
        let err = check(&fixture.src(), &changed).unwrap_err();
        assert!(err.to_string().contains("network.rs is out of date"), "{err}");

        let on_disk = fs::read_to_string(fixture.src().join("attribute/network.rs")).unwrap();
        assert!(on_disk.contains("Server domain name."));
    }

    #[test]
    fn check_reports_unreadable_files() {
        let fixture = Fixture::new();
        let files = fixture.generate();
        write(&fixture.src(), &files).unwrap();

        let http = fixture.src().join("attribute/http.rs");
        fs::remove_file(&http).unwrap();
        fs::create_dir(&http).unwrap();

        let message = format!("{:#}", check(&fixture.src(), &files).unwrap_err());
        assert!(message.contains("failed to read"), "{message}");
        assert!(!message.contains("out of date"), "{message}");
    }

    #[test]
    fn write_removes_stale_domains() {
        let fixture = Fixture::new();
        let stale = fixture.src().join("attribute/legacy.rs");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "// old").unwrap();
        let hand_written = fixture.src().join("lib.rs");
        fs::write(&hand_written, "// mine").unwrap();

        let files = fixture.generate();
        fs::create_dir_all(fixture.src().join("attribute")).unwrap();
        for file in &files {
            let path = fixture.src().join(&file.path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, &file.contents).unwrap();
        }
        let err = check(&fixture.src(), &files).unwrap_err();
        assert!(err.to_string().contains("legacy.rs is no longer generated"), "{err}");

        write(&fixture.src(), &files).unwrap();
        assert!(!stale.exists());
        assert!(hand_written.exists());
        check(&fixture.src(), &files).unwrap();
    }

    #[test]
    fn reports_invalid_models() {
        let fixture = Fixture::new();
        fs::write(fixture.model.join("http/duplicate.yaml"), NETWORK).unwrap();
        let err = generate(&fixture.model, &fixture.krate).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("attribute `server.address` is defined more than once"), "{message}");
        assert!(message.contains("event `exception` is defined more than once"), "{message}");
    }

    #[test]
    fn reports_bad_configuration() {
        let fixture = Fixture::new();
        fs::write(fixture.krate.join("semconv.toml"), "version = \"latest\"").unwrap();
        let err = generate(&fixture.model, &fixture.krate).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some(), "{err:#}");
    }

    #[rstest]
    #[case(&["model"], None, "model", false)]
    #[case(&["--check", "model"], None, "model", true)]
    #[case(&["model", "--check"], Some("ignored"), "model", true)]
    #[case(&[], Some("from-env"), "from-env", false)]
    fn parses_options(
        #[case] args: &[&str],
        #[case] env: Option<&str>,
        #[case] model_dir: &str,
        #[case] check: bool,
    ) {
        let options = Options::parse(
            args.iter().map(|a| a.to_string()),
            env.map(OsString::from),
        )
        .unwrap();
        assert_eq!(
            options,
            Options {
                model_dir: PathBuf::from(model_dir),
                check,
            }
        );
    }

    #[rstest]
    #[case(&[], "missing model directory")]
    #[case(&["--force", "model"], "unknown flag `--force`")]
    #[case(&["a", "b"], "unexpected argument `b`")]
    fn rejects_bad_options(#[case] args: &[&str], #[case] message: &str) {
        let err = Options::parse(args.iter().map(|a| a.to_string()), None).unwrap_err();
        assert!(err.to_string().contains(message), "{err}");
    }
}
