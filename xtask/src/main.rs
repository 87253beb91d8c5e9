use anyhow::Result;
use tracing_subscriber::EnvFilter;
use xshell::Shell;

fn main() {
    if let Err(e) = try_main() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    init_tracing()?;
    let task = std::env::args().nth(1);
    let sh = xshell::Shell::new()?;
    if let Some(cmd) = task.as_deref() {
        let f = match cmd {
            "semconv" => xtask::semconv::semconv,
            _ => print_help,
        };
        f(&sh)?;
    } else {
        print_help(&sh)?;
    }
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn print_help(_sh: &Shell) -> Result<()> {
    eprintln!(
        "Tasks:
  - semconv <model-dir> [--check]
      Regenerate opentelemetry-semconv from a semantic-conventions `model/`
      checkout (or $SEMCONV_MODEL_DIR). `--check` only verifies the files.
"
    );
    Ok(())
}
