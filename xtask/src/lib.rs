use anyhow::Result;
use xshell::{cmd, Shell};

pub mod semconv;

pub fn project_root(sh: &Shell) -> Result<String> {
    Ok(cmd!(sh, "git rev-parse --show-toplevel").read()?)
}
