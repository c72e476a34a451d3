use crate::error::{GameError, Result};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// The external build command, e.g. `go build`.
#[derive(Debug, Clone)]
pub struct Compiler {
    program: String,
    args: Vec<String>,
}

/// What a finished build reported. The status is informational only.
#[derive(Debug)]
pub struct BuildOutcome {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl BuildOutcome {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

impl Compiler {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Runs `<program> <args..> <file_name>` with `working_dir` as the child's
    /// current directory. Only a failure to spawn the process is an error.
    pub async fn build(&self, file_name: &str, working_dir: &Path) -> Result<BuildOutcome> {
        debug!(
            "Running {} {} {} in {}",
            self.program,
            self.args.join(" "),
            file_name,
            working_dir.display()
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(file_name)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| GameError::BuildLaunch {
                program: self.program.clone(),
                source,
            })?;

        let outcome = BuildOutcome {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !outcome.stdout.trim().is_empty() {
            info!("{}: {}", self.program, outcome.stdout.trim_end());
        }
        if outcome.success() {
            info!("Compiled {} in {}", file_name, working_dir.display());
        } else {
            warn!(
                "Compiling {} in {} failed ({}): {}",
                file_name,
                working_dir.display(),
                outcome.status,
                outcome.stderr.trim_end()
            );
        }

        Ok(outcome)
    }
}
