//! Run generated scripts through an OpenSees executable

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{info, warn};
use tempfile::TempDir;

use crate::api::ScriptFormat;
use crate::error::{SectionError, SectionResult};
use crate::model::Model;

/// Environment variable naming the OpenSees executable
pub const OPENSEES_PATH_VAR: &str = "OPENSEES_PATH";

/// Captured output of a solver run
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Resolve the OpenSees command from the environment
pub fn resolve_opensees_path() -> PathBuf {
    std::env::var(OPENSEES_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("OpenSees"))
}

/// Invokes the OpenSees Tcl interpreter on a script in a scratch directory
#[derive(Debug, Clone)]
pub struct OpenSeesRunner {
    executable: PathBuf,
}

impl Default for OpenSeesRunner {
    fn default() -> Self {
        Self::new(resolve_opensees_path())
    }
}

impl OpenSeesRunner {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Whether the executable can be spawned at all
    pub fn is_available(&self) -> bool {
        Command::new(&self.executable)
            .arg("-version")
            .output()
            .is_ok()
    }

    /// Run a Tcl script
    pub fn run_script(&self, script: &str) -> SectionResult<RunOutput> {
        let work_dir = TempDir::new()?;
        let script_path = work_dir.path().join("model.tcl");
        fs::write(&script_path, script)?;

        info!(
            "running {} on {}",
            self.executable.display(),
            script_path.display()
        );

        let output = Command::new(&self.executable)
            .arg(&script_path)
            .current_dir(work_dir.path())
            .output()
            .map_err(|e| {
                SectionError::ExecutionFailed(format!(
                    "failed to start {}: {}",
                    self.executable.display(),
                    e
                ))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            warn!("OpenSees failed: {}", stderr.trim());
            return Err(SectionError::ExecutionFailed(format!(
                "{} exited with {}",
                self.executable.display(),
                output.status
            )));
        }
        if !stderr.trim().is_empty() {
            // OpenSees prints its banner and warnings on stderr
            warn!("OpenSees stderr: {}", stderr.trim());
        }

        Ok(RunOutput { stdout, stderr })
    }

    /// Render a model as Tcl and run it
    pub fn run_model(&self, model: &Model) -> SectionResult<RunOutput> {
        let script = model.to_script(ScriptFormat::Tcl)?;
        self.run_script(&script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable() {
        let runner = OpenSeesRunner::new("/nonexistent/OpenSees-binary");
        assert!(!runner.is_available());
        let err = runner.run_script("wipe\n");
        assert!(matches!(err, Err(SectionError::ExecutionFailed(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_script_path() {
        // `cat` echoes the script back, standing in for the interpreter
        let runner = OpenSeesRunner::new("cat");
        let out = runner.run_script("wipe\n").unwrap();
        assert_eq!(out.stdout, "wipe\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_exit_status() {
        let runner = OpenSeesRunner::new("false");
        assert!(matches!(
            runner.run_script("wipe\n"),
            Err(SectionError::ExecutionFailed(_))
        ));
    }
}
