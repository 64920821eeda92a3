//! Test environment builder for isolated redeploy testing.
//!
//! Provides `TestEnv` - a sandbox with a working copy, a web root and a
//! `bin/` directory of stub `git`, `docker` and `systemctl` scripts that
//! is put first on `PATH`. `cp` and `chmod` are the real ones.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures::*;

/// Result of running the redeploy CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON ({}): {}\n{}", e, l, self.stdout))
            })
            .collect()
    }
}

/// Isolated sandbox for one test
pub struct TestEnv {
    root: TempDir,
    bin: String,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn workdir(&self) -> PathBuf {
        self.root.path().join("app")
    }

    pub fn webroot(&self) -> PathBuf {
        self.root.path().join("www")
    }

    pub fn state(&self) -> PathBuf {
        self.root.path().join("state")
    }

    fn log_path(&self) -> PathBuf {
        self.root.path().join("calls.log")
    }

    fn xdg_config(&self) -> PathBuf {
        self.root.path().join("xdg")
    }

    /// Run redeploy from the working copy
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run redeploy from the working copy with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let path = format!(
            "{}:{}",
            self.bin,
            std::env::var("PATH").unwrap_or_else(|_| "/usr/bin:/bin".to_string())
        );

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_redeploy"));
        cmd.current_dir(self.workdir())
            .args(args)
            .env("PATH", path)
            .env("XDG_CONFIG_HOME", self.xdg_config())
            .env("REDEPLOY_NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("REDEPLOY_REMOTE")
            .env_remove("REDEPLOY_BRANCH")
            .env_remove("REDEPLOY_SUDO");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute redeploy");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Every stub invocation so far, in order
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn clear_calls(&self) {
        let _ = std::fs::remove_file(self.log_path());
    }

    /// Names of the containers the docker stub considers running
    pub fn containers(&self) -> Vec<String> {
        let dir = self.state().join("containers");
        let mut names: Vec<String> = match std::fs::read_dir(dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }

    /// `docker run` arguments recorded for a container
    pub fn container_args(&self, name: &str) -> String {
        std::fs::read_to_string(self.state().join("containers").join(name)).unwrap_or_default()
    }

    /// Create a marker file in the state directory
    pub fn set_marker(&self, marker: &str) {
        std::fs::write(self.state().join(marker), "").expect("Failed to write marker");
    }

    /// Mode bits of a file in the web root
    pub fn webroot_mode(&self, name: &str) -> u32 {
        let meta = std::fs::metadata(self.webroot().join(name))
            .unwrap_or_else(|e| panic!("{} not published: {}", name, e));
        meta.permissions().mode() & 0o777
    }

    pub fn read_webroot(&self, name: &str) -> String {
        std::fs::read_to_string(self.webroot().join(name))
            .unwrap_or_else(|e| panic!("{} not published: {}", name, e))
    }

    pub fn write_workdir_file(&self, relative: &str, contents: &str) {
        let path = self.workdir().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(path, contents).expect("Failed to write file");
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    static_files: bool,
    config: Option<String>,
    running_container: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            static_files: true,
            config: None,
            running_container: None,
        }
    }

    /// Leave `form.html` and `dashboard.html` out of the working copy
    pub fn without_static_files(mut self) -> Self {
        self.static_files = false;
        self
    }

    /// Extra TOML appended to the generated `redeploy.toml`
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    /// Pretend a container with this name is already running
    pub fn with_running_container(mut self, name: &str) -> Self {
        self.running_container = Some(name.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let bin_dir = root.path().join("bin");
        let state = root.path().join("state");
        for dir in ["app", "www", "bin", "state/containers", "xdg"] {
            std::fs::create_dir_all(root.path().join(dir)).expect("Failed to create dir");
        }

        let log = root.path().join("calls.log").display().to_string();
        let state_str = state.display().to_string();
        write_script(&bin_dir.join("git"), &git_stub(&log, &state_str));
        write_script(&bin_dir.join("docker"), &docker_stub(&log, &state_str));
        write_script(&bin_dir.join("systemctl"), &systemctl_stub(&log, &state_str));

        let env = TestEnv {
            bin: bin_dir.display().to_string(),
            root,
        };

        env.write_workdir_file(".env", ENV_FILE);
        if self.static_files {
            for (name, contents) in [("form.html", FORM_HTML), ("dashboard.html", DASHBOARD_HTML)] {
                env.write_workdir_file(name, contents);
                // Published files must end up 644 regardless of the source mode
                let path = env.workdir().join(name);
                std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))
                    .expect("Failed to set permissions");
            }
        }

        let mut toml = format!(
            "[static_assets]\ndestination = \"{}\"\n\n[privileges]\nsudo = false\n",
            env.webroot().display()
        );
        if let Some(extra) = &self.config {
            toml.push('\n');
            toml.push_str(extra);
        }
        env.write_workdir_file("redeploy.toml", &toml);

        if let Some(name) = &self.running_container {
            std::fs::write(
                env.state().join("containers").join(name),
                "-d -p 8000:8000 --env-file .env --name consultoc-app consultoc-api",
            )
            .expect("Failed to seed container");
        }

        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_script(path: &Path, contents: &str) {
    std::fs::write(path, contents).expect("Failed to write stub");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make stub executable");
}
