//! Stub tools and file contents for CLI tests.
//!
//! The stubs append `<tool> <args>` to a shared call log. The `docker`
//! stub keeps one file per container under `state/containers` so tests
//! can count running instances.

pub const FORM_HTML: &str = "<html><body><form id=\"contact\"></form></body></html>\n";
pub const DASHBOARD_HTML: &str = "<html><body><main id=\"dashboard\"></main></body></html>\n";
pub const ENV_FILE: &str = "DATABASE_URL=postgres://localhost/app\n";

/// Marker file that makes the `git` stub fail like an unreachable remote
pub const REMOTE_UNREACHABLE: &str = "remote_unreachable";

/// Marker file that makes the `systemctl` stub fail with status 5
pub const PROXY_MISSING: &str = "proxy_missing";

/// Marker file that makes `docker build` fail
pub const BUILD_BROKEN: &str = "build_broken";

pub fn git_stub(log: &str, state: &str) -> String {
    format!(
        r#"#!/bin/sh
echo "git $*" >> "{log}"
if [ -f "{state}/{marker}" ]; then
  echo "fatal: unable to access 'https://git.example.invalid/app.git/': Could not resolve host: git.example.invalid" >&2
  exit 1
fi
echo "Already up to date."
exit 0
"#,
        log = log,
        state = state,
        marker = REMOTE_UNREACHABLE,
    )
}

pub fn docker_stub(log: &str, state: &str) -> String {
    format!(
        r#"#!/bin/sh
echo "docker $*" >> "{log}"
containers="{state}/containers"
mkdir -p "$containers"
case "$1" in
  stop)
    if [ -f "$containers/$2" ]; then
      echo "$2"
      exit 0
    fi
    echo "Error response from daemon: No such container: $2" >&2
    exit 1
    ;;
  rm)
    name="$3"
    if [ -n "$name" ] && [ -f "$containers/$name" ]; then
      unlink "$containers/$name"
      echo "$name"
      exit 0
    fi
    echo "Error: No such container: $name" >&2
    exit 1
    ;;
  build)
    if [ -f "{state}/{build_marker}" ]; then
      echo "failed to solve: dockerfile parse error" >&2
      exit 1
    fi
    exit 0
    ;;
  run)
    name=""
    prev=""
    for arg in "$@"; do
      if [ "$prev" = "--name" ]; then
        name="$arg"
      fi
      prev="$arg"
    done
    if [ -f "$containers/$name" ]; then
      echo "docker: Error response from daemon: Conflict. The container name \"/$name\" is already in use." >&2
      exit 125
    fi
    echo "$*" > "$containers/$name"
    echo "4f1c2a9b7e3d"
    exit 0
    ;;
esac
exit 0
"#,
        log = log,
        state = state,
        build_marker = BUILD_BROKEN,
    )
}

pub fn systemctl_stub(log: &str, state: &str) -> String {
    format!(
        r#"#!/bin/sh
echo "systemctl $*" >> "{log}"
if [ -f "{state}/{marker}" ]; then
  echo "Failed to restart nginx.service: Unit nginx.service not found." >&2
  exit 5
fi
exit 0
"#,
        log = log,
        state = state,
        marker = PROXY_MISSING,
    )
}
