#![cfg(unix)]

mod common;

use common::*;

#[test]
fn run_publishes_files_and_leaves_one_instance() {
    let env = TestEnv::builder()
        .with_running_container("consultoc-app")
        .build();

    let result = env.run(&[]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.containers(), vec!["consultoc-app"]);
    assert!(env
        .container_args("consultoc-app")
        .contains("-p 8000:8000 --env-file .env --name consultoc-app consultoc-api"));
    assert_eq!(env.read_webroot("form.html"), FORM_HTML);
    assert_eq!(env.read_webroot("dashboard.html"), DASHBOARD_HTML);
    assert_eq!(env.webroot_mode("form.html"), 0o644);
    assert_eq!(env.webroot_mode("dashboard.html"), 0o644);
}

#[test]
fn run_invokes_tools_in_order() {
    let env = TestEnv::builder().build();

    let result = env.run(&["run"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.calls(),
        vec![
            "git pull origin main",
            "docker stop consultoc-app",
            "docker rm -f consultoc-app",
            "docker build -t consultoc-api .",
            "docker run -d -p 8000:8000 --env-file .env --name consultoc-app consultoc-api",
            "systemctl restart nginx",
        ]
    );
}

#[test]
fn second_run_reaches_the_same_state() {
    let env = TestEnv::builder().build();

    let first = env.run(&[]);
    assert!(first.success, "{}", first.combined_output());
    env.clear_calls();

    let second = env.run(&[]);

    assert!(second.success, "{}", second.combined_output());
    assert_eq!(env.containers(), vec!["consultoc-app"]);
    assert_eq!(env.webroot_mode("form.html"), 0o644);
    assert!(env.calls().contains(&"docker stop consultoc-app".to_string()));
}

#[test]
fn first_run_creates_missing_destination_files() {
    let env = TestEnv::builder().build();
    assert!(!env.webroot().join("form.html").exists());

    let result = env.run(&[]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.webroot().join("form.html").is_file());
    assert!(env.webroot().join("dashboard.html").is_file());
}

#[test]
fn unreachable_remote_stops_before_rebuild() {
    let env = TestEnv::builder()
        .with_running_container("consultoc-app")
        .build();
    env.set_marker(REMOTE_UNREACHABLE);

    let result = env.run(&[]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert_eq!(env.calls(), vec!["git pull origin main"]);
    assert!(!env.webroot().join("form.html").exists());
    // Previous instance untouched
    assert_eq!(env.containers(), vec!["consultoc-app"]);
    assert!(result.stderr.contains("source sync aborted"), "{}", result.stderr);
}

#[test]
fn missing_previous_instance_is_not_an_error() {
    let env = TestEnv::builder().build();

    let result = env.run(&[]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result
        .stdout
        .contains("ignored failure of `docker stop consultoc-app`"));
    assert!(result.stdout.contains("Redeploy completed (9 commands, 2 ignored failures)"));
}

#[test]
fn proxy_failure_propagates_exit_code() {
    let env = TestEnv::builder().build();
    env.set_marker(PROXY_MISSING);

    let result = env.run(&[]);

    assert_eq!(result.exit_code, 5);
    assert!(result.stderr.contains("proxy reload aborted"), "{}", result.stderr);
    assert!(!result.stdout.contains("aborted"));
}

#[test]
fn build_failure_keeps_assets_unpublished() {
    let env = TestEnv::builder().build();
    env.set_marker(BUILD_BROKEN);

    let result = env.run(&[]);

    assert!(!result.success);
    assert!(env.containers().is_empty());
    assert!(!env.webroot().join("form.html").exists());
    assert!(!env.calls().iter().any(|c| c.starts_with("systemctl")));
}

#[test]
fn no_static_files_fails_before_proxy_restart() {
    let env = TestEnv::builder().without_static_files().build();

    let result = env.run(&[]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("no static files present"), "{}", result.stdout);
    assert!(!env.calls().iter().any(|c| c.starts_with("systemctl")));
}

#[test]
fn dry_run_executes_nothing() {
    let env = TestEnv::builder().build();

    let result = env.run(&["run", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.calls().is_empty());
    assert!(result.stdout.contains("$ git pull origin main"));
}

#[test]
fn invalid_config_exits_with_two() {
    let env = TestEnv::builder()
        .with_config("[service]\nhost_port = 0\n")
        .build();

    let result = env.run(&[]);

    assert_eq!(result.exit_code, 2);
    assert!(result.stderr.contains("service.host_port"), "{}", result.stderr);
    assert!(env.calls().is_empty());
}
