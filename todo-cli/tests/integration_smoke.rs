//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--db-host"));
}

#[test]
fn test_help_hides_password() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("init-db").arg("--help").env("DB_PASSWORD", "hunter2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("hunter2").not())
        .stdout(predicate::str::contains("todopass123").not());
}

#[test]
fn test_init_db_fails_when_database_unreachable() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.args([
        "init-db",
        "--db-host",
        "127.0.0.1",
        "--db-port",
        "1",
        "--max-attempts",
        "2",
        "--retry-interval-secs",
        "0",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Database initialization failed"));
}

#[test]
fn test_serve_does_not_start_without_database() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.args([
        "serve",
        "--bind",
        "127.0.0.1:0",
        "--db-host",
        "127.0.0.1",
        "--db-port",
        "1",
        "--max-attempts",
        "1",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unreachable after 1 attempts"));
}

#[test]
fn test_invalid_env_pool_size_is_rejected() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("init-db").env("DB_MAX_CONNECTIONS", "0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid database configuration"))
        .stderr(predicate::str::contains("DB_MAX_CONNECTIONS"));
}
