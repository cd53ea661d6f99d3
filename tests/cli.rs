use assert_cmd::Command;
use predicates::prelude::*;

fn cron_parser() -> Command {
    Command::cargo_bin("cron-parser").unwrap()
}

// ============================================================
// Successful expansion
// ============================================================

#[test]
fn test_expands_example_line() {
    cron_parser()
        .arg("*/15 0 1,15 * 1-5 /usr/bin/find")
        .assert()
        .success()
        .stdout(
            "minute        0 15 30 45\n\
             hour          0\n\
             day of month  1 15\n\
             month         1 2 3 4 5 6 7 8 9 10 11 12\n\
             day of week   1 2 3 4 5\n\
             command       /usr/bin/find\n",
        );
}

#[test]
fn test_month_alias() {
    cron_parser()
        .arg("*/15 0 1,15 JAN 1-6 /usr/bin/find")
        .assert()
        .success()
        .stdout(predicate::str::contains("month         1\n"))
        .stdout(predicate::str::contains("day of week   1 2 3 4 5 6\n"));
}

#[test]
fn test_whitespace_runs() {
    cron_parser()
        .arg("  0   12\t* *  SUN   /bin/true  ")
        .assert()
        .success()
        .stdout(predicate::str::contains("hour          12\n"))
        .stdout(predicate::str::contains("day of week   0\n"))
        .stdout(predicate::str::ends_with("command       /bin/true\n"));
}

// ============================================================
// Parse errors: message only, normal exit
// ============================================================

#[test]
fn test_out_of_range() {
    cron_parser()
        .arg("*/15 0 1,15 JAN 1-7 /usr/bin/find")
        .assert()
        .success()
        .stdout("Invalid range: 1-7\n");
}

#[test]
fn test_missing_command() {
    cron_parser()
        .arg("*/15 0 1,15 * 1-5")
        .assert()
        .success()
        .stdout("Invalid format\n");
}

#[test]
fn test_empty_expression() {
    cron_parser()
        .arg("")
        .assert()
        .success()
        .stdout("No expression!\n");
}

#[test]
fn test_unknown_alias() {
    cron_parser()
        .arg("0 0 * FOO * cmd")
        .assert()
        .success()
        .stdout("Invalid value FOO\n");
}

#[test]
fn test_error_has_no_prefix() {
    cron_parser()
        .arg("0 0 * * 1-2-3 cmd")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Invalid expression"))
        .stdout(predicate::str::contains("error").not());
}

// ============================================================
// Argument count
// ============================================================

#[test]
fn test_no_arguments() {
    cron_parser()
        .assert()
        .success()
        .stdout("Invalid number of arguments\n");
}

#[test]
fn test_too_many_arguments() {
    cron_parser()
        .args(["*/15", "0", "1,15", "*", "1-5", "/usr/bin/find"])
        .assert()
        .success()
        .stdout("Invalid number of arguments\n");
}

#[test]
fn test_double_dash_counts_as_argument() {
    cron_parser()
        .args(["--", "0 0 * * * x"])
        .assert()
        .success()
        .stdout("Invalid number of arguments\n");
}

#[test]
fn test_lone_double_dash_is_an_expression() {
    cron_parser()
        .arg("--")
        .assert()
        .success()
        .stdout("Invalid format\n");
}

#[test]
fn test_help_and_version_are_expressions() {
    for flag in ["-h", "--help", "-V", "--version"] {
        cron_parser()
            .arg(flag)
            .assert()
            .success()
            .stdout("Invalid format\n");
    }
}

#[test]
fn test_flag_like_argument_is_counted() {
    cron_parser()
        .args(["--help", "0 0 * * * x"])
        .assert()
        .success()
        .stdout("Invalid number of arguments\n");
}

// ============================================================
// Logging stays off stdout
// ============================================================

#[test]
fn test_debug_logging_keeps_stdout_clean() {
    cron_parser()
        .env("CRON_PARSER_LOG", "debug")
        .arg("0 0 1 1 0 /bin/true")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("minute        0\n"))
        .stdout(predicate::str::contains("->").not());
}

#[test]
fn test_debug_logging_names_field_rejection() {
    cron_parser()
        .env("CRON_PARSER_LOG", "debug")
        .arg("0 0 * * 1-7 cmd")
        .assert()
        .success()
        .stdout("Invalid range: 1-7\n")
        .stderr(predicate::str::contains("field rejected"));
}
