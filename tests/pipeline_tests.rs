use std::fs;
use std::path::Path;

use tempfile::tempdir;

use logaudit::app::{run, OutputPaths};

// Девять записей: три хоста, пять ресурсов, одна серия неудачных входов
const SAMPLE_LOG: &str = r#"a.com - - [01/Jul/1995:00:00:01 -0400] "GET /index.html HTTP/1.0" 200 100
b.net - - [01/Jul/1995:00:00:02 -0400] "GET /big.gif HTTP/1.0" 200 5000
evil.org - - [01/Jul/1995:00:00:05 -0400] "POST /login HTTP/1.0" 401 50
evil.org - - [01/Jul/1995:00:00:07 -0400] "POST /login HTTP/1.0" 401 50
evil.org - - [01/Jul/1995:00:00:08 -0400] "POST /login HTTP/1.0" 401 50
evil.org - - [01/Jul/1995:00:00:10 -0400] "GET /secret HTTP/1.0" 200 300
a.com - - [01/Jul/1995:00:00:15 -0400] "GET /index.html HTTP/1.0" 200 120
b.net - - [01/Jul/1995:00:00:20 -0400] "GET /big.gif HTTP/1.0" 304 -
evil.org - - [01/Jul/1995:00:06:01 -0400] "GET /late HTTP/1.0" 200 20
"#;

const EXPECTED_HOSTS: &str = "evil.org,5\na.com,2\nb.net,2\n";

const EXPECTED_RESOURCES: &str = "/big.gif\n/secret\n/index.html\n/login\n/late\n";

const EXPECTED_HOURS: &str = "30/Jun/1995:23:06:01 -0400,9\n\
30/Jun/1995:23:00:20 -0400,8\n\
30/Jun/1995:23:00:15 -0400,7\n\
30/Jun/1995:23:00:10 -0400,6\n\
30/Jun/1995:23:00:08 -0400,5\n\
30/Jun/1995:23:00:07 -0400,4\n\
30/Jun/1995:23:00:05 -0400,3\n\
30/Jun/1995:23:00:02 -0400,2\n\
30/Jun/1995:23:00:01 -0400,1\n";

const EXPECTED_BLOCKED: &str =
    "evil.org - - [01/Jul/1995:00:00:10 -0400] \"GET /secret HTTP/1.0\" 200 300\n";

fn output_paths(dir: &Path) -> OutputPaths {
    OutputPaths {
        hosts: dir.join("hosts.txt"),
        resources: dir.join("resources.txt"),
        hours: dir.join("hours.txt"),
        blocked: dir.join("blocked.txt"),
    }
}

#[test]
fn test_pipeline_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("access.log");
    fs::write(&input, SAMPLE_LOG).unwrap();
    let outputs = output_paths(dir.path());

    let summary = run(&input, &outputs).unwrap();

    assert_eq!(summary.records, 9);
    assert_eq!(summary.unique_hosts, 3);
    assert_eq!(summary.blocked, 1);

    assert_eq!(fs::read_to_string(&outputs.hosts).unwrap(), EXPECTED_HOSTS);
    assert_eq!(
        fs::read_to_string(&outputs.resources).unwrap(),
        EXPECTED_RESOURCES
    );
    assert_eq!(fs::read_to_string(&outputs.hours).unwrap(), EXPECTED_HOURS);
    assert_eq!(
        fs::read_to_string(&outputs.blocked).unwrap(),
        EXPECTED_BLOCKED
    );
}

#[test]
fn test_pipeline_rerun_is_byte_identical() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("access.log");
    fs::write(&input, SAMPLE_LOG).unwrap();
    let outputs = output_paths(dir.path());

    run(&input, &outputs).unwrap();
    let first = [
        fs::read_to_string(&outputs.hosts).unwrap(),
        fs::read_to_string(&outputs.resources).unwrap(),
        fs::read_to_string(&outputs.hours).unwrap(),
        fs::read_to_string(&outputs.blocked).unwrap(),
    ];

    // Повторный прогон по тем же данным даёт те же байты
    run(&input, &outputs).unwrap();
    let second = [
        fs::read_to_string(&outputs.hosts).unwrap(),
        fs::read_to_string(&outputs.resources).unwrap(),
        fs::read_to_string(&outputs.hours).unwrap(),
        fs::read_to_string(&outputs.blocked).unwrap(),
    ];

    assert_eq!(first, second);
}

#[test]
fn test_pipeline_malformed_line_leaves_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("access.log");
    fs::write(
        &input,
        "a.com - - [01/Jul/1995:00:00:01 -0400] \"GET / HTTP/1.0\" 200 100\ngarbage\n",
    )
    .unwrap();
    let outputs = output_paths(dir.path());

    let error = run(&input, &outputs).unwrap_err();
    assert!(error.to_string().contains("line 2"));

    // Ошибка разбора обнаруживается до записи отчётов
    assert!(!outputs.hosts.exists());
    assert!(!outputs.resources.exists());
    assert!(!outputs.hours.exists());
    assert!(!outputs.blocked.exists());
}

#[test]
fn test_pipeline_empty_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("access.log");
    fs::write(&input, "").unwrap();
    let outputs = output_paths(dir.path());

    let summary = run(&input, &outputs).unwrap();

    assert_eq!(summary.records, 0);
    assert_eq!(summary.unique_hosts, 0);
    assert_eq!(summary.blocked, 0);

    // Пустой вход даёт четыре пустых отчёта
    assert_eq!(fs::read_to_string(&outputs.hosts).unwrap(), "");
    assert_eq!(fs::read_to_string(&outputs.resources).unwrap(), "");
    assert_eq!(fs::read_to_string(&outputs.hours).unwrap(), "");
    assert_eq!(fs::read_to_string(&outputs.blocked).unwrap(), "");
}

#[test]
fn test_pipeline_missing_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("no_such.log");
    let outputs = output_paths(dir.path());

    let error = run(&input, &outputs).unwrap_err();
    assert!(error.to_string().starts_with("failed to read"));
    assert!(!outputs.hosts.exists());
}
