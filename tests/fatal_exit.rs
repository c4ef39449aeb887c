use std::env;
use std::process::Command;

use json_field_logger::Field;

const CHILD_MARKER: &str = "JSON_FIELD_LOGGER_FATAL_CHILD";

// Re-runs this test binary as a child process so the default terminate
// hook's process exit can be observed, along with the bytes the child
// wrote before exiting.
#[test]
fn fatal_record_reaches_the_sink_before_the_process_exits() {
    if env::var_os(CHILD_MARKER).is_some() {
        json_field_logger::builder().stdout().init();
        let _ = json_field_logger::fatal(vec![Field::str("msg", "dead :(")]);
        unreachable!("fatal emission must terminate the process");
    }

    let exe = env::current_exe().unwrap();
    let output = Command::new(exe)
        .arg("fatal_record_reaches_the_sink_before_the_process_exits")
        .arg("--exact")
        .arg("--nocapture")
        // quiet mode keeps libtest's "test <name> ... " prefix off the
        // record's line so it can be found by its leading '{'
        .arg("--quiet")
        .env(CHILD_MARKER, "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let record = stdout
        .lines()
        .find(|line| line.starts_with('{'))
        .expect("child wrote no record before exiting");
    assert!(record.starts_with(r#"{"level":"fatal","timestamp":"#));
    assert!(record.ends_with(r#""msg":"dead :("}"#));
}
