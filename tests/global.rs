use std::io::{self, Write};
use std::sync::Mutex;

use lazy_static::lazy_static;
use serial_test::serial;

use json_field_logger::{Error, Field};

lazy_static! {
    static ref CAPTURED: Mutex<Vec<u8>> = Mutex::new(Vec::new());
}

// Sink handed to the global logger; forwards into the shared buffer so
// tests can inspect what was written.
struct GlobalSink;

impl Write for GlobalSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        CAPTURED.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn setup() {
    let _ = json_field_logger::try_init(GlobalSink);
    CAPTURED.lock().unwrap().clear();
}

fn captured() -> String {
    String::from_utf8(CAPTURED.lock().unwrap().clone()).unwrap()
}

#[test]
#[serial]
fn second_init_is_rejected() {
    setup();
    assert!(matches!(
        json_field_logger::try_init(GlobalSink),
        Err(Error::AlreadyInitialized)
    ));
}

#[test]
#[serial]
fn global_entry_points_write_through_the_installed_sink() {
    setup();

    let written = json_field_logger::info(vec![
        Field::str("msg", "records added successfully"),
        Field::i32("count", 2),
    ])
    .unwrap();

    let contents = captured();
    assert_eq!(written, contents.len());
    let line = contents.trim_end();
    assert!(line.starts_with(r#"{"level":"info","timestamp":"#));
    assert!(line.ends_with(r#""msg":"records added successfully","count":2}"#));
}

#[test]
#[serial]
fn global_debug_records_point_at_this_file() {
    setup();

    json_field_logger::debug(vec![Field::str("field1", "value1")]).unwrap();

    let contents = captured();
    let doc: serde_json::Value = serde_json::from_str(contents.trim_end()).unwrap();
    assert_eq!(doc["file"], serde_json::Value::from(file!()));
    assert!(doc["line"].as_u64().unwrap() > 0);
    assert_eq!(doc["field1"], serde_json::Value::from("value1"));
}
