//! an example demonstrating the global logger
//! note the final fatal record: it is written to stdout and then the
//! process exits with status 1

use json_field_logger::Field;

fn main() {
    json_field_logger::builder().stdout().init();
    json_field_logger::info(vec![
        Field::str("msg", "records added successfully"),
        Field::i32("count", 2),
    ])
    .unwrap();
    json_field_logger::info(vec![
        Field::str("msg", "records added successfully"),
        Field::i64("count", i64::MAX),
    ])
    .unwrap();
    json_field_logger::info(vec![
        Field::str("msg", "record added successfully"),
        Field::str("name", "Brian"),
        Field::f32("pi", 3.141),
        Field::f64("elapsed", 5.76),
    ])
    .unwrap();
    json_field_logger::debug(vec![Field::str("XXX", "here")]).unwrap();
    let _ = json_field_logger::fatal(vec![Field::str("msg", "dead :(")]);
}
