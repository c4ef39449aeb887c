//! an example demonstrating a locally owned logger configured through the
//! builder, with the fatal terminate hook replaced so the demo survives
//! its own fatal record

use json_field_logger::{Field, Level};

fn main() {
    let logger = json_field_logger::builder()
        .stderr()
        .terminate_with(|status| eprintln!("suppressed exit with status {}", status))
        .build();

    logger
        .trace(vec![Field::u64("task_id", 567), Field::str("thread_id", "12")])
        .unwrap();
    logger.debug(vec![Field::f64("foo", 2.3)]).unwrap();
    logger.info(vec![Field::str("msg", "I am an info")]).unwrap();
    logger.warn(vec![Field::str("msg", "I am a warning")]).unwrap();
    logger.error(vec![Field::str("msg", "I am an error")]).unwrap();
    logger
        .log(Level::Fatal, vec![Field::str("msg", "dead :(")])
        .unwrap();
}
