#![cfg(feature = "tracing")]

//! Composite events rendered through a `tracing_subscriber::fmt` subscriber

use std::io;
use std::sync::{Arc, Mutex};

use fieldwise::forms::{self, PASSWORD};
use fieldwise::FormValues;
use tracing::Level;

/// Shared in-memory sink the fmt layer writes formatted lines into.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_fmt_subscriber<F: FnOnce()>(max_level: Level, f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

#[test]
fn rejected_field_is_traced() {
    let output = with_fmt_subscriber(Level::TRACE, || {
        let login = forms::login_validation();
        login.validate(PASSWORD, &FormValues::from([(PASSWORD, "1234")]));
    });

    assert!(output.contains("validation composite built"), "{output}");
    assert!(output.contains("field rejected"), "{output}");
    assert!(output.contains("password"), "{output}");
    assert!(output.contains("Invalid value"), "{output}");
}

#[test]
fn accepted_field_emits_no_rejection() {
    let output = with_fmt_subscriber(Level::TRACE, || {
        let login = forms::login_validation();
        login.validate(PASSWORD, &FormValues::from([(PASSWORD, "12345")]));
    });

    assert!(!output.contains("field rejected"), "{output}");
}

#[test]
fn rejection_hidden_below_trace_level() {
    let output = with_fmt_subscriber(Level::DEBUG, || {
        let login = forms::login_validation();
        login.validate(PASSWORD, &FormValues::new());
    });

    assert!(output.contains("validation composite built"), "{output}");
    assert!(!output.contains("field rejected"), "{output}");
}
