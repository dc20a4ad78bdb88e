// src/logging.rs
//
// env_logger backend for the `log` facade.
// Lines look like `[00:01:02.345][INFO] message` (elapsed since start).
// The GUI appends to a file next to the data directory; the CLI writes to stderr.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env, Target};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub enum Sink<'a> {
    Stderr,
    File(&'a Path),
}

/// Install the global logger. Level comes from `RUST_LOG`, default `info`.
/// Calling twice is harmless; the second call is ignored.
pub fn init(sink: Sink<'_>) {
    start();

    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
    });

    if let Sink::File(path) = sink {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = fs::create_dir_all(parent);
            }
        }
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Log file {} unavailable: {e}", path.display()),
        }
    }

    let _ = builder.try_init();
}
