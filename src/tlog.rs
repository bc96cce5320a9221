use std::env;
use std::fs::OpenOptions;
use std::io::Write;

use time::OffsetDateTime;

pub fn getpid() -> i32 {
    unsafe { libc::getpid() }
}

fn timestamp() -> String {
    let now = match OffsetDateTime::now_local() {
        Ok(dt) => dt,
        Err(_) => OffsetDateTime::now_utc(),
    };
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
        now.year(),
        now.month() as u8,
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
        now.millisecond(),
    )
}

/// Append one line to the file named by `HILITE_LOG_FILE`. Unset or
/// empty means logging is off and this is a no-op.
pub fn write_line(msg: &str) {
    let log_file = match env::var("HILITE_LOG_FILE") {
        Ok(x) => x,
        Err(_) => return,
    };
    if log_file.is_empty() {
        return;
    }

    let mut file = match OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_file)
    {
        Ok(x) => x,
        Err(_) => {
            println!("tlog: open file error");
            return;
        }
    };

    let mut line = format!("[{}][{}] {}", timestamp(), getpid(), msg);
    if !line.ends_with('\n') {
        line.push('\n');
    }
    if file.write_all(line.as_bytes()).is_err() {
        println!("tlog: write_all error");
    }
}

#[macro_export]
macro_rules! log {
    ($fmt:expr) => (
        $crate::tlog::write_line($fmt);
    );
    ($fmt:expr, $($arg:tt)*) => (
        $crate::tlog::write_line(&format!($fmt, $($arg)*));
    );
}
