use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::config;

/// 往日志目录下的文件追加一行
///
/// `log_file!("spill.txt", "{}:{}", a, b)` appends one formatted line to
/// `<log dir>/spill.txt`. Nothing is written when no log directory is
/// configured or the file has been banned through [`config::ban`].
#[macro_export]
macro_rules! log_file {
    ($file:expr, $($arg:tt)*) => {
        $crate::utility::append_line($file, format!($($arg)*))
    };
}

/// Sink behind [`log_file!`]. Failures go to stderr, the caller keeps going.
pub fn append_line<P: AsRef<str>>(file: P, line: String) {
    let file = file.as_ref();
    let dir = match config::get_log_dir() {
        Some(dir) => dir,
        None => return,
    };
    if config::is_banned(file) {
        return;
    }
    if let Err(e) = write_line(&dir, file, &line) {
        eprintln!("log_file: {}/{}: {}", dir.display(), file, e);
    }
}

pub fn write_line(dir: &Path, file: &str, line: &str) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let mut f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(file))?;
    writeln!(f, "{}", line)
}
