//! Shell quoting for printable command lines.
//!
//! Commands are always spawned from argument vectors, so nothing here is
//! needed for correctness. These helpers only render a path the way it would
//! have to be typed into the host shell, for logs and error messages.
//!
//! The policy is deliberately minimal: on Windows the whole path is wrapped
//! in double quotes, on POSIX every space gets a preceding backslash. Quotes,
//! backslashes and other shell metacharacters are left alone.

/// Quote a path for the POSIX shell.
pub fn quote_posix(path: &str) -> String {
    let mut quoted = String::with_capacity(path.len() + 4);
    for c in path.chars() {
        if c == ' ' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted
}

/// Quote a path for `cmd.exe`.
pub fn quote_windows(path: &str) -> String {
    format!("\"{}\"", path)
}

/// Quote a path for the host platform's shell.
pub fn quote_path(path: &str) -> String {
    if cfg!(windows) {
        quote_windows(path)
    } else {
        quote_posix(path)
    }
}
