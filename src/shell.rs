//! Line-oriented command stream for `rolegate shell`.
//!
//! Each input line is one command; each command prints one line of output.

#[cfg(test)]
#[path = "shell_test.rs"]
mod tests;

use std::io::{self, BufRead, Write};

use rolegate::{AuthApi, AuthorizationRouter, Credentials};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login { username: String, password: String },
    Logout,
    Goto(String),
    Check,
    Status,
    Ping,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command `{0}` (try: login, logout, goto, check, status, ping, quit)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ShellError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut words = trimmed.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let command = match (verb, args.as_slice()) {
        ("login", [username, password]) => {
            ShellCommand::Login { username: (*username).to_owned(), password: (*password).to_owned() }
        }
        ("login", _) => return Err(ShellError::Usage("login <username> <password>")),
        ("logout", []) => ShellCommand::Logout,
        ("goto", [path]) => ShellCommand::Goto((*path).to_owned()),
        ("goto", _) => return Err(ShellError::Usage("goto <path>")),
        ("check", []) => ShellCommand::Check,
        ("status", []) => ShellCommand::Status,
        ("ping", []) => ShellCommand::Ping,
        ("quit" | "exit", []) => ShellCommand::Quit,
        ("logout" | "check" | "status" | "ping" | "quit" | "exit", _) => {
            return Err(ShellError::Usage("command takes no arguments"));
        }
        (other, _) => return Err(ShellError::Unknown(other.to_owned())),
    };
    Ok(Some(command))
}

/// Run commands from `reader` against `router` until EOF or `quit`.
///
/// Parse errors are reported on `out` and the session carries on.
pub async fn run_session<A, R, W>(router: &AuthorizationRouter<A>, mut reader: R, mut out: W) -> io::Result<()>
where
    A: AuthApi,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        match command {
            ShellCommand::Login { username, password } => {
                let decision = router.submit_login(Credentials::new(username, password)).await;
                writeln!(out, "{decision}")?;
            }
            ShellCommand::Logout => writeln!(out, "{}", router.logout().await)?,
            ShellCommand::Goto(path) => writeln!(out, "{}", router.navigate(&path).await)?,
            ShellCommand::Check => {
                let state = if router.api().is_authenticated().await { "authenticated" } else { "anonymous" };
                writeln!(out, "{state}")?;
            }
            ShellCommand::Status => writeln!(out, "{:?}", router.phase())?,
            ShellCommand::Ping => writeln!(out, "{}", if router.api().ping().await { "pong" } else { "unreachable" })?,
            ShellCommand::Quit => break,
        }
    }
    out.flush()
}
