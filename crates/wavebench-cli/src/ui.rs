//! Styled status lines, honouring `NO_COLOR`.

use console::{style, StyledObject};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Ok,
    Warn,
    Error,
}

impl Status {
    fn tag(self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Error => "[ERROR]",
        }
    }

    fn styled(self) -> StyledObject<&'static str> {
        let tag = style(self.tag()).bold();
        match self {
            Self::Ok => tag.green(),
            Self::Warn => tag.yellow(),
            Self::Error => tag.red(),
        }
    }
}

fn status_line(status: Status, text: &str) -> String {
    if is_color_disabled() {
        format!("{} {text}", status.tag())
    } else {
        format!("{} {text}", status.styled())
    }
}

/// Print a sweep banner on stdout.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print a success line on stdout.
pub fn print_success(text: &str) {
    println!("{}", status_line(Status::Ok, text));
}

/// Print a warning on stderr.
pub fn print_warning(text: &str) {
    eprintln!("{}", status_line(Status::Warn, text));
}

/// Print an error on stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", status_line(Status::Error, text));
}
