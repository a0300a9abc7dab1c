//! String escaping for each output grammar.
//!
//! Every piece of user text that lands in generated output passes through
//! exactly one of these functions. The decoders at the bottom undo the
//! document-level escaping and are used when an action document is imported
//! back into panels.
//!
//! # Example
//!
//! ```
//! use wtpanes::escape::{escape_powershell_string, escape_json_string};
//!
//! assert_eq!(escape_powershell_string(r#"say "hi" `now`"#), r#"say ""hi"" ``now``"#);
//! assert_eq!(escape_json_string("a\"b\n"), "a\\\"b\\n");
//! ```

/// Escape text for a double-quoted `wt` command-line argument.
///
/// Doubles `"` and the backtick escape character.
///
/// ```
/// use wtpanes::escape::escape_powershell_string;
///
/// assert_eq!(escape_powershell_string("echo \"x\""), "echo \"\"x\"\"");
/// ```
pub fn escape_powershell_string(s: &str) -> String {
    s.replace('"', "\"\"").replace('`', "``")
}

/// Escape a path for a double-quoted `wt` argument.
///
/// Doubles backslashes and double quotes.
///
/// ```
/// use wtpanes::escape::escape_powershell_path;
///
/// assert_eq!(escape_powershell_path(r"C:\dev"), r"C:\\dev");
/// ```
pub fn escape_powershell_path(path: &str) -> String {
    path.replace('\\', "\\\\").replace('"', "\"\"")
}

/// Standard string-literal escaping for the action document.
///
/// Escapes backslash, double quote, newline and carriage return.
pub fn escape_json_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Normalize a Windows path for the action document by doubling backslashes.
pub fn normalize_windows_path(path: &str) -> String {
    path.replace('\\', "\\\\")
}

/// Escape text for a PowerShell single-quoted string by doubling `'`.
pub fn escape_single_quoted(s: &str) -> String {
    s.replace('\'', "''")
}

/// Escape text for a batch file line by doubling `"`.
pub fn escape_batch(s: &str) -> String {
    s.replace('"', "\"\"")
}

/// Join multi-line commands into a single PowerShell line.
///
/// Lines are split on `\n` and `\r`, trimmed, and joined with `; `, the
/// PowerShell statement separator. Blank lines are dropped.
///
/// ```
/// use wtpanes::escape::join_command_lines;
///
/// assert_eq!(join_command_lines("npm install\r\n\n  npm run dev\n"), "npm install; npm run dev");
/// assert_eq!(join_command_lines("ls"), "ls");
/// ```
pub fn join_command_lines(s: &str) -> String {
    s.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Join PowerShell line continuations into a single line.
///
/// A continuation is a backtick that is not part of an escaped (doubled)
/// backtick pair, followed by a newline and at least one space or tab of
/// indentation. It is replaced by a single space. Escaped backticks and all
/// other text pass through. Generated commands never contain one; this only
/// matters for hand-written command text fed to the batch wrapper.
///
/// ```
/// use wtpanes::escape::flatten_continuations;
///
/// assert_eq!(flatten_continuations("wt `\n    new-tab"), "wt  new-tab");
/// assert_eq!(flatten_continuations("a``\n b"), "a``\n b");
/// assert_eq!(flatten_continuations("a`\nb"), "a`\nb");
/// ```
pub fn flatten_continuations(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '`' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let run_start = i;
        while i < chars.len() && chars[i] == '`' {
            i += 1;
        }
        let run = i - run_start;

        let newline_len = match (chars.get(i), chars.get(i + 1)) {
            (Some('\n'), _) => 1,
            (Some('\r'), Some('\n')) => 2,
            _ => 0,
        };

        let indented = matches!(chars.get(i + newline_len), Some(' ' | '\t'));

        if run % 2 == 1 && newline_len > 0 && indented {
            out.extend(std::iter::repeat_n('`', run - 1));
            out.push(' ');
            i += newline_len;
            while i < chars.len() && (chars[i] == ' ' || chars[i] == '\t') {
                i += 1;
            }
        } else {
            out.extend(std::iter::repeat_n('`', run));
        }
    }

    out
}

/// Reverse [`escape_json_string`].
///
/// Unknown escape sequences are kept verbatim.
pub fn unescape_json_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// Reverse [`escape_single_quoted`].
pub fn unescape_single_quoted(s: &str) -> String {
    s.replace("''", "'")
}

/// Reverse [`normalize_windows_path`].
pub fn denormalize_windows_path(path: &str) -> String {
    path.replace("\\\\", "\\")
}

/// Split a leading PowerShell single-quoted literal off `s`.
///
/// `s` must start with `'`. Returns the decoded literal and the remainder
/// after the closing quote, or `None` if the literal is unterminated.
pub fn take_single_quoted(s: &str) -> Option<(String, &str)> {
    let body = s.strip_prefix('\'')?;
    let mut literal = String::new();
    let mut iter = body.char_indices().peekable();

    while let Some((idx, c)) = iter.next() {
        if c != '\'' {
            literal.push(c);
            continue;
        }
        if let Some(&(_, '\'')) = iter.peek() {
            literal.push('\'');
            iter.next();
        } else {
            return Some((literal, &body[idx + 1..]));
        }
    }

    None
}
