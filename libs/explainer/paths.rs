//! Platform-neutral path construction
//!
//! Configuration literals were written with whichever separator the author's
//! machine used (`..\test_models`, `../../../data/sst2\`). This module
//! rebuilds such strings with the platform separator only, keeping any
//! Windows drive or UNC prefix intact.

use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path, PathBuf};

/// Separators accepted in raw configuration strings
const SEPARATORS: [char; 2] = ['/', '\\'];

/// Leading Windows prefix, kept as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix<'a> {
    /// `C:`
    Drive(&'a str),
    /// `\\server\share`
    Unc { server: &'a str, share: &'a str },
}

/// Split a drive or UNC prefix off `raw`, returning the remainder
fn split_prefix(raw: &str) -> (Option<Prefix<'_>>, &str) {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return (Some(Prefix::Drive(&raw[..2])), &raw[2..]);
    }

    let unc = raw
        .strip_prefix(r"\\")
        .or_else(|| raw.strip_prefix("//"));
    if let Some(rest) = unc {
        let mut parts = rest.splitn(3, SEPARATORS);
        if let (Some(server), Some(share)) = (parts.next(), parts.next())
            && !server.is_empty()
            && !share.is_empty()
        {
            return (Some(Prefix::Unc { server, share }), parts.next().unwrap_or(""));
        }
    }

    (None, raw)
}

/// Build a platform-neutral path from a raw configuration string
///
/// - Both `/` and `\` are treated as separators
/// - Empty and `.` components are dropped, so trailing separators vanish
/// - `..` components are kept as-is (no resolution against the filesystem)
/// - A leading separator keeps the path rooted
/// - A drive (`C:`) or UNC share (`\\server\share`) prefix is kept whole,
///   with the root separator after it
/// - A non-empty input that reduces to nothing becomes `.`
pub fn normalize_path(raw: &str) -> PathBuf {
    let (prefix, rest) = split_prefix(raw);
    let components: Vec<&str> = rest
        .split(SEPARATORS)
        .filter(|component| !component.is_empty() && *component != ".")
        .collect();

    let mut path = String::new();
    let rooted = match prefix {
        Some(Prefix::Drive(drive)) => {
            path.push_str(drive);
            rest.starts_with(SEPARATORS)
        }
        Some(Prefix::Unc { server, share }) => {
            path.extend([MAIN_SEPARATOR_STR, MAIN_SEPARATOR_STR, server, MAIN_SEPARATOR_STR, share]);
            !components.is_empty()
        }
        None => rest.starts_with(SEPARATORS),
    };

    if rooted {
        path.push(MAIN_SEPARATOR);
    }
    path.push_str(&components.join(MAIN_SEPARATOR_STR));

    if path.is_empty() && !raw.is_empty() {
        path.push('.');
    }

    PathBuf::from(path)
}

/// Re-normalize an existing path (e.g. one deserialized from a config file)
pub fn normalize(path: &Path) -> PathBuf {
    normalize_path(&path.to_string_lossy())
}
