use regex::Regex;

use crate::error::ScanError;

/// A set of exclusion globs compiled once per scan and matched against bare entry names.
///
/// Glob syntax follows `fnmatch`: `*` matches any run of characters, `?` matches exactly one,
/// `[...]` is a character class (`[!...]` negates it) and everything else is literal. A pattern
/// has to match the whole name.
#[derive(Debug)]
pub struct ExcludeSet {
    patterns: Vec<Regex>,
}

impl ExcludeSet {
    /// Compiles every glob in `patterns`.
    ///
    /// Patterns which can never match anything (e.g. `[z-a]`) are dropped.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ScanError> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let Some(translated) = translate(pattern) else {
                continue;
            };
            let regex = Regex::new(&translated).map_err(|source| ScanError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            compiled.push(regex);
        }
        Ok(Self { patterns: compiled })
    }

    /// Whether `name` matches at least one glob of the set.
    pub fn is_match(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(name))
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Returns `true` if `name` matches any of the glob `patterns`.
///
/// One-shot form of [`ExcludeSet::is_match`], patterns are compiled on every call.
pub fn matches<S: AsRef<str>>(name: &str, patterns: &[S]) -> bool {
    patterns.iter().any(|pattern| {
        translate(pattern.as_ref())
            .and_then(|translated| Regex::new(&translated).ok())
            .is_some_and(|regex| regex.is_match(name))
    })
}

/// Translates a glob into an anchored regex. `None` means the glob can never match.
fn translate(pattern: &str) -> Option<String> {
    let chars = pattern.chars().collect::<Vec<char>>();
    // Host default: Windows names compare case-insensitively.
    let mut out = String::from(if cfg!(windows) { r"(?is)\A" } else { r"(?s)\A" });
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i..end])?);
                    i = end + 1;
                }
                None => out.push_str(r"\["),
            },
            _ => out.push_str(&escape(c)),
        }
    }
    out.push_str(r"\z");
    Some(out)
}

/// Index of the `]` closing a class whose body starts at `start`.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    // A leading `]` is a class member, not the terminator.
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    (j..chars.len()).find(|&k| chars[k] == ']')
}

fn translate_class(body: &[char]) -> Option<String> {
    let (negated, body) = match body.split_first() {
        Some(('!', rest)) => (true, rest),
        _ => (false, body),
    };
    let mut members = String::new();
    let mut k = 0;
    while k < body.len() {
        if k + 2 < body.len() && body[k + 1] == '-' {
            let (lo, hi) = (body[k], body[k + 2]);
            if lo <= hi {
                members.push_str(&escape(lo));
                members.push('-');
                members.push_str(&escape(hi));
            }
            k += 3;
        } else {
            members.push_str(&escape(body[k]));
            k += 1;
        }
    }
    match (members.is_empty(), negated) {
        (true, false) => None,
        (true, true) => Some(String::from(".")),
        (false, true) => Some(format!("[^{members}]")),
        (false, false) => Some(format!("[{members}]")),
    }
}

fn escape(c: char) -> String {
    regex::escape(c.encode_utf8(&mut [0; 4]))
}
