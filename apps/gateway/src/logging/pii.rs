use std::fmt;

use lazy_regex::regex;

/// Masks emails and opaque tokens before they reach a log line.
///
/// - Emails keep the first character of the local part and the full domain:
///   `admin@mail.com` → `a***@mail.com`
/// - Token-like runs (base64/base64url/JWT segments, ≥16 chars) become
///   `[REDACTED_TOKEN]`
///
/// Emails are handled first so their domains are never mistaken for tokens.
pub fn redact(input: &str) -> String {
    let emails = regex!(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b");
    let tokens = regex!(r"[A-Za-z0-9_\-+/]{16,}(?:\.[A-Za-z0-9_\-+/]+)*={0,2}");

    let email_redacted = emails.replace_all(input, |caps: &regex::Captures| {
        let full_match = &caps[0];
        match full_match.split_once('@') {
            Some((local, domain)) if !local.is_empty() => {
                let first: String = local.chars().take(1).collect();
                format!("{first}***@{domain}")
            }
            _ => full_match.to_string(),
        }
    });

    tokens
        .replace_all(&email_redacted, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display wrapper that applies [`redact`] when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
