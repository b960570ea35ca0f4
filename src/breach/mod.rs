//! k-anonymity breach check helpers
//!
//! Only the first five hex characters of the password's SHA-1 leave the
//! process. The range lookup itself (an HTTP GET against a Pwned Passwords
//! style service) belongs to the host and is plugged in through
//! [`RangeLookup`]. This module hashes, splits, parses the range body and
//! turns the outcome into user-facing text.

use serde::Serialize;
use sha1::{Digest, Sha1};
use tracing::warn;

use crate::error::Result;

/// Number of hash characters sent to the range service
pub const PREFIX_LENGTH: usize = 5;

/// Fetches the range body for a 5-character uppercase hash prefix
pub trait RangeLookup {
    /// Body of `GET /range/{prefix}`: lines of `SUFFIX:COUNT`
    fn fetch_range(&self, prefix: &str) -> Result<String>;
}

/// Outcome of a breach check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreachResult {
    pub is_breached: bool,
    /// Times the password appears in known breaches
    pub count: u64,
    pub message: String,
    /// The lookup could not be completed
    pub error: bool,
}

impl BreachResult {
    fn clean(message: &str) -> Self {
        Self {
            is_breached: false,
            count: 0,
            message: message.to_string(),
            error: false,
        }
    }
}

/// Split the uppercase SHA-1 hex of `password` into (prefix, suffix)
pub fn k_anonymity_query(password: &str) -> (String, String) {
    let digest = Sha1::digest(password.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{:02X}", b)).collect();
    let (prefix, suffix) = hex.split_at(PREFIX_LENGTH);
    (prefix.to_string(), suffix.to_string())
}

/// Look for `suffix` in a range response body
pub fn parse_range_response(body: &str, suffix: &str) -> BreachResult {
    for line in body.lines() {
        if line.starts_with(suffix) {
            let count = line
                .split(':')
                .nth(1)
                .and_then(|c| c.trim().parse::<u64>().ok())
                .unwrap_or(0);
            return BreachResult {
                is_breached: true,
                count,
                message: format!("Password found in {} data breaches", group_thousands(count)),
                error: false,
            };
        }
    }

    BreachResult::clean("Password not found in known breaches")
}

/// Check `password` through `lookup`. Lookup failures become an error result.
pub fn check_password<L: RangeLookup + ?Sized>(password: &str, lookup: &L) -> BreachResult {
    if password.is_empty() {
        return BreachResult::clean("No password to check");
    }

    let (prefix, suffix) = k_anonymity_query(password);
    match lookup.fetch_range(&prefix) {
        Ok(body) => parse_range_response(&body, &suffix),
        Err(e) => {
            warn!(error = %e, "breach range lookup failed");
            BreachResult {
                is_breached: false,
                count: 0,
                message: format!("Breach check failed: {}", e),
                error: true,
            }
        }
    }
}

/// Advice to show alongside a breach result
pub fn security_recommendation(result: &BreachResult) -> &'static str {
    if result.error {
        return "Unable to verify password security. Consider using a different password.";
    }

    if result.is_breached {
        if result.count > 1000 {
            "This password is highly compromised. Generate a new one immediately."
        } else if result.count > 100 {
            "This password has been found in multiple breaches. Consider generating a new one."
        } else {
            "This password has been found in a data breach. Consider generating a new one."
        }
    } else {
        "This password appears to be secure and not found in known breaches."
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
