//! Duplicate identifier policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What a projection does when two rows derive the same identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyPolicy {
    /// Fail with `DuplicateKeyError`
    #[default]
    Reject,
    /// Keep the earliest row and ignore later ones
    KeepFirst,
    /// Let later rows overwrite earlier ones
    KeepLast,
}

impl fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyPolicy::Reject => "reject",
            KeyPolicy::KeepFirst => "keep-first",
            KeyPolicy::KeepLast => "keep-last",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for KeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(KeyPolicy::Reject),
            "keep-first" => Ok(KeyPolicy::KeepFirst),
            "keep-last" => Ok(KeyPolicy::KeepLast),
            other => Err(format!(
                "unknown key policy: {}. Supported: reject, keep-first, keep-last",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reject() {
        assert_eq!(KeyPolicy::default(), KeyPolicy::Reject);
    }

    #[test]
    fn test_display_parse_agree() {
        for policy in [KeyPolicy::Reject, KeyPolicy::KeepFirst, KeyPolicy::KeepLast] {
            assert_eq!(policy.to_string().parse::<KeyPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert!("last-write-wins".parse::<KeyPolicy>().is_err());
    }
}
