//! Shell profile resolution.
//!
//! A panel names its profile ("PowerShell", "Ubuntu", ...). The
//! [`ProfileTable`] maps those names to the token placed on the `wt`
//! command line. Names outside the table resolve to the fallback token.
//!
//! The table is a plain value owned by the generator, so callers can add
//! their own profiles (see the `[profiles]` config section) or build a
//! completely different table for tests.

use std::collections::BTreeMap;

/// Profile assumed when a panel leaves it empty.
pub const DEFAULT_PROFILE: &str = "PowerShell";

/// Token used for any profile the table does not know.
pub const FALLBACK_TOKEN: &str = "pwsh";

/// Immutable lookup from profile name to launch token.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable {
    tokens: BTreeMap<String, String>,
    fallback: String,
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::empty(FALLBACK_TOKEN)
            .with_profile("PowerShell", "pwsh")
            .with_profile("Command Prompt", "cmd")
            .with_profile("Git Bash", "bash")
            .with_profile("Ubuntu", "wsl -d Ubuntu")
            .with_profile("Custom", FALLBACK_TOKEN)
    }
}

impl ProfileTable {
    /// A table with no entries; every profile resolves to `fallback`.
    pub fn empty(fallback: &str) -> Self {
        Self {
            tokens: BTreeMap::new(),
            fallback: fallback.to_string(),
        }
    }

    /// Add or replace a profile.
    pub fn with_profile(mut self, name: &str, token: &str) -> Self {
        self.tokens.insert(name.to_string(), token.to_string());
        self
    }

    /// Merge extra entries over this table.
    pub fn extend<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, token) in entries {
            self.tokens.insert(name.into(), token.into());
        }
        self
    }

    /// Resolve a profile name to its launch token.
    pub fn token(&self, profile: &str) -> &str {
        self.tokens
            .get(profile)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// Whether the profile is a known entry.
    pub fn contains(&self, profile: &str) -> bool {
        self.tokens.contains_key(profile)
    }

    /// All known profile names, sorted alphabetically.
    pub fn names(&self) -> Vec<&str> {
        self.tokens.keys().map(String::as_str).collect()
    }
}
