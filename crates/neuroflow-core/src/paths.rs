use crate::error::{NeuroflowError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Profile directory layout
// ---------------------------------------------------------------------------

pub const STORE_DIR: &str = "store";
pub const CONFIG_FILE: &str = "config.yaml";

/// Well-known store keys. Values are string blobs, JSON-encoded where the
/// value is structured.
pub mod keys {
    /// First-run acknowledgement flag, value `"true"`.
    pub const WELCOME_SEEN: &str = "welcome-seen";
    /// JSON-encoded archetype (classification result).
    pub const ARCHETYPE: &str = "archetype";
    /// JSON-encoded journey for the currently selected sport.
    pub const JOURNEY: &str = "journey";
    /// Raw API credential override from the settings action.
    pub const API_KEY: &str = "api-key";
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn store_dir(root: &Path) -> PathBuf {
    root.join(STORE_DIR)
}

pub fn store_key_path(root: &Path, key: &str) -> PathBuf {
    store_dir(root).join(key)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Key validation
// ---------------------------------------------------------------------------

static KEY_RE: OnceLock<Regex> = OnceLock::new();

fn key_re() -> &'static Regex {
    KEY_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

/// Store keys become file names, so they are held to the same shape as the
/// well-known keys: lowercase alphanumeric with interior hyphens.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || key.len() > 64 || !key_re().is_match(key) {
        return Err(NeuroflowError::InvalidKey(key.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_keys() {
        for key in [keys::WELCOME_SEEN, keys::ARCHETYPE, keys::JOURNEY, keys::API_KEY, "x1"] {
            validate_key(key).unwrap_or_else(|_| panic!("expected valid: {key}"));
        }
    }

    #[test]
    fn invalid_keys() {
        for key in ["", "-leading", "trailing-", "has spaces", "UPPER", "a_b", "../escape"] {
            assert!(validate_key(key).is_err(), "expected invalid: {key}");
        }
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/profile");
        assert_eq!(config_path(root), PathBuf::from("/tmp/profile/config.yaml"));
        assert_eq!(
            store_key_path(root, keys::JOURNEY),
            PathBuf::from("/tmp/profile/store/journey")
        );
    }
}
