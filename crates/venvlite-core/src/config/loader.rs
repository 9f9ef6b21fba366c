//! Environment variable loading helpers.
//!
//! Centralizes the fallback chains so command code never repeats `or_else`
//! calls against `std::env::var`.

use std::env;

/// Load `.env` from the current directory into the process environment
/// (never overriding variables that are already set). Runs at most once.
pub fn load_dotenv() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let path = env::current_dir()
            .map(|d| d.join(".env"))
            .unwrap_or_else(|_| std::path::PathBuf::from(".env"));
        if let Ok(content) = std::fs::read_to_string(&path) {
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some(eq_pos) = line.find('=') {
                    let key = line[..eq_pos].trim();
                    let mut value = line[eq_pos + 1..].trim();
                    // Strip inline comment (# not inside quotes)
                    if let Some(hash_pos) = value.find('#') {
                        let before_hash = value[..hash_pos].trim_end();
                        if !before_hash.contains('"') && !before_hash.contains('\'') {
                            value = before_hash;
                        }
                    }
                    if (value.starts_with('"') && value.ends_with('"'))
                        || (value.starts_with('\'') && value.ends_with('\''))
                    {
                        value = &value[1..value.len() - 1];
                    }
                    if !key.is_empty() && env::var(key).is_err() {
                        #[allow(unsafe_code)]
                        unsafe {
                            env::set_var(key, value);
                        }
                    }
                }
            }
        }
    });
}

/// Read an environment variable, falling back to `default` when unset or empty.
pub fn env_or<F>(key: &str, default: F) -> String
where
    F: FnOnce() -> String,
{
    env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(default)
}

/// Read an environment variable, returning `None` when unset or empty.
pub fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|s| {
        let s = s.trim().to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    })
}

/// Parse a boolean environment variable: 0/false/no/off are false,
/// anything else set is true, unset uses `default`.
pub fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key).ok().as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Serialized via distinct keys per test; the process environment is shared.

    #[test]
    fn test_env_or_default_when_unset() {
        let v = env_or("VENVLITE_TEST_UNSET_KEY", || "fallback".to_string());
        assert_eq!(v, "fallback");
    }

    #[test]
    fn test_env_or_reads_value() {
        unsafe { env::set_var("VENVLITE_TEST_OR_KEY", "hello") };
        let v = env_or("VENVLITE_TEST_OR_KEY", || "fallback".to_string());
        assert_eq!(v, "hello");
    }

    #[test]
    fn test_env_optional_empty_is_none() {
        unsafe { env::set_var("VENVLITE_TEST_EMPTY_KEY", "   ") };
        assert_eq!(env_optional("VENVLITE_TEST_EMPTY_KEY"), None);
    }

    #[test]
    fn test_env_bool_falsy_values() {
        for v in ["0", "false", "no", "off", "FALSE", "Off"] {
            unsafe { env::set_var("VENVLITE_TEST_BOOL_KEY", v) };
            assert!(!env_bool("VENVLITE_TEST_BOOL_KEY", true), "value: {}", v);
        }
        unsafe { env::set_var("VENVLITE_TEST_BOOL_KEY", "1") };
        assert!(env_bool("VENVLITE_TEST_BOOL_KEY", false));
    }

    #[test]
    fn test_env_bool_unset_uses_default() {
        assert!(env_bool("VENVLITE_TEST_BOOL_UNSET", true));
        assert!(!env_bool("VENVLITE_TEST_BOOL_UNSET", false));
    }
}
