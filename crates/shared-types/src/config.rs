use crate::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Account table compiled into the binary.
const ACCOUNTS_TOML: &str = include_str!("../accounts.toml");

static DIRECTORY: OnceLock<Directory> = OnceLock::new();

/// One `[accounts.<Role>]` table from `accounts.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountEntry {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub display_name: String,
}

/// Top-level structure of `accounts.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccountsConfig {
    #[serde(default)]
    pub accounts: HashMap<String, AccountEntry>,
}

/// Expected credentials for one role.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialEntry {
    pub email: String,
    pub password: String,
}

/// Immutable role → credential and role → display name lookup.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    credentials: HashMap<Role, CredentialEntry>,
    display_names: HashMap<Role, String>,
}

impl Directory {
    /// Build from a parsed config. Tables whose key is not a known role are
    /// skipped; a missing `display_name` falls back to the role label.
    pub fn from_config(config: AccountsConfig) -> Self {
        let mut directory = Directory::default();
        for (key, entry) in config.accounts {
            let Some(role) = Role::parse(&key) else {
                tracing::warn!(role = %key, "ignoring account for unknown role");
                continue;
            };
            let display_name = if entry.display_name.is_empty() {
                role.as_str().to_string()
            } else {
                entry.display_name
            };
            directory.credentials.insert(
                role,
                CredentialEntry {
                    email: entry.email,
                    password: entry.password,
                },
            );
            directory.display_names.insert(role, display_name);
        }
        directory
    }

    /// Parse a TOML document. Errors are returned so callers can decide
    /// whether to fall back.
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        let config: AccountsConfig = toml::from_str(source)?;
        Ok(Self::from_config(config))
    }

    pub fn credential(&self, role: Role) -> Option<&CredentialEntry> {
        self.credentials.get(&role)
    }

    pub fn display_name(&self, role: Role) -> Option<&str> {
        self.display_names.get(&role).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

/// The process-wide directory, parsed from the embedded `accounts.toml` on
/// first use. If the embedded document fails to parse the directory is
/// empty and every login is rejected.
pub fn directory() -> &'static Directory {
    DIRECTORY.get_or_init(|| match Directory::from_toml(ACCOUNTS_TOML) {
        Ok(directory) => {
            tracing::debug!(accounts = directory.len(), "account directory loaded");
            directory
        }
        Err(e) => {
            tracing::error!("failed to parse accounts.toml: {e}; all logins will be rejected");
            Directory::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_directory_has_every_role() {
        let dir = directory();
        assert_eq!(dir.len(), 3);
        for role in Role::ALL {
            assert!(dir.credential(role).is_some(), "missing {role}");
        }
    }

    #[test]
    fn embedded_display_names() {
        let dir = directory();
        assert_eq!(dir.display_name(Role::Agent), Some("Ravi Verma"));
        assert_eq!(dir.display_name(Role::Customer), Some("Sanjay J"));
        assert_eq!(dir.display_name(Role::Manager), Some("Sajith P"));
    }

    #[test]
    fn empty_toml_yields_empty_directory() {
        let dir = Directory::from_toml("").unwrap();
        assert!(dir.is_empty());
    }

    #[test]
    fn unknown_role_tables_are_skipped() {
        let dir = Directory::from_toml(
            r#"
            [accounts.Admin]
            email = "root@example.com"
            password = "root"

            [accounts.Agent]
            email = "a@example.com"
            password = "pw"
            "#,
        )
        .unwrap();
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.credential(Role::Agent).unwrap().email, "a@example.com");
    }

    #[test]
    fn missing_display_name_falls_back_to_label() {
        let dir = Directory::from_toml(
            r#"
            [accounts.Manager]
            email = "m@example.com"
            password = "pw"
            "#,
        )
        .unwrap();
        assert_eq!(dir.display_name(Role::Manager), Some("Manager"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Directory::from_toml("[accounts.Agent").is_err());
    }
}
