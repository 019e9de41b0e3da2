//! Permission catalog: the static mapping of permission names to bit flags.
//!
//! The catalog is read once at startup from a JSON resource such as
//!
//! ```json
//! { "KICK_MEMBERS": 2, "BAN_MEMBERS": 4, "ADMINISTRATOR": 8 }
//! ```
//!
//! and is immutable afterwards. Names are matched case-insensitively. A resource that
//! is missing or malformed never stops the bot: `load_or_empty` logs the
//! `ConfigError` and falls back to an empty catalog, under which every fake permission
//! check fails closed.

use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use dioxus_logger::tracing;

use crate::{error::config::ConfigError, model::permission::PermissionFlag};

/// Name of the catalog entry that grants every fake permission.
pub const ADMINISTRATOR: &str = "ADMINISTRATOR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionCatalog {
    /// Upper-cased permission name to flag.
    flags: BTreeMap<String, PermissionFlag>,
}

impl PermissionCatalog {
    /// Builds a catalog from `(name, value)` pairs.
    ///
    /// # Returns
    /// - `Ok(PermissionCatalog)` - Every value is a distinct positive power of two and
    ///   every name is unique ignoring case
    /// - `Err(ConfigError::InvalidPermissionFlag)` - A value is not a single positive bit
    /// - `Err(ConfigError::DuplicatePermissionFlag)` - Two names share a bit
    /// - `Err(ConfigError::DuplicatePermissionName)` - Two names differ only by case
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut flags = BTreeMap::new();
        let mut owners: HashMap<i64, String> = HashMap::new();

        for (name, value) in entries {
            let name = name.as_ref().trim().to_ascii_uppercase();

            let flag = PermissionFlag::new(value).ok_or_else(|| {
                ConfigError::InvalidPermissionFlag {
                    name: name.clone(),
                    value,
                }
            })?;

            if let Some(existing) = owners.get(&value) {
                return Err(ConfigError::DuplicatePermissionFlag {
                    name,
                    existing: existing.clone(),
                    value,
                });
            }

            if flags.insert(name.clone(), flag).is_some() {
                return Err(ConfigError::DuplicatePermissionName(name));
            }
            owners.insert(value, name);
        }

        Ok(Self { flags })
    }

    /// Parses a catalog from its JSON object form.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let entries: BTreeMap<String, i64> = serde_json::from_str(json)?;

        Self::from_entries(entries)
    }

    /// Reads and parses the catalog resource at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    /// Reads the catalog at `path`, falling back to an empty catalog on any error.
    ///
    /// The error is logged rather than returned; with an empty catalog every fake
    /// permission check denies.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match Self::load(path) {
            Ok(catalog) => {
                tracing::info!(
                    "Loaded {} permission flags from {}",
                    catalog.len(),
                    path.display()
                );
                catalog
            }
            Err(e) => {
                tracing::error!("{}; fake permission checks will deny", e);
                Self::default()
            }
        }
    }

    /// Case-insensitive lookup of a permission name.
    ///
    /// # Returns
    /// - `Some(PermissionFlag)` - The catalog knows this permission
    /// - `None` - Unknown permission (distinct from a known permission that is unset)
    pub fn resolve(&self, name: &str) -> Option<PermissionFlag> {
        self.flags.get(&name.trim().to_ascii_uppercase()).copied()
    }

    /// The flag of the `ADMINISTRATOR` entry, if the catalog declares one.
    pub fn administrator(&self) -> Option<PermissionFlag> {
        self.resolve(ADMINISTRATOR)
    }

    /// All entries ordered by bit position.
    pub fn entries(&self) -> Vec<(&str, PermissionFlag)> {
        let mut entries: Vec<_> = self
            .flags
            .iter()
            .map(|(name, flag)| (name.as_str(), *flag))
            .collect();
        entries.sort_by_key(|(_, flag)| *flag);
        entries
    }

    /// Names of every catalog entry whose flag is set in `bitmask`, in bit order.
    ///
    /// Bits without a catalog entry are ignored.
    pub fn names_in(&self, bitmask: i64) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(_, flag)| flag.is_set_in(bitmask))
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
