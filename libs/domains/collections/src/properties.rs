//! Property reconciliation for collection metadata.
//!
//! A collection's stored property map is sparse: reserved keys are always
//! present conceptually, tunable backend properties may or may not have a
//! stored value, and operators can add arbitrary custom keys. Reconciling
//! merges the stored map with the static catalogs into the full, stably
//! sorted set an editor binds to. A key's origin is derived from static
//! membership on every read and never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

use crate::error::{CollectionError, CollectionResult};

/// Platform-owned keys. Their names are never user-renamable.
pub const RESERVED_KEYS: &[&str] = &[
    "team_id",
    "collection_type",
    "alias",
    "description",
    "embedding_model",
    "embedding_provider",
    "embedding_dimension",
];

/// Backend-tunable properties the store understands. Shown as editable
/// placeholders even when no value is stored.
pub const DEFAULT_CATALOG_KEYS: &[&str] = &[
    "collection.ttl.seconds",
    "collection.autocompaction.enabled",
    "collection.insertRate.max.mb",
    "collection.upsertRate.max.mb",
    "collection.deleteRate.max.mb",
    "collection.bulkLoadRate.max.mb",
    "collection.queryRate.max.qps",
    "collection.searchRate.max.vps",
    "collection.replica.number",
    "partition.diskProtection.diskQuota.mb",
];

/// Where a reconciled property key comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PropertyOrigin {
    /// Reserved platform key; locked in the editor.
    System,
    /// Known backend-tunable key; editable placeholder.
    DefaultCatalog,
    /// Operator-defined key present only in the stored map.
    Custom,
}

/// One reconciled property row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PropertyEntry {
    pub key: String,
    pub value: String,
    pub origin: PropertyOrigin,
}

/// A planned single-key write. `remove` is set only when a custom key was
/// renamed, so the store can drop the old key in the same round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PropertyPatch {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove: Option<String>,
}

fn origin_of(key: &str, reserved: &[&str], catalog: &[&str]) -> PropertyOrigin {
    if reserved.contains(&key) {
        PropertyOrigin::System
    } else if catalog.contains(&key) {
        PropertyOrigin::DefaultCatalog
    } else {
        PropertyOrigin::Custom
    }
}

/// Merge a stored property map with explicit catalogs.
///
/// The result is keyed by the union of the catalog and the stored keys,
/// deduplicated and sorted ascending for stable display diffing.
pub fn reconcile_with(
    stored: &BTreeMap<String, String>,
    reserved: &[&str],
    catalog: &[&str],
) -> Vec<PropertyEntry> {
    let mut keys: Vec<&str> = catalog
        .iter()
        .copied()
        .chain(stored.keys().map(String::as_str))
        .collect();
    keys.sort_unstable();
    keys.dedup();

    keys.into_iter()
        .map(|key| PropertyEntry {
            key: key.to_string(),
            value: stored.get(key).cloned().unwrap_or_default(),
            origin: origin_of(key, reserved, catalog),
        })
        .collect()
}

/// Merge a stored property map with the platform catalogs.
pub fn reconcile(stored: &BTreeMap<String, String>) -> Vec<PropertyEntry> {
    reconcile_with(stored, RESERVED_KEYS, DEFAULT_CATALOG_KEYS)
}

fn contains_key(entries: &[PropertyEntry], key: &str) -> bool {
    entries.iter().any(|e| e.key == key)
}

/// Plan a value change for an existing key.
pub fn set_value(entries: &[PropertyEntry], key: &str, value: &str) -> CollectionResult<PropertyPatch> {
    if !contains_key(entries, key) {
        return Err(CollectionError::UnknownPropertyKey(key.to_string()));
    }
    Ok(PropertyPatch {
        key: key.to_string(),
        value: value.to_string(),
        remove: None,
    })
}

/// Plan the addition of a new custom key.
pub fn add_custom(entries: &[PropertyEntry], key: &str, value: &str) -> CollectionResult<PropertyPatch> {
    let key = key.trim();
    if key.is_empty() {
        return Err(CollectionError::Validation(
            "property key must not be empty".to_string(),
        ));
    }
    if contains_key(entries, key) || RESERVED_KEYS.contains(&key) {
        return Err(CollectionError::DuplicateKey(key.to_string()));
    }
    Ok(PropertyPatch {
        key: key.to_string(),
        value: value.to_string(),
        remove: None,
    })
}

/// Plan the rename of a custom key, carrying its value to the new key.
///
/// Reserved keys keep their names for the lifetime of the platform.
pub fn rename_custom(
    entries: &[PropertyEntry],
    from: &str,
    to: &str,
    value: &str,
) -> CollectionResult<PropertyPatch> {
    if RESERVED_KEYS.contains(&from) {
        return Err(CollectionError::ReservedKeyRename(from.to_string()));
    }
    if !contains_key(entries, from) {
        return Err(CollectionError::UnknownPropertyKey(from.to_string()));
    }
    let mut patch = add_custom(entries, to, value)?;
    patch.remove = Some(from.to_string());
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reconciled_set_is_union_sorted_and_deduplicated() {
        let map = stored(&[
            ("alias", "docs"),
            ("collection.ttl.seconds", "3600"),
            ("zz_custom", "1"),
        ]);
        let entries = reconcile(&map);

        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        let mut expected: Vec<&str> = DEFAULT_CATALOG_KEYS.to_vec();
        expected.extend(["alias", "zz_custom"]);
        expected.sort_unstable();
        assert_eq!(keys, expected);

        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn origin_is_derived_from_static_membership() {
        let map = stored(&[("alias", "docs"), ("zz_custom", "1")]);
        let entries = reconcile(&map);
        let origin = |key: &str| entries.iter().find(|e| e.key == key).unwrap().origin;

        assert_eq!(origin("alias"), PropertyOrigin::System);
        assert_eq!(origin("collection.ttl.seconds"), PropertyOrigin::DefaultCatalog);
        assert_eq!(origin("zz_custom"), PropertyOrigin::Custom);
    }

    #[test]
    fn catalog_keys_appear_as_empty_placeholders() {
        let entries = reconcile(&BTreeMap::new());
        assert_eq!(entries.len(), DEFAULT_CATALOG_KEYS.len());
        assert!(entries.iter().all(|e| e.value.is_empty()));
        assert!(entries.iter().all(|e| e.origin == PropertyOrigin::DefaultCatalog));
    }

    #[test]
    fn set_value_patches_a_single_key() {
        let map = stored(&[("zz_custom", "1")]);
        let entries = reconcile(&map);
        let patch = set_value(&entries, "zz_custom", "2").unwrap();
        assert_eq!(
            patch,
            PropertyPatch {
                key: "zz_custom".to_string(),
                value: "2".to_string(),
                remove: None
            }
        );
    }

    #[test]
    fn set_value_rejects_unknown_keys() {
        let entries = reconcile(&BTreeMap::new());
        assert_eq!(
            set_value(&entries, "nope", "1").unwrap_err(),
            CollectionError::UnknownPropertyKey("nope".to_string())
        );
    }

    #[test]
    fn patch_round_trips_through_reconcile() {
        let mut map = stored(&[("zz_custom", "1")]);
        let entries = reconcile(&map);
        let patch = set_value(&entries, "zz_custom", "42").unwrap();

        // Simulate the external store applying the single-key patch.
        map.insert(patch.key.clone(), patch.value.clone());
        let after = reconcile(&map);
        let entry = after.iter().find(|e| e.key == "zz_custom").unwrap();
        assert_eq!(entry.value, "42");
        assert_eq!(after.len(), entries.len());
    }

    #[test]
    fn add_custom_rejects_existing_and_reserved_keys() {
        let map = stored(&[("zz_custom", "1")]);
        let entries = reconcile(&map);
        assert_eq!(
            add_custom(&entries, "zz_custom", "2").unwrap_err(),
            CollectionError::DuplicateKey("zz_custom".to_string())
        );
        assert_eq!(
            add_custom(&entries, "alias", "x").unwrap_err(),
            CollectionError::DuplicateKey("alias".to_string())
        );
        assert!(add_custom(&entries, "brand_new", "2").is_ok());
    }

    #[test]
    fn rename_custom_keeps_reserved_names() {
        let map = stored(&[("alias", "docs"), ("zz_custom", "1")]);
        let entries = reconcile(&map);
        assert_eq!(
            rename_custom(&entries, "alias", "nickname", "docs").unwrap_err(),
            CollectionError::ReservedKeyRename("alias".to_string())
        );
    }

    #[test]
    fn rename_custom_moves_value_and_drops_old_key() {
        let map = stored(&[("zz_custom", "1")]);
        let entries = reconcile(&map);
        let patch = rename_custom(&entries, "zz_custom", "renamed", "1").unwrap();
        assert_eq!(patch.key, "renamed");
        assert_eq!(patch.value, "1");
        assert_eq!(patch.remove.as_deref(), Some("zz_custom"));
    }

    #[test]
    fn rename_custom_rejects_collisions() {
        let map = stored(&[("a_key", "1"), ("b_key", "2")]);
        let entries = reconcile(&map);
        assert_eq!(
            rename_custom(&entries, "a_key", "b_key", "1").unwrap_err(),
            CollectionError::DuplicateKey("b_key".to_string())
        );
    }
}
