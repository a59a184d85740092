//! Capability sets and their two wire serializations
//!
//! A capability set is a mapping from capability name to a JSON value. The
//! same set serializes two ways: the legacy dialect wants one flat object,
//! the W3C dialect wants an `alwaysMatch`/`firstMatch` structure. Values are
//! opaque to the bridge except for a small reserved set (browser name and
//! version); vendor-prefixed keys (containing a colon) pass through
//! untouched in both directions.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::wire::dialect::Dialect;
use crate::{Error, Result};

/// A set of named capabilities plus optional firstMatch alternatives.
///
/// `spec_compliant` is derived once, when a set is built from a remote end's
/// response, and is deliberately excluded from equality: two sets with the
/// same entries are the same capabilities regardless of which dialect
/// produced them.
#[derive(Debug, Clone, Default)]
pub struct CapabilitySet {
    entries: BTreeMap<String, Value>,
    first_match: Vec<Map<String, Value>>,
    spec_compliant: bool,
}

impl PartialEq for CapabilitySet {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.first_match == other.first_match
    }
}

impl Eq for CapabilitySet {}

impl CapabilitySet {
    /// Create an empty capability set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a capability, replacing any previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.entries.insert(key.into(), value);
        self
    }

    /// Add a firstMatch alternative (W3C serialization only; ignored by the
    /// legacy flat form)
    pub fn add_first_match(&mut self, alternative: Map<String, Value>) -> &mut Self {
        self.first_match.push(alternative);
        self
    }

    /// Look up a capability. Absent keys are `None`, never a default, so a
    /// remote end's omissions stay visible to the caller.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether the set defines the given key
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Whether this set came from a W3C-compliant remote end
    pub fn is_spec_compliant(&self) -> bool {
        self.spec_compliant
    }

    /// Reserved-key accessor: browser name
    pub fn browser_name(&self) -> Option<&str> {
        self.get("browserName").and_then(Value::as_str)
    }

    /// Reserved-key accessor: browser version. Checks the W3C spelling
    /// first, then the legacy `version` key.
    pub fn browser_version(&self) -> Option<&str> {
        self.get("browserVersion")
            .or_else(|| self.get("version"))
            .and_then(Value::as_str)
    }

    /// Serialize for the given dialect.
    ///
    /// Legacy: one flat object of all entries. W3C:
    /// `{"capabilities": {"alwaysMatch": {...}, "firstMatch": [...]}}` with
    /// a single empty alternative when none were requested. Fails with
    /// `CapabilityConflict` if an alternative redefines an alwaysMatch key
    /// with a different value.
    pub fn serialize(&self, dialect: Dialect) -> Result<Value> {
        match dialect {
            Dialect::Legacy => Ok(Value::Object(self.flat_object())),
            Dialect::W3C => {
                for alternative in &self.first_match {
                    for (key, value) in alternative {
                        if let Some(existing) = self.entries.get(key) {
                            if existing != value {
                                return Err(Error::capability_conflict(format!(
                                    "firstMatch redefines '{}' with a different value",
                                    key
                                )));
                            }
                        }
                    }
                }

                let first_match: Vec<Value> = if self.first_match.is_empty() {
                    vec![json!({})]
                } else {
                    self.first_match
                        .iter()
                        .cloned()
                        .map(Value::Object)
                        .collect()
                };

                Ok(json!({
                    "capabilities": {
                        "alwaysMatch": Value::Object(self.flat_object()),
                        "firstMatch": first_match,
                    }
                }))
            }
        }
    }

    /// Parse a wire payload into a capability set.
    ///
    /// Legacy: expects a flat object. W3C: accepts the `{"capabilities":
    /// ...}` wrapper, a bare alwaysMatch/firstMatch object, or an
    /// already-matched flat map (which is what real remote ends return from
    /// new-session). Merging takes the first alternative and overlays
    /// alwaysMatch on collision: alwaysMatch is the mandatory set, so it
    /// wins.
    pub fn from_wire(dialect: Dialect, payload: &Value) -> Result<Self> {
        let object = payload
            .as_object()
            .ok_or_else(|| Error::malformed("capabilities payload is not a JSON object"))?;

        let entries = match dialect {
            Dialect::Legacy => Self::collect_entries(object),
            Dialect::W3C => {
                let inner = match object.get("capabilities") {
                    Some(Value::Object(wrapped)) => wrapped,
                    _ => object,
                };

                if inner.contains_key("alwaysMatch") || inner.contains_key("firstMatch") {
                    let mut merged: BTreeMap<String, Value> = BTreeMap::new();

                    if let Some(Value::Array(alternatives)) = inner.get("firstMatch") {
                        if let Some(first) = alternatives.first() {
                            let alternative = first.as_object().ok_or_else(|| {
                                Error::malformed("firstMatch alternative is not an object")
                            })?;
                            merged.extend(Self::collect_entries(alternative));
                        }
                    }

                    if let Some(always) = inner.get("alwaysMatch") {
                        let always = always
                            .as_object()
                            .ok_or_else(|| Error::malformed("alwaysMatch is not an object"))?;
                        merged.extend(Self::collect_entries(always));
                    }

                    merged
                } else {
                    Self::collect_entries(inner)
                }
            }
        };

        Ok(Self {
            entries,
            first_match: Vec::new(),
            spec_compliant: dialect.is_w3c(),
        })
    }

    fn collect_entries(object: &Map<String, Value>) -> BTreeMap<String, Value> {
        object
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn flat_object(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
