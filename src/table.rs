use std::{collections::HashMap, fmt, path::Path};

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::InputError;

/// Name to id pairs, kept in the order they appear in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: Vec<(String, u64)>,
}

impl LookupTable {
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let path = dunce::canonicalize(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let contents = std::fs::read_to_string(&path).map_err(|source| InputError::Read {
            path: path.clone(),
            source,
        })?;

        log::info!("Parsing lookup table from: {}", path.display());
        serde_json::from_str(&contents).map_err(|source| InputError::Parse { path, source })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<'de> Deserialize<'de> for LookupTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = LookupTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object mapping names to unsigned integers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, u64)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
        // key -> position in `entries`; a repeated key keeps its first slot and the last value
        let mut slots: HashMap<String, usize> = HashMap::new();

        while let Some(key) = map.next_key::<String>()? {
            let value = map.next_value::<serde_json::Value>()?;
            let Some(id) = value.as_u64() else {
                return Err(de::Error::custom(format!(
                    "value of {key:?} must be an unsigned 64-bit integer, found {value}"
                )));
            };
            match slots.get(&key) {
                Some(&slot) => entries[slot].1 = id,
                None => {
                    slots.insert(key.clone(), entries.len());
                    entries.push((key, id));
                }
            }
        }

        Ok(LookupTable { entries })
    }
}
