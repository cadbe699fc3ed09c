use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::de;

use super::Load;
use super::config::DEFAULT_SEPARATOR;
use super::config::LoadConfig;
use super::strategy::Strategy;
use crate::Error;
use crate::Result;

struct StrategyVisitor;

impl<'de> de::Visitor<'de> for StrategyVisitor {
    type Value = Strategy;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, null, \"*\" or a loader strategy name")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<Strategy, E> {
        Ok(Strategy::Bool(value))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Strategy, E> {
        Ok(Strategy::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Strategy, E> {
        Ok(Strategy::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<Strategy, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Strategy, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Strategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(StrategyVisitor)
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct LoadDefinition {
    separator:        String,
    default_strategy: Option<Strategy>,
    load:             BTreeMap<String, Strategy>,
}

impl Default for LoadDefinition {
    fn default() -> Self {
        Self { separator: DEFAULT_SEPARATOR.to_string(), default_strategy: None, load: BTreeMap::new() }
    }
}

/// Accepts `{"separator": "__", "default_strategy": "raiseload", "load": {"books": true}}`,
/// every field optional.
impl<'de> Deserialize<'de> for Load {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let definition = LoadDefinition::deserialize(deserializer)?;
        let config = LoadConfig { separator: definition.separator, default_strategy: definition.default_strategy };
        Ok(Load::new(config, definition.load))
    }
}

impl Load {
    /// Build from a JSON object of `key: strategy` or a JSON array of keys.
    pub fn from_json(config: LoadConfig, value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(map) => {
                let directives = map
                    .iter()
                    .map(|(key, strategy)| -> Result<(&str, Strategy)> {
                        Ok((key.as_str(), Strategy::deserialize(strategy)?))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::new(config, directives))
            }
            serde_json::Value::Array(items) => {
                let keys = items
                    .iter()
                    .map(|item| {
                        item.as_str().ok_or_else(|| Error::InvalidSpec(format!("expected a relationship path, got {}", item)))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::from_paths(config, keys))
            }
            other => Err(Error::InvalidSpec(format!("expected an object or an array, got {}", other))),
        }
    }

    pub fn from_json_str(config: LoadConfig, json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json(config, &value)
    }
}
