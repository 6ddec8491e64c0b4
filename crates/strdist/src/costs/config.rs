//! Reading cost models from JSON.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

use super::{check_symbol, CostModel, Symbol};
use crate::StrDistError;

/// A serializable description of a `CostModel<f64>`.
///
/// Every field is optional. Each table starts uniform at its base cost and
/// the overrides are applied on top.
///
/// ```json
/// {
///   "insert": 1.0,
///   "delete": 1.0,
///   "substitute": 1.0,
///   "insert_overrides": { "a": 5.0 },
///   "delete_overrides": { "z": 7.5 },
///   "substitute_overrides": [{ "from": "a", "to": "z", "cost": 1.2 }]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostConfig {
    /// Base cost of inserting any symbol.
    pub insert: f64,
    /// Base cost of deleting any symbol.
    pub delete: f64,
    /// Base cost of substituting any pair of distinct symbols.
    pub substitute: f64,
    /// Per-symbol insertion costs, keyed by single ASCII characters.
    pub insert_overrides: BTreeMap<String, f64>,
    /// Per-symbol deletion costs, keyed by single ASCII characters.
    pub delete_overrides: BTreeMap<String, f64>,
    /// Per-pair substitution costs.
    pub substitute_overrides: Vec<SubstituteOverride>,
}

/// The cost of replacing `from` with `to`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubstituteOverride {
    /// The symbol being replaced.
    pub from: String,
    /// The replacement symbol.
    pub to: String,
    /// The cost of the replacement.
    pub cost: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            insert: 1.0,
            delete: 1.0,
            substitute: 1.0,
            insert_overrides: BTreeMap::new(),
            delete_overrides: BTreeMap::new(),
            substitute_overrides: Vec::new(),
        }
    }
}

impl CostConfig {
    /// Parses a `CostConfig` from a JSON string.
    ///
    /// # Errors
    ///
    /// If the string is not a valid JSON cost configuration.
    pub fn from_json_str(json: &str) -> Result<Self, StrDistError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a `CostConfig` from a JSON file.
    ///
    /// # Errors
    ///
    /// * If the file cannot be read.
    /// * If its contents are not a valid JSON cost configuration.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, StrDistError> {
        let path = path.as_ref();
        ftlog::debug!("Reading cost configuration from {path:?}");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// If serialization fails.
    pub fn to_json_string(&self) -> Result<String, StrDistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the `CostModel` described by this configuration.
    ///
    /// # Errors
    ///
    /// If any override key is not exactly one ASCII character.
    pub fn into_model(self) -> Result<CostModel<f64>, StrDistError> {
        let mut model = CostModel::uniform(self.insert, self.delete, self.substitute);

        for (key, cost) in &self.insert_overrides {
            model.set_insert_cost(parse_symbol(key)?, *cost)?;
        }
        for (key, cost) in &self.delete_overrides {
            model.set_delete_cost(parse_symbol(key)?, *cost)?;
        }
        for o in &self.substitute_overrides {
            model.set_substitute_cost(parse_symbol(&o.from)?, parse_symbol(&o.to)?, o.cost)?;
        }

        ftlog::debug!(
            "Built cost model with {} insert, {} delete and {} substitute overrides",
            self.insert_overrides.len(),
            self.delete_overrides.len(),
            self.substitute_overrides.len()
        );

        Ok(model)
    }
}

/// Reads an override key as a single symbol of the alphabet.
fn parse_symbol(key: &str) -> Result<Symbol, StrDistError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            let i = check_symbol(u32::from(c), 0).map_err(|e| StrDistError::Config(format!("key {key:?}: {e}")))?;
            Symbol::try_from(i).map_err(|e| StrDistError::Config(e.to_string()))
        }
        _ => Err(StrDistError::Config(format!(
            "key {key:?} must be exactly one character"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_unit() -> Result<(), StrDistError> {
        let model = CostConfig::from_json_str("{}")?.into_model()?;
        assert_eq!(&model, CostModel::unit());
        Ok(())
    }

    #[test]
    fn overrides() -> Result<(), StrDistError> {
        let json = r#"{
            "delete": 2.0,
            "insert_overrides": { "a": 5.0 },
            "delete_overrides": { "z": 7.5 },
            "substitute_overrides": [{ "from": "a", "to": "z", "cost": 1.2 }]
        }"#;
        let model = CostConfig::from_json_str(json)?.into_model()?;

        assert_eq!(model.insert_cost(b'a'), Some(5.0));
        assert_eq!(model.insert_cost(b'b'), Some(1.0));
        assert_eq!(model.delete_cost(b'z'), Some(7.5));
        assert_eq!(model.delete_cost(b'y'), Some(2.0));
        assert_eq!(model.substitute_cost(b'a', b'z'), Some(1.2));
        assert_eq!(model.substitute_cost(b'z', b'a'), Some(1.0));
        Ok(())
    }

    #[test]
    fn bad_keys() {
        let long_key = CostConfig::from_json_str(r#"{ "insert_overrides": { "ab": 1.0 } }"#).and_then(CostConfig::into_model);
        assert!(matches!(long_key, Err(StrDistError::Config(_))));

        let accented = CostConfig::from_json_str(r#"{ "delete_overrides": { "ç": 1.0 } }"#).and_then(CostConfig::into_model);
        assert!(matches!(accented, Err(StrDistError::Config(_))));

        let unknown = CostConfig::from_json_str(r#"{ "transpose": 1.0 }"#);
        assert!(matches!(unknown, Err(StrDistError::Config(_))));
    }

    #[test]
    fn json_round_trip() -> Result<(), StrDistError> {
        let mut config = CostConfig::default();
        config.insert_overrides.insert("q".to_string(), 0.25);
        config.substitute_overrides.push(SubstituteOverride {
            from: "o".to_string(),
            to: "0".to_string(),
            cost: 0.1,
        });

        let json = config.to_json_string()?;
        assert_eq!(CostConfig::from_json_str(&json)?, config);
        Ok(())
    }
}
