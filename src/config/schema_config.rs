use crate::core::dynamic::ModelSchema;
use crate::core::registry::SchemaRegistry;
use crate::utils::error::{ExposeError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExposureConfig {
    pub discriminator: Option<String>,
    pub default_model: Option<String>,
    #[serde(default)]
    pub models: HashMap<String, ModelDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub fields: Vec<String>,
    #[serde(default)]
    pub computed: Map<String, Value>,
}

impl ExposureConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ExposeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ExposeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_VERSION})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExposeError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證後建立 [`SchemaRegistry`]
    pub fn into_registry(self) -> Result<SchemaRegistry> {
        self.validate()?;

        let mut registry = SchemaRegistry::new();
        if let Some(discriminator) = self.discriminator {
            registry = registry.with_discriminator(discriminator);
        }
        if let Some(default_model) = self.default_model {
            registry = registry.with_default_model(default_model);
        }

        for (name, definition) in self.models {
            tracing::debug!(
                "Registering model '{}' with {} fields and {} computed",
                name,
                definition.fields.len(),
                definition.computed.len()
            );
            registry.register(ModelSchema {
                name,
                fields: definition.fields,
                computed: definition.computed,
            });
        }

        Ok(registry)
    }
}

impl Validate for ExposureConfig {
    fn validate(&self) -> Result<()> {
        if self.models.is_empty() {
            return Err(ExposeError::MissingConfigError {
                field: "models".to_string(),
            });
        }

        for (name, definition) in &self.models {
            validate_non_empty_string("models", name)?;
            validate_unique_names(&format!("models.{}.fields", name), &definition.fields)?;
            for key in definition.computed.keys() {
                validate_non_empty_string(&format!("models.{}.computed", name), key)?;
            }
        }

        if let Some(discriminator) = &self.discriminator {
            validate_non_empty_string("discriminator", discriminator)?;
        }

        if let Some(default_model) = &self.default_model {
            if !self.models.contains_key(default_model) {
                return Err(ExposeError::InvalidConfigValueError {
                    field: "default_model".to_string(),
                    value: default_model.clone(),
                    reason: "No model with this name is configured".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = ExposureConfig::from_toml_str(
            r#"
[models.user]
fields = ["id", "name"]
"#,
        )
        .unwrap();

        assert!(config.discriminator.is_none());
        assert_eq!(config.models["user"].fields, vec!["id", "name"]);
        assert!(config.models["user"].computed.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_default_model_rejected() {
        let config = ExposureConfig::from_toml_str(
            r#"
default_model = "admin"

[models.user]
fields = ["id"]
"#,
        )
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(ExposeError::InvalidConfigValueError { ref field, .. }) if field == "default_model"
        ));
    }

    #[test]
    fn test_invalid_toml_reported() {
        let err = ExposureConfig::from_toml_str("models = [").unwrap_err().to_string();
        assert!(err.contains("TOML parsing error"));
    }

    #[test]
    fn test_unset_env_var_left_in_place() {
        let content =
            ExposureConfig::substitute_env_vars("x = \"${EXPOSABLE_MODEL_SURELY_UNSET}\"").unwrap();
        assert_eq!(content, "x = \"${EXPOSABLE_MODEL_SURELY_UNSET}\"");
    }
}
