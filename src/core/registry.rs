use crate::core::dynamic::{DynamicModel, ModelSchema};
use crate::core::exposer::{expose, expose_one, Models};
use crate::domain::model::Exposed;
use crate::utils::error::{ExposeError, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Named [`ModelSchema`]s plus the rules for picking one per record.
///
/// A record's model is, in order of precedence: the explicit override passed
/// by the caller, the string value of the discriminator key, the default model.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, ModelSchema>,
    discriminator: Option<String>,
    default_model: Option<String>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, schema: ModelSchema) -> Option<ModelSchema> {
        self.schemas.insert(schema.name.clone(), schema)
    }

    pub fn with_schema(mut self, schema: ModelSchema) -> Self {
        self.register(schema);
        self
    }

    pub fn with_discriminator(mut self, key: impl Into<String>) -> Self {
        self.discriminator = Some(key.into());
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    pub fn get(&self, model: &str) -> Result<&ModelSchema> {
        self.schemas.get(model).ok_or_else(|| ExposeError::UnknownModel {
            model: model.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    fn resolve(&self, record: &Map<String, Value>, model: Option<&str>) -> Result<&ModelSchema> {
        if let Some(model) = model {
            return self.get(model);
        }

        if let Some(key) = &self.discriminator {
            match record.get(key) {
                Some(Value::String(model)) => return self.get(model),
                Some(other) => {
                    return Err(ExposeError::InvalidInput {
                        message: format!("discriminator '{}' must be a string, got {}", key, other),
                    })
                }
                None => {}
            }
        }

        match &self.default_model {
            Some(model) => self.get(model),
            None => Err(ExposeError::InvalidInput {
                message: "cannot determine the model of a record".to_string(),
            }),
        }
    }

    fn dynamic<'a>(
        &'a self,
        record: &'a Map<String, Value>,
        model: Option<&str>,
    ) -> Result<DynamicModel<'a>> {
        let schema = self.resolve(record, model)?;
        Ok(DynamicModel::new(schema, record))
    }

    pub fn expose_record(&self, record: &Map<String, Value>, model: Option<&str>) -> Result<Exposed> {
        expose_one(&self.dynamic(record, model)?)
    }

    /// Exposes a JSON document: an object yields an object, an array of
    /// objects yields an array in the same order.
    pub fn expose_value(&self, input: &Value, model: Option<&str>) -> Result<Value> {
        let exposure = match input {
            Value::Object(record) => expose(Models::One(&self.dynamic(record, model)?))?,
            Value::Array(items) => {
                let models = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| match item {
                        Value::Object(record) => self.dynamic(record, model),
                        _ => Err(ExposeError::InvalidInput {
                            message: format!("element {} is not an object", index),
                        }),
                    })
                    .collect::<Result<Vec<_>>>()?;
                tracing::debug!("Exposing {} records", models.len());
                expose(Models::Many(&models))?
            }
            _ => {
                return Err(ExposeError::InvalidInput {
                    message: "expected an object or an array of objects".to_string(),
                })
            }
        };

        Ok(exposure.into())
    }
}
