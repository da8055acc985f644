use crate::domain::ports::{Exposable, FieldList};
use crate::utils::error::{ExposeError, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid placeholder pattern"));

/// Exposure rules for a model whose attributes live in a JSON object.
///
/// String computed values are templates: `{field}` is replaced with the
/// record's attribute (strings raw, anything else as JSON text). Other
/// values are emitted unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSchema {
    pub name: String,
    pub fields: Vec<String>,
    pub computed: Map<String, Value>,
}

impl ModelSchema {
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            computed: Map::new(),
        }
    }

    pub fn with_computed(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.computed.insert(key.into(), value.into());
        self
    }
}

/// A JSON record viewed through a [`ModelSchema`].
#[derive(Debug, Clone, Copy)]
pub struct DynamicModel<'a> {
    schema: &'a ModelSchema,
    data: &'a Map<String, Value>,
}

impl<'a> DynamicModel<'a> {
    pub fn new(schema: &'a ModelSchema, data: &'a Map<String, Value>) -> Self {
        Self { schema, data }
    }

    fn render_template(&self, template: &str) -> Result<Value> {
        let mut rendered = String::with_capacity(template.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(template) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = self
                .data
                .get(name.as_str())
                .ok_or_else(|| ExposeError::attribute_not_found(&self.schema.name, name.as_str()))?;

            rendered.push_str(&template[last..whole.start()]);
            match value {
                Value::String(text) => rendered.push_str(text),
                other => rendered.push_str(&other.to_string()),
            }
            last = whole.end();
        }

        rendered.push_str(&template[last..]);
        Ok(Value::String(rendered))
    }
}

impl Exposable for DynamicModel<'_> {
    fn exposable_fields(&self) -> FieldList<'_> {
        Cow::Owned(self.schema.fields.iter().map(String::as_str).collect())
    }

    fn attribute(&self, name: &str) -> Result<Option<Value>> {
        Ok(self.data.get(name).cloned())
    }

    fn computed_fields(&self) -> Result<Option<Value>> {
        if self.schema.computed.is_empty() {
            return Ok(None);
        }

        let mut computed = Map::new();
        for (key, value) in &self.schema.computed {
            let value = match value {
                Value::String(template) => self.render_template(template)?,
                constant => constant.clone(),
            };
            computed.insert(key.clone(), value);
        }

        Ok(Some(Value::Object(computed)))
    }

    fn model_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.schema.name)
    }
}
