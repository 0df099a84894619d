use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    String,
    Number,
}

impl ArgType {
    pub fn as_str(self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Number => "number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgDefault {
    Str(&'static str),
    Num(u64),
}

impl ArgDefault {
    pub fn to_json(self) -> Value {
        match self {
            ArgDefault::Str(s) => Value::String(s.to_owned()),
            ArgDefault::Num(n) => Value::from(n),
        }
    }
}

/// One entry of a tool's argument schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub ty: ArgType,
    pub required: bool,
    pub default: Option<ArgDefault>,
    pub description: &'static str,
}

impl ArgSpec {
    pub const fn required(name: &'static str, ty: ArgType, description: &'static str) -> Self {
        Self { name, ty, required: true, default: None, description }
    }

    pub const fn optional(name: &'static str, ty: ArgType, description: &'static str) -> Self {
        Self { name, ty, required: false, default: None, description }
    }

    pub const fn with_default(
        name: &'static str,
        ty: ArgType,
        default: ArgDefault,
        description: &'static str,
    ) -> Self {
        Self { name, ty, required: false, default: Some(default), description }
    }
}

/// Minimal metadata every tool exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub args: &'static [ArgSpec],
}

impl ToolDefinition {
    pub fn arg(&self, name: &str) -> Option<&'static ArgSpec> {
        self.args.iter().find(|a| a.name == name)
    }

    pub fn required_args(&self) -> impl Iterator<Item = &'static ArgSpec> {
        self.args.iter().filter(|a| a.required)
    }

    /// JSON Schema object advertised through `tools/list`.
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        for arg in self.args {
            let mut prop = Map::new();
            prop.insert("type".into(), json!(arg.ty.as_str()));
            prop.insert("description".into(), json!(arg.description));
            if let Some(default) = arg.default {
                prop.insert("default".into(), default.to_json());
            }
            properties.insert(arg.name.to_owned(), Value::Object(prop));
        }
        let required: Vec<&str> = self.required_args().map(|a| a.name).collect();

        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), json!(required));
        schema
    }
}
