//! Argument bag → typed `ToolCall`, checked against the tool's schema.

use serde_json::{Map, Value};

use crate::core::error::ToolError;
use crate::core::tool::{ArgDefault, ArgType, ToolDefinition};
use crate::domain::{
    CreatePostArgs, CredentialOverrides, GetPostsArgs, ToolCall, UpdatePostArgs,
};
use crate::tools::registry::ToolKind;

pub fn validate(kind: ToolKind, args: &Map<String, Value>) -> Result<ToolCall, ToolError> {
    let bag = ArgBag { def: kind.definition(), args };
    bag.check_required()?;
    let overrides = CredentialOverrides {
        site_url: bag.opt_str("siteUrl")?,
        username: bag.opt_str("username")?,
        password: bag.opt_str("password")?,
    };

    let call = match kind {
        ToolKind::CreatePost => ToolCall::CreatePost(CreatePostArgs {
            overrides,
            title: bag.req_str("title")?,
            content: bag.req_str("content")?,
            status: bag.str_or_default("status")?,
        }),
        ToolKind::GetPosts => ToolCall::GetPosts(GetPostsArgs {
            overrides,
            per_page: bag.num_or_default("perPage")?,
            page: bag.num_or_default("page")?,
        }),
        ToolKind::UpdatePost => ToolCall::UpdatePost(UpdatePostArgs {
            overrides,
            post_id: bag.req_num("postId")?,
            title: bag.opt_str("title")?,
            content: bag.opt_str("content")?,
            status: bag.opt_str("status")?,
        }),
    };
    Ok(call)
}

struct ArgBag<'a> {
    def: &'static ToolDefinition,
    args: &'a Map<String, Value>,
}

impl ArgBag<'_> {
    /// `null` counts as absent.
    fn raw(&self, name: &str) -> Option<&Value> {
        debug_assert!(
            self.def.arg(name).is_some(),
            "{} reads undeclared argument {name}",
            self.def.name
        );
        self.args.get(name).filter(|v| !v.is_null())
    }

    fn check_required(&self) -> Result<(), ToolError> {
        let missing: Vec<&str> = self
            .def
            .required_args()
            .filter(|a| self.raw(a.name).is_none())
            .map(|a| a.name)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ToolError::missing_arguments(&missing))
        }
    }

    fn opt_str(&self, name: &str) -> Result<Option<String>, ToolError> {
        match self.raw(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(type_error(name, ArgType::String)),
        }
    }

    fn req_str(&self, name: &str) -> Result<String, ToolError> {
        self.opt_str(name)?
            .ok_or_else(|| ToolError::missing_arguments(&[name]))
    }

    fn str_or_default(&self, name: &str) -> Result<String, ToolError> {
        if let Some(s) = self.opt_str(name)? {
            return Ok(s);
        }
        match self.default_of(name) {
            Some(ArgDefault::Str(s)) => Ok(s.to_owned()),
            _ => Err(ToolError::missing_arguments(&[name])),
        }
    }

    fn opt_num(&self, name: &str) -> Result<Option<u64>, ToolError> {
        match self.raw(name) {
            None => Ok(None),
            Some(v) => whole_number(v)
                .map(Some)
                .ok_or_else(|| type_error(name, ArgType::Number)),
        }
    }

    fn req_num(&self, name: &str) -> Result<u64, ToolError> {
        self.opt_num(name)?
            .ok_or_else(|| ToolError::missing_arguments(&[name]))
    }

    fn num_or_default(&self, name: &str) -> Result<u64, ToolError> {
        if let Some(n) = self.opt_num(name)? {
            return Ok(n);
        }
        match self.default_of(name) {
            Some(ArgDefault::Num(n)) => Ok(n),
            _ => Err(ToolError::missing_arguments(&[name])),
        }
    }

    fn default_of(&self, name: &str) -> Option<ArgDefault> {
        self.def.arg(name).and_then(|a| a.default)
    }
}

/// Non-negative integers, also accepted as `5.0` or `"5"`.
fn whole_number(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

fn type_error(name: &str, expected: ArgType) -> ToolError {
    let article = match expected {
        ArgType::String => "a",
        ArgType::Number => "a non-negative whole",
    };
    ToolError::InvalidArguments(format!(
        "argument `{name}` must be {article} {}",
        expected.as_str()
    ))
}
