//! Static catalog of the WordPress tools.

use crate::core::tool::{ArgDefault, ArgSpec, ArgType, ToolDefinition};

pub const CREATE_POST: &str = "create_post";
pub const GET_POSTS: &str = "get_posts";
pub const UPDATE_POST: &str = "update_post";

const SITE_URL: ArgSpec = ArgSpec::optional(
    "siteUrl",
    ArgType::String,
    "WordPress site URL (overrides WORDPRESS_SITE_URL)",
);
const USERNAME: ArgSpec = ArgSpec::optional(
    "username",
    ArgType::String,
    "WordPress username (overrides WORDPRESS_USERNAME)",
);
const PASSWORD: ArgSpec = ArgSpec::optional(
    "password",
    ArgType::String,
    "WordPress application password (overrides WORDPRESS_PASSWORD)",
);

const CREATE_POST_ARGS: &[ArgSpec] = &[
    SITE_URL,
    USERNAME,
    PASSWORD,
    ArgSpec::required("title", ArgType::String, "Post title"),
    ArgSpec::required("content", ArgType::String, "Post content"),
    ArgSpec::with_default(
        "status",
        ArgType::String,
        ArgDefault::Str("draft"),
        "Post status (draft, publish, etc.)",
    ),
];

const GET_POSTS_ARGS: &[ArgSpec] = &[
    SITE_URL,
    USERNAME,
    PASSWORD,
    ArgSpec::with_default("perPage", ArgType::Number, ArgDefault::Num(10), "Number of posts per page"),
    ArgSpec::with_default("page", ArgType::Number, ArgDefault::Num(1), "Page number"),
];

const UPDATE_POST_ARGS: &[ArgSpec] = &[
    SITE_URL,
    USERNAME,
    PASSWORD,
    ArgSpec::required("postId", ArgType::Number, "ID of the post to update"),
    ArgSpec::optional("title", ArgType::String, "New post title"),
    ArgSpec::optional("content", ArgType::String, "New post content"),
    ArgSpec::optional("status", ArgType::String, "New post status"),
];

static DEFINITIONS: [ToolDefinition; 3] = [
    ToolDefinition {
        name: CREATE_POST,
        description: "Create a new WordPress post",
        args: CREATE_POST_ARGS,
    },
    ToolDefinition {
        name: GET_POSTS,
        description: "Get WordPress posts",
        args: GET_POSTS_ARGS,
    },
    ToolDefinition {
        name: UPDATE_POST,
        description: "Update an existing WordPress post",
        args: UPDATE_POST_ARGS,
    },
];

/// The closed set of supported tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    CreatePost,
    GetPosts,
    UpdatePost,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [ToolKind::CreatePost, ToolKind::GetPosts, ToolKind::UpdatePost];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            CREATE_POST => Some(ToolKind::CreatePost),
            GET_POSTS => Some(ToolKind::GetPosts),
            UPDATE_POST => Some(ToolKind::UpdatePost),
            _ => None,
        }
    }

    pub fn definition(self) -> &'static ToolDefinition {
        match self {
            ToolKind::CreatePost => &DEFINITIONS[0],
            ToolKind::GetPosts => &DEFINITIONS[1],
            ToolKind::UpdatePost => &DEFINITIONS[2],
        }
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }
}

/// Catalog in advertisement order. Needs no configuration.
pub fn list() -> &'static [ToolDefinition] {
    &DEFINITIONS
}
