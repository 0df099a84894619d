pub mod args;
pub mod credentials;
pub mod dispatch;
pub mod registry;
