pub mod get;
pub mod ls;
pub mod put;
pub mod rm;
pub mod stat;
pub mod url;
