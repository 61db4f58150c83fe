pub mod home;
pub mod projects;

pub use home::home_content;
pub use projects::builtin_catalog;
