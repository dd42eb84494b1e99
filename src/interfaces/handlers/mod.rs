pub mod blogs;
pub mod contact;
pub mod json_error;
pub mod projects;
pub mod social_links;
pub mod system;
