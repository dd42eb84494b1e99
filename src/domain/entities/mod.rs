pub mod blog;
pub mod contact_message;
pub mod pagination;
pub mod project;
pub mod social_links;
