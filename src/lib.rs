mod domain;
mod interfaces;
mod infrastructure;
pub mod envelope;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases, validation};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, email, utils};

use email::mailer::SmtpMailer;
use errors::AppError;
use repositories::sqlx_repo::{SqlxBlogRepo, SqlxContactRepo, SqlxProjectRepo, SqlxSocialLinksRepo};
use use_cases::{
    blogs::BlogHandler, contact::ContactHandler, projects::ProjectHandler,
    social::SocialLinksHandler,
};

pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppBlogHandler = BlogHandler<SqlxBlogRepo>;
pub type AppContactHandler = ContactHandler<SqlxContactRepo, SmtpMailer>;
pub type AppSocialLinksHandler = SocialLinksHandler<SqlxSocialLinksRepo>;

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub blog_handler: AppBlogHandler,
    pub contact_handler: AppContactHandler,
    pub social_handler: AppSocialLinksHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Result<Self, AppError> {
        let mailer = SmtpMailer::from_config(config)?;

        Ok(AppState {
            project_handler: ProjectHandler::new(SqlxProjectRepo::new(pool.clone())),
            blog_handler: BlogHandler::new(SqlxBlogRepo::new(pool.clone())),
            contact_handler: ContactHandler::new(SqlxContactRepo::new(pool.clone()), mailer),
            social_handler: SocialLinksHandler::new(SqlxSocialLinksRepo::new(pool)),
        })
    }
}
