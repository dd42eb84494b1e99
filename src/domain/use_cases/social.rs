use validator::Validate;

use crate::{
    entities::social_links::{SocialLinks, SocialLinksPayload, SocialLinksSaved},
    errors::AppError,
    repositories::social_links::SocialLinksRepository,
};

pub struct SocialLinksHandler<R>
where
    R: SocialLinksRepository,
{
    pub social_repo: R,
}

impl<R> SocialLinksHandler<R>
where
    R: SocialLinksRepository,
{
    pub fn new(social_repo: R) -> Self {
        SocialLinksHandler { social_repo }
    }

    /// Retrieves the singleton social links record
    pub async fn get_social_links(&self) -> Result<SocialLinks, AppError> {
        self.social_repo
            .find_social_links()
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Social links not found. Please create them first.".into())
            })
    }

    /// Create-or-update: the service enforces the at-most-one invariant by
    /// always merging into the existing record when one is present. Supplied
    /// fields overwrite, omitted fields are retained; on first creation all
    /// fields are required.
    pub async fn create_or_update_social_links(
        &self,
        payload: SocialLinksPayload,
    ) -> Result<SocialLinksSaved, AppError> {
        // Pattern rules apply to whichever fields were supplied.
        payload.validate()?;

        match self.social_repo.find_social_links().await? {
            Some(current) => {
                let merged = payload.merge_into(&current);
                let links = self
                    .social_repo
                    .update_social_links(&current.id, &merged)
                    .await?;
                Ok(SocialLinksSaved { links, created: false })
            }
            None => {
                let insert = payload.into_insert()?;
                let links = self.social_repo.insert_social_links(&insert).await?;
                Ok(SocialLinksSaved { links, created: true })
            }
        }
    }
}
