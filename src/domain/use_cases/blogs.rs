use validator::Validate;

use crate::{
    entities::{
        blog::{Blog, BlogFilter, BlogListData, NewBlogRequest, UpdateBlogRequest},
        pagination::Pagination,
    },
    errors::AppError,
    repositories::blogs::BlogRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct BlogHandler<R>
where
    R: BlogRepository,
{
    pub blog_repo: R,
}

impl<R> BlogHandler<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repo: R) -> Self {
        BlogHandler { blog_repo }
    }

    /// Lists blogs newest first, optionally narrowed to an exact tag match
    pub async fn list_blogs(
        &self,
        filter: BlogFilter,
        page: u32,
        limit: u32,
    ) -> Result<BlogListData, AppError> {
        let (blogs, total) = self.blog_repo.list_blogs(&filter, page, limit).await?;

        Ok(BlogListData {
            blogs,
            pagination: Pagination::new(page, limit, total),
        })
    }

    /// Retrieves a blog by its ID
    pub async fn get_blog_by_id(&self, id: &str) -> Result<Blog, AppError> {
        let valid_id = valid_uuid(id, "Blog")?;
        self.blog_repo.get_blog_by_id(&valid_id).await
    }

    /// Creates a new blog after validating every field rule at once
    pub async fn create_blog(&self, request: NewBlogRequest) -> Result<Blog, AppError> {
        request.validate()?;
        self.blog_repo.create_blog(&request).await
    }

    /// Applies a partial update; validation re-runs against the merged record
    pub async fn update_blog(&self, id: &str, request: UpdateBlogRequest) -> Result<Blog, AppError> {
        let valid_id = valid_uuid(id, "Blog")?;

        let current = self.blog_repo.get_blog_by_id(&valid_id).await?;
        let merged = request.merge_into(&current);
        merged.validate()?;

        self.blog_repo.update_blog(&valid_id, &merged).await
    }

    /// Deletes a blog by its ID
    pub async fn delete_blog(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id, "Blog")?;
        self.blog_repo.delete_blog(&valid_id).await
    }
}
