use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use mockall::mock;
use mockall::predicate::eq;
use uuid::Uuid;

use portfolio_api::{
    entities::{
        pagination::Pagination,
        project::{NewProjectRequest, Project, ProjectFilter, UpdateProjectRequest},
    },
    errors::AppError,
    repositories::projects::ProjectRepository,
    use_cases::projects::ProjectHandler,
};

mock! {
    pub ProjectRepo {}

    #[async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn list_projects(
            &self,
            filter: &ProjectFilter,
            page: u32,
            limit: u32,
        ) -> Result<(Vec<Project>, i64), AppError>;

        async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError>;

        async fn create_project(&self, new: &NewProjectRequest) -> Result<Project, AppError>;

        async fn update_project(&self, id: &Uuid, merged: &NewProjectRequest) -> Result<Project, AppError>;

        async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

fn sample_project(id: Uuid) -> Project {
    Project {
        id,
        title: "Portfolio".into(),
        description: "A portfolio site".into(),
        long_description: None,
        tech_stack: vec!["Rust".into()],
        github: None,
        live_link: None,
        image: None,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        end_date: None,
        featured: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn valid_request() -> NewProjectRequest {
    NewProjectRequest {
        title: "Portfolio".into(),
        description: "A portfolio site".into(),
        long_description: None,
        tech_stack: vec!["Rust".into()],
        github: None,
        live_link: None,
        image: None,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        end_date: None,
        featured: false,
    }
}

#[actix_rt::test]
async fn create_with_empty_tech_stack_fails_naming_the_field() {
    // No repo expectations: the write must never reach the store.
    let handler = ProjectHandler::new(MockProjectRepo::new());

    let mut request = valid_request();
    request.tech_stack.clear();

    let Err(AppError::ValidationError(errors)) = handler.create_project(request).await else {
        panic!("expected a validation failure");
    };
    assert!(errors.iter().any(|e| e.field == "techStack"));
}

#[actix_rt::test]
async fn create_persists_a_valid_project() {
    let id = Uuid::new_v4();
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project()
        .times(1)
        .returning(move |_| Ok(sample_project(id)));

    let handler = ProjectHandler::new(repo);

    let project = handler.create_project(valid_request()).await.unwrap();
    assert_eq!(project.id, id);
}

#[actix_rt::test]
async fn get_with_unknown_id_is_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_project_by_id()
        .returning(|_| Err(AppError::NotFound("Project not found".into())));

    let handler = ProjectHandler::new(repo);

    let err = handler
        .get_project_by_id(&Uuid::new_v4().to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(msg) if msg == "Project not found"));
}

#[actix_rt::test]
async fn get_with_malformed_id_is_not_found_without_touching_the_store() {
    let handler = ProjectHandler::new(MockProjectRepo::new());

    let err = handler.get_project_by_id("not-a-uuid").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[actix_rt::test]
async fn list_builds_the_pagination_block_from_the_filtered_total() {
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects()
        .withf(|filter, page, limit| {
            *filter == ProjectFilter::Featured(true) && *page == 2 && *limit == 5
        })
        .returning(|_, _, _| {
            let projects = (0..5).map(|_| sample_project(Uuid::new_v4())).collect();
            Ok((projects, 12))
        });

    let handler = ProjectHandler::new(repo);

    let data = handler
        .list_projects(ProjectFilter::Featured(true), 2, 5)
        .await
        .unwrap();

    assert_eq!(data.projects.len(), 5);
    assert_eq!(data.pagination, Pagination::new(2, 5, 12));
    assert_eq!(data.pagination.pages, 3);
}

#[actix_rt::test]
async fn update_that_clears_tech_stack_fails_before_writing() {
    let id = Uuid::new_v4();
    let mut repo = MockProjectRepo::new();
    repo.expect_get_project_by_id()
        .with(eq(id))
        .returning(move |_| Ok(sample_project(id)));
    // No update expectation: the merged record fails validation first.

    let handler = ProjectHandler::new(repo);

    let update = UpdateProjectRequest {
        tech_stack: Some(vec![]),
        ..Default::default()
    };

    let Err(AppError::ValidationError(errors)) =
        handler.update_project(&id.to_string(), update).await
    else {
        panic!("expected a validation failure");
    };
    assert!(errors.iter().any(|e| e.field == "techStack"));
}

#[actix_rt::test]
async fn update_merges_supplied_fields_onto_the_current_record() {
    let id = Uuid::new_v4();
    let mut repo = MockProjectRepo::new();
    repo.expect_get_project_by_id()
        .returning(move |_| Ok(sample_project(id)));
    repo.expect_update_project()
        .withf(|_, merged| merged.title == "Renamed" && merged.tech_stack == vec!["Rust".to_string()])
        .returning(move |_, merged| {
            let mut project = sample_project(id);
            project.title = merged.title.clone();
            Ok(project)
        });

    let handler = ProjectHandler::new(repo);

    let update = UpdateProjectRequest {
        title: Some("Renamed".into()),
        ..Default::default()
    };

    let project = handler.update_project(&id.to_string(), update).await.unwrap();
    assert_eq!(project.title, "Renamed");
}

#[actix_rt::test]
async fn delete_of_a_missing_project_is_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_delete_project()
        .returning(|_| Err(AppError::NotFound("Project not found".into())));

    let handler = ProjectHandler::new(repo);

    let err = handler
        .delete_project(&Uuid::new_v4().to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
