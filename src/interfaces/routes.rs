use actix_web::web;

use crate::handlers::{blogs, contact, json_error, projects, social_links, system};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(system::home);
    cfg.service(system::health_check);

    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/projects")
                    .service(projects::list_projects)
                    .service(projects::create_project)
                    .service(projects::get_project)
                    .service(projects::update_project)
                    .service(projects::delete_project),
            )
            .service(
                web::scope("/blogs")
                    .service(blogs::list_blogs)
                    .service(blogs::create_blog)
                    .service(blogs::get_blog)
                    .service(blogs::update_blog)
                    .service(blogs::delete_blog),
            )
            .service(
                web::scope("/contact")
                    .service(contact::send_contact_message)
                    .service(contact::list_contact_messages)
                    .service(contact::get_contact_message)
                    .service(contact::mark_message_read)
                    .service(contact::delete_contact_message),
            )
            .service(
                web::scope("/social-links")
                    .service(social_links::get_social_links)
                    .service(social_links::create_or_update_social_links),
            ),
    );

    cfg.configure(json_error::config);

    cfg.default_service(web::route().to(system::route_not_found));
}
