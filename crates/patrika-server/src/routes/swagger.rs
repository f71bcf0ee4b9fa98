use super::api;

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_swagger_ui::SwaggerUi;

struct SecurityAddon;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::v0::status::get_status,
        api::v0::journal::list_entries,
        api::v0::journal::create_entry,
        api::v0::journal::get_entry,
        api::v0::journal::update_entry,
        api::v0::journal::delete_entry,
        api::v0::journal::toggle_like,
        api::v0::journal::add_comment,
        api::v0::journal::add_sticker,
        api::v0::admin::login,
        api::v0::admin::create_admin,
        api::v0::admin::list_registrations,
        api::v0::admin::approve_registration,
        api::v0::admin::decline_registration,
        api::v0::admin::list_members,
        api::v0::admin::member_details,
        api::v0::admin::list_users,
        api::v0::admin::user_details,
        api::v0::admin::pending_journal_entries,
        api::v0::admin::get_journal_entry,
        api::v0::admin::approve_journal_entry,
        api::v0::admin::delete_journal_entry,
        api::v0::registration::apply,
        api::v0::registration::my_registrations,
        api::v0::registration::registration_status,
        api::v0::user::get_profile,
        api::v0::user::upsert_profile,
        api::v0::certificate::verify_certificate,
        api::v0::certificate::list_certificates,
        api::v0::certificate::get_certificate,
        api::v0::certificate::create_certificate,
        api::v0::certificate::update_certificate,
        api::v0::certificate::delete_certificate,
        api::v0::event::list_events,
        api::v0::event::get_event,
        api::v0::event::create_event,
        api::v0::event::update_event,
        api::v0::event::delete_event,
        api::v0::order::place_order,
        api::v0::order::my_orders,
        api::v0::order::list_orders,
        api::v0::order::get_order,
        api::v0::order::delete_order,
        api::v0::order::set_order_status,
        api::v0::course::list_courses,
        api::v0::course::get_course,
        api::v0::course::create_course,
        api::v0::course::update_course,
        api::v0::course::delete_course,
        api::v0::course::add_module,
        api::v0::course::remove_module,
        api::v0::course::add_question,
        api::v0::course::remove_question,
    ),
    modifiers(&SecurityAddon),
    tags()
)]
struct ApiDoc;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // we can unwrap safely, since there already are components registered.
        let components = openapi.components.as_mut().expect("components not registered");
        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Api Token"))
                    .build(),
            ),
        );
    }
}

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
