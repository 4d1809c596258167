//! Server side mirror of the check validator.

use actix_web::{HttpResponse, Responder, get, post, web};
use pingtower_checks::{
    CreateCheckRequest, UpdateCheckRequest, templates::CheckExamples,
    validate_create_check_request, validate_update_check_request,
};
use tracing::debug;

macros_utils::routes! {
    route validate_create_route,
    route validate_update_route,
    route examples_route,
}

/// Validate a full create payload; always 200, the verdict is in the body
#[post("/api/v1/checks/validate")]
pub async fn validate_create_route(request: web::Json<CreateCheckRequest>) -> impl Responder {
    let result = validate_create_check_request(&request);
    debug!("Create payload '{}' valid: {}", request.name, result.is_valid);
    HttpResponse::Ok().json(result)
}

#[post("/api/v1/checks/validate-update")]
pub async fn validate_update_route(request: web::Json<UpdateCheckRequest>) -> impl Responder {
    let result = validate_update_check_request(&request);
    debug!("Update payload valid: {}", result.is_valid);
    HttpResponse::Ok().json(result)
}

#[get("/api/v1/public/checks/examples")]
pub async fn examples_route() -> impl Responder {
    HttpResponse::Ok().json(CheckExamples::default())
}
