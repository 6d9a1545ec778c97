use crate::model::response::{ApiStatus, Response, ResponseWithStatus};
use crate::util::message;
use rocket::{response::status, serde::json::Json, Request};

#[catch(400)]
pub fn bad_request() -> status::Custom<Json<Response>> {
    ResponseWithStatus::failure(ApiStatus::BadRequest, message::MESSAGE_INVALID_BODY.to_string())
        .into_custom()
}

/// Rocket answers 422 when a body fails to deserialize; callers see a plain 400.
#[catch(422)]
pub fn unprocessable_entity() -> status::Custom<Json<Response>> {
    bad_request()
}

#[catch(404)]
pub fn not_found(req: &Request) -> status::Custom<Json<Response>> {
    let error = message::MESSAGE_ENDPOINT_NOT_FOUND.to_string();
    ResponseWithStatus::failure(ApiStatus::NotFound, error)
        .with_message(format!("Cannot {} {}", req.method(), req.uri()))
        .into_custom()
}

#[catch(500)]
pub fn internal_server_error() -> status::Custom<Json<Response>> {
    let error = message::MESSAGE_INTERNAL_SERVER_ERROR.to_string();
    ResponseWithStatus::failure(ApiStatus::InternalServerError, error).into_custom()
}
