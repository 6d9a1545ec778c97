use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::{Json, Value};
use rocket::serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ResponseWithStatus {
    pub status_code: u16,
    pub response: Response,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub enum ApiStatus {
    Ok,
    BadRequest,
    NotFound,
    InternalServerError,
    BadGateway,
}

impl ApiStatus {
    pub fn code(&self) -> u16 {
        match self {
            ApiStatus::Ok => 200,
            ApiStatus::BadRequest => 400,
            ApiStatus::NotFound => 404,
            ApiStatus::InternalServerError => 500,
            ApiStatus::BadGateway => 502,
        }
    }
}

impl ResponseWithStatus {
    pub fn success(message: String, data: Value) -> Self {
        ResponseWithStatus {
            status_code: ApiStatus::Ok.code(),
            response: Response {
                success: true,
                message: Some(message),
                error: None,
                data: Some(data),
            },
        }
    }

    pub fn failure(status: ApiStatus, error: String) -> Self {
        ResponseWithStatus {
            status_code: status.code(),
            response: Response {
                success: false,
                message: None,
                error: Some(error),
                data: None,
            },
        }
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.response.message = Some(message);
        self
    }

    pub fn into_custom(self) -> status::Custom<Json<Response>> {
        status::Custom(Status::new(self.status_code), Json(self.response))
    }
}
