use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Body, Method, Response, StatusCode};
use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::routes::query::NUMS;

pub const INTERNAL_ERROR_BODY: &str = "Something went wrong!";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const APPLICATION_JSON: &str = "application/json";

/// One failed check on a query parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub msg: String,
    pub param: String,
    pub location: String,
}

/// Body of every `400` reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub errors: Vec<FieldError>,
}

impl ErrorBody {
    pub fn for_nums(err: &ServiceError, value: Option<&str>) -> Self {
        ErrorBody {
            errors: vec![FieldError {
                value: value.map(str::to_string),
                msg: err.to_string(),
                param: NUMS.to_string(),
                location: "query".to_string(),
            }],
        }
    }
}

fn with_body(status: StatusCode, content_type: &'static str, body: Body) -> Response<Body> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

pub fn text(status: StatusCode, body: String) -> Response<Body> {
    with_body(status, TEXT_PLAIN, Body::from(body))
}

pub fn internal_error() -> Response<Body> {
    text(
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_ERROR_BODY.to_string(),
    )
}

pub fn not_found(method: &Method, path: &str) -> Response<Body> {
    text(StatusCode::NOT_FOUND, format!("Cannot {} {}", method, path))
}

pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Response<Body> {
    match serde_json::to_vec(body) {
        Ok(bytes) => with_body(status, APPLICATION_JSON, Body::from(bytes)),
        Err(err) => {
            error!("Unable to serialize response body: {}", err);
            internal_error()
        }
    }
}

/// Validation failures become a `400` listing the problem, anything else an
/// opaque `500`.
pub fn from_error(err: &ServiceError, nums: Option<&str>) -> Response<Body> {
    if err.is_validation() {
        debug!("Rejected nums {:?}: {}", nums, err);
        json(err.status(), &ErrorBody::for_nums(err, nums))
    } else {
        error!("Request failed: {}", err);
        internal_error()
    }
}
