use std::convert::Infallible;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use hyper::{Body, Method, Request, Response, StatusCode};
use log::{error, info};

use crate::error::Result;
use crate::numbers::NumberSequence;
use crate::stats::{format_number, Statistic};

pub mod query;
pub mod response;

/// Entry point for every request. A panic while handling is answered with a
/// `500` instead of tearing down the connection.
pub async fn handle(request: Request<Body>) -> std::result::Result<Response<Body>, Infallible> {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = guard(&method, &path, dispatch(request)).await;

    info!("{} {} {}", method, path, response.status().as_u16());
    Ok(response)
}

/// Run a handler future, turning a panic into the opaque `500` reply.
async fn guard<F>(method: &Method, path: &str, handler: F) -> Response<Body>
where
    F: Future<Output = Response<Body>>,
{
    match AssertUnwindSafe(handler).catch_unwind().await {
        Ok(response) => response,
        Err(_) => {
            error!("Handler for {} {} panicked", method, path);
            response::internal_error()
        }
    }
}

async fn dispatch(request: Request<Body>) -> Response<Body> {
    let path = request.uri().path();
    match (request.method(), Statistic::from_path(path)) {
        (&Method::GET, Some(statistic)) => {
            let nums = query::nums(request.uri().query());
            respond(statistic, nums.as_deref())
                .unwrap_or_else(|err| response::from_error(&err, nums.as_deref()))
        }
        (method, _) => response::not_found(method, path),
    }
}

/// Validate `nums` and compute `statistic` over it.
pub fn respond(statistic: Statistic, nums: Option<&str>) -> Result<Response<Body>> {
    let numbers = NumberSequence::parse(nums)?;
    let value = statistic.compute(&numbers)?;
    Ok(response::text(
        StatusCode::OK,
        format!("{}: {}", statistic, format_number(value)),
    ))
}
