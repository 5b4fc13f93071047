// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Assigns request IDs, wraps each request in a span and logs its completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use std::time::Instant;

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::Request;
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tracing::field::Empty;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::errors::{AppError, ErrorResponse};
use crate::logging::AppLogger;

/// Header carrying the request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_INBOUND_ID_LEN: usize = 128;

const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Correlation id of the current request, available as a request extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Honour an inbound `x-request-id` or generate one, then trace the request
///
/// The id is inserted as a [`RequestId`] extension, echoed on the response
/// and stamped into JSON error bodies. The request runs inside an `http_request` span that records
/// status and duration once the response is ready.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty() && value.len() <= MAX_INBOUND_ID_LEN)
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned);

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let span = info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id,
        status_code = Empty,
        duration_ms = Empty,
    );

    let started = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let mut response = stamp_error_body(response, &request_id).await;
    let status = response.status().as_u16();
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    span.record("status_code", status);
    span.record("duration_ms", duration_ms);
    AppLogger::log_api_request(method.as_str(), &path, status, duration_ms, &request_id);

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

fn is_json_error(response: &Response) -> bool {
    let status = response.status();
    let json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    json && (status.is_client_error() || status.is_server_error())
}

/// Copy `request_id` into an `ErrorResponse` body; other bodies pass through
async fn stamp_error_body(response: Response, request_id: &str) -> Response {
    if !is_json_error(&response) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    let Ok(bytes) = to_bytes(body, MAX_ERROR_BODY_BYTES).await else {
        return Response::from_parts(parts, Body::empty());
    };

    let stamped = serde_json::from_slice::<ErrorResponse>(&bytes)
        .ok()
        .map(|decoded| ErrorResponse::from(AppError::from(decoded).with_request_id(request_id)))
        .and_then(|error| serde_json::to_vec(&error).ok())
        .map_or(bytes, Bytes::from);
    Response::from_parts(parts, Body::from(stamped))
}
