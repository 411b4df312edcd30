//! REST handlers for the post resource.
//!
//! Handlers decode the request, call one service action, and wrap the
//! result in the JSON envelope. Empty results are translated to 404 here;
//! the core never raises an error for "not found".

use axum::extract::{Extension, Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::common::{AppError, JsonResponse, PageArgs, ResponseCode};
use crate::domains::posts::actions;
use crate::domains::posts::data::{PostPatchRequest, PostWriteRequest};
use crate::server::app::AppState;

/// POST /post
///
/// Creates a post and answers 201 with a `Location: /post/{no}` header.
pub async fn create_post_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<PostWriteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let no = actions::create_post(request, &state.db_pool).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/post/{no}"))],
        Json(JsonResponse::empty(ResponseCode::Created)),
    ))
}

/// GET /post?cursor&size
///
/// Lists one page of posts, newest first. Defaults: cursor=0, size=10.
pub async fn retrieve_posts_handler(
    Extension(state): Extension<AppState>,
    Query(args): Query<PageArgs>,
) -> Result<impl IntoResponse, AppError> {
    let posts = actions::retrieve_posts(args, &state.db_pool).await?;

    Ok(Json(JsonResponse::of(ResponseCode::Success, posts)))
}

/// GET /post/{no}
pub async fn retrieve_post_detail_handler(
    Extension(state): Extension<AppState>,
    Path(no): Path<i32>,
) -> Result<Response, AppError> {
    let detail = actions::retrieve_post_detail(no, &state.db_pool).await?;

    Ok(match detail {
        Some(detail) => Json(JsonResponse::of(ResponseCode::Success, detail)).into_response(),
        None => not_found(),
    })
}

/// PATCH /post/{no}
///
/// Applies a field-level merge and returns the resulting detail.
pub async fn patch_post_handler(
    Extension(state): Extension<AppState>,
    Path(no): Path<i32>,
    Json(request): Json<PostPatchRequest>,
) -> Result<Response, AppError> {
    let detail = actions::patch_post_detail(no, request, &state.db_pool).await?;

    Ok(match detail {
        Some(detail) => Json(JsonResponse::of(ResponseCode::Success, detail)).into_response(),
        None => not_found(),
    })
}

/// DELETE /post/{no}
///
/// 204 when a row was removed, 404 when there was nothing to remove.
pub async fn delete_post_handler(
    Extension(state): Extension<AppState>,
    Path(no): Path<i32>,
) -> Result<Response, AppError> {
    let deleted = actions::delete_post(no, &state.db_pool).await?;

    Ok(if deleted > 0 {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found()
    })
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(JsonResponse::empty(ResponseCode::NotFound)),
    )
        .into_response()
}
