//! Post CRUD handlers.
//!
//! Create and update failures are client errors (400); list and delete
//! failures are server errors (500).

use actix_web::{HttpResponse, web};

use blog_core::domain::{Post, PostChanges, parse_post_id};
use blog_shared::{MessageResponse, PostPayload};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await.map_err(AppError::internal)?;

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = Post::new(
        req.title.unwrap_or_default(),
        req.content.unwrap_or_default(),
    );

    let saved = state.posts.insert(post).await.map_err(AppError::bad_request)?;
    tracing::info!(post_id = %saved.id, "Post created");

    Ok(HttpResponse::Created().json(saved))
}

/// PUT /posts/{id}
///
/// An unknown id answers 200 with a `null` body.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path).map_err(AppError::bad_request)?;
    let req = body.into_inner();
    let changes = PostChanges {
        title: req.title,
        content: req.content,
    };

    let updated = state
        .posts
        .update(id, changes)
        .await
        .map_err(AppError::bad_request)?;

    match &updated {
        Some(_) => tracing::info!(post_id = %id, "Post updated"),
        None => tracing::debug!(post_id = %id, "Update matched no post"),
    }

    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /posts/{id}
///
/// Succeeds whether or not the post existed.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path).map_err(AppError::internal)?;

    state.posts.delete(id).await.map_err(AppError::internal)?;
    tracing::info!(post_id = %id, "Post deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::post_deleted()))
}
