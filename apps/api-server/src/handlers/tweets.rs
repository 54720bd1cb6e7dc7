//! Tweet handlers.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use chirp_core::domain::Tweet;
use chirp_core::error::RepoError;
use chirp_shared::dto::{PostTweetRequest, UpdateTweetRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::validation;

/// GET /
pub async fn home(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tweets = state.tweets.list().await?;

    Ok(HttpResponse::Ok().json(tweets))
}

/// POST /post
pub async fn post_tweet(
    state: web::Data<AppState>,
    body: web::Json<PostTweetRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut errors = Vec::new();
    validation::check_content(&mut errors, &req.content);
    validation::check_author(&mut errors, &req.author);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // The author snapshot is stored exactly as supplied; it is not checked
    // against the user collection.
    let tweet = Tweet::new(req.content, req.author);
    let saved = state.tweets.save(tweet).await?;

    Ok(HttpResponse::Created().json(saved))
}

/// GET /tweets/{tweet_id}
pub async fn tweet_detail(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let tweet = state
        .tweets
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Tweet not found".to_string()))?;

    Ok(HttpResponse::Ok().json(tweet))
}

/// DELETE /tweets/{tweet_id}/delete
pub async fn delete_tweet(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .tweets
        .delete(path.into_inner())
        .await
        .map_err(|e| match e {
            RepoError::NotFound => AppError::NotFound("Tweet not found".to_string()),
            other => other.into(),
        })?;

    Ok(HttpResponse::NoContent().finish())
}

/// PATCH /tweets/{tweet_id}/update
pub async fn update_tweet(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTweetRequest>,
) -> AppResult<HttpResponse> {
    let tweet_id = path.into_inner();
    let req = body.into_inner();

    let mut errors = Vec::new();
    if let Some(content) = &req.content {
        validation::check_content(&mut errors, content);
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let mut tweet = state
        .tweets
        .find_by_id(tweet_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tweet not found".to_string()))?;

    // Merge only the supplied fields; the update timestamp is always
    // server-assigned.
    if let Some(content) = req.content {
        tweet.content = content;
    }
    tweet.updated_at = Some(Utc::now());

    let saved = state.tweets.save(tweet).await?;

    Ok(HttpResponse::Ok().json(saved))
}
