//! HTTP handlers and route configuration.

mod health;
mod tweets;
mod users;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    // Operational
    .route("/health", web::get().to(health::health_check))
    // Users
    .route("/signup", web::post().to(users::signup))
    .route("/login", web::post().to(users::login))
    .route("/users", web::get().to(users::list_users))
    .route("/users/{user_id}", web::get().to(users::user_detail))
    .route("/users/{user_id}/delete", web::delete().to(users::delete_user))
    .route("/users/{user_id}/update", web::patch().to(users::update_user))
    // Tweets
    .route("/", web::get().to(tweets::home))
    .route("/post", web::post().to(tweets::post_tweet))
    .route("/tweets/{tweet_id}", web::get().to(tweets::tweet_detail))
    .route("/tweets/{tweet_id}/delete", web::delete().to(tweets::delete_tweet))
    .route("/tweets/{tweet_id}/update", web::patch().to(tweets::update_tweet));
}
