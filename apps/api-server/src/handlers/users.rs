//! User handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use chirp_core::domain::{User, UserRecord};
use chirp_core::error::RepoError;
use chirp_shared::dto::{LoginRequest, LoginResponse, SignupRequest, UpdateUserRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::validation;

/// POST /signup
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut errors = Vec::new();
    validation::check_email(&mut errors, &req.email);
    validation::check_password(&mut errors, &req.password);
    validation::check_name(&mut errors, "first_name", &req.first_name);
    validation::check_name(&mut errors, "last_name", &req.last_name);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // Duplicate emails are not rejected; login returns the first match.
    let record = UserRecord::new(
        req.email,
        req.password,
        req.first_name,
        req.last_name,
        req.birthday,
    );
    let saved = state.users.save(record).await?;

    Ok(HttpResponse::Created().json(saved.profile))
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let found = state
        .users
        .find_by_credentials(&req.email, &req.password)
        .await?;

    // A miss is not an error status: the response stays 200 with a generic
    // message and no user id.
    let response = match found {
        Some(record) => LoginResponse::matched(record.profile.email, record.profile.user_id),
        None => LoginResponse::rejected(req.email),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// GET /users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let profiles: Vec<User> = state
        .users
        .list()
        .await?
        .into_iter()
        .map(|record| record.profile)
        .collect();

    Ok(HttpResponse::Ok().json(profiles))
}

/// GET /users/{user_id}
pub async fn user_detail(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let record = state
        .users
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(record.profile))
}

/// DELETE /users/{user_id}/delete
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .users
        .delete(path.into_inner())
        .await
        .map_err(|e| match e {
            RepoError::NotFound => AppError::NotFound("User not found".to_string()),
            other => other.into(),
        })?;

    Ok(HttpResponse::NoContent().finish())
}

/// PATCH /users/{user_id}/update
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let req = body.into_inner();

    let mut errors = Vec::new();
    if let Some(email) = &req.email {
        validation::check_email(&mut errors, email);
    }
    if let Some(password) = &req.password {
        validation::check_password(&mut errors, password);
    }
    if let Some(first_name) = &req.first_name {
        validation::check_name(&mut errors, "first_name", first_name);
    }
    if let Some(last_name) = &req.last_name {
        validation::check_name(&mut errors, "last_name", last_name);
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let mut record = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    // Merge only the supplied fields.
    if let Some(email) = req.email {
        record.profile.email = email;
    }
    if let Some(password) = req.password {
        record.password = password;
    }
    if let Some(first_name) = req.first_name {
        record.profile.first_name = first_name;
    }
    if let Some(last_name) = req.last_name {
        record.profile.last_name = last_name;
    }
    if let Some(birthday) = req.birthday {
        record.profile.birthday = Some(birthday);
    }

    let saved = state.users.save(record).await?;

    Ok(HttpResponse::Ok().json(saved.profile))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::{Value, json};

    use crate::state::AppState;

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::in_memory()))
                    .configure(crate::handlers::configure_routes),
            )
            .await
        };
    }

    fn signup_body(email: &str) -> Value {
        json!({
            "email": email,
            "password": "hunter2hunter2",
            "first_name": "Grace",
            "last_name": "Hopper",
            "birthday": "1906-12-09",
        })
    }

    macro_rules! signup {
        ($app:expr, $email:expr) => {{
            let req = test::TestRequest::post()
                .uri("/signup")
                .set_json(signup_body($email))
                .to_request();
            let resp = test::call_service($app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
            let body: Value = test::read_body_json(resp).await;
            body
        }};
    }

    #[actix_rt::test]
    async fn signup_then_fetch_round_trips() {
        let app = test_app!();

        let created = signup!(&app, "grace@example.com");
        assert_eq!(created["email"], "grace@example.com");
        // The login secret never appears in a response body.
        assert!(created.get("password").is_none());

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", created["user_id"].as_str().unwrap()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let fetched: Value = test::read_body_json(resp).await;
        assert_eq!(fetched, created);
    }

    #[actix_rt::test]
    async fn signup_rejects_field_violations() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/signup")
            .set_json(json!({
                "email": "not-an-address",
                "password": "short",
                "first_name": "",
                "last_name": "Ok",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 422);
    }

    #[actix_rt::test]
    async fn delete_then_fetch_is_not_found() {
        let app = test_app!();

        let created = signup!(&app, "gone@example.com");
        let id = created["user_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete()
            .uri(&format!("/users/{id}/delete"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/users/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "User not found");
    }

    #[actix_rt::test]
    async fn partial_update_merges_only_submitted_fields() {
        let app = test_app!();

        let created = signup!(&app, "partial@example.com");
        let id = created["user_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/users/{id}/update"))
            .set_json(json!({ "first_name": "Renamed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["first_name"], "Renamed");
        assert_eq!(updated["last_name"], "Hopper");
        assert_eq!(updated["email"], "partial@example.com");
        assert_eq!(updated["birthday"], "1906-12-09");
    }

    #[actix_rt::test]
    async fn login_returns_user_id_only_on_exact_match() {
        let app = test_app!();

        let created = signup!(&app, "login@example.com");

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "login@example.com", "password": "hunter2hunter2" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user_id"], created["user_id"]);

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "login@example.com", "password": "wrong-password" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        // Still a 200: the failure is carried in the message, not the status.
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("user_id").is_none());
        assert!(body["message"].as_str().unwrap().len() > 0);
    }

    #[actix_rt::test]
    async fn list_users_preserves_insertion_order() {
        let app = test_app!();

        for email in ["a@example.com", "b@example.com", "c@example.com"] {
            signup!(&app, email);
        }

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let emails: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["email"].as_str().unwrap())
            .collect();
        assert_eq!(emails, vec!["a@example.com", "b@example.com", "c@example.com"]);
    }
}
