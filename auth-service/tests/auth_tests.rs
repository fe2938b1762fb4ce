use std::sync::Arc;

use auth_service::domain::auth::errors::AuthError;
use auth_service::domain::auth::errors::ValidationError;
use auth_service::domain::auth::models::User;
use auth_service::domain::auth::models::UserId;
use auth_service::domain::auth::ports::AuthServicePort;
use auth_service::domain::auth::service::AuthService;
use auth_service::outbound::repositories::user::InMemoryUserRepository;

const USER_ID: &str = "userId";
const USER_PASSWORD: &str = "userPassword";

async fn seeded_service() -> AuthService<InMemoryUserRepository> {
    let repository = InMemoryUserRepository::new();
    repository
        .insert(User::new(
            UserId::new(USER_ID.to_string()).unwrap(),
            USER_PASSWORD.to_string(),
        ))
        .await;

    AuthService::new(Arc::new(repository))
}

#[tokio::test]
async fn test_authenticate_against_in_memory_store() {
    let service = seeded_service().await;

    let auth = service
        .authenticate(USER_ID, USER_PASSWORD)
        .await
        .expect("authentication failed");

    assert_eq!(auth.id().as_str(), USER_ID);
}

#[tokio::test]
async fn test_wrong_password_against_in_memory_store() {
    let service = seeded_service().await;

    let result = service.authenticate(USER_ID, "userWrongPassword").await;
    assert_eq!(result.unwrap_err(), AuthError::WrongPassword);
}

#[tokio::test]
async fn test_unknown_user_against_in_memory_store() {
    let service = seeded_service().await;

    let result = service.authenticate("noUserId", USER_PASSWORD).await;
    assert_eq!(
        result.unwrap_err(),
        AuthError::UserNotFound("noUserId".to_string())
    );
}

#[tokio::test]
async fn test_empty_inputs_fail_before_lookup() {
    let service = seeded_service().await;

    assert_eq!(
        service.authenticate("", USER_PASSWORD).await.unwrap_err(),
        AuthError::InvalidArgument(ValidationError::EmptyUserId)
    );
    assert_eq!(
        service.authenticate(USER_ID, "").await.unwrap_err(),
        AuthError::InvalidArgument(ValidationError::EmptyPassword)
    );
}

#[tokio::test]
async fn test_outcome_is_stable_across_repeated_calls() {
    let service = seeded_service().await;

    let first = service.authenticate(USER_ID, USER_PASSWORD).await;
    let second = service.authenticate(USER_ID, USER_PASSWORD).await;
    assert_eq!(first, second);

    let first = service.authenticate(USER_ID, "userWrongPassword").await;
    let second = service.authenticate(USER_ID, "userWrongPassword").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_callers_share_one_service() {
    let service = Arc::new(seeded_service().await);

    let mut handles = Vec::new();
    for _ in 0..16 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service.authenticate(USER_ID, USER_PASSWORD).await
        }));
    }

    for handle in handles {
        let auth = handle.await.expect("task panicked").expect("authentication failed");
        assert_eq!(auth.id().as_str(), USER_ID);
    }
}

#[tokio::test]
async fn test_insert_replaces_existing_record() {
    let repository = InMemoryUserRepository::new();
    let id = UserId::new(USER_ID.to_string()).unwrap();

    repository
        .insert(User::new(id.clone(), "oldPassword".to_string()))
        .await;
    repository
        .insert(User::new(id, USER_PASSWORD.to_string()))
        .await;

    let service = AuthService::new(Arc::new(repository));

    assert_eq!(
        service.authenticate(USER_ID, "oldPassword").await.unwrap_err(),
        AuthError::WrongPassword
    );
    assert!(service.authenticate(USER_ID, USER_PASSWORD).await.is_ok());
}
