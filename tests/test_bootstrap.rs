/// Integration tests for role seeding at startup.
mod helpers;
use helpers::*;
use wms_core::bootstrap::seed_roles;

#[tokio::test]
async fn test_seed_roles_creates_missing_roles() {
    let test_db = setup_test_db().await;
    let service = test_db.role_service();
    let names = vec!["ROLE_ADMIN".to_string(), "ROLE_USER".to_string()];

    let created = seed_roles(&service, &names).await.unwrap();

    assert_eq!(created, 2);
    assert_eq!(count_roles(test_db.db()).await, 2);
}

#[tokio::test]
async fn test_seed_roles_is_idempotent() {
    let test_db = setup_seeded_db().await;
    let service = test_db.role_service();
    let names = vec![
        "ROLE_ADMIN".to_string(),
        "ROLE_USER".to_string(),
        "ROLE_AUDITOR".to_string(),
    ];

    let created = seed_roles(&service, &names).await.unwrap();
    assert_eq!(created, 1);

    let created = seed_roles(&service, &names).await.unwrap();
    assert_eq!(created, 0);
    assert_eq!(count_roles(test_db.db()).await, 3);
}
