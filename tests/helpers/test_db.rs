use std::sync::Arc;
use uuid::Uuid;
use wms_core::domain::ports::role_repository::RoleRepository;
use wms_core::infrastructure::persistence::Database;
use wms_core::RoleService;

/// A migrated SQLite database backed by a per-test file, removed on drop.
pub struct TestDatabase {
    db: Database,
    path: String,
}

impl TestDatabase {
    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn role_service(&self) -> RoleService {
        RoleService::new(Arc::new(self.db.clone()) as Arc<dyn RoleRepository>)
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", self.path, suffix));
        }
    }
}

pub async fn setup_test_db() -> TestDatabase {
    // Unique file per test so tests can run in parallel
    let path = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", path);

    let db = Database::connect(&db_url, 5)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    TestDatabase { db, path }
}

/// Database seeded with ROLE_ADMIN and ROLE_USER, written directly through the repository.
pub async fn setup_seeded_db() -> TestDatabase {
    let test_db = setup_test_db().await;
    crate::helpers::persist_role(test_db.db(), "ROLE_ADMIN").await;
    crate::helpers::persist_role(test_db.db(), "ROLE_USER").await;
    test_db
}
