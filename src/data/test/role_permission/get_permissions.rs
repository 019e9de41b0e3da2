use super::*;

/// Tests reading a role that has never been granted anything.
///
/// Verifies that a missing record is reported as an empty bitmask rather than
/// an error.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_role_without_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RolePermissionRepository::new(db);

    for role_id in [1, 100, 1_234_567_890_123_456_789] {
        assert_eq!(repo.get_permissions(role_id).await?, 0);
    }

    Ok(())
}

/// Tests reading a stored bitmask.
///
/// Expected: Ok(bitmask) exactly as stored
#[tokio::test]
async fn returns_stored_bitmask() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permission(db, 123456, 8).await?;

    let repo = RolePermissionRepository::new(db);
    assert_eq!(repo.get_permissions(123456).await?, 8);
    assert_eq!(repo.get_permissions(234567).await?, 0);

    Ok(())
}

/// Tests that storage failures surface as errors instead of an empty bitmask.
///
/// Uses a database without the `role_permissions` table.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_when_storage_unavailable() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RolePermissionRepository::new(db).get_permissions(1).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests rejection of ids that cannot be stored.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn rejects_out_of_range_role_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RolePermissionRepository::new(db).get_permissions(u64::MAX).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
