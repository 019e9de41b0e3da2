use super::*;

/// Tests clearing one flag while keeping the others.
///
/// Expected: Ok with only the flag cleared
#[tokio::test]
async fn clears_only_the_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permission(db, 100, 0b0111).await?;

    let stored = RolePermissionRepository::new(db)
        .remove_permissions(100, flag(0b0010))
        .await?;

    assert_eq!(stored.permissions, 0b0101);

    Ok(())
}

/// Tests revoking from a role that never had a record.
///
/// Expected: Ok with a zero-valued record
#[tokio::test]
async fn creates_zero_record_for_unknown_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = RolePermissionRepository::new(db)
        .remove_permissions(100, flag(8))
        .await?;

    assert_eq!(stored.permissions, 0);

    Ok(())
}

/// Tests that grant followed by revoke restores the previous bitmask.
///
/// Expected: Ok with the original bitmask
#[tokio::test]
async fn revoke_restores_pre_grant_bitmask() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permission(db, 100, 0b1001).await?;

    let repo = RolePermissionRepository::new(db);
    repo.add_permissions(100, flag(0b0100)).await?;
    let restored = repo.remove_permissions(100, flag(0b0100)).await?;

    assert_eq!(restored.permissions, 0b1001);

    Ok(())
}

/// Tests that revoking the last flag leaves the row in place.
///
/// Expected: Ok with a zero-valued record still present
#[tokio::test]
async fn keeps_row_after_last_flag_revoked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permission(db, 100, 2).await?;

    RolePermissionRepository::new(db)
        .remove_permissions(100, flag(2))
        .await?;

    let rows = entity::prelude::RolePermission::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].permissions, 0);

    Ok(())
}
