use super::*;

/// Tests adding a flag to a role without a record.
///
/// Expected: Ok with a record holding exactly the flag
#[tokio::test]
async fn creates_record_with_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = RolePermissionRepository::new(db)
        .add_permissions(100, flag(1))
        .await?;

    assert_eq!(stored.permissions, 1);

    Ok(())
}

/// Tests that adding a flag keeps the flags already stored.
///
/// Expected: Ok with the stored bitmask OR-ed with the flag
#[tokio::test]
async fn merges_with_existing_bits() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permission(db, 100, 0b0101).await?;

    let repo = RolePermissionRepository::new(db);
    let stored = repo.add_permissions(100, flag(0b0010)).await?;

    assert_eq!(stored.permissions, 0b0111);
    assert_eq!(repo.get_permissions(100).await?, 0b0111);

    Ok(())
}

/// Tests that adding a flag twice changes nothing the second time.
///
/// Expected: Ok with the same bitmask after both calls
#[tokio::test]
async fn adding_set_flag_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RolePermissionRepository::new(db);
    let first = repo.add_permissions(100, flag(4)).await?;
    let second = repo.add_permissions(100, flag(4)).await?;

    assert_eq!(first, second);

    Ok(())
}

/// Tests that interleaved grants of different flags on one role are all kept.
///
/// Expected: Ok with every granted flag present
#[tokio::test]
async fn concurrent_grants_are_not_lost() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RolePermissionRepository::new(db);
    let (a, b, c) = tokio::join!(
        repo.add_permissions(100, flag(1)),
        repo.add_permissions(100, flag(2)),
        repo.add_permissions(100, flag(1 << 40)),
    );
    a?;
    b?;
    c?;

    assert_eq!(repo.get_permissions(100).await?, 1 | 2 | (1 << 40));

    Ok(())
}
