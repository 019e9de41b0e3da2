use super::*;

/// Tests revoking a permission the role never held.
///
/// Expected: Ok(Revoked) with the bitmask unchanged
#[tokio::test]
async fn revoking_unheld_permission_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permission(db, 100, 2).await?;

    let subsystem = scenario_subsystem(db);
    let change = FakePermsService::new(&subsystem)
        .revoke(&owner(), 100, "kick_members")
        .await?;

    assert_eq!(
        change,
        PermissionChange::Revoked {
            role_id: 100,
            permission: "KICK_MEMBERS".to_string(),
            permissions: 2,
        }
    );

    Ok(())
}

/// Tests that grant followed by revoke restores the earlier bitmask.
///
/// Expected: Ok(Revoked) with the original bitmask
#[tokio::test]
async fn revoke_undoes_grant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permission(db, 100, 4).await?;

    let subsystem = scenario_subsystem(db);
    let service = FakePermsService::new(&subsystem);

    service.grant(&owner(), 100, "kick_members").await?;
    let change = service.revoke(&owner(), 100, "kick_members").await?;

    assert!(matches!(change, PermissionChange::Revoked { permissions: 4, .. }));

    Ok(())
}

/// Tests revoking a name the catalog does not know.
///
/// Expected: Ok(UnknownPermission) with the stored bitmask untouched
#[tokio::test]
async fn unknown_permission_does_not_touch_store() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permission(db, 100, 7).await?;

    let subsystem = scenario_subsystem(db);
    let change = FakePermsService::new(&subsystem)
        .revoke(&owner(), 100, "manage_roles")
        .await?;

    assert_eq!(
        change,
        PermissionChange::UnknownPermission("MANAGE_ROLES".to_string())
    );
    let row = entity::prelude::RolePermission::find_by_id(100).one(db).await?;
    assert_eq!(row.map(|r| r.permissions), Some(7));

    Ok(())
}

/// Tests that only the guild owner may revoke.
///
/// Expected: Err(NotGuildOwner) with the stored bitmask untouched
#[tokio::test]
async fn rejects_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permission(db, 100, 1).await?;

    let subsystem = scenario_subsystem(db);
    let result = FakePermsService::new(&subsystem)
        .revoke(&administrator(), 100, "kick_members")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotGuildOwner(_)))
    ));
    let row = entity::prelude::RolePermission::find_by_id(100).one(db).await?;
    assert_eq!(row.map(|r| r.permissions), Some(1));

    Ok(())
}
