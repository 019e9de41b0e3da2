use super::*;

/// Tests the reported change names the upper-cased permission and role.
///
/// Expected: Ok(Granted { role_id: 100, permission: "KICK_MEMBERS", permissions: 1 })
#[tokio::test]
async fn reports_granted_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subsystem = scenario_subsystem(db);
    let change = FakePermsService::new(&subsystem)
        .grant(&owner(), 100, "Kick_Members")
        .await?;

    assert_eq!(
        change,
        PermissionChange::Granted {
            role_id: 100,
            permission: "KICK_MEMBERS".to_string(),
            permissions: 1,
        }
    );

    Ok(())
}

/// Tests granting a permission the role already holds.
///
/// Expected: Ok(Granted) with the bitmask unchanged
#[tokio::test]
async fn granting_held_permission_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permission(db, 100, 0b011).await?;

    let subsystem = scenario_subsystem(db);
    let service = FakePermsService::new(&subsystem);

    let first = service.grant(&owner(), 100, "ban_members").await?;
    let second = service.grant(&owner(), 100, "ban_members").await?;

    assert_eq!(first, second);
    assert!(matches!(second, PermissionChange::Granted { permissions: 0b011, .. }));

    Ok(())
}

/// Tests granting a name the catalog does not know.
///
/// Expected: Ok(UnknownPermission) and no row written
#[tokio::test]
async fn unknown_permission_does_not_touch_store() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subsystem = scenario_subsystem(db);
    let change = FakePermsService::new(&subsystem)
        .grant(&owner(), 100, "fly")
        .await?;

    assert_eq!(change, PermissionChange::UnknownPermission("FLY".to_string()));
    let rows = entity::prelude::RolePermission::find().all(db).await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Tests that only the guild owner may grant, even over native administrators.
///
/// Expected: Err(NotGuildOwner) and no row written
#[tokio::test]
async fn rejects_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subsystem = scenario_subsystem(db);
    let result = FakePermsService::new(&subsystem)
        .grant(&administrator(), 100, "kick_members")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotGuildOwner(2)))
    ));
    let rows = entity::prelude::RolePermission::find().all(db).await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Tests that unknown names are reported in the same form as known ones.
///
/// Surrounding whitespace is dropped and the name is upper-cased.
///
/// Expected: Ok(UnknownPermission("MANAGE_ROLES"))
#[tokio::test]
async fn unknown_permission_is_normalized() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subsystem = scenario_subsystem(db);
    let change = FakePermsService::new(&subsystem)
        .grant(&owner(), 100, "  manage_Roles ")
        .await?;

    assert_eq!(
        change,
        PermissionChange::UnknownPermission("MANAGE_ROLES".to_string())
    );

    Ok(())
}
