use super::*;

/// Tests that a role with the fake ADMINISTRATOR bit passes every check.
///
/// The role holds no other bit.
///
/// Expected: Ok(Access::RoleAdministrator) for every permission
#[tokio::test]
async fn administrator_bit_passes_every_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permission(db, 300, 4).await?;

    let subsystem = scenario_subsystem(db);
    let guard = PermissionGuard::new(Some(&subsystem));
    let caller = caller(&[300], false);

    for permission in ["kick_members", "ban_members", "administrator"] {
        assert_eq!(
            guard.require(&caller, permission).await?,
            Access::RoleAdministrator { role_id: 300 }
        );
    }

    Ok(())
}

/// Tests that the administrator bit is found on any held role, not just the first.
///
/// Expected: Ok(Access::RoleAdministrator) naming the second role
#[tokio::test]
async fn administrator_bit_on_later_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permissions(db, &[(100, 0), (300, 4 | 1)]).await?;

    let subsystem = scenario_subsystem(db);
    let guard = PermissionGuard::new(Some(&subsystem));

    let access = guard.require(&caller(&[100, 300], false), "ban_members").await?;

    assert_eq!(access, Access::RoleAdministrator { role_id: 300 });

    Ok(())
}

/// Tests a required permission the catalog does not know.
///
/// Only a role with the fake ADMINISTRATOR bit may pass; a role holding every other
/// bit is denied.
///
/// Expected: Ok for the administrator role, Err(MissingPermission) otherwise
#[tokio::test]
async fn unknown_permission_needs_administrator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permissions(db, &[(100, 1 | 2), (300, 4)]).await?;

    let subsystem = scenario_subsystem(db);
    let guard = PermissionGuard::new(Some(&subsystem));

    let denied = guard.require(&caller(&[100], false), "manage_roles").await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::MissingPermission(name))) if name == "MANAGE_ROLES"
    ));

    let allowed = guard.require(&caller(&[300], false), "manage_roles").await?;
    assert_eq!(allowed, Access::RoleAdministrator { role_id: 300 });

    Ok(())
}

/// Tests that an empty catalog denies everyone but native administrators.
///
/// Even a bitmask with every bit set does not pass when the catalog is empty.
///
/// Expected: Err(MissingPermission)
#[tokio::test]
async fn empty_catalog_fails_closed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_permission(db, 100, i64::MAX).await?;

    let subsystem = PermissionSubsystem::new(db.clone(), PermissionCatalog::default());
    let guard = PermissionGuard::new(Some(&subsystem));

    let result = guard.require(&caller(&[100], false), "kick_members").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingPermission(_)))
    ));

    Ok(())
}
