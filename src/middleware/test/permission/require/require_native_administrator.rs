use super::*;

/// Tests that native administrators pass without consulting the store.
///
/// The database has no `role_permissions` table, so any store query would fail.
///
/// Expected: Ok(Access::NativeAdministrator) for every permission
#[tokio::test]
async fn allows_without_store_query() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let subsystem = scenario_subsystem(db);
    let guard = PermissionGuard::new(Some(&subsystem));
    let caller = caller(&[100, 200], true);

    for permission in ["kick_members", "BAN_MEMBERS", "administrator", "not_a_permission"] {
        assert_eq!(
            guard.require(&caller, permission).await?,
            Access::NativeAdministrator
        );
    }

    Ok(())
}

/// Tests that native administrators pass even when the subsystem is down.
///
/// Expected: Ok(Access::NativeAdministrator)
#[tokio::test]
async fn allows_when_subsystem_unavailable() -> Result<(), AppError> {
    let guard = PermissionGuard::new(None);

    let access = guard.require(&caller(&[], true), "ban_members").await?;

    assert_eq!(access, Access::NativeAdministrator);

    Ok(())
}
