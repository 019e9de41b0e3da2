use crate::{
    error::{auth::AuthError, AppError},
    model::{
        catalog::PermissionCatalog,
        permission::{Caller, PermissionChange},
    },
    service::fakeperms::FakePermsService,
    state::PermissionSubsystem,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod grant;
mod revoke;

const OWNER_ID: u64 = 1;

fn scenario_subsystem(db: &DatabaseConnection) -> PermissionSubsystem {
    let catalog = PermissionCatalog::from_json(fixture::catalog::SCENARIO).unwrap();

    PermissionSubsystem::new(db.clone(), catalog)
}

fn owner() -> Caller {
    Caller {
        user_id: OWNER_ID,
        guild_id: 1000,
        guild_owner_id: OWNER_ID,
        native_administrator: true,
        role_ids: vec![1000],
    }
}

/// A native administrator who does not own the guild.
fn administrator() -> Caller {
    Caller {
        user_id: 2,
        ..owner()
    }
}

/// Walks the grant/revoke/list scenario on a role with no prior record.
///
/// Expected: bitmask 1, then 3, then 2; list yields ["BAN_MEMBERS"]
#[tokio::test]
async fn grant_revoke_list_scenario() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subsystem = scenario_subsystem(db);
    let service = FakePermsService::new(&subsystem);
    let owner = owner();

    let change = service.grant(&owner, 100, "kick_members").await?;
    assert!(matches!(change, PermissionChange::Granted { permissions: 1, .. }));

    let change = service.grant(&owner, 100, "ban_members").await?;
    assert!(matches!(change, PermissionChange::Granted { permissions: 3, .. }));

    let change = service.revoke(&owner, 100, "kick_members").await?;
    assert!(matches!(change, PermissionChange::Revoked { permissions: 2, .. }));

    let listed = service.list(&owner, 100).await?;
    assert_eq!(listed.names, vec!["BAN_MEMBERS".to_string()]);
    assert_eq!(listed.permissions, 2);

    Ok(())
}
