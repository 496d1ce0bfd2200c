mod common;

use anyhow::Result;
use migration::{Command, DownTarget, MigrateError, Plan, SchemaManager, UpTarget};
use sea_orm::ConnectionTrait;
use starter::db::migrations;

use crate::common::memory_db;

const USERS: u64 = 20250601090000;
const SESSIONS: u64 = 20250601091500;

fn up(target: UpTarget) -> Command {
    Command::Up { target }
}

fn down(target: DownTarget) -> Command {
    Command::Down { target }
}

#[tokio::test]
async fn test_fresh_database_has_nothing_applied() -> Result<()> {
    let db = memory_db().await?;

    let state = migrations::status(&db).await?;
    assert_eq!(state.entries.len(), 2);
    assert_eq!(state.applied, 0);
    assert_eq!(state.current(), None);
    assert_eq!(state.pending(), 2);
    assert_eq!(state.versions(), vec![USERS, SESSIONS]);

    Ok(())
}

#[tokio::test]
async fn test_up_latest_then_no_change() -> Result<()> {
    let db = memory_db().await?;

    let report = migrations::up(&db).await?;
    assert_eq!(report.plan, Plan::Up(2));
    assert_eq!(report.before, None);
    assert_eq!(report.after, Some(SESSIONS));

    let manager = SchemaManager::new(&db);
    assert!(manager.has_table("users").await?);
    assert!(manager.has_table("user_sessions").await?);

    let report = migrations::run(&db, &up(UpTarget::Latest)).await?;
    assert_eq!(report.plan, Plan::NoChange);
    assert_eq!(report.after, Some(SESSIONS));

    Ok(())
}

#[tokio::test]
async fn test_up_to_version_and_back() -> Result<()> {
    let db = memory_db().await?;

    let report = migrations::run(&db, &up(UpTarget::Version(USERS))).await?;
    assert_eq!(report.plan, Plan::Up(1));
    assert_eq!(report.after, Some(USERS));

    let manager = SchemaManager::new(&db);
    assert!(manager.has_table("users").await?);
    assert!(!manager.has_table("user_sessions").await?);

    let report = migrations::run(&db, &up(UpTarget::Version(SESSIONS))).await?;
    assert_eq!(report.plan, Plan::Up(1));

    // up to an older version walks back down
    let report = migrations::run(&db, &up(UpTarget::Version(USERS))).await?;
    assert_eq!(report.plan, Plan::Down(1));
    assert_eq!(report.after, Some(USERS));

    Ok(())
}

#[tokio::test]
async fn test_down_prev_and_all() -> Result<()> {
    let db = memory_db().await?;
    migrations::up(&db).await?;

    let report = migrations::run(&db, &down(DownTarget::Prev)).await?;
    assert_eq!(report.plan, Plan::Down(1));
    assert_eq!(report.after, Some(USERS));

    let report = migrations::run(&db, &down(DownTarget::All)).await?;
    assert_eq!(report.plan, Plan::Down(1));
    assert_eq!(report.after, None);

    let manager = SchemaManager::new(&db);
    assert!(!manager.has_table("users").await?);

    let report = migrations::run(&db, &down(DownTarget::All)).await?;
    assert_eq!(report.plan, Plan::NoChange);

    let report = migrations::run(&db, &down(DownTarget::Prev)).await?;
    assert_eq!(report.plan, Plan::NoChange);

    Ok(())
}

#[tokio::test]
async fn test_down_to_version() -> Result<()> {
    let db = memory_db().await?;
    migrations::up(&db).await?;

    let report = migrations::run(&db, &down(DownTarget::Version(USERS))).await?;
    assert_eq!(report.plan, Plan::Down(1));
    assert_eq!(report.after, Some(USERS));

    let err = migrations::run(&db, &down(DownTarget::Version(USERS)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MigrateError::TargetNotBelowCurrent {
            target: USERS,
            current: USERS
        }
    ));

    // rejected commands leave the database untouched
    let state = migrations::status(&db).await?;
    assert_eq!(state.current(), Some(USERS));

    Ok(())
}

#[tokio::test]
async fn test_down_rolls_back_applied_migrations_around_a_gap() -> Result<()> {
    let db = memory_db().await?;
    migrations::up(&db).await?;

    // users is now pending underneath the applied sessions migration
    db.execute_unprepared(
        "DELETE FROM seaql_migrations WHERE version = 'm20250601_090000_create_users_table'",
    )
    .await?;

    let state = migrations::status(&db).await?;
    assert_eq!(state.applied, 1);
    assert_eq!(state.current(), Some(SESSIONS));
    assert_eq!(state.gap(), Some(USERS));

    let err = migrations::run(&db, &up(UpTarget::Version(USERS)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MigrateError::OutOfOrder {
            pending: USERS,
            current: SESSIONS
        }
    ));

    let report = migrations::run(&db, &down(DownTarget::All)).await?;
    assert_eq!(report.plan, Plan::Down(1));
    assert_eq!(report.before, Some(SESSIONS));
    assert_eq!(report.after, None);

    let manager = SchemaManager::new(&db);
    assert!(!manager.has_table("user_sessions").await?);
    assert_eq!(migrations::status(&db).await?.applied, 0);

    Ok(())
}

#[tokio::test]
async fn test_unknown_version_is_rejected() -> Result<()> {
    let db = memory_db().await?;

    let err = migrations::run(&db, &up(UpTarget::Version(42)))
        .await
        .unwrap_err();
    assert!(matches!(err, MigrateError::VersionNotFound(42)));

    assert_eq!(migrations::status(&db).await?.applied, 0);

    Ok(())
}
