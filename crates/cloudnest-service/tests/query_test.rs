//! Tests for the browsing and search views.

mod helpers;

use cloudnest_core::error::ErrorKind;
use cloudnest_core::types::NavigationIntent;
use helpers::{TestEnv, ctx};
use uuid::Uuid;

#[tokio::test]
async fn test_root_listing_is_scoped_to_owner() {
    let env = TestEnv::new();
    let mine = env.seed_file("alice", "mine.txt", None).await;
    env.seed_file("bob", "theirs.txt", None).await;

    let listing = env
        .query
        .browse(&ctx("alice"), NavigationIntent::Root)
        .await
        .unwrap();

    let ids: Vec<Uuid> = listing.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![mine.id]);
}

#[tokio::test]
async fn test_folder_listing_contains_only_direct_children() {
    let env = TestEnv::new();
    let ctx = ctx("alice");
    let folder = env.seed_folder("alice", "docs", None).await;
    let child = env.seed_file("alice", "cv.pdf", Some(folder.id)).await;
    let sub = env.seed_folder("alice", "archive", Some(folder.id)).await;
    env.seed_file("alice", "nested.txt", Some(sub.id)).await;
    env.seed_file("alice", "root.txt", None).await;

    let mut listing = env
        .query
        .browse(&ctx, NavigationIntent::Folder(folder.id))
        .await
        .unwrap();
    listing.sort_by(|a, b| a.name.cmp(&b.name));

    let ids: Vec<Uuid> = listing.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![sub.id, child.id]);
}

#[tokio::test]
async fn test_folder_listing_hides_trashed_children() {
    let env = TestEnv::new();
    let ctx = ctx("alice");
    let folder = env.seed_folder("alice", "docs", None).await;
    let kept = env.seed_file("alice", "kept.txt", Some(folder.id)).await;
    let binned = env.seed_file("alice", "binned.txt", Some(folder.id)).await;
    env.lifecycle.trash(&ctx, binned.id).await.unwrap();

    let listing = env
        .query
        .browse(&ctx, NavigationIntent::Folder(folder.id))
        .await
        .unwrap();

    let ids: Vec<Uuid> = listing.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![kept.id]);
}

#[tokio::test]
async fn test_browse_unknown_folder_returns_not_found() {
    let env = TestEnv::new();

    let err = env
        .query
        .browse(&ctx("alice"), NavigationIntent::Folder(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_browse_foreign_folder_returns_not_found() {
    let env = TestEnv::new();
    let folder = env.seed_folder("alice", "private", None).await;

    let err = env
        .query
        .browse(&ctx("mallory"), NavigationIntent::Folder(folder.id))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_browse_file_as_folder_returns_not_found() {
    let env = TestEnv::new();
    let file = env.seed_file("alice", "not-a-folder.txt", None).await;

    let err = env
        .query
        .browse(&ctx("alice"), NavigationIntent::Folder(file.id))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_search_matches_name_case_insensitively() {
    let env = TestEnv::new();
    let hit = env.seed_file("alice", "Quarterly Report.pdf", None).await;
    env.seed_file("alice", "holiday.jpg", None).await;

    let results = env
        .query
        .browse(&ctx("alice"), NavigationIntent::Search("report".into()))
        .await
        .unwrap();

    let ids: Vec<Uuid> = results.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![hit.id]);
}

#[tokio::test]
async fn test_search_matches_description() {
    let env = TestEnv::new();
    let hit = env
        .seed_file_described("alice", "IMG_2041.jpg", None, Some("a brown dog on a beach"))
        .await;
    env.seed_file("alice", "IMG_2042.jpg", None).await;

    let results = env
        .query
        .browse(&ctx("alice"), NavigationIntent::Search("dog".into()))
        .await
        .unwrap();

    let ids: Vec<Uuid> = results.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![hit.id]);
}

#[tokio::test]
async fn test_search_excludes_trash_and_other_owners() {
    let env = TestEnv::new();
    let ctx = ctx("alice");
    let hit = env.seed_file("alice", "budget.xlsx", None).await;
    let binned = env.seed_file("alice", "budget-old.xlsx", None).await;
    env.seed_file("bob", "budget-bob.xlsx", None).await;
    env.lifecycle.trash(&ctx, binned.id).await.unwrap();

    let results = env
        .query
        .browse(&ctx, NavigationIntent::Search("budget".into()))
        .await
        .unwrap();

    let ids: Vec<Uuid> = results.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![hit.id]);
}

#[tokio::test]
async fn test_search_rejects_blank_term() {
    let env = TestEnv::new();

    let err = env
        .query
        .browse(&ctx("alice"), NavigationIntent::Search("   ".into()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_trash_view_lists_only_trashed_nodes() {
    let env = TestEnv::new();
    let ctx = ctx("alice");
    let binned = env.seed_file("alice", "old.txt", None).await;
    env.seed_file("alice", "active.txt", None).await;
    env.lifecycle.trash(&ctx, binned.id).await.unwrap();

    let listing = env
        .query
        .browse(&ctx, NavigationIntent::Trash)
        .await
        .unwrap();

    let ids: Vec<Uuid> = listing.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![binned.id]);
}
