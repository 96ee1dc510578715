//! Integration tests for content seeding.

use fabsite_api::seed::run_seed;
use fabsite_core::content::ContentKind;
use fabsite_db::repositories::ContentRepo;
use sqlx::PgPool;

fn write_fixture(dir: &std::path::Path, manifest: serde_json::Value) -> std::path::PathBuf {
    std::fs::create_dir_all(dir.join("images")).unwrap();
    std::fs::write(dir.join("images/counter.jpg"), [0xFF, 0xD8, 0x01]).unwrap();
    std::fs::write(dir.join("images/gallery-1.png"), [0x89, b'P', b'N', b'G']).unwrap();
    let path = dir.join("content.json");
    std::fs::write(&path, manifest.to_string()).unwrap();
    path
}

fn manifest() -> serde_json::Value {
    serde_json::json!({
        "services": [
            {
                "title": "Worktables & Counters",
                "description": "Custom-sized stainless steel worktables.",
                "image_alt": "Stainless worktables",
                "image_path": "images/counter.jpg",
                "sort_order": 1
            }
        ],
        "projects": [
            {
                "title": "Prep Table Fabrication",
                "description": "Custom stainless prep table.",
                "image_alt": "Stainless prep table",
                "image_path": "images/gallery-1.png",
                "sort_order": 1
            },
            {
                "title": "Draft Project",
                "image_path": "images/counter.jpg",
                "sort_order": 2,
                "is_active": false
            }
        ]
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeds_both_kinds_with_images(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), manifest());

    let summary = run_seed(&pool, &path, false).await.unwrap();
    assert_eq!(summary.services, 1);
    assert_eq!(summary.projects, 2);
    assert_eq!(summary.removed, 0);

    let projects = ContentRepo::list_active(&pool, ContentKind::Project).await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "Prep Table Fabrication");

    let image = ContentRepo::find_active_image(&pool, ContentKind::Project, projects[0].id)
        .await
        .unwrap()
        .and_then(|i| i.into_parts())
        .unwrap();
    assert_eq!(image.0, "image/png");
    assert_eq!(image.1, vec![0x89, b'P', b'N', b'G']);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_clears_previous_rows(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), manifest());

    run_seed(&pool, &path, false).await.unwrap();
    run_seed(&pool, &path, false).await.unwrap();
    let services = ContentRepo::list_active(&pool, ContentKind::Service).await.unwrap();
    assert_eq!(services.len(), 2);

    let summary = run_seed(&pool, &path, true).await.unwrap();
    assert_eq!(summary.removed, 6);
    let services = ContentRepo::list_active(&pool, ContentKind::Service).await.unwrap();
    assert_eq!(services.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_image_writes_nothing(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let mut broken = manifest();
    broken["projects"][1]["image_path"] = serde_json::json!("images/missing.jpg");
    let path = write_fixture(dir.path(), broken);

    let err = run_seed(&pool, &path, false).await.unwrap_err();
    assert!(format!("{err:#}").contains("missing.jpg"));

    let services = ContentRepo::list_active(&pool, ContentKind::Service).await.unwrap();
    assert!(services.is_empty());
}
