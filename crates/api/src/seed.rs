//! Content seeding from a JSON manifest.
//!
//! The manifest lists services and projects with an image file for each:
//!
//! ```json
//! {
//!   "services": [
//!     { "title": "Worktables & Counters", "description": "...",
//!       "image_alt": "Stainless worktables", "image_path": "images/service-counter.jpg",
//!       "sort_order": 1 }
//!   ],
//!   "projects": []
//! }
//! ```
//!
//! Image paths are resolved relative to the manifest's directory. All rows
//! are written in one transaction.

use std::path::{Path, PathBuf};

use anyhow::Context;
use fabsite_core::content::{image_type_for_path, ContentKind};
use fabsite_db::models::content::CreateContentItem;
use fabsite_db::repositories::ContentRepo;
use fabsite_db::DbPool;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SeedManifest {
    #[serde(default)]
    pub services: Vec<SeedEntry>,
    #[serde(default)]
    pub projects: Vec<SeedEntry>,
}

/// One content row. `image_type` defaults from the image file's extension.
#[derive(Debug, Deserialize)]
pub struct SeedEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_alt: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub image_type: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Rows written by [`run_seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub removed: u64,
    pub services: usize,
    pub projects: usize,
}

impl SeedManifest {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse manifest {}", path.display()))
    }
}

impl SeedEntry {
    /// Read the image file and build the insert DTO.
    fn load(self, base_dir: &Path) -> anyhow::Result<CreateContentItem> {
        let (image, image_type) = match &self.image_path {
            Some(rel) => {
                let path: PathBuf = base_dir.join(rel);
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("failed to read image {}", path.display()))?;
                let image_type = self
                    .image_type
                    .clone()
                    .unwrap_or_else(|| image_type_for_path(rel).to_string());
                (Some(bytes), Some(image_type))
            }
            None => (None, self.image_type.clone()),
        };

        Ok(CreateContentItem {
            title: self.title,
            description: self.description,
            image_alt: self.image_alt,
            image,
            image_type,
            sort_order: self.sort_order,
            is_active: self.is_active,
        })
    }
}

/// Load `manifest_path` and insert its rows.
///
/// With `replace`, existing services and projects are deleted first, inside
/// the same transaction. Every image is read before the transaction opens,
/// so a missing file leaves the database untouched.
pub async fn run_seed(
    pool: &DbPool,
    manifest_path: &Path,
    replace: bool,
) -> anyhow::Result<SeedSummary> {
    let manifest = SeedManifest::load(manifest_path)?;
    let base_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));

    let services = manifest
        .services
        .into_iter()
        .map(|e| e.load(base_dir))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let projects = manifest
        .projects
        .into_iter()
        .map(|e| e.load(base_dir))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut tx = pool.begin().await?;

    let mut removed = 0;
    if replace {
        for kind in ContentKind::ALL {
            removed += ContentRepo::delete_all(&mut *tx, kind).await?;
        }
    }

    for (kind, items) in [
        (ContentKind::Service, &services),
        (ContentKind::Project, &projects),
    ] {
        for item in items {
            let id = ContentRepo::create(&mut *tx, kind, item)
                .await
                .with_context(|| format!("failed to insert {} '{}'", kind.entity(), item.title))?;
            tracing::debug!(id, kind = kind.table(), title = %item.title, "Seeded content row");
        }
    }

    tx.commit().await?;

    let summary = SeedSummary {
        removed,
        services: services.len(),
        projects: projects.len(),
    };
    tracing::info!(
        removed = summary.removed,
        services = summary.services,
        projects = summary.projects,
        "Content seeded"
    );
    Ok(summary)
}
