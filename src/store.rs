//! Disk persistence for the catalog and plan documents.
//!
//! Two JSON files under one data directory: `catalog.json` holds the dish
//! list, `plan.json` holds days, history and settings in one snapshot. Loads
//! are forgiving: a missing catalog falls back to the built-in set, a missing
//! plan means "no plan yet", and an unreadable document is logged and
//! replaced by the fallback instead of aborting. The one exception is a plan
//! written by a newer build, which is refused so it never gets clobbered.
//!
//! Saves rewrite the whole document through a temp file and a rename, so an
//! interrupted write never leaves half a file behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use mealwheel_catalog::Catalog;
use mealwheel_planner::{PlanState, SnapshotError, snapshot};

const CATALOG_FILE: &str = "catalog.json";
const PLAN_FILE: &str = "plan.json";

pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SnapshotStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.dir.join(CATALOG_FILE)
    }

    pub fn plan_path(&self) -> PathBuf {
        self.dir.join(PLAN_FILE)
    }

    /// Load the catalog, falling back to the built-in default set when no
    /// usable document exists.
    pub fn load_catalog(&self) -> Catalog {
        let path = self.catalog_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %path.display(), %err, "catalog unreadable, using the default set");
                }
                return Catalog::default_set();
            }
        };
        match snapshot::decode_catalog(&raw) {
            Ok(catalog) => {
                tracing::debug!(path = %path.display(), items = catalog.len(), "catalog loaded");
                catalog
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "catalog malformed, using the default set");
                Catalog::default_set()
            }
        }
    }

    /// Load the plan snapshot. `Ok(None)` means no saved plan, either because
    /// the file does not exist or because it could not be understood; the
    /// latter is logged and the file stays untouched until the next save.
    pub fn load_plan(&self) -> Result<Option<PlanState>> {
        let path = self.plan_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        match snapshot::decode_plan(&raw) {
            Ok(state) => {
                tracing::debug!(path = %path.display(), days = state.days.len(), "plan loaded");
                Ok(Some(state))
            }
            Err(err @ SnapshotError::UnsupportedVersion(_)) => Err(err)
                .with_context(|| format!("{} was written by a newer build", path.display())),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "plan malformed, starting blank");
                Ok(None)
            }
        }
    }

    pub fn save_catalog(&self, catalog: &Catalog) -> Result<()> {
        let raw = snapshot::encode_catalog(catalog)?;
        self.write_document(&self.catalog_path(), &raw)
    }

    pub fn save_plan(&self, state: &PlanState) -> Result<()> {
        let raw = snapshot::encode_plan(state)?;
        self.write_document(&self.plan_path(), &raw)
    }

    /// Whole-document replacement: write next to the target, then rename
    /// over it.
    fn write_document(&self, path: &Path, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create data directory {}", self.dir.display()))?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents).with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("failed to replace {}", path.display()))?;
        Ok(())
    }
}
