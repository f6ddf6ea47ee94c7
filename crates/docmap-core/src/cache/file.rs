use super::Cache;
use crate::model::Registry;
use crate::schema::{Map, MapRecord};
use crate::{Error, Result};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const EXTENSION: &str = "json";

/// Persists map records as JSON files, one per class, so compiled metadata
/// survives the process.
///
/// Files only hold names. Fetching a map binds it again against the
/// registry.
#[derive(Debug)]
pub struct FileCache {
    dir: PathBuf,
    registry: Arc<Registry>,
}

impl FileCache {
    /// Creates a cache storing its files in `dir`, creating the directory if
    /// needed.
    pub fn new(dir: impl Into<PathBuf>, registry: Arc<Registry>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| {
            Error::from(err).context(format!("creating cache directory {}", dir.display()))
        })?;

        Ok(Self { dir, registry })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the record of `class`: `app::User` is stored in
    /// `app_User.json`.
    ///
    /// `%` and `_` are percent-encoded before `::` becomes `_`, so distinct
    /// classes never share a file (`a::b_c` is `a_b%5Fc.json`, `a_b::c` is
    /// `a%5Fb_c.json`).
    pub fn path_for(&self, class: &str) -> PathBuf {
        self.dir.join(format!("{}.{EXTENSION}", file_stem(class)))
    }
}

impl Cache for FileCache {
    fn contains(&self, class: &str) -> bool {
        self.path_for(class).is_file()
    }

    fn fetch(&self, class: &str) -> Result<Arc<Map>> {
        let path = self.path_for(class);

        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Err(Error::not_found(class)),
            Err(err) => {
                return Err(Error::from(err).context(format!("reading {}", path.display())))
            }
        };

        let record: MapRecord = serde_json::from_str(&json)
            .map_err(|err| Error::from(err).context(format!("decoding {}", path.display())))?;

        if record.class != class {
            log::warn!(
                "cache file holds another class; class={class} found={} path={}",
                record.class,
                path.display()
            );
            return Err(Error::not_found(class));
        }

        let map = Map::bind(&record, &self.registry)?;
        log::debug!("loaded map; class={class} path={}", path.display());

        Ok(Arc::new(map))
    }

    fn save(&self, class: &str, map: Arc<Map>) -> Result<()> {
        let path = self.path_for(class);
        let json = serde_json::to_string_pretty(&map.to_record())?;

        fs::write(&path, json)
            .map_err(|err| Error::from(err).context(format!("writing {}", path.display())))?;

        log::debug!("saved map; class={class} path={}", path.display());
        Ok(())
    }

    fn invalidate(&self, class: &str) -> Result<()> {
        match fs::remove_file(self.path_for(class)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn clear(&self) -> Result<()> {
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();

            if path.extension().is_some_and(|ext| ext == EXTENSION) {
                fs::remove_file(&path)?;
            }
        }

        Ok(())
    }
}

fn file_stem(class: &str) -> String {
    class
        .replace('%', "%25")
        .replace('_', "%5F")
        .replace("::", "_")
}
