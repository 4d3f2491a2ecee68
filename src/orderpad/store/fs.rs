use super::DataStore;
use crate::error::{OrderpadError, Result};
use crate::model::Scope;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    project_root: Option<PathBuf>,
    global_root: PathBuf,
}

impl FileStore {
    pub fn new(project_root: Option<PathBuf>, global_root: PathBuf) -> Self {
        Self {
            project_root,
            global_root,
        }
    }

    pub fn scope_root(&self, scope: Scope) -> Result<&Path> {
        match scope {
            Scope::Project => self.project_root.as_deref().ok_or_else(|| {
                OrderpadError::Store("No project scope available".to_string())
            }),
            Scope::Global => Ok(&self.global_root),
        }
    }

    fn ensure_dir(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(OrderpadError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read_entry(&self, key: &str, scope: Scope) -> Result<Option<String>> {
        let path = self.scope_root(scope)?.join(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(OrderpadError::Io(e)),
        }
    }

    fn write_entry(&mut self, key: &str, value: &str, scope: Scope) -> Result<()> {
        let root = self.scope_root(scope)?.to_path_buf();
        Self::ensure_dir(&root)?;
        fs::write(root.join(key), value).map_err(OrderpadError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{NEXT_ID_KEY, ORDERS_KEY};

    #[test]
    fn absent_entry_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(Some(dir.path().to_path_buf()), dir.path().join("global"));
        assert!(store
            .read_entry(ORDERS_KEY, Scope::Project)
            .unwrap()
            .is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store =
            FileStore::new(Some(dir.path().to_path_buf()), dir.path().join("global"));
        store
            .write_entry(NEXT_ID_KEY, "7", Scope::Project)
            .unwrap();
        assert_eq!(
            store.read_entry(NEXT_ID_KEY, Scope::Project).unwrap(),
            Some("7".to_string())
        );
    }

    #[test]
    fn scopes_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let mut store =
            FileStore::new(Some(dir.path().join("proj")), dir.path().join("global"));
        store
            .write_entry(NEXT_ID_KEY, "3", Scope::Project)
            .unwrap();
        store.write_entry(NEXT_ID_KEY, "9", Scope::Global).unwrap();
        assert_eq!(
            store.read_entry(NEXT_ID_KEY, Scope::Project).unwrap(),
            Some("3".to_string())
        );
        assert_eq!(
            store.read_entry(NEXT_ID_KEY, Scope::Global).unwrap(),
            Some("9".to_string())
        );
    }

    #[test]
    fn missing_project_root_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(None, dir.path().to_path_buf());
        assert!(matches!(
            store.read_entry(ORDERS_KEY, Scope::Project),
            Err(OrderpadError::Store(_))
        ));
    }
}
