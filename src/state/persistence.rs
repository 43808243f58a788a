use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::PlanInputs;

/// Where last-used settings live between runs.
pub trait SettingsStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<PlanInputs>>;

    fn save(&self, inputs: &PlanInputs) -> Result<()>;
}

/// Load settings from a JSON file. A missing file is not an error.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Option<PlanInputs>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let inputs: PlanInputs = serde_json::from_str(&content)?;
    Ok(Some(inputs))
}

/// Save settings to a JSON file.
pub fn save_settings<P: AsRef<Path>>(path: P, inputs: &PlanInputs) -> Result<()> {
    let json = serde_json::to_string_pretty(inputs)?;
    fs::write(path, json)?;
    Ok(())
}

/// Settings kept in a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Option<PlanInputs>> {
        load_settings(&self.path)
    }

    fn save(&self, inputs: &PlanInputs) -> Result<()> {
        save_settings(&self.path, inputs)
    }
}

/// In-memory store, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    saved: RefCell<Option<PlanInputs>>,
    saves: RefCell<usize>,
}

impl MemorySettingsStore {
    pub fn with(inputs: PlanInputs) -> Self {
        Self {
            saved: RefCell::new(Some(inputs)),
            saves: RefCell::new(0),
        }
    }

    pub fn saved(&self) -> Option<PlanInputs> {
        self.saved.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<PlanInputs>> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, inputs: &PlanInputs) -> Result<()> {
        *self.saved.borrow_mut() = Some(inputs.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
    fn load(&self) -> Result<Option<PlanInputs>> {
        (**self).load()
    }

    fn save(&self, inputs: &PlanInputs) -> Result<()> {
        (**self).save(inputs)
    }
}
