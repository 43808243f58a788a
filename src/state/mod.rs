mod manager;
mod persistence;

pub use manager::PlanSession;
pub use persistence::{
    load_settings, save_settings, JsonSettingsStore, MemorySettingsStore, SettingsStore,
};
