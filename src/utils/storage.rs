use web_sys::{window, Storage};

use crate::error::{HelpdeskError, Result};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn read_item(storage: &Storage, key: &str) -> Option<String> {
    storage.get_item(key).ok()?
}

pub fn write_item(storage: &Storage, key: &str, value: &str) -> Result<()> {
    storage
        .set_item(key, value)
        .map_err(|_| HelpdeskError::Storage(format!("Error guardando '{}' en localStorage", key)))
}

pub fn delete_item(storage: &Storage, key: &str) -> Result<()> {
    storage
        .remove_item(key)
        .map_err(|_| HelpdeskError::Storage(format!("Error eliminando '{}' de localStorage", key)))
}
