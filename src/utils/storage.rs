use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Lee una clave de localStorage como string plano.
pub fn read_key(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn write_key(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn remove_key(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}
