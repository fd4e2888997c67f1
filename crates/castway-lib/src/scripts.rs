//! Script listing — join a user's script directory against the name store.

use std::path::Path;

use tracing::warn;

use castway_core::script_files::script_id_from_filename;
use castway_core::types::ScriptEntry;

use crate::error::GatewayError;
use crate::names::NameStore;

/// List the scripts recorded for one user.
///
/// Reads `<data>/<user_id>/scripts/`, recovers script identifiers from the
/// `script_<id>.json` filename convention, and resolves display names from
/// one snapshot of the name store loaded up front — n entries cost one file
/// open. Entries with no recorded name are logged and skipped; filenames
/// outside the convention are skipped silently.
pub async fn list_for_user(
    data_dir: &Path,
    user_id: &str,
    names: &NameStore,
) -> Result<Vec<ScriptEntry>, GatewayError> {
    let dir = data_dir.join(user_id).join("scripts");
    let mut entries = tokio::fs::read_dir(&dir)
        .await
        .map_err(GatewayError::DirectoryRead)?;

    let names = names.load().await?;

    let mut scripts = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(GatewayError::DirectoryRead)?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(GatewayError::DirectoryRead)?;
        if file_type.is_dir() {
            continue;
        }

        let filename = entry.file_name();
        let Some(filename) = filename.to_str() else {
            continue;
        };
        let Some(id) = script_id_from_filename(filename) else {
            continue;
        };

        match names.get(id) {
            Some(name) => scripts.push(ScriptEntry {
                id: id.to_string(),
                name: name.clone(),
            }),
            None => warn!("no name recorded for script '{id}', skipping"),
        }
    }

    Ok(scripts)
}
