use super::{AuthError, ConnectionCredential};
use crate::{config::keys, storage::KeyValueStore};

/// What a previous visit left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedConnection {
    pub project_url: Option<String>,
    pub has_api_key: bool,
}

/// Reads the durable URL for pre-filling. The credential is only probed,
/// session tier first, and never returned.
pub fn restore_saved(
    durable: &dyn KeyValueStore,
    session: &dyn KeyValueStore,
) -> Result<SavedConnection, AuthError> {
    let project_url = durable
        .get(keys::PROJECT_URL)?
        .filter(|url| !url.is_empty());
    let has_api_key = match session.get(keys::SESSION_API_KEY)? {
        Some(key) if !key.is_empty() => true,
        _ => durable
            .get(keys::DURABLE_API_KEY)?
            .is_some_and(|key| !key.is_empty()),
    };

    Ok(SavedConnection {
        project_url,
        has_api_key,
    })
}

/// Writes the credential to the chosen tier.
///
/// Opting out of local saving also clears the durable entries. Opting in
/// leaves any session entries alone. Operations run in order and stop at the
/// first failure without undoing earlier writes.
pub fn persist(
    credential: &ConnectionCredential,
    save_locally: bool,
    durable: &dyn KeyValueStore,
    session: &dyn KeyValueStore,
) -> Result<(), AuthError> {
    if save_locally {
        durable.set(keys::PROJECT_URL, &credential.project_url)?;
        durable.set(keys::DURABLE_API_KEY, &credential.api_key)?;
    } else {
        session.set(keys::PROJECT_URL, &credential.project_url)?;
        session.set(keys::SESSION_API_KEY, &credential.api_key)?;
        durable.remove(keys::PROJECT_URL)?;
        durable.remove(keys::DURABLE_API_KEY)?;
    }
    Ok(())
}
