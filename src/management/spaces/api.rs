//! Space API operations

use log::debug;

use crate::config::api;
use crate::error::{CliError, Result};
use crate::management::ManagementClient;

use super::models::{SpaceEntry, SpaceList};

impl ManagementClient {
    /// List the spaces visible to the given user.
    ///
    /// One synchronous call, no retry; entries come back in the order the
    /// control plane returns them. Failures wrap the underlying transport
    /// or API error with "list spaces" context.
    pub async fn list_spaces(&self, user: &str) -> Result<Vec<SpaceEntry>> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::USERS,
            urlencoding::encode(user),
            api::SPACES
        );

        debug!("Listing spaces for user '{}' from: {}", user, url);

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| CliError::query("list spaces", e))?;

        let error_context = format!("spaces for user '{}'", user);
        let list: SpaceList = self
            .parse_api_response(response, &error_context)
            .await
            .map_err(|e| CliError::query("list spaces", e))?;

        debug!("Fetched {} spaces for user '{}'", list.spaces.len(), user);
        Ok(list.spaces)
    }
}
