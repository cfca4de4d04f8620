//! Space command handlers

use chrono::Utc;
use log::debug;

use crate::cli::{Cli, SpacesArgs};
use crate::error::Result;
use crate::management::{ClientConfig, ManagementClient};
use crate::output::{output_spaces, SpaceRow};
use crate::ui::{create_spinner, finish_spinner};

/// Run the 'list spaces' command: resolve the stored credential into an
/// authenticated client, query the management API once, and render the
/// result as a table.
pub async fn run_list_spaces_command(cli: &Cli, args: &SpacesArgs) -> Result<()> {
    let config = ClientConfig::load(cli.config.as_deref())?;
    let auth_info = config.auth_info()?;
    let client = ManagementClient::new(&config)?;

    debug!("Fetching spaces for user '{}'", auth_info.name);

    let spinner = create_spinner("Fetching spaces...", cli.batch);
    let result = client.list_spaces(&auth_info.name).await;
    finish_spinner(spinner);
    let spaces = result?;

    // One reference instant for every row in this output
    let now = Utc::now();
    let rows: Vec<SpaceRow> = spaces.iter().map(|s| SpaceRow::new(s, now)).collect();

    output_spaces(&rows, &args.output, cli.no_header);
    Ok(())
}
