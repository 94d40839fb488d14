use toggl_api::registry::names;
use toggl_api::Client;

use super::Result;

pub fn ping(client: &Client) -> Result<String> {
    client.get_request(names::WORKSPACES)?;
    Ok("Token accepted!".to_owned())
}

pub fn workspaces(client: &Client) -> Result<String> {
    let lines: Vec<String> = client
        .workspaces()?
        .into_iter()
        .map(|ws| {
            let role = if ws.admin { " (admin)" } else { "" };
            format!("{:>10}  {}{role}", ws.id, ws.name)
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn clients(client: &Client) -> Result<String> {
    let clients = client.clients()?;
    if clients.is_empty() {
        return Ok("No clients".to_owned());
    }
    let lines: Vec<String> = clients
        .into_iter()
        .map(|c| format!("{:>10}  {} [workspace {}]", c.id, c.name, c.workspace_id))
        .collect();
    Ok(lines.join("\n"))
}
