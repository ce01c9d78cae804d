use std::io::Write;

use logsh_config::ConfigStore;

use super::OutputMode;

pub fn add(store: &mut ConfigStore, server: &str) -> super::Result<()> {
    let mut config = store.current().clone();
    if !config.upsert(server) {
        println!("Connection to {server} already configured.");
        return Ok(());
    }

    log::info!("saving new connection to {server}");
    if super::save_or_warn(store, &config) {
        println!("Added connection to {server}.");
    }
    Ok(())
}

pub fn remove(store: &mut ConfigStore, server: &str) -> super::Result<()> {
    let mut config = store.current().clone();
    if !config.remove(server) {
        println!("No connection to {server} is configured.");
        return Ok(());
    }

    log::info!("removing connection to {server}");
    if super::save_or_warn(store, &config) {
        println!("Removed connection to {server}.");
    }
    Ok(())
}

pub fn list<W: Write>(
    store: &mut ConfigStore,
    mode: Option<OutputMode>,
    mut write: W,
) -> super::Result<()> {
    let connections = &store.current().connections;
    match mode.unwrap_or_default() {
        OutputMode::Plain => {
            if connections.is_empty() {
                writeln!(write, "No servers configured.")?;
            } else {
                for connection in connections {
                    writeln!(write, "{}", connection.endpoint)?;
                }
            }
        }
        OutputMode::Json => {
            let json = serde_json::to_string(connections)?;
            writeln!(write, "{json}")?;
        }
    }
    Ok(())
}
