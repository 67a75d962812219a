use std::process::ExitCode;

use masterlist::config::get_config;
use masterlist::fetch::{fetch_masterlist, save_cache};
use masterlist::output::{to_pretty_json, write_json};
use masterlist::{find_server, parse_masterlist};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    tracing::info!("Optional usage: masterlist-fetch <ip> <port>");

    let args: Vec<String> = std::env::args().collect();
    let lookup = match args.as_slice() {
        [_, ip, port] => match port.parse::<u16>() {
            Ok(port) => Some((ip.clone(), port)),
            Err(err) => {
                tracing::error!("{port} is not a valid port: {err}");
                return ExitCode::FAILURE;
            }
        },
        _ => None,
    };

    let config = get_config().masterlist;

    let list = match fetch_masterlist(&config).await {
        Ok(list) => list,
        Err(err) => {
            tracing::error!("{err}. Exiting...");
            return ExitCode::FAILURE;
        }
    };

    let servers = parse_masterlist(&list.data);

    if let Err(err) = save_cache(&config, &list) {
        tracing::warn!("{err}");
    }

    tracing::info!("Found {} servers in the masterlist", servers.len());

    if let Err(err) = write_json(&config.json_path, &servers) {
        tracing::warn!("{err}");
    }

    let Some((ip, port)) = lookup else {
        return ExitCode::SUCCESS;
    };

    tracing::info!("Searching {ip}:{port} in the list...");

    let Some(server) = find_server(&servers, &ip, port) else {
        tracing::info!("Not found");
        return ExitCode::FAILURE;
    };

    match to_pretty_json(server) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::warn!("{err}"),
    }

    ExitCode::SUCCESS
}
