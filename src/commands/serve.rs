// Serve command - run the API server

use anyhow::Result;

use crate::cli::ServeArgs;
use crate::config::Config;
use crate::server;
use crate::utils::{print_success, OutputStyle};
use crate::Hub;

pub async fn handle_serve_command(mut config: Config, args: &ServeArgs) -> Result<()> {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    let hub = Hub::open(&config)?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    OutputStyle::print_header("GCG Document Hub");
    OutputStyle::print_field("Data dir", &config.storage.data_dir.display().to_string());
    OutputStyle::print_field("API", &format!("http://{}/api/divisi", addr));
    print_success(&format!("Server running on http://{}", addr));

    server::serve(hub.router(), &addr).await
}
