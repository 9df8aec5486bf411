use askgate_llm::ModelHandle;
use askgate_server::{shutdown_signal, Server, ServerConfig};
use colored::Colorize;

pub async fn run(
    model: ModelHandle,
    host: &str,
    port: u16,
    cors_origins: Vec<String>,
    max_body_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let mut config = ServerConfig::new().with_host(host).with_port(port);
    for origin in cors_origins {
        config = config.with_cors_origin(origin);
    }
    if let Some(limit) = max_body_bytes {
        config = config.with_max_body_bytes(limit);
    }

    println!("{}", "Starting askgate server...".green().bold());
    println!("Listening on {}:{}", host.cyan(), port.to_string().cyan());
    if !model.is_available() {
        println!(
            "{} model unavailable, /ask will fail until restarted",
            "Warning:".yellow().bold()
        );
    }
    println!("Press {} to stop\n", "Ctrl+C".yellow());

    let server = Server::new(config, model);
    server
        .run_with_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    println!("\n{}", "Server stopped.".green());
    Ok(())
}
