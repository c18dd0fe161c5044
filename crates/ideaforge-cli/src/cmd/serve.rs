use anyhow::Result;
use ideaforge_core::config::Config;

pub fn run(mut config: Config, port: Option<u16>, open: bool) -> Result<()> {
    if let Some(port) = port {
        config.server.port = port;
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener =
            tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.server.port)).await?;
        let url = format!("http://localhost:{}", listener.local_addr()?.port());
        println!("IdeaForge → {url}");

        tokio::select! {
            res = ideaforge_server::serve_on(config, listener, open) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
