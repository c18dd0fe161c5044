pub mod generate;
pub mod models;
pub mod projects;
pub mod serve;
pub mod uml;

use ideaforge_core::config::Config;
use ideaforge_server::AppState;

/// Run one async command against freshly built state.
pub(crate) fn block_on<F, Fut, T>(config: Config, f: F) -> anyhow::Result<T>
where
    F: FnOnce(AppState) -> Fut,
    Fut: std::future::Future<Output = anyhow::Result<T>>,
{
    let state = AppState::new(config)?;
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(f(state))
}
