#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;

#[cfg(not(target_arch = "wasm32"))]
use evalboard_dashboard::fixture::PreviewFixture;
#[cfg(not(target_arch = "wasm32"))]
use evalboard_navigation::NavigationConfig;

/// Render the dashboard shell for a JSON fixture and print it.
///
/// Usage: `evalboard-preview <fixture.json>`
#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    evalboard_observability::init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: evalboard-preview <fixture.json>")?;

    let fixture = PreviewFixture::load(&path)
        .with_context(|| format!("failed to load preview fixture {}", path.display()))?;
    let shell = fixture
        .render(NavigationConfig::from_env())
        .await
        .context("failed to render dashboard shell")?;

    tracing::info!(items = shell.sidebar.items.len(), "shell rendered");
    println!(
        "{}",
        serde_json::to_string_pretty(&shell).context("failed to serialize shell")?
    );
    Ok(())
}

// The WASM build only ships the frontend library.
#[cfg(target_arch = "wasm32")]
fn main() {}
