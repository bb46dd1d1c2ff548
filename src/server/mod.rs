//! Local preview server

use anyhow::Result;
use axum::Router;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::Blog;

/// Serve the public directory, regenerating when content changes
pub async fn start(blog: &Blog, ip: &str, port: u16, watch: bool) -> Result<()> {
    let app = Router::new()
        .fallback_service(ServeDir::new(&blog.public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    if watch {
        let blog = blog.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_regenerate(&blog) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Block on debounced file events and regenerate the site
fn watch_and_regenerate(blog: &Blog) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    let watched: Vec<PathBuf> = vec![
        blog.content_dir.clone(),
        blog.messages_dir.clone(),
        blog.config_path(),
    ];
    for path in watched.iter().filter(|p| p.exists()) {
        debouncer
            .watcher()
            .watch(path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", path);
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events.iter().any(|e| {
                    let path_str = e.path.to_string_lossy();
                    !path_str.ends_with('~') && !path_str.contains(".DS_Store")
                });
                if !relevant {
                    continue;
                }

                tracing::info!("Content changed, regenerating...");
                match blog.generate() {
                    Ok(_) => tracing::info!("Regenerated successfully"),
                    Err(e) => tracing::error!("Generation failed: {}", e),
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}
