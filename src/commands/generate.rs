//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::Generator;
use crate::Blog;

/// Generate the static site.
///
/// Content is discovered fresh on every run; there is no cache to invalidate.
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let discovery = blog.store().discover()?;
    tracing::info!(
        "Loaded {} posts from {:?}",
        discovery.records.len(),
        blog.content_dir
    );
    for skipped in &discovery.skipped {
        tracing::warn!("Skipped {:?}: {}", skipped.path, skipped.error);
    }

    let generator = Generator::new(blog)?;
    generator.generate(&discovery.records)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch the content directory and config file, regenerating on change
pub async fn watch(blog: &Blog) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    if blog.content_dir.exists() {
        watcher.watch(&blog.content_dir, notify::RecursiveMode::NonRecursive)?;
    } else {
        tracing::warn!("Content directory {:?} does not exist yet", blog.content_dir);
    }

    let config_path = blog.config_path();
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    if blog.messages_dir.exists() {
        watcher.watch(&blog.messages_dir, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                // Debounce bursts of events from a single save
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    if let Err(e) = run(blog) {
                        tracing::error!("Generation failed: {}", e);
                    }
                    last_rebuild = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}
