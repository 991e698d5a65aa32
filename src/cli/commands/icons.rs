//! One-shot icon resolution command.

use std::time::Duration;

use console::style;

use crate::config::Settings;
use crate::favicon::IconResolver;

/// Resolve icon candidates for a URL and print them.
pub async fn cmd_icons(settings: &Settings, url: &str) -> anyhow::Result<()> {
    let resolver = IconResolver::with_options(
        &settings.user_agent,
        Duration::from_secs(settings.request_timeout),
    );

    let icons = resolver.card_icons(url).await?;

    if icons.is_empty() {
        println!("{} No usable icon found for {}", style("✗").red(), url);
        return Ok(());
    }

    for icon in &icons {
        println!("{} {}", style("✓").green(), icon);
    }
    Ok(())
}
