//! Server-side injection with a fail-open guard.
//!
//! Mirrors what framework middleware does with an outgoing `text/html`
//! response: fetch suggestions for the page, merge them in, and serve
//! the original document untouched if the fetch fails for any reason.
//!
//! ```sh
//! cargo run --example ssr_injection [page-url]
//! ```

use seojuice::{Config, SeoInjector, SmartClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("seojuice=debug")),
        )
        .init();

    let page_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com/".to_string());

    // The HTML a server would be about to send.
    let original = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
</head>
<body>
<h1>Welcome</h1>
<img src="/logo.png">
</body>
</html>"#;

    let smart = SmartClient::new(Config::new());
    let injector = SeoInjector::new();

    let body = match smart.suggestions(&page_url).await {
        Ok(suggestions) if !suggestions.is_empty() => {
            println!(
                "applying suggestions: {} meta, {} og, {} schema, {} images\n",
                suggestions.meta_tags.len(),
                suggestions.og_tags.len(),
                suggestions.structured_data.len(),
                suggestions.images.len(),
            );
            injector.inject(original, &suggestions)
        }
        Ok(_) => {
            println!("no suggestions for {page_url}, serving as-is\n");
            original.to_string()
        }
        Err(e) => {
            // Fail open: never let the smart service break the response.
            eprintln!("suggestion fetch failed ({}), serving as-is\n", e.error_code());
            original.to_string()
        }
    };

    println!("{body}");
    Ok(())
}
