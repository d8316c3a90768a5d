//! Walk the analytics API for one domain.
//!
//! ```sh
//! SEOJUICE_API_KEY=sk-... cargo run --example intelligence_api example.com
//! ```

use seojuice::data::Period;
use seojuice::SeoJuice;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let Ok(api_key) = std::env::var("SEOJUICE_API_KEY") else {
        eprintln!("set SEOJUICE_API_KEY to run this example");
        return Ok(());
    };
    let domain = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "example.com".to_string());

    let client = SeoJuice::new(api_key);

    let summary = client
        .intelligence(domain.as_str())
        .summary(Period::ThirtyDays, true, false)
        .await?;
    println!(
        "{}: seo {:.1}, aiso {:.1}, {} pages in {} clusters, {} orphans",
        summary.domain,
        summary.seo_score,
        summary.aiso_score,
        summary.total_pages,
        summary.total_clusters,
        summary.orphan_pages,
    );

    let pages = client.pages(domain.as_str()).list(1, 5).await?;
    println!(
        "\ntop pages (page 1 of {}):",
        pages.pagination.total_pages
    );
    for page in &pages.results {
        println!(
            "  {:5.1}  {}",
            page.seo_score.unwrap_or_default(),
            page.url
        );
    }

    let gaps = client
        .content(domain.as_str())
        .list_gaps(None, None, 1, 5)
        .await?;
    println!("\ncontent gaps:");
    for gap in &gaps.results {
        println!(
            "  {} ({}, volume {})",
            gap.page_name, gap.intent, gap.total_search_volume
        );
    }

    Ok(())
}
