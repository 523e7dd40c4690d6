//! Read-only commands: `catalog`, `templates` and `brand`.

use std::fmt::Write as _;

use autopost_core::{
    format_price, format_stock, preview_product, AppConfig, BrandProfile, CatalogSummary,
    Product, SelectionStrategy, ThemePreset, Tone, POST_TEMPLATES,
};
use autopost_engine::rank;

use crate::source::{build_provider, load_brand};
use crate::SourceArgs;

pub(crate) async fn run_catalog(
    config: &AppConfig,
    source: &SourceArgs,
    strategy: &str,
    json: bool,
) -> anyhow::Result<()> {
    let provider = build_provider(config, source)?;
    let products = provider.list_products().await?;
    let strategy = SelectionStrategy::from_id_or_default(strategy);
    let ranked = rank(&products, strategy);

    if json {
        let out = serde_json::json!({
            "source": provider.name(),
            "strategy": strategy,
            "summary": CatalogSummary::from_products(&ranked),
            "products": ranked,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", format_catalog(&ranked, strategy));
    }
    Ok(())
}

pub(crate) fn format_catalog(ranked: &[Product], strategy: SelectionStrategy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "strategy: {} ({})", strategy.label(), strategy);

    if ranked.is_empty() {
        out.push_str("catalog is empty\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<4}{:<28}{:<10}{:<9}{:<7}LEVEL",
        "#", "PRODUCT", "SKU", "PRICE", "STOCK"
    );
    for (i, p) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4}{:<28}{:<10}{:<9}{:<7}{}",
            i + 1,
            p.name,
            p.sku,
            format_price(p.price),
            format_stock(p.stock),
            p.stock_level().label()
        );
    }

    let summary = CatalogSummary::from_products(ranked);
    let _ = writeln!(
        out,
        "\n{} products · {} units · max stock {}",
        summary.product_count,
        format_stock(u32::try_from(summary.total_units).unwrap_or(u32::MAX)),
        summary.max_stock
    );
    if let Some(preview) = preview_product(ranked) {
        let _ = writeln!(out, "preview: {}", preview.name);
    }
    out
}

pub(crate) fn run_templates() {
    println!("{:<18}{:<18}LAYOUT", "ID", "NAME");
    for template in &POST_TEMPLATES {
        println!("{:<18}{:<18}{}", template.id, template.name, template.layout);
    }
}

pub(crate) fn run_brand(config: &AppConfig, theme: Option<&str>) -> anyhow::Result<()> {
    let brand = match theme {
        Some(theme) => theme.parse::<ThemePreset>()?.profile(),
        None => load_brand(config)?,
    };
    print!("{}", format_brand(&brand));
    Ok(())
}

pub(crate) fn format_brand(brand: &BrandProfile) -> String {
    let tones: Vec<&str> = Tone::ALL.iter().map(|t| t.label()).collect();
    let mut out = String::new();
    let _ = writeln!(out, "brand:      {}", brand.brand_name);
    let _ = writeln!(out, "tagline:    {}", brand.tagline);
    let _ = writeln!(
        out,
        "colors:     {} {} {} {}",
        brand.primary_color, brand.secondary_color, brand.accent_color, brand.background_color
    );
    let _ = writeln!(out, "fonts:      {} / {}", brand.font_primary, brand.font_secondary);
    let _ = writeln!(out, "tone:       {} (one of {})", brand.tone, tones.join(", "));
    out
}
