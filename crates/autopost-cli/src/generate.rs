//! `generate` command: one batch through the engine, printed or as JSON.

use std::fmt::Write as _;

use autopost_core::{format_price, AppConfig, ThemePreset, Tone};
use autopost_engine::{PostBatch, PostStatus, Session};

use crate::source::{build_provider, load_brand};
use crate::GenerateArgs;

pub(crate) async fn run_generate(mut config: AppConfig, args: &GenerateArgs) -> anyhow::Result<()> {
    if let Some(delay_ms) = args.delay_ms {
        config.generation_delay_ms = delay_ms;
    }

    let provider = build_provider(&config, &args.source)?;
    let brand = load_brand(&config)?;
    let mut session = Session::from_app_config(&config, brand, provider);

    if let Some(theme) = &args.theme {
        session.apply_theme(theme.parse::<ThemePreset>()?);
    }
    if let Some(tone) = &args.tone {
        session.set_tone(tone.parse::<Tone>()?);
    }
    if let Some(name) = &args.brand_name {
        session.set_brand_name(name.as_str());
    }
    session.select_strategy(&args.strategy);
    session.select_caption_style(&args.style);
    session.select_template(&args.template);
    if let Some(count) = args.count {
        session.set_batch_size(count)?;
    }

    if !args.json {
        eprintln!(
            "generating {} posts ({} / {})...",
            session.batch_size(),
            session.strategy().label(),
            session.caption_style()
        );
    }

    let batch = session.generate().await?;

    if args.json {
        let out = serde_json::json!({
            "batch": &*batch,
            "render": batch.render_payloads(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", format_batch(&batch));
    }
    Ok(())
}

fn status_label(status: PostStatus) -> &'static str {
    match status {
        PostStatus::Draft => "borrador",
        PostStatus::Scheduled => "programado",
    }
}

/// Plain-text rendering of a batch: one header row per post followed by its
/// caption, indented.
pub(crate) fn format_batch(batch: &PostBatch) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "batch {}  template {} ({})  strategy {}  style {}",
        batch.id, batch.template.id, batch.template.layout, batch.strategy, batch.style
    );

    if batch.is_empty() {
        out.push_str("no products in catalog; nothing to post\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<4}{:<28}{:<10}{:<9}{:<7}{:<12}{:<7}STATUS",
        "#", "PRODUCT", "SKU", "PRICE", "STOCK", "DATE", "SLOT"
    );
    for (i, post) in batch.posts.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4}{:<28}{:<10}{:<9}{:<7}{:<12}{:<7}{}",
            i + 1,
            post.product.name,
            post.product.sku,
            format_price(post.product.price),
            post.product.stock,
            post.display_date(),
            post.time_slot,
            status_label(post.status)
        );
        for line in post.caption.lines() {
            let _ = writeln!(out, "    {line}");
        }
        out.push('\n');
    }
    out
}
