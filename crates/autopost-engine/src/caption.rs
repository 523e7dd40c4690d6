//! Caption text for each [`CaptionStyle`].

use autopost_core::{format_price, BrandProfile, CaptionStyle, Product, Tone};

/// Builds the caption for `product` in `style`.
///
/// Reads only the brand name and tone from `brand`. A product without a
/// category renders an empty category hashtag.
#[must_use]
pub fn synthesize(product: &Product, brand: &BrandProfile, style: CaptionStyle) -> String {
    match style {
        CaptionStyle::Engaging => engaging(product, brand),
        CaptionStyle::Minimal => minimal(product),
        CaptionStyle::Storytelling => storytelling(product, brand),
    }
}

fn engaging(product: &Product, brand: &BrandProfile) -> String {
    let hook = if brand.tone == Tone::Casual {
        "No te quedes sin el tuyo"
    } else {
        "Descubre la nueva colección"
    };
    let category = product
        .category
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    format!(
        "🔥 {name} ya disponible!\n\n{hook} ✨\n\n💰 {price}\n📦 Stock limitado — {stock} unidades\n\n🛒 Link en bio\n\n#{brand_tag} #{category} #newdrop #streetwear",
        name = product.name,
        price = format_price(product.price),
        stock = product.stock,
        brand_tag = hashtag(&brand.brand_name, "moda"),
    )
}

fn minimal(product: &Product) -> String {
    format!(
        "{name}\n{price}\n\nDisponible ahora → link en bio",
        name = product.name,
        price = format_price(product.price),
    )
}

fn storytelling(product: &Product, brand: &BrandProfile) -> String {
    format!(
        "Hay prendas que hablan por sí solas. {name} es una de ellas.\n\nDiseñada para quienes buscan algo más que moda — buscan identidad.\n\n{price} · {stock} unidades\n\n#{brand_tag}",
        name = product.name,
        price = format_price(product.price),
        stock = product.stock,
        brand_tag = hashtag(&brand.brand_name, "estilo"),
    )
}

/// Strips whitespace so the brand name works as a hashtag.
fn hashtag(text: &str, fallback: &str) -> String {
    let tag: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if tag.is_empty() {
        fallback.to_string()
    } else {
        tag
    }
}
