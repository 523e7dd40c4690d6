//! Built-in demo catalog used by `--sample` and by tests.

use crate::products::Product;

fn product(
    id: u64,
    name: &str,
    sku: &str,
    price: u64,
    stock: u32,
    category: &str,
    color: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        sku: sku.to_string(),
        price,
        stock,
        category: Some(category.to_string()),
        color: Some(color.to_string()),
    }
}

#[must_use]
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, "Camiseta Oversize Premium", "CAM-001", 29_990, 145, "Camisetas", "#2d2d2d"),
        product(2, "Hoodie Essential Black", "HOO-002", 49_990, 89, "Hoodies", "#1a1a2e"),
        product(3, "Jogger Slim Fit", "JOG-003", 39_990, 210, "Pantalones", "#16213e"),
        product(4, "Gorra Snapback Logo", "GOR-004", 19_990, 320, "Accesorios", "#0f3460"),
        product(5, "Polera Manga Larga", "POL-005", 34_990, 67, "Camisetas", "#533483"),
        product(6, "Short Deportivo", "SHO-006", 24_990, 178, "Pantalones", "#e94560"),
        product(7, "Calcetines Pack x3", "CAL-007", 12_990, 450, "Accesorios", "#0a1128"),
        product(8, "Chaleco Puffer", "CHA-008", 69_990, 34, "Outerwear", "#1a1a2e"),
    ]
}
