//! The stock nursery catalog.

use trellis_types::ProductId;

use crate::{CatalogProduct, CatalogSection};

fn product(id: u64, name: &str, price: f64, image: &str) -> CatalogProduct {
    CatalogProduct {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        image: Some(image.to_string()),
    }
}

pub(crate) fn sections() -> Vec<CatalogSection> {
    vec![
        CatalogSection {
            category: "Indoor Plants".to_string(),
            products: vec![
                product(1, "Snake Plant", 120.0, "/images/snake.jpg"),
                product(2, "Peace Lily", 150.0, "/images/lily.jpg"),
                product(3, "Aloe Vera", 90.0, "/images/aloe.jpg"),
                product(4, "Spider Plant", 100.0, "/images/spider.jpg"),
                product(5, "Rubber Plant", 200.0, "/images/rubber.jpg"),
                product(6, "ZZ Plant", 180.0, "/images/zz.jpg"),
            ],
        },
        CatalogSection {
            category: "Outdoor Plants".to_string(),
            products: vec![
                product(7, "Rose", 70.0, "/images/rose.jpg"),
                product(8, "Lavender", 90.0, "/images/lavender.jpg"),
                product(9, "Jasmine", 85.0, "/images/jasmine.jpg"),
                product(10, "Hibiscus", 110.0, "/images/hibiscus.jpg"),
                product(11, "Bougainvillea", 95.0, "/images/bougainvillea.jpg"),
                product(12, "Sunflower", 60.0, "/images/sunflower.jpg"),
            ],
        },
    ]
}
