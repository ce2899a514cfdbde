//! Catalog file loading against the cart engine.

use std::io::Write;

use tempfile::NamedTempFile;

use trellis_catalog::{Catalog, CatalogError};
use trellis_core::CartStore;
use trellis_types::{CartInstruction, ProductId};

fn write_catalog(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{contents}").expect("write catalog");
    file
}

#[test]
fn loaded_catalog_feeds_the_cart() {
    let file = write_catalog(
        r#"
[[section]]
category = "Ferns"

[[section.products]]
id = 21
name = "Boston Fern"
price = 45.5
"#,
    );
    let catalog = Catalog::load(file.path()).unwrap();
    let fern = catalog.get(ProductId::new(21)).unwrap();

    let mut store = CartStore::new();
    let _ = store.apply(&CartInstruction::AddItem(fern.draft()));
    let _ = store.apply(&CartInstruction::Increment {
        id: ProductId::new(21),
    });

    assert!((store.total() - 91.0).abs() < 1e-9);
    let item = store.state().get(ProductId::new(21)).cloned().unwrap();
    assert_eq!(item.display_name(), "Boston Fern");
}

#[test]
fn duplicate_ids_across_sections_fail_loading() {
    let file = write_catalog(
        r#"
[[section]]
category = "A"

[[section.products]]
id = 1
name = "One"
price = 10.0

[[section]]
category = "B"

[[section.products]]
id = 1
name = "One Again"
price = 12.0
"#,
    );
    assert!(matches!(
        Catalog::load(file.path()),
        Err(CatalogError::DuplicateId(id)) if id == ProductId::new(1)
    ));
}

#[test]
fn negative_catalog_price_fails_loading() {
    let file = write_catalog(
        r#"
[[section]]
category = "A"

[[section.products]]
id = 1
name = "One"
price = -1.0
"#,
    );
    assert!(matches!(
        Catalog::load(file.path()),
        Err(CatalogError::InvalidPrice { .. })
    ));
}
