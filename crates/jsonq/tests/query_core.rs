//! End-to-end use of the core the way a query builder drives it:
//! navigate to a collection, then order it.

use jsonq::{find, get_mut, sort_list, split_path, SortOrder, Sorter, DEFAULT_SEPARATOR};
use serde_json::{json, Value};

fn fixture() -> Value {
    json!({
        "name": "computers",
        "vendor": {
            "items": [
                {"id": 1, "name": "MacBook Pro 13 inch retina", "price": 1350},
                {"id": 2, "name": "MacBook Pro 15 inch retina", "price": 1700},
                {"id": 3, "name": "Sony VAIO", "price": 1200},
                {"id": 4, "name": "Fujitsu", "price": 850},
                {"id": 5, "name": "HP core i5", "price": 850},
                {"id": 6, "name": "HP core i7", "price": 950}
            ],
            "prices": [2400, 2100, 1200, 400.87, 89.90, 150.10]
        }
    })
}

fn ids(items: &Value) -> Vec<u64> {
    items
        .as_array()
        .map(|arr| arr.iter().filter_map(|i| i["id"].as_u64()).collect())
        .unwrap_or_default()
}

#[test]
fn test_sort_items_by_price_descending() {
    let mut doc = fixture();
    let nodes = split_path("vendor.items", DEFAULT_SEPARATOR);
    let items = get_mut(&mut doc, &nodes).expect("items exist");
    Sorter::descending("price").sort_value(items);
    // Equal prices (4 and 5) keep their input order
    assert_eq!(ids(items), vec![2, 1, 3, 6, 4, 5]);
}

#[test]
fn test_sort_items_by_name() {
    let mut doc = fixture();
    let items = get_mut(&mut doc, &["vendor", "items"]).expect("items exist");
    Sorter::ascending("name").sort_value(items);
    assert_eq!(ids(items), vec![4, 5, 6, 1, 2, 3]);
}

#[test]
fn test_sort_prices_list() {
    let doc = fixture();
    let prices = find(&doc, "vendor.prices", DEFAULT_SEPARATOR)
        .ok()
        .and_then(Value::as_array)
        .expect("prices exist");
    assert_eq!(
        sort_list(prices, true),
        vec![json!(89.90), json!(150.10), json!(400.87), json!(1200), json!(2100), json!(2400)]
    );
}

#[test]
fn test_index_then_field() {
    let doc = fixture();
    assert_eq!(
        find(&doc, "vendor.items.[3].name", DEFAULT_SEPARATOR),
        Ok(&json!("Fujitsu"))
    );
}

#[test]
fn test_sorter_from_toml_config() {
    #[derive(serde::Deserialize)]
    struct Query {
        sort: Sorter,
    }

    let query: Query = toml::from_str(
        r#"
        [sort]
        key = "price"
        order = "desc"
        "#,
    )
    .expect("valid config");
    assert_eq!(query.sort.key(), "price");
    assert_eq!(query.sort.order(), SortOrder::Descending);
}

#[test]
fn test_sorting_a_non_collection_is_noop() {
    let mut doc = fixture();
    let name = get_mut(&mut doc, &["name"]).expect("name exists");
    Sorter::ascending("price").sort_value(name);
    assert_eq!(doc["name"], json!("computers"));
}
