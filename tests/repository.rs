use chrono::Utc;
use diesel::prelude::*;
use pushkind_catalog::domain::product::{NewProduct, ProductUpdate};
use pushkind_catalog::domain::types::{ImageUrl, ProductId, ProductName, ProductPrice};
use pushkind_catalog::repository::{DieselRepository, ProductReader, ProductWriter};
use pushkind_catalog::schema::products;

mod common;

fn new_product(name: &str, price: f64) -> NewProduct {
    let now = Utc::now().naive_utc();
    NewProduct {
        name: ProductName::new(name).expect("valid name"),
        price: ProductPrice::new(price).expect("valid price"),
        image: ImageUrl::new("https://example.com/image.png").expect("valid image"),
        created_at: now,
        updated_at: now,
    }
}

fn id(value: i32) -> ProductId {
    ProductId::new(value).expect("valid product id")
}

#[test]
fn create_assigns_sequential_ids_and_lists_in_order() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let pen = repo.create_product(&new_product("Pen", 10.0)).expect("should create pen");
    let book = repo.create_product(&new_product("Book", 300.0)).expect("should create book");

    assert_eq!(pen.id, 1);
    assert_eq!(book.id, 2);

    let listed = repo.list_products().expect("should list products");
    assert_eq!(listed, vec![pen.clone(), book]);
    assert_eq!(repo.count_products().expect("should count"), 2);

    let fetched = repo
        .get_product_by_id(pen.id)
        .expect("should query product")
        .expect("product should exist");
    assert_eq!(fetched, pen);
}

#[test]
fn next_id_is_one_past_current_maximum() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_product(&new_product("Pen", 10.0)).expect("create");
    let second = repo.create_product(&new_product("Book", 20.0)).expect("create");
    repo.delete_product(second.id).expect("delete");

    let third = repo.create_product(&new_product("Mouse", 30.0)).expect("create");
    assert_eq!(third.id, 2);

    assert_eq!(repo.delete_all_products().expect("delete all"), 2);
    let fresh = repo.create_product(&new_product("Bag", 40.0)).expect("create");
    assert_eq!(fresh.id, 1);
}

#[test]
fn update_changes_only_supplied_fields() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let created = repo.create_product(&new_product("Pen", 10.0)).expect("create");

    let later = created.updated_at + chrono::Duration::seconds(5);
    let update = ProductUpdate {
        name: None,
        price: Some(ProductPrice::new(12.5).expect("valid price")),
        image: None,
        updated_at: later,
    };
    let updated = repo
        .update_product(created.id, &update)
        .expect("should update")
        .expect("product should exist");

    assert_eq!(updated.name, created.name);
    assert_eq!(updated.image, created.image);
    assert_eq!(updated.price, 12.5);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.updated_at, later);
}

#[test]
fn update_and_delete_report_missing_rows() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let update = ProductUpdate {
        name: Some(ProductName::new("Ghost").expect("valid name")),
        price: None,
        image: None,
        updated_at: Utc::now().naive_utc(),
    };
    assert!(repo.update_product(id(9999), &update).expect("query").is_none());
    assert!(repo.delete_product(id(9999)).expect("query").is_none());
    assert!(repo.get_product_by_id(id(9999)).expect("query").is_none());
    assert!(repo.list_products().expect("query").is_empty());
}

#[test]
fn delete_returns_snapshot_and_removes_row() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let created = repo.create_product(&new_product("Pen", 10.0)).expect("create");

    let deleted = repo
        .delete_product(created.id)
        .expect("should delete")
        .expect("product should exist");

    assert_eq!(deleted, created);
    assert!(repo.get_product_by_id(created.id).expect("query").is_none());
}

#[test]
fn database_rejects_non_positive_prices() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    let result = diesel::insert_into(products::table)
        .values((
            products::id.eq(1),
            products::name.eq("Pen"),
            products::price.eq(0.0_f64),
            products::image.eq("https://example.com/pen.png"),
        ))
        .execute(&mut conn);

    assert!(result.is_err());
}

#[test]
fn concurrent_creates_get_unique_sequential_ids() {
    const WRITERS: i32 = 8;
    const PER_WRITER: i32 = 10;

    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let handles = (0..WRITERS)
        .map(|writer| {
            let repo = repo.clone();
            std::thread::spawn(move || {
                (0..PER_WRITER)
                    .map(|n| {
                        repo.create_product(&new_product(&format!("Item {writer}-{n}"), 1.0))
                            .map(|p| p.id.get())
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect::<Vec<_>>();

    let mut ids = Vec::new();
    for handle in handles {
        for result in handle.join().expect("writer thread panicked") {
            ids.push(result.expect("concurrent create should succeed"));
        }
    }
    ids.sort_unstable();

    assert_eq!(ids, (1..=WRITERS * PER_WRITER).collect::<Vec<_>>());
    assert_eq!(
        repo.count_products().expect("should count"),
        (WRITERS * PER_WRITER) as usize
    );
}

#[test]
fn create_fails_cleanly_when_id_space_is_exhausted() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    diesel::insert_into(products::table)
        .values((
            products::id.eq(i32::MAX),
            products::name.eq("Last"),
            products::price.eq(1.0_f64),
            products::image.eq("https://example.com/last.png"),
        ))
        .execute(&mut conn)
        .expect("should insert row with maximal id");

    assert!(repo.create_product(&new_product("Pen", 10.0)).is_err());

    let listed = repo.list_products().expect("should list products");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, i32::MAX);
}
