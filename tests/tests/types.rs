use crumpet::{get_all, select, update_all};
use pretty_assertions::assert_eq;
use tests::{assert_none, models, models::Item, tests, DbTest};

fn every_field_round_trips(test: &mut DbTest) {
    let db = test.setup_db(models!(Item));

    let mut item = Item::new("Widget", 9.75, Some(12));
    item.active = false;
    item.payload = vec![0, 159, 146, 150, 255];
    item.rank = -7;

    let id = db.insert(&item).unwrap();
    item.id = id;

    assert_eq!(db.get::<Item>(id).unwrap(), item);

    let empty = Item {
        payload: vec![],
        ..Item::new("Nothing", 0.0, None)
    };
    let id = db.insert(&empty).unwrap();
    let loaded = db.get::<Item>(id).unwrap();
    assert_none!(loaded.stock);
    assert!(loaded.payload.is_empty());
    assert_eq!(loaded.code, empty.code);
}

fn null_filters(test: &mut DbTest) {
    let db = test.setup_db(models!(Item));
    db.insert_range(&[
        Item::new("Apple", 1.5, Some(3)),
        Item::new("Fig", 4.0, None),
        Item::new("Pear", 3.0, Some(0)),
    ])
    .unwrap();

    let untracked = db
        .execute(select(Item::LABEL).filter(Item::STOCK.is_null()))
        .unwrap();
    assert_eq!(untracked, ["Fig"]);

    let tracked = db
        .execute(
            select(Item::LABEL)
                .filter(Item::STOCK.is_not_null())
                .order_by(Item::LABEL.asc()),
        )
        .unwrap();
    assert_eq!(tracked, ["Apple", "Pear"]);

    // Comparisons with NULL match nothing.
    let in_stock = db
        .execute(select(Item::LABEL).filter(Item::STOCK.gt(0)))
        .unwrap();
    assert_eq!(in_stock, ["Apple"]);

    let stocks = db
        .execute(select((Item::LABEL, Item::STOCK)).order_by(Item::ID.asc()))
        .unwrap();
    assert_eq!(
        stocks,
        [
            ("Apple".to_string(), Some(3)),
            ("Fig".to_string(), None),
            ("Pear".to_string(), Some(0)),
        ]
    );

    // Clearing a nullable column.
    let changed = db
        .execute(
            update_all::<Item>()
                .set(Item::STOCK, None)
                .filter(Item::LABEL.eq("Pear")),
        )
        .unwrap();
    assert_eq!(changed, 1);
    assert_eq!(
        db.execute(select(Item::STOCK).filter(Item::LABEL.eq("Pear")).one())
            .unwrap(),
        None
    );
}

fn filter_on_typed_columns(test: &mut DbTest) {
    let db = test.setup_db(models!(Item));

    let mut apple = Item::new("Apple", 1.5, Some(3));
    apple.rank = 2;
    let mut fig = Item::new("Fig", 4.0, None);
    fig.active = false;
    fig.rank = 1;
    db.insert_range(&[apple.clone(), fig.clone()]).unwrap();

    let by_code = db
        .execute(get_all::<Item>().filter(Item::CODE.eq(fig.code)))
        .unwrap();
    assert_eq!(by_code.len(), 1);
    assert_eq!(by_code[0].label, "Fig");

    let inactive = db
        .execute(select(Item::LABEL).filter(Item::ACTIVE.eq(false)))
        .unwrap();
    assert_eq!(inactive, ["Fig"]);

    let by_payload = db
        .execute(select(Item::LABEL).filter(Item::PAYLOAD.eq(&b"Apple"[..])))
        .unwrap();
    assert_eq!(by_payload, ["Apple"]);

    let ranked = db
        .execute(select(Item::LABEL).order_by(Item::RANK.asc()))
        .unwrap();
    assert_eq!(ranked, ["Fig", "Apple"]);

    let cheap = db
        .execute(select(Item::LABEL).filter(Item::PRICE.between(1, 2)))
        .unwrap();
    assert_eq!(cheap, ["Apple"]);
}

fn unique_column_rejects_duplicates(test: &mut DbTest) {
    let db = test.setup_db(models!(Item));

    let item = Item::new("Apple", 1.5, None);
    db.insert(&item).unwrap();

    let err = db.insert(&item).unwrap_err();
    assert!(err.is_engine());
    assert!(err.to_string().contains("UNIQUE"), "{err}");
    assert_eq!(db.count::<Item>().unwrap(), 1);
}

tests!(
    every_field_round_trips,
    null_filters,
    filter_on_typed_columns,
    unique_column_rejects_duplicates
);
