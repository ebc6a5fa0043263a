use crumpet::{get_all, select, Db};
use pretty_assertions::assert_eq;
use tests::{
    assert_err_is, models,
    models::{Item, Post, User},
    tests, DbTest,
};

/// Writes an `items` row directly, bypassing the typed insert.
fn insert_raw(db: &Db, price: &str, rank: &str, active: &str) {
    let sql = format!(
        r#"INSERT INTO "items" ("code", "label", "price", "stock", "active", "payload", "rank")
           VALUES ('{}', 'raw', {price}, NULL, {active}, X'00', {rank})"#,
        uuid::Uuid::new_v4()
    );
    db.connection().execute_batch(&sql).unwrap();
}

fn text_in_numeric_column(test: &mut DbTest) {
    let db = test.setup_db(models!(Item));
    insert_raw(&db, "'cheap'", "0", "1");

    let err = assert_err_is!(db.get::<Item>(1), is_type_mismatch);
    assert_eq!(
        err.to_string(),
        "failed to load `Item.price`: type mismatch: cannot convert TEXT value to f64"
    );

    // The scalar path reports the same kind without the field context.
    let err = assert_err_is!(db.execute(select(Item::PRICE)), is_type_mismatch);
    assert_eq!(
        err.to_string(),
        "type mismatch: cannot convert TEXT value to f64"
    );
}

fn integer_narrowing(test: &mut DbTest) {
    let db = test.setup_db(models!(Item));
    insert_raw(&db, "1.0", "7", "1");
    insert_raw(&db, "1.0", "4294967296", "1");

    assert_eq!(db.get::<Item>(1).unwrap().rank, 7);

    let err = assert_err_is!(db.get::<Item>(2), is_type_mismatch);
    assert!(err.to_string().contains("`Item.rank`"), "{err}");
}

fn bool_out_of_range(test: &mut DbTest) {
    let db = test.setup_db(models!(Item));
    insert_raw(&db, "1.0", "0", "2");

    assert_err_is!(db.get::<Item>(1), is_type_mismatch);
}

fn null_from_outer_join(test: &mut DbTest) {
    let db = test.setup_db(models!(User, Post));
    db.insert(&User::new("ann")).unwrap();

    let query = select((User::NAME, Post::TITLE))
        .from::<User>()
        .left_join::<Post>(Post::USER_ID.eq(User::ID));

    let err = assert_err_is!(db.execute(query), is_type_mismatch);
    assert_eq!(
        err.to_string(),
        "type mismatch: cannot convert NULL value to String"
    );
}

fn bad_row_does_not_end_iteration(test: &mut DbTest) {
    let db = test.setup_db(models!(Item));
    insert_raw(&db, "1.0", "0", "1");
    insert_raw(&db, "'cheap'", "0", "1");
    insert_raw(&db, "3.0", "0", "1");

    let mut stmt = db
        .prepare(get_all::<Item>().order_by(Item::ID.asc()))
        .unwrap();

    let results: Vec<_> = stmt.iter().collect();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().price, 1.0);
    assert!(results[1].as_ref().unwrap_err().is_type_mismatch());
    assert_eq!(results[2].as_ref().unwrap().price, 3.0);

    // Collecting stops at the first failure.
    assert_err_is!(stmt.execute(), is_type_mismatch);
}

tests!(
    text_in_numeric_column,
    integer_narrowing,
    bool_out_of_range,
    null_from_outer_join,
    bad_row_does_not_end_iteration
);
