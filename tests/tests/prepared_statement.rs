use crumpet::{
    func::length,
    insert, remove_all, select,
    stmt::{Type, Value},
    update_all, Db, IntoExpr, TypedValue,
};
use pretty_assertions::assert_eq;
use tests::{assert_err_is, models, models::User, tests, DbTest};

fn seed(db: &Db) {
    for name in ["Team BS", "Shy'm", "Maître Gims"] {
        db.insert(&User::new(name)).unwrap();
    }
}

fn select_long_names(test: &mut DbTest) {
    let db = test.setup_db(models!(User));
    seed(&db);

    let ids = db
        .execute(
            select(User::ID)
                .filter(length(User::NAME).gt(5))
                .order_by(User::ID.asc()),
        )
        .unwrap();
    assert_eq!(ids, [1, 3]);

    let ids = db
        .execute(select(User::ID).filter(length(User::NAME).gt(5).and(User::NAME.like("T%"))))
        .unwrap();
    assert_eq!(ids, [1]);
}

fn concat_then_reexecute(test: &mut DbTest) {
    let db = test.setup_db(models!(User));
    seed(&db);

    let mut long_names = db
        .prepare(
            select(User::ID)
                .filter(length(User::NAME).gt(5))
                .order_by(User::ID.asc()),
        )
        .unwrap();
    assert_eq!(long_names.execute().unwrap(), [1, 3]);

    let changed = db
        .execute(update_all::<User>().set(User::NAME, User::NAME.concat("_")))
        .unwrap();
    assert_eq!(changed, 3);

    let names = db
        .execute(select(User::NAME).order_by(User::ID.asc()))
        .unwrap();
    assert_eq!(names, ["Team BS_", "Shy'm_", "Maître Gims_"]);

    // The same prepared statement sees the new names.
    assert_eq!(long_names.execute().unwrap(), [1, 2, 3]);
}

fn remove_where(test: &mut DbTest) {
    let db = test.setup_db(models!(User));
    seed(&db);

    let removed = db
        .execute(remove_all::<User>().filter(User::ID.eq(2)))
        .unwrap();
    assert_eq!(removed, 1);

    let ids = db
        .execute(select(User::ID).order_by(User::ID.asc()))
        .unwrap();
    assert_eq!(ids, [1, 3]);
}

fn insert_assigns_next_id(test: &mut DbTest) {
    let db = test.setup_db(models!(User));
    seed(&db);

    let err = assert_err_is!(db.get::<User>(4), is_record_not_found);
    assert!(!err.is_engine());
    assert_eq!(err.to_string(), "record not found: table=users key=4");
    assert_eq!(db.get_optional::<User>(4).unwrap(), None);

    let id = db
        .insert(&User {
            id: 0,
            name: "Stromae".to_string(),
        })
        .unwrap();
    assert_eq!(id, 4);

    let users = db.get_all::<User>().unwrap();
    assert_eq!(users.len(), 4);
    assert_eq!(
        db.get::<User>(4).unwrap(),
        User {
            id: 4,
            name: "Stromae".to_string()
        }
    );
}

fn rebind_insert(test: &mut DbTest) {
    let db = test.setup_db(models!(User));

    let first = User::new("Angèle");
    let mut stmt = db.prepare(insert(&first)).unwrap();
    assert_eq!(stmt.sql(), r#"INSERT INTO "users" ("name") VALUES (?1)"#);
    assert_eq!(stmt.execute().unwrap(), 1);

    for (i, name) in ["Orelsan", "Aya Nakamura"].into_iter().enumerate() {
        let user = User::new(name);
        stmt.rebind(insert(&user)).unwrap();
        assert_eq!(stmt.params()[0].value, Value::from(name));
        assert_eq!(stmt.execute().unwrap(), i as i64 + 2);
    }

    assert_eq!(db.count::<User>().unwrap(), 3);

    // A statement of a different shape is rejected.
    let err = assert_err_is!(
        stmt.rebind(select(User::ID).filter(User::ID.eq(1))),
        is_query_builder
    );
    assert!(err.to_string().contains("cannot rebind"));
}

fn bind_replaces_values(test: &mut DbTest) {
    let db = test.setup_db(models!(User));
    seed(&db);

    let mut stmt = db
        .prepare(select(User::NAME).filter(User::ID.eq(1)))
        .unwrap();
    assert_eq!(stmt.execute().unwrap(), ["Team BS"]);

    stmt.bind([Value::I64(3)]).unwrap();
    assert_eq!(stmt.execute().unwrap(), ["Maître Gims"]);

    stmt.set_param(0, 2_i64).unwrap();
    assert_eq!(stmt.all().unwrap(), ["Shy'm"]);
    assert_eq!(
        stmt.params(),
        [TypedValue {
            value: Value::I64(2),
            ty: Type::I64,
        }]
    );
}

fn bind_errors(test: &mut DbTest) {
    let db = test.setup_db(models!(User));
    seed(&db);

    let mut stmt = db
        .prepare(select(User::NAME).filter(User::ID.eq(1)))
        .unwrap();

    let err = assert_err_is!(stmt.bind([]), is_bind);
    assert_eq!(err.to_string(), "bind error: expected 1 parameters, got 0");

    let err = assert_err_is!(stmt.bind([Value::from("x")]), is_bind);
    assert_eq!(
        err.to_string(),
        "bind error: parameter 1 expects INTEGER, got TEXT"
    );

    let err = assert_err_is!(stmt.set_param(1, 5_i64), is_bind);
    assert_eq!(
        err.to_string(),
        "bind error: parameter 2 is out of range; the statement has 1 parameters"
    );

    // Failed binds leave the earlier values in place.
    assert_eq!(stmt.execute().unwrap(), ["Team BS"]);
}

fn composite_values_are_rejected(test: &mut DbTest) {
    let db = test.setup_db(models!(User));
    seed(&db);

    // The literal null in `IS NULL` gets an untyped slot.
    let always = IntoExpr::<Option<i64>>::into_expr(None::<i64>).is_null();
    let mut stmt = db
        .prepare(select(User::NAME).filter(User::ID.eq(1)).filter(always))
        .unwrap();

    let before = stmt.params().to_vec();
    assert_eq!(before[1].ty, Type::Null);

    let err = assert_err_is!(
        stmt.bind([Value::I64(2), Value::List(vec![Value::I64(1)])]),
        is_bind
    );
    assert!(err.to_string().contains("parameter 2"), "{err}");
    assert_eq!(stmt.params(), &before[..]);

    assert_err_is!(stmt.set_param(0, Value::List(vec![])), is_bind);
    assert_eq!(stmt.params(), &before[..]);

    assert_eq!(stmt.execute().unwrap(), ["Team BS"]);
}

fn lazy_rows(test: &mut DbTest) {
    let db = test.setup_db(models!(User));
    seed(&db);

    let mut stmt = db
        .prepare(crumpet::get_all::<User>().order_by(User::ID.desc()))
        .unwrap();

    let mut cursor = stmt.iter();
    assert_eq!(cursor.width(), 2);
    assert_eq!(cursor.next().unwrap().unwrap().name, "Maître Gims");
    drop(cursor);

    // A fresh execution starts over.
    let names: Vec<_> = stmt.iter().map(|user| user.unwrap().name).collect();
    assert_eq!(names, ["Maître Gims", "Shy'm", "Team BS"]);

    let mut cursor = stmt.iter();
    assert_eq!(cursor.by_ref().count(), 3);
    assert!(cursor.next().is_none());
}

tests!(
    select_long_names,
    concat_then_reexecute,
    remove_where,
    insert_assigns_next_id,
    rebind_insert,
    bind_replaces_values,
    bind_errors,
    composite_values_are_rejected,
    lazy_rows
);
