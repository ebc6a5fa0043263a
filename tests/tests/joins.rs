use crumpet::{func::count, get_all, select, Db};
use pretty_assertions::assert_eq;
use tests::{
    models,
    models::{Post, User},
    tests, DbTest,
};

fn seed(db: &Db) {
    let users: Vec<_> = ["ann", "bob", "cid"].into_iter().map(User::new).collect();
    db.insert_range(&users).unwrap();

    db.insert_range(&[
        Post::new(1, "hello", 10),
        Post::new(2, "intro", 3),
        Post::new(2, "follow-up", 7),
    ])
    .unwrap();
}

fn inner_join(test: &mut DbTest) {
    let db = test.setup_db(models!(User, Post));
    seed(&db);

    let query = select((User::NAME, Post::TITLE))
        .from::<User>()
        .inner_join::<Post>(Post::USER_ID.eq(User::ID))
        .order_by(Post::ID.asc());

    let sql = db.compile(query.clone()).unwrap().sql;
    assert_eq!(
        sql,
        r#"SELECT "users"."name", "posts"."title" FROM "users" INNER JOIN "posts" ON ("posts"."user_id" = "users"."id") ORDER BY "posts"."id" ASC"#
    );

    let rows = db.execute(query).unwrap();
    assert_eq!(
        rows,
        [
            ("ann".to_string(), "hello".to_string()),
            ("bob".to_string(), "intro".to_string()),
            ("bob".to_string(), "follow-up".to_string()),
        ]
    );
}

fn left_join_counts(test: &mut DbTest) {
    let db = test.setup_db(models!(User, Post));
    seed(&db);

    let rows = db
        .execute(
            select((User::NAME, count(Post::ID)))
                .from::<User>()
                .left_join::<Post>(Post::USER_ID.eq(User::ID))
                .group_by(User::ID)
                .order_by(User::NAME.asc()),
        )
        .unwrap();

    assert_eq!(
        rows,
        [
            ("ann".to_string(), 1),
            ("bob".to_string(), 2),
            ("cid".to_string(), 0),
        ]
    );
}

fn implicit_from(test: &mut DbTest) {
    let db = test.setup_db(models!(User, Post));
    seed(&db);

    // Both tables come from the referenced columns.
    let titles = db
        .execute(
            select(Post::TITLE)
                .filter(Post::USER_ID.eq(User::ID).and(User::NAME.eq("bob")))
                .order_by(Post::TITLE.asc()),
        )
        .unwrap();
    assert_eq!(titles, ["follow-up", "intro"]);
}

fn subquery_filter(test: &mut DbTest) {
    let db = test.setup_db(models!(User, Post));
    seed(&db);

    // Users with a post of more than five views.
    let users = db
        .execute(
            get_all::<User>()
                .filter(User::ID.in_query(select(Post::USER_ID).filter(Post::VIEWS.gt(5))))
                .order_by(User::ID.asc()),
        )
        .unwrap();

    let names: Vec<_> = users.into_iter().map(|user| user.name).collect();
    assert_eq!(names, ["ann", "bob"]);
}

fn foreign_key_enforced(test: &mut DbTest) {
    let db = test.setup_db(models!(User, Post));

    let err = db.insert(&Post::new(42, "orphan", 0)).unwrap_err();
    assert!(err.is_engine());
    assert!(err.to_string().contains("FOREIGN KEY"), "{err}");
}

tests!(
    inner_join,
    left_join_counts,
    implicit_from,
    subquery_filter,
    foreign_key_enforced
);
