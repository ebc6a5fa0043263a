use crumpet::{get_all, select, Db};
use pretty_assertions::assert_eq;
use tests::{
    models,
    models::{Post, User},
    tests, DbTest,
};

fn seed(db: &Db) {
    let users: Vec<_> = ["a", "b", "c", "d"].into_iter().map(User::new).collect();
    assert_eq!(db.insert_range(&users).unwrap(), 4);
}

fn in_list_literal(test: &mut DbTest) {
    let db = test.setup_db(models!(User));
    seed(&db);

    let users = db
        .execute(get_all::<User>().filter(User::ID.in_set([1, 2, 3])))
        .unwrap();
    assert_eq!(users.len(), 3);

    let mut ids: Vec<_> = users.into_iter().map(|user| user.id).collect();
    ids.sort();
    assert_eq!(ids, [1, 2, 3]);
}

fn in_list_from_collection(test: &mut DbTest) {
    let db = test.setup_db(models!(User));
    seed(&db);

    let keys: Vec<i64> = vec![1, 2, 3];
    let ids = db
        .execute(
            select(User::ID)
                .filter(User::ID.in_set(&keys))
                .order_by(User::ID.asc()),
        )
        .unwrap();
    assert_eq!(ids, keys);

    let names = db
        .execute(select(User::NAME).filter(User::NAME.in_set(["b", "d", "z"])))
        .unwrap();
    tests::assert_eq_unordered!(&names, &["b".to_string(), "d".to_string()]);
}

fn not_in_list(test: &mut DbTest) {
    let db = test.setup_db(models!(User));
    seed(&db);

    let ids = db
        .execute(select(User::ID).filter(User::ID.not_in_set([1, 2, 3])))
        .unwrap();
    assert_eq!(ids, [4]);
}

fn empty_list_matches_nothing(test: &mut DbTest) {
    let db = test.setup_db(models!(User));
    seed(&db);

    let ids = db
        .execute(select(User::ID).filter(User::ID.in_set(Vec::<i64>::new())))
        .unwrap();
    assert!(ids.is_empty());
}

fn in_subquery(test: &mut DbTest) {
    let db = test.setup_db(models!(User, Post));
    seed(&db);

    db.insert_range(&[
        Post::new(1, "hello", 3),
        Post::new(3, "popular", 50),
        Post::new(3, "also popular", 20),
        Post::new(4, "quiet", 1),
    ])
    .unwrap();

    let popular_authors = select(Post::USER_ID).filter(Post::VIEWS.gt(10));

    let names = db
        .execute(
            select(User::NAME)
                .filter(User::ID.in_query(popular_authors.clone()))
                .order_by(User::NAME.asc()),
        )
        .unwrap();
    assert_eq!(names, ["c"]);

    let names = db
        .execute(
            select(User::NAME)
                .filter(User::ID.not_in_query(popular_authors))
                .order_by(User::NAME.asc()),
        )
        .unwrap();
    assert_eq!(names, ["a", "b", "d"]);
}

fn subquery_over_same_table(test: &mut DbTest) {
    let db = test.setup_db(models!(User));
    db.insert_range(&[User::new("a"), User::new("b"), User::new("c")])
        .unwrap();

    let newest = select(User::ID).order_by(User::ID.desc()).limit(1);
    let ids = db
        .execute(select(User::ID).filter(User::ID.in_query(newest)))
        .unwrap();
    assert_eq!(ids, [3]);
}

tests!(
    in_list_literal,
    in_list_from_collection,
    not_in_list,
    empty_list_matches_nothing,
    in_subquery,
    subquery_over_same_table
);
