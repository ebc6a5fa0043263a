use crumpet::{
    func::{abs, avg, coalesce, count, count_all, lower, max, min, sum, trim, upper},
    select, Db,
};
use pretty_assertions::assert_eq;
use tests::{
    models,
    models::{Item, Post, User},
    tests, DbTest,
};

fn seed_items(db: &Db) {
    db.insert_range(&[
        Item::new("Apple", 1.5, Some(10)),
        Item::new("Pear", 2.0, None),
        Item::new("Plum", 0.5, Some(4)),
        Item::new("Fig", 4.0, Some(0)),
    ])
    .unwrap();
}

fn seed_posts(db: &Db) {
    let users: Vec<_> = ["ann", "bob", "cid"].into_iter().map(User::new).collect();
    db.insert_range(&users).unwrap();

    db.insert_range(&[
        Post::new(1, "one", 10),
        Post::new(1, "two", 30),
        Post::new(2, "three", 5),
        Post::new(2, "four", 5),
        Post::new(2, "five", 50),
    ])
    .unwrap();
}

fn count_rows(test: &mut DbTest) {
    let db = test.setup_db(models!(Item));
    assert_eq!(db.count::<Item>().unwrap(), 0);

    seed_items(&db);
    assert_eq!(db.count::<Item>().unwrap(), 4);

    // Null stock is not counted.
    let stocked = db.execute(select(count(Item::STOCK)).one()).unwrap();
    assert_eq!(stocked, 3);

    let cheap = db
        .execute(select(count_all()).filter(Item::PRICE.lt(2)).one())
        .unwrap();
    assert_eq!(cheap, 2);
}

fn min_max_sum_avg(test: &mut DbTest) {
    let db = test.setup_db(models!(Item));
    seed_items(&db);

    let (lowest, highest, total) = db
        .execute(select((min(Item::PRICE), max(Item::PRICE), sum(Item::PRICE))).one())
        .unwrap();
    assert_eq!(lowest, Some(0.5));
    assert_eq!(highest, Some(4.0));
    assert_eq!(total, Some(8.0));

    let mean = db.execute(select(avg(Item::PRICE)).one()).unwrap();
    assert_eq!(mean, Some(2.0));

    // Aggregates over no rows are null.
    let none = db
        .execute(select(max(Item::PRICE)).filter(Item::PRICE.gt(100)).one())
        .unwrap();
    assert_eq!(none, None);
}

fn scalar_functions(test: &mut DbTest) {
    let db = test.setup_db(models!(Item));
    db.insert(&Item::new("  Mixed Case  ", -3.0, None)).unwrap();

    let (lowered, uppered, trimmed) = db
        .execute(
            select((
                lower(Item::LABEL),
                upper(Item::LABEL),
                trim(Item::LABEL),
            ))
            .one(),
        )
        .unwrap();
    assert_eq!(lowered, "  mixed case  ");
    assert_eq!(uppered, "  MIXED CASE  ");
    assert_eq!(trimmed, "Mixed Case");

    let (magnitude, stock) = db
        .execute(select((abs(Item::PRICE), coalesce(Item::STOCK, -1))).one())
        .unwrap();
    assert_eq!(magnitude, 3.0);
    assert_eq!(stock, -1);
}

fn arithmetic(test: &mut DbTest) {
    let db = test.setup_db(models!(Item));
    seed_items(&db);

    let doubled = db
        .execute(
            select(Item::PRICE * 2)
                .filter(Item::LABEL.eq("Fig"))
                .one(),
        )
        .unwrap();
    assert_eq!(doubled, 8.0);

    let labels = db
        .execute(
            select(Item::LABEL)
                .filter((Item::PRICE + 1).gt(2))
                .order_by(Item::LABEL.asc()),
        )
        .unwrap();
    assert_eq!(labels, ["Apple", "Fig", "Pear"]);

    let changed = db
        .execute(
            crumpet::update_all::<Item>()
                .set(Item::PRICE, Item::PRICE - 0.5)
                .filter(Item::STOCK.is_not_null()),
        )
        .unwrap();
    assert_eq!(changed, 3);

    let total = db.execute(select(sum(Item::PRICE)).one()).unwrap();
    assert_eq!(total, Some(6.5));
}

fn group_by_having(test: &mut DbTest) {
    let db = test.setup_db(models!(User, Post));
    seed_posts(&db);

    let rows = db
        .execute(
            select((Post::USER_ID, count_all(), sum(Post::VIEWS)))
                .group_by(Post::USER_ID)
                .order_by(Post::USER_ID.asc()),
        )
        .unwrap();
    assert_eq!(rows, [(1, 2, Some(40)), (2, 3, Some(60))]);

    let busy_authors = db
        .execute(
            select(Post::USER_ID)
                .group_by(Post::USER_ID)
                .having(count_all().gt(2)),
        )
        .unwrap();
    assert_eq!(busy_authors, [2]);
}

fn distinct_order_limit(test: &mut DbTest) {
    let db = test.setup_db(models!(User, Post));
    seed_posts(&db);

    let views = db
        .execute(
            select(Post::VIEWS)
                .distinct()
                .order_by(Post::VIEWS.desc()),
        )
        .unwrap();
    assert_eq!(views, [50, 30, 10, 5]);

    let page = db
        .execute(
            select(Post::TITLE)
                .order_by(Post::ID.asc())
                .limit(2)
                .offset(1),
        )
        .unwrap();
    assert_eq!(page, ["two", "three"]);

    let skipped = db
        .execute(select(Post::TITLE).order_by(Post::ID.asc()).offset(3))
        .unwrap();
    assert_eq!(skipped, ["four", "five"]);

    let first = db
        .execute(select(Post::TITLE).order_by(Post::VIEWS.desc()).first())
        .unwrap();
    assert_eq!(first.as_deref(), Some("five"));
}

tests!(
    count_rows,
    min_max_sum_avg,
    scalar_functions,
    arithmetic,
    group_by_having,
    distinct_order_limit
);
