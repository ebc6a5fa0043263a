use crumpet::{get_all, insert, schema::TableBuilder, select, Db, Field, Model};
use pretty_assertions::assert_eq;
use tests::{
    assert_err_is, models,
    models::{Post, User},
    tests, DbTest,
};

/// A model whose field is stored under a different column name.
#[derive(Debug, Default, Clone, PartialEq)]
struct Note {
    id: i64,
    body: String,
}

impl Note {
    const ID: Field<Note, i64> = Field::new("id");
    const BODY: Field<Note, String> = Field::new("body");
}

impl Model for Note {
    type Key = i64;
    const TABLE: &'static str = "notes";

    fn declare(table: &mut TableBuilder<Self>) {
        table
            .column(Note::ID, |n| &n.id, |n| &mut n.id)
            .primary_key()
            .auto_increment();
        table
            .column(Note::BODY, |n| &n.body, |n| &mut n.body)
            .name("content");
    }
}

/// Declares an autoincrement column that is not an integer.
#[derive(Debug, Default)]
struct Broken {
    name: String,
}

impl Model for Broken {
    type Key = String;
    const TABLE: &'static str = "broken";

    fn declare(table: &mut TableBuilder<Self>) {
        table
            .column(Field::new("name"), |b| &b.name, |b| &mut b.name)
            .primary_key()
            .auto_increment();
    }
}

#[test]
fn duplicate_registration() {
    let mut builder = models!(User, User);
    let err = assert_err_is!(builder.build_registry(), is_configuration);
    assert_eq!(
        err.to_string(),
        "configuration error: model `User` is already registered"
    );
}

#[test]
fn invalid_declarations() {
    let err = assert_err_is!(models!(Broken).build_registry(), is_configuration);
    assert!(err.to_string().contains("must be an integer"), "{err}");

    // `Post` references `User`, which is missing.
    let err = assert_err_is!(models!(Post).build_registry(), is_configuration);
    assert!(
        err.to_string().contains("references unregistered model `User`"),
        "{err}"
    );
}

#[test]
fn connection_urls() {
    let db = models!(User).connect("sqlite::memory:").unwrap();
    db.push_schema().unwrap();
    assert_eq!(db.count::<User>().unwrap(), 0);

    assert_err_is!(models!(User).connect("mysql://localhost/app"), is_configuration);
    assert_err_is!(models!(User).connect("not a url"), is_configuration);

    // Registration errors surface before any connection is opened.
    assert_err_is!(models!(User, User).connect("sqlite::memory:"), is_configuration);
}

fn unregistered_model(test: &mut DbTest) {
    let db = test.setup_db(models!(User));

    let err = assert_err_is!(db.get_all::<Post>(), is_schema);
    assert_eq!(err.to_string(), "schema error: model `Post` is not registered");

    assert_err_is!(db.insert(&Post::new(1, "x", 0)), is_schema);
    assert_err_is!(db.compile(select(Post::TITLE)), is_schema);
}

fn renamed_column(test: &mut DbTest) {
    let db = test.setup_db(models!(Note));

    let note = Note {
        id: 0,
        body: "remember the milk".to_string(),
    };
    assert_eq!(
        db.compile(insert(&note)).unwrap().sql,
        r#"INSERT INTO "notes" ("content") VALUES (?1)"#
    );

    let id = db.insert(&note).unwrap();
    assert_eq!(db.get::<Note>(id).unwrap().body, note.body);

    let found = db
        .execute(select(Note::ID).filter(Note::BODY.like("%milk")))
        .unwrap();
    assert_eq!(found, [id]);
}

fn push_schema_is_idempotent(test: &mut DbTest) {
    let db = test.setup_db(models!(User, Post));
    db.insert(&User::new("ann")).unwrap();

    // Existing tables and their rows are left alone.
    db.push_schema().unwrap();
    assert_eq!(db.count::<User>().unwrap(), 1);
}

fn drop_and_recreate(test: &mut DbTest) {
    let db = test.setup_db(models!(User, Post));
    let id = db.insert(&User::new("ann")).unwrap();
    db.insert(&Post::new(id, "hello", 0)).unwrap();

    db.drop_tables().unwrap();
    let err = assert_err_is!(db.get_all::<User>(), is_engine);
    assert!(err.to_string().contains("no such table"), "{err}");

    db.push_schema().unwrap();
    assert_eq!(db.count::<Post>().unwrap(), 0);

    // Foreign keys are enforced again after the drop.
    assert_err_is!(db.insert(&Post::new(7, "orphan", 0)), is_engine);
}

fn compile_is_stable(test: &mut DbTest) {
    let db = test.setup_db(models!(User, Post));

    let query = get_all::<Post>()
        .filter(Post::VIEWS.gt(3).and(Post::TITLE.ne("draft")))
        .order_by(Post::VIEWS.desc())
        .limit(5);

    let first = db.compile(query.clone()).unwrap();
    let second = db.registry().compile(query).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.params.len(), 3);
}

#[test]
fn foreign_keys_can_be_disabled() {
    let db: Db = models!(User, Post)
        .foreign_keys(false)
        .connect("sqlite::memory:")
        .unwrap();
    db.push_schema().unwrap();

    db.insert(&Post::new(42, "orphan", 0)).unwrap();
    assert_eq!(db.count::<Post>().unwrap(), 1);
}

tests!(
    unregistered_model,
    renamed_column,
    push_schema_is_idempotent,
    drop_and_recreate,
    compile_is_stable
);
