//! Models shared by the integration tests.

use crumpet::{schema::TableBuilder, Field, Model};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
}

impl User {
    pub const ID: Field<User, i64> = Field::new("id");
    pub const NAME: Field<User, String> = Field::new("name");

    pub fn new(name: &str) -> User {
        User {
            id: 0,
            name: name.to_string(),
        }
    }
}

impl Model for User {
    type Key = i64;
    const TABLE: &'static str = "users";

    fn declare(table: &mut TableBuilder<Self>) {
        table
            .column(User::ID, |u| &u.id, |u| &mut u.id)
            .primary_key()
            .auto_increment();
        table.column(User::NAME, |u| &u.name, |u| &mut u.name);
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub views: i64,
}

impl Post {
    pub const ID: Field<Post, i64> = Field::new("id");
    pub const USER_ID: Field<Post, i64> = Field::new("user_id");
    pub const TITLE: Field<Post, String> = Field::new("title");
    pub const VIEWS: Field<Post, i64> = Field::new("views");

    pub fn new(user_id: i64, title: &str, views: i64) -> Post {
        Post {
            id: 0,
            user_id,
            title: title.to_string(),
            views,
        }
    }
}

impl Model for Post {
    type Key = i64;
    const TABLE: &'static str = "posts";

    fn declare(table: &mut TableBuilder<Self>) {
        table
            .column(Post::ID, |p| &p.id, |p| &mut p.id)
            .primary_key()
            .auto_increment();
        table
            .column(Post::USER_ID, |p| &p.user_id, |p| &mut p.user_id)
            .references(User::ID);
        table.column(Post::TITLE, |p| &p.title, |p| &mut p.title);
        table.column(Post::VIEWS, |p| &p.views, |p| &mut p.views);
        table.index("index_posts_by_user", &["user_id"]);
    }
}

/// A user's role in a group, keyed by both ids.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Membership {
    pub user_id: i64,
    pub group_id: i64,
    pub role: String,
}

impl Membership {
    pub const USER_ID: Field<Membership, i64> = Field::new("user_id");
    pub const GROUP_ID: Field<Membership, i64> = Field::new("group_id");
    pub const ROLE: Field<Membership, String> = Field::new("role");

    pub fn new(user_id: i64, group_id: i64, role: &str) -> Membership {
        Membership {
            user_id,
            group_id,
            role: role.to_string(),
        }
    }
}

impl Model for Membership {
    type Key = (i64, i64);
    const TABLE: &'static str = "memberships";

    fn declare(table: &mut TableBuilder<Self>) {
        table
            .column(Membership::USER_ID, |m| &m.user_id, |m| &mut m.user_id)
            .primary_key();
        table
            .column(Membership::GROUP_ID, |m| &m.group_id, |m| &mut m.group_id)
            .primary_key();
        table.column(Membership::ROLE, |m| &m.role, |m| &mut m.role);
    }
}

/// One column of every supported field type.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub code: uuid::Uuid,
    pub label: String,
    pub price: f64,
    pub stock: Option<i64>,
    pub active: bool,
    pub payload: Vec<u8>,
    pub rank: i32,
}

impl Item {
    pub const ID: Field<Item, i64> = Field::new("id");
    pub const CODE: Field<Item, uuid::Uuid> = Field::new("code");
    pub const LABEL: Field<Item, String> = Field::new("label");
    pub const PRICE: Field<Item, f64> = Field::new("price");
    pub const STOCK: Field<Item, Option<i64>> = Field::new("stock");
    pub const ACTIVE: Field<Item, bool> = Field::new("active");
    pub const PAYLOAD: Field<Item, Vec<u8>> = Field::new("payload");
    pub const RANK: Field<Item, i32> = Field::new("rank");

    pub fn new(label: &str, price: f64, stock: Option<i64>) -> Item {
        Item {
            id: 0,
            code: uuid::Uuid::new_v4(),
            label: label.to_string(),
            price,
            stock,
            active: true,
            payload: label.as_bytes().to_vec(),
            rank: 0,
        }
    }
}

impl Model for Item {
    type Key = i64;
    const TABLE: &'static str = "items";

    fn declare(table: &mut TableBuilder<Self>) {
        table
            .column(Item::ID, |i| &i.id, |i| &mut i.id)
            .primary_key()
            .auto_increment();
        table.column(Item::CODE, |i| &i.code, |i| &mut i.code).unique();
        table.column(Item::LABEL, |i| &i.label, |i| &mut i.label);
        table.column(Item::PRICE, |i| &i.price, |i| &mut i.price);
        table.column(Item::STOCK, |i| &i.stock, |i| &mut i.stock);
        table.column(Item::ACTIVE, |i| &i.active, |i| &mut i.active);
        table.column(Item::PAYLOAD, |i| &i.payload, |i| &mut i.payload);
        table.column(Item::RANK, |i| &i.rank, |i| &mut i.rank);
    }
}
