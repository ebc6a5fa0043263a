#![allow(dead_code)]

use crumpet_core::{
    schema::{Column, FieldId, ModelId, Schema, Table},
    stmt::{Expr, Type},
};
use crumpet_sql::{CompiledQuery, Statement};

pub struct User;
pub struct Post;
pub struct Membership;

pub fn user() -> ModelId {
    ModelId::of::<User>()
}

pub fn post() -> ModelId {
    ModelId::of::<Post>()
}

pub fn membership() -> ModelId {
    ModelId::of::<Membership>()
}

pub fn col(model: ModelId, field: &'static str) -> Expr {
    Expr::column(model.field(field))
}

fn column(field: FieldId, ty: Type) -> Column {
    Column::new(field, field.name, ty)
}

/// users(id PK autoincrement, name, age?), posts(id PK autoincrement,
/// user_id -> users.id, title) and memberships(user_id, group_id, role) keyed
/// by (user_id, group_id).
pub fn schema() -> Schema {
    let mut builder = Schema::builder();

    let mut users = Table::new(user(), "users");
    let mut id = column(user().field("id"), Type::I64);
    id.primary_key = true;
    id.auto_increment = true;
    users.push_column(id);
    users.push_column(column(user().field("name"), Type::String));
    let mut age = column(user().field("age"), Type::I64);
    age.nullable = true;
    users.push_column(age);
    users
        .push_index("index_users_by_name", &["name"], true)
        .unwrap();
    builder.register(users).unwrap();

    let mut posts = Table::new(post(), "posts");
    let mut id = column(post().field("id"), Type::I64);
    id.primary_key = true;
    id.auto_increment = true;
    posts.push_column(id);
    let mut user_id = column(post().field("user_id"), Type::I64);
    user_id.references = Some(user().field("id"));
    posts.push_column(user_id);
    posts.push_column(column(post().field("title"), Type::String));
    builder.register(posts).unwrap();

    let mut memberships = Table::new(membership(), "memberships");
    for name in ["user_id", "group_id"] {
        let mut key = column(membership().field(name), Type::I64);
        key.primary_key = true;
        memberships.push_column(key);
    }
    memberships.push_column(column(membership().field("role"), Type::String));
    builder.register(memberships).unwrap();

    builder.build().unwrap()
}

pub fn compile(schema: &Schema, stmt: impl Into<Statement>) -> CompiledQuery {
    crumpet_sql::compile(schema, stmt).unwrap()
}

pub fn placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}
