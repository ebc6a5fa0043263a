#![allow(unused_variables)]

use super::{
    Assignments, Delete, Expr, ExprAnd, ExprBetween, ExprBinaryOp, ExprColumn, ExprFunc,
    ExprInList, ExprInSubquery, ExprIsNull, ExprKey, ExprLike, ExprNot, ExprOr, ExprUnaryOp,
    Insert, Join, Limit, OrderByExpr, Returning, Select, Source, Statement, Update, UpdateSet,
    Value,
};

/// Read-only traversal of a statement tree.
///
/// Children are visited in the order the compiler renders them, so a visitor
/// that records literals sees them in placeholder order.
pub trait Visit {
    fn visit_assignments(&mut self, i: &Assignments) {
        visit_assignments(self, i);
    }

    fn visit_expr(&mut self, i: &Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_and(&mut self, i: &ExprAnd) {
        visit_expr_and(self, i);
    }

    fn visit_expr_between(&mut self, i: &ExprBetween) {
        visit_expr_between(self, i);
    }

    fn visit_expr_binary_op(&mut self, i: &ExprBinaryOp) {
        visit_expr_binary_op(self, i);
    }

    fn visit_expr_column(&mut self, i: &ExprColumn) {}

    fn visit_expr_func(&mut self, i: &ExprFunc) {
        visit_expr_func(self, i);
    }

    fn visit_expr_in_list(&mut self, i: &ExprInList) {
        visit_expr_in_list(self, i);
    }

    fn visit_expr_in_subquery(&mut self, i: &ExprInSubquery) {
        visit_expr_in_subquery(self, i);
    }

    fn visit_expr_is_null(&mut self, i: &ExprIsNull) {
        visit_expr_is_null(self, i);
    }

    fn visit_expr_key(&mut self, i: &ExprKey) {
        visit_expr_key(self, i);
    }

    fn visit_expr_like(&mut self, i: &ExprLike) {
        visit_expr_like(self, i);
    }

    fn visit_expr_not(&mut self, i: &ExprNot) {
        visit_expr_not(self, i);
    }

    fn visit_expr_or(&mut self, i: &ExprOr) {
        visit_expr_or(self, i);
    }

    fn visit_expr_unary_op(&mut self, i: &ExprUnaryOp) {
        visit_expr_unary_op(self, i);
    }

    fn visit_join(&mut self, i: &Join) {
        visit_join(self, i);
    }

    fn visit_limit(&mut self, i: &Limit) {
        visit_limit(self, i);
    }

    fn visit_order_by_expr(&mut self, i: &OrderByExpr) {
        visit_order_by_expr(self, i);
    }

    fn visit_returning(&mut self, i: &Returning) {
        visit_returning(self, i);
    }

    fn visit_select(&mut self, i: &Select) {
        visit_select(self, i);
    }

    fn visit_source(&mut self, i: &Source) {
        visit_source(self, i);
    }

    fn visit_stmt(&mut self, i: &Statement) {
        visit_stmt(self, i);
    }

    fn visit_stmt_delete(&mut self, i: &Delete) {
        visit_stmt_delete(self, i);
    }

    fn visit_stmt_insert(&mut self, i: &Insert) {
        visit_stmt_insert(self, i);
    }

    fn visit_stmt_update(&mut self, i: &Update) {
        visit_stmt_update(self, i);
    }

    fn visit_value(&mut self, i: &Value) {}
}

pub fn visit_assignments<V>(v: &mut V, node: &Assignments)
where
    V: Visit + ?Sized,
{
    for (_, expr) in node.iter() {
        v.visit_expr(expr);
    }
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::And(expr) => v.visit_expr_and(expr),
        Expr::Between(expr) => v.visit_expr_between(expr),
        Expr::BinaryOp(expr) => v.visit_expr_binary_op(expr),
        Expr::Column(expr) => v.visit_expr_column(expr),
        Expr::Func(expr) => v.visit_expr_func(expr),
        Expr::InList(expr) => v.visit_expr_in_list(expr),
        Expr::InSubquery(expr) => v.visit_expr_in_subquery(expr),
        Expr::IsNull(expr) => v.visit_expr_is_null(expr),
        Expr::Key(expr) => v.visit_expr_key(expr),
        Expr::Like(expr) => v.visit_expr_like(expr),
        Expr::Not(expr) => v.visit_expr_not(expr),
        Expr::Or(expr) => v.visit_expr_or(expr),
        Expr::UnaryOp(expr) => v.visit_expr_unary_op(expr),
        Expr::Value(expr) => v.visit_value(expr),
    }
}

pub fn visit_expr_and<V>(v: &mut V, node: &ExprAnd)
where
    V: Visit + ?Sized,
{
    for expr in node {
        v.visit_expr(expr);
    }
}

pub fn visit_expr_between<V>(v: &mut V, node: &ExprBetween)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
    v.visit_expr(&node.low);
    v.visit_expr(&node.high);
}

pub fn visit_expr_binary_op<V>(v: &mut V, node: &ExprBinaryOp)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_func<V>(v: &mut V, node: &ExprFunc)
where
    V: Visit + ?Sized,
{
    for arg in &node.args {
        v.visit_expr(arg);
    }
}

pub fn visit_expr_in_list<V>(v: &mut V, node: &ExprInList)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);

    for item in &node.list {
        v.visit_expr(item);
    }
}

pub fn visit_expr_in_subquery<V>(v: &mut V, node: &ExprInSubquery)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
    v.visit_select(&node.query);
}

pub fn visit_expr_is_null<V>(v: &mut V, node: &ExprIsNull)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_key<V>(v: &mut V, node: &ExprKey)
where
    V: Visit + ?Sized,
{
    v.visit_value(&node.value);
}

pub fn visit_expr_like<V>(v: &mut V, node: &ExprLike)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
    v.visit_expr(&node.pattern);
}

pub fn visit_expr_not<V>(v: &mut V, node: &ExprNot)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_or<V>(v: &mut V, node: &ExprOr)
where
    V: Visit + ?Sized,
{
    for expr in node {
        v.visit_expr(expr);
    }
}

pub fn visit_expr_unary_op<V>(v: &mut V, node: &ExprUnaryOp)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_join<V>(v: &mut V, node: &Join)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.on);
}

pub fn visit_limit<V>(v: &mut V, node: &Limit)
where
    V: Visit + ?Sized,
{
    if let Some(limit) = &node.limit {
        v.visit_expr(limit);
    }

    if let Some(offset) = &node.offset {
        v.visit_expr(offset);
    }
}

pub fn visit_order_by_expr<V>(v: &mut V, node: &OrderByExpr)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_returning<V>(v: &mut V, node: &Returning)
where
    V: Visit + ?Sized,
{
    if let Returning::Exprs(exprs) = node {
        for expr in exprs {
            v.visit_expr(expr);
        }
    }
}

pub fn visit_select<V>(v: &mut V, node: &Select)
where
    V: Visit + ?Sized,
{
    v.visit_returning(&node.returning);
    v.visit_source(&node.source);

    if let Some(filter) = &node.filter {
        v.visit_expr(filter);
    }

    for expr in &node.group_by {
        v.visit_expr(expr);
    }

    if let Some(having) = &node.having {
        v.visit_expr(having);
    }

    for order_by in &node.order_by {
        v.visit_order_by_expr(order_by);
    }

    if let Some(limit) = &node.limit {
        v.visit_limit(limit);
    }
}

pub fn visit_source<V>(v: &mut V, node: &Source)
where
    V: Visit + ?Sized,
{
    for join in &node.joins {
        v.visit_join(join);
    }
}

pub fn visit_stmt<V>(v: &mut V, node: &Statement)
where
    V: Visit + ?Sized,
{
    match node {
        Statement::Query(stmt) => v.visit_select(stmt),
        Statement::Insert(stmt) => v.visit_stmt_insert(stmt),
        Statement::Update(stmt) => v.visit_stmt_update(stmt),
        Statement::Delete(stmt) => v.visit_stmt_delete(stmt),
    }
}

pub fn visit_stmt_delete<V>(v: &mut V, node: &Delete)
where
    V: Visit + ?Sized,
{
    if let Some(filter) = &node.filter {
        v.visit_expr(filter);
    }
}

pub fn visit_stmt_insert<V>(v: &mut V, node: &Insert)
where
    V: Visit + ?Sized,
{
    for row in &node.rows {
        for value in row {
            v.visit_value(value);
        }
    }
}

pub fn visit_stmt_update<V>(v: &mut V, node: &Update)
where
    V: Visit + ?Sized,
{
    match &node.set {
        UpdateSet::Assignments(assignments) => v.visit_assignments(assignments),
        UpdateSet::Record(record) => {
            for value in record {
                v.visit_value(value);
            }
        }
    }

    if let Some(filter) = &node.filter {
        v.visit_expr(filter);
    }
}

/// Calls `f` on every expression in `stmt`, children before parents.
pub fn for_each_expr<F>(stmt: &Statement, f: F)
where
    F: FnMut(&Expr),
{
    struct ForEach<F> {
        f: F,
    }

    impl<F> Visit for ForEach<F>
    where
        F: FnMut(&Expr),
    {
        fn visit_expr(&mut self, node: &Expr) {
            visit_expr(self, node);
            (self.f)(node);
        }
    }

    ForEach { f }.visit_stmt(stmt);
}

/// Collects every literal in a query, in the order the compiler binds them.
///
/// Key values contribute one literal per key component.
pub fn literals(query: &Select) -> Vec<Value> {
    struct Literals(Vec<Value>);

    impl Visit for Literals {
        fn visit_value(&mut self, i: &Value) {
            match i {
                Value::Record(record) => self.0.extend(record.iter().cloned()),
                _ => self.0.push(i.clone()),
            }
        }
    }

    let mut collect = Literals(vec![]);
    collect.visit_select(query);
    collect.0
}
