use super::{column::ColumnRef, Comma, Delimited, Formatter, Params, ToSql};

use crate::stmt;
use crumpet_core::{Error, Result};

/// An operand rendered with the type of the column it is compared against,
/// so literal slots carry the column's declared type.
pub(super) struct Hinted<'a>(pub(super) &'a stmt::Expr, pub(super) Option<&'a stmt::Type>);

impl ToSql for Hinted<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.0 {
            stmt::Expr::Value(value) => super::value::Literal(value, self.1).to_sql(f),
            expr => expr.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, "(" Delimited(&expr.operands, " AND ") ")");
            }
            Between(expr) => {
                let hint = column_ty(f, &expr.expr)?;
                let low = Hinted(&expr.low, hint.as_ref());
                let high = Hinted(&expr.high, hint.as_ref());

                fmt!(f, "(" expr.expr.as_ref() " BETWEEN " low " AND " high ")");
            }
            BinaryOp(expr) => {
                let lhs_ty = column_ty(f, &expr.lhs)?;
                let rhs_ty = column_ty(f, &expr.rhs)?;
                let lhs = Hinted(&expr.lhs, rhs_ty.as_ref());
                let rhs = Hinted(&expr.rhs, lhs_ty.as_ref());
                let op = expr.op.as_str();

                fmt!(f, "(" lhs " " op " " rhs ")");
            }
            Column(expr) => {
                fmt!(f, ColumnRef(&expr.field));
            }
            Func(expr) => match expr.func {
                stmt::Func::CountAll => {
                    if !expr.args.is_empty() {
                        return Err(Error::query_builder("COUNT(*) takes no arguments"));
                    }
                    fmt!(f, "COUNT(*)");
                }
                func => {
                    if expr.args.is_empty() {
                        return Err(Error::query_builder(format!(
                            "{} requires at least one argument",
                            func.name()
                        )));
                    }
                    fmt!(f, func.name() "(" Comma(&expr.args) ")");
                }
            },
            InList(expr) => {
                let hint = column_ty(f, &expr.expr)?;
                let items = Comma(expr.list.iter().map(|item| Hinted(item, hint.as_ref())));
                let op = if expr.negate { " NOT IN (" } else { " IN (" };

                fmt!(f, "(" expr.expr.as_ref() op items "))");
            }
            InSubquery(expr) => {
                let op = if expr.negate { " NOT IN (" } else { " IN (" };
                fmt!(f, "(" expr.expr.as_ref() op expr.query.as_ref() "))");
            }
            IsNull(expr) => {
                let op = if expr.negate { " IS NOT NULL)" } else { " IS NULL)" };
                fmt!(f, "(" expr.expr.as_ref() op);
            }
            Key(expr) => {
                fmt!(f, KeyFilter(expr.model, &expr.value));
            }
            Like(expr) => {
                let op = if expr.negate { " NOT LIKE " } else { " LIKE " };
                fmt!(f, "(" expr.expr.as_ref() op expr.pattern.as_ref() ")");
            }
            Not(expr) => {
                fmt!(f, "(NOT " expr.expr.as_ref() ")");
            }
            Or(expr) => {
                fmt!(f, "(" Delimited(&expr.operands, " OR ") ")");
            }
            UnaryOp(expr) => {
                fmt!(f, "(" expr.op.as_str() expr.expr.as_ref() ")");
            }
            Value(value) => {
                fmt!(f, super::value::Literal(value, None));
            }
        }

        Ok(())
    }
}

/// Expands a key match into one equality per primary key column.
pub(super) struct KeyFilter<'a>(pub(super) crumpet_core::schema::ModelId, pub(super) &'a stmt::Value);

impl ToSql for KeyFilter<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let table = f.serializer.table(self.0)?;
        let pk: Vec<_> = table.primary_key_columns().collect();

        if pk.is_empty() {
            return Err(Error::query_builder(format!(
                "model `{}` has no primary key",
                self.0.name()
            )));
        }

        let components: Vec<&stmt::Value> = match self.1 {
            stmt::Value::Record(record) => record.iter().collect(),
            value => vec![value],
        };

        if components.len() != pk.len() {
            return Err(Error::query_builder(format!(
                "key for `{}` has {} components but the primary key has {} columns",
                self.0.name(),
                components.len(),
                pk.len()
            )));
        }

        let equalities = pk.iter().zip(components).map(|(column, value)| {
            stmt::Expr::eq(stmt::Expr::column(column.field), value.clone())
        });

        if pk.len() == 1 {
            for expr in equalities {
                fmt!(f, &expr);
            }
        } else {
            let expr = stmt::Expr::And(stmt::ExprAnd {
                operands: equalities.collect(),
            });
            fmt!(f, &expr);
        }

        Ok(())
    }
}

/// The type of `expr` if it is a column reference.
fn column_ty<P>(f: &Formatter<'_, P>, expr: &stmt::Expr) -> Result<Option<stmt::Type>> {
    match expr {
        stmt::Expr::Column(column) => Ok(Some(f.serializer.column(&column.field)?.ty.clone())),
        _ => Ok(None),
    }
}
