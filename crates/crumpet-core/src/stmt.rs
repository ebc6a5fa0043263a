mod assignments;
pub use assignments::Assignments;

mod delete;
pub use delete::Delete;

mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_between;
pub use expr_between::ExprBetween;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_func;
pub use expr_func::ExprFunc;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_in_subquery;
pub use expr_in_subquery::ExprInSubquery;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_key;
pub use expr_key::ExprKey;

mod expr_like;
pub use expr_like::ExprLike;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_unary_op;
pub use expr_unary_op::ExprUnaryOp;

mod func;
pub use func::Func;

mod insert;
pub use insert::Insert;

mod join;
pub use join::{Join, JoinOp};

mod limit;
pub use limit::Limit;

mod op_binary;
pub use op_binary::BinaryOp;

mod op_unary;
pub use op_unary::UnaryOp;

mod order_by_expr;
pub use order_by_expr::OrderByExpr;

mod returning;
pub use returning::Returning;

mod select;
pub use select::Select;

mod source;
pub use source::Source;

mod statement;
pub use statement::Statement;

mod ty;
pub use ty::{Kind, Type};

mod update;
pub use update::{Update, UpdateSet};

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;

pub mod visit;
pub use visit::Visit;
