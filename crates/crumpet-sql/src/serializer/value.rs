use super::{Comma, Formatter, Params, ToSql};

use crumpet_core::{stmt, Result};

/// A literal rendered as placeholders, with an optional slot type.
///
/// Lists and records expand to one placeholder per element.
pub(super) struct Literal<'a>(pub(super) &'a stmt::Value, pub(super) Option<&'a stmt::Type>);

impl ToSql for Literal<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.0 {
            stmt::Value::Record(record) => {
                let hints: Option<&[stmt::Type]> = match self.1 {
                    Some(stmt::Type::Record(tys)) if tys.len() == record.len() => Some(tys),
                    _ => None,
                };

                let fields = Comma(record.iter().enumerate().map(|(i, field)| {
                    Literal(field, hints.map(|tys| &tys[i]))
                }));
                fmt!(f, "(" fields ")");
            }
            stmt::Value::List(items) => {
                let hint = match self.1 {
                    Some(stmt::Type::List(ty)) => Some(&**ty),
                    _ => None,
                };

                let items = Comma(items.iter().map(|item| Literal(item, hint)));
                fmt!(f, "(" items ")");
            }
            value => {
                let placeholder = f.params.push(value, self.1);
                fmt!(f, placeholder);
            }
        }

        Ok(())
    }
}

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        Literal(self, None).to_sql(f)
    }
}
