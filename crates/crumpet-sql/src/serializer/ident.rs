use super::{Formatter, Params, ToSql};

use crumpet_core::Result;

/// A quoted identifier. Embedded double quotes are doubled.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = self.0.as_ref();

        f.dst.push('"');
        for ch in name.chars() {
            if ch == '"' {
                f.dst.push('"');
            }
            f.dst.push(ch);
        }
        f.dst.push('"');

        Ok(())
    }
}

impl ToSql for &crate::stmt::Name {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        Ident(&self.0).to_sql(f)
    }
}
