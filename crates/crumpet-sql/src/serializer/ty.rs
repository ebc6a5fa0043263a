use super::{Formatter, Params, ToSql};

use crumpet_core::{stmt::Kind, Result};

impl ToSql for Kind {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Kind::Integer | Kind::Real | Kind::Text | Kind::Blob => {
                f.dst.push_str(self.as_str());
                Ok(())
            }
            Kind::Null | Kind::Composite => Err(crumpet_core::Error::query_builder(format!(
                "{} is not a column storage type",
                self.as_str()
            ))),
        }
    }
}
