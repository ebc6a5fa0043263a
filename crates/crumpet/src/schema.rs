mod field;
pub use field::Field;

mod registry;
pub use registry::Registry;
pub(crate) use registry::ModelInfo;

mod table;
pub use table::{ColumnBuilder, TableBuilder};
