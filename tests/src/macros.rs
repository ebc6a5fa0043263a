#[macro_export]
macro_rules! models {
    (
        $( $model:ty ),*
    ) => {{
        let mut builder = crumpet::Db::builder();
        $( builder.register::<$model>(); )*
        builder
    }};
}

/// Generates one `#[test]` per function and per database setup. Each
/// function takes a `&mut DbTest`.
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+
    ) => {
        mod memory {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::DbTest::new(Box::new($crate::SetupMemory));
                    super::$f(&mut test);
                }
            )*
        }

        mod file {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::DbTest::new(Box::new($crate::SetupFile::new()));
                    super::$f(&mut test);
                }
            )*
        }
    };
}

#[macro_export]
macro_rules! assert_eq_unordered {
    ($actual:expr, $expect:expr) => {
        let mut vals = std::collections::HashSet::new();

        for val in $actual {
            assert!(vals.insert(val));
        }

        for val in $expect {
            assert!(vals.remove(val), "`{:#?}` missing", val);
        }

        assert!(vals.is_empty());
    };
}
