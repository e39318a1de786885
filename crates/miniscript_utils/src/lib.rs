pub mod peek;

/// Debug snapshot that records the source text it was produced from.
#[macro_export]
macro_rules! assert_debug_snapshot_with_source {
    ($source:expr => $output:expr, @$snapshot:literal) => {{
        $crate::insta::with_settings!({
            info => &$source,
            omit_expression => true,
        }, {
            $crate::insta::assert_debug_snapshot!($output, @$snapshot);
        })
    }};
}

#[doc(hidden)]
pub use insta;
