/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing [polygon!]. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a region from the closed polygon through the vertexes given as a list of (x, y)
/// tuples. Evaluates to `Result<Region, RegionError>`, the polygon is read with nonzero winding.
///
/// # Examples
///
/// ```
/// # use cag_area::polygon;
/// let triangle = polygon![(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)].unwrap();
/// assert!(triangle.is_polygonal());
/// assert!(triangle.contains_point(1.0, 1.0));
/// assert!(!triangle.contains_point(3.0, 3.0));
/// ```
#[macro_export]
macro_rules! polygon {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut points = ::std::vec::Vec::with_capacity(size);
            $(
                points.push($crate::core::math::vec2($x.0, $x.1));
            )*
            $crate::region::Region::from_polygon(&points)
        }
    };
}
