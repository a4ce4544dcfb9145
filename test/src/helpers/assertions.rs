/// Assert that two elements are equal under the engine's structural equality, printing both
/// trees when they differ
#[macro_export]
macro_rules! assert_elements_eq {
    ($left:expr, $right:expr) => {
        assert!(
            replica_shared::equal_to($left, $right),
            "elements differ:\n  left: {}\n right: {}",
            replica_shared::stringify($left),
            replica_shared::stringify($right)
        );
    };
}

/// Assert that a float is within `epsilon` of the expected value
#[macro_export]
macro_rules! assert_near {
    ($actual:expr, $expected:expr, $epsilon:expr) => {
        let (actual, expected): (f32, f32) = ($actual, $expected);
        assert!(
            (actual - expected).abs() < $epsilon,
            "{} is not within {} of {}",
            actual,
            $epsilon,
            expected
        );
    };
}
