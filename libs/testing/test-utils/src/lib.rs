//! Shared test infrastructure for the workspace.
//!
//! - [`TestDatabase`]: per-test PostgreSQL container, migrated and ready
//!   (feature `postgres`, on by default)
//! - [`TestDataBuilder`]: seeded test data so runs are reproducible
//! - [`assertions`]: domain-flavored assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let product_name = builder.name("product", "main");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Deterministic test data, seeded per test.
///
/// Two builders created from the same test name produce the same values, so
/// a failing test reproduces exactly; different tests get disjoint data and
/// stay independent even against a shared database.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds the builder from a hash of the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A name of the form `test-{prefix}-{seed}-{suffix}`, unique per test.
    ///
    /// `prefix` says what kind of thing this is ("product"), `suffix`
    /// distinguishes instances within one test ("main", "backup").
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Assertion helpers used across the domain test suites.
pub mod assertions {
    use rust_decimal::Decimal;
    use std::str::FromStr;

    /// Asserts a decimal equals its expected string form, e.g. `"800.00"`.
    pub fn assert_decimal_eq(actual: Decimal, expected: &str, context: &str) {
        let expected = Decimal::from_str(expected)
            .unwrap_or_else(|_| panic!("{}: invalid expected decimal {:?}", context, expected));
        assert_eq!(
            actual, expected,
            "{}: expected {}, got {}",
            context, expected, actual
        );
    }

    /// Unwraps an Option, panicking with `context` when it is None.
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::assertions::assert_decimal_eq;
    use super::*;

    #[test]
    fn test_same_seed_same_data() {
        let a = TestDataBuilder::new(42);
        let b = TestDataBuilder::new(42);

        assert_eq!(a.name("product", "x"), b.name("product", "x"));
    }

    #[test]
    fn test_same_test_name_same_data() {
        let a = TestDataBuilder::from_test_name("my_test");
        let b = TestDataBuilder::from_test_name("my_test");

        assert_eq!(a.name("product", "a"), b.name("product", "a"));
    }

    #[test]
    fn test_different_test_names_diverge() {
        let a = TestDataBuilder::from_test_name("first");
        let b = TestDataBuilder::from_test_name("second");

        assert_ne!(a.name("product", "a"), b.name("product", "a"));
    }

    #[test]
    fn test_decimal_assertion_accepts_equal_values() {
        use rust_decimal::Decimal;

        assert_decimal_eq(Decimal::new(80000, 2), "800.00", "price");
    }
}
