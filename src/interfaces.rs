/// Internal prefix-class matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait ClassMatcherApi: Send + Sync {
    /// Returns whether the given digit string (decimal digits only) starts
    /// with a prefix belonging to the class described by `patterns`. An empty
    /// class never matches.
    fn matches_class(&self, digits: &str, patterns: &[&str]) -> bool;
}
