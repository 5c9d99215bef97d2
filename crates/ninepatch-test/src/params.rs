//! Regression test parameters and operations

use ninepatch_core::Pix;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "render")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "render")
    pub fn new(test_name: &str) -> Self {
        crate::init_logging();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Record a boolean check
    ///
    /// # Returns
    ///
    /// The value of `cond`.
    pub fn check(&mut self, cond: bool, what: &str) -> bool {
        self.index += 1;
        if !cond {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.record_failure(msg);
        }
        cond
    }

    /// Compare two Pix images for exact equality
    ///
    /// # Returns
    ///
    /// `true` if images are identical, `false` otherwise.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        if !pix1.sizes_equal(pix2) {
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                pix1.width(),
                pix1.height(),
                pix2.width(),
                pix2.height()
            );
            self.record_failure(msg);
            return false;
        }

        for y in 0..pix1.height() {
            for x in 0..pix1.width() {
                let p1 = pix1.get_pixel_unchecked(x, y);
                let p2 = pix2.get_pixel_unchecked(x, y);
                if p1 != p2 {
                    let msg = format!(
                        "Failure in {}_reg: pix comparison for index {} - pixel mismatch \
                         at ({}, {}): {:#010x} vs {:#010x}",
                        self.test_name, self.index, x, y, p1, p2
                    );
                    self.record_failure(msg);
                    return false;
                }
            }
        }

        true
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_pix() {
        let a = Pix::from_argb(2, 1, vec![1, 2]).unwrap();
        let b = Pix::from_argb(2, 1, vec![1, 3]).unwrap();
        let c = Pix::from_argb(1, 2, vec![1, 2]).unwrap();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_pix(&a, &a.deep_clone()));
        assert!(!rp.compare_pix(&a, &b));
        assert!(!rp.compare_pix(&a, &c));
        assert_eq!(rp.index(), 3);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_check() {
        let mut rp = RegParams::new("test");
        assert!(rp.check(true, "ok"));
        assert!(!rp.check(false, "not ok"));
        assert!(rp.failures()[0].contains("not ok"));
    }
}
