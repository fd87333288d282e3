use std::time::Instant;

/// Banner-style logging around a test case; visible with `--nocapture`.
pub struct TestLogger {
    test_name: String,
    start_time: Instant,
}

impl TestLogger {
    pub fn new(test_name: &str) -> Self {
        let separator = "=".repeat(60);
        println!("\n{separator}");
        println!("[TEST START] {test_name}");
        println!("{separator}");
        Self {
            test_name: test_name.to_string(),
            start_time: Instant::now(),
        }
    }

    pub fn step(&self, description: &str) {
        println!(
            "[STEP +{:?}] {description}",
            self.start_time.elapsed()
        );
    }

    pub fn log_input<T: std::fmt::Debug>(&self, name: &str, value: &T) {
        println!("[INPUT] {name}: {value:?}");
    }

    /// Log ids in order, the usual shape of a matrix read.
    pub fn log_ids<'a>(&self, label: &str, ids: impl IntoIterator<Item = &'a str>) {
        let ids: Vec<&str> = ids.into_iter().collect();
        println!("[IDS] {label}: {}", ids.join(", "));
    }

    pub fn pass(&self) {
        println!(
            "[RESULT] {} PASSED in {:?}",
            self.test_name,
            self.start_time.elapsed()
        );
        println!("{}\n", "=".repeat(60));
    }

    pub fn test_name(&self) -> &str {
        &self.test_name
    }
}
