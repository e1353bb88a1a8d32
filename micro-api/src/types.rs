/// Result of a successful check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutput {
    /// Number of tokens the scanner produced
    pub token_count: usize,
}
