use super::cards_types::Card;

/// Centralized helper for parsing hardcoded card tokens in fixtures and scripted deals.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens into Card instances.
    ///
    /// Only for tokens known to be valid (tests, scripted scenarios).
    ///
    /// # Arguments
    /// * `tokens` - Slice of hardcoded card token strings (e.g., ["AS", "2C", "TH"])
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }
}
