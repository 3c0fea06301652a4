// BCLS Pattern Analyzer
// Main engine orchestrating segmentation, mapping, scoring and advice

use crate::combinations::CombinationIndex;
use crate::digits::key_position_readings;
use crate::mapper::{ResponseFactors, StarMapper};
use crate::recommend::recommend;
use crate::segmenter::{normalize, normalize_phone, segment, validate_digits};
use crate::taxonomy::Catalog;
use crate::types::{
    AnalysisError, AnalysisResult, CombinationHit, LuckLevel, StarMatch,
};

/// Factor rescaling the 1-4 mean energy onto the 0-10 presentation scale.
///
/// A design choice, not a contract: any monotonic rescaling that keeps the
/// luck-level bands meaningful would do.
pub const SCORE_SCALE: f64 = 2.5;

/// Digit count of a normalized Vietnamese mobile number.
pub const PHONE_LENGTH: usize = 10;

/// Digit count of a CCCD serial suffix.
pub const CCCD_SUFFIX_LENGTH: usize = 6;

/// Main Bát Cục Linh Số analysis engine
///
/// Combines all components:
/// - Digit segmentation (0/5 modifier handling)
/// - Star mapping (taxonomy lookup + energy adjustment)
/// - Combination detection (ordered adjacent star pairs)
/// - Scoring and luck-level banding
/// - Recommendation generation
///
/// The engine is pure and cache-free: static tables are built once in
/// [`Analyzer::new`] and every call recomputes deterministically, so one
/// instance can serve any number of threads concurrently.
#[derive(Debug, Clone)]
pub struct Analyzer {
    /// Star mapper over the code catalog
    mapper: StarMapper,

    /// Ordered star-pair combination index
    combinations: CombinationIndex,
}

impl Analyzer {
    /// Create an analyzer with default response factors.
    pub fn new() -> Self {
        Self::with_factors(ResponseFactors::new())
    }

    /// Create an analyzer with custom per-star response factors.
    pub fn with_factors(factors: ResponseFactors) -> Self {
        Self {
            mapper: StarMapper::new(Catalog::new(), factors),
            combinations: CombinationIndex::new(),
        }
    }

    /// Analyze a digit string.
    ///
    /// # Arguments
    /// * `digits` - ASCII digit string, length ≥ 1 (fixed-format length
    ///   checks belong to the callers or the helpers below)
    ///
    /// # Errors
    /// [`AnalysisError`] when the input is empty or contains a non-digit
    /// character; nothing else. Unrecognized groups degrade to unknown
    /// star matches instead of failing.
    pub fn analyze(&self, digits: &str) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_inner(digits, None)
    }

    /// Analyze a digit string and score it against a usage purpose.
    ///
    /// An unknown purpose yields a result without purpose compatibility,
    /// not an error.
    pub fn analyze_with_purpose(
        &self,
        digits: &str,
        purpose: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_inner(digits, Some(purpose))
    }

    /// Analyze a phone number in any common formatting.
    ///
    /// Normalizes punctuation and the `+84` country code first, then
    /// requires exactly 10 digits. The result additionally carries the
    /// key-position readings.
    pub fn analyze_phone(
        &self,
        raw: &str,
        purpose: Option<&str>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let digits = normalize_phone(raw);
        if digits.len() != PHONE_LENGTH {
            return Err(AnalysisError::InvalidLength {
                expected: PHONE_LENGTH,
                actual: digits.len(),
            });
        }
        let mut result = self.analyze_inner(&digits, purpose)?;
        result.key_positions = key_position_readings(&digits);
        Ok(result)
    }

    /// Analyze the 6-digit serial suffix of a CCCD number.
    pub fn analyze_cccd_suffix(
        &self,
        raw: &str,
        purpose: Option<&str>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let digits = normalize(raw);
        if digits.len() != CCCD_SUFFIX_LENGTH {
            return Err(AnalysisError::InvalidLength {
                expected: CCCD_SUFFIX_LENGTH,
                actual: digits.len(),
            });
        }
        self.analyze_inner(&digits, purpose)
    }

    fn analyze_inner(
        &self,
        digits: &str,
        purpose: Option<&str>,
    ) -> Result<AnalysisResult, AnalysisError> {
        // Step 1: validate shape
        validate_digits(digits)?;
        tracing::debug!(digits, "analyzing digit string");

        // Step 2: segment and map
        let groups = segment(digits);
        let star_matches = self.mapper.map_sequence(&groups);

        // Step 3: ordered adjacent-pair combinations
        let combinations = self.collect_combinations(&star_matches);

        // Step 4: score and band
        let total_score = Self::total_score(&star_matches);
        let luck_level = LuckLevel::from_score(total_score);

        // Step 5: advice
        let recommendations = recommend(total_score, &star_matches);

        // Step 6: optional purpose fit
        let purpose_compatibility =
            purpose.and_then(|p| crate::purpose::score_purpose(&star_matches, p));

        tracing::debug!(
            groups = star_matches.len(),
            combinations = combinations.len(),
            total_score,
            "analysis complete"
        );

        Ok(AnalysisResult {
            input: digits.to_string(),
            special_effect: Self::special_effect(digits),
            star_matches,
            combinations,
            total_score,
            luck_level,
            recommendations,
            purpose_compatibility,
            key_positions: Vec::new(),
        })
    }

    /// Look up every ordered adjacent star pair. The reversed pair is a
    /// distinct key and is never tried as a fallback.
    fn collect_combinations(&self, matches: &[StarMatch]) -> Vec<CombinationHit> {
        matches
            .windows(2)
            .filter_map(|pair| {
                let (first, second) = (&pair[0], &pair[1]);
                self.combinations
                    .lookup(first.star, second.star)
                    .map(|combo| CombinationHit {
                        first_group: first.raw.clone(),
                        second_group: second.raw.clone(),
                        first_star: first.star,
                        second_star: second.star,
                        name: combo.name.to_string(),
                        description: combo.description.to_string(),
                        detailed_description: combo.detailed_description.to_string(),
                    })
            })
            .collect()
    }

    /// Mean adjusted energy rescaled onto 0-10 and capped.
    fn total_score(matches: &[StarMatch]) -> f64 {
        if matches.is_empty() {
            return 0.0;
        }
        let mean =
            matches.iter().map(|m| m.adjusted_energy).sum::<f64>() / matches.len() as f64;
        (mean * SCORE_SCALE).min(10.0)
    }

    /// Human-readable note about the 0/5 modifiers in the whole input.
    fn special_effect(digits: &str) -> Option<String> {
        let has_zero = digits.contains('0');
        let has_five = digits.contains('5');
        match (has_zero, has_five) {
            (true, true) => Some(
                "Số 0 làm giảm năng lượng của các sao, Số 5 tăng cường năng lượng của các sao"
                    .to_string(),
            ),
            (true, false) => Some("Số 0 làm giảm năng lượng của các sao".to_string()),
            (false, true) => Some("Số 5 tăng cường năng lượng của các sao".to_string()),
            (false, false) => None,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
