// BCLS Type Definitions
// Core types for digit segmentation and pattern analysis results

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The eight stars of the Bát Cục Linh Số taxonomy, plus the fallback
/// identity for digit groups that match no taxonomy entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Star {
    /// Sinh Khí - benefactors, optimism (auspicious)
    SinhKhi,
    /// Thiên Y - wealth, affection (auspicious)
    ThienY,
    /// Diên Niên - professional mastery (auspicious)
    DienNien,
    /// Phục Vị - endurance, inertia (mixed)
    PhucVi,
    /// Họa Hại - disputes, expenditure (inauspicious)
    HoaHai,
    /// Lục Sát - conflict in relationships (inauspicious)
    LucSat,
    /// Ngũ Quỷ - misfortune, illness (inauspicious)
    NguQuy,
    /// Tuyệt Mệnh - dead ends, despair (most inauspicious)
    TuyetMenh,
    /// No taxonomy entry matched the digit group
    Unknown,
}

impl Star {
    /// The eight real stars, in canonical order (excludes [`Star::Unknown`]).
    pub const ALL: [Star; 8] = [
        Star::SinhKhi,
        Star::ThienY,
        Star::DienNien,
        Star::PhucVi,
        Star::HoaHai,
        Star::LucSat,
        Star::NguQuy,
        Star::TuyetMenh,
    ];

    /// Canonical Vietnamese name of the star.
    pub fn vietnamese_name(&self) -> &'static str {
        match self {
            Star::SinhKhi => "Sinh Khí",
            Star::ThienY => "Thiên Y",
            Star::DienNien => "Diên Niên",
            Star::PhucVi => "Phục Vị",
            Star::HoaHai => "Họa Hại",
            Star::LucSat => "Lục Sát",
            Star::NguQuy => "Ngũ Quỷ",
            Star::TuyetMenh => "Tuyệt Mệnh",
            Star::Unknown => "Không xác định",
        }
    }

    /// True for the auspicious stars (tứ cát tinh, Phục Vị excluded as mixed).
    pub fn is_auspicious(&self) -> bool {
        matches!(self, Star::SinhKhi | Star::ThienY | Star::DienNien)
    }

    /// True for the four inauspicious stars (tứ hung tinh).
    pub fn is_inauspicious(&self) -> bool {
        matches!(
            self,
            Star::HoaHai | Star::LucSat | Star::NguQuy | Star::TuyetMenh
        )
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.vietnamese_name())
    }
}

/// Valence of a star definition.
///
/// The zero-variant twins carry the "hóa hung" natures: the base valence
/// degraded by an embedded zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarNature {
    /// Cát - auspicious
    Auspicious,
    /// Hung - inauspicious
    Inauspicious,
    /// Cát/Hung - can act either way (Phục Vị)
    Mixed,
    /// Cát hóa hung - auspicious turned bad by a zero
    AuspiciousTurnedBad,
    /// Hung hóa hung - inauspicious made worse by a zero
    InauspiciousWorsened,
}

impl std::fmt::Display for StarNature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StarNature::Auspicious => "Cát",
            StarNature::Inauspicious => "Hung",
            StarNature::Mixed => "Cát/Hung",
            StarNature::AuspiciousTurnedBad => "Cát hóa hung",
            StarNature::InauspiciousWorsened => "Hung hóa hung",
        };
        write!(f, "{}", label)
    }
}

/// Qualitative tier of an adjusted energy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnergyTier {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl EnergyTier {
    /// Tier thresholds: ≥4 VERY_HIGH, ≥3 HIGH, ≥2 MEDIUM, else LOW.
    ///
    /// Adjusted energies can be fractional (zero-variant tables), so the
    /// bands are half-open ranges rather than exact integer matches.
    pub fn from_energy(energy: f64) -> Self {
        if energy >= 4.0 {
            EnergyTier::VeryHigh
        } else if energy >= 3.0 {
            EnergyTier::High
        } else if energy >= 2.0 {
            EnergyTier::Medium
        } else {
            EnergyTier::Low
        }
    }
}

/// Five-tier luck label derived from the 0-10 presentation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuckLevel {
    /// Rất tốt (score ≥ 8)
    RatTot,
    /// Tốt (score ≥ 7)
    Tot,
    /// Khá (score ≥ 6)
    Kha,
    /// Trung bình (score ≥ 5)
    TrungBinh,
    /// Kém (score < 5)
    Kem,
}

impl LuckLevel {
    /// Band a 0-10 score into its luck level.
    ///
    /// The five bands are disjoint and exhaustive over [0, 10].
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            LuckLevel::RatTot
        } else if score >= 7.0 {
            LuckLevel::Tot
        } else if score >= 6.0 {
            LuckLevel::Kha
        } else if score >= 5.0 {
            LuckLevel::TrungBinh
        } else {
            LuckLevel::Kem
        }
    }
}

impl std::fmt::Display for LuckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LuckLevel::RatTot => "Rất tốt",
            LuckLevel::Tot => "Tốt",
            LuckLevel::Kha => "Khá",
            LuckLevel::TrungBinh => "Trung bình",
            LuckLevel::Kem => "Kém",
        };
        write!(f, "{}", label)
    }
}

/// One segmented digit group, before star mapping.
///
/// Ephemeral: produced fresh per analysis call and consumed by the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedGroup {
    /// The raw slice of the input, including any 0/5 modifiers
    pub raw: String,

    /// The group with all 0/5 characters stripped (at most 2 digits)
    pub clean: String,

    /// Number of embedded zeros
    pub zero_count: usize,

    /// Number of embedded fives
    pub five_count: usize,
}

impl SegmentedGroup {
    /// Build a group from a raw slice, deriving the clean core and the
    /// modifier counts.
    pub fn from_raw(raw: &str) -> Self {
        let clean: String = raw.chars().filter(|c| *c != '0' && *c != '5').collect();
        Self {
            raw: raw.to_string(),
            clean,
            zero_count: raw.chars().filter(|c| *c == '0').count(),
            five_count: raw.chars().filter(|c| *c == '5').count(),
        }
    }
}

/// One digit group mapped onto the star taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarMatch {
    /// Raw digit group as segmented (with 0/5 modifiers)
    pub raw: String,

    /// Clean core the star lookup used
    pub clean: String,

    /// 1-based position of the group in the sequence
    pub position: usize,

    /// Matched star identity ([`Star::Unknown`] when nothing matched)
    pub star: Star,

    /// Star name snapshot (empty for unknown matches)
    pub name: String,

    /// Star valence; the zero-variant nature when the raw group is a
    /// known zero code
    pub nature: Option<StarNature>,

    /// Short description snapshot (empty for unknown matches)
    pub description: String,

    /// Base energy from the taxonomy energy table (1 for unknown)
    pub base_energy: f64,

    /// Embedded zero count of the group
    pub zero_count: usize,

    /// Embedded five count of the group
    pub five_count: usize,

    /// `max(1, base + fives - zeros)`
    pub adjusted_energy: f64,

    /// Qualitative tier of the adjusted energy
    pub tier: EnergyTier,

    /// Whether the group carries at least one zero modifier
    pub is_zero_variant: bool,

    /// Per-star response factor applied to the adjusted energy
    pub response_factor: f64,

    /// `adjusted_energy × response_factor`
    pub weighted_energy: f64,
}

/// A recognized combination of two adjacent stars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationHit {
    /// Raw digits of the first group
    pub first_group: String,

    /// Raw digits of the second group
    pub second_group: String,

    /// First star of the ordered pair
    pub first_star: Star,

    /// Second star of the ordered pair
    pub second_star: Star,

    /// Combination name, e.g. "Sinh Khí + Thiên Y"
    pub name: String,

    /// Short interpretation
    pub description: String,

    /// Detailed interpretation
    pub detailed_description: String,
}

/// Key positions within a fixed-length number that carry their own
/// digit readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPosition {
    LastDigit,
    ThirdFromEnd,
    FifthFromEnd,
}

impl std::fmt::Display for KeyPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            KeyPosition::LastDigit => "số cuối",
            KeyPosition::ThirdFromEnd => "số thứ 3 từ cuối",
            KeyPosition::FifthFromEnd => "số thứ 5 từ cuối",
        };
        write!(f, "{}", label)
    }
}

/// Reading for one key position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPositionReading {
    pub position: KeyPosition,
    pub digit: char,
    pub meaning: String,
}

/// Qualitative purpose-compatibility band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatibilityLevel {
    /// Rất phù hợp (score ≥ 0.5)
    RatPhuHop,
    /// Phù hợp (score ≥ 0)
    PhuHop,
    /// Không phù hợp (score ≥ -0.5)
    KhongPhuHop,
    /// Rất không phù hợp (score < -0.5)
    RatKhongPhuHop,
}

impl CompatibilityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.5 {
            CompatibilityLevel::RatPhuHop
        } else if score >= 0.0 {
            CompatibilityLevel::PhuHop
        } else if score >= -0.5 {
            CompatibilityLevel::KhongPhuHop
        } else {
            CompatibilityLevel::RatKhongPhuHop
        }
    }
}

impl std::fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CompatibilityLevel::RatPhuHop => "Rất phù hợp",
            CompatibilityLevel::PhuHop => "Phù hợp",
            CompatibilityLevel::KhongPhuHop => "Không phù hợp",
            CompatibilityLevel::RatKhongPhuHop => "Rất không phù hợp",
        };
        write!(f, "{}", label)
    }
}

/// Purpose-fit result for a star sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurposeCompatibility {
    /// Display name of the purpose, e.g. "Kinh doanh"
    pub purpose: String,

    /// Stars counted as favorable for this purpose
    pub favorable_stars: Vec<Star>,

    /// Stars counted as unfavorable for this purpose
    pub unfavorable_stars: Vec<Star>,

    /// How many matches hit a favorable star
    pub favorable_count: usize,

    /// How many matches hit an unfavorable star
    pub unfavorable_count: usize,

    /// `(favorable - unfavorable) / total matches`, in [-1, 1]
    pub compatibility_score: f64,

    /// Qualitative band of the score
    pub compatibility_level: CompatibilityLevel,
}

/// The engine's output contract: everything the calling layer needs to
/// render or serialize an analysis.
///
/// Immutable once returned; the engine recomputes deterministically from
/// the same input and never caches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The analyzed digit string (post-normalization)
    pub input: String,

    /// Ordered star matches, one per segmented group
    pub star_matches: Vec<StarMatch>,

    /// Recognized adjacent-pair combinations, in sequence order
    pub combinations: Vec<CombinationHit>,

    /// Aggregate score on the 0-10 presentation scale
    pub total_score: f64,

    /// Luck label derived from `total_score`
    pub luck_level: LuckLevel,

    /// Advisory strings from the recommendation rules
    pub recommendations: Vec<String>,

    /// Summary of the 0/5 modifier influence, when any is present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_effect: Option<String>,

    /// Purpose-fit scoring, when a known purpose was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose_compatibility: Option<PurposeCompatibility>,

    /// Key-position readings (populated by the phone helper)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub key_positions: Vec<KeyPositionReading>,
}

/// Input validation errors.
///
/// The only error kind the engine raises; everything else degrades to
/// neutral data states instead of failing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Invalid input: empty, expected at least one digit")]
    Empty,

    #[error("Invalid character '{ch}' in input: only ASCII digits allowed")]
    InvalidDigit { ch: char },

    #[error("Invalid length {actual}: expected exactly {expected} digits")]
    InvalidLength { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_display() {
        assert_eq!(Star::SinhKhi.to_string(), "Sinh Khí");
        assert_eq!(Star::TuyetMenh.to_string(), "Tuyệt Mệnh");
        assert_eq!(Star::Unknown.to_string(), "Không xác định");
    }

    #[test]
    fn test_star_valence() {
        assert!(Star::ThienY.is_auspicious());
        assert!(Star::TuyetMenh.is_inauspicious());
        assert!(!Star::Unknown.is_auspicious());
        assert!(!Star::Unknown.is_inauspicious());
    }

    #[test]
    fn test_energy_tiers() {
        assert_eq!(EnergyTier::from_energy(4.5), EnergyTier::VeryHigh);
        assert_eq!(EnergyTier::from_energy(4.0), EnergyTier::VeryHigh);
        assert_eq!(EnergyTier::from_energy(3.0), EnergyTier::High);
        assert_eq!(EnergyTier::from_energy(2.5), EnergyTier::Medium);
        assert_eq!(EnergyTier::from_energy(1.0), EnergyTier::Low);
    }

    #[test]
    fn test_luck_level_bands() {
        assert_eq!(LuckLevel::from_score(8.0).to_string(), "Rất tốt");
        assert_eq!(LuckLevel::from_score(7.5).to_string(), "Tốt");
        assert_eq!(LuckLevel::from_score(6.0).to_string(), "Khá");
        assert_eq!(LuckLevel::from_score(5.0).to_string(), "Trung bình");
        assert_eq!(LuckLevel::from_score(4.9).to_string(), "Kém");
        assert_eq!(LuckLevel::from_score(0.0).to_string(), "Kém");
    }

    #[test]
    fn test_compatibility_bands() {
        assert_eq!(
            CompatibilityLevel::from_score(0.5),
            CompatibilityLevel::RatPhuHop
        );
        assert_eq!(
            CompatibilityLevel::from_score(0.0),
            CompatibilityLevel::PhuHop
        );
        assert_eq!(
            CompatibilityLevel::from_score(-0.3),
            CompatibilityLevel::KhongPhuHop
        );
        assert_eq!(
            CompatibilityLevel::from_score(-0.8),
            CompatibilityLevel::RatKhongPhuHop
        );
    }

    #[test]
    fn test_segmented_group_from_raw() {
        let group = SegmentedGroup::from_raw("905");
        assert_eq!(group.clean, "9");
        assert_eq!(group.zero_count, 1);
        assert_eq!(group.five_count, 1);
    }

    #[test]
    fn test_error_display() {
        let err = AnalysisError::InvalidDigit { ch: 'x' };
        assert!(err.to_string().contains('x'));

        let err = AnalysisError::InvalidLength {
            expected: 10,
            actual: 9,
        };
        assert!(err.to_string().contains("10"));
    }
}
