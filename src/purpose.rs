// BCLS Purpose-Fit Scorer
// Scores a star sequence against a declared usage purpose

use crate::types::{CompatibilityLevel, PurposeCompatibility, Star, StarMatch};

/// One purpose profile: which stars help and which hurt.
#[derive(Debug, Clone, Copy)]
pub struct PurposeProfile {
    /// Canonical lookup key
    pub key: &'static str,
    /// Vietnamese display name (also accepted as an alias)
    pub name: &'static str,
    /// Stars favorable for this purpose
    pub favorable: &'static [Star],
    /// Stars unfavorable for this purpose
    pub unfavorable: &'static [Star],
}

const PURPOSES: &[PurposeProfile] = &[
    PurposeProfile {
        key: "business",
        name: "Kinh doanh",
        favorable: &[Star::ThienY, Star::DienNien],
        unfavorable: &[Star::TuyetMenh, Star::NguQuy],
    },
    PurposeProfile {
        key: "personal",
        name: "Cá nhân",
        favorable: &[Star::SinhKhi, Star::ThienY],
        unfavorable: &[Star::HoaHai, Star::LucSat],
    },
    PurposeProfile {
        key: "wealth",
        name: "Tài lộc",
        favorable: &[Star::ThienY, Star::SinhKhi],
        unfavorable: &[Star::TuyetMenh, Star::NguQuy],
    },
];

/// Find a purpose profile by key or Vietnamese name, case-insensitively.
///
/// Unknown purposes return `None`: "no purpose-specific scoring available"
/// is a data state, not an error.
pub fn profile_for(purpose: &str) -> Option<&'static PurposeProfile> {
    let wanted = purpose.trim().to_lowercase();
    PURPOSES
        .iter()
        .find(|p| p.key == wanted || p.name.to_lowercase() == wanted)
}

/// Score how well a star sequence suits a purpose.
///
/// `compatibility_score = (favorable − unfavorable) / total matches`,
/// defined as 0 when there are no matches at all.
pub fn score_purpose(matches: &[StarMatch], purpose: &str) -> Option<PurposeCompatibility> {
    let profile = profile_for(purpose)?;

    let favorable_count = matches
        .iter()
        .filter(|m| profile.favorable.contains(&m.star))
        .count();
    let unfavorable_count = matches
        .iter()
        .filter(|m| profile.unfavorable.contains(&m.star))
        .count();

    let total = matches.len();
    let compatibility_score = if total > 0 {
        (favorable_count as f64 - unfavorable_count as f64) / total as f64
    } else {
        0.0
    };

    Some(PurposeCompatibility {
        purpose: profile.name.to_string(),
        favorable_stars: profile.favorable.to_vec(),
        unfavorable_stars: profile.unfavorable.to_vec(),
        favorable_count,
        unfavorable_count,
        compatibility_score,
        compatibility_level: CompatibilityLevel::from_score(compatibility_score),
    })
}
