// BCLS Recommendation Generator
// Turns a score and star sequence into advisory strings

use crate::types::{Star, StarMatch};

/// Adjusted-energy threshold above which a pair counts as "strong".
///
/// The canonical convention is the raw energy scale: ≥ 3 is the HIGH tier.
pub const STRONG_PAIR_ENERGY: f64 = 3.0;

/// Score below which the generic change-your-number caution fires.
const LOW_SCORE: f64 = 6.0;

/// Generate recommendations from the presentation score and the mapped
/// star sequence.
///
/// The rules fire independently and in a fixed order, so a result can
/// carry zero, one, or several advisories; when none fires, a neutral
/// fallback sentence is emitted instead. Deterministic for equal inputs.
pub fn recommend(score: f64, matches: &[StarMatch]) -> Vec<String> {
    let mut recommendations = Vec::new();

    // Rule 1: low overall score
    if score < LOW_SCORE {
        recommendations
            .push("Số này có điểm phong thủy thấp, nên cân nhắc thay đổi nếu có thể.".to_string());
    }

    // Rule 2: every Tuyệt Mệnh pair gets its own warning
    let mut has_bad_pair = false;
    for m in matches {
        if m.star == Star::TuyetMenh {
            recommendations.push(format!(
                "Cặp số {} ở vị trí {} là Tuyệt Mệnh, nên tránh.",
                m.raw, m.position
            ));
            has_bad_pair = true;
        }
    }

    // Rule 3: strong/mild keep, only when no Tuyệt Mệnh warning fired
    if score >= 8.0 && !has_bad_pair {
        recommendations.push("Đây là số có phong thủy rất tốt, nên giữ lại.".to_string());
    } else if score >= 7.0 && !has_bad_pair {
        recommendations.push("Đây là số có phong thủy tốt.".to_string());
    }

    // Rule 4: many strong pairs
    let strong_pairs = matches
        .iter()
        .filter(|m| m.adjusted_energy >= STRONG_PAIR_ENERGY)
        .count();
    if strong_pairs >= 3 {
        recommendations.push(format!(
            "Số này có {} cặp số năng lượng mạnh, rất hợp phong thủy.",
            strong_pairs
        ));
    }

    // Rule 5: neutral fallback
    if recommendations.is_empty() {
        recommendations
            .push("Đánh giá phong thủy dựa trên điểm số và các cặp số cụ thể.".to_string());
    }

    recommendations
}
