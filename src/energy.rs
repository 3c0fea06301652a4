// BCLS Energy Number
// Digit-sum energy numbers and the five-element mapping

use crate::segmenter::validate_digits;
use crate::types::AnalysisError;
use serde::{Deserialize, Serialize};

/// The five elements (ngũ hành) an energy number maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiveElement {
    /// Thủy - water
    Thuy,
    /// Thổ - earth
    Tho,
    /// Mộc - wood
    Moc,
    /// Kim - metal
    Kim,
    /// Hỏa - fire
    Hoa,
}

impl std::fmt::Display for FiveElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FiveElement::Thuy => "Thủy",
            FiveElement::Tho => "Thổ",
            FiveElement::Moc => "Mộc",
            FiveElement::Kim => "Kim",
            FiveElement::Hoa => "Hỏa",
        };
        write!(f, "{}", label)
    }
}

const ENERGY_MEANINGS: [&str; 9] = [
    "Chủ động, sáng tạo, khởi đầu mới, độc lập",
    "Hợp tác, cân bằng, kiên nhẫn, bền bỉ",
    "Phát triển, mở rộng, linh hoạt, sáng tạo",
    "Ổn định, chắc chắn, kỷ luật, xây dựng",
    "Thay đổi, linh hoạt, tự do, phiêu lưu",
    "Hài hòa, trách nhiệm, phụng sự, cống hiến",
    "Phân tích, chiêm nghiệm, trí tuệ, tâm linh",
    "Thịnh vượng, quyền lực, thành tựu, vật chất",
    "Hoàn thành, viên mãn, lý tưởng, nhân đạo",
];

/// Digit-sum energy number: `sum % 9`, with 0 wrapping to 9.
///
/// Always in 1..=9 for valid input.
pub fn energy_number(digits: &str) -> Result<u8, AnalysisError> {
    validate_digits(digits)?;
    let sum: u32 = digits.chars().map(|c| c.to_digit(10).unwrap_or(0)).sum();
    let energy = (sum % 9) as u8;
    Ok(if energy == 0 { 9 } else { energy })
}

/// Element of an energy number (1..=9; out-of-range values clamp to 9).
pub fn element_for(energy: u8) -> FiveElement {
    match energy {
        1 | 7 => FiveElement::Thuy,
        2 | 5 => FiveElement::Tho,
        3 | 8 => FiveElement::Moc,
        4 | 6 => FiveElement::Kim,
        _ => FiveElement::Hoa,
    }
}

/// Meaning string of an energy number (1..=9).
pub fn energy_meaning(energy: u8) -> Option<&'static str> {
    if (1..=9).contains(&energy) {
        Some(ENERGY_MEANINGS[energy as usize - 1])
    } else {
        None
    }
}
