// BCLS Quick Pair Readings
// The simplified pair table and windowed quick-scoring path

use crate::segmenter::validate_digits;
use crate::types::{AnalysisError, LuckLevel};
use serde::{Deserialize, Serialize};

/// One entry of the simplified pair table.
///
/// This table predates the eight-star catalog and survives alongside it:
/// it names a handful of well-known pairs (Phát Tài, Đường Quan, …) with
/// direct 0-10 scores. It deliberately disagrees with the catalog in
/// places ("38" reads Phát Tài here but Lục Sát there); both readings are
/// part of the method.
#[derive(Debug, Clone, Copy)]
pub struct PairMeaning {
    pub pair: &'static str,
    pub name: &'static str,
    pub meaning: &'static str,
    pub score: f64,
}

const PAIR_MEANINGS: &[PairMeaning] = &[
    PairMeaning { pair: "19", name: "Đường Quan", meaning: "Tốt cho công danh sự nghiệp", score: 8.0 },
    PairMeaning { pair: "91", name: "Đường Quan", meaning: "Tốt cho công danh sự nghiệp", score: 8.0 },
    PairMeaning { pair: "28", name: "Sinh Khí", meaning: "Tốt cho sức khỏe và phát triển", score: 9.0 },
    PairMeaning { pair: "82", name: "Sinh Khí", meaning: "Tốt cho sức khỏe và phát triển", score: 9.0 },
    PairMeaning { pair: "37", name: "Diên Niên", meaning: "Ổn định, bền vững", score: 7.0 },
    PairMeaning { pair: "73", name: "Diên Niên", meaning: "Ổn định, bền vững", score: 7.0 },
    PairMeaning { pair: "46", name: "Thiên Y", meaning: "Tốt cho sức khỏe, học tập", score: 8.0 },
    PairMeaning { pair: "64", name: "Thiên Y", meaning: "Tốt cho sức khỏe, học tập", score: 8.0 },
    PairMeaning { pair: "38", name: "Phát Tài", meaning: "Tốt cho tiền bạc, kinh doanh", score: 9.0 },
    PairMeaning { pair: "83", name: "Phát Tài", meaning: "Tốt cho tiền bạc, kinh doanh", score: 9.0 },
    PairMeaning { pair: "29", name: "Thiên Mã", meaning: "Tốt cho di chuyển, giao tiếp", score: 8.0 },
    PairMeaning { pair: "92", name: "Thiên Mã", meaning: "Tốt cho di chuyển, giao tiếp", score: 8.0 },
    PairMeaning { pair: "47", name: "Tuyệt Mệnh", meaning: "Xấu, nên tránh", score: 2.0 },
    PairMeaning { pair: "74", name: "Tuyệt Mệnh", meaning: "Xấu, nên tránh", score: 2.0 },
    PairMeaning { pair: "39", name: "Khả Ái", meaning: "Tốt cho tình cảm, hôn nhân", score: 8.0 },
    PairMeaning { pair: "93", name: "Khả Ái", meaning: "Tốt cho tình cảm, hôn nhân", score: 8.0 },
];

/// Single-digit meanings with neutral-ish scores, used as the fallback
/// when a window hits no table pair.
#[derive(Debug, Clone, Copy)]
pub struct DigitScore {
    pub digit: char,
    pub meaning: &'static str,
    pub score: f64,
}

const SINGLE_DIGITS: &[DigitScore] = &[
    DigitScore { digit: '0', meaning: "Trung tính, gắn liền với khả năng tiếp thu, tích lũy", score: 5.0 },
    DigitScore { digit: '1', meaning: "Tượng trưng cho sự khởi đầu, tiên phong, độc lập", score: 7.0 },
    DigitScore { digit: '2', meaning: "Tượng trưng cho sự hài hòa, hợp tác, kiên nhẫn", score: 6.0 },
    DigitScore { digit: '3', meaning: "Tượng trưng cho sự sáng tạo, biểu đạt, giao tiếp", score: 7.0 },
    DigitScore { digit: '4', meaning: "Tượng trưng cho sự ổn định, thực tế, kiên định", score: 5.0 },
    DigitScore { digit: '5', meaning: "Tượng trưng cho sự tự do, thay đổi, khám phá", score: 7.0 },
    DigitScore { digit: '6', meaning: "Tượng trưng cho sự hài hòa, cân bằng, trách nhiệm", score: 6.0 },
    DigitScore { digit: '7', meaning: "Tượng trưng cho sự phân tích, trí tuệ, tâm linh", score: 6.0 },
    DigitScore { digit: '8', meaning: "Tượng trưng cho sự phát đạt, quyền lực, thành công", score: 8.0 },
    DigitScore { digit: '9', meaning: "Tượng trưng cho sự hoàn thành, lý tưởng, nhân đạo", score: 7.0 },
];

/// Table entry for a 2-digit code, if it is one of the named pairs.
pub fn pair_meaning(pair: &str) -> Option<&'static PairMeaning> {
    PAIR_MEANINGS.iter().find(|p| p.pair == pair)
}

/// Single-digit table entry.
pub fn single_digit(digit: char) -> Option<&'static DigitScore> {
    SINGLE_DIGITS.iter().find(|d| d.digit == digit)
}

/// One scored window of the quick path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickPairReading {
    /// The 2-digit window (or the lone digit for 1-digit input)
    pub pair: String,
    /// 1-based window position
    pub position: usize,
    /// Reading name ("Phát Tài", "Cặp số thông thường", …)
    pub name: String,
    /// Reading text
    pub meaning: String,
    /// 0-10 score of this window
    pub score: f64,
}

/// Quick-path result: windowed readings plus the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAnalysis {
    pub readings: Vec<QuickPairReading>,
    pub total_score: f64,
    pub luck_level: LuckLevel,
}

/// Analyze a digit string over overlapping 2-digit windows.
///
/// Unlike the main pipeline this path has no 0/5 handling: every adjacent
/// window is read, either from the named-pair table or as the average of
/// its two single-digit scores. A 1-digit input produces the single-digit
/// pseudo-reading.
pub fn quick_analyze(digits: &str) -> Result<QuickAnalysis, AnalysisError> {
    validate_digits(digits)?;

    let chars: Vec<char> = digits.chars().collect();
    let mut readings = Vec::new();

    for (idx, window) in chars.windows(2).enumerate() {
        let pair: String = window.iter().collect();
        let reading = match pair_meaning(&pair) {
            Some(info) => QuickPairReading {
                pair,
                position: idx + 1,
                name: info.name.to_string(),
                meaning: info.meaning.to_string(),
                score: info.score,
            },
            None => {
                // Both digits always resolve: the table covers 0-9.
                let first = single_digit(window[0]);
                let second = single_digit(window[1]);
                match (first, second) {
                    (Some(a), Some(b)) => QuickPairReading {
                        pair,
                        position: idx + 1,
                        name: "Cặp số thông thường".to_string(),
                        meaning: format!(
                            "Kết hợp {} ({}) và {} ({})",
                            window[0], a.meaning, window[1], b.meaning
                        ),
                        score: (a.score + b.score) / 2.0,
                    },
                    _ => QuickPairReading {
                        pair: pair.clone(),
                        position: idx + 1,
                        name: "Cặp số không xác định".to_string(),
                        meaning: format!("Không thể phân tích cặp số {} chi tiết.", pair),
                        score: 5.0,
                    },
                }
            }
        };
        readings.push(reading);
    }

    if readings.is_empty() {
        // 1-digit input: emit the single-digit pseudo-reading
        if let Some(info) = chars.first().and_then(|c| single_digit(*c)) {
            readings.push(QuickPairReading {
                pair: digits.to_string(),
                position: 1,
                name: "Số đơn".to_string(),
                meaning: info.meaning.to_string(),
                score: info.score,
            });
        }
    }

    let total_score = if readings.is_empty() {
        0.0
    } else {
        readings.iter().map(|r| r.score).sum::<f64>() / readings.len() as f64
    };

    Ok(QuickAnalysis {
        readings,
        total_score,
        luck_level: LuckLevel::from_score(total_score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phat_tai_reading() {
        let info = pair_meaning("38").unwrap();
        assert_eq!(info.name, "Phát Tài");
        assert_eq!(info.meaning, "Tốt cho tiền bạc, kinh doanh");
        assert_eq!(info.score, 9.0);
    }

    #[test]
    fn test_tuyet_menh_reading() {
        let info = pair_meaning("47").unwrap();
        assert_eq!(info.name, "Tuyệt Mệnh");
        assert_eq!(info.score, 2.0);
    }

    #[test]
    fn test_unnamed_pair_is_absent() {
        assert!(pair_meaning("12").is_none());
        assert!(pair_meaning("00").is_none());
    }

    #[test]
    fn test_quick_analyze_windows() {
        let result = quick_analyze("3838").unwrap();
        // Windows: 38, 83, 38 — all Phát Tài family
        assert_eq!(result.readings.len(), 3);
        assert_eq!(result.readings[0].name, "Phát Tài");
        assert_eq!(result.readings[1].pair, "83");
        assert_eq!(result.total_score, 9.0);
        assert_eq!(result.luck_level, LuckLevel::RatTot);
    }

    #[test]
    fn test_quick_analyze_fallback_window() {
        let result = quick_analyze("12").unwrap();
        assert_eq!(result.readings.len(), 1);
        assert_eq!(result.readings[0].name, "Cặp số thông thường");
        // (7 + 6) / 2
        assert_eq!(result.readings[0].score, 6.5);
    }

    #[test]
    fn test_quick_analyze_single_digit() {
        let result = quick_analyze("8").unwrap();
        assert_eq!(result.readings.len(), 1);
        assert_eq!(result.readings[0].name, "Số đơn");
        assert_eq!(result.total_score, 8.0);
    }

    #[test]
    fn test_quick_analyze_rejects_bad_input() {
        assert!(quick_analyze("").is_err());
        assert!(quick_analyze("12a4").is_err());
    }
}
