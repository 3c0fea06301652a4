// BCLS Digit Meanings
// Per-digit readings for the key positions of a number

use crate::types::{KeyPosition, KeyPositionReading};

const SINGLE_DIGIT_MEANINGS: &[(char, &str)] = &[
    ('1', "Nội tâm cô độc, có năng lực"),
    ('2', "Hữu duyên với tông giáo tín ngưỡng, phật, Cơ đốc giáo, thân tâm linh, linh tính trí tuệ"),
    ('3', "Quý nhân duyên vượng, người rất chịu khó"),
    ('4', "Cát tường, duyên với quý nhân"),
    ('5', "Kiện cáo (công việc liên quan đến tòa án, luật sư có thể dùng), 5 năm nhất định có kiện cáo"),
    ('6', "Hư lừa dối không thật, không gạt người chính là nhất định bị người khác lừa gạt"),
    ('7', "Sầu lo, suy nghĩ lung tung"),
    ('8', "Áp lực tương đối lớn"),
    ('9', "Trí tuệ (kiếm tiền)"),
    ('0', "Nỗ lực nhiều, không có hồi báo"),
];

const THIRD_FROM_END_MEANINGS: &[(char, &str)] = &[
    ('1', "Nghỉ ngơi lấy lại sức, mãn tính đau nhức, tĩnh dưỡng dùng tương đối tốt, tương đối lười, không muốn làm việc"),
    ('2', "Sức khỏe tương đối kém, dễ bị bệnh, tử khí thành, chuyện gì cũng đều sa sút"),
    ('3', "Không chịu thua không phục, dễ kích động, đàm luận bất cứ chuyện gì đều có tranh luận, dễ xảy ra tai nạn"),
    ('4', "Thích nghiên cứu các ngành nghề kỹ thuật (nghiên cứu không ra kết quả) tự cho là đúng"),
    ('5', "Sự nghiệp công việc, tình cảm dễ trì trệ không tiến, giữ nguyên hiện trạng, làm cố vấn tốt"),
    ('6', "Việc vui nhiều, tài vận có, có xung động, năng lực khai sáng mạnh, có quyền uy, dễ thành công"),
    ('7', "Khẩu tài tốt, dễ chiêu kiện cáo, dễ biến hóa, không thủ tín, thay đổi thất thường"),
    ('8', "Tài vận, sự nghiệp rất tốt, năng lực mạnh, có tài, an phận thủ thường, có nguyên tắc"),
    ('9', "Thích chưng diện, hoạt bát sáng sủa, giỏi về tạo không khí, có ánh mắt còn có trí thông minh"),
    ('0', "Năng lực mạnh, năng lượng mạnh, phát huy không nổi"),
];

const FIFTH_FROM_END_MEANINGS: &[(char, &str)] = &[
    ('1', "Năng lực lãnh đạo, thích hợp làm thống soái đoàn đội, có sự liều lĩnh"),
    ('2', "Giảo hoạt, âm xấu, loạn sự tỉnh quấn thân, thích văn hóa thần bí, cãi vã thị phi"),
    ('3', "Người này đặc biệt dễ đi cực đoan, tư duy cực đoan, thích độc lai độc vãng"),
    ('4', "Quan hệ nhân mạch tốt, nhiều quý nhân"),
    ('5', "Xấu, bá đạo, gấp gáp, dễ tai nạn xe cộ, có họa sát thân, làm việc không thành, dễ lỗ vốn"),
    ('6', "Thông minh, cả gan làm loạn, thích âm thầm làm việc, dễ phá tài, dễ phạm thị phi"),
    ('7', "Phục vị, vô luận sự nghiệp tình cảm đều trì trệ không tiến, cố chấp, tiêu cực, hẹp hòi"),
    ('8', "Tầm nhìn rộng lớn, khoáng đạt, có tài lãnh đạo, trượng nghĩa, năng lực hành động mạnh"),
    ('9', "Chỉnh hợp bên người hết thảy tài nguyên, toàn lực ứng phó, góp nhặt tài nguyên"),
    ('0', "Không, nỗ lực thế nào đều không có kết quả"),
];

fn lookup(table: &[(char, &'static str)], digit: char) -> Option<&'static str> {
    table.iter().find(|(d, _)| *d == digit).map(|(_, m)| *m)
}

/// General meaning of a single digit.
pub fn digit_meaning(digit: char) -> Option<&'static str> {
    lookup(SINGLE_DIGIT_MEANINGS, digit)
}

/// Reading for the digit sitting 3rd from the end of a number.
pub fn third_from_end_meaning(digit: char) -> Option<&'static str> {
    lookup(THIRD_FROM_END_MEANINGS, digit)
}

/// Reading for the digit sitting 5th from the end of a number.
pub fn fifth_from_end_meaning(digit: char) -> Option<&'static str> {
    lookup(FIFTH_FROM_END_MEANINGS, digit)
}

/// Key-position readings for a digit string.
///
/// Emits whichever of the three positions the input is long enough to
/// have: last digit (len ≥ 1), 3rd from end (len ≥ 3), 5th from end
/// (len ≥ 5). Non-digit characters simply produce no reading.
pub fn key_position_readings(digits: &str) -> Vec<KeyPositionReading> {
    let chars: Vec<char> = digits.chars().collect();
    let mut readings = Vec::new();

    let mut push = |position: KeyPosition, offset_from_end: usize, table: &[(char, &'static str)]| {
        if chars.len() >= offset_from_end {
            let digit = chars[chars.len() - offset_from_end];
            if let Some(meaning) = lookup(table, digit) {
                readings.push(KeyPositionReading {
                    position,
                    digit,
                    meaning: meaning.to_string(),
                });
            }
        }
    };

    push(KeyPosition::LastDigit, 1, SINGLE_DIGIT_MEANINGS);
    push(KeyPosition::ThirdFromEnd, 3, THIRD_FROM_END_MEANINGS);
    push(KeyPosition::FifthFromEnd, 5, FIFTH_FROM_END_MEANINGS);

    readings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_cover_all_digits() {
        for d in '0'..='9' {
            assert!(digit_meaning(d).is_some());
            assert!(third_from_end_meaning(d).is_some());
            assert!(fifth_from_end_meaning(d).is_some());
        }
        assert!(digit_meaning('x').is_none());
    }

    #[test]
    fn test_key_positions_full_phone() {
        let readings = key_position_readings("0912345678");
        assert_eq!(readings.len(), 3);

        assert_eq!(readings[0].position, KeyPosition::LastDigit);
        assert_eq!(readings[0].digit, '8');

        assert_eq!(readings[1].position, KeyPosition::ThirdFromEnd);
        assert_eq!(readings[1].digit, '6');

        assert_eq!(readings[2].position, KeyPosition::FifthFromEnd);
        assert_eq!(readings[2].digit, '4');
    }

    #[test]
    fn test_key_positions_short_input() {
        let readings = key_position_readings("678");
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].position, KeyPosition::LastDigit);
        assert_eq!(readings[1].position, KeyPosition::ThirdFromEnd);
        assert_eq!(readings[1].digit, '6');

        assert!(key_position_readings("").is_empty());
    }
}
