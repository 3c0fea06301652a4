// BCLS Combination Taxonomy
// Ordered star-pair interpretations

use crate::types::Star;
use rustc_hash::FxHashMap;

/// Interpretation attached to one ordered pair of adjacent stars.
#[derive(Debug, Clone, Copy)]
pub struct CombinationDefinition {
    /// First star of the ordered pair
    pub first: Star,
    /// Second star of the ordered pair
    pub second: Star,
    /// Display name
    pub name: &'static str,
    /// Short interpretation
    pub description: &'static str,
    /// Detailed interpretation
    pub detailed_description: &'static str,
}

const COMBINATIONS: &[CombinationDefinition] = &[
    CombinationDefinition {
        first: Star::SinhKhi,
        second: Star::SinhKhi,
        name: "Sinh Khí + Sinh Khí",
        description: "Quý nhân tăng cường, vận may nhân đôi",
        detailed_description: "Khi hai sao Sinh Khí kết hợp với nhau, tạo thành tổ hợp mạnh mẽ về quý nhân và vận may.
- Quý nhân trợ giúp tăng cường gấp đôi
- Vận may về tài chính và sự nghiệp nhân đôi
- Tính cách lạc quan, nhìn đời tích cực
- Dễ gặp được nhiều cơ hội tốt
- Tình cảm thuận lợi, hạnh phúc
- Sức khỏe tốt, ít bệnh tật",
    },
    CombinationDefinition {
        first: Star::SinhKhi,
        second: Star::ThienY,
        name: "Sinh Khí + Thiên Y",
        description: "Quý nhân mang tài lộc",
        detailed_description: "Khi Sinh Khí kết hợp với Thiên Y, tạo thành tổ hợp mạnh về quý nhân và tài lộc.
- Quý nhân không chỉ giúp đỡ mà còn mang lại tài lộc
- Vận may về tài chính tăng cường
- Tính cách vừa lạc quan vừa thông minh
- Dễ gặp được cơ hội làm ăn tốt
- Tình cảm vừa hạnh phúc vừa ổn định
- Sức khỏe tốt, ít bệnh tật",
    },
    CombinationDefinition {
        first: Star::ThienY,
        second: Star::ThienY,
        name: "Thiên Y + Thiên Y",
        description: "Tài lộc nhân đôi, phú quý song toàn",
        detailed_description: "Khi hai sao Thiên Y kết hợp với nhau, tạo thành tổ hợp mạnh mẽ về tài lộc.
- Tài lộc tăng cường gấp đôi
- Vận may về tiền bạc nhân đôi
- Tính cách thông minh, thiện lương
- Dễ gặp được nhiều cơ hội làm ăn
- Tình cảm ổn định, hạnh phúc
- Sức khỏe tốt, ít bệnh tật",
    },
    CombinationDefinition {
        first: Star::ThienY,
        second: Star::DienNien,
        name: "Thiên Y + Diên Niên",
        description: "Tài lộc đi đôi với sự nghiệp",
        detailed_description: "Khi Thiên Y kết hợp với Diên Niên, tạo thành tổ hợp mạnh về tài lộc và sự nghiệp.
- Tài lộc đi đôi với sự nghiệp phát triển
- Vận may về công việc và tiền bạc
- Tính cách vừa thông minh vừa có trách nhiệm
- Dễ gặp được cơ hội thăng tiến
- Tình cảm ổn định, hạnh phúc
- Sức khỏe tốt, ít bệnh tật",
    },
    CombinationDefinition {
        first: Star::DienNien,
        second: Star::DienNien,
        name: "Diên Niên + Diên Niên",
        description: "Sự nghiệp thăng tiến, quyền lực tăng cường",
        detailed_description: "Khi hai sao Diên Niên kết hợp với nhau, tạo thành tổ hợp mạnh mẽ về sự nghiệp.
- Sự nghiệp thăng tiến nhanh chóng
- Quyền lực và địa vị tăng cường
- Tính cách kiên định, có trách nhiệm
- Dễ đạt được thành công trong công việc
- Tình cảm ổn định, hạnh phúc
- Sức khỏe tốt, ít bệnh tật",
    },
    CombinationDefinition {
        first: Star::DienNien,
        second: Star::PhucVi,
        name: "Diên Niên + Phục Vị",
        description: "Sự nghiệp ổn định, bền vững",
        detailed_description: "Khi Diên Niên kết hợp với Phục Vị, tạo thành tổ hợp mạnh về sự ổn định.
- Sự nghiệp phát triển ổn định
- Công việc bền vững, lâu dài
- Tính cách vừa kiên định vừa nhẫn nại
- Dễ duy trì được thành công
- Tình cảm ổn định, hạnh phúc
- Sức khỏe tốt, ít bệnh tật",
    },
    CombinationDefinition {
        first: Star::PhucVi,
        second: Star::PhucVi,
        name: "Phục Vị + Phục Vị",
        description: "Ổn định nhân đôi, bền vững lâu dài",
        detailed_description: "Khi hai sao Phục Vị kết hợp với nhau, tạo thành tổ hợp mạnh mẽ về sự ổn định.
- Sự ổn định tăng cường gấp đôi
- Cuộc sống bền vững, lâu dài
- Tính cách nhẫn nại, kiên trì
- Dễ duy trì được thành công
- Tình cảm ổn định, hạnh phúc
- Sức khỏe tốt, ít bệnh tật",
    },
    CombinationDefinition {
        first: Star::PhucVi,
        second: Star::HoaHai,
        name: "Phục Vị + Họa Hại",
        description: "Ổn định bị phá vỡ, khó khăn xuất hiện",
        detailed_description: "Khi Phục Vị kết hợp với Họa Hại, tạo thành tổ hợp không tốt.
- Sự ổn định bị phá vỡ
- Khó khăn và trở ngại xuất hiện
- Tính cách vừa nhẫn nại vừa hay lo lắng
- Dễ gặp phải rắc rối
- Tình cảm không ổn định
- Sức khỏe cần chú ý",
    },
    CombinationDefinition {
        first: Star::HoaHai,
        second: Star::HoaHai,
        name: "Họa Hại + Họa Hại",
        description: "Tai họa nhân đôi, khó khăn chồng chất",
        detailed_description: "Khi hai sao Họa Hại kết hợp với nhau, tạo thành tổ hợp rất xấu.
- Tai họa và khó khăn nhân đôi
- Dễ gặp phải nhiều rắc rối
- Tính cách hay lo lắng, bi quan
- Dễ gặp phải thất bại
- Tình cảm không ổn định
- Sức khỏe kém, dễ bệnh tật",
    },
    CombinationDefinition {
        first: Star::HoaHai,
        second: Star::LucSat,
        name: "Họa Hại + Lục Sát",
        description: "Tai họa và mâu thuẫn cùng lúc",
        detailed_description: "Khi Họa Hại kết hợp với Lục Sát, tạo thành tổ hợp rất xấu.
- Tai họa đi đôi với mâu thuẫn
- Dễ gặp phải tranh chấp
- Tính cách vừa lo lắng vừa nóng nảy
- Dễ gặp phải thất bại
- Tình cảm không ổn định
- Sức khỏe kém, dễ bệnh tật",
    },
    CombinationDefinition {
        first: Star::LucSat,
        second: Star::LucSat,
        name: "Lục Sát + Lục Sát",
        description: "Mâu thuẫn nhân đôi, xung đột tăng cường",
        detailed_description: "Khi hai sao Lục Sát kết hợp với nhau, tạo thành tổ hợp rất xấu.
- Mâu thuẫn và xung đột nhân đôi
- Dễ gặp phải tranh chấp
- Tính cách nóng nảy, dễ nổi giận
- Dễ gặp phải thất bại
- Tình cảm không ổn định
- Sức khỏe kém, dễ bệnh tật",
    },
    CombinationDefinition {
        first: Star::LucSat,
        second: Star::NguQuy,
        name: "Lục Sát + Ngũ Quỷ",
        description: "Mâu thuẫn và tai họa cùng lúc",
        detailed_description: "Khi Lục Sát kết hợp với Ngũ Quỷ, tạo thành tổ hợp rất xấu.
- Mâu thuẫn đi đôi với tai họa
- Dễ gặp phải rắc rối nghiêm trọng
- Tính cách vừa nóng nảy vừa bi quan
- Dễ gặp phải thất bại
- Tình cảm không ổn định
- Sức khỏe kém, dễ bệnh tật",
    },
    CombinationDefinition {
        first: Star::NguQuy,
        second: Star::NguQuy,
        name: "Ngũ Quỷ + Ngũ Quỷ",
        description: "Tai họa nhân đôi, xui xẻo tăng cường",
        detailed_description: "Khi hai sao Ngũ Quỷ kết hợp với nhau, tạo thành tổ hợp rất xấu.
- Tai họa và xui xẻo nhân đôi
- Dễ gặp phải nhiều chuyện không may
- Tính cách bi quan, lo lắng
- Dễ gặp phải thất bại
- Tình cảm không ổn định
- Sức khỏe kém, dễ bệnh tật",
    },
    CombinationDefinition {
        first: Star::NguQuy,
        second: Star::TuyetMenh,
        name: "Ngũ Quỷ + Tuyệt Mệnh",
        description: "Tai họa và tuyệt vọng cùng lúc",
        detailed_description: "Khi Ngũ Quỷ kết hợp với Tuyệt Mệnh, tạo thành tổ hợp rất xấu.
- Tai họa đi đôi với tuyệt vọng
- Dễ rơi vào tình trạng bế tắc
- Tính cách vừa bi quan vừa lo lắng
- Dễ gặp phải thất bại
- Tình cảm không ổn định
- Sức khỏe kém, dễ bệnh tật",
    },
    CombinationDefinition {
        first: Star::TuyetMenh,
        second: Star::TuyetMenh,
        name: "Tuyệt Mệnh + Tuyệt Mệnh",
        description: "Tuyệt vọng nhân đôi, bế tắc tăng cường",
        detailed_description: "Khi hai sao Tuyệt Mệnh kết hợp với nhau, tạo thành tổ hợp rất xấu.
- Tuyệt vọng và bế tắc nhân đôi
- Dễ rơi vào tình trạng khó khăn
- Tính cách bi quan, lo lắng
- Dễ gặp phải thất bại
- Tình cảm không ổn định
- Sức khỏe kém, dễ bệnh tật",
    },
    CombinationDefinition {
        first: Star::TuyetMenh,
        second: Star::SinhKhi,
        name: "Tuyệt Mệnh + Sinh Khí",
        description: "Tuyệt vọng được cứu vãn bởi quý nhân",
        detailed_description: "Khi Tuyệt Mệnh kết hợp với Sinh Khí, tạo thành tổ hợp có thể cứu vãn.
- Tuyệt vọng có thể được cứu vãn
- Quý nhân có thể giúp đỡ
- Tính cách vừa bi quan vừa lạc quan
- Có cơ hội vượt qua khó khăn
- Tình cảm có thể ổn định
- Sức khỏe có thể cải thiện",
    },
];

/// Ordered-pair combination index.
///
/// Lookups are strictly direction-sensitive: `(A, B)` and `(B, A)` are
/// distinct keys and one may exist without the other. A missing key means
/// the adjacent stars carry no special combined reading.
#[derive(Debug, Clone)]
pub struct CombinationIndex {
    by_pair: FxHashMap<(Star, Star), &'static CombinationDefinition>,
}

impl CombinationIndex {
    /// Build the index from the static combination table.
    pub fn new() -> Self {
        let mut by_pair = FxHashMap::default();
        for def in COMBINATIONS {
            by_pair.insert((def.first, def.second), def);
        }
        Self { by_pair }
    }

    /// Look up the ordered pair `(first, second)`. Never falls back to the
    /// reversed pair.
    pub fn lookup(&self, first: Star, second: Star) -> Option<&'static CombinationDefinition> {
        self.by_pair.get(&(first, second)).copied()
    }

    /// Number of defined combinations.
    pub fn len(&self) -> usize {
        self.by_pair.len()
    }

    /// Whether the table is empty (never, for the shipped data).
    pub fn is_empty(&self) -> bool {
        self.by_pair.is_empty()
    }
}

impl Default for CombinationIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_size() {
        let index = CombinationIndex::new();
        assert_eq!(index.len(), 16);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_known_combination() {
        let index = CombinationIndex::new();
        let combo = index.lookup(Star::SinhKhi, Star::ThienY).unwrap();
        assert_eq!(combo.name, "Sinh Khí + Thiên Y");
        assert_eq!(combo.description, "Quý nhân mang tài lộc");
    }

    #[test]
    fn test_direction_sensitivity() {
        let index = CombinationIndex::new();

        // Sinh Khí → Thiên Y is defined; the reverse direction is not,
        // and must not be silently symmetrized.
        assert!(index.lookup(Star::SinhKhi, Star::ThienY).is_some());
        assert!(index.lookup(Star::ThienY, Star::SinhKhi).is_none());

        // Tuyệt Mệnh → Sinh Khí (the rescue pairing) only exists one way.
        assert!(index.lookup(Star::TuyetMenh, Star::SinhKhi).is_some());
        assert!(index.lookup(Star::SinhKhi, Star::TuyetMenh).is_none());
    }

    #[test]
    fn test_unknown_never_combines() {
        let index = CombinationIndex::new();
        for star in Star::ALL {
            assert!(index.lookup(Star::Unknown, star).is_none());
            assert!(index.lookup(star, Star::Unknown).is_none());
        }
    }
}
