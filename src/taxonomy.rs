// BCLS Star Taxonomy
// Static star definitions and the code lookup catalog

use crate::types::{Star, StarNature};
use rustc_hash::FxHashMap;

/// Immutable definition of one star (or one zero-variant twin).
///
/// Base stars match 2-digit codes of two distinct non-0/5 digits; the
/// zero-variant twins match 3-digit codes containing a `0` and carry
/// their own, generally higher-magnitude, energy tables.
#[derive(Debug, Clone, Copy)]
pub struct StarDefinition {
    /// Star identity this definition belongs to
    pub star: Star,
    /// Display name
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Detailed interpretation text
    pub detailed_description: &'static str,
    /// Recommended position within a number
    pub position: &'static str,
    /// Valence of this definition
    pub nature: StarNature,
    /// Digit codes this definition matches
    pub codes: &'static [&'static str],
    /// Code → base energy table
    pub energies: &'static [(&'static str, f64)],
}

impl StarDefinition {
    /// Base energy for a matched code, if the code belongs to this star.
    pub fn energy_for(&self, code: &str) -> Option<f64> {
        self.energies
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, e)| *e)
    }
}

// ---------------------------------------------------------------------------
// Tứ cát tinh - the four auspicious stars
// ---------------------------------------------------------------------------

const SINH_KHI: StarDefinition = StarDefinition {
    star: Star::SinhKhi,
    name: "Sinh Khí",
    description: "Vui vẻ, quý nhân, dẫn đạo lực",
    detailed_description: "Tính cách lạc quan, nhìn mọi thứ rất thoáng, là người yên vui, lấy tâm bình tĩnh, bình thản để đối đãi, mọi thứ tuỳ duyên, không so đo cưỡng cầu.
- Thích trợ giúp người khác, có nhiều nhân duyên và bạn bè tốt, bằng hữu nhiều. Không thích so đo và cứng nhắc.
- Thường là người hoà giải, am hiểu giao tiếp tốt, kết nối giỏi. Dễ tiếp nhận thông tin mới.
- Quý nhân mang tiền tài đến, có rất nhiều khoản tiền bất ngờ, thậm chí trúng số.
- Sự nghiệp gặp được nhiều quý nhân, gặp gữ thì hoá lành. Thích hợp làm công tác xã hội, PR.
- Tình cảm không cưỡng cầu, tuỳ duyên, không so đo, mối quan hệ hài hoà, hôn nhân tương ứng ngọt ngào.
- Sức khỏe cần lưu ý về bệnh dạ dày, tai mắt mũi.
- Từ trường đem dữ hoá lành, trong nguy hiểm chắc chắn sẽ có hy vọng thoát khỏi.",
    position: "Nên ở giữa",
    nature: StarNature::Auspicious,
    codes: &["14", "41", "67", "76", "39", "93", "28", "82"],
    energies: &[
        ("14", 4.0),
        ("41", 4.0),
        ("67", 3.0),
        ("76", 3.0),
        ("39", 2.0),
        ("93", 2.0),
        ("28", 1.0),
        ("82", 1.0),
    ],
};

const THIEN_Y: StarDefinition = StarDefinition {
    star: Star::ThienY,
    name: "Thiên Y",
    description: "Tiền tài, tình cảm, hồi báo",
    detailed_description: "Là tin tức trọng yếu khi một người muốn cầu tài hoặc tiêu tai bệnh tật. Thông minh, thiện lương, hào phóng, thích giúp đỡ người khác.
- Tính tình rất giản đơn, không có tâm cơ thâm hiểm, hạnh phúc đôi lứa, hạnh phúc vợ chồng đều đoan chính.
- Tiền kiếm được chân chính nhưng vì quá thiện lương cũng không thích so đo nên rất dễ bị lừa và lợi dụng.
- Không màng danh lợi, không quá quan trọng đồng tiền, những khoản tiền nhỏ thường không chú ý nhiều.
- Tiền tài đổ về từ tứ phương tám hướng, được hưởng sự đầy đủ, hạnh phúc.
- Sự nghiệp có thể thành đại sự, lừng lẫy, trở thành ông chủ, lãnh đạo hoặc cánh tay đắc lực của doanh nghiệp.
- Tình cảm chân chính, dễ kết hôn và dễ gặp đối tượng lý tưởng, tình cảm ân ái, ngọt ngào và lãng mạn.
- Sức khỏe cần lưu ý vấn đề về huyết áp, tuần hoàn máu, bệnh tai mắt mũi.
- Nhiều quý nhân lớn tuổi hơn, các bậc chú bác anh chị giúp đỡ che chở, bạn bè nhiều.",
    position: "Nên ở hậu phương",
    nature: StarNature::Auspicious,
    codes: &["13", "31", "68", "86", "49", "94", "27", "72"],
    energies: &[
        ("13", 4.0),
        ("31", 4.0),
        ("68", 3.0),
        ("86", 3.0),
        ("49", 2.0),
        ("94", 2.0),
        ("27", 1.0),
        ("72", 1.0),
    ],
};

const DIEN_NIEN: StarDefinition = StarDefinition {
    star: Star::DienNien,
    name: "Diên Niên",
    description: "Năng lực chuyên nghiệp, công việc",
    detailed_description: "Thường là lãnh đạo, chúa tể một phương, không dễ thuyết phục, trừ khi ai đó năng lực cao hơn hẳn.
- Là người có trách nhiệm, tâm lý vững vàng, lập trường ổn định, có cam đảm và đảm đương được.
- Rất trọng chữ tín, đề cao trách nhiệm, đã nói là làm, tính tình kiên trì, nói 1 không 2.
- Tâm địa thiện lương, kĩ tính không ẩu, xử lý công việc theo chính nghĩa, bảo vệ chính nghĩa.
- Hay thích tiết kiệm tiền bạc, tính toán cẩn thận không ẩu, biết tiêu sài đúng nơi đúng chỗ.
- Tài vận: Vất vả kiếm tiền, giữ tiền tốt, thích tính toán chi tiết tỉ mỉ, kĩ lưỡng. Quản lý tài sản rất kĩ.
- Sự nghiệp: có năng lực chuyên nghiệp, làm lãnh đạo và kỹ thuật, mọi thứ tự thân, làm việc khá mệt nhọc.
- Tình cảm: yêu cầu cao, tìm kiếm đối tượng rất khó khăn kĩ tính, đặt rất nặng công việc, cực kì chung thuỷ.
- Sức khỏe: vất vả lâu ngày sinh bệnh tật, bệnh vai cổ gáy, giấc ngủ không tốt, tóc rụng nhiều, tinh thần áp lực.
- Khuyết điểm: Sĩ diện, cái tôi mạnh, hay ung dung tự đắc ý, lý lẽ cứng nhắc, cố chấp, cực khổ, lao lực.",
    position: "Nên ở hậu phương",
    nature: StarNature::Auspicious,
    codes: &["19", "91", "78", "87", "34", "43", "26", "62"],
    energies: &[
        ("19", 4.0),
        ("91", 4.0),
        ("78", 3.0),
        ("87", 3.0),
        ("34", 2.0),
        ("43", 2.0),
        ("26", 1.0),
        ("62", 1.0),
    ],
};

const PHUC_VI: StarDefinition = StarDefinition {
    star: Star::PhucVi,
    name: "Phục Vị",
    description: "Chịu đựng, khó thay đổi",
    detailed_description: "Giỏi chịu đựng, có nghị lực hơn người, tiền nói có sức ảnh hưởng, tiềm ẩn năng lực rất lớn.
- Lập trường vững vàng, không dễ biến động, không thích bị nói đạo lý, mà phải làm gương tốt.
- Thường lo lắng, không có cảm giác an toàn, khó đưa ra lựa chọn và rất cần sự cổ vũ động viên.
- Sợ mạo hiểm, sợ tổn thương, hay bị chờ đợi quá lâu mất cơ hội. Quá bảo thủ chờ đợi, không dám hành động.
- Tài vận: kiếm tiền khổ sở, phải đánh đổi nhiều vất vả, thích cầm tiền cố định và thu nhập ổn định.
- Sự nghiệp: gò bó theo khuôn phép, khó thay đổi, thích hợp với công việc có tính ổn định cao.
- Sức khỏe: bệnh về tim, não, lo nghĩ, hao tổn năng lượng ở 2 vùng này nhiều.
- Đặc điểm: theo hung thì thì hung, theo cát thì cát. Hoặc người có vận số tốt thì sẽ tốt, người có vận số xấu thì càng trở lên chậm trễ.
- Tình cảm: không tự ý chủ động yêu đương, cần có cảm giác yêu thương an toàn, tâm thái luôn đa nghi, thấp thỏm lo âu.
- Người nhà sẽ là quý nhân tốt nhất.",
    position: "Không nên có",
    nature: StarNature::Mixed,
    codes: &["11", "22", "33", "44", "66", "77", "88", "99"],
    energies: &[
        ("11", 4.0),
        ("22", 4.0),
        ("33", 1.0),
        ("44", 1.0),
        ("66", 2.0),
        ("77", 2.0),
        ("88", 3.0),
        ("99", 3.0),
    ],
};

// ---------------------------------------------------------------------------
// Tứ hung tinh - the four inauspicious stars
// ---------------------------------------------------------------------------

const HOA_HAI: StarDefinition = StarDefinition {
    star: Star::HoaHai,
    name: "Họa Hại",
    description: "Khẩu tài, chi tiêu lớn, thị phi",
    detailed_description: "Liên quan đến công danh, tiền tài, thủ đoạn, đối đầu, phe phái. Tâm lý đa nghi, thích cạnh tranh, lập trường vững vàng.
- Hay so sánh ganh tị, cầu toàn, hoàn hảo. Tự tôn, kiêu ngạo, chỉ sĩ người khác, nói hay làm hay hơn người.
- Thích luật pháp, quy tắc, ưa dạy người khác.
- Sống lý tính trọng lý lẽ, thích phân đúng sai, thích lời nói trực diện, thích vạch trần thâm cơ của người khác. Hậu quả dẫn đến phân tranh: các mối quan hệ dễ xảy ra đối đầu, đánh nhau.
- Tài vận: Đấu tranh với người khác, dễ đoạt được tài phú và địa vị của người khác. Hay giằng co. Hay đối đầu, ganh đua, đố kỵ tranh tài, dẫn đến khẩu thiệt thị phi. Tiền tài sẽ bị mất, đặc biệt là mất hết số tiền tích cóp, vay mượn khó trả.
- Tình cảm: Không được tự do, thiếu tình yêu thương, thiếu gần gũi, thắm thiết.
- Sức khỏe: gặp va chạm, té ngã, tai nạn, mang hung sát tinh, đối thủ.
- Chìa khoá phong thuỷ: Tâm tĩnh mới có thể giải quyết mọi vấn đề, vô tranh mới tránh được tai ương.",
    position: "Không nên có",
    nature: StarNature::Inauspicious,
    codes: &["17", "71", "89", "98", "46", "64", "23", "32"],
    energies: &[
        ("17", 4.0),
        ("71", 4.0),
        ("89", 3.0),
        ("98", 3.0),
        ("46", 2.0),
        ("64", 2.0),
        ("23", 1.0),
        ("32", 1.0),
    ],
};

const LUC_SAT: StarDefinition = StarDefinition {
    star: Star::LucSat,
    name: "Lục Sát",
    description: "Tình cảm, quan hệ, thị phi",
    detailed_description: "Liên quan đến tình cảm, quan hệ, thị phi, tranh chấp. Tính cách nóng nảy, dễ nổi giận, hay tranh cãi.
- Thích tranh luận, thích đúng sai, thích phân biệt rõ ràng.
- Dễ gây mâu thuẫn, xung đột trong các mối quan hệ.
- Tài vận: Dễ bị mất tiền vì tranh chấp, kiện tụng.
- Sự nghiệp: Dễ gặp trở ngại vì mâu thuẫn với đồng nghiệp, cấp trên.
- Tình cảm: Dễ xảy ra mâu thuẫn, cãi vã, chia tay.
- Sức khỏe: Dễ bị bệnh về gan, mật, huyết áp.
- Chìa khóa phong thủy: Giữ bình tĩnh, tránh tranh cãi, học cách nhường nhịn.",
    position: "Không nên có",
    nature: StarNature::Inauspicious,
    codes: &["16", "61", "47", "74", "38", "83", "29", "92"],
    energies: &[
        ("16", 4.0),
        ("61", 4.0),
        ("47", 3.0),
        ("74", 3.0),
        ("38", 2.0),
        ("83", 2.0),
        ("29", 1.0),
        ("92", 1.0),
    ],
};

const NGU_QUY: StarDefinition = StarDefinition {
    star: Star::NguQuy,
    name: "Ngũ Quỷ",
    description: "Tai họa, bệnh tật, xui xẻo",
    detailed_description: "Liên quan đến tai họa, bệnh tật, xui xẻo, không may mắn. Tính cách hay lo lắng, bi quan, dễ nản lòng.
- Thường gặp những chuyện không may, xui xẻo.
- Dễ mắc bệnh tật, tai nạn.
- Tài vận: Dễ bị mất tiền vì tai nạn, bệnh tật.
- Sự nghiệp: Dễ gặp trở ngại, thất bại.
- Tình cảm: Dễ gặp trắc trở, chia ly.
- Sức khỏe: Dễ mắc bệnh hiểm nghèo, tai nạn.
- Chìa khóa phong thủy: Tăng cường năng lượng dương, tránh nơi âm u, tối tăm.",
    position: "Không nên có",
    nature: StarNature::Inauspicious,
    codes: &["18", "81", "79", "97", "36", "63", "24", "42"],
    energies: &[
        ("18", 4.0),
        ("81", 4.0),
        ("79", 3.0),
        ("97", 3.0),
        ("36", 2.0),
        ("63", 2.0),
        ("24", 1.0),
        ("42", 1.0),
    ],
};

const TUYET_MENH: StarDefinition = StarDefinition {
    star: Star::TuyetMenh,
    name: "Tuyệt Mệnh",
    description: "Tuyệt vọng, bế tắc, khó khăn",
    detailed_description: "Liên quan đến sự tuyệt vọng, bế tắc, khó khăn trong cuộc sống. Tính cách hay lo lắng, bi quan, dễ nản lòng.
- Thường gặp những khó khăn, trở ngại trong cuộc sống.
- Dễ rơi vào tình trạng bế tắc, tuyệt vọng.
- Tài vận: Dễ bị mất tiền, khó kiếm tiền.
- Sự nghiệp: Dễ gặp thất bại, khó thăng tiến.
- Tình cảm: Dễ gặp trắc trở, chia ly.
- Sức khỏe: Dễ mắc bệnh hiểm nghèo, suy nhược.
- Chìa khóa phong thủy: Tăng cường năng lượng dương, tránh nơi âm u, tối tăm.",
    position: "Không nên có",
    nature: StarNature::Inauspicious,
    codes: &["12", "21", "69", "96", "48", "84", "37", "73"],
    energies: &[
        ("12", 4.0),
        ("21", 4.0),
        ("69", 3.0),
        ("96", 3.0),
        ("48", 2.0),
        ("84", 2.0),
        ("37", 1.0),
        ("73", 1.0),
    ],
};

// ---------------------------------------------------------------------------
// Zero-variant twins - 3-digit codes with an embedded 0
// ---------------------------------------------------------------------------

const SINH_KHI_ZERO: StarDefinition = StarDefinition {
    star: Star::SinhKhi,
    name: "Sinh Khí hóa hung",
    description: "Sinh Khí có số 0: Quý nhân hóa tiểu nhân, chiêu nạp người xấu về bên mình",
    detailed_description: "Người tưởng tốt hóa ra có ý đồ xấu, người giúp đỡ lại khiến gặp rắc rối.
- Dễ gặp phải người hai mặt, bề ngoài tốt nhưng có ý đồ lợi dụng.
- Cần thận trọng khi tin tưởng người khác, đặc biệt là người mới quen.
- Quý nhân có thể biến thành tiểu nhân, thường gặp phải người không thật lòng.",
    position: "Nên ở giữa",
    nature: StarNature::AuspiciousTurnedBad,
    codes: &[
        "104", "140", "401", "410", "607", "670", "706", "760", "309", "390", "903", "930", "208",
        "280", "802", "820",
    ],
    energies: &[
        ("140", 4.5),
        ("410", 4.5),
        ("104", 4.0),
        ("401", 4.0),
        ("670", 3.5),
        ("760", 3.5),
        ("607", 3.0),
        ("706", 3.0),
        ("930", 2.5),
        ("390", 2.5),
        ("903", 2.0),
        ("309", 2.0),
        ("820", 1.0),
        ("280", 1.0),
        ("802", 1.0),
        ("208", 1.0),
    ],
};

const THIEN_Y_ZERO: StarDefinition = StarDefinition {
    star: Star::ThienY,
    name: "Thiên Y hóa hung",
    description: "Thiên Y có số 0: Đang có tiền thành mất tiền, lớn mất lớn, ít mất ít",
    detailed_description: "Tiền tài đang được hưởng sẽ giảm sút hoặc mất đi.
- Vận may về tài chính có thể suy giảm đáng kể.
- Có thể có các tổn thất tài chính không lường trước được.",
    position: "Nên ở hậu phương",
    nature: StarNature::AuspiciousTurnedBad,
    codes: &[
        "103", "130", "301", "310", "608", "680", "806", "860", "409", "490", "904", "940", "207",
        "270", "702", "720",
    ],
    energies: &[
        ("130", 4.5),
        ("310", 4.5),
        ("103", 4.0),
        ("301", 4.0),
        ("680", 3.5),
        ("860", 3.5),
        ("608", 3.0),
        ("806", 3.0),
        ("940", 2.5),
        ("490", 2.5),
        ("904", 2.0),
        ("409", 2.0),
        ("720", 1.0),
        ("270", 1.0),
        ("702", 1.0),
        ("207", 1.0),
    ],
};

const DIEN_NIEN_ZERO: StarDefinition = StarDefinition {
    star: Star::DienNien,
    name: "Diên Niên hóa hung",
    description: "Diên Niên có số 0: Làm việc nỗ lực mãi không thành, công việc cứ bị cản trở",
    detailed_description: "Mọi công sức bỏ ra thường không đạt được kết quả như mong muốn.
- Thường xuyên gặp chướng ngại, trở ngại trong công việc và sự nghiệp.
- Áp lực công việc lớn nhưng kết quả không tương xứng với nỗ lực bỏ ra.
- Khó thăng tiến trong sự nghiệp, dễ bị người khác cản trở.",
    position: "Nên ở hậu phương",
    nature: StarNature::AuspiciousTurnedBad,
    codes: &[
        "109", "190", "901", "910", "708", "780", "807", "870", "304", "340", "403", "430", "206",
        "260", "602", "620",
    ],
    energies: &[
        ("190", 4.5),
        ("910", 4.5),
        ("109", 4.0),
        ("901", 4.0),
        ("780", 3.5),
        ("870", 3.5),
        ("708", 3.0),
        ("807", 3.0),
        ("340", 2.5),
        ("430", 2.5),
        ("304", 2.0),
        ("403", 2.0),
        ("260", 1.0),
        ("620", 1.0),
        ("206", 1.0),
        ("602", 1.0),
    ],
};

const PHUC_VI_ZERO: StarDefinition = StarDefinition {
    star: Star::PhucVi,
    name: "Phục Vị",
    description: "Phục Vị có số 0: Trì trệ, chờ đợi, không thay đổi, dễ bỏ lỡ cơ hội",
    detailed_description: "Khó hòa nhập với môi trường mới, thích giữ nguyên hiện trạng.
- Lo lắng quá mức, thường xuyên bỏ lỡ cơ hội tốt.
- Sự nghiệp khó phát triển, dễ rơi vào tình trạng bế tắc.
- Dễ bỏ lỡ những cơ hội tốt vì quá thận trọng và không dám quyết định.",
    position: "Không nên có",
    nature: StarNature::AuspiciousTurnedBad,
    codes: &[
        "110", "220", "330", "440", "660", "770", "880", "990", "101", "202", "303", "404", "606",
        "707", "808", "909",
    ],
    energies: &[
        ("110", 4.5),
        ("220", 4.5),
        ("990", 3.5),
        ("880", 3.5),
        ("101", 4.0),
        ("202", 4.0),
        ("808", 3.0),
        ("909", 3.0),
        ("707", 2.0),
        ("606", 2.0),
        ("660", 2.0),
        ("770", 2.0),
        ("303", 1.0),
        ("404", 1.0),
        ("330", 1.5),
        ("440", 1.5),
    ],
};

const HOA_HAI_ZERO: StarDefinition = StarDefinition {
    star: Star::HoaHai,
    name: "Họa Hại",
    description: "Họa Hại có số 0: Ẩn bệnh, không bộc phát, nếu bộc phát sẽ rất nhanh",
    detailed_description: "Họa thị phi, kiện cáo, cãi vã, có thể gây kiện cáo kéo dài.
- Có nguy cơ mắc bệnh tiềm ẩn không phát hiện sớm, khi phát bệnh thì diễn biến nhanh, nghiêm trọng.
- Dễ gặp phải rắc rối về pháp lý, tranh chấp, kiện tụng kéo dài.
- Dễ vướng vào các cuộc tranh cãi, thị phi không đáng có.
- Lời nói có thể gây ra hậu quả nghiêm trọng không lường trước.",
    position: "Không nên có",
    nature: StarNature::InauspiciousWorsened,
    codes: &[
        "107", "170", "701", "710", "809", "890", "908", "980", "406", "460", "604", "640", "203",
        "230", "302", "320",
    ],
    energies: &[
        ("170", 4.5),
        ("710", 4.5),
        ("107", 4.0),
        ("701", 4.0),
        ("890", 3.5),
        ("980", 3.5),
        ("809", 3.0),
        ("908", 3.0),
        ("460", 2.5),
        ("640", 2.5),
        ("406", 2.0),
        ("604", 2.0),
        ("230", 1.5),
        ("320", 1.5),
        ("203", 1.0),
        ("302", 1.0),
    ],
};

const LUC_SAT_ZERO: StarDefinition = StarDefinition {
    star: Star::LucSat,
    name: "Lục Sát",
    description: "Lục Sát có số 0: Tình cảm tan vỡ, quan hệ đổ vỡ, thị phi tăng",
    detailed_description: "Dễ gặp phải những mâu thuẫn nghiêm trọng trong các mối quan hệ.
- Tình cảm dễ đổ vỡ, khó hàn gắn.
- Dễ vướng vào những vụ tranh chấp, kiện tụng kéo dài.
- Thị phi, tai tiếng có thể ảnh hưởng nghiêm trọng đến danh dự và uy tín.",
    position: "Không nên có",
    nature: StarNature::InauspiciousWorsened,
    codes: &[
        "106", "160", "601", "610", "407", "470", "704", "740", "308", "380", "803", "830", "209",
        "290", "902", "920",
    ],
    energies: &[
        ("160", 4.5),
        ("610", 4.5),
        ("106", 4.0),
        ("601", 4.0),
        ("470", 3.5),
        ("740", 3.5),
        ("407", 3.0),
        ("704", 3.0),
        ("380", 2.5),
        ("830", 2.5),
        ("308", 2.0),
        ("803", 2.0),
        ("290", 1.5),
        ("920", 1.5),
        ("209", 1.0),
        ("902", 1.0),
    ],
};

const NGU_QUY_ZERO: StarDefinition = StarDefinition {
    star: Star::NguQuy,
    name: "Ngũ Quỷ",
    description: "Ngũ Quỷ có số 0: Tai họa tăng, bệnh tật nặng, xui xẻo nhiều",
    detailed_description: "Dễ gặp phải những tai họa nghiêm trọng, bất ngờ.
- Bệnh tật có thể trở nên nghiêm trọng, khó chữa.
- Xui xẻo liên tiếp, khó thoát khỏi vận hạn.
- Cần đặc biệt cẩn thận trong mọi việc, tránh rủi ro.",
    position: "Không nên có",
    nature: StarNature::InauspiciousWorsened,
    codes: &[
        "108", "180", "801", "810", "709", "790", "907", "970", "306", "360", "603", "630", "204",
        "240", "402", "420",
    ],
    energies: &[
        ("180", 4.5),
        ("810", 4.5),
        ("108", 4.0),
        ("801", 4.0),
        ("790", 3.5),
        ("970", 3.5),
        ("709", 3.0),
        ("907", 3.0),
        ("360", 2.5),
        ("630", 2.5),
        ("306", 2.0),
        ("603", 2.0),
        ("240", 1.5),
        ("420", 1.5),
        ("204", 1.0),
        ("402", 1.0),
    ],
};

const TUYET_MENH_ZERO: StarDefinition = StarDefinition {
    star: Star::TuyetMenh,
    name: "Tuyệt Mệnh",
    description: "Tuyệt Mệnh có số 0: Tuyệt vọng tăng, bế tắc nặng, khó khăn nhiều",
    detailed_description: "Dễ rơi vào tình trạng bế tắc nghiêm trọng, khó thoát.
- Tuyệt vọng sâu sắc, khó tìm thấy lối ra.
- Khó khăn chồng chất, khó vượt qua.
- Cần đặc biệt kiên trì và tìm kiếm sự giúp đỡ từ người khác.",
    position: "Không nên có",
    nature: StarNature::InauspiciousWorsened,
    codes: &[
        "102", "120", "201", "210", "609", "690", "906", "960", "408", "480", "804", "840", "307",
        "370", "703", "730",
    ],
    energies: &[
        ("120", 4.5),
        ("210", 4.5),
        ("102", 4.0),
        ("201", 4.0),
        ("690", 3.5),
        ("960", 3.5),
        ("609", 3.0),
        ("906", 3.0),
        ("480", 2.5),
        ("840", 2.5),
        ("408", 2.0),
        ("804", 2.0),
        ("370", 1.5),
        ("730", 1.5),
        ("307", 1.0),
        ("703", 1.0),
    ],
};

/// The eight base star definitions, auspicious first.
pub const BASE_STARS: [&StarDefinition; 8] = [
    &SINH_KHI, &THIEN_Y, &DIEN_NIEN, &PHUC_VI, &HOA_HAI, &LUC_SAT, &NGU_QUY, &TUYET_MENH,
];

/// The eight zero-variant twins, in the same order.
pub const ZERO_VARIANTS: [&StarDefinition; 8] = [
    &SINH_KHI_ZERO,
    &THIEN_Y_ZERO,
    &DIEN_NIEN_ZERO,
    &PHUC_VI_ZERO,
    &HOA_HAI_ZERO,
    &LUC_SAT_ZERO,
    &NGU_QUY_ZERO,
    &TUYET_MENH_ZERO,
];

/// Code-indexed star catalog.
///
/// Built once at engine construction; read-only afterwards, so it can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// 2-digit clean code → base star definition
    by_code: FxHashMap<&'static str, &'static StarDefinition>,

    /// 3-digit zero code → zero-variant definition
    zero_by_code: FxHashMap<&'static str, &'static StarDefinition>,
}

impl Catalog {
    /// Create a catalog, indexing every base code and zero code.
    ///
    /// # Example
    /// ```
    /// # use bcls::taxonomy::Catalog;
    /// # use bcls::Star;
    /// let catalog = Catalog::new();
    /// assert_eq!(catalog.star_for("47").unwrap().star, Star::TuyetMenh);
    /// ```
    pub fn new() -> Self {
        let mut by_code = FxHashMap::default();
        for def in BASE_STARS {
            for code in def.codes {
                by_code.insert(*code, def);
            }
        }

        let mut zero_by_code = FxHashMap::default();
        for def in ZERO_VARIANTS {
            for code in def.codes {
                zero_by_code.insert(*code, def);
            }
        }

        Self {
            by_code,
            zero_by_code,
        }
    }

    /// Look up the base star for a clean 2-digit code.
    pub fn star_for(&self, code: &str) -> Option<&'static StarDefinition> {
        self.by_code.get(code).copied()
    }

    /// Look up the zero-variant definition for a raw 3-digit zero code.
    pub fn zero_variant_for(&self, code: &str) -> Option<&'static StarDefinition> {
        self.zero_by_code.get(code).copied()
    }

    /// The zero-variant twin of a star identity.
    pub fn zero_variant_of(&self, star: Star) -> Option<&'static StarDefinition> {
        ZERO_VARIANTS.iter().find(|def| def.star == star).copied()
    }

    /// Total number of indexed base codes.
    pub fn base_code_count(&self) -> usize {
        self.by_code.len()
    }

    /// Total number of indexed zero codes.
    pub fn zero_code_count(&self) -> usize {
        self.zero_by_code.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_indexes_all_codes() {
        let catalog = Catalog::new();

        // 8 stars x 8 codes, no overlaps
        assert_eq!(catalog.base_code_count(), 64);

        // 8 twins x 16 zero codes
        assert_eq!(catalog.zero_code_count(), 8 * 16);
    }

    #[test]
    fn test_base_codes_disjoint() {
        // Every 2-digit code of distinct non-0/5 digits belongs to at most
        // one base star.
        let mut seen = std::collections::HashSet::new();
        for def in BASE_STARS {
            for code in def.codes {
                assert!(seen.insert(*code), "code {} indexed twice", code);
            }
        }
    }

    #[test]
    fn test_every_code_has_an_energy() {
        for def in BASE_STARS.iter().chain(ZERO_VARIANTS.iter()) {
            for code in def.codes {
                assert!(
                    def.energy_for(code).is_some(),
                    "{} missing energy for {}",
                    def.name,
                    code
                );
            }
        }
    }

    #[test]
    fn test_known_lookups() {
        let catalog = Catalog::new();

        let sinh_khi = catalog.star_for("14").unwrap();
        assert_eq!(sinh_khi.star, Star::SinhKhi);
        assert_eq!(sinh_khi.energy_for("14"), Some(4.0));
        assert_eq!(sinh_khi.energy_for("28"), Some(1.0));

        let tuyet_menh = catalog.star_for("47").unwrap();
        assert_eq!(tuyet_menh.star, Star::TuyetMenh);
        assert_eq!(tuyet_menh.nature, StarNature::Inauspicious);

        assert!(catalog.star_for("05").is_none());
        assert!(catalog.star_for("ab").is_none());
    }

    #[test]
    fn test_zero_variant_lookups() {
        let catalog = Catalog::new();

        // "908" is the Họa Hại twin with fractional-capable energy table
        let twin = catalog.zero_variant_for("908").unwrap();
        assert_eq!(twin.star, Star::HoaHai);
        assert_eq!(twin.nature, StarNature::InauspiciousWorsened);
        assert_eq!(twin.energy_for("908"), Some(3.0));

        // Zero tables carry higher-magnitude fractional energies
        let sinh_khi_twin = catalog.zero_variant_of(Star::SinhKhi).unwrap();
        assert_eq!(sinh_khi_twin.energy_for("140"), Some(4.5));
        assert_eq!(sinh_khi_twin.nature, StarNature::AuspiciousTurnedBad);
    }

    #[test]
    fn test_phuc_vi_mixed_energy_order() {
        // Phục Vị is the one star whose energy is not monotonic in code
        // order: 11/22 are strongest, 33/44 weakest.
        let catalog = Catalog::new();
        let def = catalog.star_for("33").unwrap();
        assert_eq!(def.star, Star::PhucVi);
        assert_eq!(def.energy_for("33"), Some(1.0));
        assert_eq!(def.energy_for("11"), Some(4.0));
    }
}
