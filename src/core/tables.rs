//! Fixed golf reference data keyed by element.

use crate::domain::model::{Element, LuckyItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckyItemEntry {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub description: &'static str,
}

impl LuckyItemEntry {
    pub fn to_item(&self) -> LuckyItem {
        LuckyItem {
            primary: self.primary.to_string(),
            secondary: self.secondary.to_string(),
            description: self.description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementProfile {
    pub element: Element,
    pub style: &'static str,
    pub strengths: [&'static str; 2],
    pub weaknesses: [&'static str; 2],
    pub lucky_colors: [&'static str; 2],
    pub lucky_numbers: [u8; 2],
    pub lucky_club: LuckyItemEntry,
    pub lucky_ball: LuckyItemEntry,
    pub lucky_tpo: LuckyItemEntry,
}

/// 天干 → 五行, two stems per element.
pub static STEM_ELEMENTS: [(&str, Element); 10] = [
    ("甲", Element::Wood),
    ("乙", Element::Wood),
    ("丙", Element::Fire),
    ("丁", Element::Fire),
    ("戊", Element::Earth),
    ("己", Element::Earth),
    ("庚", Element::Metal),
    ("辛", Element::Metal),
    ("壬", Element::Water),
    ("癸", Element::Water),
];

/// The first entry (wood) doubles as the default record.
pub static ELEMENT_PROFILES: [ElementProfile; 5] = [
    ElementProfile {
        element: Element::Wood,
        style: "공격적이고 도전적",
        strengths: ["드라이버", "장타"],
        weaknesses: ["퍼팅", "정확성"],
        lucky_colors: ["초록", "파랑"],
        lucky_numbers: [3, 8],
        lucky_club: LuckyItemEntry {
            primary: "드라이버",
            secondary: "아이언",
            description: "강력한 드라이버로 페어웨이를 정복하는 클럽",
        },
        lucky_ball: LuckyItemEntry {
            primary: "초록색 볼",
            secondary: "파란색 볼",
            description: "자연의 기운을 담은 색상의 볼",
        },
        lucky_tpo: LuckyItemEntry {
            primary: "초록색 골프웨어",
            secondary: "파란색 골프웨어",
            description: "자연과 조화를 이루는 색상의 복장",
        },
    },
    ElementProfile {
        element: Element::Fire,
        style: "열정적이고 활발",
        strengths: ["아이언", "어프로치"],
        weaknesses: ["멘탈", "집중력"],
        lucky_colors: ["빨강", "주황"],
        lucky_numbers: [2, 7],
        lucky_club: LuckyItemEntry {
            primary: "아이언",
            secondary: "웨지",
            description: "정확한 아이언으로 핀을 노리는 클럽",
        },
        lucky_ball: LuckyItemEntry {
            primary: "빨간색 볼",
            secondary: "주황색 볼",
            description: "열정을 불러일으키는 색상의 볼",
        },
        lucky_tpo: LuckyItemEntry {
            primary: "빨간색 골프웨어",
            secondary: "주황색 골프웨어",
            description: "활력과 열정을 보여주는 색상의 복장",
        },
    },
    ElementProfile {
        element: Element::Earth,
        style: "안정적이고 신중",
        strengths: ["퍼팅", "정확성"],
        weaknesses: ["장타", "공격성"],
        lucky_colors: ["노랑", "갈색"],
        lucky_numbers: [5, 0],
        lucky_club: LuckyItemEntry {
            primary: "퍼터",
            secondary: "웨지",
            description: "안정적인 퍼터로 그린을 정복하는 클럽",
        },
        lucky_ball: LuckyItemEntry {
            primary: "노란색 볼",
            secondary: "갈색 볼",
            description: "안정감을 주는 색상의 볼",
        },
        lucky_tpo: LuckyItemEntry {
            primary: "노란색 골프웨어",
            secondary: "갈색 골프웨어",
            description: "신뢰감을 주는 색상의 복장",
        },
    },
    ElementProfile {
        element: Element::Metal,
        style: "정확하고 완벽주의",
        strengths: ["아이언", "샌드웨지"],
        weaknesses: ["드라이버", "유연성"],
        lucky_colors: ["흰색", "금색"],
        lucky_numbers: [4, 9],
        lucky_club: LuckyItemEntry {
            primary: "샌드웨지",
            secondary: "아이언",
            description: "정밀한 샌드웨지로 정확성을 높이는 클럽",
        },
        lucky_ball: LuckyItemEntry {
            primary: "흰색 볼",
            secondary: "금색 볼",
            description: "순수함과 완벽함을 상징하는 색상의 볼",
        },
        lucky_tpo: LuckyItemEntry {
            primary: "흰색 골프웨어",
            secondary: "금색 골프웨어",
            description: "깔끔하고 세련된 색상의 복장",
        },
    },
    ElementProfile {
        element: Element::Water,
        style: "유연하고 적응력 좋음",
        strengths: ["퍼팅", "그린플레이"],
        weaknesses: ["아이언", "일관성"],
        lucky_colors: ["검정", "파랑"],
        lucky_numbers: [1, 6],
        lucky_club: LuckyItemEntry {
            primary: "퍼터",
            secondary: "드라이버",
            description: "유연한 퍼터로 그린 위에서 승부하는 클럽",
        },
        lucky_ball: LuckyItemEntry {
            primary: "검은색 볼",
            secondary: "파란색 볼",
            description: "차분함과 집중력을 주는 색상의 볼",
        },
        lucky_tpo: LuckyItemEntry {
            primary: "검은색 골프웨어",
            secondary: "파란색 골프웨어",
            description: "차분하고 우아한 색상의 복장",
        },
    },
];

pub fn element_name(element: Element) -> &'static str {
    match element {
        Element::Wood => "목(木) - 나무의 기운",
        Element::Fire => "화(火) - 불의 기운",
        Element::Earth => "토(土) - 땅의 기운",
        Element::Metal => "금(金) - 쇠의 기운",
        Element::Water => "수(水) - 물의 기운",
    }
}

pub fn element_description(element: Element) -> &'static str {
    match element {
        Element::Wood => "성장과 발전의 기운으로, 새로운 도전과 확장을 의미합니다. 골프에서는 공격적이고 도전적인 플레이를 선호합니다.",
        Element::Fire => "열정과 활력의 기운으로, 리더십과 표현력을 의미합니다. 골프에서는 열정적이고 활발한 플레이를 합니다.",
        Element::Earth => "안정과 신뢰의 기운으로, 꾸준함과 실용성을 의미합니다. 골프에서는 안정적이고 신중한 플레이를 선호합니다.",
        Element::Metal => "정의와 완성의 기운으로, 정확성과 완벽을 의미합니다. 골프에서는 정교하고 완벽주의적인 플레이를 합니다.",
        Element::Water => "지혜와 적응의 기운으로, 유연성과 지혜를 의미합니다. 골프에서는 유연하고 적응력이 뛰어난 플레이를 합니다.",
    }
}

pub static BASE_RECOMMENDATIONS: [&str; 3] = [
    "충분한 워밍업을 하세요",
    "긍정적인 마음가짐을 유지하세요",
    "집중력을 높이세요",
];

pub fn element_recommendations(element: Element) -> [&'static str; 2] {
    match element {
        Element::Wood => ["드라이버 연습에 집중하세요", "공격적인 플레이를 시도해보세요"],
        Element::Fire => ["아이언 샷 연습을 많이 하세요", "열정적으로 플레이하세요"],
        Element::Earth => ["퍼팅 연습에 시간을 투자하세요", "안정적인 플레이를 하세요"],
        Element::Metal => [
            "정확성을 중시하는 연습을 하세요",
            "완벽을 추구하되 스트레스는 피하세요",
        ],
        Element::Water => ["그린 위에서의 플레이를 연습하세요", "유연한 사고로 플레이하세요"],
    }
}
