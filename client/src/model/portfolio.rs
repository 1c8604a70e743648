//! Portfolio entries and the showcase collection shipped with the build.
//!
//! DESIGN
//! ======
//! Entries serialize with camelCase keys so documents already sitting in a
//! visitor's `localStorage` keep loading. Every field except `id` falls back
//! to its empty value when missing, so a stored entry with a dropped field
//! still loads instead of discarding the whole collection.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use serde::{Deserialize, Serialize};

/// One showcased project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Raw user input. Embeddability is decided at render time.
    #[serde(default)]
    pub video_url: String,
    /// Highlight tags, shown in order.
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default)]
    pub purpose: String,
}

impl PortfolioEntry {
    /// Fresh draft used by "Add New Project".
    pub fn template(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: "새 포트폴리오".to_owned(),
            category: "Motion Graphic".to_owned(),
            description: "설명을 입력하세요.".to_owned(),
            video_url: String::new(),
            points: vec!["포인트 1".to_owned(), "포인트 2".to_owned()],
            purpose: "작업 목적".to_owned(),
        }
    }
}

/// Split the comma-separated points field into trimmed tags.
///
/// Empty segments (`"a,,b"`, trailing commas) are dropped.
pub fn parse_points(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Inverse of [`parse_points`] for the editor input.
pub fn join_points(points: &[String]) -> String {
    points.join(", ")
}

fn entry(id: &str, title: &str, category: &str, description: &str, points: [&str; 2], purpose: &str) -> PortfolioEntry {
    PortfolioEntry {
        id: id.to_owned(),
        title: title.to_owned(),
        category: category.to_owned(),
        description: description.to_owned(),
        video_url: format!("https://www.youtube.com/watch?v=실제_영상_ID_{id}"),
        points: points.iter().map(|p| (*p).to_owned()).collect(),
        purpose: purpose.to_owned(),
    }
}

/// The collection every first-time visitor sees.
pub fn default_portfolio() -> Vec<PortfolioEntry> {
    vec![
        entry(
            "1",
            "브랜드 광고 / 프로모션",
            "Motion Graphic",
            "브랜드 인지도를 높이기 위한 2D 모션 광고 영상입니다.\n기획 단계부터 디자인, 모션 그래픽, 최종 편집까지\n전 과정을 100% 개인 작업으로 진행하였습니다.",
            ["타이포 애니메이션", "리듬감 있는 컷 편집"],
            "브랜드 아이덴티티 강화",
        ),
        entry(
            "2",
            "인포그래픽 / 정보 전달 영상",
            "Infographic",
            "복잡한 비즈니스 모델이나 정보를 시각적으로 정리했습니다.\nAfter Effects 기반의 깔끔한 아이콘 애니메이션을 활용하여\n시청자의 가독성과 정보 전달력을 극대화하였습니다.",
            ["데이터 시각화", "안정적인 모션"],
            "복잡한 정보의 쉬운 전달",
        ),
        entry(
            "3",
            "SNS / 숏폼 콘텐츠 (9:16)",
            "Short-form",
            "모바일 환경에 최적화된 9:16 비율의 숏폼 콘텐츠입니다.\n빠른 템포의 컷 구성과 시선을 사로잡는 효과를 통해\nSNS 매체에서 높은 도달률을 기록할 수 있도록 제작했습니다.",
            ["9:16 세로 비율", "트렌디한 편집"],
            "매체 도달 및 클릭률 향상",
        ),
        entry(
            "4",
            "캐릭터 / 일러스트 기반 모션",
            "Character",
            "일러스트레이션 캐릭터에 생동감을 불어넣은 작업입니다.\n캐릭터의 감정 변화에 따른 표정과 움직임의 타이밍을 정교하게 설계하여\n친근하고 따뜻한 무드의 브랜드 이미지를 형성합니다.",
            ["캐릭터 리깅", "자연스러운 관절 모션"],
            "브랜드 캐릭터 활성화",
        ),
        entry(
            "5",
            "UI / 앱 소개 모션",
            "UI/UX Motion",
            "애플리케이션의 핵심 기능을 설명하는 2D 가이드 영상입니다.\n사용자 시나리오를 바탕으로 한 부드러운 화면 전환과\n인터랙션 강조 효과를 적용해 서비스의 가치를 효과적으로 보여줍니다.",
            ["스크린 교체", "직관적인 가이드"],
            "신규 서비스 온보딩 지원",
        ),
    ]
}
