//! Copy that ships with the build: process steps, tool badges, navigation,
//! and social links. None of this is persisted or editable.

/// Owner name shown in the navigation bar.
pub const SITE_TITLE: &str = "하영's Portfolio";
pub const COPYRIGHT: &str = "@ 2026 Hwang Hayeong. All rights reserved.";

/// Icon token for a process step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepIcon {
    Target,
    Layout,
    Message,
    Check,
}

impl StepIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Target => "◎",
            Self::Layout => "▦",
            Self::Message => "✎",
            Self::Check => "✓",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ProcessStep {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: StepIcon,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        id: 1,
        title: "기획 이해",
        description: "목표와 타겟을 분석하여 최적의 연출 방향을 설정합니다.",
        icon: StepIcon::Target,
    },
    ProcessStep {
        id: 2,
        title: "비주얼 전략",
        description: "스타일 프레임과 무드 보드로 시각적 톤을 맞춥니다.",
        icon: StepIcon::Layout,
    },
    ProcessStep {
        id: 3,
        title: "모션 제작",
        description: "중간 피드백을 수용하며 디테일한 움직임을 구현합니다.",
        icon: StepIcon::Message,
    },
    ProcessStep {
        id: 4,
        title: "최종 검수",
        description: "완성도 높은 결과물을 마감 기한 내에 전달합니다.",
        icon: StepIcon::Check,
    },
];

#[derive(Clone, Copy, Debug)]
pub struct ToolBadge {
    pub name: &'static str,
    pub short: &'static str,
}

pub const TOOL_BADGES: &[ToolBadge] = &[
    ToolBadge { name: "After Effects", short: "AE" },
    ToolBadge { name: "Premiere Pro", short: "PR" },
    ToolBadge { name: "Photoshop", short: "PS" },
    ToolBadge { name: "Illustrator", short: "AI" },
];

/// In-page section link. `anchor` is the element id without `#`.
#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "홈", anchor: "hero" },
    NavLink { label: "소개", anchor: "about" },
    NavLink { label: "작업물", anchor: "portfolio" },
    NavLink { label: "작업과정", anchor: "process" },
    NavLink { label: "문의", anchor: "contact" },
];

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Instagram", href: "https://www.instagram.com/hayeong0369/" },
    SocialLink { label: "YouTube", href: "https://www.youtube.com/channel/UC704hUiU8_yXi-VwKak6n6w" },
    SocialLink { label: "Be", href: "https://www.behance.net/fe5e633e" },
];

/// Two-digit ordinal used on cards and steps (`01`, `02`, ...).
pub fn ordinal(n: usize) -> String {
    format!("{n:02}")
}
