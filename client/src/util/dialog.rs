//! Blocking browser dialogs for destructive-action guards and notices.
//!
//! Outside the browser `confirm` answers yes and `alert` is a no-op, which
//! keeps SSR and tests deterministic.

/// Prompt shown before an in-progress entry edit is thrown away.
pub const DISCARD_EDIT_PROMPT: &str = "기존 내용이 지워집니다. 그래도 이동하시겠습니까?";
pub const DELETE_ENTRY_PROMPT: &str = "정말 삭제하시겠습니까?";
pub const SETTINGS_SAVED_NOTICE: &str = "사이트 설정이 저장되었습니다.";
/// Shown when the browser refuses a write, typically a full storage quota.
pub const SAVE_FAILED_NOTICE: &str = "저장에 실패했습니다. 저장 공간이 부족할 수 있습니다 (이미지 크기를 줄여주세요).";

pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        true
    }
}

pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
