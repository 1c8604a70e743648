use super::*;

#[test]
fn size_warning_only_above_two_megabytes() {
    assert_eq!(size_warning(0.0), None);
    assert_eq!(size_warning(2.0 * 1024.0 * 1024.0), None);
    assert_eq!(size_warning(2.0 * 1024.0 * 1024.0 + 1.0), Some(OVERSIZE_WARNING));
}

#[test]
fn is_data_uri_distinguishes_inline_images() {
    assert!(is_data_uri("data:image/png;base64,AAAA"));
    assert!(!is_data_uri("/assets/logo.png"));
    assert!(!is_data_uri(""));
}

#[test]
fn describe_image_labels_each_kind() {
    assert_eq!(describe_image(""), "(none)");
    assert_eq!(describe_image("/assets/profile.jpg"), "/assets/profile.jpg");
    let inline = format!("data:image/jpeg;base64,{}", "A".repeat(4096));
    assert_eq!(describe_image(&inline), "uploaded image/jpeg (4 KB inline)");
}
