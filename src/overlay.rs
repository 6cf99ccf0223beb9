use web_sys as web;

use crate::dom;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("help-overlay") {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("help-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id("help-overlay") {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Refresh the selected-seats line shown next to the canvas.
pub fn update_seat_summary(document: &web::Document, selected_labels: &[String]) {
    let text = if selected_labels.is_empty() {
        "Selected seats: none".to_string()
    } else {
        format!("Selected seats: {}", selected_labels.join(", "))
    };
    dom::set_element_text(document, "seat-summary", &text);
}

/// Keep the mute button caption in sync with the video element.
pub fn update_mute_button(document: &web::Document, muted: bool) {
    let caption = if muted {
        "Turn Sound On"
    } else {
        "Turn Sound Off"
    };
    dom::set_element_text(document, "mute-toggle", caption);
}
