//! Footer copyright year.

#[cfg(feature = "hydrate")]
use crate::consts::YEAR_ID;

/// Write the current local calendar year into the `year` element. Runs once;
/// a page left open across New Year keeps the old value until reloaded.
#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document) {
    let Some(el) = document.get_element_by_id(YEAR_ID) else {
        return;
    };
    let year = js_sys::Date::new_0().get_full_year();
    el.set_text_content(Some(&year.to_string()));
}
