use web_sys::{Document, HtmlElement, Window};

use crate::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn viewport_width(window: &Window) -> Result<f64, DomError> {
    Ok(window.inner_width()?.as_f64().unwrap_or_default())
}

pub fn viewport_height(window: &Window) -> Result<f64, DomError> {
    Ok(window.inner_height()?.as_f64().unwrap_or_default())
}

/// Full scrollable height of the page.
pub fn document_height() -> Result<f64, DomError> {
    let root = document()?
        .document_element()
        .ok_or(DomError::Missing("html"))?;
    Ok(root.scroll_height() as f64)
}

fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::Missing("body"))
}

/// Stops the page from scrolling while an overlay owns the screen.
pub fn lock_scroll() -> Result<(), DomError> {
    body()?.style().set_property("overflow", "hidden")?;
    Ok(())
}

pub fn unlock_scroll() -> Result<(), DomError> {
    body()?.style().remove_property("overflow")?;
    Ok(())
}
