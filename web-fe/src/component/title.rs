use anyhow::*;
use web_sys::window;
use yew::prelude::*;

/// Keeps `document.title` in sync with `title`.
#[hook]
pub fn use_document_title(title: &'static str) {
    use_effect_with(title, |title| {
        if let Err(e) = set_document_title(title) {
            log::error!("set document title error: {e}");
        }
    });
}

fn set_document_title(title: &str) -> Result<(), Error> {
    let document = window()
        .ok_or(anyhow!("window not found"))?
        .document()
        .ok_or(anyhow!("document not found"))?;
    document.set_title(title);
    Ok(())
}
