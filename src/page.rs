use crate::error::Result;
use crate::{extract_title, markdown_to_html};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Fill a page template with a document's title and rendered body.
///
/// Every occurrence of each placeholder is replaced.
pub fn render_page(template: &str, markdown: &str) -> Result<String> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;
    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}
