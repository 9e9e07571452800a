/// Render generated text as a bare HTML email body.
///
/// Line breaks become `<br>` first, then every `#` and `*` left over from the
/// model's markdown is dropped. Content is not HTML-escaped.
pub fn format_as_html(text: &str) -> String {
    let body = text.replace('\n', "<br>").replace(['#', '*'], "");
    format!("<html><body>{body}</body></html>")
}
