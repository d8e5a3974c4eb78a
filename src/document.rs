//! Standalone HTML document around a compiled text block.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::FontSettings;
use crate::figma::{ContainerInput, FigmaBounds, TextNodeInput};
use crate::style::value::format_number;
use crate::style::{css_rgba, FontInventory};

/// Page title, independent of the node being rendered.
pub const DOCUMENT_TITLE: &str = "Parsed JSON Content";

/// Characters `encodeURIComponent` leaves alone besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Stylesheet URL for one family: `<endpoint>?family=<name>:wght@<weights>&display=swap`.
pub fn google_font_url(endpoint: &str, family: &str, weights: &[String]) -> String {
    format!(
        "{endpoint}?family={}:wght@{}&display=swap",
        encode_uri_component(family),
        weights.join(",")
    )
}

/// One `<link rel="stylesheet">` per family, newline separated.
pub fn google_font_links(fonts: &FontInventory, endpoint: &str) -> String {
    fonts
        .iter()
        .map(|font| {
            format!(
                "<link href=\"{}\" rel=\"stylesheet\">",
                google_font_url(endpoint, &font.family, &font.weights)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assemble the page: font links, container rectangle, then the `<pre>` block.
pub fn assemble_document(
    text: &TextNodeInput,
    container: &ContainerInput,
    fonts: &FontInventory,
    settings: &FontSettings,
    pre: &str,
) -> String {
    let font_links = google_font_links(fonts, &settings.endpoint).replace('\n', "\n    ");
    let background = css_rgba(&container.background, 1.0);
    let rect = &container.rectangle;
    let border = format!(
        "{}px {} {}",
        format_number(rect.stroke_weight),
        rect.paint.paint_type.to_lowercase(),
        rect.paint
            .color
            .as_ref()
            .map(|color| css_rgba(color, 1.0))
            .unwrap_or_default()
    );
    let text_color = css_rgba(&text.color, 1.0);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    {font_links}
    <title>{title}</title>
    <style>
      @import url({default_import});

      body {{
        margin: 0;
        font-family: {default_family};
      }}
    </style>
  </head>
  <body style="height: 50dvh; display: flex; flex-direction: column; align-items: center; justify-content: center; background-color: {background};">
    <div class="rectangle" style="display: flex; flex-direction: column; align-items: center; position: relative; top: 100px; justify-content: center; border: {border}; {rect_size}">
      <div style="margin: auto 0; {text_size} color: {text_color};">
        {pre}
      </div>
    </div>
  </body>
</html>
"#,
        title = DOCUMENT_TITLE,
        default_import = settings.default_import,
        default_family = settings.default_family,
        rect_size = size_declarations(&rect.bounds),
        text_size = size_declarations(&text.bounds),
    )
}

fn size_declarations(bounds: &FigmaBounds) -> String {
    format!(
        "width: {}px; height: {}px;",
        format_number(bounds.width),
        format_number(bounds.height)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{build_font_inventory, StyleTable};
    use serde_json::json;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("Open Sans"), "Open%20Sans");
        assert_eq!(encode_uri_component("M+ 1p"), "M%2B%201p");
        assert_eq!(encode_uri_component("Noto_Sans-JP.(x)!*'~"), "Noto_Sans-JP.(x)!*'~");
        assert_eq!(encode_uri_component("Café"), "Caf%C3%A9");
    }

    #[test]
    fn font_url_joins_weights() {
        assert_eq!(
            google_font_url(
                "https://fonts.googleapis.com/css2",
                "Open Sans",
                &["400".to_string(), "700".to_string()]
            ),
            "https://fonts.googleapis.com/css2?family=Open%20Sans:wght@400,700&display=swap"
        );
    }

    #[test]
    fn family_without_weights_keeps_empty_axis() {
        assert_eq!(
            google_font_url("https://fonts.googleapis.com/css2", "Inter", &[]),
            "https://fonts.googleapis.com/css2?family=Inter:wght@&display=swap"
        );
    }

    #[test]
    fn one_link_per_family() {
        let overrides = json!({
            "0": { "fontFamily": "Inter", "fontWeight": 400 },
            "1": { "fontFamily": "Roboto", "fontWeight": 700 }
        });
        let table =
            StyleTable::from_overrides(overrides.as_object().expect("object")).expect("table");
        let links = google_font_links(
            &build_font_inventory(&table),
            "https://fonts.googleapis.com/css2",
        );
        assert_eq!(
            links,
            concat!(
                r#"<link href="https://fonts.googleapis.com/css2?family=Inter:wght@400&display=swap" rel="stylesheet">"#,
                "\n",
                r#"<link href="https://fonts.googleapis.com/css2?family=Roboto:wght@700&display=swap" rel="stylesheet">"#
            )
        );
    }
}
