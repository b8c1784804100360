//! XML response rendering
//!
//! The API speaks a fixed four-element shape, so the writer is a plain
//! string builder; every value passes through `escape` on the way out.

use std::borrow::Cow;

use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::domain::entities::Pokemon;

/// Declaration emitted as the first bytes of every response body
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// An XML body served with `Content-Type: application/xml`
#[derive(Debug)]
pub struct Xml(pub String);

impl IntoResponse for Xml {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "application/xml")], self.0).into_response()
    }
}

/// Escape the five XML special characters
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Write `<tag>value</tag>`; a missing value becomes an empty element,
/// never an omitted one
fn push_element(out: &mut String, tag: &str, value: Option<&str>) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    if let Some(value) = value {
        out.push_str(&escape(value));
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_pokemon(out: &mut String, pokemon: &Pokemon) {
    out.push_str("<pokemon>");
    push_element(out, "name", Some(&pokemon.name));
    push_element(out, "sprite", pokemon.sprite_front_default.as_deref());
    push_element(out, "primary_type", Some(&pokemon.primary_type));
    push_element(out, "secondary_type", pokemon.secondary_type.as_deref());
    out.push_str("</pokemon>");
}

/// Render the search response body, declaration included.
///
/// Zero rows yield the empty `<pokemon_list>` wrapper in both modes; a
/// random hit is a bare `<pokemon>` element with no wrapper.
pub fn render_search_result(pokemon: &[Pokemon], random: bool) -> String {
    let mut body = String::from(XML_DECLARATION);
    match pokemon {
        [] => body.push_str("<pokemon_list></pokemon_list>"),
        [first, ..] if random => push_pokemon(&mut body, first),
        rows => {
            body.push_str("<pokemon_list>");
            for p in rows {
                push_pokemon(&mut body, p);
            }
            body.push_str("</pokemon_list>");
        }
    }
    body
}

/// Render a fixed `<error>` body, declaration included
pub fn render_error(message: &str) -> String {
    format!("{XML_DECLARATION}<error>{}</error>", escape(message))
}
