//! Serialize a [`HeadDocument`] to HTML.

use super::sink::{HeadDocument, HeadElement};
use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Render `<head>...</head>` with two-space indentation.
pub fn render_head(head: &HeadDocument) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Start(BytesStart::new("head")))?;

    for element in head.elements() {
        match element {
            HeadElement::Title(title) => write_text_element(&mut writer, "title", title)?,
            HeadElement::Meta { attr, key, content } => write_empty_elem(
                &mut writer,
                "meta",
                &[(attr.as_str(), key.as_str()), ("content", content.as_str())],
            )?,
            HeadElement::Link { rel, href } => {
                write_empty_elem(&mut writer, "link", &[("rel", rel.as_str()), ("href", href.as_str())])?
            }
            HeadElement::Script { id, mime, body } => {
                write_json_script(&mut writer, id, mime, body)?
            }
        }
    }

    writer.write_event(Event::End(BytesEnd::new("head")))?;
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write a JSON script element. The body is raw script text, not escaped
/// markup, so only `</` is neutralized to keep the element from closing early.
fn write_json_script(writer: &mut XmlWriter, id: &str, mime: &str, body: &str) -> Result<()> {
    let mut elem = BytesStart::new("script");
    elem.push_attribute(("id", id));
    elem.push_attribute(("type", mime));
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::from_escaped(body.replace("</", "<\\/"))))?;
    writer.write_event(Event::End(BytesEnd::new("script")))?;
    Ok(())
}
