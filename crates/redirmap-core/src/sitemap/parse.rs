//! Strict `<loc>` extraction with quick-xml.

use anyhow::Result;
use quick_xml::escape::unescape;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Collects the text of every `<loc>` element (any namespace prefix), in
/// document order. Errors on XML that is not well-formed.
pub fn parse_locs(data: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(data);
    let mut buf = Vec::new();
    let mut locs = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"loc" => {
                current = Some(String::new());
            }
            Ok(Event::End(e)) if e.local_name().as_ref() == b"loc" => {
                if let Some(value) = current.take() {
                    let value = value.trim();
                    if !value.is_empty() {
                        locs.push(value.to_string());
                    }
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(value) = current.as_mut() {
                    value.push_str(&String::from_utf8_lossy(&t));
                }
            }
            Ok(Event::CData(c)) => {
                if let Some(value) = current.as_mut() {
                    value.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Ok(Event::GeneralRef(r)) => {
                if let Some(value) = current.as_mut() {
                    let raw = format!("&{};", String::from_utf8_lossy(&r));
                    match unescape(&raw) {
                        Ok(resolved) => value.push_str(&resolved),
                        Err(_) => value.push_str(&raw),
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => anyhow::bail!(
                "XML parse error at position {}: {:?}",
                reader.error_position(),
                e
            ),
        }
        buf.clear();
    }

    Ok(locs)
}
