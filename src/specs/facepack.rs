// src/specs/facepack.rs
//! Portrait mappings from a graphics pack `config.xml`.
//!
//! ```xml
//! <record from="Heffler" to="graphics/pictures/person/12345/portrait"/>
//! ```
//!
//! Every element carrying both `from` and `to` is considered; `to` must contain
//! `/person/<id>/portrait`. Later records for the same id replace earlier ones.

use std::borrow::Cow;
use std::sync::LazyLock;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use regex::Regex;

use crate::config::consts::{MAPPING_FROM_ATTR, MAPPING_TO_ATTR, PORTRAIT_PATTERN};
use crate::data::FacepackMapping;
use crate::error::Result;

static PORTRAIT_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(PORTRAIT_PATTERN) {
    Ok(re) => re,
    Err(e) => panic!("built-in portrait pattern failed to compile: {e}"),
});

/// Parse a manifest. Fails only if the XML itself is malformed.
pub fn extract_facepack_mapping(xml: &str) -> Result<FacepackMapping> {
    let mut reader = Reader::from_str(xml);
    let mut mapping = FacepackMapping::new();
    let mut seen = 0usize;

    loop {
        let event = reader.read_event().map_err(|e| {
            loge!("Facepack: malformed XML at byte {}: {}", reader.buffer_position(), e);
            e
        })?;
        match event {
            Event::Start(e) | Event::Empty(e) => {
                let Some((from, to)) = from_to(&e) else { continue };
                seen += 1;
                match person_id(&to) {
                    Some(id) => { mapping.insert(id, from); }
                    None => logd!("Facepack: skipping to={:?}", to),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    logd!("Facepack: {} record(s), {} mapped", seen, mapping.len());
    Ok(mapping)
}

/// Id from a `to` path, if it points at a person portrait.
pub fn person_id(to: &str) -> Option<String> {
    PORTRAIT_RE.captures(to).map(|c| s!(&c[1]))
}

/// Both attribute values, unescaped. An element whose attribute list fails
/// to parse (duplicate or unquoted attribute) is skipped as a whole.
fn from_to(e: &BytesStart<'_>) -> Option<(String, String)> {
    let mut from = None;
    let mut to = None;
    for attr in e.attributes() {
        let attr = match attr {
            Ok(attr) => attr,
            Err(err) => {
                logd!("Facepack: skipping element with bad attributes: {}", err);
                return None;
            }
        };
        let key = attr.key.as_ref();
        let slot = if key == MAPPING_FROM_ATTR {
            &mut from
        } else if key == MAPPING_TO_ATTR {
            &mut to
        } else {
            continue;
        };
        let raw = String::from_utf8_lossy(&attr.value);
        let value = quick_xml::escape::unescape(&raw)
            .map(Cow::into_owned)
            .unwrap_or_else(|_| raw.to_string());
        *slot = Some(value);
    }
    Some((from?, to?))
}
