//! Project manifest parsing
//!
//! Extracts the names of the projects a manifest references through
//! `<ProjectReference Include="..\Other\Other.csproj" />` elements.
//!
//! Manifests come in two flavours: legacy ones declare the MSBuild default
//! namespace on the root element, SDK-style ones declare none. With a
//! namespaced root only elements in that namespace count; without one any
//! element whose tag contains `ProjectReference` counts, which also accepts
//! prefixed tags such as `<msb:ProjectReference>`.

use std::collections::BTreeSet;
use std::path::Path;

use miette::NamedSource;
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};

use crate::constants::manifest::{INCLUDE_ATTRIBUTE, REFERENCE_ELEMENT};
use crate::error::{ManifestParseError, SlnGraphError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Source of the raw project references declared by a manifest
pub trait ReferenceReader {
    fn read_references(&self, manifest_path: &Path) -> Result<BTreeSet<String>, SlnGraphError>;
}

/// Reads project references from `.csproj` manifests on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestParser;

impl ManifestParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_references(
        &self,
        manifest_path: &Path,
    ) -> Result<BTreeSet<String>, SlnGraphError> {
        if !manifest_path.exists() {
            return Err(SlnGraphError::MissingFile {
                path: manifest_path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(manifest_path).map_err(|source| {
            SlnGraphError::FileReadError {
                path: manifest_path.to_path_buf(),
                source,
            }
        })?;
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

        match std::str::from_utf8(bytes) {
            Ok(content) => self.parse_str(content, manifest_path),
            Err(e) => Err(invalid_manifest(
                manifest_path,
                &String::from_utf8_lossy(bytes),
                format!("content is not valid UTF-8 ({e})"),
                None,
                None,
            )),
        }
    }

    /// Parse manifest text; `manifest_path` is only used for error reporting
    pub fn parse_str(
        &self,
        content: &str,
        manifest_path: &Path,
    ) -> Result<BTreeSet<String>, SlnGraphError> {
        let mut reader = NsReader::from_str(content);

        match scan(&mut reader, manifest_path) {
            Ok(references) => Ok(references),
            Err(ScanError::Reference(err)) => Err(err),
            Err(ScanError::Markup { reason, source }) => {
                let offset = (reader.buffer_position() as usize).min(content.len());
                Err(invalid_manifest(
                    manifest_path,
                    content,
                    reason,
                    Some(offset),
                    source,
                ))
            }
        }
    }
}

impl ReferenceReader for ManifestParser {
    fn read_references(&self, manifest_path: &Path) -> Result<BTreeSet<String>, SlnGraphError> {
        self.parse_references(manifest_path)
    }
}

enum ScanError {
    Markup {
        reason: String,
        source: Option<quick_xml::Error>,
    },
    Reference(SlnGraphError),
}

impl ScanError {
    fn markup(reason: impl Into<String>) -> Self {
        ScanError::Markup {
            reason: reason.into(),
            source: None,
        }
    }
}

impl From<quick_xml::Error> for ScanError {
    fn from(err: quick_xml::Error) -> Self {
        ScanError::Markup {
            reason: err.to_string(),
            source: Some(err),
        }
    }
}

fn scan(
    reader: &mut NsReader<&[u8]>,
    manifest_path: &Path,
) -> Result<BTreeSet<String>, ScanError> {
    let mut references = BTreeSet::new();
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut root_seen = false;
    let mut root_namespace: Option<Vec<u8>> = None;

    loop {
        let (resolved, event) = reader.read_resolved_event()?;

        match event {
            Event::Start(ref element) | Event::Empty(ref element) => {
                if open.is_empty() {
                    if root_seen {
                        return Err(ScanError::markup("multiple root elements"));
                    }
                    root_seen = true;
                    if let ResolveResult::Bound(Namespace(ns)) = resolved {
                        root_namespace = Some(ns.to_vec());
                    }
                }

                if is_reference(root_namespace.as_deref(), &resolved, element) {
                    if let Some(name) = reference_name(element, manifest_path)? {
                        references.insert(name);
                    }
                }

                if matches!(event, Event::Start(_)) {
                    open.push(element.name().as_ref().to_vec());
                }
            }
            Event::End(ref element) => match open.pop() {
                Some(name) if name == element.name().as_ref() => {}
                Some(name) => {
                    return Err(ScanError::markup(format!(
                        "expected </{}>, found </{}>",
                        String::from_utf8_lossy(&name),
                        String::from_utf8_lossy(element.name().as_ref())
                    )));
                }
                None => {
                    return Err(ScanError::markup(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(element.name().as_ref())
                    )));
                }
            },
            Event::Eof => {
                if let Some(name) = open.last() {
                    return Err(ScanError::markup(format!(
                        "unclosed element <{}>",
                        String::from_utf8_lossy(name)
                    )));
                }
                if !root_seen {
                    return Err(ScanError::markup("document has no root element"));
                }
                return Ok(references);
            }
            _ => {}
        }
    }
}

fn is_reference(
    root_namespace: Option<&[u8]>,
    resolved: &ResolveResult<'_>,
    element: &BytesStart<'_>,
) -> bool {
    match root_namespace {
        Some(root) => {
            matches!(resolved, ResolveResult::Bound(Namespace(ns)) if *ns == root)
                && element.local_name().as_ref() == REFERENCE_ELEMENT.as_bytes()
        }
        None => String::from_utf8_lossy(element.name().as_ref()).contains(REFERENCE_ELEMENT),
    }
}

/// Project name named by the element's `Include` attribute
///
/// A missing or blank `Include` names nothing and yields `None`.
fn reference_name(
    element: &BytesStart<'_>,
    manifest_path: &Path,
) -> Result<Option<String>, ScanError> {
    let attribute = element
        .try_get_attribute(INCLUDE_ATTRIBUTE)
        .map_err(|e| ScanError::from(quick_xml::Error::from(e)))?;
    let Some(attribute) = attribute else {
        return Ok(None);
    };

    let invalid = |value: &str| {
        ScanError::Reference(SlnGraphError::InvalidReference {
            manifest: manifest_path.to_path_buf(),
            value: value.to_string(),
        })
    };

    let value = attribute
        .unescape_value()
        .map_err(|_| invalid(&String::from_utf8_lossy(&attribute.value)))?;

    if value.trim().is_empty() {
        return Ok(None);
    }

    let normalized = value.trim().replace('\\', "/");
    Path::new(&normalized)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(|stem| Some(stem.to_string()))
        .ok_or_else(|| invalid(&value))
}

fn invalid_manifest(
    manifest_path: &Path,
    content: &str,
    reason: String,
    offset: Option<usize>,
    source: Option<quick_xml::Error>,
) -> SlnGraphError {
    let file = manifest_path.display().to_string();
    SlnGraphError::InvalidManifest(Box::new(ManifestParseError {
        source_code: NamedSource::new(file.clone(), content.to_string()),
        file,
        reason,
        span: offset.map(|offset| (offset, 0).into()),
        source,
    }))
}
