//! Diagram normalization: untrusted SVG text in, sanitized pane content out.
//!
//! DESIGN
//! ======
//! Uploaded pattern files are arbitrary markup. Nothing from them reaches a
//! renderer verbatim: the text is parsed, the root `<svg>` is located, and a
//! fresh element tree is re-serialized from an allow-list of SVG elements and
//! presentation attributes. Scripts, foreign objects, event handlers and
//! external references never survive.
//!
//! The root is made size-agnostic (literal `width`/`height` removed, a
//! `viewBox` derived when missing) so it scales to whatever pane it lands in,
//! and it is tagged `svg-0` / `svg-1` for the host's stylesheet.
//!
//! ERROR HANDLING
//! ==============
//! A document with no drawable root is not an error for the caller: the pane
//! simply renders empty. [`normalize`] logs and returns `None`.

#[cfg(test)]
#[path = "diagram_test.rs"]
mod diagram_test;

use roxmltree::{Document, Node, ParsingOptions};
use serde::Serialize;
use tracing::{debug, warn};

use crate::layout::Pane;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Elements copied through to the output. Anything else is dropped with its subtree.
const ALLOWED_ELEMENTS: &[&str] = &[
    "svg", "g", "defs", "symbol", "use", "path", "rect", "circle", "ellipse", "line", "polyline",
    "polygon", "text", "tspan", "textPath", "title", "desc", "linearGradient", "radialGradient",
    "stop", "clipPath", "mask", "pattern", "marker",
];

/// Elements whose character data is kept.
const TEXT_ELEMENTS: &[&str] = &["text", "tspan", "textPath", "title", "desc"];

/// Attributes copied through to the output.
const ALLOWED_ATTRIBUTES: &[&str] = &[
    "id", "class", "d", "x", "y", "x1", "y1", "x2", "y2", "dx", "dy", "cx", "cy", "r", "rx", "ry",
    "width", "height", "points", "transform", "fill", "fill-opacity", "fill-rule", "stroke",
    "stroke-width", "stroke-opacity", "stroke-dasharray", "stroke-dashoffset", "stroke-linecap",
    "stroke-linejoin", "stroke-miterlimit", "opacity", "visibility", "display", "viewBox",
    "font-family", "font-size", "font-weight", "font-style", "text-anchor", "dominant-baseline",
    "offset", "stop-color", "stop-opacity", "gradientUnits", "gradientTransform", "patternUnits",
    "patternTransform", "clipPathUnits", "clip-path", "clip-rule", "mask", "marker-start",
    "marker-mid", "marker-end", "markerWidth", "markerHeight", "markerUnits", "refX", "refY",
    "orient", "vector-effect",
];

/// Root attributes rewritten by normalization rather than copied.
const ROOT_REWRITTEN: &[&str] = &["width", "height", "viewBox", "preserveAspectRatio", "class"];

/// How the normalized root sizes itself inside its pane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SizingHint {
    /// An explicit user-space box, either kept from the source or derived
    /// from its numeric `width`/`height`.
    ViewBox { min_x: f64, min_y: f64, width: f64, height: f64 },
    /// No usable dimensions; fill the available space.
    Fill,
}

impl SizingHint {
    /// Width-over-height ratio, when known.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        match *self {
            Self::ViewBox { width, height, .. } => Some(width / height),
            Self::Fill => None,
        }
    }

    fn attribute(&self) -> Option<String> {
        match *self {
            Self::ViewBox { min_x, min_y, width, height } => Some(format!("{min_x} {min_y} {width} {height}")),
            Self::Fill => None,
        }
    }
}

/// One normalized pattern diagram, ready to render in its pane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    index: Pane,
    source_name: String,
    content: String,
    sizing: SizingHint,
}

impl Diagram {
    /// Which pane this diagram is shown in.
    #[must_use]
    pub fn index(&self) -> Pane {
        self.index
    }

    /// Original file name, for display only.
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Sanitized, size-agnostic SVG markup.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn sizing(&self) -> SizingHint {
        self.sizing
    }
}

/// Normalize raw SVG text for display in `pane`.
///
/// Returns `None` when the text does not parse or contains no `<svg>` root.
#[must_use]
pub fn normalize(text: &str, source_name: &str, pane: Pane) -> Option<Diagram> {
    let options = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
    let doc = match Document::parse_with_options(text, options) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(source = source_name, pane = pane.index(), error = %e, "diagram did not parse");
            return None;
        }
    };

    let Some(root) = find_svg_root(&doc) else {
        warn!(source = source_name, pane = pane.index(), "diagram has no <svg> root");
        return None;
    };

    let sizing = sizing_hint(root);
    let mut content = String::with_capacity(text.len());
    write_root(&mut content, root, pane, sizing);

    debug!(source = source_name, pane = pane.index(), bytes = content.len(), "diagram normalized");
    Some(Diagram { index: pane, source_name: source_name.to_string(), content, sizing })
}

fn find_svg_root<'a, 'input>(doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
    let root = doc.root_element();
    if is_svg_element(root, "svg") {
        return Some(root);
    }
    root.descendants().find(|n| is_svg_element(*n, "svg"))
}

fn is_svg_element(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace().map_or(true, |ns| ns == SVG_NS)
}

// =============================================================
// Sizing
// =============================================================

fn sizing_hint(root: Node<'_, '_>) -> SizingHint {
    if let Some(vb) = root.attribute("viewBox").and_then(parse_view_box) {
        return vb;
    }
    let width = root.attribute("width").and_then(parse_length);
    let height = root.attribute("height").and_then(parse_length);
    match (width, height) {
        (Some(width), Some(height)) => SizingHint::ViewBox { min_x: 0.0, min_y: 0.0, width, height },
        _ => SizingHint::Fill,
    }
}

fn parse_view_box(raw: &str) -> Option<SizingHint> {
    let Ok(nums) = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse::<f64>)
        .collect::<Result<Vec<_>, _>>()
    else {
        return None;
    };
    let [min_x, min_y, width, height] = nums.as_slice() else {
        return None;
    };
    let all_finite = [*min_x, *min_y, *width, *height].iter().all(|v| v.is_finite());
    if !all_finite || *width <= 0.0 || *height <= 0.0 {
        return None;
    }
    Some(SizingHint::ViewBox { min_x: *min_x, min_y: *min_y, width: *width, height: *height })
}

/// Parse a plain or `px` length. Relative units and percentages yield `None`.
fn parse_length(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    match number.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => None,
    }
}

// =============================================================
// Serialization
// =============================================================

fn write_root(out: &mut String, root: Node<'_, '_>, pane: Pane, sizing: SizingHint) {
    out.push_str("<svg xmlns=\"");
    out.push_str(SVG_NS);
    out.push('"');

    let marker = format!("svg-{}", pane.index());
    let class = match root.attribute("class").map(str::trim).filter(|c| !c.is_empty()) {
        Some(existing) => format!("{existing} {marker}"),
        None => marker,
    };
    push_attr(out, "class", &class);
    if let Some(vb) = sizing.attribute() {
        push_attr(out, "viewBox", &vb);
    }
    push_attr(out, "preserveAspectRatio", "xMidYMid meet");

    for attr in root.attributes() {
        if attr.namespace().is_some() || ROOT_REWRITTEN.contains(&attr.name()) {
            continue;
        }
        if let Some(value) = allowed_value(attr.name(), attr.value()) {
            push_attr(out, attr.name(), value);
        }
    }
    out.push('>');
    write_children(out, root, false);
    out.push_str("</svg>");
}

fn write_element(out: &mut String, node: Node<'_, '_>) {
    let name = node.tag_name().name();
    out.push('<');
    out.push_str(name);
    for attr in node.attributes() {
        let local = attr.name();
        if local == "href" {
            let ns_ok = attr.namespace().map_or(true, |ns| ns == XLINK_NS);
            if ns_ok && attr.value().starts_with('#') {
                push_attr(out, "href", attr.value());
            }
            continue;
        }
        if attr.namespace().is_some() {
            continue;
        }
        if let Some(value) = allowed_value(local, attr.value()) {
            push_attr(out, local, value);
        }
    }
    out.push('>');
    write_children(out, node, TEXT_ELEMENTS.contains(&name));
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_children(out: &mut String, node: Node<'_, '_>, keep_text: bool) {
    for child in node.children() {
        if child.is_element() {
            let name = child.tag_name().name();
            if ALLOWED_ELEMENTS.contains(&name) && is_svg_element(child, name) {
                write_element(out, child);
            }
        } else if keep_text && child.is_text() {
            if let Some(text) = child.text() {
                push_escaped(out, text);
            }
        }
    }
}

fn allowed_value<'v>(name: &str, value: &'v str) -> Option<&'v str> {
    if !ALLOWED_ATTRIBUTES.contains(&name) {
        return None;
    }
    let lowered = value.to_ascii_lowercase();
    if lowered.contains("javascript:") || lowered.contains("data:") {
        return None;
    }
    if lowered.contains("url(") && !references_local_only(&lowered) {
        return None;
    }
    Some(value)
}

/// Every `url(...)` in the value must point at a same-document fragment.
fn references_local_only(value: &str) -> bool {
    value.match_indices("url(").all(|(i, _)| {
        let rest = value[i + 4..].trim_start_matches(['\'', '"', ' ']);
        rest.starts_with('#')
    })
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value);
    out.push('"');
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
}
