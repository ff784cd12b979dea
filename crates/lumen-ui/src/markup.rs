//! HTML-like serialisation of a view tree.
//!
//! Ids are stamped depth-first starting at 1, so the same tree always yields
//! the same ids. Buttons become hit regions; every node with semantics (or a
//! text node) becomes a semantics node.

use std::fmt::Write as _;

use lumen_core::*;

pub fn paint_markup(root: &View) -> (String, Vec<HitRegion>, Vec<SemNode>) {
    let mut next_id = 1u64;
    let mut out = String::new();
    let mut hits = Vec::new();
    let mut sems = Vec::new();
    walk(root, &mut next_id, &mut out, &mut hits, &mut sems);
    log::trace!("painted {} bytes, {} hit regions", out.len(), hits.len());
    (out, hits, sems)
}

fn walk(
    v: &View,
    next_id: &mut u64,
    out: &mut String,
    hits: &mut Vec<HitRegion>,
    sems: &mut Vec<SemNode>,
) {
    let id = *next_id;
    *next_id += 1;

    if let Some(s) = &v.semantics {
        sems.push(SemNode {
            id,
            role: s.role,
            label: s.label.clone(),
        });
    }

    match &v.kind {
        ViewKind::Box => {
            open_tag(out, "div", &v.modifier, &[]);
            out.push('>');
            for c in &v.children {
                walk(c, next_id, out, hits, sems);
            }
            out.push_str("</div>");
        }
        ViewKind::Text { text } => {
            if v.semantics.is_none() {
                sems.push(SemNode {
                    id,
                    role: Role::Text,
                    label: Some(text.clone()),
                });
            }
            out.push_str(&escape(text));
        }
        ViewKind::Button { text, on_click } => {
            hits.push(HitRegion {
                id,
                label: text.clone(),
                on_click: on_click.clone(),
            });
            open_tag(out, "button", &v.modifier, &[]);
            out.push('>');
            out.push_str(&escape(text));
            out.push_str("</button>");
        }
        ViewKind::Image { src, alt } => {
            open_tag(out, "img", &v.modifier, &[("alt", alt), ("src", src)]);
            out.push_str("/>");
        }
        ViewKind::LineBreak => out.push_str("<br/>"),
    }
}

fn open_tag(out: &mut String, tag: &str, m: &Modifier, attrs: &[(&str, &str)]) {
    out.push('<');
    out.push_str(tag);
    if let Some(class) = m.class_attr() {
        let _ = write!(out, " class=\"{}\"", escape(&class));
    }
    for (name, value) in attrs {
        let _ = write!(out, " {name}=\"{}\"", escape(value));
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
