use std::fmt;
use std::sync::{Arc, RwLock};

use hashbrown::HashMap;
use thiserror::Error;

use super::definition::Definition;
use crate::diagnostics::{Diagnostics, NoopDiagnostics};
use crate::material::{Material, Phase};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unclosed action starting at byte {at}")]
    Unclosed { at: usize },

    #[error("empty action at byte {at}")]
    EmptyAction { at: usize },

    #[error("unknown field `{field}` at byte {at}")]
    UnknownField { field: String, at: usize },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PhaseSel {
    Solid,
    Liquid,
    Gas,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FieldSel {
    Name,
    Adjective,
    Color,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field(PhaseSel, FieldSel),
    Type,
}

/// A compiled name template.
///
/// Literal text with `{{ .Phase.Field }}` actions, where `Phase` is one of
/// `Solid`, `Liquid`, `Gas` and `Field` is one of `Name`, `Adjective`,
/// `Color`. `{{ .Type }}` expands to the material category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn compile(src: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = src;
        let mut offset = 0usize;
        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_string()));
            }
            let at = offset + open;
            let after_open = &rest[open + 2..];
            let close = after_open
                .find("}}")
                .ok_or(TemplateError::Unclosed { at })?;
            segments.push(parse_action(after_open[..close].trim(), at)?);
            let consumed = open + 2 + close + 2;
            rest = &rest[consumed..];
            offset += consumed;
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }
        Ok(Self { segments })
    }

    pub fn render(&self, material: &Material) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            match seg {
                Segment::Text(s) => out.push_str(s),
                Segment::Type => out.push_str(material.kind.name()),
                Segment::Field(phase, field) => {
                    let p: &Phase = match phase {
                        PhaseSel::Solid => &material.solid,
                        PhaseSel::Liquid => &material.liquid,
                        PhaseSel::Gas => &material.gas,
                    };
                    match field {
                        FieldSel::Name => out.push_str(&p.name),
                        FieldSel::Adjective => out.push_str(&p.adjective),
                        FieldSel::Color => out.push_str(p.color.name()),
                    }
                }
            }
        }
        out
    }
}

fn parse_action(action: &str, at: usize) -> Result<Segment, TemplateError> {
    if action.is_empty() {
        return Err(TemplateError::EmptyAction { at });
    }
    let unknown = || TemplateError::UnknownField {
        field: action.to_string(),
        at,
    };
    let path = action.strip_prefix('.').ok_or_else(unknown)?;
    let mut parts = path.split('.');
    let head = parts.next().ok_or_else(unknown)?;
    let tail = parts.next();
    if parts.next().is_some() {
        return Err(unknown());
    }
    let phase = match (head, tail) {
        ("Type", None) => return Ok(Segment::Type),
        ("Solid", Some(_)) => PhaseSel::Solid,
        ("Liquid", Some(_)) => PhaseSel::Liquid,
        ("Gas", Some(_)) => PhaseSel::Gas,
        _ => return Err(unknown()),
    };
    let field = match tail {
        Some("Name") => FieldSel::Name,
        Some("Adjective") => FieldSel::Adjective,
        Some("Color") => FieldSel::Color,
        _ => return Err(unknown()),
    };
    Ok(Segment::Field(phase, field))
}

/// Compiled templates keyed by definition id, filled on first lookup.
///
/// A template that fails to compile is reported once through the
/// diagnostics sink and renders as an empty string from then on.
pub struct TemplateCache {
    compiled: RwLock<HashMap<String, Option<Arc<Template>>>>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(NoopDiagnostics))
    }

    pub fn with_diagnostics(diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self {
            compiled: RwLock::new(HashMap::new()),
            diagnostics,
        }
    }

    /// Resolves `def`'s name template against `material`.
    pub fn name(&self, def: &Definition, material: &Material) -> String {
        match self.lookup(def) {
            Some(t) => t.render(material),
            None => String::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.compiled.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, def: &Definition) -> Option<Arc<Template>> {
        if let Ok(cache) = self.compiled.read() {
            if let Some(entry) = cache.get(def.id.as_str()) {
                return entry.clone();
            }
        }

        let compiled = match Template::compile(&def.name) {
            Ok(t) => Some(Arc::new(t)),
            Err(err) => {
                self.diagnostics.warn(
                    "tiles",
                    &format_args!("failed to compile name template for {}: {}", def.id, err),
                );
                None
            }
        };

        if let Ok(mut cache) = self.compiled.write() {
            return cache
                .entry(def.id.clone())
                .or_insert(compiled)
                .clone();
        }
        compiled
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TemplateCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateCache")
            .field("entries", &self.len())
            .finish()
    }
}
