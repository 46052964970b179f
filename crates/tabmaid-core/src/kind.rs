//! Diagram family identifiers.
//!
//! [`DiagramKind`] is the closed roster of diagram families tabmaid can
//! compile. Every dispatch in the compiler is an exhaustive match over this
//! enum, so adding or removing a family is a compile-time-checked change.

use std::{fmt, str::FromStr};

use crate::error::TabmaidError;

/// One of the nine supported diagram families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    State,
    Class,
    Er,
    Gantt,
    Pie,
    Mindmap,
    Timeline,
}

impl DiagramKind {
    /// All families, in registry order.
    pub const ALL: [DiagramKind; 9] = [
        DiagramKind::Flowchart,
        DiagramKind::Sequence,
        DiagramKind::State,
        DiagramKind::Class,
        DiagramKind::Er,
        DiagramKind::Gantt,
        DiagramKind::Pie,
        DiagramKind::Mindmap,
        DiagramKind::Timeline,
    ];

    /// The lowercase wire identifier for this family.
    ///
    /// This is the value used in row documents, template ids, and
    /// [`FromStr`] parsing.
    pub fn id(&self) -> &'static str {
        match self {
            DiagramKind::Flowchart => "flowchart",
            DiagramKind::Sequence => "sequence",
            DiagramKind::State => "state",
            DiagramKind::Class => "class",
            DiagramKind::Er => "er",
            DiagramKind::Gantt => "gantt",
            DiagramKind::Pie => "pie",
            DiagramKind::Mindmap => "mindmap",
            DiagramKind::Timeline => "timeline",
        }
    }

    /// Human-readable display label for this family.
    pub fn label(&self) -> &'static str {
        match self {
            DiagramKind::Flowchart => "Flowchart",
            DiagramKind::Sequence => "Sequence diagram",
            DiagramKind::State => "State diagram",
            DiagramKind::Class => "Class diagram",
            DiagramKind::Er => "ER diagram",
            DiagramKind::Gantt => "Gantt chart",
            DiagramKind::Pie => "Pie chart",
            DiagramKind::Mindmap => "Mindmap",
            DiagramKind::Timeline => "Timeline",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DiagramKind {
    type Err = TabmaidError;

    /// Parses a wire identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TabmaidError::UnknownKind`] for anything that is not one of
    /// the nine family identifiers. There is no fallback family.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiagramKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| TabmaidError::UnknownKind(s.to_string()))
    }
}
