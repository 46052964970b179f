//! Typed row records, one per diagram family.
//!
//! A row is plain data: every field is an `Option<String>`, and an absent or
//! empty field means "no value", never an error. Rows have no identity
//! beyond their position in the row sequence.
//!
//! [`RowSet`] is the closed union of a family and its rows. It is the unit
//! the compiler consumes, and the unit a row document deserializes into: the
//! `diagram` tag selects the family, and each row is validated against that
//! family's field set (a misspelled field is rejected at construction, not
//! silently ignored at compile time).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{error::TabmaidError, kind::DiagramKind};

/// One flowchart step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowRow {
    /// Step identifier referenced by other rows' `next` fields.
    pub id: Option<String>,
    /// Step display name.
    pub name: Option<String>,
    /// Step kind: `start`, `task`, `decision`, or `end`.
    pub kind: Option<String>,
    /// Explicit node shape; falls back to a kind-derived default.
    pub shape: Option<String>,
    /// Swimlane assignee.
    pub assignee: Option<String>,
    /// Comma-separated successor step ids.
    pub next: Option<String>,
    /// Edge condition label.
    pub condition: Option<String>,
    /// Edge style: `solid`, `dotted`, or `thick`.
    pub arrow: Option<String>,
    /// Subgraph group label.
    pub group: Option<String>,
    /// Free-text note appended to the node label.
    pub notes: Option<String>,
}

impl FlowRow {
    /// A fresh editor row with the family's default field values.
    pub fn seed() -> Self {
        FlowRow {
            kind: Some("task".to_string()),
            shape: Some("rectangle".to_string()),
            arrow: Some("solid".to_string()),
            ..FlowRow::default()
        }
    }
}

/// One sequence-diagram message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SequenceRow {
    pub sender: Option<String>,
    pub receiver: Option<String>,
    pub message: Option<String>,
    /// Arrow kind: `->>`, `-->>`, `-)`, `--)`, `-x`, or `--x`.
    pub arrow: Option<String>,
    /// `activate`, `deactivate`, or empty for none.
    pub activation: Option<String>,
    /// Note rendered over the sender and receiver.
    pub note: Option<String>,
}

impl SequenceRow {
    /// A fresh editor row with the family's default field values.
    pub fn seed() -> Self {
        SequenceRow {
            arrow: Some("->>".to_string()),
            ..SequenceRow::default()
        }
    }
}

/// One state-machine state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StateRow {
    /// State identifier referenced by other rows' `next` fields.
    pub id: Option<String>,
    /// State display name; the reserved marker `[*]` denotes start/end.
    pub name: Option<String>,
    /// State kind: `state`, `choice`, `fork`, or `join`.
    pub kind: Option<String>,
    /// Comma-separated next-state ids.
    pub next: Option<String>,
    /// Transition trigger label.
    pub trigger: Option<String>,
    /// Note attached right of the state.
    pub notes: Option<String>,
}

impl StateRow {
    /// A fresh editor row with the family's default field values.
    pub fn seed() -> Self {
        StateRow {
            kind: Some("state".to_string()),
            ..StateRow::default()
        }
    }
}

/// One class-model type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassRow {
    pub name: Option<String>,
    /// Type kind: `class`, `interface`, or `abstract`.
    pub kind: Option<String>,
    /// Semicolon-separated member declarations.
    pub members: Option<String>,
    /// Semicolon-separated method names; bare names get `()` appended.
    pub methods: Option<String>,
    /// Comma-separated related type names.
    pub related: Option<String>,
    /// Relation kind selecting the connector glyph.
    pub relation: Option<String>,
}

impl ClassRow {
    /// A fresh editor row with the family's default field values.
    pub fn seed() -> Self {
        ClassRow {
            kind: Some("class".to_string()),
            ..ClassRow::default()
        }
    }
}

/// One entity attribute, optionally carrying a relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ErRow {
    pub entity: Option<String>,
    pub attribute: Option<String>,
    /// Attribute type; `PK` and `FK` are key-role markers.
    pub attribute_type: Option<String>,
    /// Related entity name.
    pub related: Option<String>,
    /// Cardinality: `1-1`, `1-N`, `N-1`, or `N-N`.
    pub relation: Option<String>,
}

impl ErRow {
    /// A fresh editor row with the family's default field values.
    pub fn seed() -> Self {
        ErRow {
            attribute_type: Some("string".to_string()),
            ..ErRow::default()
        }
    }
}

/// One schedule task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GanttRow {
    pub section: Option<String>,
    pub task: Option<String>,
    /// Status tag emitted verbatim; may itself contain a comma
    /// (e.g. `active, crit`).
    pub status: Option<String>,
    pub start: Option<String>,
    pub duration: Option<String>,
}

impl GanttRow {
    /// A fresh editor row with the family's default field values.
    pub fn seed() -> Self {
        GanttRow::default()
    }
}

/// One pie slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PieRow {
    pub label: Option<String>,
    /// Numeric value in string form; non-numeric values are skipped.
    pub value: Option<String>,
}

impl PieRow {
    /// A fresh editor row with the family's default field values.
    pub fn seed() -> Self {
        PieRow::default()
    }
}

/// One mindmap item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MindmapRow {
    /// Item text, also the key other rows' `parent` fields reference.
    pub item: Option<String>,
    /// Parent item key; empty or unmatched makes this row a root.
    pub parent: Option<String>,
    /// Node shape: `square`, `rounded`, `circle`, `bang`, `cloud`,
    /// or `hexagon`.
    pub shape: Option<String>,
}

impl MindmapRow {
    /// A fresh editor row with the family's default field values.
    pub fn seed() -> Self {
        MindmapRow::default()
    }
}

/// One timeline period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineRow {
    pub section: Option<String>,
    pub period: Option<String>,
    /// Semicolon-separated events for this period.
    pub events: Option<String>,
}

impl TimelineRow {
    /// A fresh editor row with the family's default field values.
    pub fn seed() -> Self {
        TimelineRow::default()
    }
}

/// A diagram family together with its rows.
///
/// The closed union the compiler dispatches over. In a JSON row document the
/// `diagram` tag selects the variant and `rows` holds the row array:
///
/// ```json
/// { "diagram": "pie", "rows": [{ "label": "A", "value": "50" }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "diagram", content = "rows", rename_all = "lowercase")]
pub enum RowSet {
    Flowchart(Vec<FlowRow>),
    Sequence(Vec<SequenceRow>),
    State(Vec<StateRow>),
    Class(Vec<ClassRow>),
    Er(Vec<ErRow>),
    Gantt(Vec<GanttRow>),
    Pie(Vec<PieRow>),
    Mindmap(Vec<MindmapRow>),
    Timeline(Vec<TimelineRow>),
}

impl RowSet {
    /// The family these rows belong to.
    pub fn kind(&self) -> DiagramKind {
        match self {
            RowSet::Flowchart(_) => DiagramKind::Flowchart,
            RowSet::Sequence(_) => DiagramKind::Sequence,
            RowSet::State(_) => DiagramKind::State,
            RowSet::Class(_) => DiagramKind::Class,
            RowSet::Er(_) => DiagramKind::Er,
            RowSet::Gantt(_) => DiagramKind::Gantt,
            RowSet::Pie(_) => DiagramKind::Pie,
            RowSet::Mindmap(_) => DiagramKind::Mindmap,
            RowSet::Timeline(_) => DiagramKind::Timeline,
        }
    }

    /// Number of rows, complete or not.
    pub fn len(&self) -> usize {
        match self {
            RowSet::Flowchart(rows) => rows.len(),
            RowSet::Sequence(rows) => rows.len(),
            RowSet::State(rows) => rows.len(),
            RowSet::Class(rows) => rows.len(),
            RowSet::Er(rows) => rows.len(),
            RowSet::Gantt(rows) => rows.len(),
            RowSet::Pie(rows) => rows.len(),
            RowSet::Mindmap(rows) => rows.len(),
            RowSet::Timeline(rows) => rows.len(),
        }
    }

    /// Returns true when the set holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds a set of `count` default editor rows for `kind`.
    ///
    /// A fresh editing grid seeds itself with three such rows; templates and
    /// documents replace them wholesale.
    pub fn seed(kind: DiagramKind, count: usize) -> Self {
        match kind {
            DiagramKind::Flowchart => RowSet::Flowchart(vec![FlowRow::seed(); count]),
            DiagramKind::Sequence => RowSet::Sequence(vec![SequenceRow::seed(); count]),
            DiagramKind::State => RowSet::State(vec![StateRow::seed(); count]),
            DiagramKind::Class => RowSet::Class(vec![ClassRow::seed(); count]),
            DiagramKind::Er => RowSet::Er(vec![ErRow::seed(); count]),
            DiagramKind::Gantt => RowSet::Gantt(vec![GanttRow::seed(); count]),
            DiagramKind::Pie => RowSet::Pie(vec![PieRow::seed(); count]),
            DiagramKind::Mindmap => RowSet::Mindmap(vec![MindmapRow::seed(); count]),
            DiagramKind::Timeline => RowSet::Timeline(vec![TimelineRow::seed(); count]),
        }
    }

    /// Builds typed rows for `kind` from generic field maps.
    ///
    /// This is the construction path for grid-style callers that hold rows
    /// as field-name to value maps. Every key must be a field the family's
    /// row type declares.
    ///
    /// # Errors
    ///
    /// Returns [`TabmaidError::UnknownField`] on the first field name that
    /// is not part of the family's field set.
    pub fn from_fields(
        kind: DiagramKind,
        rows: &[BTreeMap<String, String>],
    ) -> Result<Self, TabmaidError> {
        fn take(fields: &mut BTreeMap<String, String>, key: &str) -> Option<String> {
            fields.remove(key)
        }

        fn finish<T>(kind: DiagramKind, rest: BTreeMap<String, String>, row: T) -> Result<T, TabmaidError> {
            match rest.into_keys().next() {
                Some(field) => Err(TabmaidError::UnknownField { kind, field }),
                None => Ok(row),
            }
        }

        match kind {
            DiagramKind::Flowchart => rows
                .iter()
                .map(|fields| {
                    let mut fields = fields.clone();
                    let row = FlowRow {
                        id: take(&mut fields, "id"),
                        name: take(&mut fields, "name"),
                        kind: take(&mut fields, "kind"),
                        shape: take(&mut fields, "shape"),
                        assignee: take(&mut fields, "assignee"),
                        next: take(&mut fields, "next"),
                        condition: take(&mut fields, "condition"),
                        arrow: take(&mut fields, "arrow"),
                        group: take(&mut fields, "group"),
                        notes: take(&mut fields, "notes"),
                    };
                    finish(kind, fields, row)
                })
                .collect::<Result<_, _>>()
                .map(RowSet::Flowchart),
            DiagramKind::Sequence => rows
                .iter()
                .map(|fields| {
                    let mut fields = fields.clone();
                    let row = SequenceRow {
                        sender: take(&mut fields, "sender"),
                        receiver: take(&mut fields, "receiver"),
                        message: take(&mut fields, "message"),
                        arrow: take(&mut fields, "arrow"),
                        activation: take(&mut fields, "activation"),
                        note: take(&mut fields, "note"),
                    };
                    finish(kind, fields, row)
                })
                .collect::<Result<_, _>>()
                .map(RowSet::Sequence),
            DiagramKind::State => rows
                .iter()
                .map(|fields| {
                    let mut fields = fields.clone();
                    let row = StateRow {
                        id: take(&mut fields, "id"),
                        name: take(&mut fields, "name"),
                        kind: take(&mut fields, "kind"),
                        next: take(&mut fields, "next"),
                        trigger: take(&mut fields, "trigger"),
                        notes: take(&mut fields, "notes"),
                    };
                    finish(kind, fields, row)
                })
                .collect::<Result<_, _>>()
                .map(RowSet::State),
            DiagramKind::Class => rows
                .iter()
                .map(|fields| {
                    let mut fields = fields.clone();
                    let row = ClassRow {
                        name: take(&mut fields, "name"),
                        kind: take(&mut fields, "kind"),
                        members: take(&mut fields, "members"),
                        methods: take(&mut fields, "methods"),
                        related: take(&mut fields, "related"),
                        relation: take(&mut fields, "relation"),
                    };
                    finish(kind, fields, row)
                })
                .collect::<Result<_, _>>()
                .map(RowSet::Class),
            DiagramKind::Er => rows
                .iter()
                .map(|fields| {
                    let mut fields = fields.clone();
                    let row = ErRow {
                        entity: take(&mut fields, "entity"),
                        attribute: take(&mut fields, "attribute"),
                        attribute_type: take(&mut fields, "attribute_type"),
                        related: take(&mut fields, "related"),
                        relation: take(&mut fields, "relation"),
                    };
                    finish(kind, fields, row)
                })
                .collect::<Result<_, _>>()
                .map(RowSet::Er),
            DiagramKind::Gantt => rows
                .iter()
                .map(|fields| {
                    let mut fields = fields.clone();
                    let row = GanttRow {
                        section: take(&mut fields, "section"),
                        task: take(&mut fields, "task"),
                        status: take(&mut fields, "status"),
                        start: take(&mut fields, "start"),
                        duration: take(&mut fields, "duration"),
                    };
                    finish(kind, fields, row)
                })
                .collect::<Result<_, _>>()
                .map(RowSet::Gantt),
            DiagramKind::Pie => rows
                .iter()
                .map(|fields| {
                    let mut fields = fields.clone();
                    let row = PieRow {
                        label: take(&mut fields, "label"),
                        value: take(&mut fields, "value"),
                    };
                    finish(kind, fields, row)
                })
                .collect::<Result<_, _>>()
                .map(RowSet::Pie),
            DiagramKind::Mindmap => rows
                .iter()
                .map(|fields| {
                    let mut fields = fields.clone();
                    let row = MindmapRow {
                        item: take(&mut fields, "item"),
                        parent: take(&mut fields, "parent"),
                        shape: take(&mut fields, "shape"),
                    };
                    finish(kind, fields, row)
                })
                .collect::<Result<_, _>>()
                .map(RowSet::Mindmap),
            DiagramKind::Timeline => rows
                .iter()
                .map(|fields| {
                    let mut fields = fields.clone();
                    let row = TimelineRow {
                        section: take(&mut fields, "section"),
                        period: take(&mut fields, "period"),
                        events: take(&mut fields, "events"),
                    };
                    finish(kind, fields, row)
                })
                .collect::<Result<_, _>>()
                .map(RowSet::Timeline),
        }
    }
}
