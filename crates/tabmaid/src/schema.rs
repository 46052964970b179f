//! Grid schema registry.
//!
//! One static [`Schema`] per diagram family, describing the editable
//! columns of that family's row table: keys (the row struct field names),
//! display titles, width hints, and the choice sets of select columns.

pub use tabmaid_core::schema::{Choice, Column, Schema};

use tabmaid_core::DiagramKind;

const FLOW_KIND_CHOICES: &[Choice] = &[
    Choice { value: "start", label: "Start" },
    Choice { value: "task", label: "Task" },
    Choice { value: "decision", label: "Decision" },
    Choice { value: "end", label: "End" },
];

const FLOW_SHAPE_CHOICES: &[Choice] = &[
    Choice { value: "rectangle", label: "Rectangle" },
    Choice { value: "rounded", label: "Rounded" },
    Choice { value: "diamond", label: "Diamond" },
    Choice { value: "hexagon", label: "Hexagon" },
    Choice { value: "cylinder", label: "Cylinder" },
    Choice { value: "stadium", label: "Stadium" },
    Choice { value: "circle", label: "Circle" },
    Choice { value: "subroutine", label: "Subroutine" },
    Choice { value: "trapezoid", label: "Trapezoid" },
    Choice { value: "parallelogram", label: "Parallelogram" },
];

const FLOW_ARROW_CHOICES: &[Choice] = &[
    Choice { value: "solid", label: "Solid" },
    Choice { value: "dotted", label: "Dotted" },
    Choice { value: "thick", label: "Thick" },
];

static FLOWCHART: Schema = Schema {
    kind: DiagramKind::Flowchart,
    columns: &[
        Column::text("id", "ID", 60).with_max_width(100),
        Column::text("name", "Step name", 120),
        Column::select("kind", "Kind", 80, 100, FLOW_KIND_CHOICES),
        Column::select("shape", "Shape", 90, 120, FLOW_SHAPE_CHOICES),
        Column::text("assignee", "Assignee", 80),
        Column::text("next", "Next steps", 80),
        Column::text("condition", "Condition", 80),
        Column::select("arrow", "Arrow", 70, 90, FLOW_ARROW_CHOICES),
        Column::text("group", "Group", 80),
        Column::text("notes", "Notes", 100),
    ],
};

const SEQUENCE_ARROW_CHOICES: &[Choice] = &[
    Choice { value: "->>", label: "Solid (async)" },
    Choice { value: "-->>", label: "Dotted (async)" },
    Choice { value: "-)", label: "Solid (open)" },
    Choice { value: "--)", label: "Dotted (open)" },
    Choice { value: "-x", label: "Solid (cross)" },
    Choice { value: "--x", label: "Dotted (cross)" },
];

const SEQUENCE_ACTIVATION_CHOICES: &[Choice] = &[
    Choice { value: "", label: "None" },
    Choice { value: "activate", label: "Activate" },
    Choice { value: "deactivate", label: "Deactivate" },
];

static SEQUENCE: Schema = Schema {
    kind: DiagramKind::Sequence,
    columns: &[
        Column::text("sender", "Sender", 100),
        Column::text("receiver", "Receiver", 100),
        Column::text("message", "Message", 140),
        Column::select("arrow", "Arrow kind", 100, 130, SEQUENCE_ARROW_CHOICES),
        Column::select("activation", "Activation", 80, 100, SEQUENCE_ACTIVATION_CHOICES),
        Column::text("note", "Note", 120),
    ],
};

const STATE_KIND_CHOICES: &[Choice] = &[
    Choice { value: "state", label: "State" },
    Choice { value: "choice", label: "Choice" },
    Choice { value: "fork", label: "Fork" },
    Choice { value: "join", label: "Join" },
];

static STATE: Schema = Schema {
    kind: DiagramKind::State,
    columns: &[
        Column::text("id", "ID", 80).with_max_width(120),
        Column::text("name", "State name", 120),
        Column::select("kind", "Kind", 80, 100, STATE_KIND_CHOICES),
        Column::text("next", "Next states", 100),
        Column::text("trigger", "Trigger", 100),
        Column::text("notes", "Notes", 120),
    ],
};

const CLASS_KIND_CHOICES: &[Choice] = &[
    Choice { value: "class", label: "Class" },
    Choice { value: "interface", label: "Interface" },
    Choice { value: "abstract", label: "Abstract class" },
];

const CLASS_RELATION_CHOICES: &[Choice] = &[
    Choice { value: "", label: "None" },
    Choice { value: "inheritance", label: "Inheritance" },
    Choice { value: "composition", label: "Composition" },
    Choice { value: "aggregation", label: "Aggregation" },
    Choice { value: "association", label: "Association" },
    Choice { value: "dependency", label: "Dependency" },
    Choice { value: "realization", label: "Realization" },
];

static CLASS: Schema = Schema {
    kind: DiagramKind::Class,
    columns: &[
        Column::text("name", "Class name", 120),
        Column::select("kind", "Kind", 100, 130, CLASS_KIND_CHOICES),
        Column::text("members", "Members (;-separated)", 160),
        Column::text("methods", "Methods (;-separated)", 160),
        Column::text("related", "Related to", 100),
        Column::select("relation", "Relation", 100, 130, CLASS_RELATION_CHOICES),
    ],
};

const ER_TYPE_CHOICES: &[Choice] = &[
    Choice { value: "PK", label: "PK (primary key)" },
    Choice { value: "FK", label: "FK (foreign key)" },
    Choice { value: "string", label: "string" },
    Choice { value: "int", label: "int" },
    Choice { value: "float", label: "float" },
    Choice { value: "boolean", label: "boolean" },
    Choice { value: "date", label: "date" },
    Choice { value: "datetime", label: "datetime" },
    Choice { value: "text", label: "text" },
];

const ER_RELATION_CHOICES: &[Choice] = &[
    Choice { value: "", label: "None" },
    Choice { value: "1-1", label: "One to one" },
    Choice { value: "1-N", label: "One to many" },
    Choice { value: "N-1", label: "Many to one" },
    Choice { value: "N-N", label: "Many to many" },
];

static ER: Schema = Schema {
    kind: DiagramKind::Er,
    columns: &[
        Column::text("entity", "Entity", 110),
        Column::text("attribute", "Attribute", 100),
        Column::select("attribute_type", "Type", 90, 120, ER_TYPE_CHOICES),
        Column::text("related", "Related to", 100),
        Column::select("relation", "Relation", 90, 110, ER_RELATION_CHOICES),
    ],
};

const GANTT_STATUS_CHOICES: &[Choice] = &[
    Choice { value: "", label: "Normal" },
    Choice { value: "done", label: "Done" },
    Choice { value: "active", label: "Active" },
    Choice { value: "crit", label: "Critical" },
    Choice { value: "done, crit", label: "Done (critical)" },
    Choice { value: "active, crit", label: "Active (critical)" },
];

static GANTT: Schema = Schema {
    kind: DiagramKind::Gantt,
    columns: &[
        Column::text("section", "Section", 100),
        Column::text("task", "Task name", 140),
        Column::select("status", "Status", 90, 120, GANTT_STATUS_CHOICES),
        Column::text("start", "Start", 100),
        Column::text("duration", "Duration", 70),
    ],
};

static PIE: Schema = Schema {
    kind: DiagramKind::Pie,
    columns: &[
        Column::text("label", "Label", 160),
        Column::text("value", "Value", 80),
    ],
};

const MINDMAP_SHAPE_CHOICES: &[Choice] = &[
    Choice { value: "", label: "Default" },
    Choice { value: "square", label: "Square" },
    Choice { value: "rounded", label: "Rounded" },
    Choice { value: "circle", label: "Circle" },
    Choice { value: "bang", label: "Bang" },
    Choice { value: "cloud", label: "Cloud" },
    Choice { value: "hexagon", label: "Hexagon" },
];

static MINDMAP: Schema = Schema {
    kind: DiagramKind::Mindmap,
    columns: &[
        Column::text("item", "Item", 160),
        Column::text("parent", "Parent item", 140),
        Column::select("shape", "Shape", 90, 120, MINDMAP_SHAPE_CHOICES),
    ],
};

static TIMELINE: Schema = Schema {
    kind: DiagramKind::Timeline,
    columns: &[
        Column::text("section", "Section", 120),
        Column::text("period", "Period", 120),
        Column::text("events", "Events (;-separated)", 200),
    ],
};

/// The grid schema for a diagram family.
pub fn schema(kind: DiagramKind) -> &'static Schema {
    match kind {
        DiagramKind::Flowchart => &FLOWCHART,
        DiagramKind::Sequence => &SEQUENCE,
        DiagramKind::State => &STATE,
        DiagramKind::Class => &CLASS,
        DiagramKind::Er => &ER,
        DiagramKind::Gantt => &GANTT,
        DiagramKind::Pie => &PIE,
        DiagramKind::Mindmap => &MINDMAP,
        DiagramKind::Timeline => &TIMELINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use tabmaid_core::RowSet;

    #[test]
    fn test_every_family_has_a_schema() {
        for kind in DiagramKind::ALL {
            let schema = schema(kind);
            assert_eq!(schema.kind, kind);
            assert!(!schema.columns.is_empty());
        }
    }

    #[test]
    fn test_column_keys_match_row_fields() {
        // Building a row from every declared column key must not trip the
        // unknown-field validation; the schema and the row structs agree.
        for kind in DiagramKind::ALL {
            let fields: BTreeMap<String, String> = schema(kind)
                .field_names()
                .map(|key| (key.to_string(), "x".to_string()))
                .collect();
            RowSet::from_fields(kind, &[fields])
                .unwrap_or_else(|err| panic!("schema mismatch for {kind}: {err}"));
        }
    }

    #[test]
    fn test_initial_rows_seed_three() {
        for kind in DiagramKind::ALL {
            assert_eq!(schema(kind).initial_rows().len(), 3);
        }
    }
}
