//! Starter templates, one set per diagram family.
//!
//! A template is a fixed row sequence a user can load to replace the grid
//! contents wholesale and start from something that already renders.

pub use tabmaid_core::template::Template;

use tabmaid_core::{
    DiagramKind, RowSet,
    row::{
        ClassRow, ErRow, FlowRow, GanttRow, MindmapRow, PieRow, SequenceRow, StateRow, TimelineRow,
    },
};

fn value(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}

#[allow(clippy::too_many_arguments)]
fn flow(
    id: &str,
    name: &str,
    kind: &str,
    shape: &str,
    assignee: &str,
    next: &str,
    condition: &str,
    arrow: &str,
    notes: &str,
) -> FlowRow {
    FlowRow {
        id: value(id),
        name: value(name),
        kind: value(kind),
        shape: value(shape),
        assignee: value(assignee),
        next: value(next),
        condition: value(condition),
        arrow: value(arrow),
        group: None,
        notes: value(notes),
    }
}

fn seq(
    sender: &str,
    receiver: &str,
    message: &str,
    arrow: &str,
    activation: &str,
    note: &str,
) -> SequenceRow {
    SequenceRow {
        sender: value(sender),
        receiver: value(receiver),
        message: value(message),
        arrow: value(arrow),
        activation: value(activation),
        note: value(note),
    }
}

fn state(id: &str, name: &str, next: &str, trigger: &str) -> StateRow {
    StateRow {
        id: value(id),
        name: value(name),
        kind: value("state"),
        next: value(next),
        trigger: value(trigger),
        notes: None,
    }
}

fn class(
    name: &str,
    kind: &str,
    members: &str,
    methods: &str,
    related: &str,
    relation: &str,
) -> ClassRow {
    ClassRow {
        name: value(name),
        kind: value(kind),
        members: value(members),
        methods: value(methods),
        related: value(related),
        relation: value(relation),
    }
}

fn er(entity: &str, attribute: &str, attribute_type: &str, related: &str, relation: &str) -> ErRow {
    ErRow {
        entity: value(entity),
        attribute: value(attribute),
        attribute_type: value(attribute_type),
        related: value(related),
        relation: value(relation),
    }
}

fn gantt(section: &str, task: &str, status: &str, start: &str, duration: &str) -> GanttRow {
    GanttRow {
        section: value(section),
        task: value(task),
        status: value(status),
        start: value(start),
        duration: value(duration),
    }
}

fn pie(label: &str, amount: &str) -> PieRow {
    PieRow {
        label: value(label),
        value: value(amount),
    }
}

fn mind(item: &str, parent: &str, shape: &str) -> MindmapRow {
    MindmapRow {
        item: value(item),
        parent: value(parent),
        shape: value(shape),
    }
}

fn timeline(section: &str, period: &str, events: &str) -> TimelineRow {
    TimelineRow {
        section: value(section),
        period: value(period),
        events: value(events),
    }
}

fn flowchart_templates() -> Vec<Template> {
    vec![
        Template {
            id: "approval",
            name: "Approval flow",
            description: "Request, then approve or reject",
            rows: RowSet::Flowchart(vec![
                flow("S1", "Start request", "start", "stadium", "", "S2", "", "solid", ""),
                flow("S2", "Draft request", "task", "rectangle", "", "S3", "", "solid", ""),
                flow("S3", "Approval decision", "decision", "diamond", "", "S4, S5", "", "solid", ""),
                flow("S4", "Approve", "task", "rectangle", "", "S6", "Approved", "solid", ""),
                flow("S5", "Reject", "task", "rectangle", "", "S6", "Rejected", "solid", ""),
                flow("S6", "Done", "end", "stadium", "", "", "", "solid", ""),
            ]),
        },
        Template {
            id: "leave-request",
            name: "Leave request",
            description: "Includes a rework loop",
            rows: RowSet::Flowchart(vec![
                flow("L1", "Start request", "start", "stadium", "Requester", "L2", "", "solid", ""),
                flow("L2", "Fill in leave form", "task", "rectangle", "Requester", "L3", "", "solid", ""),
                flow("L3", "Manager review", "decision", "diamond", "Manager", "L4, L5", "", "solid", ""),
                flow("L4", "Approve", "task", "rectangle", "Manager", "L6", "Approved", "solid", ""),
                flow("L5", "Send back", "task", "rectangle", "Manager", "L2", "Needs changes", "dotted", ""),
                flow("L6", "HR processing", "task", "rectangle", "HR", "L7", "", "solid", ""),
                flow("L7", "Done", "end", "stadium", "", "", "", "solid", ""),
            ]),
        },
        Template {
            id: "purchase",
            name: "Purchase request",
            description: "Swimlanes across departments",
            rows: RowSet::Flowchart(vec![
                flow("P1", "Purchase request", "start", "stadium", "Requesting dept", "P2", "", "solid", ""),
                flow("P2", "Collect quotes", "task", "rectangle", "Purchasing", "P3", "", "solid", ""),
                flow("P3", "Amount check", "decision", "diamond", "Purchasing", "P4, P5", "", "solid", ""),
                flow("P4", "Director approval", "task", "rectangle", "Director", "P6", "Over 100k", "solid", ""),
                flow("P5", "Manager approval", "task", "rectangle", "Manager", "P6", "Under 100k", "solid", ""),
                flow("P6", "Place order", "task", "rectangle", "Purchasing", "P7", "", "solid", ""),
                flow("P7", "Done", "end", "stadium", "", "", "", "solid", ""),
            ]),
        },
        Template {
            id: "onboarding",
            name: "Onboarding",
            description: "Parallel tasks",
            rows: RowSet::Flowchart(vec![
                flow("O1", "Start onboarding", "start", "stadium", "HR", "O2, O3, O4", "", "solid", ""),
                flow("O2", "Provision accounts", "task", "rectangle", "IT", "O5", "", "solid", ""),
                flow("O3", "Prepare equipment", "task", "rectangle", "Facilities", "O5", "", "solid", ""),
                flow("O4", "Prepare training material", "task", "rectangle", "HR", "O5", "", "solid", ""),
                flow("O5", "Orientation", "task", "rectangle", "HR", "O6", "", "solid", ""),
                flow("O6", "Done", "end", "stadium", "", "", "", "solid", ""),
            ]),
        },
        Template {
            id: "bug-triage",
            name: "Bug triage",
            description: "Branch tree by severity",
            rows: RowSet::Flowchart(vec![
                flow("B1", "Receive bug report", "start", "stadium", "", "B2", "", "solid", ""),
                flow("B2", "Assess severity", "decision", "diamond", "", "B3, B4, B5", "", "solid", ""),
                flow("B3", "Hotfix", "task", "rectangle", "", "B6", "Critical", "thick", "Respond within 24 hours"),
                flow("B4", "Scheduled fix", "task", "rectangle", "", "B6", "Major", "solid", ""),
                flow("B5", "Add to backlog", "task", "rectangle", "", "B7", "Minor", "dotted", ""),
                flow("B6", "Test and verify", "task", "rectangle", "", "B7", "", "solid", ""),
                flow("B7", "Done", "end", "stadium", "", "", "", "solid", ""),
            ]),
        },
    ]
}

fn sequence_templates() -> Vec<Template> {
    vec![
        Template {
            id: "api-call",
            name: "API call",
            description: "Client to server API round trip",
            rows: RowSet::Sequence(vec![
                seq("Client", "API gateway", "POST /api/users", "->>", "activate", ""),
                seq("API gateway", "Auth service", "Validate token", "->>", "", ""),
                seq("Auth service", "API gateway", "Validation result", "-->>", "", ""),
                seq("API gateway", "User service", "Create user", "->>", "activate", ""),
                seq("User service", "Database", "INSERT users", "->>", "", ""),
                seq("Database", "User service", "OK", "-->>", "", ""),
                seq("User service", "API gateway", "User data", "-->>", "deactivate", ""),
                seq("API gateway", "Client", "201 Created", "-->>", "deactivate", ""),
            ]),
        },
        Template {
            id: "login-auth",
            name: "Login authentication",
            description: "User authentication flow",
            rows: RowSet::Sequence(vec![
                seq("User", "Frontend", "Submit login form", "->>", "", ""),
                seq("Frontend", "Backend", "POST /auth/login", "->>", "activate", "Credentials are encrypted"),
                seq("Backend", "DB", "Look up user", "->>", "", ""),
                seq("DB", "Backend", "User record", "-->>", "", ""),
                seq("Backend", "Backend", "Verify password", "->>", "", ""),
                seq("Backend", "Frontend", "JWT token", "-->>", "deactivate", ""),
                seq("Frontend", "User", "Redirect to dashboard", "-->>", "", ""),
            ]),
        },
    ]
}

fn state_templates() -> Vec<Template> {
    vec![Template {
        id: "order-state",
        name: "Order lifecycle",
        description: "Online-store order state transitions",
        rows: RowSet::State(vec![
            state("start", "[*]", "Pending", ""),
            state("Pending", "Order received", "Processing, Cancelled", ""),
            state("Processing", "Processing", "Shipped, Cancelled", "Payment completed"),
            state("Shipped", "Shipped", "Delivered, Returned", "Dispatched"),
            state("Delivered", "Delivered", "end", "Receipt confirmed"),
            state("Cancelled", "Cancelled", "end", "Cancelled"),
            state("Returned", "Returned", "end", "Return requested"),
            state("end", "[*]", "", ""),
        ]),
    }]
}

fn class_templates() -> Vec<Template> {
    vec![Template {
        id: "user-management",
        name: "User management",
        description: "User, role, and permission model",
        rows: RowSet::Class(vec![
            class(
                "User",
                "class",
                "String id;String email;String passwordHash",
                "authenticate;updateProfile",
                "Role",
                "association",
            ),
            class("Role", "class", "String id;String name", "getPermissions", "Permission", "aggregation"),
            class("Permission", "class", "String resource;String action", "", "", ""),
            class("AdminUser", "class", "String adminLevel", "manageUsers", "User", "inheritance"),
            class("IUserRepository", "interface", "", "findById;save;delete", "", ""),
            class("UserRepository", "class", "Database db", "findById;save;delete", "IUserRepository", "realization"),
        ]),
    }]
}

fn er_templates() -> Vec<Template> {
    vec![Template {
        id: "user-order",
        name: "Users and orders",
        description: "Basic online-store entity model",
        rows: RowSet::Er(vec![
            er("users", "id", "PK", "orders", "1-N"),
            er("users", "email", "string", "", ""),
            er("users", "name", "string", "", ""),
            er("users", "created_at", "datetime", "", ""),
            er("orders", "id", "PK", "", ""),
            er("orders", "user_id", "FK", "order_items", "1-N"),
            er("orders", "total_amount", "float", "", ""),
            er("orders", "status", "string", "", ""),
            er("orders", "ordered_at", "datetime", "", ""),
            er("order_items", "id", "PK", "", ""),
            er("order_items", "order_id", "FK", "products", "N-1"),
            er("order_items", "product_id", "FK", "", ""),
            er("order_items", "quantity", "int", "", ""),
            er("products", "id", "PK", "", ""),
            er("products", "name", "string", "", ""),
            er("products", "price", "float", "", ""),
            er("products", "stock", "int", "", ""),
        ]),
    }]
}

fn gantt_templates() -> Vec<Template> {
    vec![Template {
        id: "project-plan",
        name: "Project plan",
        description: "Web application delivery schedule",
        rows: RowSet::Gantt(vec![
            gantt("Requirements", "Interviews", "done", "2025-01-06", "3d"),
            gantt("Requirements", "Requirements document", "done", "2025-01-09", "4d"),
            gantt("Design", "System design", "done", "2025-01-13", "5d"),
            gantt("Design", "Database design", "active", "2025-01-16", "3d"),
            gantt("Development", "Backend implementation", "active, crit", "2025-01-20", "10d"),
            gantt("Development", "Frontend implementation", "", "2025-01-23", "8d"),
            gantt("Testing", "Unit tests", "", "2025-01-31", "5d"),
            gantt("Testing", "Integration tests", "crit", "2025-02-05", "5d"),
            gantt("Release", "Deploy", "crit", "2025-02-12", "1d"),
            gantt("Release", "Go live", "", "2025-02-13", "1d"),
        ]),
    }]
}

fn pie_templates() -> Vec<Template> {
    vec![Template {
        id: "browser-share",
        name: "Browser share",
        description: "Browser market share",
        rows: RowSet::Pie(vec![
            pie("Chrome", "65.3"),
            pie("Safari", "18.9"),
            pie("Edge", "4.5"),
            pie("Firefox", "4.1"),
            pie("Samsung Internet", "2.7"),
            pie("Opera", "2.2"),
            pie("Other", "2.3"),
        ]),
    }]
}

fn mindmap_templates() -> Vec<Template> {
    vec![Template {
        id: "project-planning",
        name: "Project planning",
        description: "Project plan mindmap",
        rows: RowSet::Mindmap(vec![
            mind("Project plan", "", "circle"),
            mind("Goals", "Project plan", ""),
            mind("KPI targets", "Goals", ""),
            mind("ROI estimate", "Goals", ""),
            mind("Schedule", "Project plan", ""),
            mind("Phase 1", "Schedule", ""),
            mind("Phase 2", "Schedule", ""),
            mind("Resources", "Project plan", ""),
            mind("Staffing", "Resources", ""),
            mind("Budget", "Resources", ""),
            mind("Risks", "Project plan", "bang"),
            mind("Technical risk", "Risks", ""),
            mind("Schedule risk", "Risks", ""),
        ]),
    }]
}

fn timeline_templates() -> Vec<Template> {
    vec![Template {
        id: "product-roadmap",
        name: "Product roadmap",
        description: "Product development over time",
        rows: RowSet::Timeline(vec![
            timeline("2024 H1", "Jan 2024", "Start MVP development;Assemble team"),
            timeline("2024 H1", "Mar 2024", "Closed beta;User testing"),
            timeline("2024 H2", "Jun 2024", "v1.0 release;Press release"),
            timeline("2024 H2", "Sep 2024", "v1.1 features;Bug fixes"),
            timeline("2025", "Jan 2025", "v2.0 major update;Public API"),
            timeline("2025", "Jun 2025", "Global rollout;Localization"),
        ]),
    }]
}

/// The starter templates for a diagram family.
pub fn templates(kind: DiagramKind) -> Vec<Template> {
    match kind {
        DiagramKind::Flowchart => flowchart_templates(),
        DiagramKind::Sequence => sequence_templates(),
        DiagramKind::State => state_templates(),
        DiagramKind::Class => class_templates(),
        DiagramKind::Er => er_templates(),
        DiagramKind::Gantt => gantt_templates(),
        DiagramKind::Pie => pie_templates(),
        DiagramKind::Mindmap => mindmap_templates(),
        DiagramKind::Timeline => timeline_templates(),
    }
}
