//! Built-in seed projects
//!
//! Always available for selection in addition to any uploaded project
//! records; uploads never replace these.

use serde::Serialize;

/// A built-in project available for audit reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedProject {
    pub id: &'static str,
    pub name: &'static str,
    pub client: &'static str,
}

/// The fixed seed catalog, in display order
pub static SEED_PROJECTS: &[SeedProject] = &[
    SeedProject {
        id: "PROJ001",
        name: "Metro Rail Phase 2 - Mumbai",
        client: "Mumbai Metro Rail Corporation",
    },
    SeedProject {
        id: "PROJ002",
        name: "Highway NH-48 - Gujarat",
        client: "National Highways Authority",
    },
    SeedProject {
        id: "PROJ003",
        name: "Warehouse Construction - Pune",
        client: "Logistics India Ltd",
    },
    SeedProject {
        id: "PROJ004",
        name: "Bridge Construction - Delhi",
        client: "Public Works Department",
    },
    SeedProject {
        id: "PROJ005",
        name: "Residential Complex - Bangalore",
        client: "Prestige Group",
    },
];

/// Look up a seed project by id
pub fn seed_project(id: &str) -> Option<&'static SeedProject> {
    SEED_PROJECTS.iter().find(|p| p.id == id)
}
