//! Project directory: built-in seeds merged with uploaded records
use crate::ReportsError;
use chrono::Utc;
use sitecheck_catalog::SEED_PROJECTS;
use sitecheck_core::{ProjectRecord, ValidationError};
use sitecheck_store::{append, read_list, StoragePort, PROJECTS_KEY};

/// One selectable project, seeded or uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub client: String,
}

/// The merged project lookup: seed projects first, then uploaded
/// records in stored order. Lookup returns the first match.
#[derive(Debug, Clone)]
pub struct ProjectDirectory {
    entries: Vec<ProjectEntry>,
    recovered: bool,
}

impl ProjectDirectory {
    /// Load the directory from the store, merging seeds with uploads
    pub fn load(store: &dyn StoragePort) -> Result<Self, ReportsError> {
        let loaded = read_list::<ProjectRecord>(store, PROJECTS_KEY)?;
        let mut entries: Vec<ProjectEntry> = SEED_PROJECTS
            .iter()
            .map(|seed| ProjectEntry {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                client: seed.client.to_string(),
            })
            .collect();
        entries.extend(loaded.records.into_iter().map(|record| ProjectEntry {
            id: record.project_id,
            name: record.project_name,
            client: record.client_name,
        }));
        Ok(Self {
            entries,
            recovered: loaded.recovered,
        })
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    /// True when the stored project list was corrupt and read as empty
    pub fn recovered(&self) -> bool {
        self.recovered
    }

    /// First entry with the given id
    pub fn lookup(&self, project_id: &str) -> Option<&ProjectEntry> {
        self.entries.iter().find(|entry| entry.id == project_id)
    }

    /// Display name for a project id, falling back to the raw id
    pub fn name_for<'a>(&'a self, project_id: &'a str) -> &'a str {
        self.lookup(project_id)
            .map(|entry| entry.name.as_str())
            .unwrap_or(project_id)
    }
}

/// The upload form for a new project record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProject {
    pub project_name: String,
    pub client_name: String,
    pub location: String,
    pub scope_of_work: String,
    pub start_date: String,
    pub end_date: String,
    pub pm_name: String,
    pub contact: String,
}

impl NewProject {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.project_name.trim().is_empty() {
            return Err(ValidationError::MissingField("projectName"));
        }
        if self.client_name.trim().is_empty() {
            return Err(ValidationError::MissingField("clientName"));
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::MissingField("location"));
        }
        if self.scope_of_work.trim().is_empty() {
            return Err(ValidationError::MissingField("scopeOfWork"));
        }
        if self.start_date.trim().is_empty() {
            return Err(ValidationError::MissingField("startDate"));
        }
        if self.end_date.trim().is_empty() {
            return Err(ValidationError::MissingField("endDate"));
        }
        if self.pm_name.trim().is_empty() {
            return Err(ValidationError::MissingField("pmName"));
        }
        if self.contact.trim().is_empty() {
            return Err(ValidationError::MissingField("contact"));
        }
        Ok(())
    }
}

/// Validate and persist an uploaded project record.
///
/// Ids are sequential over the stored list (`UPROJ001`, `UPROJ002`, ...);
/// seed projects never take part in the sequence.
pub fn upload_project(
    store: &mut dyn StoragePort,
    form: NewProject,
) -> Result<ProjectRecord, ReportsError> {
    form.validate()?;

    let existing = read_list::<ProjectRecord>(store, PROJECTS_KEY)?.records;
    let record = ProjectRecord {
        project_id: format!("UPROJ{:03}", existing.len() + 1),
        project_name: form.project_name,
        client_name: form.client_name,
        location: form.location,
        scope_of_work: form.scope_of_work,
        start_date: form.start_date,
        end_date: form.end_date,
        pm_name: form.pm_name,
        contact: form.contact,
        created_at: Utc::now(),
    };

    append(store, PROJECTS_KEY, &record)?;
    tracing::info!(project_id = %record.project_id, "project data uploaded");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecheck_store::MemoryStore;

    fn form(name: &str) -> NewProject {
        NewProject {
            project_name: name.to_string(),
            client_name: "Acme Infra".to_string(),
            location: "Chennai".to_string(),
            scope_of_work: "Civil and structural works".to_string(),
            start_date: "2026-01-01".to_string(),
            end_date: "2026-12-31".to_string(),
            pm_name: "R. Iyer".to_string(),
            contact: "9876543210".to_string(),
        }
    }

    #[test]
    fn test_directory_starts_with_seeds() {
        let store = MemoryStore::new();
        let directory = ProjectDirectory::load(&store).unwrap();
        assert_eq!(directory.entries().len(), 5);
        assert_eq!(directory.name_for("PROJ001"), "Metro Rail Phase 2 - Mumbai");
        assert!(!directory.recovered());
    }

    #[test]
    fn test_uploaded_projects_follow_seeds() {
        let mut store = MemoryStore::new();
        upload_project(&mut store, form("Port Expansion - Kochi")).unwrap();

        let directory = ProjectDirectory::load(&store).unwrap();
        assert_eq!(directory.entries().len(), 6);
        assert_eq!(directory.entries()[5].id, "UPROJ001");
        assert_eq!(directory.name_for("UPROJ001"), "Port Expansion - Kochi");
    }

    #[test]
    fn test_lookup_returns_first_match() {
        let mut store = MemoryStore::new();
        // Uploads sit after the seeds, so a seed id always wins the lookup
        let record = upload_project(&mut store, form("Impostor Project")).unwrap();
        assert_eq!(record.project_id, "UPROJ001");

        let directory = ProjectDirectory::load(&store).unwrap();
        assert_eq!(directory.name_for("PROJ001"), "Metro Rail Phase 2 - Mumbai");
    }

    #[test]
    fn test_unknown_project_falls_back_to_id() {
        let store = MemoryStore::new();
        let directory = ProjectDirectory::load(&store).unwrap();
        assert_eq!(directory.name_for("PROJ999"), "PROJ999");
    }

    #[test]
    fn test_upload_ids_are_sequential() {
        let mut store = MemoryStore::new();
        let first = upload_project(&mut store, form("Plant A")).unwrap();
        let second = upload_project(&mut store, form("Plant B")).unwrap();
        assert_eq!(first.project_id, "UPROJ001");
        assert_eq!(second.project_id, "UPROJ002");
    }

    #[test]
    fn test_upload_requires_core_fields() {
        let mut store = MemoryStore::new();
        let mut blank = form("Plant A");
        blank.client_name = "  ".to_string();

        let err = upload_project(&mut store, blank).unwrap_err();
        assert!(matches!(
            err,
            ReportsError::Validation(ValidationError::MissingField("clientName"))
        ));
        // Nothing was persisted
        let directory = ProjectDirectory::load(&store).unwrap();
        assert_eq!(directory.entries().len(), 5);
    }

    #[test]
    fn test_upload_requires_every_form_field() {
        let blanked: [(&str, fn(&mut NewProject)); 5] = [
            ("scopeOfWork", |f| f.scope_of_work.clear()),
            ("startDate", |f| f.start_date.clear()),
            ("endDate", |f| f.end_date.clear()),
            ("pmName", |f| f.pm_name.clear()),
            ("contact", |f| f.contact.clear()),
        ];
        for (field, blank) in blanked {
            let mut store = MemoryStore::new();
            let mut form = form("Plant A");
            blank(&mut form);

            let err = upload_project(&mut store, form).unwrap_err();
            assert!(matches!(
                err,
                ReportsError::Validation(ValidationError::MissingField(f)) if f == field
            ));
            let directory = ProjectDirectory::load(&store).unwrap();
            assert_eq!(directory.entries().len(), 5);
        }
    }

    #[test]
    fn test_corrupt_project_list_recovers() {
        let mut store = MemoryStore::new();
        store.set(PROJECTS_KEY, b"][").unwrap();

        let directory = ProjectDirectory::load(&store).unwrap();
        assert_eq!(directory.entries().len(), 5);
        assert!(directory.recovered());
    }
}
