use serde::Serialize;
use std::collections::HashMap;

/// A version of a package that conflicts with the primary version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateVersion {
    pub version: String,
    pub primary_version: String,
}

/// All conflicting versions recorded for one package name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    pub name: String,
    /// First version seen for this name in the lockfile
    pub primary_version: String,
    pub duplicates: Vec<DuplicateVersion>,
}

impl DuplicateGroup {
    /// Primary version first, then every duplicate in discovery order
    pub fn all_versions(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_version.as_str())
            .chain(self.duplicates.iter().map(|d| d.version.as_str()))
    }
}

/// Mapping from package name to its duplicate versions
///
/// Groups are stored in the order their first duplicate was found, with a
/// side index for lookups by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    groups: Vec<DuplicateGroup>,
    index: HashMap<String, usize>,
}

impl DuplicateReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `version` of `name` as conflicting with `primary_version`
    ///
    /// Recording the same version twice keeps a single entry.
    pub fn record(&mut self, name: &str, version: &str, primary_version: &str) {
        let position = match self.index.get(name) {
            Some(&position) => position,
            None => {
                self.groups.push(DuplicateGroup {
                    name: name.to_string(),
                    primary_version: primary_version.to_string(),
                    duplicates: Vec::new(),
                });
                self.index.insert(name.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };

        let group = &mut self.groups[position];
        if group.duplicates.iter().any(|d| d.version == version) {
            return;
        }
        group.duplicates.push(DuplicateVersion {
            version: version.to_string(),
            primary_version: primary_version.to_string(),
        });
    }

    pub fn get(&self, name: &str) -> Option<&DuplicateGroup> {
        self.index.get(name).map(|&i| &self.groups[i])
    }

    pub fn groups(&self) -> &[DuplicateGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of package names with duplicates
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Number of conflicting versions across all names
    pub fn duplicate_version_count(&self) -> usize {
        self.groups.iter().map(|g| g.duplicates.len()).sum()
    }

    /// Returns a report without the given package names, preserving order
    pub fn without_names(&self, names: &[String]) -> Self {
        let mut filtered = Self::new();
        for group in self.groups.iter().filter(|g| !names.contains(&g.name)) {
            filtered
                .index
                .insert(group.name.clone(), filtered.groups.len());
            filtered.groups.push(group.clone());
        }
        filtered
    }
}
