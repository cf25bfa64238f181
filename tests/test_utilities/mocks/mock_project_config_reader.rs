use lockgraph::prelude::*;
use std::path::Path;

/// Mock ProjectConfigReader for testing
pub struct MockProjectConfigReader {
    pub members: Vec<String>,
    pub should_fail: bool,
}

impl MockProjectConfigReader {
    pub fn new(members: &[&str]) -> Self {
        Self {
            members: members.iter().map(|m| m.to_string()).collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            members: Vec::new(),
            should_fail: true,
        }
    }
}

impl ProjectConfigReader for MockProjectConfigReader {
    fn read_workspace_members(&self, _project_path: &Path) -> Result<Vec<String>> {
        if self.should_fail {
            anyhow::bail!("Mock project config read failure");
        }
        Ok(self.members.clone())
    }
}
