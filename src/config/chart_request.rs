use crate::config::mapping::FieldMapping;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

//a complete chart request: the two uploaded file paths plus the field
//mapping chosen for them
//this is the explicit request-scoped context handed to the pipeline; it is
//never stored as process-wide state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartRequest {
    pub file1: PathBuf,
    pub file2: PathBuf,
    pub mapping: FieldMapping,
}

impl ChartRequest {
    pub fn new(file1: PathBuf, file2: PathBuf, mapping: FieldMapping) -> Self {
        ChartRequest {
            file1,
            file2,
            mapping,
        }
    }

    //load a request from a JSON file
    pub fn from_json_file(path: &PathBuf) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let request: ChartRequest = serde_json::from_str(&contents)?;
        Ok(request)
    }

    //save a request to a JSON file
    pub fn to_json_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
