use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Tipo do trabalho
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../web/src/types/generated/project.ts")]
pub enum ProjectType {
    Technological, // 1
    Scientific,    // 2
}

impl ProjectType {
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(ProjectType::Technological),
            2 => Some(ProjectType::Scientific),
            _ => None,
        }
    }

    pub fn as_i32(self) -> i32 {
        match self {
            ProjectType::Technological => 1,
            ProjectType::Scientific => 2,
        }
    }
}

// Trabalho
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/project.ts")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub category_id: i64,
    pub project_type: ProjectType,
    pub external_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_roundtrip() {
        assert_eq!(ProjectType::from_i32(1), Some(ProjectType::Technological));
        assert_eq!(ProjectType::from_i32(2), Some(ProjectType::Scientific));
        assert_eq!(ProjectType::from_i32(0), None);
        assert_eq!(ProjectType::Technological.as_i32(), 1);
        assert_eq!(ProjectType::Scientific.as_i32(), 2);
    }
}
