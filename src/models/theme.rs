use serde::{Deserialize, Serialize};

/// 主题元数据
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeDescriptor {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub questions_count: usize,
    /// 题目文件名（相对于主题目录）
    pub file: String,
    /// 题目是否带有难度标签
    #[serde(default)]
    pub has_difficulty: bool,
}

/// 主题目录，启动时加载一次，之后只读
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThemeCatalog {
    pub themes: Vec<ThemeDescriptor>,
}

impl ThemeCatalog {
    /// 按 ID 精确查找主题
    pub fn find(&self, theme_id: &str) -> Option<&ThemeDescriptor> {
        self.themes.iter().find(|t| t.id == theme_id)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> ThemeCatalog {
        serde_json::from_value(json!({
            "themes": [
                {
                    "id": "docker", "title": "Docker", "description": "Conteneurs",
                    "icon": "🐳", "difficulty": "Intermédiaire", "questions_count": 40,
                    "file": "docker.json", "has_difficulty": false
                },
                {
                    "id": "kubernetes", "title": "Kubernetes", "description": "",
                    "difficulty": "Avancé", "questions_count": 150,
                    "file": "kubernetes.json", "has_difficulty": true
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_find_is_exact_match() {
        let catalog = catalog();
        assert_eq!(catalog.find("docker").map(|t| t.file.as_str()), Some("docker.json"));
        assert!(catalog.find("Docker").is_none());
        assert!(catalog.find("dock").is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_missing_title_defaults_to_empty() {
        let catalog: ThemeCatalog = serde_json::from_value(json!({
            "themes": [{"id": "bash", "file": "bash.json"}]
        }))
        .unwrap();
        assert_eq!(catalog.themes[0].title, "");
        assert!(!catalog.themes[0].has_difficulty);
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let catalog = catalog();
        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(value["themes"][0]["icon"], json!("🐳"));
        assert!(value["themes"][1].get("icon").is_none());
        assert!(value["themes"][1].get("category").is_none());
        assert_eq!(value["themes"][1]["has_difficulty"], json!(true));
    }
}
