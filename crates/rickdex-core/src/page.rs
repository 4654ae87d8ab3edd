//! Paged collection response from `GET /character`

use serde::{Deserialize, Serialize};

use crate::character::Character;

/// Pagination metadata attached to every collection response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageInfo {
    /// Total number of characters across all pages
    #[serde(default)]
    pub count: u32,
    /// Total number of pages
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of the character collection
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_page_with_minimal_info() {
        let json = r#"{
            "results": [
                {"id": 1, "name": "Rick Sanchez", "species": "Human",
                 "status": "Alive", "image": "rick.jpeg"}
            ],
            "info": {"pages": 42}
        }"#;
        let page: CharacterPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.info.pages, 42);
        assert_eq!(page.info.count, 0);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "Rick Sanchez");
    }

    #[test]
    fn test_decode_page_with_full_info() {
        let json = r#"{
            "info": {
                "count": 826,
                "pages": 42,
                "next": "https://rickandmortyapi.com/api/character?page=2",
                "prev": null
            },
            "results": []
        }"#;
        let page: CharacterPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.info.count, 826);
        assert!(page.info.next.is_some());
        assert!(page.info.prev.is_none());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_decode_page_without_info_fails() {
        let json = r#"{"results": []}"#;
        assert!(serde_json::from_str::<CharacterPage>(json).is_err());
    }
}
