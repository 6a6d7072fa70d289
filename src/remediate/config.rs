//! Placeholder values used by remediation passes.

/// Text inserted by remediation passes when a document provides none.
///
/// A blank `fallback_alt`, `navigation_label`, `form_label` or `title`
/// turns the corresponding repair off instead of inserting empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "cli", serde(default))]
pub struct RemediationConfig {
    /// Alternative text when none can be derived from an image's source.
    pub fallback_alt: String,
    /// `aria-label` for unlabelled `nav` elements.
    pub navigation_label: String,
    /// `aria-label` for unlabelled `form` elements.
    pub form_label: String,
    /// Caption for tables without a caption or `aria-label`.
    pub table_caption: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub charset: String,
    pub title: String,
    /// Synthetic headings read "{heading_prefix} {level}".
    pub heading_prefix: String,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        Self {
            fallback_alt: "image".into(),
            navigation_label: "Main navigation".into(),
            form_label: "Form".into(),
            table_caption: "Data table".into(),
            description: "Document description".into(),
            keywords: "keywords".into(),
            author: "Document author".into(),
            charset: "UTF-8".into(),
            title: "Document".into(),
            heading_prefix: "Section".into(),
        }
    }
}

impl RemediationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback_alt(mut self, text: impl Into<String>) -> Self {
        self.fallback_alt = text.into();
        self
    }

    pub fn with_navigation_label(mut self, label: impl Into<String>) -> Self {
        self.navigation_label = label.into();
        self
    }

    pub fn with_form_label(mut self, label: impl Into<String>) -> Self {
        self.form_label = label.into();
        self
    }

    pub fn with_table_caption(mut self, caption: impl Into<String>) -> Self {
        self.table_caption = caption.into();
        self
    }

    /// Set the description, keywords and author metadata placeholders.
    pub fn with_metadata(
        mut self,
        description: impl Into<String>,
        keywords: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        self.description = description.into();
        self.keywords = keywords.into();
        self.author = author.into();
        self
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_heading_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.heading_prefix = prefix.into();
        self
    }
}

#[cfg(feature = "cli")]
impl RemediationConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> crate::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a TOML file.
    pub fn load(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = RemediationConfig::new()
            .with_fallback_alt("picture")
            .with_metadata("About", "a, b", "Jo")
            .with_heading_prefix("Part");

        assert_eq!(config.fallback_alt, "picture");
        assert_eq!(config.keywords, "a, b");
        assert_eq!(config.heading_prefix, "Part");
        assert_eq!(config.title, "Document");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_toml_keeps_defaults() {
        let config = RemediationConfig::from_toml_str(
            r#"
            navigation_label = "Navigazione principale"
            table_caption = "Tabella dati"
            "#,
        )
        .unwrap();

        assert_eq!(config.navigation_label, "Navigazione principale");
        assert_eq!(config.table_caption, "Tabella dati");
        assert_eq!(config.form_label, "Form");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_toml_rejects_wrong_types() {
        let err = RemediationConfig::from_toml_str("title = 3").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fallback_alt = \"photo\"").unwrap();

        let config = RemediationConfig::load(file.path()).unwrap();
        assert_eq!(config.fallback_alt, "photo");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RemediationConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
