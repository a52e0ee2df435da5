//! Component registry
//!
//! Maps each UI component name to the field paths it edits. Sections name
//! a component; the resolver asks the registry which fields that puts on
//! the page.

use std::collections::BTreeMap;

/// Component name → edited field paths.
///
/// # Example
///
/// ```
/// use form_meta::ComponentRegistry;
///
/// let mut registry = ComponentRegistry::new();
/// registry.register("SeriesComponent", ["custom_fields.kcr:series"]);
/// assert_eq!(
///     registry.fields("SeriesComponent"),
///     Some(&["custom_fields.kcr:series".to_string()][..])
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentRegistry {
    components: BTreeMap<String, Vec<String>>,
}

const BUILTINS: &[(&str, &[&str])] = &[
    ("AbstractComponent", &["metadata.description"]),
    ("AdditionalDatesComponent", &["metadata.dates"]),
    ("AdditionalDescriptionComponent", &["metadata.additional_descriptions"]),
    ("AdditionalTitlesComponent", &["metadata.additional_titles"]),
    ("AlternateIdentifiersComponent", &["metadata.identifiers"]),
    ("BookTitleComponent", &["custom_fields.imprint:imprint.title"]),
    ("CommunitiesComponent", &[]),
    ("ContributorsComponent", &["metadata.contributors"]),
    ("CreatorsComponent", &["metadata.creators"]),
    ("DateComponent", &["metadata.publication_date"]),
    ("DoiComponent", &["pids.doi"]),
    ("FundingComponent", &["metadata.funding"]),
    ("ISBNComponent", &["custom_fields.imprint:imprint.isbn"]),
    ("FilesUploadComponent", &["files"]),
    ("LanguagesComponent", &["metadata.languages"]),
    ("LicensesComponent", &["metadata.rights"]),
    ("MetadataOnlyComponent", &["access.status"]),
    ("PublisherComponent", &["metadata.publisher"]),
    ("PublicationLocationComponent", &["custom_fields.imprint:imprint.place"]),
    ("RelatedWorksComponent", &["metadata.related_identifiers"]),
    ("ResourceTypeComponent", &["metadata.resource_type"]),
    ("SubjectsComponent", &["metadata.subjects"]),
    ("SubtitleComponent", &["metadata.additional_titles"]),
    ("TitleComponent", &["metadata.title"]),
    ("TotalPagesComponent", &["custom_fields.imprint:imprint.pages"]),
    ("VersionComponent", &["metadata.version"]),
    ("AccessComponent", &["access"]),
    ("AccessRightsComponent", &["access"]),
    (
        "BookDetailComponent",
        &[
            "custom_fields.imprint:imprint.isbn",
            "metadata.version",
            "metadata.publisher",
            "custom_fields.imprint:imprint.place",
        ],
    ),
    (
        "BookSectionDetailComponent",
        &[
            "custom_fields.imprint:imprint.title",
            "custom_fields.imprint:imprint.isbn",
            "metadata.version",
            "metadata.publisher",
            "custom_fields.imprint:imprint.place",
        ],
    ),
    (
        "CombinedTitlesComponent",
        &["metadata.title", "metadata.additional_titles"],
    ),
    (
        "CombinedDatesComponent",
        &["metadata.publication_date", "metadata.dates"],
    ),
    ("DeleteComponent", &[]),
    ("SectionPagesComponent", &["custom_fields.journal:journal.pages"]),
    (
        "JournalDetailComponent",
        &[
            "custom_fields.journal:journal.issn",
            "custom_fields.journal:journal.title",
            "custom_fields.journal:journal.volume",
            "custom_fields.journal:journal.issue",
            "custom_fields.journal:journal.pages",
        ],
    ),
    (
        "OrganizationDetailsComponent",
        &["custom_fields.imprint:imprint.place"],
    ),
    (
        "PublicationDetailsComponent",
        &[
            "custom_fields.imprint:imprint.isbn",
            "metadata.version",
            "metadata.publisher",
            "custom_fields.imprint:imprint.place",
        ],
    ),
    ("SubmissionComponent", &[]),
    ("SubmitActionsComponent", &["access"]),
    ("ThesisDetailsComponent", &["custom_fields.thesis:university"]),
    (
        "TypeTitleComponent",
        &["metadata.title", "metadata.resource_type"],
    ),
];

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the components shipped with the form.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, fields) in BUILTINS {
            registry.register(*name, fields.iter().copied());
        }
        registry
    }

    /// Register a component, replacing any previous field list.
    pub fn register<I, S>(&mut self, name: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components
            .insert(name.into(), fields.into_iter().map(Into::into).collect());
    }

    pub fn fields(&self, name: &str) -> Option<&[String]> {
        self.components.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered component names, sorted.
    pub fn list(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.components
            .iter()
            .map(|(name, fields)| (name.as_str(), fields.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
