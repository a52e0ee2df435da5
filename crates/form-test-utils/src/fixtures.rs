//! Canned manifests.
//!
//! Each constant is a complete TOML manifest meant to be decoded without
//! the built-in defaults underneath it.

/// Two pages with a handful of sections and every override table in use.
///
/// - `textDocument-journalArticle` appends `journal` to page-2 and requires
///   the journal title
/// - `textDocument-essay` aliases `textDocument-bookSection` on page-2
/// - `audiovisual` hides `metadata.title`
/// - `dataset` has both a default and a priority value for `metadata.languages`
pub const SMALL_FORM: &str = r#"
[[pages]]
section = "page-1"
title = "Basics"
children = ["titles", "languages"]

[[pages]]
section = "page-2"
title = "Details"
children = ["identifiers", "related"]

[sections.titles]
component = "TitleComponent"

[sections.languages]
component = "LanguagesComponent"

[sections.identifiers]
component = "AlternateIdentifiersComponent"

[sections.related]
component = "RelatedWorksComponent"

[sections.journal]
title = "Journal"
component = "JournalDetailComponent"

[sections.book]
component = "BookSectionDetailComponent"

[sections.series]
component = "SeriesComponent"

[components.SeriesComponent]
fields = ["custom_fields.kcr:series"]

[fields."metadata.title"]
label = "Title"
placeholder = "Enter a title"
required = true

[fields."metadata.languages"]
label = "Languages"
icon = "globe"

[fields_by_type]
"textDocument-journalArticle" = { page-2 = ["journal"] }
"textDocument-bookSection" = { page-2 = ["book", "series"] }
"textDocument-essay" = { page-2 = [{ same_as = "textDocument-bookSection" }] }
"textDocument-thesis" = { page-2 = { placement = "prepend", sections = ["series"] } }
"textDocument-book" = { page-2 = { placement = "replace", sections = ["book"] } }
"textDocument-report" = { page-2 = { after = "identifiers", sections = ["series"] } }

[labels]
audiovisual = { "metadata.title" = false }
"textDocument-journalArticle" = { "metadata.title" = "Article title", "custom_fields.journal:journal.pages" = "Article pages" }

[placeholders]
dataset = { "metadata.title" = "" }
"textDocument-journalArticle" = { "metadata.title" = "Title of the article" }

[icons]
dataset = { "metadata.languages" = "language" }

[default_values]
dataset = { "metadata.languages" = ["eng"] }
software = { "metadata.languages" = ["eng"] }

[priority_values]
dataset = { "metadata.languages" = ["fra"] }

[extra_required]
"textDocument-journalArticle" = ["custom_fields.journal:journal.title"]
"#;

/// Two types aliasing each other on the same page.
pub const ALIAS_CYCLE: &str = r#"
[[pages]]
section = "page-1"
children = [{ section = "titles", component = "TitleComponent" }]

[fields_by_type]
A = { page-1 = [{ same_as = "B" }] }
B = { page-1 = [{ same_as = "A" }] }
"#;
