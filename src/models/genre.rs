//! Genre model and form handling

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use sqlx::FromRow;
use validator::Validate;

/// Genre record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Genre {
    /// Assigned by the store, never changes afterwards
    pub id: i32,
    pub name: String,
}

impl Genre {
    /// Detail page locator
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}

/// Raw genre form body, as posted by the create and update pages
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreForm {
    pub name: Option<String>,
}

impl GenreForm {
    /// First pipeline stage: clean the raw input.
    ///
    /// Surrounding whitespace and control characters are dropped. HTML
    /// escaping is left to the templates, so the stored name is exactly what
    /// the user typed minus the padding.
    pub fn sanitize(&self) -> GenreInput {
        let name = self
            .name
            .as_deref()
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_control())
            .collect::<String>()
            .trim()
            .to_string();

        GenreInput { name }
    }
}

/// Sanitized genre fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct GenreInput {
    #[validate(length(min = 1, message = "Genre name required"))]
    pub name: String,
}

impl GenreInput {
    /// Second pipeline stage: check the cleaned input against the form rules.
    pub fn check(self) -> Validated<GenreInput> {
        let errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
                fields.sort_by(|a, b| a.0.cmp(&b.0));
                fields
                    .into_iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("Invalid {}", field))
                        })
                    })
                    .collect()
            }
        };

        Validated {
            value: self,
            errors,
        }
    }
}

/// Cleaned input together with the rule violations found in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T> {
    pub value: T,
    pub errors: Vec<String>,
}

impl<T> Validated<T> {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Delete confirmation form body. Blank fields (`authorid=`) read as absent.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteGenreForm {
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub genreid: Option<i32>,
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub authorid: Option<i32>,
}
