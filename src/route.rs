//! Detail-screen route contract.
//!
//! The only "protocol" in the system: a detail screen is addressed by five
//! ordered fields (image handle, breed, age, gender, details). In memory the
//! navigator hands the whole [`DetailRoute`] struct to the detail screen, so
//! the common path never stringifies. The path form exists as the external
//! contract and is exercised by `to_path`/`parse`.
//!
//! The image handle is required; the four text fields are optional, and the
//! detail screen renders an absent field as the literal string `"null"`.
//! That placeholder reproduces the reference behavior on purpose; see
//! DESIGN.md before "fixing" it.

use crate::catalog::{ImageHandle, PuppyRecord};
use crate::error::{PupTuiError, Result};

/// Leading path segment of every detail-screen address.
pub const DETAIL_ROUTE_PREFIX: &str = "puppy-details";

/// Literal rendered for an absent text field.
pub const NULL_PLACEHOLDER: &str = "null";

/// Structured parameter object carried from the list screen into the detail
/// screen. One route per selection; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRoute {
    /// Always present; resolved by the asset registry.
    pub image: ImageHandle,
    pub breed: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub details: Option<String>,
}

impl DetailRoute {
    /// Build a route carrying every field of `record`, untransformed.
    pub fn from_record(record: &PuppyRecord) -> Self {
        Self {
            image: record.image,
            breed: Some(record.breed_name.clone()),
            age: Some(record.age.clone()),
            gender: Some(record.gender.to_string()),
            details: Some(record.details.clone()),
        }
    }

    /// Render the route as a path:
    /// `puppy-details/{image}/{breed}/{age}/{gender}/{details}`.
    ///
    /// Absent text fields are stringified as `"null"`, matching what the
    /// detail screen would display for them.
    pub fn to_path(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}/{}",
            DETAIL_ROUTE_PREFIX,
            self.image,
            self.breed_text(),
            self.age_text(),
            self.gender_text(),
            self.details_text(),
        )
    }

    /// Parse a detail-screen address.
    ///
    /// The prefix and image segment are required. Text segments may be
    /// absent (trailing segments omitted), in which case the corresponding
    /// field is `None`. The details segment is taken verbatim to the end of
    /// the path, so it may itself contain `/`.
    pub fn parse(path: &str) -> Result<Self> {
        let mut segments = path.splitn(6, '/');

        match segments.next() {
            Some(DETAIL_ROUTE_PREFIX) => {}
            Some(other) => {
                return Err(PupTuiError::route(format!(
                    "unknown route prefix: {other}"
                )));
            }
            None => return Err(PupTuiError::route("empty route path")),
        }

        let image = segments
            .next()
            .ok_or_else(|| PupTuiError::route("missing image segment"))?;
        let image = image
            .parse::<u16>()
            .map(ImageHandle)
            .map_err(|_| PupTuiError::route(format!("invalid image handle: {image}")))?;

        let text = |segment: Option<&str>| segment.map(str::to_string);

        Ok(Self {
            image,
            breed: text(segments.next()),
            age: text(segments.next()),
            gender: text(segments.next()),
            details: text(segments.next()),
        })
    }

    pub fn breed_text(&self) -> &str {
        text_or_null(self.breed.as_deref())
    }

    pub fn age_text(&self) -> &str {
        text_or_null(self.age.as_deref())
    }

    pub fn gender_text(&self) -> &str {
        text_or_null(self.gender.as_deref())
    }

    pub fn details_text(&self) -> &str {
        text_or_null(self.details.as_deref())
    }
}

/// Stringify fallback for optional route text.
fn text_or_null(field: Option<&str>) -> &str {
    field.unwrap_or(NULL_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_route_from_record_carries_all_fields() {
        let catalog = Catalog::standard();
        let record = &catalog.records()[0];
        let route = DetailRoute::from_record(record);

        assert_eq!(route.image, record.image);
        assert_eq!(route.breed.as_deref(), Some(record.breed_name.as_str()));
        assert_eq!(route.age.as_deref(), Some(record.age.as_str()));
        assert_eq!(route.gender.as_deref(), Some("female"));
        assert_eq!(route.details.as_deref(), Some(record.details.as_str()));
    }

    #[test]
    fn test_to_path_layout() {
        let catalog = Catalog::standard();
        let route = DetailRoute::from_record(&catalog.records()[0]);
        let path = route.to_path();

        assert!(path.starts_with("puppy-details/1/Golden Retriever/2 Months/female/"));
        assert!(path.ends_with("search and rescue dogs."));
    }

    #[test]
    fn test_parse_round_trips_full_path() {
        let catalog = Catalog::standard();
        for record in catalog.records() {
            let route = DetailRoute::from_record(record);
            let parsed = DetailRoute::parse(&route.to_path()).unwrap();
            assert_eq!(parsed, route);
        }
    }

    #[test]
    fn test_parse_tolerates_absent_text_segments() {
        let route = DetailRoute::parse("puppy-details/3").unwrap();
        assert_eq!(route.image, ImageHandle(3));
        assert!(route.breed.is_none());
        assert!(route.details.is_none());
    }

    #[test]
    fn test_absent_fields_render_null_literal() {
        let route = DetailRoute::parse("puppy-details/3/Siberian Husky").unwrap();
        assert_eq!(route.breed_text(), "Siberian Husky");
        assert_eq!(route.age_text(), "null");
        assert_eq!(route.gender_text(), "null");
        assert_eq!(route.details_text(), "null");
    }

    #[test]
    fn test_parse_rejects_unknown_prefix() {
        let err = DetailRoute::parse("kitten-details/1/Tabby").unwrap_err();
        assert!(err.to_string().contains("unknown route prefix"));
    }

    #[test]
    fn test_parse_rejects_bad_image_handle() {
        assert!(DetailRoute::parse("puppy-details/golden/Golden Retriever").is_err());
        assert!(DetailRoute::parse("puppy-details").is_err());
    }

    #[test]
    fn test_details_segment_may_contain_slashes() {
        let route =
            DetailRoute::parse("puppy-details/4/Rottweiler/30 Days/male/guard/family dog")
                .unwrap();
        assert_eq!(route.details_text(), "guard/family dog");
    }
}
