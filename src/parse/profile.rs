//! Metadata profile extraction.

use serde::Serialize;

use super::document::Document;
use super::rules::{first_non_empty, Field, FIELD_RULES};
use crate::fetch::ResponseInfo;
use crate::utils::resolve_url;

/// The normalized metadata of one page.
///
/// Every string field is present; a field the page does not declare is `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct MetaProfile {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
    pub robots: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_url: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub twitter_card: String,
    pub twitter_image: String,
    pub charset: String,
    pub viewport: String,
    pub favicon: String,
    pub author: String,
    pub language: String,
    pub generator: String,
    pub http_status: u16,
    pub content_type: String,
    pub final_url: String,
}

impl MetaProfile {
    /// Mutable access to the string slot backing `field`.
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Keywords => &mut self.keywords,
            Field::Canonical => &mut self.canonical,
            Field::Robots => &mut self.robots,
            Field::OgTitle => &mut self.og_title,
            Field::OgDescription => &mut self.og_description,
            Field::OgImage => &mut self.og_image,
            Field::OgUrl => &mut self.og_url,
            Field::TwitterTitle => &mut self.twitter_title,
            Field::TwitterDescription => &mut self.twitter_description,
            Field::TwitterCard => &mut self.twitter_card,
            Field::TwitterImage => &mut self.twitter_image,
            Field::Charset => &mut self.charset,
            Field::Viewport => &mut self.viewport,
            Field::Favicon => &mut self.favicon,
            Field::Author => &mut self.author,
            Field::Language => &mut self.language,
            Field::Generator => &mut self.generator,
        }
    }

    /// The value extracted for `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Keywords => &self.keywords,
            Field::Canonical => &self.canonical,
            Field::Robots => &self.robots,
            Field::OgTitle => &self.og_title,
            Field::OgDescription => &self.og_description,
            Field::OgImage => &self.og_image,
            Field::OgUrl => &self.og_url,
            Field::TwitterTitle => &self.twitter_title,
            Field::TwitterDescription => &self.twitter_description,
            Field::TwitterCard => &self.twitter_card,
            Field::TwitterImage => &self.twitter_image,
            Field::Charset => &self.charset,
            Field::Viewport => &self.viewport,
            Field::Favicon => &self.favicon,
            Field::Author => &self.author,
            Field::Language => &self.language,
            Field::Generator => &self.generator,
        }
    }
}

/// Extracts the metadata profile of a document.
///
/// Every rule in the catalog is evaluated; URL-valued fields are resolved
/// against `base` (the address after redirects). Response metadata is copied
/// from `response`. Never fails: a field nothing matches stays `""`.
pub fn extract_profile(document: &Document, base: &str, response: &ResponseInfo) -> MetaProfile {
    let mut profile = MetaProfile {
        http_status: response.status,
        content_type: response.content_type.clone(),
        final_url: response.final_url.clone(),
        ..Default::default()
    };

    for rule in FIELD_RULES {
        let value = first_non_empty(document, rule.lookups);
        let value = if rule.is_url {
            resolve_url(&value, base)
        } else {
            value
        };
        if !value.is_empty() {
            log::trace!("{} = {:?}", rule.field.as_str(), value);
        }
        *profile.slot(rule.field) = value;
    }

    profile
}
