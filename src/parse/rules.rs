//! Field extraction rules.
//!
//! Each profile field is resolved by an ordered list of lookups. A lookup
//! selects the first element matching a tag and attribute filter and reads one
//! value from it. [`first_non_empty`] walks the list and keeps the first
//! non-empty value; every field goes through it.

use strum_macros::EnumIter;

use super::document::Document;
use crate::utils::charset_token;

/// Which elements of a tag a lookup considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Every element of the tag
    Any,
    /// Elements whose attribute equals the value (ASCII case-insensitive)
    AttrEquals(&'static str, &'static str),
    /// Elements that carry the attribute
    HasAttr(&'static str),
}

/// What a lookup reads from the selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Read {
    /// An attribute value, verbatim
    Attr(&'static str),
    /// The element's text, trimmed
    Text,
    /// The `charset=` token inside an attribute value
    CharsetToken(&'static str),
}

/// One (selector, attribute) step of a fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    /// Lowercase tag name
    pub tag: &'static str,
    /// Which elements of the tag qualify
    pub filter: Filter,
    /// What is read from the first qualifying element
    pub read: Read,
}

impl Lookup {
    /// `meta[name=key]@content`
    pub const fn meta_name(key: &'static str) -> Self {
        Self {
            tag: "meta",
            filter: Filter::AttrEquals("name", key),
            read: Read::Attr("content"),
        }
    }

    /// `meta[property=key]@content`
    pub const fn meta_property(key: &'static str) -> Self {
        Self {
            tag: "meta",
            filter: Filter::AttrEquals("property", key),
            read: Read::Attr("content"),
        }
    }

    /// `link[rel=rel]@href`
    pub const fn link_rel(rel: &'static str) -> Self {
        Self {
            tag: "link",
            filter: Filter::AttrEquals("rel", rel),
            read: Read::Attr("href"),
        }
    }

    /// Text of the first `tag`
    pub const fn text(tag: &'static str) -> Self {
        Self {
            tag,
            filter: Filter::Any,
            read: Read::Text,
        }
    }

    /// `html@attr`, read from the document root
    pub const fn root_attr(attr: &'static str) -> Self {
        Self::attr("html", attr)
    }

    /// `tag@attr` of the first `tag`
    pub const fn attr(tag: &'static str, attr: &'static str) -> Self {
        Self {
            tag,
            filter: Filter::Any,
            read: Read::Attr(attr),
        }
    }

    /// Evaluates the lookup. `None` when no element matches or the element
    /// lacks the value.
    pub fn evaluate(&self, document: &Document) -> Option<String> {
        match (self.filter, self.read) {
            (Filter::Any, Read::Text) => return document.first_text(self.tag),
            (Filter::Any, Read::Attr(attr)) if self.tag == "html" => {
                return document.root_attr(attr).map(str::to_string);
            }
            _ => {}
        }

        let element = match self.filter {
            Filter::Any => document.elements(self.tag).next(),
            Filter::AttrEquals(attr, value) => {
                document.elements_with_attr(self.tag, attr, value).next()
            }
            Filter::HasAttr(attr) => document.elements_having_attr(self.tag, attr).next(),
        }?;

        match self.read {
            Read::Attr(attr) => element.value().attr(attr).map(str::to_string),
            Read::Text => Some(element.text().collect::<String>().trim().to_string()),
            Read::CharsetToken(attr) => element.value().attr(attr).and_then(charset_token),
        }
    }
}

/// Evaluates lookups in order and returns the first non-empty value, or `""`.
pub fn first_non_empty(document: &Document, lookups: &[Lookup]) -> String {
    lookups
        .iter()
        .filter_map(|lookup| lookup.evaluate(document))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// A string field of the metadata profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Field {
    /// `<title>` text
    Title,
    /// `meta[name=description]`
    Description,
    /// `meta[name=keywords]`
    Keywords,
    /// `link[rel=canonical]`, resolved
    Canonical,
    /// `meta[name=robots]`
    Robots,
    /// `og:title`
    OgTitle,
    /// `og:description`
    OgDescription,
    /// `og:image`, resolved
    OgImage,
    /// `og:url`, resolved
    OgUrl,
    /// `twitter:title`, name then property
    TwitterTitle,
    /// `twitter:description`, name then property
    TwitterDescription,
    /// `twitter:card`, name then property
    TwitterCard,
    /// `twitter:image`, name then property, resolved
    TwitterImage,
    /// Declared document charset
    Charset,
    /// `meta[name=viewport]`
    Viewport,
    /// First icon link, resolved
    Favicon,
    /// `meta[name=author]`
    Author,
    /// `html@lang`
    Language,
    /// `meta[name=generator]`
    Generator,
}

impl Field {
    /// The field's key in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Keywords => "keywords",
            Field::Canonical => "canonical",
            Field::Robots => "robots",
            Field::OgTitle => "ogTitle",
            Field::OgDescription => "ogDescription",
            Field::OgImage => "ogImage",
            Field::OgUrl => "ogUrl",
            Field::TwitterTitle => "twitterTitle",
            Field::TwitterDescription => "twitterDescription",
            Field::TwitterCard => "twitterCard",
            Field::TwitterImage => "twitterImage",
            Field::Charset => "charset",
            Field::Viewport => "viewport",
            Field::Favicon => "favicon",
            Field::Author => "author",
            Field::Language => "language",
            Field::Generator => "generator",
        }
    }
}

/// How one field is resolved.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// The profile field this rule fills
    pub field: Field,
    /// Tried in order; first non-empty value wins
    pub lookups: &'static [Lookup],
    /// Whether the value is resolved against the page address
    pub is_url: bool,
}

/// The extraction catalog, one rule per profile field.
pub static FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Title,
        lookups: &[Lookup::text("title")],
        is_url: false,
    },
    FieldRule {
        field: Field::Description,
        lookups: &[Lookup::meta_name("description")],
        is_url: false,
    },
    FieldRule {
        field: Field::Keywords,
        lookups: &[Lookup::meta_name("keywords")],
        is_url: false,
    },
    FieldRule {
        field: Field::Canonical,
        lookups: &[Lookup::link_rel("canonical")],
        is_url: true,
    },
    FieldRule {
        field: Field::Robots,
        lookups: &[Lookup::meta_name("robots")],
        is_url: false,
    },
    FieldRule {
        field: Field::OgTitle,
        lookups: &[Lookup::meta_property("og:title")],
        is_url: false,
    },
    FieldRule {
        field: Field::OgDescription,
        lookups: &[Lookup::meta_property("og:description")],
        is_url: false,
    },
    FieldRule {
        field: Field::OgImage,
        lookups: &[Lookup::meta_property("og:image")],
        is_url: true,
    },
    FieldRule {
        field: Field::OgUrl,
        lookups: &[Lookup::meta_property("og:url")],
        is_url: true,
    },
    FieldRule {
        field: Field::TwitterTitle,
        lookups: &[
            Lookup::meta_name("twitter:title"),
            Lookup::meta_property("twitter:title"),
        ],
        is_url: false,
    },
    FieldRule {
        field: Field::TwitterDescription,
        lookups: &[
            Lookup::meta_name("twitter:description"),
            Lookup::meta_property("twitter:description"),
        ],
        is_url: false,
    },
    FieldRule {
        field: Field::TwitterCard,
        lookups: &[
            Lookup::meta_name("twitter:card"),
            Lookup::meta_property("twitter:card"),
        ],
        is_url: false,
    },
    FieldRule {
        field: Field::TwitterImage,
        lookups: &[
            Lookup::meta_name("twitter:image"),
            Lookup::meta_property("twitter:image"),
        ],
        is_url: true,
    },
    FieldRule {
        field: Field::Charset,
        lookups: &[
            Lookup {
                tag: "meta",
                filter: Filter::HasAttr("charset"),
                read: Read::Attr("charset"),
            },
            Lookup {
                tag: "meta",
                filter: Filter::AttrEquals("http-equiv", "content-type"),
                read: Read::CharsetToken("content"),
            },
        ],
        is_url: false,
    },
    FieldRule {
        field: Field::Viewport,
        lookups: &[Lookup::meta_name("viewport")],
        is_url: false,
    },
    FieldRule {
        field: Field::Favicon,
        lookups: &[
            Lookup::link_rel("icon"),
            Lookup::link_rel("shortcut icon"),
            Lookup::link_rel("apple-touch-icon"),
        ],
        is_url: true,
    },
    FieldRule {
        field: Field::Author,
        lookups: &[Lookup::meta_name("author")],
        is_url: false,
    },
    FieldRule {
        field: Field::Language,
        lookups: &[Lookup::root_attr("lang")],
        is_url: false,
    },
    FieldRule {
        field: Field::Generator,
        lookups: &[Lookup::meta_name("generator")],
        is_url: false,
    },
];
