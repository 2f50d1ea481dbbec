//! Flat CMS link objects and their validation into [`LinkReference`].
//!
//! Studio link fields are stored as one object with a `linkType` selector and
//! a field per variant. Editors switching the selector leave stale fields
//! behind, so the selector and the populated fields can disagree.

use serde::Deserialize;
use thiserror::Error;

use super::{DocumentRef, DownloadLink, InternalLink, LinkReference};
use crate::utils::is_web_url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkShapeError {
    #[error("link has no `linkType`")]
    MissingTag,

    #[error("unknown link type `{0}`")]
    UnknownTag(String),

    #[error("`{tag}` link is missing `{field}`")]
    MissingField { tag: &'static str, field: &'static str },

    #[error("`{tag}` link also populates `{field}`")]
    ConflictingField { tag: &'static str, field: &'static str },

    #[error("`{tag}` link has `{url}`, expected an absolute http(s) URL")]
    InvalidUrl { tag: &'static str, url: String },
}

/// A link field exactly as stored by the studio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLink {
    #[serde(default)]
    pub link_type: Option<String>,
    /// Content type of the internal reference target.
    #[serde(default)]
    pub internal_type: Option<String>,
    #[serde(default)]
    pub internal: Option<DocumentRef>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub download: Option<DownloadLink>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub anchor: Option<String>,
}

impl RawLink {
    /// Names of the populated variant fields, paired with their owning tag.
    fn populated(&self) -> [(&'static str, &'static str, bool); 3] {
        [
            ("internal", "internalType", self.internal_type.is_some() || self.internal.is_some()),
            ("external", "externalUrl", self.external_url.is_some()),
            ("download", "download", self.download.is_some()),
        ]
    }
}

impl TryFrom<RawLink> for LinkReference {
    type Error = LinkShapeError;

    fn try_from(raw: RawLink) -> Result<Self, Self::Error> {
        let tag = match raw.link_type.as_deref() {
            None | Some("") => return Err(LinkShapeError::MissingTag),
            Some("internal") => "internal",
            Some("external") => "external",
            Some("download") => "download",
            Some(other) => return Err(LinkShapeError::UnknownTag(other.to_string())),
        };

        if let Some((_, field, _)) = raw
            .populated()
            .into_iter()
            .find(|(owner, _, set)| *set && *owner != tag)
        {
            return Err(LinkShapeError::ConflictingField { tag, field });
        }

        let missing = |field| LinkShapeError::MissingField { tag, field };
        let web_url = |url: String| {
            if is_web_url(&url) {
                Ok(url)
            } else {
                Err(LinkShapeError::InvalidUrl { tag, url })
            }
        };
        match tag {
            "internal" => Ok(Self::Internal(InternalLink {
                kind: raw.internal_type.ok_or_else(|| missing("internalType"))?,
                document: raw.internal,
                query: raw.query,
                anchor: raw.anchor,
            })),
            "external" => Ok(Self::External {
                url: web_url(raw.external_url.ok_or_else(|| missing("externalUrl"))?)?,
            }),
            _ => {
                let mut download = raw.download.ok_or_else(|| missing("download"))?;
                download.url = download.url.map(web_url).transpose()?;
                Ok(Self::Download(download))
            }
        }
    }
}
