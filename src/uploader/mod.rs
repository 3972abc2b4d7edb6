//! Off-chain metadata documents and the store that hosts them.
//!
//! The on-chain metadata record only carries a URI; the document behind
//! that URI is assembled here and pushed to a [`MetadataStore`].

pub mod pinata;

use crate::error::LaunchpadError;
use serde::Serialize;

pub use pinata::PinataClient;

/// Descriptive token fields collected from the launch form.
#[derive(Debug, Clone, Default)]
pub struct TokenProfile {
    pub name: String,
    pub symbol: String,
    pub description: String,
    /// Total supply, echoed into the document for explorers.
    pub supply: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
}

/// The JSON document wallets and explorers fetch from the metadata URI.
#[derive(Debug, Serialize)]
pub struct TokenMetadataDocument {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    pub seller_fee_basis_points: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    pub properties: Properties,
}

#[derive(Debug, Serialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct Properties {
    pub files: Vec<FileEntry>,
    pub category: String,
    pub creators: Vec<DocumentCreator>,
}

#[derive(Debug, Serialize)]
pub struct FileEntry {
    pub uri: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentCreator {
    pub address: String,
    pub share: u8,
}

impl TokenMetadataDocument {
    /// Assemble the document for a profile whose image is already hosted at
    /// `image_uri`. The creator address is the launch payer.
    pub fn new(profile: &TokenProfile, image_uri: &str, creator_address: &str) -> Self {
        let links: Vec<Link> = [
            ("website", &profile.website),
            ("twitter", &profile.twitter),
            ("telegram", &profile.telegram),
        ]
        .into_iter()
        .filter_map(|(name, url)| {
            url.as_ref().map(|url| Link {
                name: name.to_string(),
                url: url.clone(),
            })
        })
        .collect();

        Self {
            name: profile.name.clone(),
            symbol: profile.symbol.clone(),
            description: profile.description.clone(),
            image: image_uri.to_string(),
            external_url: profile.website.clone(),
            seller_fee_basis_points: 0,
            supply: profile.supply.clone(),
            links: (!links.is_empty()).then_some(links),
            properties: Properties {
                files: vec![FileEntry {
                    uri: image_uri.to_string(),
                    content_type: "image/png".to_string(),
                }],
                category: "token".to_string(),
                creators: vec![DocumentCreator {
                    address: creator_address.to_string(),
                    share: 100,
                }],
            },
        }
    }
}

/// An off-chain store for token assets and metadata documents.
#[allow(async_fn_in_trait)]
pub trait MetadataStore {
    /// Host a binary asset (the token image). Returns a public URI.
    async fn upload_asset(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, LaunchpadError>;

    /// Host a metadata document. Returns a public URI.
    async fn upload_json(
        &self,
        document: &TokenMetadataDocument,
    ) -> Result<String, LaunchpadError>;
}

/// Upload the token image and its metadata document; returns the document
/// URI to embed in the on-chain record.
pub async fn upload_token_metadata<S: MetadataStore>(
    store: &S,
    profile: &TokenProfile,
    image: Vec<u8>,
    image_content_type: &str,
    creator_address: &str,
) -> Result<String, LaunchpadError> {
    let image_uri = store.upload_asset(image, image_content_type).await?;
    let document = TokenMetadataDocument::new(profile, &image_uri, creator_address);
    store.upload_json(&document).await
}

/// Like [`upload_token_metadata`], but a store failure downgrades to `None`
/// with a warning instead of aborting the launch. A token without metadata
/// is still a valid token.
pub async fn upload_or_skip<S: MetadataStore>(
    store: &S,
    profile: &TokenProfile,
    image: Vec<u8>,
    image_content_type: &str,
    creator_address: &str,
) -> Option<String> {
    match upload_token_metadata(store, profile, image, image_content_type, creator_address).await {
        Ok(uri) => Some(uri),
        Err(err) => {
            log::warn!("metadata upload skipped: {}", err);
            None
        }
    }
}
