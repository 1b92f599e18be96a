use crate::document::TokenDocument;
use crate::error::TokenError;
use crate::result::TokenResult;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, instrument};

/// One token family, backed by one document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenDomain {
    Color,
    Font,
    Shape,
    Shadow,
    TypeScale,
}

impl TokenDomain {
    pub const ALL: [TokenDomain; 5] = [
        TokenDomain::Color,
        TokenDomain::Font,
        TokenDomain::Shape,
        TokenDomain::Shadow,
        TokenDomain::TypeScale,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            TokenDomain::Color => "color.json",
            TokenDomain::Font => "font.json",
            TokenDomain::Shape => "shape.json",
            TokenDomain::Shadow => "shadow.json",
            TokenDomain::TypeScale => "typescale.json",
        }
    }
}

impl fmt::Display for TokenDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenDomain::Color => "color",
            TokenDomain::Font => "font",
            TokenDomain::Shape => "shape",
            TokenDomain::Shadow => "shadow",
            TokenDomain::TypeScale => "type-scale",
        };
        f.write_str(name)
    }
}

/// The five documents a stylesheet is compiled from.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSet {
    pub color: TokenDocument,
    pub font: TokenDocument,
    pub shape: TokenDocument,
    pub shadow: TokenDocument,
    pub type_scale: TokenDocument,
}

impl TokenSet {
    /// Load every document from `dir` concurrently. The first failure wins
    /// and nothing is returned.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub async fn load(dir: &Path) -> TokenResult<Self> {
        let (color, font, shape, shadow, type_scale) = tokio::try_join!(
            load_document(dir, TokenDomain::Color),
            load_document(dir, TokenDomain::Font),
            load_document(dir, TokenDomain::Shape),
            load_document(dir, TokenDomain::Shadow),
            load_document(dir, TokenDomain::TypeScale),
        )?;

        info!(documents = TokenDomain::ALL.len(), "Loaded token documents");

        Ok(Self {
            color,
            font,
            shape,
            shadow,
            type_scale,
        })
    }

    pub fn document(&self, domain: TokenDomain) -> &TokenDocument {
        match domain {
            TokenDomain::Color => &self.color,
            TokenDomain::Font => &self.font,
            TokenDomain::Shape => &self.shape,
            TokenDomain::Shadow => &self.shadow,
            TokenDomain::TypeScale => &self.type_scale,
        }
    }
}

/// Read and parse the document for `domain` from `dir`.
#[instrument(skip(dir), fields(file = domain.file_name()))]
pub async fn load_document(dir: &Path, domain: TokenDomain) -> TokenResult<TokenDocument> {
    let path = dir.join(domain.file_name());
    let origin = path.display().to_string();

    let source = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| TokenError::Read {
            path: origin.clone(),
            source,
        })?;

    let document = TokenDocument::parse(&source, &origin)?;
    debug!(path = %origin, bytes = source.len(), "Loaded token document");
    Ok(document)
}
