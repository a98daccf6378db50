use serde::{ Deserialize, Serialize };

/// Scheme every editor NFT url starts with
pub const NFT_URL_PREFIX: &str = "ethereum://";

/// Tint applied to NFT frames recovered from url-only editor payloads
pub const DEFAULT_NFT_COLOR: Color = Color { r: 0.6404918, g: 0.611472, b: 0.8584906, a: 1.0 };
pub const DEFAULT_NFT_STYLE: u32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        DEFAULT_NFT_COLOR
    }
}

/// Imported 3D model, identified by its catalog asset id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GltfShapeData {
    pub asset_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl GltfShapeData {
    pub fn new(asset_id: &str) -> Self {
        Self {
            asset_id: asset_id.to_string(),
            src: None,
        }
    }
}

/// Runtime shape of an NFT picture frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftShapeData {
    pub src: String,
    pub asset_id: String,
    pub color: Color,
    pub style: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NftShapeData {
    /// Frame pointing at `src` with the default tint and style
    pub fn from_src(src: &str) -> Self {
        Self {
            src: src.to_string(),
            asset_id: asset_id_from_nft_url(src),
            color: DEFAULT_NFT_COLOR,
            style: DEFAULT_NFT_STYLE,
            url: None,
        }
    }
}

/// Editor shape of an NFT picture frame. Older editor payloads only carry `url`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestNftShapeData {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<u32>,
}

impl ManifestNftShapeData {
    pub fn from_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
            src: None,
            asset_id: None,
            color: None,
            style: None,
        }
    }
}

/// Asset id encoded in an NFT url: the part between the scheme and the first `/`.
///
/// A url without the scheme or without a separator yields whatever is left; it
/// is never rejected.
pub fn asset_id_from_nft_url(url: &str) -> String {
    let rest = url.strip_prefix(NFT_URL_PREFIX).unwrap_or(url);
    match rest.find('/') {
        Some(idx) => rest[..idx].to_string(),
        None => rest.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_id_is_the_contract_segment() {
        assert_eq!(
            asset_id_from_nft_url("ethereum://0x06012c8cf97bead5deae237070f9587f8e7a266d/558536"),
            "0x06012c8cf97bead5deae237070f9587f8e7a266d"
        );
    }

    #[test]
    fn malformed_urls_pass_through() {
        assert_eq!(asset_id_from_nft_url("ethereum://0xabc"), "0xabc");
        assert_eq!(asset_id_from_nft_url("0xabc/12"), "0xabc");
        assert_eq!(asset_id_from_nft_url(""), "");
    }

    #[test]
    fn manifest_nft_omits_missing_fields() {
        let json = serde_json::to_value(ManifestNftShapeData::from_url("ethereum://0x1/2")).unwrap();
        assert_eq!(json, serde_json::json!({ "url": "ethereum://0x1/2" }));
    }
}
