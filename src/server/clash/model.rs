use serde::Deserialize;

/// Subset of the `GET /players/{tag}` response the server reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClashPlayer {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub exp_level: Option<i32>,
    #[serde(default)]
    pub trophies: Option<i32>,
}
