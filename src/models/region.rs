use serde::{Deserialize, Serialize};

/// Level in the Korean administrative hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionLevel {
    /// 시/도
    Sido,
    /// 시/군/구
    Sigungu,
    /// 읍/면/동
    Dong,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Administrative code, e.g. "11" for Seoul.
    pub code: String,
    pub name: String,
    pub level: RegionLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
}

/// A sido together with the number of places listed under it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionCount {
    pub sido: String,
    pub count: usize,
}
