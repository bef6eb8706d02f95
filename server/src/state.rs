use bytes::Bytes;
use upcheck_common::version::VersionInfo;

#[derive(Clone)]
pub(crate) struct AppState {
    /// `VersionInfo` rendered once; every response shares these bytes.
    pub(crate) body: Bytes,
}

impl AppState {
    pub(crate) fn new(info: &VersionInfo) -> anyhow::Result<Self> {
        let body = serde_json::to_vec(info)?;
        Ok(Self {
            body: Bytes::from(body),
        })
    }
}
