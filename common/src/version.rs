use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Version metadata advertised to clients. Field order is the wire order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: Cow<'static, str>,
    pub update_url: Cow<'static, str>,
    pub force_update: bool,
    /// Line breaks are the two characters `\` and `n`, not a newline.
    pub update_msg: Cow<'static, str>,
}

pub const LATEST: VersionInfo = VersionInfo {
    version: Cow::Borrowed("1.0.1"),
    update_url: Cow::Borrowed("https://blog.biekanle.com/software/1255.html"),
    force_update: false,
    update_msg: Cow::Borrowed("新版本更新内容：\\n1. 修复已知bug\\n2. 优化用户体验"),
};

impl VersionInfo {
    /// Update message with the escaped line breaks expanded.
    pub fn display_msg(&self) -> String {
        self.update_msg.replace("\\n", "\n")
    }
}
