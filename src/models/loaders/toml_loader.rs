use crate::models::profile::FormProfile;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载字段角色配置
///
/// 文件中缺省的键落回内置 f1040ez 布局
pub async fn load_profile_from_toml(toml_file_path: &Path) -> Result<FormProfile> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let profile: FormProfile = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    Ok(profile)
}
