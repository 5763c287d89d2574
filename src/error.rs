use std::fmt;
use std::path::Path;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 配置错误（启动前检查）
    Config(ConfigError),
    /// 读取 PDF 表单错误
    FormRead(FormReadError),
    /// 写出 PDF 表单错误
    FormWrite(FormWriteError),
    /// CSV 序列化错误
    Serialization(SerializationError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::FormRead(e) => write!(f, "表单读取错误: {}", e),
            AppError::FormWrite(e) => write!(f, "表单写出错误: {}", e),
            AppError::Serialization(e) => write!(f, "序列化错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::FormRead(e) => Some(e),
            AppError::FormWrite(e) => Some(e),
            AppError::Serialization(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 配置错误
///
/// 任何一个都会在开始生成之前终止程序
#[derive(Debug)]
pub enum ConfigError {
    /// 模板文件不存在
    TemplateNotFound {
        path: String,
    },
    /// 无法创建输出目录
    OutputDirCreateFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 字段角色配置加载失败
    ProfileLoadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TemplateNotFound { path } => {
                write!(f, "模板文件不存在: {}", path)
            }
            ConfigError::OutputDirCreateFailed { path, source } => {
                write!(f, "无法创建输出目录 ({}): {}", path, source)
            }
            ConfigError::ProfileLoadFailed { path, source } => {
                write!(f, "无法加载字段角色配置 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::OutputDirCreateFailed { source, .. }
            | ConfigError::ProfileLoadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 读取 PDF 表单错误
///
/// 单个周期内被捕获并记录，不影响其他周期
#[derive(Debug)]
pub enum FormReadError {
    /// PDF 解析失败
    ParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// PDF 没有第一页
    MissingFirstPage {
        path: String,
    },
    /// 第一页没有注释列表
    MissingAnnotations {
        path: String,
    },
    /// 提取到的字段数量不足以完成角色绑定
    InsufficientFields {
        required: usize,
        actual: usize,
    },
}

impl fmt::Display for FormReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormReadError::ParseFailed { path, source } => {
                write!(f, "PDF 解析失败 ({}): {}", path, source)
            }
            FormReadError::MissingFirstPage { path } => {
                write!(f, "PDF 没有第一页: {}", path)
            }
            FormReadError::MissingAnnotations { path } => {
                write!(f, "第一页没有注释列表: {}", path)
            }
            FormReadError::InsufficientFields { required, actual } => {
                write!(f, "表单字段数量不足: 需要 {} 个, 实际 {} 个", required, actual)
            }
        }
    }
}

impl std::error::Error for FormReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormReadError::ParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 写出 PDF 表单错误
#[derive(Debug)]
pub enum FormWriteError {
    /// 填表时模板解析失败
    TemplateParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写出填好的 PDF 失败
    SaveFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FormWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormWriteError::TemplateParseFailed { path, source } => {
                write!(f, "填表时模板解析失败 ({}): {}", path, source)
            }
            FormWriteError::SaveFailed { path, source } => {
                write!(f, "写出 PDF 失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for FormWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormWriteError::TemplateParseFailed { source, .. }
            | FormWriteError::SaveFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// CSV 序列化错误
///
/// 在批处理末尾被捕获并记录，不影响退出码
#[derive(Debug)]
pub enum SerializationError {
    /// 写出 CSV 失败
    CsvWriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationError::CsvWriteFailed { path, source } => {
                write!(f, "写出 CSV 失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerializationError::CsvWriteFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建模板缺失错误
    pub fn config_template_not_found(path: &Path) -> Self {
        AppError::Config(ConfigError::TemplateNotFound {
            path: path.display().to_string(),
        })
    }

    /// 创建输出目录创建失败错误
    pub fn config_output_dir_create_failed(
        path: &Path,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Config(ConfigError::OutputDirCreateFailed {
            path: path.display().to_string(),
            source: Box::new(source),
        })
    }

    /// 创建字段角色配置加载失败错误
    pub fn config_profile_load_failed(path: &Path, source: anyhow::Error) -> Self {
        AppError::Config(ConfigError::ProfileLoadFailed {
            path: path.display().to_string(),
            source: source.into(),
        })
    }

    /// 创建 PDF 解析失败错误
    pub fn form_read_parse_failed(
        path: &Path,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::FormRead(FormReadError::ParseFailed {
            path: path.display().to_string(),
            source: Box::new(source),
        })
    }

    /// 创建缺少第一页错误
    pub fn form_read_missing_first_page(path: &Path) -> Self {
        AppError::FormRead(FormReadError::MissingFirstPage {
            path: path.display().to_string(),
        })
    }

    /// 创建缺少注释列表错误
    pub fn form_read_missing_annotations(path: &Path) -> Self {
        AppError::FormRead(FormReadError::MissingAnnotations {
            path: path.display().to_string(),
        })
    }

    /// 创建字段数量不足错误
    pub fn form_read_insufficient_fields(required: usize, actual: usize) -> Self {
        AppError::FormRead(FormReadError::InsufficientFields { required, actual })
    }

    /// 创建填表时模板解析失败错误
    pub fn form_write_template_parse_failed(
        path: &Path,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::FormWrite(FormWriteError::TemplateParseFailed {
            path: path.display().to_string(),
            source: Box::new(source),
        })
    }

    /// 创建 PDF 写出失败错误
    pub fn form_write_save_failed(
        path: &Path,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::FormWrite(FormWriteError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(source),
        })
    }

    /// 创建 CSV 写出失败错误
    pub fn serialization_csv_failed(
        path: &Path,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Serialization(SerializationError::CsvWriteFailed {
            path: path.display().to_string(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
