//! PDF 表单文档 - 基础设施层
//!
//! 持有唯一的 lopdf Document 资源，只暴露"遍历控件 / 写入字段值 / 保存"的能力

use crate::error::{AppError, AppResult};
use lopdf::{Document, Object, ObjectId};
use std::path::{Path, PathBuf};

/// PDF 表单文档
///
/// 职责：
/// - 持有唯一的 Document 资源
/// - 暴露第一页控件遍历和字段写入能力
/// - 不认识 Record / 周期
/// - 不处理业务流程
pub struct FormDocument {
    doc: Document,
    path: PathBuf,
}

impl FormDocument {
    /// 加载 PDF 文件
    ///
    /// 解析错误原样返回，由调用方归入读取或写出分类
    pub fn load(path: &Path) -> Result<Self, lopdf::Error> {
        let doc = Document::load(path)?;
        Ok(Self {
            doc,
            path: path.to_path_buf(),
        })
    }

    /// 第一页上全部控件字段，保持注释列表中的出现顺序
    ///
    /// 只收 `/Subtype /Widget` 且 `/T` 非空的注释，
    /// 返回 (对象编号, 原始名称字节)
    pub fn widget_fields(&self) -> AppResult<Vec<(ObjectId, Vec<u8>)>> {
        let page_id = self
            .doc
            .get_pages()
            .values()
            .next()
            .copied()
            .ok_or_else(|| AppError::form_read_missing_first_page(&self.path))?;

        let page_dict = self
            .doc
            .get_object(page_id)
            .ok()
            .and_then(|obj| obj.as_dict().ok())
            .ok_or_else(|| AppError::form_read_missing_first_page(&self.path))?;

        let annots_obj = page_dict
            .get(b"Annots")
            .map_err(|_| AppError::form_read_missing_annotations(&self.path))?;

        // 注释列表可能是直接数组，也可能是指向数组的引用
        let annots_resolved = match annots_obj {
            Object::Reference(ref_id) => self
                .doc
                .get_object(*ref_id)
                .map_err(|_| AppError::form_read_missing_annotations(&self.path))?,
            obj => obj,
        };

        let annots = annots_resolved
            .as_array()
            .map_err(|_| AppError::form_read_missing_annotations(&self.path))?;

        let mut fields = Vec::new();

        for annot_ref in annots {
            // AcroForm 控件以间接对象形式挂在注释列表上
            let annot_id = match annot_ref {
                Object::Reference(id) => *id,
                _ => continue,
            };

            let dict = match self.doc.get_object(annot_id).ok().and_then(|o| o.as_dict().ok()) {
                Some(d) => d,
                None => continue,
            };

            match dict.get(b"Subtype") {
                Ok(Object::Name(subtype)) if subtype.as_slice() == b"Widget" => {}
                _ => continue,
            }

            match dict.get(b"T") {
                Ok(Object::String(name, _)) if !name.is_empty() => {
                    fields.push((annot_id, name.clone()));
                }
                _ => continue,
            }
        }

        Ok(fields)
    }

    /// 把字段值写入控件的 `/V`
    ///
    /// 返回是否写入成功（对象已不是字典时跳过）
    pub fn set_field_value(&mut self, annot_id: ObjectId, value: &str) -> bool {
        let dict = match self
            .doc
            .get_object_mut(annot_id)
            .ok()
            .and_then(|o| o.as_dict_mut().ok())
        {
            Some(d) => d,
            None => return false,
        };

        dict.set("V", Object::string_literal(value));
        true
    }

    /// 保存到目标路径
    pub fn save(&mut self, output_path: &Path) -> AppResult<()> {
        self.doc
            .save(output_path)
            .map_err(|e| AppError::form_write_save_failed(output_path, e))?;
        Ok(())
    }
}
