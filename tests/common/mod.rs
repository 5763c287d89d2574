#![allow(dead_code)]

//! 测试共用工具：用 lopdf 现造带 AcroForm 控件的单页模板

use lopdf::{dictionary, Document, Object};
use std::path::{Path, PathBuf};

/// 生成一个单页模板，第一页注释列表按给定顺序挂控件
///
/// 每个名称字节串对应一个 `/Subtype /Widget` 的文本控件
pub fn build_template(names: &[Vec<u8>]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut annot_refs = Vec::new();
    for (i, name) in names.iter().enumerate() {
        let y = 760 - (i as i64 % 70) * 10;
        let annot_id = doc.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Widget",
            "FT" => "Tx",
            "T" => Object::String(name.clone(), lopdf::StringFormat::Literal),
            "Rect" => vec![
                50.into(),
                y.into(),
                250.into(),
                (y + 12).into(),
            ],
        });
        annot_refs.push(Object::Reference(annot_id));
    }

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Resources" => Object::Reference(resources_id),
        "Annots" => Object::Array(annot_refs),
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc
}

/// 把模板写到目录里，返回路径
pub fn write_template(dir: &Path, file_name: &str, names: &[Vec<u8>]) -> PathBuf {
    let path = dir.join(file_name);
    build_template(names).save(&path).expect("写出测试模板失败");
    path
}

/// 写一个第一页没有注释列表的 PDF
pub fn write_blank_page_pdf(dir: &Path, file_name: &str) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let path = dir.join(file_name);
    doc.save(&path).expect("写出测试 PDF 失败");
    path
}

/// ASCII 名称列表 → 原始字节
pub fn raw_names(names: &[&str]) -> Vec<Vec<u8>> {
    names.iter().map(|n| n.as_bytes().to_vec()).collect()
}

/// 带 UTF-16BE BOM 的名称字节
pub fn utf16be_name(name: &str) -> Vec<u8> {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in name.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}

/// 2016 版 f1040ez 布局的 59 个字段标识符
///
/// 角色位置上放真实表单里的 f1_xx 标识符，其余位置用 c1_xx 占位
pub fn f1040ez_field_names() -> Vec<String> {
    let named: &[(usize, &str)] = &[
        (0, "f1_10"),
        (1, "f1_20"),
        (2, "f1_30"),
        (6, "f1_60"),
        (7, "f1_70"),
        (8, "f1_80"),
        (14, "f1_120"),
        (16, "f1_140"),
        (18, "f1_160"),
        (20, "f1_180"),
        (24, "f1_220"),
        (26, "f1_300"),
        (28, "f1_320"),
        (30, "f1_330"),
        (34, "f1_260"),
        (36, "f1_240"),
        (39, "f1_350"),
        (41, "f1_360"),
        (44, "f1_380"),
        (46, "f1_440"),
        (49, "f1_450"),
        (50, "f1_420"),
        (57, "f1_470"),
        (58, "f1_480"),
    ];

    let mut names: Vec<String> = (0..59).map(|i| format!("c1_{:02}", i)).collect();
    for (position, name) in named {
        names[*position] = (*name).to_string();
    }
    names
}

/// f1040ez 布局名称的原始字节形式
pub fn f1040ez_raw_names() -> Vec<Vec<u8>> {
    f1040ez_field_names()
        .iter()
        .map(|n| n.as_bytes().to_vec())
        .collect()
}
