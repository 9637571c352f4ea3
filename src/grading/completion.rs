//! 表单完成度启发式
//!
//! 供应商入驻表单的完成百分比计算，唯一实现，
//! 表单保存与提交预览都走这里，不允许出现第二份公式。

/// 供应商参考业绩行（只保留完成度判定需要的字段）
#[derive(Debug, Clone, Default)]
pub struct ReferenceSnapshot {
    pub company_name: String,
    pub po_date: String,
}

/// 联系人行
#[derive(Debug, Clone, Default)]
pub struct ContactSnapshot {
    pub name: String,
    pub email: String,
}

/// 资质文件条目，attached_files 为 files 表中挂接的文件数
#[derive(Debug, Clone, Default)]
pub struct DocumentSnapshot {
    pub attached_files: u32,
}

/// 表单完成度计算输入的归一化快照
///
/// 由存储层从 vendor 行与子表组装，字段顺序与表单分区一致。
#[derive(Debug, Clone, Default)]
pub struct VendorFormSnapshot {
    // 公司基本信息（7 个必填文本字段）
    pub company_name: String,
    pub legal_status: String,
    pub registration_number: String,
    pub gst_number: String,
    pub pan_number: String,
    pub contact_email: String,
    pub contact_phone: String,
    // 注册地址（4 个字段）
    pub address_line1: String,
    pub pin_code: String,
    pub district: String,
    pub state: String,
    // 近四个财年营业额
    pub turnover_fy1: f64,
    pub turnover_fy2: f64,
    pub turnover_fy3: f64,
    pub turnover_fy4: f64,
    // 银行信息（4 个字段）
    pub bank_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub branch: String,
    pub references: Vec<ReferenceSnapshot>,
    pub contacts: Vec<ContactSnapshot>,
    pub documents: Vec<DocumentSnapshot>,
}

fn filled_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 计算表单完成百分比（0..=100）
///
/// 文本字段按去空白后非空计 1 分；营业额按大于 0 计 1 分；
/// 参考业绩固定 3 分，公司名与 PO 日期都非空的行各计 1 分，封顶 3；
/// 联系人固定 1 分，存在姓名与邮箱都非空的行即得；
/// 文件固定 5 分，每个挂有至少一个文件的条目计 1 分，封顶 5。
/// 分母为 0 时返回 0。提交动作不走本公式，直接置 100。
pub fn compute_completion(form: &VendorFormSnapshot) -> u8 {
    let mut filled = 0u32;
    let mut total = 0u32;

    let text_fields = [
        &form.company_name,
        &form.legal_status,
        &form.registration_number,
        &form.gst_number,
        &form.pan_number,
        &form.contact_email,
        &form.contact_phone,
        &form.address_line1,
        &form.pin_code,
        &form.district,
        &form.state,
        &form.bank_name,
        &form.account_number,
        &form.ifsc_code,
        &form.branch,
    ];
    for field in text_fields {
        total += 1;
        if filled_text(field) {
            filled += 1;
        }
    }

    for turnover in [
        form.turnover_fy1,
        form.turnover_fy2,
        form.turnover_fy3,
        form.turnover_fy4,
    ] {
        total += 1;
        if turnover > 0.0 {
            filled += 1;
        }
    }

    total += 3;
    let complete_references = form
        .references
        .iter()
        .filter(|r| filled_text(&r.company_name) && filled_text(&r.po_date))
        .count()
        .min(3) as u32;
    filled += complete_references;

    total += 1;
    if form
        .contacts
        .iter()
        .any(|c| filled_text(&c.name) && filled_text(&c.email))
    {
        filled += 1;
    }

    total += 5;
    let attached_documents = form
        .documents
        .iter()
        .filter(|d| d.attached_files > 0)
        .count()
        .min(5) as u32;
    filled += attached_documents;

    if total == 0 {
        return 0;
    }
    ((filled as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> VendorFormSnapshot {
        VendorFormSnapshot {
            company_name: "宏远建设集团".to_string(),
            legal_status: "有限责任公司".to_string(),
            registration_number: "91310000MA1FL0000X".to_string(),
            gst_number: "GST-2024-001".to_string(),
            pan_number: "PAN-88421".to_string(),
            contact_email: "vendor@example.com".to_string(),
            contact_phone: "13800000000".to_string(),
            address_line1: "工业园区 88 号".to_string(),
            pin_code: "200120".to_string(),
            district: "浦东新区".to_string(),
            state: "上海".to_string(),
            turnover_fy1: 1200.0,
            turnover_fy2: 1350.0,
            turnover_fy3: 1500.0,
            turnover_fy4: 1800.0,
            bank_name: "建设银行".to_string(),
            account_number: "6222020000000000".to_string(),
            ifsc_code: "CCB0001234".to_string(),
            branch: "浦东支行".to_string(),
            references: vec![
                ReferenceSnapshot {
                    company_name: "甲方一".to_string(),
                    po_date: "2023-04-01".to_string(),
                },
                ReferenceSnapshot {
                    company_name: "甲方二".to_string(),
                    po_date: "2023-09-15".to_string(),
                },
                ReferenceSnapshot {
                    company_name: "甲方三".to_string(),
                    po_date: "2024-02-20".to_string(),
                },
            ],
            contacts: vec![ContactSnapshot {
                name: "王工".to_string(),
                email: "wang@example.com".to_string(),
            }],
            documents: vec![DocumentSnapshot { attached_files: 1 }; 5],
        }
    }

    #[test]
    fn test_empty_form_is_zero() {
        assert_eq!(compute_completion(&VendorFormSnapshot::default()), 0);
    }

    #[test]
    fn test_full_form_is_100() {
        assert_eq!(compute_completion(&full_form()), 100);
    }

    #[test]
    fn test_whitespace_only_text_not_counted() {
        let mut form = VendorFormSnapshot::default();
        form.company_name = "   ".to_string();
        assert_eq!(compute_completion(&form), 0);
    }

    #[test]
    fn test_references_capped_at_three() {
        let mut form = full_form();
        form.references.push(ReferenceSnapshot {
            company_name: "甲方四".to_string(),
            po_date: "2024-06-01".to_string(),
        });
        assert_eq!(compute_completion(&form), 100);
    }

    #[test]
    fn test_reference_requires_both_fields() {
        let mut form = full_form();
        // 缺 PO 日期的参考业绩行不计分
        form.references[2].po_date = String::new();
        // 28 项中填了 27 项，round(27/28*100) = 96
        assert_eq!(compute_completion(&form), 96);
    }

    #[test]
    fn test_contact_needs_name_and_email() {
        let mut form = full_form();
        form.contacts = vec![ContactSnapshot {
            name: "李工".to_string(),
            email: String::new(),
        }];
        assert_eq!(compute_completion(&form), 96);
    }

    #[test]
    fn test_documents_capped_at_five() {
        let mut form = full_form();
        form.documents = vec![DocumentSnapshot { attached_files: 2 }; 8];
        assert_eq!(compute_completion(&form), 100);
    }

    #[test]
    fn test_document_without_files_not_counted() {
        let mut form = full_form();
        form.documents = vec![
            DocumentSnapshot { attached_files: 1 },
            DocumentSnapshot { attached_files: 0 },
        ];
        // 文件 5 分里只得 1 分：round(24/28*100) = 86
        assert_eq!(compute_completion(&form), 86);
    }

    #[test]
    fn test_turnover_zero_not_counted() {
        let mut form = full_form();
        form.turnover_fy4 = 0.0;
        assert_eq!(compute_completion(&form), 96);
    }

    #[test]
    fn test_partial_form_rounds() {
        let mut form = VendorFormSnapshot::default();
        form.company_name = "测试公司".to_string();
        form.contact_email = "a@b.c".to_string();
        // round(2/28*100) = 7
        assert_eq!(compute_completion(&form), 7);
    }
}
