//! Downloadable import templates
//!
//! Generated with a UTF-8 byte-order mark so spreadsheet tools read the
//! Thai sample text correctly, plus two illustrative rows each.

const BOM: &str = "\u{feff}";

/// Product import template.
pub fn products_template() -> String {
    let mut out = String::from(BOM);
    out.push_str("p_id,name,category,brand,model,price,unit,quantity,description,notes,image_url\n");
    out.push_str(",โน้ตบุ๊ก Latitude 5440,Information Technology (IT),Dell,Latitude 5440,35900,เครื่อง,2,สำหรับพนักงานใหม่,,\n");
    out.push_str("FN-0001,เก้าอี้สำนักงาน,Furniture (FN),Ergotrend,Dual-08,4500,ตัว,10,,ล็อตจัดซื้อปี 2568,\n");
    out
}

/// Employee import template.
pub fn employees_template() -> String {
    let mut out = String::from(BOM);
    out.push_str("emp_code,name,nickname,department,gender,location,email,tel\n");
    out.push_str("EMP-001,สมชาย ใจดี,ชาย,Information Technology (IT),M,สำนักงานใหญ่,somchai@example.co.th,081-234-5678\n");
    out.push_str("EMP-002,สมหญิง รักงาน,หญิง,Human Resources (HR),F,สาขาเชียงใหม่,somying@example.co.th,\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_carry_bom_and_samples() {
        for template in [products_template(), employees_template()] {
            assert!(template.starts_with('\u{feff}'));
            // header + two sample rows
            assert_eq!(template.trim_end().lines().count(), 3);
        }
    }

    #[test]
    fn test_product_template_headers_match_recognized_columns() {
        let template = products_template();
        let header = template.trim_start_matches('\u{feff}').lines().next().unwrap();
        assert_eq!(
            header,
            "p_id,name,category,brand,model,price,unit,quantity,description,notes,image_url"
        );
    }
}
